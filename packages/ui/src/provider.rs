//! Application-wide contexts.

use api::ApiClient;
use dioxus::prelude::*;
use store::DashboardConfig;

use crate::session::SessionProvider;

/// Get the dashboard configuration.
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Get the HTTP client for the catalog API.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provides the configuration, the API client and the session.
/// Wrap the router with this component.
#[component]
pub fn DashboardProvider(config: DashboardConfig, children: Element) -> Element {
    use_context_provider(|| {
        let client = ApiClient::from_config(&config);
        tracing::info!("Using catalog API at {}", client.base_url());
        client
    });
    use_context_provider(|| config);

    rsx! {
        SessionProvider {
            {children}
        }
    }
}
