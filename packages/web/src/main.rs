use dioxus::prelude::*;

use store::DashboardConfig;
use ui::components::ToastProvider;
use ui::DashboardProvider;
use views::{
    AddPlant, DashboardHome, DashboardShell, EditPlant, ForgotPassword, Login, NotFound, Plants,
    Profile, Register, ResetPassword, VerifyCode, VerifyEmail,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/verify-code?:email")]
    VerifyCode { email: String },
    #[route("/reset-password?:email")]
    ResetPassword { email: String },
    #[route("/verify-email/:token")]
    VerifyEmail { token: String },
    #[layout(DashboardShell)]
        #[route("/dashboard")]
        DashboardHome {},
        #[route("/dashboard/plants")]
        Plants {},
        #[route("/dashboard/plants/new")]
        AddPlant {},
        #[route("/dashboard/plants/:id/edit")]
        EditPlant { id: String },
        #[route("/dashboard/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Compiled-in `dashboard.toml`.
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| DashboardConfig::from_toml_or_default(DASHBOARD_TOML));

    rsx! {
        // Global app resources
        document::Stylesheet { href: ui::THEME_CSS }
        document::Stylesheet { href: MAIN_CSS }

        DashboardProvider {
            config,
            ToastProvider { Router::<Route> {} }
        }
    }
}

/// Redirect `/` to the dashboard; the shell sends anonymous visitors on to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::DashboardHome {});
    rsx! {}
}
