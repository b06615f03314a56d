use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant};
use ui::icons::{FaHouse, FaLeaf, FaPlus, FaRightFromBracket, FaUser};
use ui::{notify, use_session, Access, Icon, Level};

use crate::Route;

/// Layout of every `/dashboard` route.
///
/// Holds the route guard: nothing below renders until the stored session has
/// been read, and an anonymous visitor is sent to login.
#[component]
pub fn DashboardShell() -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let nav = use_navigator();

    match session.access() {
        Access::Pending => {
            return rsx! {
                div { class: "shell-loading",
                    span { class: "spinner" }
                    "Loading..."
                }
            };
        }
        Access::Anonymous => {
            tracing::debug!("No session, redirecting to login");
            nav.replace(Route::Login {});
            return rsx! {};
        }
        Access::Authenticated => {}
    }

    let on_logout = move |_: MouseEvent| {
        session.sign_out();
        notify(&toasts, Level::Info, "Logged out");
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "shell",
            aside { class: "shell-sidebar",
                div { class: "shell-brand",
                    Icon { icon: FaLeaf, width: 20, height: 20 }
                    span { "Green World" }
                }
                nav { class: "shell-nav",
                    Link {
                        class: "shell-link",
                        active_class: "active",
                        to: Route::DashboardHome {},
                        Icon { icon: FaHouse, width: 16, height: 16 }
                        span { "Overview" }
                    }
                    Link {
                        class: "shell-link",
                        active_class: "active",
                        to: Route::Plants {},
                        Icon { icon: FaLeaf, width: 16, height: 16 }
                        span { "Plants" }
                    }
                    Link {
                        class: "shell-link",
                        active_class: "active",
                        to: Route::AddPlant {},
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        span { "Add plant" }
                    }
                    Link {
                        class: "shell-link",
                        active_class: "active",
                        to: Route::Profile {},
                        Icon { icon: FaUser, width: 16, height: 16 }
                        span { "Profile" }
                    }
                }
                div { class: "shell-footer",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "shell-logout",
                        onclick: on_logout,
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }
            main { class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
