use api::UserProfile;
use dioxus::prelude::*;
use ui::components::{use_toast, FormAlert};
use ui::icons::{FaCircleCheck, FaCircleXmark};
use ui::{notify, use_api, use_session, Icon, Level};

#[derive(Clone, Debug, PartialEq)]
struct ProfilePage {
    me: UserProfile,
    /// Every account. Only fetched for admins.
    users: Option<Vec<UserProfile>>,
}

/// The signed-in account, plus the user directory for admins.
#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();

    let page = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(token) = session.token() else {
                return Err("Not signed in".to_string());
            };
            let me = match api.profile(&token).await {
                Ok(me) => me,
                Err(e) => {
                    session.absorb(&e);
                    let message = e.user_message("Failed to load profile");
                    notify(&toasts, Level::Error, &message);
                    return Err(message);
                }
            };
            let users = if me.is_admin() {
                match api.list_users(&token).await {
                    Ok(users) => Some(users),
                    Err(e) => {
                        session.absorb(&e);
                        let message = e.user_message("Failed to load users");
                        notify(&toasts, Level::Warning, &message);
                        None
                    }
                }
            } else {
                None
            };
            Ok(ProfilePage { me, users })
        }
    });

    let body = match page.read().clone() {
        None => rsx! {
            div { class: "page-loading",
                span { class: "spinner" }
                "Loading profile..."
            }
        },
        Some(Err(message)) => rsx! {
            FormAlert { level: Level::Error, message }
        },
        Some(Ok(ProfilePage { me, users })) => rsx! {
            ProfileCard { profile: me }
            if let Some(users) = users {
                UserTable { users }
            }
        },
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Profile" }
            }
            {body}
        }
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> Element {
    let name = profile.display_name().to_string();
    let role = profile.role.as_str();
    let joined = profile.created_on();
    let initial: String = name.chars().take(1).flat_map(char::to_uppercase).collect();

    rsx! {
        div { class: "card profile-card",
            div { class: "avatar", "{initial}" }
            dl { class: "profile-fields",
                dt { "Username" }
                dd { "{name}" }
                dt { "Email" }
                dd { "{profile.email}" }
                dt { "Role" }
                dd { span { class: "badge", "{role}" } }
                dt { "Verified" }
                dd { VerifiedMark { verified: profile.is_verified } }
                if !joined.is_empty() {
                    dt { "Member since" }
                    dd { "{joined}" }
                }
            }
        }
    }
}

#[component]
fn UserTable(users: Vec<UserProfile>) -> Element {
    let count = users.len();
    rsx! {
        section { class: "card",
            h2 { "All users ({count})" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Email" }
                        th { "Role" }
                        th { "Verified" }
                        th { "Created" }
                    }
                }
                tbody {
                    for user in users {
                        tr { key: "{user.id}{user.email}",
                            td { "{user.user_name}" }
                            td { "{user.email}" }
                            td { span { class: "badge", {user.role.as_str()} } }
                            td { VerifiedMark { verified: user.is_verified } }
                            td { {user.created_on()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VerifiedMark(verified: bool) -> Element {
    if verified {
        rsx! {
            span { class: "verified yes",
                Icon { icon: FaCircleCheck, width: 14, height: 14 }
                " Yes"
            }
        }
    } else {
        rsx! {
            span { class: "verified no",
                Icon { icon: FaCircleXmark, width: 14, height: 14 }
                " No"
            }
        }
    }
}
