use dioxus::prelude::*;
use ui::{sleep_ms, FormState};

use crate::Route;

mod auth_card;
pub use auth_card::AuthCard;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod verify_code;
pub use verify_code::VerifyCode;

mod reset_password;
pub use reset_password::ResetPassword;

mod verify_email;
pub use verify_email::VerifyEmail;

mod shell;
pub use shell::DashboardShell;

mod home;
pub use home::DashboardHome;

mod plants;
pub use plants::Plants;

mod plant_form;
pub use plant_form::PlantFields;

mod add_plant;
pub use add_plant::AddPlant;

mod edit_plant;
pub use edit_plant::EditPlant;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;

/// Visible validation message for `name`.
pub(crate) fn field_error(form: Signal<FormState>, name: &str) -> Option<String> {
    form.read().error(name).map(str::to_string)
}

/// Wait out the confirmation delay, then go to `route`.
pub(crate) async fn navigate_after(delay_ms: u64, nav: Navigator, route: Route) {
    sleep_ms(delay_ms).await;
    nav.push(route);
}
