//! This crate contains all shared UI for the workspace: contexts, form logic,
//! and components that do not depend on the route table.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod vault;
pub use vault::{make_vault, PlatformStore};

mod session;
pub use session::{use_session, Access, Session, SessionProvider, SessionState};

mod provider;
pub use provider::{use_api, use_config, DashboardProvider};

pub mod notifications;
pub use notifications::{notify, Level};

pub mod form;
pub use form::FormState;

pub mod phase;
pub use phase::SubmitPhase;

pub mod schemas;

pub mod otp;
pub use otp::{OtpCode, OtpInput};

mod plant_list;
pub use plant_list::PlantList;

mod image;
pub use image::{ImagePolicy, ImageSelection};

mod image_picker;
pub use image_picker::ImagePicker;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod single_flight;
pub use single_flight::{use_single_flight, SingleFlight};

mod timer;
pub use timer::sleep_ms;
