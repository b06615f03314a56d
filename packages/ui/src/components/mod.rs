//! Form building blocks shared by every screen.
//!
//! The directory-per-component modules follow the dioxus component registry
//! layout; toasts and the alert dialog wrap `dioxus-primitives`.

mod alert_dialog;
pub use alert_dialog::*;

mod button;
pub use button::*;

mod input;
pub use input::*;

mod label;
pub use label::*;

mod toast;
pub use toast::*;

mod field;
pub use field::{FieldError, FormAlert, SelectField, TextAreaField, TextField};
