//! # API crate: typed client for the Green World plant-catalog service
//!
//! This crate is everything the dashboard knows about the remote HTTP API. The
//! UI never builds a URL or reads a JSON field itself; it calls a method on
//! [`ApiClient`] and gets back a model or an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session token type, header conventions, and the account endpoints (login, signup, OTP, reset, profile, users) |
//! | [`plants`] | Plant catalog endpoints (list, get, add, update, delete) |
//! | [`client`] | [`ApiClient`]: base URL, request building, response classification |
//! | [`envelope`] | The `{ success, message, data, token }` response wrapper |
//! | [`error`] | [`ApiError`], the single error taxonomy surfaced to views |
//! | [`models`] | Plant and user records plus their enumerations |
//!
//! ## Auth header conventions
//!
//! Plant endpoints expect the raw token in a custom `token` header. Profile
//! endpoints expect `Authorization: Bearer <token>`. The endpoint methods pick
//! the right one; callers only hand over a [`Token`].

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod plants;

pub use auth::{Acknowledged, SignupOutcome, SignupRequest, Token};
pub use client::ApiClient;
pub use envelope::Envelope;
pub use error::ApiError;
pub use models::{
    Category, ImageUpload, Plant, PlantDraft, PlantId, PlantImage, Role, SoilType,
    TemperatureRange, UserProfile, WateringFrequency,
};
