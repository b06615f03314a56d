//! Data models exchanged with the catalog service.

mod plant;
mod user;

pub use plant::{
    Category, ImageUpload, Plant, PlantDraft, PlantId, PlantImage, SoilType, TemperatureRange,
    WateringFrequency,
};
pub use user::{Role, UserProfile};
