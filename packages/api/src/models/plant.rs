//! # Plant catalog models
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`PlantId`] | The opaque 24-hex-character record id. Built by [`PlantId::parse`], and decoding goes through the same check, so a malformed id can never reach the network. |
//! | [`Plant`] | A record as listed/fetched from the service (`_id`, `Image.secure_url`, ...). |
//! | [`PlantDraft`] | The validated field set the add/update forms submit. |
//! | [`ImageUpload`] | An image file picked in the browser, ready for a multipart part. |
//! | [`Category`], [`WateringFrequency`], [`SoilType`] | Closed vocabularies with their exact wire strings. |
//!
//! The vocabularies decode unknown strings to an `Unknown` variant so one odd
//! record does not fail the whole list. Forms only ever offer `ALL`, which
//! excludes `Unknown`.

use std::fmt;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Multipart part name of the plant image.
pub const IMAGE_PART: &str = "Image";

/// Identifier of a plant record: exactly 24 hexadecimal characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlantId(String);

impl PlantId {
    pub const LEN: usize = 24;

    /// Validate the shape of a raw id.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ApiError::InvalidPlantId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlantId {
    type Error = ApiError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<PlantId> for String {
    fn from(id: PlantId) -> Self {
        id.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plant category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ornamental")]
    Ornamental,
    #[serde(rename = "medicinal & aromatic")]
    MedicinalAromatic,
    #[serde(rename = "fruit")]
    Fruit,
    #[serde(rename = "shade")]
    Shade,
    #[serde(rename = "air-purifying")]
    AirPurifying,
    #[default]
    #[serde(other, rename = "")]
    Unknown,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ornamental,
        Category::MedicinalAromatic,
        Category::Fruit,
        Category::Shade,
        Category::AirPurifying,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ornamental => "ornamental",
            Category::MedicinalAromatic => "medicinal & aromatic",
            Category::Fruit => "fruit",
            Category::Shade => "shade",
            Category::AirPurifying => "air-purifying",
            Category::Unknown => "",
        }
    }

    /// Look up a known category by its wire string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// How often a plant needs water.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WateringFrequency {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "every other day")]
    EveryOtherDay,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "biweekly")]
    Biweekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[default]
    #[serde(other, rename = "")]
    Unknown,
}

impl WateringFrequency {
    pub const ALL: [WateringFrequency; 5] = [
        WateringFrequency::Daily,
        WateringFrequency::EveryOtherDay,
        WateringFrequency::Weekly,
        WateringFrequency::Biweekly,
        WateringFrequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WateringFrequency::Daily => "daily",
            WateringFrequency::EveryOtherDay => "every other day",
            WateringFrequency::Weekly => "weekly",
            WateringFrequency::Biweekly => "biweekly",
            WateringFrequency::Monthly => "monthly",
            WateringFrequency::Unknown => "",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == s)
    }
}

/// Soil the plant grows in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Peaty,
    Silty,
    Chalky,
    #[default]
    #[serde(other, rename = "")]
    Unknown,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Peaty,
        SoilType::Silty,
        SoilType::Chalky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Peaty => "peaty",
            SoilType::Silty => "silty",
            SoilType::Chalky => "chalky",
            SoilType::Unknown => "",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Tolerated temperature range in °C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C - {}°C", self.min, self.max)
    }
}

/// Hosted image attached to a plant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlantImage {
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}

/// A plant record as served by the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(rename = "_id")]
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub watering_frequency: WateringFrequency,
    #[serde(default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub temperature_range: Option<TemperatureRange>,
    #[serde(rename = "Image", default)]
    pub image: Option<PlantImage>,
}

impl Plant {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|img| img.secure_url.as_str())
    }

    /// The editable part of the record, used to pre-populate the update form.
    pub fn to_draft(&self) -> PlantDraft {
        PlantDraft {
            name: self.name.clone(),
            scientific_name: self.scientific_name.clone(),
            category: self.category,
            origin: self.origin.clone(),
            description: self.description.clone(),
            watering_frequency: self.watering_frequency,
            soil_type: self.soil_type,
            temperature_range: self.temperature_range.unwrap_or_default(),
        }
    }
}

/// The field set submitted by the add and update forms.
///
/// Serialises to the JSON body of a plain update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDraft {
    pub name: String,
    pub scientific_name: String,
    pub category: Category,
    pub origin: String,
    pub description: String,
    pub watering_frequency: WateringFrequency,
    pub soil_type: SoilType,
    pub temperature_range: TemperatureRange,
}

impl PlantDraft {
    /// Text parts of the multipart payload, in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("scientificName", self.scientific_name.clone()),
            ("category", self.category.as_str().to_string()),
            ("origin", self.origin.clone()),
            ("description", self.description.clone()),
            ("wateringFrequency", self.watering_frequency.as_str().to_string()),
            ("soilType", self.soil_type.as_str().to_string()),
            ("temperatureRange[min]", self.temperature_range.min.to_string()),
            ("temperatureRange[max]", self.temperature_range.max.to_string()),
        ]
    }

    /// Build the multipart payload, attaching `image` as the `Image` part.
    pub fn to_multipart(&self, image: Option<&ImageUpload>) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.form_fields() {
            form = form.text(name, value);
        }
        if let Some(image) = image {
            form = form.part(IMAGE_PART, image.to_part()?);
        }
        Ok(form)
    }
}

/// An image picked for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn to_part(&self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        match &self.content_type {
            Some(mime) => Ok(part.mime_str(mime)?),
            None => Ok(part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_id_shape() {
        assert!(PlantId::parse("65f1c0ffee65f1c0ffee65f1").is_ok());
        assert!(PlantId::parse("65F1C0FFEE65F1C0FFEE65F1").is_ok());

        for bad in [
            "",
            "65f1c0ffee65f1c0ffee65f",
            "65f1c0ffee65f1c0ffee65f1a",
            "65f1c0ffee65f1c0ffee65fz",
            "65f1c0ffee 5f1c0ffee65f1",
        ] {
            assert!(
                matches!(PlantId::parse(bad), Err(ApiError::InvalidPlantId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decoding_checks_id_shape() {
        let err = serde_json::from_str::<Plant>(r#"{"_id": "not-hex", "name": "Odd"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid plant ID"), "{err}");

        let id: PlantId = serde_json::from_str(r#""65f1c0ffee65f1c0ffee65f1""#).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""65f1c0ffee65f1c0ffee65f1""#);
    }

    #[test]
    fn test_decode_listed_plant() {
        let plant: Plant = serde_json::from_str(
            r#"{
                "_id": "65f1c0ffee65f1c0ffee65f1",
                "name": "Aloe Vera",
                "scientificName": "Aloe barbadensis miller",
                "category": "medicinal & aromatic",
                "origin": "Arabian Peninsula",
                "description": "Succulent with soothing gel.",
                "wateringFrequency": "every other day",
                "soilType": "sandy",
                "temperatureRange": { "min": 13, "max": 27 },
                "Image": { "secure_url": "https://img.example/aloe.jpg", "public_id": "aloe" }
            }"#,
        )
        .unwrap();

        assert_eq!(plant.category, Category::MedicinalAromatic);
        assert_eq!(plant.watering_frequency, WateringFrequency::EveryOtherDay);
        assert_eq!(plant.soil_type, SoilType::Sandy);
        assert_eq!(plant.image_url(), Some("https://img.example/aloe.jpg"));
        assert_eq!(plant.temperature_range.unwrap().to_string(), "13°C - 27°C");
    }

    #[test]
    fn test_sparse_plant_uses_defaults() {
        let plant: Plant = serde_json::from_str(
            r#"{"_id":"65f1c0ffee65f1c0ffee65f1","name":"Mystery","category":"succulent"}"#,
        )
        .unwrap();
        assert_eq!(plant.category, Category::Unknown);
        assert_eq!(plant.soil_type, SoilType::Unknown);
        assert!(plant.temperature_range.is_none());
        assert!(plant.image_url().is_none());
    }

    #[test]
    fn test_vocabulary_parse_excludes_unknown() {
        assert_eq!(Category::parse("air-purifying"), Some(Category::AirPurifying));
        assert_eq!(WateringFrequency::parse("biweekly"), Some(WateringFrequency::Biweekly));
        assert_eq!(SoilType::parse("chalky"), Some(SoilType::Chalky));
        assert_eq!(Category::parse(""), None);
        assert_eq!(SoilType::parse("gravel"), None);
    }

    #[test]
    fn test_draft_json_and_form_fields() {
        let draft = PlantDraft {
            name: "Fern".into(),
            scientific_name: "Nephrolepis exaltata".into(),
            category: Category::Shade,
            origin: "Tropics".into(),
            description: "Loves humidity".into(),
            watering_frequency: WateringFrequency::Weekly,
            soil_type: SoilType::Peaty,
            temperature_range: TemperatureRange {
                min: 16.0,
                max: 24.5,
            },
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["scientificName"], "Nephrolepis exaltata");
        assert_eq!(json["wateringFrequency"], "weekly");
        assert_eq!(json["soilType"], "peaty");
        assert_eq!(json["temperatureRange"]["max"], 24.5);

        let fields = draft.form_fields();
        assert_eq!(fields.len(), 9);
        assert!(fields.contains(&("temperatureRange[min]", "16".to_string())));
        assert!(fields.contains(&("temperatureRange[max]", "24.5".to_string())));
        assert!(fields.contains(&("category", "shade".to_string())));
    }
}
