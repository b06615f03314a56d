//! Validation schemas of every form in the dashboard.

use std::sync::OnceLock;

use api::{Category, PlantDraft, SoilType, TemperatureRange, WateringFrequency};
use regex::Regex;

use crate::form::{parse_number, FieldRule, FieldSpec, FormState, Rule, Schema};

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

fn gmail_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").expect("gmail pattern compiles")
    })
}

fn username_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern compiles"))
}

pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

pub fn is_gmail(value: &str) -> bool {
    gmail_pattern().is_match(value.trim())
}

fn is_username(value: &str) -> bool {
    username_pattern().is_match(value)
}

fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Special characters the service accepts in a password.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

fn has_special(value: &str) -> bool {
    value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn is_category(value: &str) -> bool {
    Category::parse(value).is_some()
}

fn is_watering(value: &str) -> bool {
    WateringFrequency::parse(value).is_some()
}

fn is_soil(value: &str) -> bool {
    SoilType::parse(value).is_some()
}

pub const LOGIN: Schema = &[
    FieldSpec {
        name: "email",
        rules: &[
            FieldRule::new(Rule::Required, "Email is required"),
            FieldRule::new(Rule::Check(is_email), "Invalid email address"),
        ],
    },
    FieldSpec {
        name: "password",
        rules: &[FieldRule::new(Rule::Required, "Password is required")],
    },
];

pub const REGISTER: Schema = &[
    FieldSpec {
        name: "userName",
        rules: &[
            FieldRule::new(Rule::Required, "Username is required"),
            FieldRule::new(Rule::MinLen(3), "Username must be at least 3 characters"),
            FieldRule::new(Rule::MaxLen(10), "Username must be at most 10 characters"),
            FieldRule::new(
                Rule::Check(is_username),
                "Only letters, numbers, and underscores allowed",
            ),
        ],
    },
    FieldSpec {
        name: "email",
        rules: &[
            FieldRule::new(Rule::Required, "Email is required"),
            FieldRule::new(Rule::Check(is_email), "Invalid email format"),
            FieldRule::new(Rule::Check(is_gmail), "Only Gmail addresses are allowed"),
        ],
    },
    FieldSpec {
        name: "password",
        rules: &[
            FieldRule::new(Rule::Required, "Password is required"),
            FieldRule::new(Rule::MinLen(8), "Password must be at least 8 characters"),
            FieldRule::new(
                Rule::Check(has_lowercase),
                "Password must contain at least one lowercase letter",
            ),
            FieldRule::new(
                Rule::Check(has_uppercase),
                "Password must contain at least one uppercase letter",
            ),
            FieldRule::new(Rule::Check(has_digit), "Password must contain at least one number"),
            FieldRule::new(
                Rule::Check(has_special),
                "Password must contain at least one special character",
            ),
        ],
    },
];

pub const FORGOT_PASSWORD: Schema = &[FieldSpec {
    name: "email",
    rules: &[
        FieldRule::new(Rule::Required, "Email is required"),
        FieldRule::new(
            Rule::Check(is_gmail),
            "Please enter a valid email ending with @gmail.com",
        ),
    ],
}];

pub const RESET_PASSWORD: Schema = &[
    FieldSpec {
        name: "password",
        rules: &[
            FieldRule::new(Rule::Required, "Password is required"),
            FieldRule::new(Rule::MinLen(8), "Password must be at least 8 characters"),
        ],
    },
    FieldSpec {
        name: "confirmPassword",
        rules: &[
            FieldRule::new(Rule::Required, "Please confirm your password"),
            FieldRule::new(Rule::SameAs("password"), "Passwords do not match"),
        ],
    },
];

pub const PLANT: Schema = &[
    FieldSpec {
        name: "name",
        rules: &[FieldRule::new(Rule::Required, "Name is required")],
    },
    FieldSpec {
        name: "scientificName",
        rules: &[FieldRule::new(Rule::Required, "Scientific name is required")],
    },
    FieldSpec {
        name: "category",
        rules: &[
            FieldRule::new(Rule::Required, "Category is required"),
            FieldRule::new(Rule::Check(is_category), "Choose a category from the list"),
        ],
    },
    FieldSpec {
        name: "origin",
        rules: &[FieldRule::new(Rule::Required, "Origin is required")],
    },
    FieldSpec {
        name: "description",
        rules: &[FieldRule::new(Rule::Required, "Description is required")],
    },
    FieldSpec {
        name: "wateringFrequency",
        rules: &[
            FieldRule::new(Rule::Required, "Watering frequency is required"),
            FieldRule::new(Rule::Check(is_watering), "Choose a watering frequency from the list"),
        ],
    },
    FieldSpec {
        name: "soilType",
        rules: &[
            FieldRule::new(Rule::Required, "Soil type is required"),
            FieldRule::new(Rule::Check(is_soil), "Choose a soil type from the list"),
        ],
    },
    FieldSpec {
        name: "temperatureMin",
        rules: &[
            FieldRule::new(Rule::Required, "Minimum temperature is required"),
            FieldRule::new(Rule::Number, "Minimum temperature must be a number"),
        ],
    },
    FieldSpec {
        name: "temperatureMax",
        rules: &[
            FieldRule::new(Rule::Required, "Maximum temperature is required"),
            FieldRule::new(Rule::Number, "Maximum temperature must be a number"),
            FieldRule::new(
                Rule::AtLeast("temperatureMin"),
                "Maximum temperature must not be below the minimum",
            ),
        ],
    },
];

/// Read a validated plant form into a draft. `None` if the form does not pass.
pub fn plant_draft(form: &FormState) -> Option<PlantDraft> {
    if !form.is_valid() {
        return None;
    }
    Some(PlantDraft {
        name: form.value("name").trim().to_string(),
        scientific_name: form.value("scientificName").trim().to_string(),
        category: Category::parse(form.value("category"))?,
        origin: form.value("origin").trim().to_string(),
        description: form.value("description").trim().to_string(),
        watering_frequency: WateringFrequency::parse(form.value("wateringFrequency"))?,
        soil_type: SoilType::parse(form.value("soilType"))?,
        temperature_range: TemperatureRange {
            min: parse_number(form.value("temperatureMin"))?,
            max: parse_number(form.value("temperatureMax"))?,
        },
    })
}

/// Plant form pre-populated from an existing record.
pub fn plant_form(draft: &PlantDraft) -> FormState {
    FormState::new(PLANT).with_values([
        ("name", draft.name.clone()),
        ("scientificName", draft.scientific_name.clone()),
        ("category", draft.category.as_str().to_string()),
        ("origin", draft.origin.clone()),
        ("description", draft.description.clone()),
        ("wateringFrequency", draft.watering_frequency.as_str().to_string()),
        ("soilType", draft.soil_type.as_str().to_string()),
        ("temperatureMin", draft.temperature_range.min.to_string()),
        ("temperatureMax", draft.temperature_range.max.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(schema: Schema, values: &[(&str, &str)]) -> FormState {
        FormState::new(schema).with_values(values.iter().map(|(k, v)| (*k, v.to_string())))
    }

    #[test]
    fn test_login_requires_valid_email() {
        let mut form = filled(LOGIN, &[("email", "not-an-email"), ("password", "x")]);
        assert!(!form.validate_all());
        assert_eq!(form.error("email"), Some("Invalid email address"));

        form.change("email", "someone@example.org".into());
        assert!(form.validate_all());
    }

    #[test]
    fn test_register_rules_in_order() {
        let mut form = filled(
            REGISTER,
            &[("userName", "ab"), ("email", "a@yahoo.com"), ("password", "password")],
        );
        assert!(!form.validate_all());
        assert_eq!(form.error("userName"), Some("Username must be at least 3 characters"));
        assert_eq!(form.error("email"), Some("Only Gmail addresses are allowed"));
        assert_eq!(
            form.error("password"),
            Some("Password must contain at least one uppercase letter")
        );

        form.change("userName", "bad name".into());
        assert_eq!(
            form.error("userName"),
            Some("Only letters, numbers, and underscores allowed")
        );
        form.change("userName", "waytoolongname".into());
        assert_eq!(form.error("userName"), Some("Username must be at most 10 characters"));

        form.change("userName", "green_1".into());
        form.change("email", "green@gmail.com".into());
        form.change("password", "Password1!".into());
        assert!(form.validate_all());
    }

    #[test]
    fn test_password_needs_special_character() {
        let mut form = filled(
            REGISTER,
            &[("userName", "abc"), ("email", "a@gmail.com"), ("password", "Password1")],
        );
        assert!(!form.validate_all());
        assert_eq!(
            form.error("password"),
            Some("Password must contain at least one special character")
        );
    }

    #[test]
    fn test_reset_passwords_must_match() {
        let mut form = filled(
            RESET_PASSWORD,
            &[("password", "Secret123"), ("confirmPassword", "Secret124")],
        );
        assert!(!form.validate_all());
        assert_eq!(form.error("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_forgot_password_gmail_only() {
        let mut form = filled(FORGOT_PASSWORD, &[("email", "a@outlook.com")]);
        assert!(!form.validate_all());
        form.change("email", "a.b+c@gmail.com".into());
        assert!(form.validate_all());
    }

    #[test]
    fn test_plant_form_roundtrip_through_draft() {
        let draft = PlantDraft {
            name: "Fern".into(),
            scientific_name: "Nephrolepis exaltata".into(),
            category: Category::Shade,
            origin: "Tropics".into(),
            description: "Loves humidity".into(),
            watering_frequency: WateringFrequency::Weekly,
            soil_type: SoilType::Peaty,
            temperature_range: TemperatureRange { min: 16.0, max: 24.5 },
        };
        let form = plant_form(&draft);
        assert_eq!(plant_draft(&form), Some(draft));
    }

    #[test]
    fn test_plant_form_rejects_inverted_range_and_unknown_enum() {
        let mut form = filled(
            PLANT,
            &[
                ("name", "Fern"),
                ("scientificName", "N. exaltata"),
                ("category", "succulent"),
                ("origin", "Tropics"),
                ("description", "Humid"),
                ("wateringFrequency", "weekly"),
                ("soilType", "peaty"),
                ("temperatureMin", "30"),
                ("temperatureMax", "12"),
            ],
        );
        assert!(plant_draft(&form).is_none());
        assert!(!form.validate_all());
        assert_eq!(form.error("category"), Some("Choose a category from the list"));
        assert_eq!(
            form.error("temperatureMax"),
            Some("Maximum temperature must not be below the minimum")
        );
    }

    #[test]
    fn test_plant_temperature_must_be_numeric() {
        let mut form = FormState::new(PLANT);
        form.change("temperatureMin", "warm".into());
        form.blur("temperatureMin");
        assert_eq!(form.error("temperatureMin"), Some("Minimum temperature must be a number"));
    }
}
