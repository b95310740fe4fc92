//! Frontend Models
//!
//! Data structures matching the backend item record, plus the cart's
//! line-item projection of it.

use serde::{Deserialize, Serialize};

/// Item record as returned by `GET /get-item/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    #[serde(rename = "mainImage")]
    pub main_image: String,
    #[serde(rename = "secondaryImage")]
    pub secondary_image: String,
    #[serde(rename = "tertiaryImage")]
    pub tertiary_image: String,
    pub descriptions: String,
    /// Display quantity, not part of the wire record
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Cart line item, keyed by the item id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    pub descriptions: String,
    pub main_image: String,
    pub secondary_image: String,
    pub tertiary_image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Project an item record into its cart representation
    pub fn from_record(item: &ItemRecord) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            ingredients: item.ingredients.clone(),
            price: item.price,
            descriptions: item.descriptions.clone(),
            main_image: item.main_image.clone(),
            secondary_image: item.secondary_image.clone(),
            tertiary_image: item.tertiary_image.clone(),
            quantity: item.quantity,
        }
    }
}

/// Static assets live under this site-root prefix
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// How one image field renders, decided once at ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline base64 data URI, used as-is
    Embedded(String),
    /// Filename resolved against the uploads prefix
    PathReference(String),
}

impl ImageSource {
    /// Classify a raw image field. Each field is classified independently;
    /// a record may mix embedded and path-based images.
    pub fn classify(raw: &str) -> Self {
        if is_image_data_uri(raw) {
            ImageSource::Embedded(raw.to_string())
        } else {
            ImageSource::PathReference(raw.to_string())
        }
    }

    /// Final `src` attribute value for an `<img>` tag
    pub fn src(&self) -> String {
        match self {
            ImageSource::Embedded(data) => data.clone(),
            ImageSource::PathReference(name) => format!("{}{}", UPLOADS_PREFIX, name),
        }
    }
}

/// Matches the `data:image/<subtype>;base64,` prefix
fn is_image_data_uri(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let subtype_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    subtype_len > 0 && rest[subtype_len..].starts_with(";base64,")
}
