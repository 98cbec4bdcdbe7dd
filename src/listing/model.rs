// SPDX-License-Identifier: MPL-2.0
//! Listing data as delivered by the backend.
//!
//! Field names on the wire follow the backend's Portuguese schema; they are
//! mapped to English names with `serde(rename)`.

use super::ImageSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Currency assumed when the backend omits one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(rename = "tipo", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "localizacao", deserialize_with = "null_as_default")]
    pub location: String,
    /// Price exactly as the backend formats it.
    #[serde(rename = "preco", deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(rename = "moeda")]
    pub currency: Option<String>,
    #[serde(rename = "quartos", deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(rename = "banheiros", deserialize_with = "null_as_default")]
    pub bathrooms: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(rename = "imagens", deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "subdescricao")]
    pub subdescription: Option<String>,
    #[serde(rename = "caracteristicas", deserialize_with = "null_as_default")]
    pub features: Vec<String>,
}

impl Listing {
    /// Builds the shared image set for the gallery surfaces.
    #[must_use]
    pub fn image_set(&self) -> ImageSet {
        ImageSet::from_uris(&self.images)
    }

    /// Currency code, defaulting to [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn currency(&self) -> &str {
        non_blank(self.currency.as_deref()).unwrap_or(DEFAULT_CURRENCY)
    }

    /// Heading text: `"<kind>, <location>"`, falling back to the title.
    #[must_use]
    pub fn heading(&self) -> String {
        match (self.kind.trim(), self.location.trim()) {
            ("", "") => self.title.clone(),
            (kind, "") => kind.to_string(),
            ("", location) => location.to_string(),
            (kind, location) => format!("{kind}, {location}"),
        }
    }

    /// Area with any trailing unit stripped, e.g. `"120m²"` → `"120"`.
    #[must_use]
    pub fn area_value(&self) -> &str {
        self.area
            .trim()
            .trim_end_matches("m²")
            .trim_end_matches('m')
            .trim()
    }

    /// Description, or `None` when missing or blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    #[must_use]
    pub fn subdescription_text(&self) -> Option<&str> {
        non_blank(self.subdescription.as_deref())
    }
}

/// The backend sends `null` for columns it has no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.trim().is_empty())
}
