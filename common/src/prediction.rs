//! Request and response models for the prediction endpoint.
//!
//! Key names are the exact wire keys the prediction server expects
//! (see [`crate::schema::REQUEST_FIELDS`]); field order here matches the
//! schema table and is enforced by test.

use crate::price::Price;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Flat request record built once per submission.
///
/// Numeric fields are `Option`: a value that failed coercion travels as
/// JSON `null` rather than being dropped or rejected. `city` carries the
/// raw input, not the validator's normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Prod. year")]
    pub prod_year: Option<i64>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Leather interior")]
    pub leather_interior: bool,
    #[serde(rename = "Fuel type")]
    pub fuel_type: String,
    #[serde(rename = "Engine volume")]
    pub engine_volume: Option<f64>,
    #[serde(rename = "Mileage")]
    pub mileage: Option<i64>,
    #[serde(rename = "Cylinders")]
    pub cylinders: Option<f64>,
    #[serde(rename = "Gear box type")]
    pub gear_box_type: String,
    #[serde(rename = "Drive wheels")]
    pub drive_wheels: String,
    #[serde(rename = "Wheel")]
    pub wheel: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Airbags")]
    pub airbags: Option<i64>,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Turbo")]
    pub turbo: Option<f64>,
}

/// Response body from the prediction endpoint.
///
/// Decoded leniently: any JSON object is accepted, and `price` is only
/// `Some` when the field is present and numeric. Extra fields (the server
/// also sends a status string) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub price: Option<f64>,
}

impl PredictionResponse {
    /// The predicted price, when the response carried a numeric one.
    pub fn price(&self) -> Option<Price> {
        self.price.map(Price)
    }
}

/// Accept only JSON numbers; anything else decodes as `None`.
fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
