//! Test helpers for submission integration tests.
//!
//! Builds pipelines pointed at a wiremock server and fully filled form
//! snapshots matching the documented request schema.

use estimator_core::form::FormFields;
use estimator_core::submission::{PredictionClient, SubmissionPipeline};

use std::time::Duration;

use serde_json::{Value, json};

/// Pipeline against a mock server with a test-sized revert delay.
pub fn pipeline_for(server_uri: &str, revert_delay: Duration) -> SubmissionPipeline {
    let client = PredictionClient::new(server_uri).expect("mock server URI parses");
    SubmissionPipeline::with_revert_delay(client, revert_delay)
}

/// A completely filled, valid form.
pub fn filled_fields() -> FormFields {
    FormFields {
        manufacturer: "Toyota".to_string(),
        model: "land-cruiser-prado".to_string(),
        prod_year: "2015".to_string(),
        category: "Jeep".to_string(),
        leather_interior: true,
        fuel_type: "Petrol".to_string(),
        engine_volume: "3.5".to_string(),
        mileage: "120000".to_string(),
        cylinders: "6".to_string(),
        gear_box_type: "Automatic".to_string(),
        drive_wheels: "4x4".to_string(),
        wheel: "Left wheel".to_string(),
        color: "Black".to_string(),
        airbags: "8".to_string(),
        city: "new york".to_string(),
        state: "NY".to_string(),
        turbo: Some("0".to_string()),
    }
}

/// The exact JSON body [`filled_fields`] must produce on the wire.
pub fn expected_body() -> Value {
    json!({
        "Manufacturer": "Toyota",
        "Model": "land-cruiser-prado",
        "Prod. year": 2015,
        "Category": "Jeep",
        "Leather interior": true,
        "Fuel type": "Petrol",
        "Engine volume": 3.5,
        "Mileage": 120000,
        "Cylinders": 6.0,
        "Gear box type": "Automatic",
        "Drive wheels": "4x4",
        "Wheel": "Left wheel",
        "Color": "Black",
        "Airbags": 8,
        "City": "new york",
        "State": "NY",
        "Turbo": 0.0
    })
}
