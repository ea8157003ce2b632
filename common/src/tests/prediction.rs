// Unit tests for the prediction request/response wire models.

use crate::schema::REQUEST_FIELDS;
use crate::{PredictionRequest, PredictionResponse, Price};

use serde_json::{Value, json};

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        manufacturer: "Toyota".to_string(),
        model: "land-cruiser-prado".to_string(),
        prod_year: Some(2015),
        category: "Jeep".to_string(),
        leather_interior: true,
        fuel_type: "Petrol".to_string(),
        engine_volume: Some(3.5),
        mileage: Some(120_000),
        cylinders: Some(6.0),
        gear_box_type: "Automatic".to_string(),
        drive_wheels: "4x4".to_string(),
        wheel: "Left wheel".to_string(),
        color: "Black".to_string(),
        airbags: Some(8),
        city: "new york".to_string(),
        state: "NY".to_string(),
        turbo: Some(0.0),
    }
}

/// **VALUE**: Verifies the serialized body carries exactly the 17 documented keys.
///
/// **WHY THIS MATTERS**: The prediction server indexes the body by these exact
/// key strings ("Prod. year", "Leather interior", ...). A renamed or missing
/// key silently breaks every prediction.
///
/// **BUG THIS CATCHES**: Would catch a serde rename drifting out of sync with
/// the schema table, or a field being added to one but not the other.
#[test]
fn given_request_when_serialized_then_keys_match_schema_exactly() {
    // GIVEN: A fully populated request
    let request = sample_request();

    // WHEN: Serializing to JSON
    let value = serde_json::to_value(&request).expect("request serializes");
    let object = value.as_object().expect("body is a JSON object");

    // THEN: Key set matches the schema table exactly
    assert_eq!(object.len(), REQUEST_FIELDS.len(), "Should have 17 keys");
    for field in REQUEST_FIELDS {
        assert!(
            object.contains_key(field.name),
            "Body should contain key {:?}",
            field.name
        );
    }
}

/// A failed numeric coercion travels as `null`, never as a missing key.
#[test]
fn given_uncoerced_numeric_fields_when_serialized_then_sent_as_null() {
    let mut request = sample_request();
    request.prod_year = None;
    request.engine_volume = None;

    let value = serde_json::to_value(&request).expect("request serializes");

    assert_eq!(value["Prod. year"], Value::Null);
    assert_eq!(value["Engine volume"], Value::Null);
}

#[test]
fn given_response_with_numeric_price_when_decoded_then_price_is_present() {
    let response: PredictionResponse =
        serde_json::from_value(json!({"price": 12345, "status": "successfull"}))
            .expect("response decodes");

    assert_eq!(response.price(), Some(Price(12345.0)));
}

/// **VALUE**: Verifies the "well-formed body without a usable price" cases.
///
/// **WHY THIS MATTERS**: An empty object and a non-numeric price must both
/// decode cleanly with `price == None` so the pipeline can report the
/// price-missing failure instead of a decode failure.
///
/// **BUG THIS CATCHES**: Would catch a strict `f64` field turning `{}` or
/// `{"price": "n/a"}` into a decode error, which would misclassify the
/// failure and trigger the transport-error presentation path.
#[test]
fn given_response_without_numeric_price_when_decoded_then_price_is_none() {
    let empty: PredictionResponse = serde_json::from_value(json!({})).expect("empty decodes");
    assert_eq!(empty.price(), None);

    let textual: PredictionResponse =
        serde_json::from_value(json!({"price": "n/a"})).expect("textual decodes");
    assert_eq!(textual.price(), None);
}
