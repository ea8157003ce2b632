//! The single explicit schema for the prediction request body.
//!
//! Every wire field is declared once here: its exact JSON key and the type
//! it is coerced to. Form input arrives as raw strings; the coercion
//! helpers below turn them into typed values with one uniform
//! fallback-on-failure policy: a failed numeric coercion yields `None`,
//! which serializes as JSON `null` (the wire shape the prediction server
//! has always received for malformed numerics).

/// Expected wire type of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Bool,
    Text,
}

/// One field of the prediction request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exact JSON key, spaces and punctuation included.
    pub name: &'static str,
    pub kind: FieldKind,
}

/// All 17 request fields, in wire order.
pub const REQUEST_FIELDS: [FieldSpec; 17] = [
    FieldSpec { name: "Manufacturer", kind: FieldKind::Text },
    FieldSpec { name: "Model", kind: FieldKind::Text },
    FieldSpec { name: "Prod. year", kind: FieldKind::Int },
    FieldSpec { name: "Category", kind: FieldKind::Text },
    FieldSpec { name: "Leather interior", kind: FieldKind::Bool },
    FieldSpec { name: "Fuel type", kind: FieldKind::Text },
    FieldSpec { name: "Engine volume", kind: FieldKind::Float },
    FieldSpec { name: "Mileage", kind: FieldKind::Int },
    FieldSpec { name: "Cylinders", kind: FieldKind::Float },
    FieldSpec { name: "Gear box type", kind: FieldKind::Text },
    FieldSpec { name: "Drive wheels", kind: FieldKind::Text },
    FieldSpec { name: "Wheel", kind: FieldKind::Text },
    FieldSpec { name: "Color", kind: FieldKind::Text },
    FieldSpec { name: "Airbags", kind: FieldKind::Int },
    FieldSpec { name: "City", kind: FieldKind::Text },
    FieldSpec { name: "State", kind: FieldKind::Text },
    FieldSpec { name: "Turbo", kind: FieldKind::Float },
];

/// Coerce a raw form value to an integer field.
///
/// Returns `None` (wire `null`) when the value is not a whole number.
pub fn coerce_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Coerce a raw form value to a float field.
///
/// Returns `None` (wire `null`) when the value is not numeric.
pub fn coerce_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
