mod error_location;
mod prediction;
mod price;
mod schema;
