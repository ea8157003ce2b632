//! Form controller: blur validation handlers, the make→model cascade,
//! and request assembly.
//!
//! Handlers take the triggering field's current value and return the
//! validation/update result; applying error styling is the UI layer's
//! concern.

use crate::cascade::{ModelOption, ModelSelector};
use crate::config::EstimatorConfig;
use crate::error::CoreError;
use crate::error::form::FormError;
use crate::submission::{PredictionClient, ResultDisplay, SubmissionOutcome, SubmissionPipeline};
use crate::validate::{self, ValidationResult};

use common::{ErrorLocation, PredictionRequest, schema};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

/// Raw snapshot of every form input at submission time.
///
/// Everything is the string the control currently holds; coercion to
/// wire types happens once, in [`FormFields::to_request`]. `turbo` is
/// `None` when no choice of the single-choice selector is checked.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub manufacturer: String,
    pub model: String,
    pub prod_year: String,
    pub category: String,
    pub leather_interior: bool,
    pub fuel_type: String,
    pub engine_volume: String,
    pub mileage: String,
    pub cylinders: String,
    pub gear_box_type: String,
    pub drive_wheels: String,
    pub wheel: String,
    pub color: String,
    pub airbags: String,
    pub city: String,
    pub state: String,
    pub turbo: Option<String>,
}

impl FormFields {
    /// Assemble the request record through the schema coercions.
    ///
    /// No re-validation happens here: a malformed numeric coerces to
    /// `None` and travels as `null`, exactly what the endpoint has always
    /// been sent. The one hard requirement is the turbo selector - with
    /// nothing checked there is no value to coerce, so assembly fails
    /// fast instead of submitting.
    pub fn to_request(&self) -> Result<PredictionRequest, FormError> {
        let turbo = self
            .turbo
            .as_deref()
            .ok_or_else(|| FormError::TurboNotSelected {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(PredictionRequest {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            prod_year: schema::coerce_int(&self.prod_year),
            category: self.category.clone(),
            leather_interior: self.leather_interior,
            fuel_type: self.fuel_type.clone(),
            engine_volume: schema::coerce_float(&self.engine_volume),
            mileage: schema::coerce_int(&self.mileage),
            cylinders: schema::coerce_float(&self.cylinders),
            gear_box_type: self.gear_box_type.clone(),
            drive_wheels: self.drive_wheels.clone(),
            wheel: self.wheel.clone(),
            color: self.color.clone(),
            airbags: schema::coerce_int(&self.airbags),
            city: self.city.clone(),
            state: self.state.clone(),
            turbo: schema::coerce_float(turbo),
        })
    }
}

/// Ties the cascade and the submission pipeline behind explicit handler
/// methods, one per user-interface event.
pub struct FormController {
    selector: ModelSelector,
    pipeline: SubmissionPipeline,
}

impl FormController {
    /// Controller wired to the endpoint and delays from `config`.
    pub fn new(config: &EstimatorConfig) -> Result<Self, CoreError> {
        let client = PredictionClient::with_timeout(
            &config.server.base_url,
            Duration::from_secs(config.server.request_timeout_secs),
        )?;
        let pipeline = SubmissionPipeline::with_revert_delay(
            client,
            Duration::from_millis(config.display.error_revert_delay_ms),
        );
        Ok(Self::from_pipeline(pipeline))
    }

    pub fn from_pipeline(pipeline: SubmissionPipeline) -> Self {
        Self {
            selector: ModelSelector::new(),
            pipeline,
        }
    }

    pub fn on_airbags_blur(&self, raw: &str) -> ValidationResult {
        validate::airbags(raw)
    }

    pub fn on_year_blur(&self, raw: &str) -> ValidationResult {
        validate::year(raw)
    }

    pub fn on_mileage_blur(&self, raw: &str) -> ValidationResult {
        validate::mileage(raw)
    }

    pub fn on_city_blur(&self, raw: &str) -> ValidationResult {
        validate::city(raw)
    }

    /// Manufacturer changed: rebuild the model list and hand back the new
    /// options for rendering.
    pub fn on_make_change(&mut self, make: &str) -> &[ModelOption] {
        self.selector.rebuild(make);
        self.selector.options()
    }

    pub fn model_selector(&self) -> &ModelSelector {
        &self.selector
    }

    /// Explicit user submission.
    pub async fn submit(&self, fields: &FormFields) -> Result<SubmissionOutcome, CoreError> {
        self.pipeline.submit(fields).await
    }

    /// Shared result display for the UI layer.
    pub fn display(&self) -> Arc<RwLock<ResultDisplay>> {
        self.pipeline.display()
    }
}
