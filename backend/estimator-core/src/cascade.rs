//! Manufacturer → model cascade.
//!
//! When the selected manufacturer changes, the model selector is rebuilt
//! from scratch: the previous option list is always fully replaced, never
//! appended to. An unknown manufacturer leaves the selector disabled and
//! empty.

use crate::catalog;

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder entry the UI shows while no model is selected.
pub const MODEL_PLACEHOLDER_LABEL: &str = "Select Model";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Machine-readable value for a model label: lowercased, with every run
/// of whitespace collapsed to a single hyphen.
///
/// `"Land Cruiser Prado"` → `"land-cruiser-prado"`.
pub fn model_slug(label: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&label.to_lowercase(), "-")
        .into_owned()
}

/// One selectable model: machine value paired with the display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOption {
    pub value: String,
    pub label: String,
}

/// State of the model dropdown.
///
/// The placeholder entry is implicit (the UI renders
/// [`MODEL_PLACEHOLDER_LABEL`] first); `options` holds exactly the
/// catalog's model list for the current make, or nothing.
#[derive(Debug, Clone, Default)]
pub struct ModelSelector {
    options: Vec<ModelOption>,
    enabled: bool,
}

impl ModelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the option list for a newly selected manufacturer.
    ///
    /// Always resets to the placeholder state first, so repeated calls
    /// replace rather than accumulate. A known make populates one option
    /// per model in catalog order and enables the selector; anything else
    /// leaves it disabled.
    pub fn rebuild(&mut self, make: &str) {
        self.options.clear();

        let models = catalog::models_for(make);
        if make.is_empty() || models.is_empty() {
            self.enabled = false;
            return;
        }

        self.options = models
            .iter()
            .map(|label| ModelOption {
                value: model_slug(label),
                label: (*label).to_string(),
            })
            .collect();
        self.enabled = true;
    }

    pub fn options(&self) -> &[ModelOption] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
