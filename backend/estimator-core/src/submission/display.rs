//! Presentation-neutral result display state.
//!
//! The UI layer renders from this struct; nothing here touches styling.

use common::Price;

/// Fixed message for a well-formed response that carried no usable price.
pub const PRICE_MISSING_MESSAGE: &str = "Error calculating price";

/// Fixed message for transport-level failures (request error, bad status,
/// undecodable body).
pub const REQUEST_FAILED_MESSAGE: &str = "Error: Unable to estimate price";

/// Color class of the result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTone {
    /// The accent used for a rendered price.
    Price,
    /// The error accent.
    Error,
}

/// Everything the result area needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    /// Whether the result area is revealed at all.
    pub visible: bool,
    /// Loading indicator shown while a request is in flight.
    pub loading: bool,
    /// Whether the result text (price or error) is shown.
    pub result_shown: bool,
    pub text: String,
    pub tone: DisplayTone,
    pub submit_enabled: bool,
}

impl Default for ResultDisplay {
    fn default() -> Self {
        Self {
            visible: false,
            loading: false,
            result_shown: false,
            text: String::new(),
            tone: DisplayTone::Price,
            submit_enabled: true,
        }
    }
}

impl ResultDisplay {
    /// Entering `Submitting`: reveal the area, show the spinner, hide any
    /// prior result, lock out further submissions.
    pub(crate) fn begin_cycle(&mut self) {
        self.visible = true;
        self.loading = true;
        self.result_shown = false;
        self.submit_enabled = false;
    }

    pub(crate) fn show_price(&mut self, price: Price) {
        self.loading = false;
        self.result_shown = true;
        self.text = price.to_string();
        self.tone = DisplayTone::Price;
        self.submit_enabled = true;
    }

    pub(crate) fn show_error(&mut self, message: &str) {
        self.loading = false;
        self.result_shown = true;
        self.text = message.to_string();
        self.tone = DisplayTone::Error;
        self.submit_enabled = true;
    }

    /// Cosmetic tone reset fired by the delayed revert task.
    pub(crate) fn revert_tone(&mut self) {
        self.tone = DisplayTone::Price;
    }
}
