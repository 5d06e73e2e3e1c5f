//! Pinboard Config
//!
//! This crate contains the serializable input record for Pinboard. An
//! [`AutomationInput`] is created fresh per request, either from a JSON
//! document or from a [`ScenarioTemplate`](pinboard_catalog::ScenarioTemplate)
//! preset, and is consumed by the blueprint builder.
//!
//! Validation lives here rather than in the builder: the builder degrades
//! silently on bad input, so callers run [`AutomationInput::validate`] first.

mod enums;
mod error;
mod input;
mod template;

pub use enums::{Frequency, Region, RunMode};
pub use error::{ValidationError, ValidationErrors};
pub use input::{AutomationInput, Schedule};
pub use template::{DEFAULT_OWNER, DEFAULT_WEEKLY_SLOT, SCHEDULED_TRIGGER_ID};
