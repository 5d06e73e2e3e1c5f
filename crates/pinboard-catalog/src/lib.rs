//! Pinboard Catalog
//!
//! Fixed catalogs of Pinterest triggers, downstream actions and scenario
//! templates. Every table is a process-wide constant; nothing here is ever
//! mutated after the program starts.
//!
//! Lookups go through the [`Catalog`] trait so callers (the blueprint builder
//! in particular) can be handed either the built-in tables or a custom slice
//! of descriptors:
//!
//! ```
//! use pinboard_catalog::{Catalog, triggers};
//!
//! let trigger = triggers().get("new-pin").unwrap();
//! assert_eq!(trigger.label, "New Pin Published");
//! assert!(triggers().get("missing").is_none());
//! ```

mod builtin;
mod catalog;
mod descriptor;

pub use builtin::{ACTIONS, TEMPLATES, TRIGGERS, actions, templates, triggers};
pub use catalog::{Catalog, CatalogEntry, StaticCatalog};
pub use descriptor::{
  ActionDescriptor, ActionService, ScenarioTemplate, TriggerCategory, TriggerDescriptor,
};
