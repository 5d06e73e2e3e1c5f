//! Pinboard Blueprint
//!
//! This crate provides the resolved blueprint representation for Pinboard.
//! A blueprint is the output of the builder: the chosen trigger and actions
//! joined against the catalog and mapped to the canonical Make.com module
//! names, ready to be rendered as build instructions.
//!
//! Key differences from `pinboard-config`:
//! - Ids are resolved to catalog labels
//! - Each step carries its canonical module name
//! - Actions are numbered by their position in the resolved sequence

mod blueprint;
mod module;

pub use blueprint::{ResolvedBlueprint, ResolvedTrigger, SequenceStep};
pub use module::{
  ACTION_MODULES, DEFAULT_ACTION_MODULE, DEFAULT_TRIGGER_MODULE, TRIGGER_MODULES, action_module,
  trigger_module,
};
