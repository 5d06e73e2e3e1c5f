use thiserror::Error;

/// Errors surfaced by [`Builder::build_strict`](crate::Builder::build_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
  /// Trigger id not found in the trigger catalog.
  #[error("unresolved trigger: {trigger_id}")]
  UnresolvedTrigger { trigger_id: String },

  /// Action id not found in the action catalog.
  #[error("unresolved action '{action_id}' at position {position}")]
  UnresolvedAction { action_id: String, position: usize },
}
