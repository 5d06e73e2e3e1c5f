use thiserror::Error;

/// A single rule violated by an [`AutomationInput`](crate::AutomationInput).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// Text field shorter than its minimum length (in characters).
  #[error("{field}: must be at least {min} characters")]
  TooShort { field: String, min: usize },

  /// List field that must contain at least one entry.
  #[error("{field}: at least one entry is required")]
  Empty { field: String },

  /// Webhook that does not parse as an absolute URL.
  #[error("{field}: invalid url '{value}': {reason}")]
  InvalidUrl {
    field: String,
    value: String,
    reason: String,
  },

  /// Scheduled run mode without a schedule.
  #[error("schedule: required when runMode is scheduled")]
  MissingSchedule,

  /// Schedule present but its expression is blank.
  #[error("schedule.value: provide schedule expression")]
  MissingScheduleValue,
}

impl ValidationError {
  /// Path of the offending field, e.g. `qaSteps[1]`.
  pub fn field(&self) -> &str {
    match self {
      ValidationError::TooShort { field, .. }
      | ValidationError::Empty { field }
      | ValidationError::InvalidUrl { field, .. } => field,
      ValidationError::MissingSchedule => "schedule",
      ValidationError::MissingScheduleValue => "schedule.value",
    }
  }
}

/// Every violation found in one input, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid automation input ({} issue(s)){}", .0.len(), bullet_list(.0.as_slice()))]
pub struct ValidationErrors(Vec<ValidationError>);

fn bullet_list(errors: &[ValidationError]) -> String {
  errors.iter().map(|e| format!("\n  - {}", e)).collect()
}

impl ValidationErrors {
  pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
    Self(errors)
  }

  pub fn errors(&self) -> &[ValidationError] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Whether any violation points at the given field path.
  pub fn has_field(&self, field: &str) -> bool {
    self.0.iter().any(|e| e.field() == field)
  }
}

impl IntoIterator for ValidationErrors {
  type Item = ValidationError;
  type IntoIter = std::vec::IntoIter<ValidationError>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_errors_display_lists_each_violation() {
    let errors = ValidationErrors::new(vec![
      ValidationError::Empty {
        field: "qaSteps".to_string(),
      },
      ValidationError::MissingSchedule,
    ]);

    assert_eq!(
      errors.to_string(),
      "invalid automation input (2 issue(s))\n  - qaSteps: at least one entry is required\n  - schedule: required when runMode is scheduled"
    );
  }

  #[test]
  fn test_errors_is_std_error() {
    let errors: Box<dyn std::error::Error + Send + Sync> =
      Box::new(ValidationErrors::new(vec![ValidationError::MissingScheduleValue]));
    assert!(errors.source().is_none());
    assert!(errors.to_string().ends_with("schedule.value: provide schedule expression"));
  }
}
