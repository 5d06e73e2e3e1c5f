use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::enums::{Frequency, Region, RunMode};
use crate::error::{ValidationError, ValidationErrors};

const MIN_NAME_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_OWNER_CHARS: usize = 3;
const MIN_QA_STEP_CHARS: usize = 5;

/// When a scheduled scenario runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
  pub frequency: Frequency,
  /// Free-form time or cron expression, e.g. "Monday 08:00 EST"
  pub value: String,
}

/// Everything the builder needs to produce one blueprint.
///
/// ```json
/// {
///   "name": "Pin Publisher",
///   "description": "Publish new pins and log them",
///   "triggerId": "new-pin",
///   "actionIds": ["create-pin", "google-sheet-row"],
///   "runMode": "immediate",
///   "qaSteps": ["Run once with sample data"],
///   "owner": "growth-team@company.com",
///   "webhooks": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationInput {
  pub name: String,
  pub description: String,
  pub trigger_id: String,
  pub action_ids: Vec<String>,
  pub run_mode: RunMode,
  /// Present iff `run_mode` is [`RunMode::Scheduled`] once normalized.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schedule: Option<Schedule>,
  #[serde(default)]
  pub region: Region,
  pub qa_steps: Vec<String>,
  pub owner: String,
  #[serde(default)]
  pub webhooks: Vec<String>,
}

impl AutomationInput {
  /// Drop a schedule that came with a non-scheduled run mode.
  pub fn normalize(mut self) -> Self {
    if self.run_mode != RunMode::Scheduled && self.schedule.is_some() {
      debug!(run_mode = %self.run_mode, "dropping schedule for unscheduled run mode");
      self.schedule = None;
    }
    self
  }

  /// Check the input against the form rules.
  ///
  /// All violations are collected rather than stopping at the first one.
  pub fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_min_chars(&mut errors, "name", &self.name, MIN_NAME_CHARS);
    check_min_chars(
      &mut errors,
      "description",
      &self.description,
      MIN_DESCRIPTION_CHARS,
    );

    if self.action_ids.is_empty() {
      errors.push(ValidationError::Empty {
        field: "actionIds".to_string(),
      });
    }

    if self.run_mode == RunMode::Scheduled {
      match &self.schedule {
        None => errors.push(ValidationError::MissingSchedule),
        Some(schedule) if schedule.value.is_empty() => {
          errors.push(ValidationError::MissingScheduleValue)
        }
        Some(_) => {}
      }
    }

    if self.qa_steps.is_empty() {
      errors.push(ValidationError::Empty {
        field: "qaSteps".to_string(),
      });
    }
    for (index, step) in self.qa_steps.iter().enumerate() {
      check_min_chars(
        &mut errors,
        &format!("qaSteps[{}]", index),
        step,
        MIN_QA_STEP_CHARS,
      );
    }

    check_min_chars(&mut errors, "owner", &self.owner, MIN_OWNER_CHARS);

    for (index, hook) in self.webhooks.iter().enumerate() {
      if let Err(e) = Url::parse(hook) {
        errors.push(ValidationError::InvalidUrl {
          field: format!("webhooks[{}]", index),
          value: hook.clone(),
          reason: e.to_string(),
        });
      }
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ValidationErrors::new(errors))
    }
  }
}

fn check_min_chars(errors: &mut Vec<ValidationError>, field: &str, value: &str, min: usize) {
  if value.chars().count() < min {
    errors.push(ValidationError::TooShort {
      field: field.to_string(),
      min,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_input() -> AutomationInput {
    AutomationInput {
      name: "Pin Publisher".to_string(),
      description: "Publish new pins and log them".to_string(),
      trigger_id: "new-pin".to_string(),
      action_ids: vec!["create-pin".to_string()],
      run_mode: RunMode::Immediate,
      schedule: None,
      region: Region::Us2,
      qa_steps: vec!["Run scenario once in manual mode using sample data".to_string()],
      owner: "growth-team@company.com".to_string(),
      webhooks: vec![],
    }
  }

  #[test]
  fn test_valid_input_passes() {
    assert!(valid_input().validate().is_ok());
  }

  #[test]
  fn test_deserialize_camel_case_with_defaults() {
    let input: AutomationInput = serde_json::from_value(serde_json::json!({
      "name": "Pin Publisher",
      "description": "Publish new pins and log them",
      "triggerId": "new-pin",
      "actionIds": ["create-pin", "google-sheet-row"],
      "runMode": "scheduled",
      "schedule": { "frequency": "weekly", "value": "Monday 08:00 EST" },
      "qaSteps": ["Run once with sample data"],
      "owner": "growth-team@company.com"
    }))
    .unwrap();

    assert_eq!(input.trigger_id, "new-pin");
    assert_eq!(input.action_ids.len(), 2);
    assert_eq!(input.region, Region::Us2);
    assert!(input.webhooks.is_empty());
    assert_eq!(
      input.schedule,
      Some(Schedule {
        frequency: Frequency::Weekly,
        value: "Monday 08:00 EST".to_string(),
      })
    );
  }

  #[test]
  fn test_short_fields_rejected() {
    let mut input = valid_input();
    input.name = "ab".to_string();
    input.description = "too short".to_string();
    input.owner = "me".to_string();

    let errors = input.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.has_field("name"));
    assert!(errors.has_field("description"));
    assert!(errors.has_field("owner"));
  }

  #[test]
  fn test_length_counts_characters_not_bytes() {
    let mut input = valid_input();
    input.name = "éé".to_string();
    assert!(input.validate().unwrap_err().has_field("name"));

    input.name = "ééé".to_string();
    assert!(input.validate().is_ok());
  }

  #[test]
  fn test_empty_lists_rejected() {
    let mut input = valid_input();
    input.action_ids.clear();
    input.qa_steps.clear();

    let errors = input.validate().unwrap_err();
    assert!(errors.has_field("actionIds"));
    assert!(errors.has_field("qaSteps"));
  }

  #[test]
  fn test_short_qa_step_reports_index() {
    let mut input = valid_input();
    input.qa_steps.push("ok".to_string());

    let errors = input.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.has_field("qaSteps[1]"));
  }

  #[test]
  fn test_invalid_webhook_rejected() {
    let mut input = valid_input();
    input.webhooks = vec![
      "https://a.example/hook".to_string(),
      "not a url".to_string(),
    ];

    let errors = input.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors.errors()[0] {
      ValidationError::InvalidUrl { field, value, .. } => {
        assert_eq!(field, "webhooks[1]");
        assert_eq!(value, "not a url");
      }
      other => panic!("expected invalid url, got {:?}", other),
    }
  }

  #[test]
  fn test_scheduled_requires_schedule() {
    let mut input = valid_input();
    input.run_mode = RunMode::Scheduled;
    assert_eq!(
      input.validate().unwrap_err().errors(),
      &[ValidationError::MissingSchedule]
    );

    input.schedule = Some(Schedule {
      frequency: Frequency::Daily,
      value: String::new(),
    });
    assert_eq!(
      input.validate().unwrap_err().errors(),
      &[ValidationError::MissingScheduleValue]
    );

    input.schedule = Some(Schedule {
      frequency: Frequency::Daily,
      value: "  ".to_string(),
    });
    assert!(input.validate().is_ok());

    input.schedule = Some(Schedule {
      frequency: Frequency::Daily,
      value: "09:00".to_string(),
    });
    assert!(input.validate().is_ok());
  }

  #[test]
  fn test_normalize_drops_stray_schedule() {
    let mut input = valid_input();
    input.schedule = Some(Schedule {
      frequency: Frequency::Hourly,
      value: "every hour".to_string(),
    });

    let normalized = input.clone().normalize();
    assert!(normalized.schedule.is_none());

    input.run_mode = RunMode::Scheduled;
    let normalized = input.normalize();
    assert!(normalized.schedule.is_some());
  }

  #[test]
  fn test_error_display_lists_every_issue() {
    let mut input = valid_input();
    input.name = String::new();
    input.action_ids.clear();

    let message = input.validate().unwrap_err().to_string();
    assert!(message.starts_with("invalid automation input (2 issue(s))"));
    assert!(message.contains("name: must be at least 3 characters"));
    assert!(message.contains("actionIds: at least one entry is required"));
  }
}
