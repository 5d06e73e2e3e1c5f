use pinboard_catalog::ScenarioTemplate;

use crate::enums::{Frequency, Region, RunMode};
use crate::input::{AutomationInput, Schedule};

/// Owner assigned to automations prefilled from a template.
pub const DEFAULT_OWNER: &str = "marketing-automation@company.com";

/// Templates starting from this trigger are prefilled as scheduled runs.
pub const SCHEDULED_TRIGGER_ID: &str = "weekly-analytics";

/// Slot used for the weekly schedule of prefilled templates.
pub const DEFAULT_WEEKLY_SLOT: &str = "Monday 08:00 EST";

impl AutomationInput {
  /// Prefill an input from a scenario template preset.
  pub fn from_template(template: &ScenarioTemplate) -> Self {
    let (run_mode, schedule) = if template.trigger_id == SCHEDULED_TRIGGER_ID {
      (
        RunMode::Scheduled,
        Some(Schedule {
          frequency: Frequency::Weekly,
          value: DEFAULT_WEEKLY_SLOT.to_string(),
        }),
      )
    } else {
      (RunMode::Immediate, None)
    };

    Self {
      name: template.name.to_string(),
      description: template.description.to_string(),
      trigger_id: template.trigger_id.to_string(),
      action_ids: template.action_ids.iter().map(|id| id.to_string()).collect(),
      run_mode,
      schedule,
      region: Region::Us2,
      qa_steps: template
        .verification_checklist
        .iter()
        .map(|step| step.to_string())
        .collect(),
      owner: DEFAULT_OWNER.to_string(),
      webhooks: Vec::new(),
    }
  }
}
