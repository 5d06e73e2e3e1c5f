use pinboard_config::{Region, RunMode, Schedule};
use serde::{Deserialize, Serialize};

/// The trigger joined against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTrigger {
  pub id: String,
  pub label: String,
  pub make_module: String,
}

/// One action in the resolved sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceStep {
  /// 1-based position in the resolved sequence
  pub order: usize,
  pub id: String,
  pub label: String,
  pub make_module: String,
}

/// A resolved blueprint ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBlueprint {
  pub name: String,
  pub description: String,
  pub region: Region,
  /// `None` when the input trigger id is not in the catalog.
  pub trigger: Option<ResolvedTrigger>,
  /// Resolved actions; `sequence[i].order == i + 1`.
  pub sequence: Vec<SequenceStep>,
  pub execution: RunMode,
  pub schedule: Option<Schedule>,
  pub qa_checklist: Vec<String>,
  pub ownership: String,
  pub webhooks: Vec<String>,
}

impl ResolvedBlueprint {
  /// Module names of the sequence, in order.
  pub fn module_chain(&self) -> Vec<&str> {
    self
      .sequence
      .iter()
      .map(|step| step.make_module.as_str())
      .collect()
  }

  /// Schedule that applies to this blueprint, if it runs on one.
  pub fn active_schedule(&self) -> Option<&Schedule> {
    match self.execution {
      RunMode::Scheduled => self.schedule.as_ref(),
      _ => None,
    }
  }
}
