use std::fmt;

use serde::Serialize;

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
  Content,
  Engagement,
  Analytics,
}

/// Service an action talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionService {
  Pinterest,
  Make,
  Google,
  Notion,
  Slack,
  Email,
}

/// An event source that starts a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerDescriptor {
  /// Unique id, e.g. "new-pin"
  pub id: &'static str,
  pub label: &'static str,
  pub description: &'static str,
  pub category: TriggerCategory,
  /// External credentials or resources needed to configure the trigger
  pub requirements: &'static [&'static str],
}

/// A step performed once a scenario is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
  /// Unique id, e.g. "create-pin"
  pub id: &'static str,
  pub label: &'static str,
  pub description: &'static str,
  pub service: ActionService,
  /// External credentials or resources needed to configure the action
  pub requirements: &'static [&'static str],
}

/// A canned trigger + actions bundle used to prefill an automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTemplate {
  pub id: &'static str,
  pub name: &'static str,
  pub description: &'static str,
  /// References a [`TriggerDescriptor`] id.
  pub trigger_id: &'static str,
  /// Each references an [`ActionDescriptor`] id.
  pub action_ids: &'static [&'static str],
  /// Illustrative module-by-module outline of the scenario.
  pub scenario_map: &'static [&'static str],
  pub verification_checklist: &'static [&'static str],
}

impl TriggerCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      TriggerCategory::Content => "content",
      TriggerCategory::Engagement => "engagement",
      TriggerCategory::Analytics => "analytics",
    }
  }
}

impl ActionService {
  pub fn as_str(&self) -> &'static str {
    match self {
      ActionService::Pinterest => "pinterest",
      ActionService::Make => "make",
      ActionService::Google => "google",
      ActionService::Notion => "notion",
      ActionService::Slack => "slack",
      ActionService::Email => "email",
    }
  }
}

impl fmt::Display for TriggerCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for ActionService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl CatalogEntry for TriggerDescriptor {
  fn id(&self) -> &str {
    self.id
  }
}

impl CatalogEntry for ActionDescriptor {
  fn id(&self) -> &str {
    self.id
  }
}

impl CatalogEntry for ScenarioTemplate {
  fn id(&self) -> &str {
    self.id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_enums_serialize_lowercase() {
    assert_eq!(
      serde_json::to_value(TriggerCategory::Engagement).unwrap(),
      "engagement"
    );
    assert_eq!(serde_json::to_value(ActionService::Google).unwrap(), "google");
  }

  #[test]
  fn test_display_matches_serde_names() {
    for service in [
      ActionService::Pinterest,
      ActionService::Make,
      ActionService::Google,
      ActionService::Notion,
      ActionService::Slack,
      ActionService::Email,
    ] {
      assert_eq!(serde_json::to_value(service).unwrap(), service.to_string());
    }
    assert_eq!(TriggerCategory::Analytics.to_string(), "analytics");
  }

  #[test]
  fn test_template_serializes_camel_case() {
    let template = ScenarioTemplate {
      id: "t",
      name: "T",
      description: "d",
      trigger_id: "new-pin",
      action_ids: &["create-pin"],
      scenario_map: &[],
      verification_checklist: &["check"],
    };

    let value = serde_json::to_value(&template).unwrap();
    assert_eq!(value["triggerId"], "new-pin");
    assert_eq!(value["actionIds"], serde_json::json!(["create-pin"]));
    assert_eq!(value["verificationChecklist"], serde_json::json!(["check"]));
  }
}
