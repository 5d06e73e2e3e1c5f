//! Fixed id → Make.com module name tables.

/// Module used for any trigger id without an explicit mapping.
pub const DEFAULT_TRIGGER_MODULE: &str = "custom-http/webhook";

/// Module used for any action id without an explicit mapping.
pub const DEFAULT_ACTION_MODULE: &str = "toolbox/custom-code";

pub const TRIGGER_MODULES: &[(&str, &str)] = &[
  ("new-pin", "pinterest/watch-pins"),
  ("new-idea-pin", "pinterest/watch-idea-pins"),
  ("pin-engagement", "pinterest/search-top-pins"),
  ("weekly-analytics", "schedule/weekly"),
];

pub const ACTION_MODULES: &[(&str, &str)] = &[
  ("create-pin", "pinterest/create-pin"),
  ("update-pin", "pinterest/update-pin"),
  ("google-sheet-row", "google-sheets/add-row"),
  ("slack-summary", "slack/post-message"),
  ("notion-database", "notion/upsert-page"),
  ("email-digest", "gmail/send-email"),
];

/// Canonical module for a trigger id. Total: unknown ids get the default.
pub fn trigger_module(trigger_id: &str) -> &'static str {
  lookup(TRIGGER_MODULES, trigger_id).unwrap_or(DEFAULT_TRIGGER_MODULE)
}

/// Canonical module for an action id. Total: unknown ids get the default.
pub fn action_module(action_id: &str) -> &'static str {
  lookup(ACTION_MODULES, action_id).unwrap_or(DEFAULT_ACTION_MODULE)
}

fn lookup(table: &'static [(&'static str, &'static str)], id: &str) -> Option<&'static str> {
  table
    .iter()
    .find(|(key, _)| *key == id)
    .map(|(_, module)| *module)
}
