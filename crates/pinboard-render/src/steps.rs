use pinboard_blueprint::ResolvedBlueprint;

/// First number used for sequence steps; 1 and 2 are scenario and trigger.
const FIRST_ACTION_STEP: usize = 3;

/// The setup checklist as individual lines.
pub fn steps(blueprint: &ResolvedBlueprint) -> Vec<String> {
  let region = blueprint.region;
  let mut lines = Vec::with_capacity(blueprint.sequence.len() + 6);

  lines.push(format!("# Scenario Setup ({}.make.com)", region));
  lines.push(format!(
    "1. Create new scenario, set region to **{}**.",
    region
  ));

  match &blueprint.trigger {
    Some(trigger) => lines.push(format!(
      "2. Add trigger module: **{}** ({}).",
      trigger.make_module, trigger.label
    )),
    None => lines.push("2. Add initial module or webhook trigger.".to_string()),
  }

  for (index, step) in blueprint.sequence.iter().enumerate() {
    lines.push(format!(
      "{}. Add module: **{}** ({}).",
      index + FIRST_ACTION_STEP,
      step.make_module,
      step.label
    ));
  }

  // Unnumbered, so omitting either never leaves a gap.
  if let Some(schedule) = blueprint.active_schedule() {
    lines.push(format!(
      "Configure scheduler: {} -> {}.",
      schedule.frequency, schedule.value
    ));
  }

  if !blueprint.webhooks.is_empty() {
    let hooks: Vec<String> = blueprint
      .webhooks
      .iter()
      .map(|hook| format!("`{}`", hook))
      .collect();
    lines.push(format!("Configure webhooks: {}.", hooks.join(", ")));
  }

  lines.push("Enable scenario logging, save, and switch to ON.".to_string());
  lines.push("Run initial test with reduced data set.".to_string());
  lines
}

/// Render the setup checklist, one line per step, joined with `\n`.
pub fn render(blueprint: &ResolvedBlueprint) -> String {
  steps(blueprint).join("\n")
}

#[cfg(test)]
mod tests {
  use pinboard_blueprint::{ResolvedTrigger, SequenceStep};
  use pinboard_config::{Frequency, Region, RunMode, Schedule};

  use super::*;

  fn step(order: usize, id: &str, label: &str, module: &str) -> SequenceStep {
    SequenceStep {
      order,
      id: id.to_string(),
      label: label.to_string(),
      make_module: module.to_string(),
    }
  }

  fn blueprint() -> ResolvedBlueprint {
    ResolvedBlueprint {
      name: "Pin Publisher".to_string(),
      description: "Publish new pins and log them".to_string(),
      region: Region::Us2,
      trigger: Some(ResolvedTrigger {
        id: "new-pin".to_string(),
        label: "New Pin Published".to_string(),
        make_module: "pinterest/watch-pins".to_string(),
      }),
      sequence: vec![
        step(1, "create-pin", "Create Pinterest Pin", "pinterest/create-pin"),
        step(
          2,
          "google-sheet-row",
          "Append Google Sheet Row",
          "google-sheets/add-row",
        ),
      ],
      execution: RunMode::Immediate,
      schedule: None,
      qa_checklist: vec!["Run once with sample data".to_string()],
      ownership: "growth-team@company.com".to_string(),
      webhooks: vec![],
    }
  }

  #[test]
  fn test_render_minimal() {
    let expected = "\
# Scenario Setup (us2.make.com)
1. Create new scenario, set region to **us2**.
2. Add trigger module: **pinterest/watch-pins** (New Pin Published).
3. Add module: **pinterest/create-pin** (Create Pinterest Pin).
4. Add module: **google-sheets/add-row** (Append Google Sheet Row).
Enable scenario logging, save, and switch to ON.
Run initial test with reduced data set.";

    assert_eq!(render(&blueprint()), expected);
  }

  #[test]
  fn test_render_without_trigger() {
    let mut blueprint = blueprint();
    blueprint.trigger = None;

    let lines = steps(&blueprint);
    assert_eq!(lines[2], "2. Add initial module or webhook trigger.");
    assert_eq!(lines[3], "3. Add module: **pinterest/create-pin** (Create Pinterest Pin).");
  }

  #[test]
  fn test_scheduler_and_webhooks_after_numbered_steps() {
    let mut blueprint = blueprint();
    blueprint.execution = RunMode::Scheduled;
    blueprint.schedule = Some(Schedule {
      frequency: Frequency::Weekly,
      value: "Monday 08:00 EST".to_string(),
    });
    blueprint.webhooks = vec![
      "https://a.example/hook".to_string(),
      "https://b.example/hook".to_string(),
    ];

    let lines = steps(&blueprint);
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[4], "4. Add module: **google-sheets/add-row** (Append Google Sheet Row).");
    assert_eq!(lines[5], "Configure scheduler: weekly -> Monday 08:00 EST.");
    assert_eq!(
      lines[6],
      "Configure webhooks: `https://a.example/hook`, `https://b.example/hook`."
    );
    assert_eq!(lines[7], "Enable scenario logging, save, and switch to ON.");
    assert_eq!(lines[8], "Run initial test with reduced data set.");
  }

  #[test]
  fn test_schedule_ignored_unless_scheduled() {
    let mut blueprint = blueprint();
    blueprint.execution = RunMode::Batch;
    blueprint.schedule = Some(Schedule {
      frequency: Frequency::Cron,
      value: "0 * * * *".to_string(),
    });

    assert!(!render(&blueprint).contains("Configure scheduler"));
  }

  #[test]
  fn test_scheduled_without_schedule_has_no_scheduler_line() {
    let mut blueprint = blueprint();
    blueprint.execution = RunMode::Scheduled;

    assert!(!render(&blueprint).contains("Configure scheduler"));
  }

  #[test]
  fn test_empty_sequence() {
    let mut blueprint = blueprint();
    blueprint.sequence.clear();

    let lines = steps(&blueprint);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], "Enable scenario logging, save, and switch to ON.");
  }

  #[test]
  fn test_no_trailing_newline() {
    assert!(!render(&blueprint()).ends_with('\n'));
  }
}
