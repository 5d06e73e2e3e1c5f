use std::fmt::Write;

use pinboard_blueprint::ResolvedBlueprint;

use crate::steps::steps;

/// Shown in place of a trigger module when the trigger did not resolve.
const CUSTOM_TRIGGER: &str = "Custom setup";

/// Render a full overview of a blueprint.
///
/// `requirements` is the aggregated list of credentials and assets the
/// chosen modules need; it is supplied by the caller because the blueprint
/// itself does not carry catalog metadata.
pub fn render_summary(blueprint: &ResolvedBlueprint, requirements: &[&str]) -> String {
  let mut out = String::new();

  write_summary(&mut out, blueprint, requirements).expect("writing to a String cannot fail");
  out
}

fn write_summary(
  out: &mut String,
  blueprint: &ResolvedBlueprint,
  requirements: &[&str],
) -> std::fmt::Result {
  writeln!(out, "# {}", blueprint.name)?;
  writeln!(out, "Region: {}", blueprint.region)?;
  writeln!(out)?;
  writeln!(out, "{}", blueprint.description)?;
  writeln!(out)?;

  writeln!(out, "## Scenario Overview")?;
  writeln!(out, "- Owner: {}", blueprint.ownership)?;
  write!(out, "- Execution mode: {}", blueprint.execution)?;
  if let Some(schedule) = &blueprint.schedule {
    write!(out, " ({} → {})", schedule.frequency, schedule.value)?;
  }
  writeln!(out)?;
  writeln!(
    out,
    "- Trigger module: {}",
    blueprint
      .trigger
      .as_ref()
      .map(|t| t.make_module.as_str())
      .unwrap_or(CUSTOM_TRIGGER)
  )?;
  writeln!(
    out,
    "- Downstream actions: {}",
    blueprint.module_chain().join(" → ")
  )?;

  writeln!(out)?;
  writeln!(out, "## Implementation Checklist")?;
  for line in steps(blueprint) {
    writeln!(out, "{}", line)?;
  }

  writeln!(out)?;
  writeln!(out, "## Credential & Asset Requirements")?;
  for requirement in requirements {
    writeln!(out, "- {}", requirement)?;
  }

  writeln!(out)?;
  writeln!(out, "## QA Validation")?;
  for item in &blueprint.qa_checklist {
    writeln!(out, "- [ ] {}", item)?;
  }

  if !blueprint.webhooks.is_empty() {
    writeln!(out)?;
    writeln!(out, "## Webhook Endpoints")?;
    for hook in &blueprint.webhooks {
      writeln!(out, "- `{}`", hook)?;
    }
  }

  Ok(())
}
