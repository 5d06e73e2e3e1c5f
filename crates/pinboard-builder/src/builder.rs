use pinboard_blueprint::{
  ResolvedBlueprint, ResolvedTrigger, SequenceStep, action_module, trigger_module,
};
use pinboard_catalog::{
  ACTIONS, ActionDescriptor, Catalog, StaticCatalog, TRIGGERS, TriggerDescriptor,
};
use pinboard_config::AutomationInput;
use tracing::{debug, warn};

use crate::error::BuildError;

/// Builder transforms an AutomationInput into a ResolvedBlueprint.
pub trait Builder: Send + Sync {
  /// Build a blueprint.
  ///
  /// Never fails: an unknown trigger yields `trigger: None` and unknown
  /// action ids are dropped from the sequence.
  fn build(&self, input: AutomationInput) -> ResolvedBlueprint;

  /// Build a blueprint, rejecting ids that do not resolve.
  ///
  /// On success the output is identical to [`Builder::build`].
  fn build_strict(&self, input: AutomationInput) -> Result<ResolvedBlueprint, BuildError>;
}

/// Standard builder implementation that resolves ids against two catalogs.
#[derive(Debug, Clone)]
pub struct StandardBuilder<T, A> {
  triggers: T,
  actions: A,
}

/// Builder over the built-in Pinterest catalogs.
pub type DefaultBuilder =
  StandardBuilder<StaticCatalog<TriggerDescriptor>, StaticCatalog<ActionDescriptor>>;

impl DefaultBuilder {
  pub const fn with_builtin_catalogs() -> Self {
    Self {
      triggers: StaticCatalog::new(TRIGGERS),
      actions: StaticCatalog::new(ACTIONS),
    }
  }
}

impl Default for DefaultBuilder {
  fn default() -> Self {
    Self::with_builtin_catalogs()
  }
}

impl<T, A> StandardBuilder<T, A>
where
  T: Catalog<Entry = TriggerDescriptor>,
  A: Catalog<Entry = ActionDescriptor>,
{
  /// Create a new builder with the given trigger and action catalogs.
  pub fn new(triggers: T, actions: A) -> Self {
    Self { triggers, actions }
  }

  pub fn triggers(&self) -> &T {
    &self.triggers
  }

  pub fn actions(&self) -> &A {
    &self.actions
  }

  /// Credentials and resources needed to set up the input's modules.
  ///
  /// Trigger requirements come first, then those of each selected action in
  /// catalog order. Duplicates keep their first position.
  pub fn requirements(&self, input: &AutomationInput) -> Vec<&'static str> {
    let trigger_reqs = self
      .triggers
      .get(&input.trigger_id)
      .map(|trigger| trigger.requirements)
      .unwrap_or_default();

    let action_reqs = self
      .actions
      .entries()
      .iter()
      .filter(|action| input.action_ids.iter().any(|id| id == action.id))
      .flat_map(|action| action.requirements);

    let mut requirements: Vec<&'static str> = Vec::new();
    for requirement in trigger_reqs.iter().chain(action_reqs) {
      if !requirements.contains(requirement) {
        requirements.push(*requirement);
      }
    }
    requirements
  }

  fn resolve_trigger(&self, trigger_id: &str) -> Option<ResolvedTrigger> {
    self.triggers.get(trigger_id).map(|trigger| ResolvedTrigger {
      id: trigger.id.to_string(),
      label: trigger.label.to_string(),
      make_module: trigger_module(trigger.id).to_string(),
    })
  }

  /// Resolve action ids in order; `order` counts resolved entries only.
  fn resolve_sequence(&self, action_ids: &[String]) -> Vec<SequenceStep> {
    action_ids
      .iter()
      .filter_map(|id| {
        let action = self.actions.get(id);
        if action.is_none() {
          warn!(action_id = %id, "dropping unresolved action");
        }
        action
      })
      .enumerate()
      .map(|(index, action)| SequenceStep {
        order: index + 1,
        id: action.id.to_string(),
        label: action.label.to_string(),
        make_module: action_module(action.id).to_string(),
      })
      .collect()
  }

  /// Check every id up front; the first miss wins.
  fn check_resolvable(&self, input: &AutomationInput) -> Result<(), BuildError> {
    if !self.triggers.contains(&input.trigger_id) {
      return Err(BuildError::UnresolvedTrigger {
        trigger_id: input.trigger_id.clone(),
      });
    }

    if let Some((position, action_id)) = input
      .action_ids
      .iter()
      .enumerate()
      .find(|(_, id)| !self.actions.contains(id))
    {
      return Err(BuildError::UnresolvedAction {
        action_id: action_id.clone(),
        position,
      });
    }

    Ok(())
  }
}

impl<T, A> Builder for StandardBuilder<T, A>
where
  T: Catalog<Entry = TriggerDescriptor>,
  A: Catalog<Entry = ActionDescriptor>,
{
  fn build(&self, input: AutomationInput) -> ResolvedBlueprint {
    let trigger = self.resolve_trigger(&input.trigger_id);
    if trigger.is_none() {
      warn!(trigger_id = %input.trigger_id, "trigger not found in catalog");
    }

    let sequence = self.resolve_sequence(&input.action_ids);

    debug!(
      name = %input.name,
      trigger = ?trigger.as_ref().map(|t| &t.make_module),
      steps = sequence.len(),
      requested = input.action_ids.len(),
      "blueprint_built"
    );

    ResolvedBlueprint {
      name: input.name,
      description: input.description,
      region: input.region,
      trigger,
      sequence,
      execution: input.run_mode,
      schedule: input.schedule,
      qa_checklist: input.qa_steps,
      ownership: input.owner,
      webhooks: input.webhooks,
    }
  }

  fn build_strict(&self, input: AutomationInput) -> Result<ResolvedBlueprint, BuildError> {
    self.check_resolvable(&input)?;
    Ok(self.build(input))
  }
}

/// Build a blueprint against the built-in catalogs.
pub fn build(input: AutomationInput) -> ResolvedBlueprint {
  DefaultBuilder::with_builtin_catalogs().build(input)
}
