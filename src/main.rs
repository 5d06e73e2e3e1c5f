use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pinboard_blueprint::ResolvedBlueprint;
use pinboard_builder::{Builder, DefaultBuilder};
use pinboard_catalog::{ACTIONS, Catalog, TEMPLATES, TRIGGERS, templates};
use pinboard_config::AutomationInput;
use pinboard_render::{render, render_summary};

/// Pinboard - Make.com build checklists for Pinterest automations
#[derive(Parser)]
#[command(name = "pinboard")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List one of the built-in catalogs
  Catalog {
    #[arg(value_enum)]
    kind: CatalogKind,

    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
  },

  /// Generate a blueprint from an automation input document
  Generate {
    /// Path to the input file (JSON). Reads stdin when omitted.
    input_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Steps)]
    format: OutputFormat,

    /// Fail on trigger or action ids missing from the catalogs
    #[arg(long)]
    strict: bool,
  },

  /// Generate a blueprint from a scenario template
  Template {
    /// The template ID, e.g. "engagement-alerts"
    template_id: String,

    /// Override the default automation owner
    #[arg(long)]
    owner: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Steps)]
    format: OutputFormat,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
  Triggers,
  Actions,
  Templates,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
  /// The numbered setup checklist
  Steps,
  /// The resolved blueprint as JSON
  Json,
  /// Overview, checklist, requirements and QA
  Summary,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Catalog { kind, json }) => print_catalog(kind, json)?,
    Some(Commands::Generate {
      input_file,
      format,
      strict,
    }) => {
      let input = read_input(input_file)?;
      generate(input, strict, format)?;
    }
    Some(Commands::Template {
      template_id,
      owner,
      format,
    }) => {
      let template = templates()
        .get(&template_id)
        .with_context(|| format!("template '{}' not found", template_id))?;

      let mut input = AutomationInput::from_template(template);
      if let Some(owner) = owner {
        input.owner = owner;
      }

      info!(template_id = %template.id, "prefilled input from template");
      generate(input, true, format)?;
    }
    None => {
      println!("pinboard - use --help to see available commands");
    }
  }

  Ok(())
}

fn generate(input: AutomationInput, strict: bool, format: OutputFormat) -> Result<()> {
  let input = input.normalize();
  input.validate()?;

  let builder = DefaultBuilder::default();
  let requirements = builder.requirements(&input);

  let blueprint = if strict {
    builder
      .build_strict(input)
      .context("failed to build blueprint")?
  } else {
    builder.build(input)
  };

  info!(
    name = %blueprint.name,
    steps = blueprint.sequence.len(),
    "blueprint ready"
  );

  print_blueprint(&blueprint, &requirements, format)
}

fn print_blueprint(
  blueprint: &ResolvedBlueprint,
  requirements: &[&str],
  format: OutputFormat,
) -> Result<()> {
  match format {
    OutputFormat::Steps => println!("{}", render(blueprint)),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(blueprint)?),
    OutputFormat::Summary => print!("{}", render_summary(blueprint, requirements)),
  }
  Ok(())
}

fn print_catalog(kind: CatalogKind, json: bool) -> Result<()> {
  if json {
    let output = match kind {
      CatalogKind::Triggers => serde_json::to_string_pretty(TRIGGERS)?,
      CatalogKind::Actions => serde_json::to_string_pretty(ACTIONS)?,
      CatalogKind::Templates => serde_json::to_string_pretty(TEMPLATES)?,
    };
    println!("{}", output);
    return Ok(());
  }

  match kind {
    CatalogKind::Triggers => {
      for trigger in TRIGGERS {
        println!("{} - {} [{}]", trigger.id, trigger.label, trigger.category);
        println!("    {}", trigger.description);
        println!("    requires: {}", trigger.requirements.join(", "));
      }
    }
    CatalogKind::Actions => {
      for action in ACTIONS {
        println!("{} - {} [{}]", action.id, action.label, action.service);
        println!("    {}", action.description);
        println!("    requires: {}", action.requirements.join(", "));
      }
    }
    CatalogKind::Templates => {
      for template in TEMPLATES {
        println!("{} - {}", template.id, template.name);
        println!("    {}", template.description);
        println!("    trigger: {}", template.trigger_id);
        println!("    actions: {}", template.action_ids.join(", "));
        for (index, step) in template.scenario_map.iter().enumerate() {
          println!("    {}. {}", index + 1, step);
        }
      }
    }
  }

  Ok(())
}

fn read_input(input_file: Option<PathBuf>) -> Result<AutomationInput> {
  use std::io::IsTerminal;

  let content = match input_file {
    Some(path) => std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read input file: {}", path.display()))?,
    None => {
      if io::stdin().is_terminal() {
        bail!("no input file given and nothing piped on stdin");
      }
      let mut content = String::new();
      io::stdin()
        .read_to_string(&mut content)
        .context("failed to read input from stdin")?;
      content
    }
  };

  serde_json::from_str(&content).context("failed to parse automation input JSON")
}
