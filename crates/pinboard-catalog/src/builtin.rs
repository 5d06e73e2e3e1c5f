use crate::catalog::StaticCatalog;
use crate::descriptor::{
  ActionDescriptor, ActionService, ScenarioTemplate, TriggerCategory, TriggerDescriptor,
};

pub const TRIGGERS: &[TriggerDescriptor] = &[
  TriggerDescriptor {
    id: "new-pin",
    label: "New Pin Published",
    description: "Runs whenever a new Pin is published to a specific board.",
    category: TriggerCategory::Content,
    requirements: &["Pinterest business account", "Board ID"],
  },
  TriggerDescriptor {
    id: "new-idea-pin",
    label: "New Idea Pin",
    description: "Monitors Idea Pin publishing events for storytelling formats.",
    category: TriggerCategory::Content,
    requirements: &["Idea Pin template", "Creator permissions"],
  },
  TriggerDescriptor {
    id: "pin-engagement",
    label: "Pin Engagement Spike",
    description: "Detects when repins or saves exceed a defined threshold.",
    category: TriggerCategory::Engagement,
    requirements: &["Pinterest analytics API token", "Threshold definition"],
  },
  TriggerDescriptor {
    id: "weekly-analytics",
    label: "Weekly Analytics Snapshot",
    description: "Scheduled trigger that pulls analytics every Monday 8am (us2).",
    category: TriggerCategory::Analytics,
    requirements: &["Pinterest analytics API token"],
  },
];

pub const ACTIONS: &[ActionDescriptor] = &[
  ActionDescriptor {
    id: "create-pin",
    label: "Create Pinterest Pin",
    description: "Uploads a new Pin to a selected board with provided media.",
    service: ActionService::Pinterest,
    requirements: &["Image URL", "Destination link", "Board ID"],
  },
  ActionDescriptor {
    id: "update-pin",
    label: "Update Pin Metadata",
    description: "Updates title, notes, or alt text on an existing Pin.",
    service: ActionService::Pinterest,
    requirements: &["Pin ID", "Fields to update"],
  },
  ActionDescriptor {
    id: "google-sheet-row",
    label: "Append Google Sheet Row",
    description: "Adds analytics or publishing metadata to a Google Sheet log.",
    service: ActionService::Google,
    requirements: &["Google service account", "Spreadsheet ID"],
  },
  ActionDescriptor {
    id: "slack-summary",
    label: "Send Slack Summary",
    description: "Posts campaign results into a Slack channel.",
    service: ActionService::Slack,
    requirements: &["Slack bot token", "Channel ID"],
  },
  ActionDescriptor {
    id: "notion-database",
    label: "Sync to Notion Database",
    description: "Creates or updates a Notion database item with Pin metrics.",
    service: ActionService::Notion,
    requirements: &["Notion integration token", "Database ID"],
  },
  ActionDescriptor {
    id: "email-digest",
    label: "Email Digest",
    description: "Builds an HTML email digest for stakeholders and sends via Gmail module.",
    service: ActionService::Email,
    requirements: &["Verified sender", "Recipient list"],
  },
];

pub const TEMPLATES: &[ScenarioTemplate] = &[
  ScenarioTemplate {
    id: "content-distribution",
    name: "Content Distribution Engine",
    description: "Publishes new blog content to Pinterest, logs it, and pings Slack for visibility.",
    trigger_id: "weekly-analytics",
    action_ids: &["create-pin", "google-sheet-row", "slack-summary"],
    scenario_map: &[
      "HTTP module pulls new CMS entries",
      "Iterator loops assets",
      "Pinterest > Create Pin",
      "Google Sheets > Add row",
      "Slack > Post message",
    ],
    verification_checklist: &[
      "Run the scenario with a single CMS entry in manual mode",
      "Confirm new Pin appears on the target board",
      "Check that the Google Sheet row contains UTM parameters",
      "Verify Slack message formatting matches the campaign template",
    ],
  },
  ScenarioTemplate {
    id: "engagement-alerts",
    name: "Engagement Surge Alerts",
    description: "Detects high performing Pins and notifies the growth team with actionable metrics.",
    trigger_id: "pin-engagement",
    action_ids: &["slack-summary", "notion-database"],
    scenario_map: &[
      "Pinterest Analytics > Search pins",
      "Filter module for saves > threshold",
      "Slack > Send message",
      "Notion > Upsert database item",
    ],
    verification_checklist: &[
      "Run test with mocked analytics data via CSV module",
      "Validate Slack message contains CTA buttons",
      "Check Notion record includes direct Pin link and owner",
    ],
  },
  ScenarioTemplate {
    id: "idea-pin-workflow",
    name: "Idea Pin Workflow",
    description: "Streamlines Idea Pin production with drafts, approvals, and scheduled publishing.",
    trigger_id: "new-idea-pin",
    action_ids: &["update-pin", "email-digest"],
    scenario_map: &[
      "Pinterest > Watch Idea Pins",
      "Router > Approval path",
      "Email > Request feedback",
      "Delay > Wait for approval",
      "Pinterest > Update Pin metadata",
    ],
    verification_checklist: &[
      "Confirm drafts enter approval column in Notion board",
      "Test rejection branch exits gracefully",
      "Validate final publish status toggles to Approved",
    ],
  },
];

static TRIGGER_CATALOG: StaticCatalog<TriggerDescriptor> = StaticCatalog::new(TRIGGERS);
static ACTION_CATALOG: StaticCatalog<ActionDescriptor> = StaticCatalog::new(ACTIONS);
static TEMPLATE_CATALOG: StaticCatalog<ScenarioTemplate> = StaticCatalog::new(TEMPLATES);

/// The built-in trigger catalog.
pub fn triggers() -> &'static StaticCatalog<TriggerDescriptor> {
  &TRIGGER_CATALOG
}

/// The built-in action catalog.
pub fn actions() -> &'static StaticCatalog<ActionDescriptor> {
  &ACTION_CATALOG
}

/// The built-in scenario templates.
pub fn templates() -> &'static StaticCatalog<ScenarioTemplate> {
  &TEMPLATE_CATALOG
}
