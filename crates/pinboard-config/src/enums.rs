use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
  Immediate,
  Scheduled,
  Batch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
  Hourly,
  Daily,
  Weekly,
  Cron,
}

/// Make.com cluster the scenario is built on. Only `us2` is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
  #[default]
  Us2,
}

impl RunMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      RunMode::Immediate => "immediate",
      RunMode::Scheduled => "scheduled",
      RunMode::Batch => "batch",
    }
  }
}

impl Frequency {
  pub fn as_str(&self) -> &'static str {
    match self {
      Frequency::Hourly => "hourly",
      Frequency::Daily => "daily",
      Frequency::Weekly => "weekly",
      Frequency::Cron => "cron",
    }
  }
}

impl Region {
  pub fn as_str(&self) -> &'static str {
    match self {
      Region::Us2 => "us2",
    }
  }
}

impl fmt::Display for RunMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for Frequency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_matches_serde_names() {
    for mode in [RunMode::Immediate, RunMode::Scheduled, RunMode::Batch] {
      assert_eq!(serde_json::to_value(mode).unwrap(), mode.to_string());
    }
    for frequency in [
      Frequency::Hourly,
      Frequency::Daily,
      Frequency::Weekly,
      Frequency::Cron,
    ] {
      assert_eq!(serde_json::to_value(frequency).unwrap(), frequency.to_string());
    }
    assert_eq!(serde_json::to_value(Region::Us2).unwrap(), "us2");
  }

  #[test]
  fn test_unknown_region_rejected() {
    let result: Result<Region, _> = serde_json::from_str("\"eu1\"");
    assert!(result.is_err());
  }
}
