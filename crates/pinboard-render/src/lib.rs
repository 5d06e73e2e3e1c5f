//! Pinboard Render
//!
//! Turns a [`ResolvedBlueprint`](pinboard_blueprint::ResolvedBlueprint) into
//! text. [`render`] produces the numbered Make.com setup checklist, the sole
//! documentation output of a blueprint, and its line format is fixed:
//!
//! ```text
//! # Scenario Setup (us2.make.com)
//! 1. Create new scenario, set region to **us2**.
//! 2. Add trigger module: **pinterest/watch-pins** (New Pin Published).
//! 3. Add module: **pinterest/create-pin** (Create Pinterest Pin).
//! Configure scheduler: weekly -> Monday 08:00 EST.
//! Configure webhooks: `https://a.example/hook`.
//! Enable scenario logging, save, and switch to ON.
//! Run initial test with reduced data set.
//! ```
//!
//! [`render_summary`] builds the longer overview report around it.

mod steps;
mod summary;

pub use steps::{render, steps};
pub use summary::render_summary;
