//! Randomizer configuration text.
//!
//! The configuration is an opaque byte blob as far as this client is
//! concerned: it is measured and embedded into the request body, never
//! parsed. A stock template is shipped for users who have not written their
//! own.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Stock configuration template, matching the service's expected sections.
pub const DEFAULT_CONF: &str = "\
[ChipRange]
ap = 100
hp = 10
mb = 0

[NaviRange]
ap = 100
hp = 0
mb = 50

[ChipGlobal]
preserveOrdering = true
randomizeStartingChips = true

[Encounters]
randomizeChips = true
randomizeNavi = false
smartAtkPlus = true
fillChips = true
shuffle = false
randomizeOperators = true
upgradeChipParam = 0.5

[Names]
randomizeNames = false
";

/// Returns the configuration text to upload: the user's file when given,
/// otherwise the stock template. The contents are not validated here.
pub fn load(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("failed to read configuration {}", p.display())),
        None => Ok(DEFAULT_CONF.to_string()),
    }
}
