//! `bccr randomize <rom>` – upload a ROM and download the randomized result.

use anyhow::Result;
use bccr_core::config::BccrConfig;
use bccr_core::rom::{self, FileSelection};
use bccr_core::status::ConsoleStatus;
use bccr_core::{conf, upload};
use std::path::Path;

pub async fn run_randomize(
    cfg: &BccrConfig,
    rom_path: &Path,
    conf_path: Option<&Path>,
    seed_input: &str,
    out_dir: &Path,
) -> Result<()> {
    let selection = FileSelection::single(rom_path);
    let Some(rom) = rom::read_selected(&selection).await else {
        // Nothing usable was selected: a defined silent no-op, already logged.
        return Ok(());
    };

    let conf_text = conf::load(conf_path)?;
    let status = ConsoleStatus;
    let outcome = upload::upload_rom(
        &cfg.endpoint,
        rom,
        &conf_text,
        seed_input,
        out_dir,
        &status,
    )
    .await?;

    if let Some(outcome) = outcome {
        tracing::info!("saved {} (seed {})", outcome.path.display(), outcome.seed);
    }
    Ok(())
}
