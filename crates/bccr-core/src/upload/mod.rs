//! Upload transport: frame the request, perform the exchange, deliver the
//! artifact.
//!
//! Each invocation walks `Framing -> Sent -> {Succeeded, Failed}` with
//! wholly private buffers; nothing is shared across invocations and nothing
//! is retried. Failures are converted to a status message at this boundary
//! and never propagate to the caller.

mod send;
pub mod response;

pub use send::UploadError;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::artifact;
use crate::checksum;
use crate::framing::FramedRequest;
use crate::status::StatusSink;

/// Fixed message shown on a transport-level failure.
pub const CONNECT_ERROR_STATUS: &str = "An error occurred trying to connect to the server";
/// Message shown while the request is in flight.
pub const SENDING_STATUS: &str = "Sending request to the randomizer service...";

/// A successfully saved artifact.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Where the randomized ROM was written.
    pub path: PathBuf,
    /// Filename derived from the seed the server reported.
    pub filename: String,
    /// Seed the server reported, `"0"` when unreadable.
    pub seed: String,
}

/// Frames `rom` with `conf_text`, POSTs it to `endpoint`, and saves the
/// returned artifact under `out_dir`.
///
/// The configuration text and seed input are read at framing time, supplied
/// by the caller from whatever surface it owns. A transport failure is
/// reported through `status` and returns `Ok(None)`; only local I/O failures
/// while saving the artifact surface as errors.
pub async fn upload_rom(
    endpoint: &str,
    rom: Vec<u8>,
    conf_text: &str,
    seed_input: &str,
    out_dir: &Path,
    status: &dyn StatusSink,
) -> Result<Option<UploadOutcome>> {
    let frame = FramedRequest::new(conf_text, &rom, seed_input);
    tracing::debug!(
        "framed request: {} conf bytes + {} rom bytes",
        frame.conf_len(),
        rom.len()
    );
    status.status(SENDING_STATUS);

    // Body must go via POST; the deployment's network path drops GET bodies.
    let endpoint = endpoint.to_string();
    let result = tokio::task::spawn_blocking(move || send::post(&endpoint, &frame))
        .await
        .context("upload task failed")?;

    let raw = match result {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("upload failed: {}", err);
            status.status(CONNECT_ERROR_STATUS);
            return Ok(None);
        }
    };

    let seed = response::seed_from_headers(&raw.header_lines);
    let filename = artifact::filename_for_seed(&seed);
    let path = artifact::save(out_dir, &filename, &raw.body)?;
    tracing::debug!("artifact sha256: {}", checksum::sha256_bytes(&raw.body));
    status.status(&format!("{filename} downloaded"));

    Ok(Some(UploadOutcome {
        path,
        filename,
        seed,
    }))
}
