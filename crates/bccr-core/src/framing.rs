//! Request framing: configuration text + ROM image concatenated into one body.
//!
//! The service splits the stream using the `ConfLength` header, so the
//! concatenation order (encoded configuration first, then ROM bytes) is part
//! of the wire contract and must not change. The boundary is never stored in
//! the body itself.

use std::collections::HashMap;

/// Request header carrying the byte length of the encoded configuration.
pub const CONF_LENGTH_HEADER: &str = "ConfLength";
/// Request header carrying the user's seed, omitted when unset.
pub const SEED_HEADER: &str = "Seed";
/// Sentinel seed input meaning "no seed requested / let the server choose".
pub const NO_SEED: &str = "0";

/// A framed upload request: the concatenated body plus its out-of-band
/// transport metadata. Built once per invocation; nothing is shared across
/// requests.
#[derive(Debug, Clone)]
pub struct FramedRequest {
    body: Vec<u8>,
    conf_len: usize,
    seed: Option<String>,
}

impl FramedRequest {
    /// Frames `conf_text` and `rom` into a single request.
    ///
    /// The configuration is UTF-8 encoded at call time (it may have been
    /// edited right up to this point). Any seed input other than the literal
    /// `"0"` is forwarded verbatim, numeric or not; validation is the
    /// server's problem.
    pub fn new(conf_text: &str, rom: &[u8], seed_input: &str) -> Self {
        let conf = conf_text.as_bytes();
        let mut body = Vec::with_capacity(conf.len() + rom.len());
        body.extend_from_slice(conf);
        body.extend_from_slice(rom);

        let seed = if seed_input != NO_SEED {
            Some(seed_input.to_string())
        } else {
            None
        };

        Self {
            body,
            conf_len: conf.len(),
            seed,
        }
    }

    /// The wire payload: encoded configuration followed by the ROM bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Byte length of the encoded configuration region.
    pub fn conf_len(&self) -> usize {
        self.conf_len
    }

    /// Transport metadata headers: `ConfLength` always, `Seed` only when the
    /// user supplied one.
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(CONF_LENGTH_HEADER.to_string(), self.conf_len.to_string());
        if let Some(seed) = &self.seed {
            headers.insert(SEED_HEADER.to_string(), seed.clone());
        }
        headers
    }
}
