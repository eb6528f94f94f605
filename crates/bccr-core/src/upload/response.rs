//! Response decoding: recover the seed the server actually used.
//!
//! The seed comes back in a response header whose key is expected in
//! lowercase. The original client had to check the combined header block for
//! the key before reading it individually, because the blob-typed response
//! could otherwise yield a false empty read; the two-step check is kept here
//! and its fallback behavior is part of the contract.

/// Response header carrying the seed the server used (lowercase key expected).
pub const SEED_RESPONSE_HEADER: &str = "seed";
/// Seed used in the filename when the header is absent or unreadable.
pub const DEFAULT_SEED: &str = "0";

/// Raw response: opaque artifact bytes plus header lines as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub header_lines: Vec<String>,
}

/// Reads a header by exact, case-sensitive key match. Returns an empty
/// string when absent, mirroring the false-empty read the existence
/// pre-check exists to guard against.
pub fn header_value(lines: &[String], name: &str) -> String {
    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            if key.trim() == name {
                return value.trim().to_string();
            }
        }
    }
    String::new()
}

/// The seed the server reports it used, or `"0"` when it cannot be read.
///
/// Checks the combined header block for the literal lowercase key before the
/// individual read; a missing key, a wrongly-cased key, or an empty value
/// all degrade to the default instead of failing.
pub fn seed_from_headers(lines: &[String]) -> String {
    let combined = lines.join("\r\n");
    if !combined.contains(SEED_RESPONSE_HEADER) {
        return DEFAULT_SEED.to_string();
    }
    let value = header_value(lines, SEED_RESPONSE_HEADER);
    if value.is_empty() {
        DEFAULT_SEED.to_string()
    } else {
        value
    }
}
