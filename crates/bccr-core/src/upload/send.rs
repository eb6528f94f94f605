//! Framed POST over curl.
//!
//! Runs in the current thread; call from `spawn_blocking` when used from
//! async code. No overall timeout is set: the request waits for the server
//! unless libcurl's own defaults intervene.

use std::str;

use crate::framing::FramedRequest;

use super::response::RawResponse;

/// Transport-level failure: curl error or non-2xx status. Classified before
/// conversion to a status message; never shown to the user directly.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
}

/// POSTs the framed body to `endpoint` with its metadata headers, collecting
/// the response body and raw header lines.
pub(crate) fn post(endpoint: &str, frame: &FramedRequest) -> Result<RawResponse, UploadError> {
    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(endpoint)?;
    easy.post(true)?;
    easy.post_fields_copy(frame.body())?;
    easy.follow_location(true)?;

    let mut list = curl::easy::List::new();
    for (k, v) in frame.headers() {
        list.append(&format!("{}: {}", k, v))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                let s = s.trim_end();
                if !s.is_empty() {
                    header_lines.push(s.to_string());
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(UploadError::Http(code));
    }

    Ok(RawResponse { body, header_lines })
}
