//! Endpoint splitting and a thin blocking GET wrapper.

use crate::ValuesError;

const DEFAULT_PORT: u16 = 80;

/// Split `endpoint` into host and port.
///
/// Without a `:port` suffix, or with one that is not a valid port number,
/// the port defaults to `80` and the host portion is returned unchanged.
#[must_use]
pub fn host_port(endpoint: &str) -> (String, u16) {
    match endpoint.split_once(':') {
        Some((host, port)) => {
            let port = port.parse().unwrap_or(DEFAULT_PORT);
            (host.to_owned(), port)
        }
        None => (endpoint.to_owned(), DEFAULT_PORT),
    }
}

/// GET `url` and return the response body.
///
/// # Errors
///
/// Returns [`ValuesError::HttpTransport`] when the request cannot be built
/// or completed, and [`ValuesError::HttpStatus`] when the server answers
/// with a non-success status.
pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, ValuesError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ValuesError::HttpStatus {
            url: url.to_owned(),
            status,
        });
    }
    Ok(response.bytes()?.to_vec())
}
