use std::{fs, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to download {url}: {source}")]
    Http {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode { url: String, source: io::Error },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Whether `location` names a remote table rather than a local file.
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("https://") || location.starts_with("http://")
}

/// Retrieves the full text of a data table.
///
/// `http://` and `https://` locations are downloaded, anything else is read
/// from the local filesystem.
///
/// # Errors
///
/// Any transport, status, decoding or I/O failure.
pub fn fetch(location: &str) -> Result<String, FetchError> {
    let text = if is_remote(location) {
        download(location)?
    } else {
        fs::read_to_string(location).map_err(|source| FetchError::Read {
            path: location.into(),
            source,
        })?
    };

    tracing::info!(location, bytes = text.len(), "fetched table");

    Ok(text)
}

fn download(url: &str) -> Result<String, FetchError> {
    tracing::debug!(url, "downloading");

    let response = ureq::get(url).call().map_err(|source| FetchError::Http {
        url: url.to_string(),
        source: Box::new(source),
    })?;

    response.into_string().map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
