//! Where a table comes from: a URL or a local file.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::http::HttpFetcher;

/// Upper bound on a single dataset payload (500 MB).
pub const MAX_DATASET_BYTES: u64 = 500 * 1024 * 1024;

/// Location of one CSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    /// Raw bytes of the table.
    ///
    /// The fetcher is only used for [`DataSource::Url`].
    pub fn read_bytes(&self, fetcher: &HttpFetcher) -> Result<Vec<u8>> {
        match self {
            Self::Url(url) => fetcher.fetch(url),
            Self::Path(path) => read_file(path),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for DataSource {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;
    if metadata.len() > MAX_DATASET_BYTES {
        return Err(IngestError::TooLarge {
            origin: path.display().to_string(),
            size: metadata.len(),
            max_size: MAX_DATASET_BYTES,
        });
    }
    debug!(path = %path.display(), bytes = metadata.len(), "reading dataset file");
    std::fs::read(path).map_err(|e| file_error(path, e))
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls_and_paths() {
        assert_eq!(
            DataSource::parse("https://example.org/ca_rest.csv"),
            DataSource::Url("https://example.org/ca_rest.csv".to_string())
        );
        assert_eq!(
            DataSource::parse(" HTTP://example.org/a.csv "),
            DataSource::Url("HTTP://example.org/a.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("data/ca_rest.csv"),
            DataSource::Path(PathBuf::from("data/ca_rest.csv"))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let fetcher = HttpFetcher::new().expect("client");
        let source = DataSource::parse("/definitely/not/here.csv");
        let err = source.read_bytes(&fetcher).expect_err("missing file");
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
