//! Terminal catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading or querying the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("catalog JSON parse error: {message}")]
    Json { message: String },

    /// The index could not answer a query
    #[error("terminal index unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Json {
            message: "expected `[`".into(),
        };
        assert_eq!(err.to_string(), "catalog JSON parse error: expected `[`");

        let err = CatalogError::Unavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "terminal index unavailable: connection refused"
        );
    }
}
