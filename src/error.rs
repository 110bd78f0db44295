use thiserror::Error;

/// Infrastructure-level failures of the test kit itself.
///
/// Status-code mismatches in the checked request layer are deliberately not
/// represented here: a non-200 on a checked call is a test failure and panics
/// at the call site. `TestError` covers everything that means "the harness or
/// the target server is broken", so test output can tell the two apart.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),
    #[error("{operation} is not supported for {entity}")]
    Unsupported {
        entity: &'static str,
        operation: &'static str,
    },
}
