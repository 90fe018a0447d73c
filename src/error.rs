
#[derive(Debug)]
pub enum Error {
    ResolutionFailure (String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a lower-level failure with the platform tag and the step that
    /// failed, e.g. "Failed to canonicalize the path on GNU/Linux: ..."
    pub(crate) fn wrap<E: std::fmt::Display>(step: &str, platform: &str, cause: E)
        -> Self
    {
        Self::ResolutionFailure(
            format!("Failed to {} on {}: {}", step, platform, cause))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ResolutionFailure(msg) =>
                write!(f, "PathMasterError: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
