use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A drawn name with no note list behind it; the catalog is inconsistent.
    #[error("catalog has no notes for key '{0}'")]
    MissingKey(String),

    #[error("unknown scale family '{0}' (expected one of: major, minor, major-pentatonic, minor-pentatonic, blues, diminished)")]
    UnknownFamily(String),
}
