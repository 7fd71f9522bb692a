/// Alias for `Result<T, MaladyError>`.
pub type MaladyResult<T> = Result<T, MaladyError>;

/// Errors raised while building or validating actors and conditions.
#[derive(Debug, thiserror::Error)]
pub enum MaladyError {
    /// A condition key did not match any known kind.
    #[error("unknown condition: \"{0}\"")]
    UnknownCondition(String),

    /// A hit-point pool is inconsistent.
    #[error("invalid hit points for {part}: {current}/{max}")]
    InvalidHitPoints {
        /// The offending pool.
        part: String,
        /// Current value.
        current: i32,
        /// Maximum value.
        max: i32,
    },

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
