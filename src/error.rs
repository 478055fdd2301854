use thiserror::Error;

/// Error surfaced to the user by the `photmass` binary.
///
/// Carries the process exit code alongside the message:
/// - `2`: usage or input problems (unreadable file)
/// - `4`: output failures (report serialization)
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = AppError::new(2, "Failed to open CSV 'x.csv'");
        assert_eq!(err.to_string(), "Failed to open CSV 'x.csv'");
        assert_eq!(err.exit_code(), 2);
    }
}
