//! CLI-specific error types
//!
//! All CLI errors are fatal: they surface on stderr and the process exits
//! non-zero.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Runtime or listener could not be created
    BootFailed,
    /// Server terminated with an error
    ServerFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BootFailed => "APPMETA_CLI_BOOT_FAILED",
            Self::ServerFailed => "APPMETA_CLI_SERVER_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Server failure
    pub fn server_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerFailed, msg)
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        self.code.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code() {
        let err = CliError::boot_failed("no runtime");
        assert_eq!(err.to_string(), "[APPMETA_CLI_BOOT_FAILED] no runtime");
        assert_eq!(err.code(), "APPMETA_CLI_BOOT_FAILED");
    }
}
