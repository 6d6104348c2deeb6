/*!
 * Error types for scan acquisition and scan output parsing
 */

use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Fatal errors raised while acquiring the raw scan report
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan executable is not installed on this host
    #[error("'{program}' command not found")]
    ToolMissing { program: String },

    /// The scan did not complete within the bounded wait
    #[error("Scan timeout after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// The scan command ran but reported failure (usually missing privileges)
    #[error("Unable to scan ({status})")]
    Failed { status: ExitStatus, stderr: String },

    /// Any other failure while spawning or reading the child process
    #[error("Failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Remediation hint shown to the operator below the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScanError::ToolMissing { .. } => Some("Install with: sudo apt install iw"),
            ScanError::Failed { .. } => Some("Run as root (sudo)"),
            ScanError::Timeout { .. } => Some("Retry, or raise the limit with --timeout"),
            ScanError::Io { .. } => None,
        }
    }
}

/// A line matched a field marker but lacked the token that should follow it.
///
/// Never fatal: the field keeps its default and parsing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_no}: malformed {field} field: {line:?}")]
pub struct MalformedField {
    pub field: &'static str,
    pub line_no: usize,
    pub line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_per_failure_kind() {
        let missing = ScanError::ToolMissing { program: "iw".to_string() };
        assert_eq!(missing.to_string(), "'iw' command not found");
        assert!(missing.hint().unwrap().contains("apt install iw"));

        let timeout = ScanError::Timeout { after: Duration::from_secs(30) };
        assert_eq!(timeout.to_string(), "Scan timeout after 30s");

        let io = ScanError::Io {
            program: "iw".to_string(),
            source: io::Error::other("boom"),
        };
        assert!(io.hint().is_none());
    }
}
