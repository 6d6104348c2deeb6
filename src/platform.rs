/*!
 * Scan acquisition through the system `iw` tool
 *
 * Exactly one scan is requested per call. Failures are reported immediately
 * and never retried.
 */

use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ScanError;

/// Interface scanned when none is given on the command line
pub const DEFAULT_INTERFACE: &str = "wlan0";

/// Bounded wait for the scan command, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const IW_PROGRAM: &str = "iw";

/// Scan settings taken from the command line
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// WiFi interface to scan (e.g. wlan0, wlp2s0)
    pub interface: String,
    /// Maximum time to wait for the scan command
    pub timeout: Duration,
    /// Read the kernel's cached results (`scan dump`) instead of triggering a scan
    pub cached: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cached: false,
        }
    }
}

impl ScanConfig {
    /// `iw dev <iface> scan` or `iw dev <iface> scan dump`
    pub fn command(&self) -> ScanCommand {
        let mut args = vec!["dev".to_string(), self.interface.clone(), "scan".to_string()];
        if self.cached {
            args.push("dump".to_string());
        }
        ScanCommand {
            program: IW_PROGRAM.to_string(),
            args,
        }
    }
}

/// External command producing the raw scan report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ScanCommand {
    /// Command line as typed in a shell, for logs
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command and return its stdout.
    ///
    /// The child is killed if it outlives `timeout`.
    pub async fn run(&self, timeout: Duration) -> Result<String, ScanError> {
        debug!(command = %self.display(), ?timeout, "starting scan");
        let started = Instant::now();

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::ToolMissing {
                    program: self.program.clone(),
                })
            }
            Ok(Err(e)) => {
                return Err(ScanError::Io {
                    program: self.program.clone(),
                    source: e,
                })
            }
            Err(_) => return Err(ScanError::Timeout { after: timeout }),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, %stderr, "scan command failed");
            return Err(ScanError::Failed {
                status: output.status,
                stderr,
            });
        }

        debug!(
            bytes = output.stdout.len(),
            elapsed = ?started.elapsed(),
            "scan finished"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Scan the configured interface and return the raw `iw` report
pub async fn scan(config: &ScanConfig) -> Result<String, ScanError> {
    config.command().run(config.timeout).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(program: &str, args: &[&str]) -> ScanCommand {
        ScanCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_scan_command_line() {
        let config = ScanConfig {
            interface: "wlp2s0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.command().display(), "iw dev wlp2s0 scan");

        let cached = ScanConfig {
            cached: true,
            ..Default::default()
        };
        assert_eq!(cached.command().display(), "iw dev wlan0 scan dump");
        assert_eq!(cached.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let cmd = command("pmf-scanner-no-such-tool", &["dev", "wlan0", "scan"]);
        let err = cmd.run(Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, ScanError::ToolMissing { .. }));
        assert!(err.hint().is_some());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_scan_failure() {
        let cmd = command("sh", &["-c", "echo 'Operation not permitted' >&2; exit 255"]);
        let err = cmd.run(Duration::from_secs(5)).await.unwrap_err();
        match &err {
            ScanError::Failed { status, stderr } => {
                assert!(!status.success());
                assert_eq!(stderr, "Operation not permitted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.hint(), Some("Run as root (sudo)"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_scan_times_out() {
        let started = Instant::now();
        let cmd = command("sleep", &["5"]);
        let err = cmd.run(Duration::from_millis(100)).await.unwrap_err();
        assert!(matches!(err, ScanError::Timeout { .. }));
        // Returns at the deadline instead of waiting for the child to exit
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_output_is_replaced() {
        let cmd = command("sh", &["-c", "printf 'BSS aa\\377\\n\\tSSID: x\\377y\\n'"]);
        let output = cmd.run(Duration::from_secs(5)).await.unwrap();
        assert!(output.contains('\u{FFFD}'));

        let aps = crate::parser::parse_scan_output(&output);
        assert_eq!(aps.len(), 1);
        assert_eq!(aps[0].ssid.as_deref(), Some("x\u{FFFD}y"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_returned() {
        let cmd = command("sh", &["-c", "printf 'BSS 00:11:22:33:44:55(on wlan0)\\n'"]);
        let output = cmd.run(Duration::from_secs(5)).await.unwrap();
        assert_eq!(output, "BSS 00:11:22:33:44:55(on wlan0)\n");
    }
}
