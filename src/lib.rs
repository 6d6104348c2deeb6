// Modules shared by the binary and the tests
pub mod cli;
pub mod error;
pub mod network;
pub mod parser;
pub mod platform;
pub mod report;
pub mod theme;

pub use error::{MalformedField, ScanError};
pub use network::{AccessPoint, PmfStatus, Security};
pub use parser::parse_scan_output;
pub use platform::{scan, ScanConfig};
pub use report::{write_footer, write_report, PmfStats, ReportOptions};
