use clap::Parser;
use std::time::Duration;

use crate::platform::{ScanConfig, DEFAULT_INTERFACE, DEFAULT_TIMEOUT_SECS};
use crate::report::ReportOptions;

#[derive(Parser, Debug)]
#[command(name = "pmf-scanner")]
#[command(version)]
#[command(
    about = "Scan for WiFi Access Points and detect PMF/802.11w support",
    long_about = "Scan for WiFi Access Points and detect PMF/802.11w support.\n\n\
                  Runs `iw dev <interface> scan` once and reports, for every access point, \
                  whether Protected Management Frames are required, optional or disabled.\n\n\
                  Example: sudo pmf-scanner -i wlan0 -v"
)]
pub struct Args {
    /// WiFi interface to use
    #[arg(short, long, default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// Show detailed RSN information (raw MFPC/MFPR bits)
    #[arg(short, long)]
    pub verbose: bool,

    /// Seconds to wait for the scan before giving up
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Read cached scan results (`iw ... scan dump`) instead of triggering a new scan
    #[arg(long)]
    pub cached: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            interface: self.interface.clone(),
            timeout: Duration::from_secs(self.timeout),
            cached: self.cached,
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            verbose: self.verbose,
        }
    }
}
