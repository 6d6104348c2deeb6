/*!
 * PMF (Protected Management Frames) scanner
 *
 * Detects whether surrounding access points use PMF/802.11w.
 *
 * Usage: sudo pmf-scanner -i wlan0
 */

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pmf_scanner::cli::Args;
use pmf_scanner::theme::colors;
use pmf_scanner::{parse_scan_output, scan, write_footer, write_report, ScanError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Scan, parse and print the report
async fn run(args: &Args) -> Result<()> {
    println!(
        "{}",
        format!("Scanning on interface {}...", args.interface).color(colors::ACCENT)
    );

    let raw = scan(&args.scan_config()).await?;
    let networks = parse_scan_output(&raw);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &networks, args.report_options()).context("Failed to write report")?;
    write_footer(&mut out).context("Failed to write report")?;
    out.flush()?;

    Ok(())
}

/// Print a failed run as a red diagnostic plus remediation hint
fn report_failure(error: &anyhow::Error) {
    println!("{}", format!("Error: {}", error).color(colors::DANGER));

    if let Some(scan_error) = error.downcast_ref::<ScanError>() {
        if let Some(hint) = scan_error.hint() {
            println!("{}", hint.color(colors::WARNING));
        }
        if let ScanError::Failed { stderr, .. } = scan_error {
            if !stderr.is_empty() {
                println!("  {}", stderr.dimmed());
            }
        }
    }
}
