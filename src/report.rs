/*!
 * PMF report rendering: sorted table, statistics, legend and footer
 */

use std::cmp::Ordering;
use std::io::{self, Write};

use colored::Colorize;

use crate::network::{AccessPoint, PmfStatus};
use crate::theme::{self, colors};

const RULE_WIDTH: usize = 90;

/// Reporter options taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print raw MFPC/MFPR bits under each AP that advertises PMF
    pub verbose: bool,
}

/// PMF tier counts over one scan. The three tiers always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PmfStats {
    pub total: usize,
    pub required: usize,
    pub optional: usize,
    pub no_pmf: usize,
}

impl PmfStats {
    pub fn from_networks(networks: &[AccessPoint]) -> Self {
        let total = networks.len();
        let required = networks.iter().filter(|n| n.pmf_required).count();
        let optional = networks
            .iter()
            .filter(|n| n.pmf_capable && !n.pmf_required)
            .count();

        Self {
            total,
            required,
            optional,
            no_pmf: total - required - optional,
        }
    }
}

/// Strongest signal first. Missing or unparsable signals go last, ties keep scan order.
pub fn sort_by_signal(networks: &[AccessPoint]) -> Vec<&AccessPoint> {
    let mut sorted: Vec<&AccessPoint> = networks.iter().collect();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| compare_signal(b.signal_dbm(), a.signal_dbm()));
    sorted
}

fn compare_signal(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Render the results table, statistics and legend.
///
/// An empty scan only prints a "No networks found" notice.
pub fn write_report<W: Write>(
    out: &mut W,
    networks: &[AccessPoint],
    options: ReportOptions,
) -> io::Result<()> {
    if networks.is_empty() {
        writeln!(out, "{}", "No networks found".color(colors::WARNING))?;
        return Ok(());
    }

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule.bold().color(colors::ACCENT))?;
    writeln!(out, "{}", "PMF/802.11w Scanner Results".bold().color(colors::ACCENT))?;
    writeln!(out, "{}", rule.bold().color(colors::ACCENT))?;
    writeln!(out)?;

    let header = format!(
        "{:<32} {:<17} {:<3} {:<7} {:<12} {}",
        "SSID", "BSSID", "CH", "Signal", "Security", "PMF Status"
    );
    writeln!(out, "{}", header.bold())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for network in sort_by_signal(networks) {
        write_row(out, network, options)?;
    }

    write_statistics(out, &PmfStats::from_networks(networks))?;
    write_legend(out)
}

fn write_row<W: Write>(out: &mut W, network: &AccessPoint, options: ReportOptions) -> io::Result<()> {
    writeln!(
        out,
        "{:<32} {:<17} {:<3} {:<7} {:<12} {}",
        network.display_ssid(),
        network.bssid,
        network.channel.as_deref().unwrap_or("?"),
        network.signal.as_deref().unwrap_or("?"),
        network.security,
        theme::pmf_badge(network.pmf_status()),
    )?;

    if options.verbose && network.has_pmf_signal() {
        let bits = format!(
            "└─ MFPC={}, MFPR={}",
            u8::from(network.pmf_capable),
            u8::from(network.pmf_required)
        );
        writeln!(out, "  {}", bits.color(colors::DETAIL))?;
    }
    Ok(())
}

fn write_statistics<W: Write>(out: &mut W, stats: &PmfStats) -> io::Result<()> {
    writeln!(out, "\n{}", "Statistics:".bold())?;
    writeln!(out, "  Total APs: {}", stats.total)?;
    writeln!(
        out,
        "  {}",
        format!("PMF Required (WPA3): {}", stats.required).color(colors::SUCCESS)
    )?;
    writeln!(
        out,
        "  {}",
        format!("PMF Optional: {}", stats.optional).color(colors::WARNING)
    )?;
    writeln!(out, "  {}", format!("No PMF: {}", stats.no_pmf).color(colors::DANGER))
}

fn write_legend<W: Write>(out: &mut W) -> io::Result<()> {
    let entries = [
        (PmfStatus::Required, "WPA3 or WPA2 with mandatory PMF"),
        (PmfStatus::Optional, "WPA2 with optional PMF"),
        (PmfStatus::Disabled, "No PMF protection (vulnerable)"),
    ];

    writeln!(out, "\n{}", "Legend:".bold())?;
    for (status, meaning) in entries {
        let icon = theme::tier_style(status).icon;
        let padding = " ".repeat(10 - status.label().len());
        writeln!(out, "  {} {}{}- {}", icon, theme::tier_label(status), padding, meaning)?;
    }
    Ok(())
}

/// Closing note, printed after every successful scan
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n{} PMF protects management frames from spoofing/injection attacks",
        "Note:".bold()
    )?;
    writeln!(out, "WPA3 requires PMF. Modern WPA2 should have PMF optional or required.")?;
    writeln!(out)
}
