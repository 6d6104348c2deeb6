/*!
 * Parser for `iw dev <iface> scan` output
 *
 * The report is a sequence of BSS blocks:
 *
 * ```text
 * BSS aa:bb:cc:dd:ee:ff(on wlan0)
 *     signal: -52.00 dBm
 *     SSID: HomeNetwork
 *     DS Parameter set: channel 6
 *     RSN:     * Version: 1
 *              * Group mgmt cipher suite: AES-128-CMAC
 *              * Capabilities: 1-PTKSA-RC 1-GTKSA-RC MFP-capable (0x0080)
 * ```
 *
 * Every `BSS ` line opens a new access point record. Indented lines are
 * matched against field markers and folded into the record currently open.
 */

use tracing::debug;

use crate::error::MalformedField;
use crate::network::{AccessPoint, Security};

const BSS_MARKER: &str = "BSS ";
const SSID_MARKER: &str = "SSID:";
const CHANNEL_MARKER: &str = "DS Parameter set: channel";
const SIGNAL_MARKER: &str = "signal:";
const WPA_MARKER: &str = "WPA:";
const RSN_MARKER: &str = "RSN:";
const GROUP_MGMT_CIPHER_MARKER: &str = "Group mgmt cipher suite:";

// Older iw builds print "RSN capabilities:", current ones "* Capabilities:"
const CAPABILITIES_MARKERS: [&str; 3] = ["RSN capabilities:", "capabilities:", "Capabilities:"];

const MFP_CAPABLE_TOKENS: [&str; 2] = ["MFP-capable", "MFPC"];
const MFP_REQUIRED_TOKENS: [&str; 2] = ["MFP-required", "MFPR"];

/// Parse raw scan output into access points, in order of appearance.
///
/// Never fails: text without any `BSS` line yields an empty list, and lines
/// missing the token after a marker leave that field at its default.
pub fn parse_scan_output(output: &str) -> Vec<AccessPoint> {
    let networks = output
        .lines()
        .enumerate()
        .fold(ScanFold::default(), |fold, (idx, line)| fold.push_line(idx + 1, line))
        .finish();

    debug!(count = networks.len(), "parsed scan output");
    networks
}

/// Accumulator for the line fold: finished records plus the one being built
#[derive(Default)]
struct ScanFold {
    finished: Vec<AccessPoint>,
    current: Option<AccessPoint>,
}

impl ScanFold {
    fn push_line(mut self, line_no: usize, line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(BSS_MARKER) {
            if let Some(done) = self.current.take() {
                self.finished.push(done);
            }
            let bssid = parse_bssid(rest).unwrap_or_else(|| {
                malformed("bssid", line_no, line);
                ""
            });
            self.current = Some(AccessPoint::new(bssid));
            return self;
        }

        // Anything before the first BSS block is preamble
        if let Some(ap) = self.current.as_mut() {
            apply_field(ap, line_no, line);
        }
        self
    }

    fn finish(mut self) -> Vec<AccessPoint> {
        if let Some(done) = self.current.take() {
            self.finished.push(done);
        }
        self.finished
    }
}

/// Update `ap` from one line of its BSS block. First matching marker wins.
fn apply_field(ap: &mut AccessPoint, line_no: usize, line: &str) {
    if let Some(rest) = line.trim_start().strip_prefix(SSID_MARKER) {
        // An empty name never replaces one already seen in the block
        let ssid = rest.trim();
        if !ssid.is_empty() {
            ap.ssid = Some(ssid.to_string());
        }
    } else if line.contains(CHANNEL_MARKER) {
        match parse_channel(line) {
            Some(channel) => ap.channel = Some(channel.to_string()),
            None => malformed("channel", line_no, line),
        }
    } else if let Some(rest) = after(line, SIGNAL_MARKER) {
        match rest.split_whitespace().next() {
            Some(signal) => ap.signal = Some(signal.to_string()),
            None => malformed("signal", line_no, line),
        }
    } else if line.contains(WPA_MARKER) {
        ap.security = Security::Wpa;
        ap.wpa_version = Some(Security::Wpa);
    } else if line.contains(RSN_MARKER) {
        ap.security = Security::Wpa2Wpa3;
        ap.wpa_version = Some(Security::Wpa2Wpa3);
    } else if CAPABILITIES_MARKERS.iter().any(|m| line.contains(m)) {
        if MFP_CAPABLE_TOKENS.iter().any(|t| line.contains(t)) {
            ap.pmf_capable = true;
        }
        if MFP_REQUIRED_TOKENS.iter().any(|t| line.contains(t)) {
            ap.pmf_required = true;
        }
    } else if line.contains(GROUP_MGMT_CIPHER_MARKER) {
        // Some iw versions omit MFP-capable but still list the BIP cipher
        ap.pmf_capable = true;
    }
}

/// Text following the first occurrence of `marker`
fn after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split_once(marker).map(|(_, rest)| rest)
}

/// `aa:bb:cc:dd:ee:ff(on wlan0)` -> `aa:bb:cc:dd:ee:ff`
fn parse_bssid(rest: &str) -> Option<&str> {
    let token = rest.split_whitespace().next()?;
    let bssid = token.find('(').map_or(token, |idx| &token[..idx]);
    (!bssid.is_empty()).then_some(bssid)
}

/// `DS Parameter set: channel 6` -> `6`
fn parse_channel(line: &str) -> Option<&str> {
    let channel = after(line, "channel")?.trim();
    (!channel.is_empty()).then_some(channel)
}

fn malformed(field: &'static str, line_no: usize, line: &str) {
    let err = MalformedField {
        field,
        line_no,
        line: line.to_string(),
    };
    debug!(%err, "ignoring field");
}
