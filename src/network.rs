/*!
 * Access point records and PMF (802.11w) classification
 */

use std::fmt;

/// Security suite advertised by an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Security {
    /// No WPA or RSN element in the beacon
    #[default]
    Open,
    /// Legacy WPA information element
    Wpa,
    /// RSN element (WPA2 or WPA3)
    Wpa2Wpa3,
}

impl Security {
    pub fn label(&self) -> &'static str {
        match self {
            Security::Open => "Open",
            Security::Wpa => "WPA",
            Security::Wpa2Wpa3 => "WPA2/WPA3",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// PMF protection tier of an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmfStatus {
    /// MFPR set: clients must use protected management frames
    Required,
    /// MFPC set without MFPR
    Optional,
    /// No PMF advertised, deauth/disassoc frames can be spoofed
    Disabled,
}

impl PmfStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PmfStatus::Required => "Required",
            PmfStatus::Optional => "Optional",
            PmfStatus::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for PmfStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One access point assembled from a `BSS` block of the scan output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessPoint {
    /// BSSID (MAC address), empty only if the marker line was truncated
    pub bssid: String,
    /// Network name, `None` for hidden networks
    pub ssid: Option<String>,
    /// Channel as printed by the scan tool
    pub channel: Option<String>,
    /// Signal strength as printed by the scan tool (e.g. `-52.00`)
    pub signal: Option<String>,
    /// Last security marker seen in the block
    pub security: Security,
    /// WPA generation, `None` when no WPA/RSN element was seen
    pub wpa_version: Option<Security>,
    /// Management Frame Protection Capable
    pub pmf_capable: bool,
    /// Management Frame Protection Required
    pub pmf_required: bool,
}

impl AccessPoint {
    pub fn new(bssid: impl Into<String>) -> Self {
        Self {
            bssid: bssid.into(),
            ..Default::default()
        }
    }

    /// Classify this access point into one of the three PMF tiers
    pub fn pmf_status(&self) -> PmfStatus {
        if self.pmf_required {
            PmfStatus::Required
        } else if self.pmf_capable {
            PmfStatus::Optional
        } else {
            PmfStatus::Disabled
        }
    }

    /// True if either PMF bit was advertised
    pub fn has_pmf_signal(&self) -> bool {
        self.pmf_capable || self.pmf_required
    }

    /// Signal strength in dBm, `None` if absent or not a finite number
    pub fn signal_dbm(&self) -> Option<f64> {
        let raw = self.signal.as_deref()?.trim();
        let number = raw.strip_suffix("dBm").unwrap_or(raw).trim();
        number.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// SSID for display, empty names count as hidden
    pub fn display_ssid(&self) -> &str {
        match self.ssid.as_deref() {
            Some(ssid) if !ssid.is_empty() => ssid,
            _ => "(Hidden)",
        }
    }
}
