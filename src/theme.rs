/*!
 * Terminal theme for the PMF report
 */

use colored::{Color, ColoredString, Colorize};

use crate::network::PmfStatus;

/// Terminal color palette
pub mod colors {
    use colored::Color;

    pub const ACCENT: Color = Color::Cyan; // Banners
    pub const DETAIL: Color = Color::Blue; // Verbose MFPC/MFPR lines
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const DANGER: Color = Color::Red;
}

/// Display treatment of one PMF tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    /// Icon shown before the status
    pub icon: &'static str,
    /// Mark prefixed to the label
    pub mark: &'static str,
    pub color: Color,
}

const REQUIRED: TierStyle = TierStyle {
    icon: "🔒",
    mark: "✓",
    color: colors::SUCCESS,
};

const OPTIONAL: TierStyle = TierStyle {
    icon: "🔓",
    mark: "⚠",
    color: colors::WARNING,
};

const DISABLED: TierStyle = TierStyle {
    icon: "❌",
    mark: "✗",
    color: colors::DANGER,
};

/// Static mapping from tier to its icon, mark and color
pub fn tier_style(status: PmfStatus) -> TierStyle {
    match status {
        PmfStatus::Required => REQUIRED,
        PmfStatus::Optional => OPTIONAL,
        PmfStatus::Disabled => DISABLED,
    }
}

/// `🔒 ✓ Required` with the label in the tier color
pub fn pmf_badge(status: PmfStatus) -> String {
    let style = tier_style(status);
    let label = format!("{} {}", style.mark, status.label()).color(style.color);
    format!("{} {}", style.icon, label)
}

/// Tier label in its color, used by the legend
pub fn tier_label(status: PmfStatus) -> ColoredString {
    status.label().color(tier_style(status).color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_distinct_style() {
        let styles = [
            tier_style(PmfStatus::Required),
            tier_style(PmfStatus::Optional),
            tier_style(PmfStatus::Disabled),
        ];
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
        assert_eq!(styles[0].color, Color::Green);
    }

    #[test]
    fn test_badge_contains_icon_and_label() {
        let badge = pmf_badge(PmfStatus::Disabled);
        assert!(badge.starts_with("❌ "));
        assert!(badge.contains("Disabled"));
    }
}
