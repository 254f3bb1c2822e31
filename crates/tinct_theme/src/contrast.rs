//! WCAG luminance and contrast checks

use crate::color::{format_fixed, parse_color};
use crate::error::ColorError;
use crate::tokens::{ThemeTokenSet, TokenKey};
use palette::LinSrgb;
use std::fmt::{Display, Formatter};

/// Ratio reported when a contrast cannot be computed
pub const FALLBACK_RATIO: &str = "1.00";

/// WCAG relative luminance in `[0, 1]`; unparseable colors report 0
pub fn luminance(color: &str) -> f64 {
    try_luminance(color).unwrap_or_else(|err| {
        tracing::warn!("failed to compute luminance of `{}`: {}", color, err);
        0.0
    })
}

pub fn try_luminance(color: &str) -> Result<f64, ColorError> {
    let rgb = parse_color(color)?;
    let linear: LinSrgb = rgb.color.into_linear();
    Ok(0.2126 * linear.red as f64 + 0.7152 * linear.green as f64 + 0.0722 * linear.blue as f64)
}

/// Contrast ratio as two-decimal text.
///
/// `"1.00"` is both the ratio of identical colors and the fallback when either
/// color fails to parse; use [`try_contrast_ratio`] to tell them apart.
pub fn contrast_ratio(a: &str, b: &str) -> String {
    match try_contrast_ratio(a, b) {
        Ok(ratio) => format_fixed(ratio),
        Err(err) => {
            tracing::warn!("failed to compute contrast of `{}` / `{}`: {}", a, b, err);
            FALLBACK_RATIO.to_string()
        }
    }
}

pub fn try_contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    let first = try_luminance(a)?;
    let second = try_luminance(b)?;
    let (lighter, darker) = if first >= second {
        (first, second)
    } else {
        (second, first)
    };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// WCAG conformance grade for normal-size text
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum ContrastLevel {
    Fail,
    AaLarge,
    Aa,
    Aaa,
}

impl ContrastLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl Display for ContrastLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// Foreground/background pairs worth checking in a token set
pub const CONTRAST_PAIRS: [(TokenKey, TokenKey); 11] = [
    (TokenKey::Foreground, TokenKey::Background),
    (TokenKey::CardForeground, TokenKey::Card),
    (TokenKey::PopoverForeground, TokenKey::Popover),
    (TokenKey::PrimaryForeground, TokenKey::Primary),
    (TokenKey::SecondaryForeground, TokenKey::Secondary),
    (TokenKey::MutedForeground, TokenKey::Muted),
    (TokenKey::AccentForeground, TokenKey::Accent),
    (TokenKey::DestructiveForeground, TokenKey::Destructive),
    (TokenKey::SidebarForeground, TokenKey::Sidebar),
    (TokenKey::SidebarPrimaryForeground, TokenKey::SidebarPrimary),
    (TokenKey::SidebarAccentForeground, TokenKey::SidebarAccent),
];

/// One row of a contrast report
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastCheck {
    pub foreground: TokenKey,
    pub background: TokenKey,
    /// `None` when either color is unparseable
    pub ratio: Option<f64>,
    pub level: ContrastLevel,
}

/// Check every pair in [`CONTRAST_PAIRS`]
pub fn contrast_report(tokens: &ThemeTokenSet) -> Vec<ContrastCheck> {
    CONTRAST_PAIRS
        .iter()
        .map(|&(foreground, background)| {
            let ratio = try_contrast_ratio(tokens.get(foreground), tokens.get(background)).ok();
            ContrastCheck {
                foreground,
                background,
                ratio,
                level: ratio.map_or(ContrastLevel::Fail, ContrastLevel::from_ratio),
            }
        })
        .collect()
}
