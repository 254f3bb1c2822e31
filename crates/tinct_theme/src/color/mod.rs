//! Color format conversion
//!
//! Converts color literals between hex, rgb, hsl and oklch. Conversion is
//! fail-soft: an unparseable literal is logged and handed back unchanged, so a
//! half-typed value in an editor never breaks code generation.

mod parse;

pub use parse::parse_color;

use crate::error::{ColorError, ThemeError};
use palette::{FromColor, Hsl, Oklch, Srgb, Srgba};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Output color notation
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hsl,
    Oklch,
    Rgb,
    Hex,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [Self::Hsl, Self::Oklch, Self::Rgb, Self::Hex];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
            Self::Rgb => "rgb",
            Self::Hex => "hex",
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::unknown("color format", s))
    }
}

/// Target Tailwind major version.
///
/// Selects the HSL dialect: version 3 consumes bare `H S% L%` triplets that
/// the stylesheet wraps in `hsl(var(--x))`, version 4 consumes full
/// `hsl(H S% L%)` values.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum TailwindVersion {
    #[default]
    #[serde(rename = "3")]
    V3,
    #[serde(rename = "4")]
    V4,
}

impl TailwindVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3",
            Self::V4 => "4",
        }
    }
}

impl Display for TailwindVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailwindVersion {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "3" => Ok(Self::V3),
            "4" => Ok(Self::V4),
            _ => Err(ThemeError::unknown("tailwind version", s)),
        }
    }
}

/// Result of a fail-soft operation.
///
/// `Fallback` still carries a usable value; `reason` says why the real
/// computation was skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum Soft<T> {
    Value(T),
    Fallback { value: T, reason: ColorError },
}

impl<T> Soft<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&ColorError> {
        match self {
            Self::Value(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Convert a color literal, returning the input unchanged if it cannot be parsed
pub fn convert_color(literal: &str, format: ColorFormat, version: TailwindVersion) -> String {
    try_convert_color(literal, format, version).into_value()
}

/// Convert a color literal, reporting whether the result is a fallback
pub fn try_convert_color(
    literal: &str,
    format: ColorFormat,
    version: TailwindVersion,
) -> Soft<String> {
    match parse_color(literal) {
        Ok(color) => Soft::Value(format_color(color, format, version)),
        Err(reason) => {
            tracing::warn!("failed to convert color `{}`: {}", literal, reason);
            Soft::Fallback {
                value: literal.to_string(),
                reason,
            }
        }
    }
}

/// Render a parsed color in the requested notation
pub fn format_color(color: Srgba, format: ColorFormat, version: TailwindVersion) -> String {
    match format {
        ColorFormat::Hex => {
            let rgb: Srgb<u8> = color.color.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        }
        ColorFormat::Rgb => {
            let rgb: Srgb<u8> = color.color.into_format();
            if color.alpha < 1.0 {
                format!(
                    "rgba({}, {}, {}, {})",
                    rgb.red,
                    rgb.green,
                    rgb.blue,
                    format_number(color.alpha as f64)
                )
            } else {
                format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue)
            }
        }
        ColorFormat::Hsl => {
            let hsl: Hsl = Hsl::from_color(color.color);
            let hue = if hsl.saturation > 0.0 {
                hsl.hue.into_positive_degrees()
            } else {
                0.0
            };
            let triplet = format!(
                "{} {}% {}%",
                format_number(hue as f64),
                format_number(hsl.saturation as f64 * 100.0),
                format_number(hsl.lightness as f64 * 100.0)
            );
            match version {
                TailwindVersion::V4 => format!("hsl({triplet})"),
                TailwindVersion::V3 => triplet,
            }
        }
        ColorFormat::Oklch => {
            let oklch: Oklch = Oklch::from_color(color.color);
            let (chroma, hue) = if oklch.chroma < ACHROMATIC_CHROMA {
                (0.0, 0.0)
            } else {
                (oklch.chroma, oklch.hue.into_positive_degrees())
            };
            format!(
                "oklch({} {} {})",
                format_number(oklch.l as f64),
                format_number(chroma as f64),
                format_number(hue as f64)
            )
        }
    }
}

/// Chroma below this is treated as gray
const ACHROMATIC_CHROMA: f32 = 1e-4;

const INTEGRAL_EPSILON: f64 = 1e-6;

/// Integral numbers print bare, others with two decimals; zero and NaN print `0`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    // f32 color math lands a hair off integers (0.99999994 for white)
    if (value - value.round()).abs() < INTEGRAL_EPSILON {
        return format!("{}", value.round() as i64);
    }
    format_fixed(value)
}

/// Two-decimal text with ties rounded away from zero (`0.125` → `"0.13"`)
pub fn format_fixed(value: f64) -> String {
    let fixed = format!("{:.2}", (value * 100.0).round() / 100.0);
    if fixed == "-0.00" {
        "0.00".to_string()
    } else {
        fixed
    }
}
