//! Color literal parsing
//!
//! Accepts hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `oklch()` and the
//! keywords `black`, `white` and `transparent`. Both the legacy comma syntax
//! and the space syntax with an optional `/ alpha` are understood.

use crate::error::ColorError;
use palette::{FromColor, Hsl, Oklch, Srgb, Srgba, WithAlpha};

/// Parse a color literal into sRGB with alpha
pub fn parse_color(input: &str) -> Result<Srgba, ColorError> {
    let literal = input.trim().to_ascii_lowercase();
    if literal.is_empty() {
        return Err(ColorError::Empty);
    }

    match literal.as_str() {
        "black" => return Ok(Srgb::new(0.0, 0.0, 0.0).with_alpha(1.0)),
        "white" => return Ok(Srgb::new(1.0, 1.0, 1.0).with_alpha(1.0)),
        "transparent" => return Ok(Srgb::new(0.0, 0.0, 0.0).with_alpha(0.0)),
        _ => {}
    }

    if let Some(digits) = literal.strip_prefix('#') {
        return parse_hex(digits, &literal);
    }

    let (name, body) = literal
        .strip_suffix(')')
        .and_then(|rest| rest.split_once('('))
        .ok_or_else(|| ColorError::UnsupportedNotation(literal.clone()))?;
    let args = Arguments::split(body.trim(), &literal)?;

    match name.trim() {
        "rgb" | "rgba" => parse_rgb(&args, &literal),
        "hsl" | "hsla" => parse_hsl(&args, &literal),
        "oklch" => parse_oklch(&args, &literal),
        _ => Err(ColorError::UnsupportedNotation(literal.clone())),
    }
}

fn parse_hex(digits: &str, literal: &str) -> Result<Srgba, ColorError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(literal.to_string()));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return Err(ColorError::InvalidHex(literal.to_string())),
    };

    let channel = |index: usize| -> Result<f32, ColorError> {
        u8::from_str_radix(&expanded[index * 2..index * 2 + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ColorError::InvalidHex(literal.to_string()))
    };

    let alpha = if expanded.len() == 8 { channel(3)? } else { 1.0 };
    Ok(Srgb::new(channel(0)?, channel(1)?, channel(2)?).with_alpha(alpha))
}

/// Components of a functional notation, with the optional alpha split off
struct Arguments<'a> {
    components: Vec<&'a str>,
    alpha: Option<&'a str>,
}

impl<'a> Arguments<'a> {
    fn split(body: &'a str, literal: &str) -> Result<Self, ColorError> {
        let (mut components, mut alpha): (Vec<&str>, Option<&str>) = if body.contains(',') {
            (body.split(',').map(str::trim).collect(), None)
        } else {
            match body.split_once('/') {
                Some((channels, alpha)) => (
                    channels.split_whitespace().collect(),
                    Some(alpha.trim()),
                ),
                None => (body.split_whitespace().collect(), None),
            }
        };

        if components.len() == 4 && alpha.is_none() {
            alpha = components.pop();
        }
        if components.len() != 3 {
            return Err(ColorError::ComponentCount {
                literal: literal.to_string(),
                expected: 3,
            });
        }

        Ok(Self { components, alpha })
    }

    fn alpha(&self, literal: &str) -> Result<f32, ColorError> {
        match self.alpha {
            Some(value) => Ok(fraction(value, 1.0, literal)?.clamp(0.0, 1.0)),
            None => Ok(1.0),
        }
    }
}

fn parse_rgb(args: &Arguments<'_>, literal: &str) -> Result<Srgba, ColorError> {
    let mut channels = [0.0f32; 3];
    for (slot, component) in channels.iter_mut().zip(&args.components) {
        *slot = fraction(component, 255.0, literal)?.clamp(0.0, 1.0);
    }
    Ok(Srgb::new(channels[0], channels[1], channels[2]).with_alpha(args.alpha(literal)?))
}

fn parse_hsl(args: &Arguments<'_>, literal: &str) -> Result<Srgba, ColorError> {
    let hue = angle(args.components[0], literal)?;
    let saturation = fraction(args.components[1], 100.0, literal)?.clamp(0.0, 1.0);
    let lightness = fraction(args.components[2], 100.0, literal)?.clamp(0.0, 1.0);

    let hsl: Hsl = Hsl::new(hue, saturation, lightness);
    Ok(Srgb::from_color(hsl).with_alpha(args.alpha(literal)?))
}

fn parse_oklch(args: &Arguments<'_>, literal: &str) -> Result<Srgba, ColorError> {
    let lightness = fraction(args.components[0], 1.0, literal)?.max(0.0);
    // 100% chroma is 0.4
    let chroma = match args.components[1].strip_suffix('%') {
        Some(percent) => number(percent, literal)? / 100.0 * 0.4,
        None => number(args.components[1], literal)?,
    }
    .max(0.0);
    let hue = angle(args.components[2], literal)?;

    let oklch: Oklch = Oklch::new(lightness, chroma, hue);
    Ok(Srgb::from_color(oklch).with_alpha(args.alpha(literal)?))
}

/// Read a number, dividing bare values by `scale` and percentages by 100
fn fraction(component: &str, scale: f32, literal: &str) -> Result<f32, ColorError> {
    match component.strip_suffix('%') {
        Some(percent) => Ok(number(percent, literal)? / 100.0),
        None => Ok(number(component, literal)? / scale),
    }
}

fn angle(component: &str, literal: &str) -> Result<f32, ColorError> {
    if let Some(turns) = component.strip_suffix("turn") {
        return Ok(number(turns, literal)? * 360.0);
    }
    if let Some(radians) = component.strip_suffix("rad") {
        if !radians.ends_with('g') {
            return Ok(number(radians, literal)?.to_degrees());
        }
    }
    number(component.trim_end_matches("deg"), literal)
}

fn number(component: &str, literal: &str) -> Result<f32, ColorError> {
    if component == "none" {
        return Ok(0.0);
    }
    component
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorError::InvalidComponent {
            literal: literal.to_string(),
            component: component.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rgb8(color: Srgba) -> (u8, u8, u8) {
        let rgb: Srgb<u8> = color.color.into_format();
        (rgb.red, rgb.green, rgb.blue)
    }

    #[rstest]
    #[case::hex("#ff0000", (255, 0, 0))]
    #[case::short_hex("#0f0", (0, 255, 0))]
    #[case::hex_alpha("#0000ff80", (0, 0, 255))]
    #[case::rgb_commas("rgb(10, 20, 30)", (10, 20, 30))]
    #[case::rgb_spaces("rgb(10 20 30 / 50%)", (10, 20, 30))]
    #[case::rgb_percent("rgb(100% 0% 0%)", (255, 0, 0))]
    #[case::hsl("hsl(0 100% 50%)", (255, 0, 0))]
    #[case::hsla_commas("hsla(120, 100%, 50%, 0.3)", (0, 255, 0))]
    #[case::hsl_deg("hsl(240deg 100% 50%)", (0, 0, 255))]
    #[case::oklch_white("oklch(1 0 0)", (255, 255, 255))]
    #[case::oklch_black("oklch(0% 0 0)", (0, 0, 0))]
    #[case::keyword("WHITE", (255, 255, 255))]
    fn parses_supported_notations(#[case] input: &str, #[case] expected: (u8, u8, u8)) {
        assert_eq!(rgb8(parse_color(input).unwrap()), expected);
    }

    #[test]
    fn reads_alpha() {
        assert!((parse_color("rgb(0 0 0 / 0.25)").unwrap().alpha - 0.25).abs() < 1e-6);
        assert_eq!(parse_color("transparent").unwrap().alpha, 0.0);
    }

    #[rstest]
    #[case::empty("")]
    #[case::bad_hex("#12")]
    #[case::non_hex("#gggggg")]
    #[case::unknown_fn("lab(50% 40 59)")]
    #[case::too_few("rgb(1, 2)")]
    #[case::garbage("rgb(a b c)")]
    #[case::bare_triplet("0 0% 100%")]
    fn rejects_unparseable_literals(#[case] input: &str) {
        assert!(parse_color(input).is_err(), "{input} should not parse");
    }
}
