//! Shadow scale derived from the shadow geometry tokens

use super::ThemeTokenSet;
use crate::color::{convert_color, format_fixed, ColorFormat, TailwindVersion};
use crate::theme::{ThemeEditorState, ThemeMode, ThemeStyles};

/// Named shadow sizes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Xxs,
    Xs,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// How a size is composed from the base geometry
#[derive(Clone, Copy, Debug, PartialEq)]
enum Composition {
    /// One layer at `opacity * factor`
    Single { factor: f64 },
    /// Base layer plus a second layer with fixed offset-y and blur
    Double {
        offset_y: &'static str,
        blur: &'static str,
    },
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 8] = [
        Self::Xxs,
        Self::Xs,
        Self::Sm,
        Self::Default,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// CSS variable name without the `--` prefix
    pub fn name(self) -> &'static str {
        match self {
            Self::Xxs => "shadow-2xs",
            Self::Xs => "shadow-xs",
            Self::Sm => "shadow-sm",
            Self::Default => "shadow",
            Self::Md => "shadow-md",
            Self::Lg => "shadow-lg",
            Self::Xl => "shadow-xl",
            Self::Xxl => "shadow-2xl",
        }
    }

    fn composition(self) -> Composition {
        match self {
            Self::Xxs | Self::Xs => Composition::Single { factor: 0.5 },
            Self::Xxl => Composition::Single { factor: 2.5 },
            Self::Sm | Self::Default => Composition::Double {
                offset_y: "1px",
                blur: "2px",
            },
            Self::Md => Composition::Double {
                offset_y: "2px",
                blur: "4px",
            },
            Self::Lg => Composition::Double {
                offset_y: "4px",
                blur: "6px",
            },
            Self::Xl => Composition::Double {
                offset_y: "8px",
                blur: "10px",
            },
        }
    }
}

/// The eight rendered shadow values, in [`ShadowToken::ALL`] order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowMap {
    values: [String; 8],
}

impl ShadowMap {
    /// Get the box-shadow value for a size
    pub fn get(&self, token: ShadowToken) -> &str {
        let index = ShadowToken::ALL
            .iter()
            .position(|&t| t == token)
            .unwrap_or_default();
        &self.values[index]
    }

    /// Iterate `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ShadowToken::ALL
            .iter()
            .zip(&self.values)
            .map(|(token, value)| (token.name(), value.as_str()))
    }
}

/// Base geometry read from a token set
struct ShadowGeometry<'a> {
    offset_x: &'a str,
    offset_y: &'a str,
    blur: &'a str,
    spread: &'a str,
    /// Bare HSL triplet
    hsl: String,
    opacity: f64,
}

impl<'a> ShadowGeometry<'a> {
    fn from_tokens(tokens: &'a ThemeTokenSet) -> Self {
        let opacity = leading_number(&tokens.shadow_opacity).unwrap_or_else(|| {
            tracing::warn!(
                "invalid shadow opacity `{}`, using default",
                tokens.shadow_opacity
            );
            DEFAULT_OPACITY
        });

        Self {
            offset_x: &tokens.shadow_offset_x,
            offset_y: &tokens.shadow_offset_y,
            blur: &tokens.shadow_blur,
            spread: &tokens.shadow_spread,
            // Always the bare triplet, wrapped below with an alpha channel
            hsl: convert_color(&tokens.shadow_color, ColorFormat::Hsl, TailwindVersion::V3),
            opacity,
        }
    }

    fn color(&self, factor: f64) -> String {
        format!("hsl({} / {})", self.hsl, format_fixed(self.opacity * factor))
    }

    fn layer(&self, factor: f64) -> String {
        format!(
            "{} {} {} {} {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color(factor)
        )
    }

    fn second_layer(&self, offset_y: &str, blur: &str) -> String {
        let spread = leading_number(self.spread).unwrap_or(0.0) - 1.0;
        format!(
            "{} {} {} {}px {}",
            self.offset_x,
            offset_y,
            blur,
            spread,
            self.color(1.0)
        )
    }

    fn render(&self, token: ShadowToken) -> String {
        match token.composition() {
            Composition::Single { factor } => self.layer(factor),
            Composition::Double { offset_y, blur } => {
                format!("{}, {}", self.layer(1.0), self.second_layer(offset_y, blur))
            }
        }
    }
}

const DEFAULT_OPACITY: f64 = 0.1;

/// Build the shadow scale for one mode of a style pair
pub fn build_shadow_map(styles: &ThemeStyles, mode: ThemeMode) -> ShadowMap {
    shadow_map_for(styles.mode(mode))
}

/// Build the shadow scale for the editor's active mode
pub fn shadow_map(state: &ThemeEditorState) -> ShadowMap {
    build_shadow_map(&state.styles, state.current_mode)
}

/// Build the shadow scale from a single token set
pub fn shadow_map_for(tokens: &ThemeTokenSet) -> ShadowMap {
    let geometry = ShadowGeometry::from_tokens(tokens);
    ShadowMap {
        values: ShadowToken::ALL.map(|token| geometry.render(token)),
    }
}

/// Numeric prefix of a CSS value (`"-2.5px"` → `-2.5`)
pub(crate) fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_tokens() -> ThemeTokenSet {
        let mut tokens = ThemeTokenSet::default_light();
        tokens.shadow_color = "hsl(0 0% 0%)".into();
        tokens.shadow_opacity = "0.1".into();
        tokens.shadow_blur = "3px".into();
        tokens.shadow_spread = "0px".into();
        tokens.shadow_offset_x = "0px".into();
        tokens.shadow_offset_y = "1px".into();
        tokens
    }

    #[test]
    fn golden_shadow_scale() {
        let map = shadow_map_for(&geometry_tokens());
        assert_eq!(map.get(ShadowToken::Xxs), "0px 1px 3px 0px hsl(0 0% 0% / 0.05)");
        assert_eq!(map.get(ShadowToken::Xs), "0px 1px 3px 0px hsl(0 0% 0% / 0.05)");
        assert_eq!(
            map.get(ShadowToken::Sm),
            "0px 1px 3px 0px hsl(0 0% 0% / 0.10), 0px 1px 2px -1px hsl(0 0% 0% / 0.10)"
        );
        assert_eq!(map.get(ShadowToken::Default), map.get(ShadowToken::Sm));
        assert_eq!(
            map.get(ShadowToken::Md),
            "0px 1px 3px 0px hsl(0 0% 0% / 0.10), 0px 2px 4px -1px hsl(0 0% 0% / 0.10)"
        );
        assert_eq!(
            map.get(ShadowToken::Lg),
            "0px 1px 3px 0px hsl(0 0% 0% / 0.10), 0px 4px 6px -1px hsl(0 0% 0% / 0.10)"
        );
        assert_eq!(
            map.get(ShadowToken::Xl),
            "0px 1px 3px 0px hsl(0 0% 0% / 0.10), 0px 8px 10px -1px hsl(0 0% 0% / 0.10)"
        );
        assert_eq!(map.get(ShadowToken::Xxl), "0px 1px 3px 0px hsl(0 0% 0% / 0.25)");
    }

    #[test]
    fn halved_alpha_ties_round_up() {
        let mut tokens = geometry_tokens();
        tokens.shadow_opacity = "0.25".into();
        let map = shadow_map_for(&tokens);
        assert_eq!(map.get(ShadowToken::Xxs), "0px 1px 3px 0px hsl(0 0% 0% / 0.13)");
        assert_eq!(map.get(ShadowToken::Xs), map.get(ShadowToken::Xxs));
        assert!(map.get(ShadowToken::Xxl).ends_with("hsl(0 0% 0% / 0.63)"));
    }

    #[test]
    fn color_is_normalized_to_bare_hsl() {
        let mut tokens = geometry_tokens();
        tokens.shadow_color = "#ff0000".into();
        let map = shadow_map_for(&tokens);
        assert!(map.get(ShadowToken::Xs).ends_with("hsl(0 100% 50% / 0.05)"));
    }

    #[test]
    fn fractional_spread_keeps_decimals() {
        let mut tokens = geometry_tokens();
        tokens.shadow_spread = "2.5px".into();
        let map = shadow_map_for(&tokens);
        assert!(map.get(ShadowToken::Md).contains("0px 2px 4px 1.5px"));
    }

    #[test]
    fn mode_selects_token_set() {
        let mut styles = ThemeStyles::default();
        styles.dark.shadow_color = "#ffffff".into();
        let dark = build_shadow_map(&styles, ThemeMode::Dark);
        assert!(dark.get(ShadowToken::Xs).contains("hsl(0 0% 100% / 0.05)"));
        let light = build_shadow_map(&styles, ThemeMode::Light);
        assert!(light.get(ShadowToken::Xs).contains("hsl(0 0% 0% / 0.05)"));
    }

    #[test]
    fn iterates_in_scale_order() {
        let names: Vec<&str> = shadow_map_for(&geometry_tokens())
            .iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "shadow-2xs",
                "shadow-xs",
                "shadow-sm",
                "shadow",
                "shadow-md",
                "shadow-lg",
                "shadow-xl",
                "shadow-2xl"
            ]
        );
    }

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("-2.5px"), Some(-2.5));
        assert_eq!(leading_number("0"), Some(0.0));
        assert_eq!(leading_number("px"), None);
    }
}
