//! Design tokens for theming
//!
//! The token schema is closed: every theme carries exactly the keys listed in
//! [`TokenKey::ALL`], in this order:
//! - Surface and foreground colors
//! - Border, input and ring colors
//! - Chart colors
//! - Sidebar colors
//! - Font stacks
//! - Radius
//! - Shadow geometry
//! - Letter spacing and base spacing

mod defaults;
mod shadow;

pub use defaults::*;
pub use shadow::*;

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// What kind of value a token holds
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenKind {
    /// Color emitted in the selector blocks
    Color,
    /// Base color of the shadow scale
    ShadowColor,
    /// Font-family stack
    Font,
    /// Corner radius length
    Radius,
    /// Shadow opacity, blur, spread or offset
    Shadow,
    /// Letter spacing length
    Tracking,
    /// Base spacing length
    Spacing,
}

macro_rules! token_schema {
    ($($variant:ident => $field:ident : $name:literal, $kind:ident;)*) => {
        /// Token keys for dynamic access
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        pub enum TokenKey {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl TokenKey {
            /// Every token in emission order
            pub const ALL: &'static [TokenKey] = &[$(TokenKey::$variant),*];

            /// CSS variable name without the `--` prefix
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenKey::$variant => $name,)*
                }
            }

            pub fn kind(self) -> TokenKind {
                match self {
                    $(TokenKey::$variant => TokenKind::$kind,)*
                }
            }
        }

        /// Complete token set for one mode
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ThemeTokenSet {
            $(
                #[serde(rename = $name)]
                pub $field: String,
            )*
        }

        impl ThemeTokenSet {
            /// Get a token value by key
            pub fn get(&self, key: TokenKey) -> &str {
                match key {
                    $(TokenKey::$variant => &self.$field,)*
                }
            }

            fn slot_mut(&mut self, key: TokenKey) -> &mut String {
                match key {
                    $(TokenKey::$variant => &mut self.$field,)*
                }
            }
        }
    };
}

token_schema! {
    Background => background: "background", Color;
    Foreground => foreground: "foreground", Color;
    Card => card: "card", Color;
    CardForeground => card_foreground: "card-foreground", Color;
    Popover => popover: "popover", Color;
    PopoverForeground => popover_foreground: "popover-foreground", Color;
    Primary => primary: "primary", Color;
    PrimaryForeground => primary_foreground: "primary-foreground", Color;
    Secondary => secondary: "secondary", Color;
    SecondaryForeground => secondary_foreground: "secondary-foreground", Color;
    Muted => muted: "muted", Color;
    MutedForeground => muted_foreground: "muted-foreground", Color;
    Accent => accent: "accent", Color;
    AccentForeground => accent_foreground: "accent-foreground", Color;
    Destructive => destructive: "destructive", Color;
    DestructiveForeground => destructive_foreground: "destructive-foreground", Color;
    Border => border: "border", Color;
    Input => input: "input", Color;
    Ring => ring: "ring", Color;
    Chart1 => chart_1: "chart-1", Color;
    Chart2 => chart_2: "chart-2", Color;
    Chart3 => chart_3: "chart-3", Color;
    Chart4 => chart_4: "chart-4", Color;
    Chart5 => chart_5: "chart-5", Color;
    Sidebar => sidebar: "sidebar", Color;
    SidebarForeground => sidebar_foreground: "sidebar-foreground", Color;
    SidebarPrimary => sidebar_primary: "sidebar-primary", Color;
    SidebarPrimaryForeground => sidebar_primary_foreground: "sidebar-primary-foreground", Color;
    SidebarAccent => sidebar_accent: "sidebar-accent", Color;
    SidebarAccentForeground => sidebar_accent_foreground: "sidebar-accent-foreground", Color;
    SidebarBorder => sidebar_border: "sidebar-border", Color;
    SidebarRing => sidebar_ring: "sidebar-ring", Color;
    FontSans => font_sans: "font-sans", Font;
    FontSerif => font_serif: "font-serif", Font;
    FontMono => font_mono: "font-mono", Font;
    Radius => radius: "radius", Radius;
    ShadowColor => shadow_color: "shadow-color", ShadowColor;
    ShadowOpacity => shadow_opacity: "shadow-opacity", Shadow;
    ShadowBlur => shadow_blur: "shadow-blur", Shadow;
    ShadowSpread => shadow_spread: "shadow-spread", Shadow;
    ShadowOffsetX => shadow_offset_x: "shadow-offset-x", Shadow;
    ShadowOffsetY => shadow_offset_y: "shadow-offset-y", Shadow;
    LetterSpacing => letter_spacing: "letter-spacing", Tracking;
    Spacing => spacing: "spacing", Spacing;
}

impl TokenKey {
    /// Look up a key by its CSS name
    pub fn from_name(name: &str) -> Option<TokenKey> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    /// Whether the value is a color literal
    pub fn is_color(self) -> bool {
        matches!(self.kind(), TokenKind::Color | TokenKind::ShadowColor)
    }

    /// Whether edits to this token apply to light and dark together.
    ///
    /// Common tokens are exactly the non-color tokens.
    pub fn is_common(self) -> bool {
        !self.is_color()
    }

    /// Keys of the given kind, in emission order
    pub fn of_kind(kind: TokenKind) -> impl Iterator<Item = TokenKey> {
        Self::ALL.iter().copied().filter(move |key| key.kind() == kind)
    }
}

impl Display for TokenKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches("--");
        Self::from_name(name).ok_or_else(|| ThemeError::UnknownToken(s.to_string()))
    }
}

impl ThemeTokenSet {
    /// Replace a token value
    pub fn set(&mut self, key: TokenKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    /// Iterate over every token in emission order
    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, &str)> + '_ {
        TokenKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    /// Right-biased shallow merge: override values win, `self` fills the gaps
    pub fn merged(&self, overrides: &TokenOverrides) -> ThemeTokenSet {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.set(key, value);
        }
        merged
    }
}

/// A partial token set, as stored in presets and produced by CSS import
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenOverrides(BTreeMap<TokenKey, String>);

impl TokenOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build overrides from a static `(key, value)` table
    pub fn from_pairs(pairs: &[(TokenKey, &str)]) -> Self {
        pairs
            .iter()
            .map(|&(key, value)| (key, value.to_string()))
            .collect()
    }

    pub fn insert(&mut self, key: TokenKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: TokenKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, &str)> + '_ {
        self.0.iter().map(|(&key, value)| (key, value.as_str()))
    }
}

impl FromIterator<(TokenKey, String)> for TokenOverrides {
    fn from_iter<I: IntoIterator<Item = (TokenKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
