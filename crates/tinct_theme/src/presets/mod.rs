//! Built-in theme presets.
//!
//! A preset is a partial override of the default token sets. Resolving it
//! merges the overrides over the defaults per mode, so every resolved preset
//! carries the full token schema.

use crate::theme::{ThemeMode, ThemeStyles};
use crate::tokens::{TokenKey, TokenOverrides};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use TokenKey::*;

/// Reserved preset name that always resolves to the default styles
pub const DEFAULT_PRESET: &str = "default";

/// Per-mode overrides of a preset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetStyles {
    #[serde(default, skip_serializing_if = "TokenOverrides::is_empty")]
    pub light: TokenOverrides,
    #[serde(default, skip_serializing_if = "TokenOverrides::is_empty")]
    pub dark: TokenOverrides,
}

impl PresetStyles {
    pub fn mode(&self, mode: ThemeMode) -> &TokenOverrides {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub styles: PresetStyles,
}

impl ThemePreset {
    fn new(label: &str, created_at: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            created_at: Some(created_at.to_string()),
            styles: PresetStyles::default(),
        }
    }

    fn light(mut self, overrides: TokenOverrides) -> Self {
        self.styles.light = overrides;
        self
    }

    fn dark(mut self, overrides: TokenOverrides) -> Self {
        self.styles.dark = overrides;
        self
    }

    /// Merge this preset over the default styles
    pub fn resolve(&self) -> ThemeStyles {
        let defaults = ThemeStyles::default();
        ThemeStyles {
            light: defaults.light.merged(&self.styles.light),
            dark: defaults.dark.merged(&self.styles.dark),
        }
    }
}

/// Full preset catalog keyed by preset name, in display order
pub fn presets() -> &'static IndexMap<&'static str, ThemePreset> {
    static CATALOG: OnceLock<IndexMap<&'static str, ThemePreset>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        IndexMap::from([
            ("neutral", shadcn_preset("Neutral", neutral_light(), neutral_dark())),
            ("slate", shadcn_preset("Slate", slate_light(), slate_dark())),
            ("zinc", shadcn_preset("Zinc", zinc_light(), zinc_dark())),
            ("catppuccin", catppuccin()),
            ("neo-brutalism", neo_brutalism()),
        ])
    })
}

/// Look up a catalog entry
pub fn preset(name: &str) -> Option<&'static ThemePreset> {
    presets().get(name)
}

/// Resolve a preset name to complete styles.
///
/// `"default"` and names missing from the catalog resolve to the default styles.
pub fn preset_styles(name: &str) -> ThemeStyles {
    if name == DEFAULT_PRESET {
        return ThemeStyles::default();
    }
    match preset(name) {
        Some(preset) => preset.resolve(),
        None => {
            tracing::debug!("unknown preset `{}`, using default styles", name);
            ThemeStyles::default()
        }
    }
}

/// The shadcn base colors every palette-style preset is built from
#[derive(Clone, Copy)]
struct BasePalette {
    background: &'static str,
    foreground: &'static str,
    card: &'static str,
    primary: &'static str,
    primary_foreground: &'static str,
    secondary: &'static str,
    muted: &'static str,
    muted_foreground: &'static str,
    accent: &'static str,
    destructive: &'static str,
    border: &'static str,
    ring: &'static str,
}

fn shadcn_preset(label: &str, light: BasePalette, dark: BasePalette) -> ThemePreset {
    ThemePreset::new(label, "2024-12-01")
        .light(palette_overrides(light))
        .dark(palette_overrides(dark))
}

/// Spread a base palette over the surface, sidebar and foreground tokens
fn palette_overrides(base: BasePalette) -> TokenOverrides {
    TokenOverrides::from_pairs(&[
        (Background, base.background),
        (Foreground, base.foreground),
        (Card, base.card),
        (CardForeground, base.foreground),
        (Popover, base.card),
        (PopoverForeground, base.foreground),
        (Primary, base.primary),
        (PrimaryForeground, base.primary_foreground),
        (Secondary, base.secondary),
        (SecondaryForeground, base.primary),
        (Muted, base.muted),
        (MutedForeground, base.muted_foreground),
        (Accent, base.accent),
        (AccentForeground, base.primary),
        (Destructive, base.destructive),
        (DestructiveForeground, base.primary_foreground),
        (Border, base.border),
        (Input, base.border),
        (Ring, base.ring),
        (Sidebar, base.card),
        (SidebarForeground, base.foreground),
        (SidebarPrimary, base.primary),
        (SidebarPrimaryForeground, base.primary_foreground),
        (SidebarAccent, base.accent),
        (SidebarAccentForeground, base.primary),
        (SidebarBorder, base.border),
        (SidebarRing, base.ring),
    ])
}

fn neutral_light() -> BasePalette {
    BasePalette {
        background: "#ffffff",
        foreground: "#0a0a0a",
        card: "#ffffff",
        primary: "#171717",
        primary_foreground: "#fafafa",
        secondary: "#f5f5f5",
        muted: "#f5f5f5",
        muted_foreground: "#737373",
        accent: "#f5f5f5",
        destructive: "#ef4444",
        border: "#e5e5e5",
        ring: "#0a0a0a",
    }
}

fn neutral_dark() -> BasePalette {
    BasePalette {
        background: "#0a0a0a",
        foreground: "#fafafa",
        card: "#0a0a0a",
        primary: "#fafafa",
        primary_foreground: "#171717",
        secondary: "#262626",
        muted: "#262626",
        muted_foreground: "#a3a3a3",
        accent: "#262626",
        destructive: "#7f1d1d",
        border: "#262626",
        ring: "#d4d4d4",
    }
}

fn slate_light() -> BasePalette {
    BasePalette {
        background: "#ffffff",
        foreground: "#020817",
        card: "#ffffff",
        primary: "#0f172a",
        primary_foreground: "#f8fafc",
        secondary: "#f1f5f9",
        muted: "#f1f5f9",
        muted_foreground: "#64748b",
        accent: "#f1f5f9",
        destructive: "#ef4444",
        border: "#e2e8f0",
        ring: "#020817",
    }
}

fn slate_dark() -> BasePalette {
    BasePalette {
        background: "#020817",
        foreground: "#f8fafc",
        card: "#020817",
        primary: "#f8fafc",
        primary_foreground: "#0f172a",
        secondary: "#1e293b",
        muted: "#1e293b",
        muted_foreground: "#94a3b8",
        accent: "#1e293b",
        destructive: "#7f1d1d",
        border: "#1e293b",
        ring: "#cbd5e1",
    }
}

fn zinc_light() -> BasePalette {
    BasePalette {
        background: "#ffffff",
        foreground: "#09090b",
        card: "#ffffff",
        primary: "#18181b",
        primary_foreground: "#fafafa",
        secondary: "#f4f4f5",
        muted: "#f4f4f5",
        muted_foreground: "#71717a",
        accent: "#f4f4f5",
        destructive: "#ef4444",
        border: "#e4e4e7",
        ring: "#09090b",
    }
}

fn zinc_dark() -> BasePalette {
    BasePalette {
        background: "#09090b",
        foreground: "#fafafa",
        card: "#09090b",
        primary: "#fafafa",
        primary_foreground: "#18181b",
        secondary: "#27272a",
        muted: "#27272a",
        muted_foreground: "#a1a1aa",
        accent: "#27272a",
        destructive: "#7f1d1d",
        border: "#27272a",
        ring: "#d4d4d8",
    }
}

/// Catppuccin: Latte for light mode, Mocha for dark mode
fn catppuccin() -> ThemePreset {
    ThemePreset::new("Catppuccin", "2025-01-15")
        .light(TokenOverrides::from_pairs(&[
            (Background, "#eff1f5"),
            (Foreground, "#4c4f69"),
            (Card, "#ffffff"),
            (CardForeground, "#4c4f69"),
            (Popover, "#ccd0da"),
            (PopoverForeground, "#4c4f69"),
            (Primary, "#8839ef"),
            (PrimaryForeground, "#ffffff"),
            (Secondary, "#ccd0da"),
            (SecondaryForeground, "#4c4f69"),
            (Muted, "#dce0e8"),
            (MutedForeground, "#6c6f85"),
            (Accent, "#04a5e5"),
            (AccentForeground, "#ffffff"),
            (Destructive, "#d20f39"),
            (DestructiveForeground, "#ffffff"),
            (Border, "#bcc0cc"),
            (Input, "#ccd0da"),
            (Ring, "#8839ef"),
            (Chart1, "#8839ef"),
            (Chart2, "#04a5e5"),
            (Chart3, "#40a02b"),
            (Chart4, "#fe640b"),
            (Chart5, "#dc8a78"),
            (Sidebar, "#e6e9ef"),
            (SidebarForeground, "#4c4f69"),
            (SidebarPrimary, "#8839ef"),
            (SidebarPrimaryForeground, "#ffffff"),
            (SidebarAccent, "#04a5e5"),
            (SidebarAccentForeground, "#ffffff"),
            (SidebarBorder, "#bcc0cc"),
            (SidebarRing, "#8839ef"),
            (FontSans, "Montserrat, sans-serif"),
            (FontMono, "Fira Code, monospace"),
            (Radius, "0.35rem"),
            (ShadowOpacity, "0.12"),
            (ShadowBlur, "6px"),
            (ShadowOffsetY, "4px"),
        ]))
        .dark(TokenOverrides::from_pairs(&[
            (Background, "#181825"),
            (Foreground, "#cdd6f4"),
            (Card, "#1e1e2e"),
            (CardForeground, "#cdd6f4"),
            (Popover, "#45475a"),
            (PopoverForeground, "#cdd6f4"),
            (Primary, "#cba6f7"),
            (PrimaryForeground, "#1e1e2e"),
            (Secondary, "#585b70"),
            (SecondaryForeground, "#cdd6f4"),
            (Muted, "#292c3c"),
            (MutedForeground, "#a6adc8"),
            (Accent, "#89dceb"),
            (AccentForeground, "#1e1e2e"),
            (Destructive, "#f38ba8"),
            (DestructiveForeground, "#1e1e2e"),
            (Border, "#313244"),
            (Input, "#313244"),
            (Ring, "#cba6f7"),
            (Chart1, "#cba6f7"),
            (Chart2, "#89dceb"),
            (Chart3, "#a6e3a1"),
            (Chart4, "#fab387"),
            (Chart5, "#f5e0dc"),
            (Sidebar, "#11111b"),
            (SidebarForeground, "#cdd6f4"),
            (SidebarPrimary, "#cba6f7"),
            (SidebarPrimaryForeground, "#1e1e2e"),
            (SidebarAccent, "#89dceb"),
            (SidebarAccentForeground, "#1e1e2e"),
            (SidebarBorder, "#45475a"),
            (SidebarRing, "#cba6f7"),
            (FontSans, "Montserrat, sans-serif"),
            (FontMono, "Fira Code, monospace"),
            (Radius, "0.35rem"),
            (ShadowOpacity, "0.12"),
            (ShadowBlur, "6px"),
            (ShadowOffsetY, "4px"),
        ]))
}

/// Flat colors, hard offset shadows, square corners, tracked-out type
fn neo_brutalism() -> ThemePreset {
    let common: &[(TokenKey, &str)] = &[
        (FontSans, "DM Sans, sans-serif"),
        (FontSerif, "ui-serif, Georgia, serif"),
        (FontMono, "Space Mono, monospace"),
        (Radius, "0px"),
        (ShadowOpacity, "1"),
        (ShadowBlur, "0px"),
        (ShadowSpread, "0px"),
        (ShadowOffsetX, "4px"),
        (ShadowOffsetY, "4px"),
        (LetterSpacing, "0.025em"),
        (Spacing, "0.3rem"),
    ];

    let mut light = TokenOverrides::from_pairs(&[
        (Background, "#ffffff"),
        (Foreground, "#000000"),
        (Card, "#ffffff"),
        (CardForeground, "#000000"),
        (Primary, "#ff3333"),
        (PrimaryForeground, "#ffffff"),
        (Secondary, "#ffff00"),
        (SecondaryForeground, "#000000"),
        (Accent, "#0066ff"),
        (AccentForeground, "#ffffff"),
        (Destructive, "#000000"),
        (DestructiveForeground, "#ffffff"),
        (Border, "#000000"),
        (Ring, "#ff3333"),
        (ShadowColor, "#000000"),
    ]);
    let mut dark = TokenOverrides::from_pairs(&[
        (Background, "#000000"),
        (Foreground, "#ffffff"),
        (Card, "#333333"),
        (CardForeground, "#ffffff"),
        (Primary, "#ff6666"),
        (PrimaryForeground, "#000000"),
        (Secondary, "#ffff33"),
        (SecondaryForeground, "#000000"),
        (Accent, "#3385ff"),
        (AccentForeground, "#000000"),
        (Destructive, "#ffffff"),
        (DestructiveForeground, "#000000"),
        (Border, "#ffffff"),
        (Ring, "#ff6666"),
        (ShadowColor, "#ffffff"),
    ]);
    for &(key, value) in common {
        light.insert(key, value);
        dark.insert(key, value);
    }

    ThemePreset::new("Neo Brutalism", "2025-02-10")
        .light(light)
        .dark(dark)
}
