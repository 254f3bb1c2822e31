//! Built-in default token sets

use super::ThemeTokenSet;

/// Letter spacing that emits no tracking overrides
pub const DEFAULT_LETTER_SPACING: &str = "0em";

/// Base spacing that emits no `--spacing` override
pub const DEFAULT_SPACING: &str = "0.25rem";

pub const DEFAULT_FONT_SANS: &str = "ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'";
pub const DEFAULT_FONT_SERIF: &str = "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif";
pub const DEFAULT_FONT_MONO: &str = "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace";

impl ThemeTokenSet {
    /// Default light-mode tokens (neutral palette)
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".into(),
            foreground: "#0a0a0a".into(),
            card: "#ffffff".into(),
            card_foreground: "#0a0a0a".into(),
            popover: "#ffffff".into(),
            popover_foreground: "#0a0a0a".into(),
            primary: "#171717".into(),
            primary_foreground: "#fafafa".into(),
            secondary: "#f5f5f5".into(),
            secondary_foreground: "#171717".into(),
            muted: "#f5f5f5".into(),
            muted_foreground: "#737373".into(),
            accent: "#f5f5f5".into(),
            accent_foreground: "#171717".into(),
            destructive: "#e7000b".into(),
            destructive_foreground: "#ffffff".into(),
            border: "#e5e5e5".into(),
            input: "#e5e5e5".into(),
            ring: "#a1a1a1".into(),
            chart_1: "#91c5ff".into(),
            chart_2: "#3a81f6".into(),
            chart_3: "#2563ef".into(),
            chart_4: "#1a4eda".into(),
            chart_5: "#1f3fad".into(),
            sidebar: "#fafafa".into(),
            sidebar_foreground: "#0a0a0a".into(),
            sidebar_primary: "#171717".into(),
            sidebar_primary_foreground: "#fafafa".into(),
            sidebar_accent: "#f5f5f5".into(),
            sidebar_accent_foreground: "#171717".into(),
            sidebar_border: "#e5e5e5".into(),
            sidebar_ring: "#a1a1a1".into(),
            font_sans: DEFAULT_FONT_SANS.into(),
            font_serif: DEFAULT_FONT_SERIF.into(),
            font_mono: DEFAULT_FONT_MONO.into(),
            radius: "0.625rem".into(),
            shadow_color: "#000000".into(),
            shadow_opacity: "0.1".into(),
            shadow_blur: "3px".into(),
            shadow_spread: "0px".into(),
            shadow_offset_x: "0".into(),
            shadow_offset_y: "1px".into(),
            letter_spacing: DEFAULT_LETTER_SPACING.into(),
            spacing: DEFAULT_SPACING.into(),
        }
    }

    /// Default dark-mode tokens. Common tokens match [`Self::default_light`].
    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".into(),
            foreground: "#fafafa".into(),
            card: "#171717".into(),
            card_foreground: "#fafafa".into(),
            popover: "#262626".into(),
            popover_foreground: "#fafafa".into(),
            primary: "#e5e5e5".into(),
            primary_foreground: "#171717".into(),
            secondary: "#262626".into(),
            secondary_foreground: "#fafafa".into(),
            muted: "#262626".into(),
            muted_foreground: "#a1a1a1".into(),
            accent: "#404040".into(),
            accent_foreground: "#fafafa".into(),
            destructive: "#ff6467".into(),
            destructive_foreground: "#fafafa".into(),
            border: "#282828".into(),
            input: "#343434".into(),
            ring: "#737373".into(),
            sidebar: "#171717".into(),
            sidebar_foreground: "#fafafa".into(),
            sidebar_primary: "#1447e6".into(),
            sidebar_primary_foreground: "#fafafa".into(),
            sidebar_accent: "#262626".into(),
            sidebar_accent_foreground: "#fafafa".into(),
            sidebar_border: "#282828".into(),
            sidebar_ring: "#525252".into(),
            ..Self::default_light()
        }
    }
}
