//! Stylesheet code generation
//!
//! Renders the editor state as CSS custom properties: a `:root` block for
//! light mode, a `.dark` block for dark mode and, for Tailwind 4, an
//! `@theme inline` block aliasing every token.

use crate::color::{convert_color, ColorFormat, TailwindVersion};
use crate::theme::{ThemeEditorState, ThemeMode, ThemeStyles};
use crate::tokens::{
    build_shadow_map, ShadowToken, TokenKey, TokenKind, DEFAULT_LETTER_SPACING, DEFAULT_SPACING,
};

/// Tracking scale emitted when letter spacing is customized, as offsets from
/// `--tracking-normal`
const TRACKING_SCALE: [(&str, &str); 6] = [
    ("tracking-tighter", "calc(var(--tracking-normal) - 0.05em)"),
    ("tracking-tight", "calc(var(--tracking-normal) - 0.025em)"),
    ("tracking-normal", "var(--tracking-normal)"),
    ("tracking-wide", "calc(var(--tracking-normal) + 0.025em)"),
    ("tracking-wider", "calc(var(--tracking-normal) + 0.05em)"),
    ("tracking-widest", "calc(var(--tracking-normal) + 0.1em)"),
];

const RADIUS_SCALE: [(&str, &str); 4] = [
    ("radius-sm", "calc(var(--radius) - 4px)"),
    ("radius-md", "calc(var(--radius) - 2px)"),
    ("radius-lg", "var(--radius)"),
    ("radius-xl", "calc(var(--radius) + 4px)"),
];

const BODY_LETTER_SPACING: &str = "body {\n  letter-spacing: var(--tracking-normal);\n}";

/// Generate the stylesheet for an editor state
pub fn generate_code(
    state: &ThemeEditorState,
    format: ColorFormat,
    version: TailwindVersion,
) -> String {
    generate_styles_code(&state.styles, format, version)
}

/// Generate the stylesheet from an untrusted JSON editor state.
///
/// Fails with [`crate::ThemeError::MalformedStyles`] when `styles.light` or
/// `styles.dark` is missing.
pub fn generate_code_from_json(
    state: &serde_json::Value,
    format: ColorFormat,
    version: TailwindVersion,
) -> crate::Result<String> {
    let styles = state.get("styles").ok_or_else(|| {
        crate::ThemeError::MalformedStyles("missing light or dark mode".to_string())
    })?;
    let styles = ThemeStyles::from_value(styles)?;
    Ok(generate_styles_code(&styles, format, version))
}

/// Generate the stylesheet for a light/dark style pair
pub fn generate_styles_code(
    styles: &ThemeStyles,
    format: ColorFormat,
    version: TailwindVersion,
) -> String {
    let mut blocks = vec![
        mode_block(styles, ThemeMode::Light, format, version),
        mode_block(styles, ThemeMode::Dark, format, version),
    ];
    if version == TailwindVersion::V4 {
        blocks.push(theme_inline_block(styles));
    }
    if has_custom_tracking(styles) {
        blocks.push(BODY_LETTER_SPACING.to_string());
    }
    blocks.join("\n\n")
}

fn has_custom_tracking(styles: &ThemeStyles) -> bool {
    styles.light.letter_spacing != DEFAULT_LETTER_SPACING
}

fn mode_block(
    styles: &ThemeStyles,
    mode: ThemeMode,
    format: ColorFormat,
    version: TailwindVersion,
) -> String {
    let tokens = styles.mode(mode);
    let mut out = format!("{} {{", mode.selector());

    for key in TokenKey::of_kind(TokenKind::Color) {
        let value = convert_color(tokens.get(key), format, version);
        declare(&mut out, key.name(), &value);
    }
    for key in TokenKey::of_kind(TokenKind::Font) {
        declare(&mut out, key.name(), tokens.get(key));
    }
    declare(&mut out, TokenKey::Radius.name(), &tokens.radius);
    for (name, value) in build_shadow_map(styles, mode).iter() {
        declare(&mut out, name, value);
    }

    if mode == ThemeMode::Light {
        if has_custom_tracking(styles) {
            out.push('\n');
            declare(&mut out, "tracking-normal", &tokens.letter_spacing);
        }
        if tokens.spacing != DEFAULT_SPACING {
            declare(&mut out, "spacing", &tokens.spacing);
        }
    }

    out.push_str("\n}");
    out
}

fn theme_inline_block(styles: &ThemeStyles) -> String {
    let mut out = String::from("@theme inline {");

    for key in TokenKey::of_kind(TokenKind::Color) {
        alias(&mut out, &format!("color-{}", key.name()), key.name());
    }

    out.push('\n');
    for name in ["font-sans", "font-mono", "font-serif"] {
        alias(&mut out, name, name);
    }

    out.push('\n');
    for (name, value) in RADIUS_SCALE {
        declare(&mut out, name, value);
    }
    for token in ShadowToken::ALL {
        alias(&mut out, token.name(), token.name());
    }

    if has_custom_tracking(styles) {
        out.push('\n');
        for (name, value) in TRACKING_SCALE {
            declare(&mut out, name, value);
        }
    }

    out.push_str("\n}");
    out
}

fn declare(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("\n  --{name}: {value};"));
}

fn alias(out: &mut String, name: &str, target: &str) {
    out.push_str(&format!("\n  --{name}: var(--{target});"));
}
