//! CSS variable import
//!
//! Reads the first `:root { ... }` and `.dark { ... }` blocks of pasted CSS
//! back into partial token sets. This is not a CSS parser: only the first
//! flat block per selector is read, and only `--name: value;` declarations
//! with known token names are kept.

use crate::color::{convert_color, ColorFormat, TailwindVersion};
use crate::error::ImportError;
use crate::theme::ThemeMode;
use crate::tokens::{TokenKey, TokenOverrides};
use regex::Regex;
use std::sync::OnceLock;

/// Partial token sets recovered from CSS
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportedTokens {
    pub light: TokenOverrides,
    pub dark: TokenOverrides,
}

/// Cheap shape check run before [`parse_css_input`] on user input
pub fn validate_css_input(css: &str) -> Result<(), ImportError> {
    if css.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    if !css.contains("--") || !css.contains(':') {
        return Err(ImportError::NoVariables);
    }
    Ok(())
}

/// Extract light and dark tokens from CSS text.
///
/// Missing blocks yield empty partials. Colors are normalized to hex; values
/// starting with a digit are read as bare HSL triplets.
pub fn parse_css_input(css: &str) -> ImportedTokens {
    let mut imported = ImportedTokens::default();
    for mode in ThemeMode::ALL {
        let target = match mode {
            ThemeMode::Light => &mut imported.light,
            ThemeMode::Dark => &mut imported.dark,
        };
        match extract_block(css, mode.selector()) {
            Ok(Some(block)) => parse_declarations(block, target),
            Ok(None) => tracing::debug!("no `{}` block in imported CSS", mode.selector()),
            Err(err) => {
                tracing::error!("failed to read `{}` block: {}", mode.selector(), err);
                break;
            }
        }
    }
    imported
}

/// Body of the first `<selector> { ... }` block
fn extract_block<'a>(css: &'a str, selector: &str) -> Result<Option<&'a str>, regex::Error> {
    let pattern = Regex::new(&format!(r"{}\s*\{{([^}}]+)\}}", regex::escape(selector)))?;
    Ok(pattern
        .captures(css)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str()))
}

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"--([^:]+):\s*([^;]+);").unwrap_or_else(|err| {
            unreachable!("declaration pattern is a valid regex: {err}")
        })
    })
}

fn parse_declarations(block: &str, target: &mut TokenOverrides) {
    for captures in declaration_pattern().captures_iter(block) {
        let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let Some(key) = TokenKey::from_name(name.as_str().trim()) else {
            continue;
        };

        let value = value.as_str();
        if key.is_color() {
            target.insert(key, normalize_color(value.trim()));
        } else {
            target.insert(key, value);
        }
    }
}

fn normalize_color(value: &str) -> String {
    let literal = if value.starts_with(|c: char| c.is_ascii_digit()) {
        format!("hsl({value})")
    } else {
        value.to_string()
    };
    convert_color(&literal, ColorFormat::Hex, TailwindVersion::V3)
}
