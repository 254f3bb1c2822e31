//! Theme mode, light/dark style pair and editor state

use crate::error::ThemeError;
use crate::tokens::{ThemeTokenSet, TokenKey, TokenOverrides};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Light or dark mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Stylesheet selector holding this mode's variables
    pub fn selector(self) -> &'static str {
        match self {
            Self::Light => ":root",
            Self::Dark => ".dark",
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::unknown("mode", other)),
        }
    }
}

/// A light/dark pair of complete token sets.
///
/// Deserializing requires both `light` and `dark`; tokens missing inside a
/// mode are filled from that mode's defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThemeStyles")]
pub struct ThemeStyles {
    pub light: ThemeTokenSet,
    pub dark: ThemeTokenSet,
}

impl ThemeStyles {
    pub fn mode(&self, mode: ThemeMode) -> &ThemeTokenSet {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn mode_mut(&mut self, mode: ThemeMode) -> &mut ThemeTokenSet {
        match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }

    /// Parse styles from untrusted JSON
    pub fn from_value(value: &serde_json::Value) -> crate::Result<Self> {
        let raw = RawThemeStyles::deserialize(value)?;
        Self::try_from(raw)
    }
}

impl Default for ThemeStyles {
    fn default() -> Self {
        Self {
            light: ThemeTokenSet::default_light(),
            dark: ThemeTokenSet::default_dark(),
        }
    }
}

/// Wire form of [`ThemeStyles`] before validation
#[derive(Debug, Default, Deserialize)]
struct RawThemeStyles {
    light: Option<BTreeMap<String, String>>,
    dark: Option<BTreeMap<String, String>>,
}

impl TryFrom<RawThemeStyles> for ThemeStyles {
    type Error = ThemeError;

    fn try_from(raw: RawThemeStyles) -> Result<Self, Self::Error> {
        let (Some(light), Some(dark)) = (raw.light, raw.dark) else {
            return Err(ThemeError::MalformedStyles(
                "missing light or dark mode".to_string(),
            ));
        };

        Ok(Self {
            light: ThemeTokenSet::default_light().merged(&known_tokens(light)),
            dark: ThemeTokenSet::default_dark().merged(&known_tokens(dark)),
        })
    }
}

fn known_tokens(values: BTreeMap<String, String>) -> TokenOverrides {
    values
        .into_iter()
        .filter_map(|(name, value)| match TokenKey::from_name(&name) {
            Some(key) => Some((key, value)),
            None => {
                tracing::debug!("dropping unknown token `{}` from stored styles", name);
                None
            }
        })
        .collect()
}

/// The theme being edited
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEditorState {
    pub styles: ThemeStyles,
    pub current_mode: ThemeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

impl ThemeEditorState {
    /// Token set of the active mode
    pub fn current(&self) -> &ThemeTokenSet {
        self.styles.mode(self.current_mode)
    }
}
