//! Share links and install commands

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

const THEME_PARAM: &str = "theme";

/// Remove the `theme` query parameter from a link.
///
/// Returns the decoded parameter value (if present and non-empty) and the
/// link with every `theme` parameter removed. Other parameters and the
/// fragment are kept; the `?` is dropped when no parameters remain. Links
/// that do not parse, or carry no `theme` parameter, come back unchanged.
pub fn take_theme_param(link: &str) -> (Option<String>, String) {
    let mut parsed = match Url::parse(link) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!("not applying link `{}`: {}", link, err);
            return (None, link.to_string());
        }
    };

    let (themes, kept): (Vec<_>, Vec<_>) = parsed
        .query_pairs()
        .into_owned()
        .partition(|(name, _)| name == THEME_PARAM);
    if themes.is_empty() {
        return (None, link.to_string());
    }

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&kept);
    }

    let theme = themes
        .into_iter()
        .map(|(_, value)| value)
        .find(|value| !value.is_empty());
    (theme, parsed.into())
}

/// JavaScript package manager used for install commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Pnpm, Self::Npm, Self::Yarn, Self::Bun];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Command prefix that runs a package without installing it
    fn runner(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm dlx",
            Self::Npm => "npx",
            Self::Yarn => "yarn dlx",
            Self::Bun => "bunx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s)
            .ok_or_else(|| ThemeError::unknown("package manager", s))
    }
}

/// shadcn CLI command installing a preset from a registry base URL
pub fn install_command(package_manager: PackageManager, registry_url: &str, preset: &str) -> String {
    format!(
        "{} shadcn@latest add {}/{}.json",
        package_manager.runner(),
        registry_url.trim_end_matches('/'),
        preset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://x.dev/editor?theme=zinc", Some("zinc"), "https://x.dev/editor")]
    #[case("https://x.dev/editor?a=1&theme=zinc&b=2", Some("zinc"), "https://x.dev/editor?a=1&b=2")]
    #[case("https://x.dev/editor?tab=code", None, "https://x.dev/editor?tab=code")]
    #[case("https://x.dev/editor", None, "https://x.dev/editor")]
    #[case("https://x.dev/editor?theme=&x=1", None, "https://x.dev/editor?x=1")]
    #[case("https://x.dev/editor?theme=slate#top", Some("slate"), "https://x.dev/editor#top")]
    #[case("https://x.dev/editor?theme=neo%2Dbrutalism", Some("neo-brutalism"), "https://x.dev/editor")]
    #[case("not a link?theme=zinc", None, "not a link?theme=zinc")]
    fn strips_theme_param(
        #[case] url: &str,
        #[case] theme: Option<&str>,
        #[case] stripped: &str,
    ) {
        let (found, rest) = take_theme_param(url);
        assert_eq!(found.as_deref(), theme);
        assert_eq!(rest, stripped);
    }

    #[rstest]
    #[case(PackageManager::Pnpm, "pnpm dlx shadcn@latest add https://r.dev/r/zinc.json")]
    #[case(PackageManager::Npm, "npx shadcn@latest add https://r.dev/r/zinc.json")]
    #[case(PackageManager::Yarn, "yarn dlx shadcn@latest add https://r.dev/r/zinc.json")]
    #[case(PackageManager::Bun, "bunx shadcn@latest add https://r.dev/r/zinc.json")]
    fn install_commands(#[case] pm: PackageManager, #[case] expected: &str) {
        assert_eq!(install_command(pm, "https://r.dev/r/", "zinc"), expected);
    }

    #[test]
    fn package_manager_names() {
        for pm in PackageManager::ALL {
            assert_eq!(pm.to_string().parse::<PackageManager>().unwrap(), pm);
        }
        assert!("cargo".parse::<PackageManager>().is_err());
    }
}
