//! shadcn registry items for presets
//!
//! Each preset becomes a `registry:style` item whose CSS variables carry every
//! color in oklch plus the derived shadow scale, ready for static hosting.

use crate::color::{convert_color, ColorFormat, TailwindVersion};
use crate::presets::{preset_styles, presets};
use crate::theme::{ThemeMode, ThemeStyles};
use crate::tokens::{build_shadow_map, TokenKey, TokenKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const REGISTRY_ITEM_SCHEMA: &str = "https://ui.shadcn.com/schema/registry-item.json";

pub type CssVarMap = IndexMap<String, String>;

/// A `registry-item.json` document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dependencies: Vec<String>,
    pub registry_dependencies: Vec<String>,
    pub css: IndexMap<String, IndexMap<String, CssVarMap>>,
    pub css_vars: CssVars,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssVars {
    pub theme: CssVarMap,
    pub light: CssVarMap,
    pub dark: CssVarMap,
}

/// Build the registry item for resolved styles
pub fn registry_item(name: &str, styles: &ThemeStyles) -> RegistryItem {
    let light = &styles.light;

    let mut theme = CssVarMap::new();
    for key in [TokenKey::FontSans, TokenKey::FontMono, TokenKey::FontSerif, TokenKey::Radius] {
        theme.insert(key.name().to_string(), light.get(key).to_string());
    }
    for (name, offset) in [
        ("tracking-tighter", "calc(var(--tracking-normal) - 0.05em)"),
        ("tracking-tight", "calc(var(--tracking-normal) - 0.025em)"),
        ("tracking-wide", "calc(var(--tracking-normal) + 0.025em)"),
        ("tracking-wider", "calc(var(--tracking-normal) + 0.05em)"),
        ("tracking-widest", "calc(var(--tracking-normal) + 0.1em)"),
    ] {
        theme.insert(name.to_string(), offset.to_string());
    }

    let mut light_vars = mode_vars(styles, ThemeMode::Light);
    light_vars.insert("tracking-normal".into(), light.letter_spacing.clone());
    light_vars.insert("spacing".into(), light.spacing.clone());

    let body = IndexMap::from([(
        "body".to_string(),
        CssVarMap::from([(
            "letter-spacing".to_string(),
            "var(--tracking-normal)".to_string(),
        )]),
    )]);

    RegistryItem {
        schema: REGISTRY_ITEM_SCHEMA.to_string(),
        name: name.to_string(),
        kind: "registry:style".to_string(),
        dependencies: Vec::new(),
        registry_dependencies: Vec::new(),
        css: IndexMap::from([("@layer base".to_string(), body)]),
        css_vars: CssVars {
            theme,
            light: light_vars,
            dark: mode_vars(styles, ThemeMode::Dark),
        },
    }
}

/// Colors in oklch, then fonts, radius, shadow geometry and the shadow scale
fn mode_vars(styles: &ThemeStyles, mode: ThemeMode) -> CssVarMap {
    let tokens = styles.mode(mode);
    let mut vars = CssVarMap::new();

    for key in TokenKey::of_kind(TokenKind::Color) {
        let value = convert_color(tokens.get(key), ColorFormat::Oklch, TailwindVersion::V4);
        vars.insert(key.name().to_string(), value);
    }
    for key in TokenKey::of_kind(TokenKind::Font).chain([TokenKey::Radius]) {
        vars.insert(key.name().to_string(), tokens.get(key).to_string());
    }
    vars.insert(
        TokenKey::ShadowColor.name().to_string(),
        convert_color(&tokens.shadow_color, ColorFormat::Oklch, TailwindVersion::V4),
    );
    for key in TokenKey::of_kind(TokenKind::Shadow) {
        vars.insert(key.name().to_string(), tokens.get(key).to_string());
    }
    for (name, value) in build_shadow_map(styles, mode).iter() {
        vars.insert(name.to_string(), value.to_string());
    }

    vars
}

/// Write `<dir>/<preset>.json` for every catalog preset, returning the paths
pub fn write_registry(dir: &Path) -> crate::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(presets().len());
    for &name in presets().keys() {
        let item = registry_item(name, &preset_styles(name));
        let path = dir.join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(&item)?)?;
        tracing::debug!("wrote registry item {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_has_registry_shape() {
        let item = registry_item("slate", &preset_styles("slate"));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["$schema"], REGISTRY_ITEM_SCHEMA);
        assert_eq!(json["type"], "registry:style");
        assert_eq!(json["registryDependencies"], serde_json::json!([]));
        assert_eq!(
            json["css"]["@layer base"]["body"]["letter-spacing"],
            "var(--tracking-normal)"
        );
        assert_eq!(json["cssVars"]["light"]["background"], "oklch(1 0 0)");
        assert_eq!(json["cssVars"]["theme"]["radius"], "0.625rem");
    }

    #[test]
    fn light_and_dark_carry_full_color_set_and_shadows() {
        let item = registry_item("default", &ThemeStyles::default());
        for vars in [&item.css_vars.light, &item.css_vars.dark] {
            for key in TokenKey::of_kind(TokenKind::Color) {
                assert!(vars[key.name()].starts_with("oklch("), "{key}");
            }
            assert!(vars.contains_key("shadow-2xl"));
            assert!(vars.contains_key("shadow-offset-y"));
        }
        assert!(item.css_vars.light.contains_key("spacing"));
        assert!(!item.css_vars.dark.contains_key("spacing"));
    }
}
