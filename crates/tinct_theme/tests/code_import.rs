use tinct_theme::{
    generate_styles_code, parse_css_input, preset_styles, presets, ColorFormat, TailwindVersion,
    ThemeEditor, TokenKey, TokenKind,
};

#[test]
fn hex_export_imports_back_exactly() {
    for &name in presets().keys() {
        let styles = preset_styles(name);
        let css = generate_styles_code(&styles, ColorFormat::Hex, TailwindVersion::V4);
        let imported = parse_css_input(&css);

        for key in TokenKey::of_kind(TokenKind::Color) {
            assert_eq!(imported.light.get(key), Some(styles.light.get(key)), "{name} light {key}");
            assert_eq!(imported.dark.get(key), Some(styles.dark.get(key)), "{name} dark {key}");
        }
        assert_eq!(imported.light.get(TokenKey::Radius), Some(styles.light.radius.as_str()));
        assert_eq!(imported.dark.get(TokenKey::FontSans), Some(styles.dark.font_sans.as_str()));
    }
}

#[test]
fn hsl_export_imports_back_as_hex_for_both_versions() {
    let styles = preset_styles("catppuccin");
    for version in [TailwindVersion::V3, TailwindVersion::V4] {
        let css = generate_styles_code(&styles, ColorFormat::Hsl, version);
        let imported = parse_css_input(&css);

        for key in TokenKey::of_kind(TokenKind::Color) {
            let value = imported.light.get(key).unwrap_or_default();
            assert!(
                value.starts_with('#') && value.len() == 7,
                "{version} {key}: {value}"
            );
        }
    }
}

#[test]
fn imported_theme_regenerates_the_same_stylesheet() {
    let source = preset_styles("slate");
    let css = generate_styles_code(&source, ColorFormat::Hex, TailwindVersion::V3);

    let mut editor = ThemeEditor::new();
    editor.import_css(&css).unwrap();

    let regenerated =
        generate_styles_code(&editor.state().styles, ColorFormat::Hex, TailwindVersion::V3);
    assert_eq!(regenerated, css);
}
