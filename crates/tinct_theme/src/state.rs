//! Theme editor state store
//!
//! All mutations go through [`ThemeEditor`] methods or the [`EditorCommand`]
//! reducer. Persistence is not part of the store; see [`crate::storage`] for
//! loading and saving a snapshot through an injected key-value store.

use crate::error::Result;
use crate::import::{parse_css_input, validate_css_input};
use crate::presets::{preset_styles, DEFAULT_PRESET};
use crate::share::take_theme_param;
use crate::theme::{ThemeEditorState, ThemeMode, ThemeStyles};
use crate::tokens::TokenKey;
use serde::{Deserialize, Serialize};

/// A single state transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// Replace the whole editor state
    SetState(ThemeEditorState),
    ApplyPreset(String),
    ResetToDefault,
    ResetToCurrentPreset,
    UpdateToken { key: TokenKey, value: String },
    SetMode(ThemeMode),
    ToggleMode,
    ImportCss(String),
}

/// Theme editor store: the edited theme plus the "ever left the default" latch
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEditor {
    pub theme_state: ThemeEditorState,
    #[serde(default)]
    pub has_changed_theme_from_default: bool,
}

impl ThemeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current editor state
    pub fn state(&self) -> &ThemeEditorState {
        &self.theme_state
    }

    /// Apply a command
    pub fn apply(&mut self, command: EditorCommand) -> Result<()> {
        match command {
            EditorCommand::SetState(state) => self.set_state(state),
            EditorCommand::ApplyPreset(name) => self.apply_preset(&name),
            EditorCommand::ResetToDefault => self.reset_to_default(),
            EditorCommand::ResetToCurrentPreset => self.reset_to_current_preset(),
            EditorCommand::UpdateToken { key, value } => self.update_token(key, value),
            EditorCommand::SetMode(mode) => self.set_mode(mode),
            EditorCommand::ToggleMode => self.toggle_mode(),
            EditorCommand::ImportCss(css) => return self.import_css(&css),
        }
        Ok(())
    }

    /// Replace the editor state unconditionally
    pub fn set_state(&mut self, state: ThemeEditorState) {
        self.theme_state = state;
    }

    /// Replace the styles with a resolved preset and remember its name.
    ///
    /// Applying anything other than `"default"` sets the changed latch; nothing
    /// here clears it.
    pub fn apply_preset(&mut self, name: &str) {
        tracing::debug!("applying preset `{}`", name);
        self.theme_state.styles = preset_styles(name);
        self.theme_state.preset = Some(name.to_string());
        if name != DEFAULT_PRESET {
            self.has_changed_theme_from_default = true;
        }
    }

    /// Restore the default styles, keeping the mode and the preset name
    pub fn reset_to_default(&mut self) {
        self.theme_state.styles = ThemeStyles::default();
    }

    /// Restore the styles of the remembered preset
    pub fn reset_to_current_preset(&mut self) {
        self.theme_state.styles = preset_styles(self.current_preset());
    }

    /// Whether the styles differ from the default styles
    pub fn has_default_theme_changed(&self) -> bool {
        self.theme_state.styles != ThemeStyles::default()
    }

    /// Whether the styles differ from the remembered preset
    pub fn has_current_preset_changed(&self) -> bool {
        self.theme_state.styles != preset_styles(self.current_preset())
    }

    /// Edit one token.
    ///
    /// Common tokens are written to both modes, every other token only to the
    /// active mode.
    pub fn update_token(&mut self, key: TokenKey, value: impl Into<String>) {
        let value = value.into();
        let styles = &mut self.theme_state.styles;
        if key.is_common() {
            styles.light.set(key, value.clone());
            styles.dark.set(key, value);
        } else {
            styles.mode_mut(self.theme_state.current_mode).set(key, value);
        }
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.theme_state.current_mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.theme_state.current_mode.toggle());
    }

    /// Validate and merge pasted CSS: `:root` into light, `.dark` into dark
    pub fn import_css(&mut self, css: &str) -> Result<()> {
        validate_css_input(css)?;
        let imported = parse_css_input(css);
        tracing::debug!(
            "imported {} light and {} dark tokens",
            imported.light.len(),
            imported.dark.len()
        );

        let styles = &mut self.theme_state.styles;
        styles.light = styles.light.merged(&imported.light);
        styles.dark = styles.dark.merged(&imported.dark);
        Ok(())
    }

    /// Apply the preset named by a `theme=` link parameter, returning the link
    /// without it
    pub fn apply_deep_link(&mut self, url: &str) -> String {
        let (theme, stripped) = take_theme_param(url);
        if let Some(name) = theme {
            self.apply_preset(&name);
        }
        stripped
    }

    fn current_preset(&self) -> &str {
        self.theme_state.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ImportError, ThemeError};

    #[test]
    fn common_token_edit_in_dark_mode_reaches_light() {
        let mut editor = ThemeEditor::new();
        editor.set_mode(ThemeMode::Dark);
        editor.update_token(TokenKey::Radius, "1rem");

        let styles = &editor.state().styles;
        assert_eq!(styles.light.radius, "1rem");
        assert_eq!(styles.dark.radius, "1rem");
    }

    #[test]
    fn color_edit_only_touches_active_mode() {
        let mut editor = ThemeEditor::new();
        editor.set_mode(ThemeMode::Dark);
        editor.update_token(TokenKey::Primary, "#ff0000");

        let styles = &editor.state().styles;
        assert_eq!(styles.dark.primary, "#ff0000");
        assert_eq!(styles.light.primary, ThemeStyles::default().light.primary);
    }

    #[test]
    fn shadow_color_is_per_mode() {
        let mut editor = ThemeEditor::new();
        editor.update_token(TokenKey::ShadowColor, "#123456");
        assert_eq!(editor.state().styles.light.shadow_color, "#123456");
        assert_eq!(editor.state().styles.dark.shadow_color, "#000000");
    }

    #[test]
    fn apply_preset_latches_changed_flag() {
        let mut editor = ThemeEditor::new();
        editor.apply_preset("slate");
        assert!(editor.has_changed_theme_from_default);
        assert_eq!(editor.state().preset.as_deref(), Some("slate"));

        editor.apply_preset(DEFAULT_PRESET);
        assert!(editor.has_changed_theme_from_default);
        assert!(!editor.has_default_theme_changed());
    }

    #[test]
    fn default_preset_does_not_set_latch() {
        let mut editor = ThemeEditor::new();
        editor.apply_preset(DEFAULT_PRESET);
        assert!(!editor.has_changed_theme_from_default);
    }

    #[test]
    fn reset_to_default_keeps_mode_and_stale_preset() {
        let mut editor = ThemeEditor::new();
        editor.apply_preset("zinc");
        editor.set_mode(ThemeMode::Dark);
        editor.reset_to_default();

        assert_eq!(editor.state().styles, ThemeStyles::default());
        assert_eq!(editor.state().current_mode, ThemeMode::Dark);
        assert_eq!(editor.state().preset.as_deref(), Some("zinc"));
        assert!(editor.has_current_preset_changed());
    }

    #[test]
    fn reset_to_current_preset_discards_edits() {
        let mut editor = ThemeEditor::new();
        editor.apply_preset("catppuccin");
        editor.update_token(TokenKey::Primary, "#000000");
        assert!(editor.has_current_preset_changed());

        editor.reset_to_current_preset();
        assert!(!editor.has_current_preset_changed());
        assert_eq!(editor.state().preset.as_deref(), Some("catppuccin"));
    }

    #[test]
    fn reset_without_preset_uses_default() {
        let mut editor = ThemeEditor::new();
        editor.update_token(TokenKey::Radius, "0px");
        assert!(editor.has_default_theme_changed());
        editor.reset_to_current_preset();
        assert!(!editor.has_default_theme_changed());
    }

    #[test]
    fn import_merges_per_mode() {
        let mut editor = ThemeEditor::new();
        editor
            .import_css(":root { --primary: #ff0000; }\n.dark { --primary: #00ff00; }")
            .unwrap();
        assert_eq!(editor.state().styles.light.primary, "#ff0000");
        assert_eq!(editor.state().styles.dark.primary, "#00ff00");
    }

    #[test]
    fn invalid_import_is_rejected_before_parsing() {
        let mut editor = ThemeEditor::new();
        let err = editor.import_css("body { color: red }").unwrap_err();
        assert!(matches!(err, ThemeError::Import(ImportError::NoVariables)));
        assert_eq!(editor, ThemeEditor::new());
    }

    #[test]
    fn reducer_dispatches_commands() {
        let mut editor = ThemeEditor::new();
        editor
            .apply(EditorCommand::ApplyPreset("neo-brutalism".into()))
            .unwrap();
        editor.apply(EditorCommand::ToggleMode).unwrap();
        editor
            .apply(EditorCommand::UpdateToken {
                key: TokenKey::Accent,
                value: "#abcdef".into(),
            })
            .unwrap();

        assert_eq!(editor.state().current_mode, ThemeMode::Dark);
        assert_eq!(editor.state().styles.dark.accent, "#abcdef");
        assert_eq!(editor.state().styles.light.radius, "0px");

        editor.apply(EditorCommand::ResetToCurrentPreset).unwrap();
        assert!(!editor.has_current_preset_changed());
    }

    #[test]
    fn deep_link_applies_once_and_is_stripped() {
        let mut editor = ThemeEditor::new();
        let url = editor.apply_deep_link("https://example.com/editor?theme=zinc&tab=code");
        assert_eq!(url, "https://example.com/editor?tab=code");
        assert_eq!(editor.state().preset.as_deref(), Some("zinc"));

        let again = editor.apply_deep_link(&url);
        assert_eq!(again, url);
    }

    #[test]
    fn deep_link_preset_name_is_percent_decoded() {
        let mut editor = ThemeEditor::new();
        let url = editor.apply_deep_link("https://example.com/editor?theme=neo%2Dbrutalism");
        assert_eq!(url, "https://example.com/editor");
        assert_eq!(editor.state().preset.as_deref(), Some("neo-brutalism"));
        assert_eq!(editor.state().styles, preset_styles("neo-brutalism"));
    }
}
