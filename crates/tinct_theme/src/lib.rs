//! Tinct Theme Pipeline
//!
//! Design tokens for shadcn-style themes: a closed token schema with light and
//! dark values, a preset catalog, and the conversions that turn an edited theme
//! into CSS custom properties and back.
//!
//! # Overview
//!
//! - **Tokens**: [`TokenKey`] names every CSS variable, [`ThemeTokenSet`] holds
//!   one complete value set per mode
//! - **Presets**: [`presets()`] is the built-in catalog; [`preset_styles`]
//!   resolves a name into complete light/dark sets
//! - **Colors**: [`convert_color`] renders any supported literal as HSL, OKLCH,
//!   RGB or hex for Tailwind 3 or 4
//! - **Contrast**: [`contrast_ratio`] and [`contrast_report`] measure WCAG
//!   ratios between token pairs
//! - **Shadows**: [`build_shadow_map`] derives the eight-step shadow scale
//! - **Code**: [`generate_code`] emits the stylesheet, [`parse_css_input`]
//!   reads one back
//! - **Editor**: [`ThemeEditor`] owns the edited state; [`storage`] persists it
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{generate_code, ColorFormat, TailwindVersion, ThemeEditor, TokenKey};
//!
//! let mut editor = ThemeEditor::new();
//! editor.apply_preset("zinc");
//! editor.update_token(TokenKey::Radius, "0.5rem");
//!
//! let css = generate_code(editor.state(), ColorFormat::Oklch, TailwindVersion::V4);
//! assert!(css.contains("--radius: 0.5rem;"));
//! ```
//!
//! # Failure model
//!
//! Color conversion and contrast measurement never fail: unparseable input is
//! echoed back (or measured as `"1.00"`) and logged with `tracing`. The
//! `try_*` variants expose the underlying [`ColorError`] when callers need to
//! tell a fallback from a real result. Only the JSON entry points, CSS import
//! validation and storage return [`ThemeError`].

pub mod codegen;
pub mod color;
pub mod contrast;
pub mod error;
pub mod import;
pub mod presets;
pub mod registry;
pub mod share;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use codegen::{generate_code, generate_code_from_json, generate_styles_code};
pub use color::{
    convert_color, format_color, format_fixed, parse_color, try_convert_color, ColorFormat, Soft,
    TailwindVersion,
};
pub use contrast::{contrast_ratio, contrast_report, try_contrast_ratio, ContrastCheck, ContrastLevel};
pub use error::{ColorError, ImportError, Result, ThemeError};
pub use import::{parse_css_input, validate_css_input, ImportedTokens};
pub use presets::{preset, preset_styles, presets, ThemePreset, DEFAULT_PRESET};
pub use registry::{registry_item, write_registry, RegistryItem};
pub use share::{install_command, take_theme_param, PackageManager};
pub use state::{EditorCommand, ThemeEditor};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Preferences};
pub use theme::{ThemeEditorState, ThemeMode, ThemeStyles};
pub use tokens::*;
