//! Tinct CLI
//!
//! Command-line front end for the theme editor:
//! - Apply presets and edit tokens, persisted between runs
//! - Export the stylesheet in any color format
//! - Import CSS variables back into the editor
//! - Contrast checks, registry output and install commands

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{TinctConfig, CONFIG_FILE};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tinct_theme::contrast::FALLBACK_RATIO;
use tinct_theme::storage::KeyValueStore;
use tinct_theme::{
    contrast_report, format_fixed, generate_code, install_command, preset, presets,
    try_contrast_ratio, write_registry, ColorFormat, ContrastLevel, EditorCommand, FileStore, PackageManager,
    Preferences, TailwindVersion, ThemeEditor, ThemeMode, TokenKey,
};
use tracing_subscriber::EnvFilter;

/// Edit, export and import shadcn-style themes
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Edit, export and import shadcn-style themes")]
#[command(version)]
struct Cli {
    /// Configuration file or directory containing tinct.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding persisted editor state
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the preset catalog
    Presets,

    /// Apply a preset
    Apply { name: String },

    /// Edit one token, e.g. `tinct set primary "#ff0000"`
    Set { token: TokenKey, value: String },

    /// Switch the active mode
    Mode { mode: ModeArg },

    /// Reset to the default theme
    Reset {
        /// Reset to the current preset instead
        #[arg(long)]
        preset: bool,
    },

    /// Import CSS variables from a file (`-` for stdin)
    Import { file: PathBuf },

    /// Print the stylesheet
    Code {
        #[arg(short, long)]
        format: Option<ColorFormat>,
        #[arg(short, long)]
        tailwind: Option<TailwindVersion>,
    },

    /// Contrast ratio between two colors, or the report for the active mode.
    ///
    /// Unparseable colors report the `1.00` fallback and the reason.
    Contrast {
        #[arg(requires = "background")]
        foreground: Option<String>,
        background: Option<String>,
    },

    /// Show mode, preset and change flags
    Status,

    /// Write registry items for every preset
    Registry {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the shadcn install command for a preset
    Install {
        preset: String,
        #[arg(long)]
        pm: Option<PackageManager>,
    },

    /// Apply a `?theme=` link and print it without the parameter
    Open { url: String },

    /// Show or update export preferences
    Prefs {
        #[arg(short, long)]
        format: Option<ColorFormat>,
        #[arg(short, long)]
        tailwind: Option<TailwindVersion>,
        #[arg(long)]
        pm: Option<PackageManager>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE));
    let config = TinctConfig::load(config_path)?;
    let store_dir = cli.store.unwrap_or_else(|| config.storage.dir.clone());
    let mut store = FileStore::new(store_dir);

    let output = execute(cli.command, &config, &mut store)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Run one command against a store, returning what to print
fn execute(command: Command, config: &TinctConfig, store: &mut impl KeyValueStore) -> Result<String> {
    match command {
        Command::Presets => {
            let mut out = String::new();
            for (name, preset) in presets() {
                out.push_str(&format!(
                    "{name}\t{}\n",
                    preset.label.as_deref().unwrap_or(*name)
                ));
            }
            Ok(out.trim_end().to_string())
        }
        Command::Apply { name } => {
            if preset(&name).is_none() && name != tinct_theme::DEFAULT_PRESET {
                tracing::warn!("unknown preset `{}`, applying default styles", name);
            }
            edit(store, EditorCommand::ApplyPreset(name))
        }
        Command::Set { token, value } => edit(store, EditorCommand::UpdateToken { key: token, value }),
        Command::Mode { mode } => edit(
            store,
            match mode {
                ModeArg::Light => EditorCommand::SetMode(ThemeMode::Light),
                ModeArg::Dark => EditorCommand::SetMode(ThemeMode::Dark),
                ModeArg::Toggle => EditorCommand::ToggleMode,
            },
        ),
        Command::Reset { preset } => edit(
            store,
            if preset {
                EditorCommand::ResetToCurrentPreset
            } else {
                EditorCommand::ResetToDefault
            },
        ),
        Command::Import { file } => {
            let css = read_input(&file)?;
            edit(store, EditorCommand::ImportCss(css))
        }
        Command::Code { format, tailwind } => {
            let prefs = Preferences::load(&*store)?;
            let editor = ThemeEditor::load(&*store)?;
            Ok(generate_code(
                editor.state(),
                format.unwrap_or(prefs.color_format),
                tailwind.unwrap_or(prefs.tailwind_version),
            ))
        }
        Command::Contrast {
            foreground,
            background,
        } => match (foreground, background) {
            (Some(foreground), Some(background)) => {
                match try_contrast_ratio(&foreground, &background) {
                    Ok(ratio) => Ok(format!(
                        "{}\t{}",
                        format_fixed(ratio),
                        ContrastLevel::from_ratio(ratio)
                    )),
                    Err(err) => Ok(format!("{FALLBACK_RATIO}\tunparseable: {err}")),
                }
            }
            _ => contrast_table(&*store),
        },
        Command::Status => status(&*store),
        Command::Registry { out } => {
            let dir = out.unwrap_or_else(|| config.registry.output.clone());
            let written = write_registry(&dir)?;
            Ok(format!("Wrote {} registry items to {}", written.len(), dir.display()))
        }
        Command::Install { preset: name, pm } => {
            if preset(&name).is_none() {
                bail!("Unknown preset `{name}`. Run `tinct presets` to list them.");
            }
            let pm = match pm {
                Some(pm) => pm,
                None => Preferences::load(&*store)?.package_manager,
            };
            Ok(install_command(pm, &config.registry.url, &name))
        }
        Command::Open { url } => {
            let mut editor = ThemeEditor::load(&*store)?;
            let stripped = editor.apply_deep_link(&url);
            editor.save(store)?;
            Ok(stripped)
        }
        Command::Prefs {
            format,
            tailwind,
            pm,
        } => {
            let mut prefs = Preferences::load(&*store)?;
            if format.is_some() || tailwind.is_some() || pm.is_some() {
                prefs.color_format = format.unwrap_or(prefs.color_format);
                prefs.tailwind_version = tailwind.unwrap_or(prefs.tailwind_version);
                prefs.package_manager = pm.unwrap_or(prefs.package_manager);
                prefs.save(store)?;
            }
            Ok(format!(
                "format\t{}\ntailwind\t{}\npackage manager\t{}",
                prefs.color_format, prefs.tailwind_version, prefs.package_manager
            ))
        }
    }
}

/// Load the editor, apply one command and persist the result
fn edit(store: &mut impl KeyValueStore, command: EditorCommand) -> Result<String> {
    let mut editor = ThemeEditor::load(&*store)?;
    editor.apply(command)?;
    editor.save(store)?;
    status(&*store)
}

fn status(store: &impl KeyValueStore) -> Result<String> {
    let editor = ThemeEditor::load(store)?;
    let state = editor.state();
    Ok(format!(
        "mode\t{}\npreset\t{}\nchanged from default\t{}\nedited since preset\t{}",
        state.current_mode,
        state.preset.as_deref().unwrap_or("-"),
        editor.has_default_theme_changed(),
        editor.has_current_preset_changed(),
    ))
}

fn contrast_table(store: &impl KeyValueStore) -> Result<String> {
    let editor = ThemeEditor::load(store)?;
    let mut out = String::new();
    for check in contrast_report(editor.state().current()) {
        let ratio = check
            .ratio
            .map_or_else(|| "n/a".to_string(), format_fixed);
        out.push_str(&format!(
            "{} on {}\t{}\t{}\n",
            check.foreground, check.background, ratio, check.level
        ));
    }
    Ok(out.trim_end().to_string())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut css = String::new();
        std::io::stdin()
            .read_to_string(&mut css)
            .context("Failed to read CSS from stdin")?;
        return Ok(css);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::MemoryStore;

    fn run(store: &mut MemoryStore, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("tinct").chain(args.iter().copied()))?;
        execute(cli.command, &TinctConfig::default(), store)
    }

    #[test]
    fn edits_persist_between_commands() {
        let mut store = MemoryStore::new();
        run(&mut store, &["apply", "zinc"]).unwrap();
        run(&mut store, &["mode", "toggle"]).unwrap();
        let status = run(&mut store, &["set", "radius", "1rem"]).unwrap();

        assert!(status.contains("mode\tdark"));
        assert!(status.contains("preset\tzinc"));
        assert!(status.contains("edited since preset\ttrue"));

        let css = run(&mut store, &["code", "--format", "hex"]).unwrap();
        assert!(css.contains("--radius: 1rem;"));
    }

    #[test]
    fn code_uses_saved_preferences() {
        let mut store = MemoryStore::new();
        run(&mut store, &["prefs", "--format", "oklch", "--tailwind", "4"]).unwrap();
        let css = run(&mut store, &["code"]).unwrap();
        assert!(css.contains("--background: oklch(1 0 0);"));
        assert!(css.contains("@theme inline"));
    }

    #[test]
    fn reset_flags() {
        let mut store = MemoryStore::new();
        run(&mut store, &["apply", "slate"]).unwrap();
        run(&mut store, &["set", "--", "primary", "#ff0000"]).unwrap();

        let status = run(&mut store, &["reset", "--preset"]).unwrap();
        assert!(status.contains("edited since preset\tfalse"));

        let status = run(&mut store, &["reset"]).unwrap();
        assert!(status.contains("changed from default\tfalse"));
        assert!(status.contains("preset\tslate"));
    }

    #[test]
    fn import_reads_css_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        fs::write(&path, ":root { --primary: #123456; }").unwrap();

        let mut store = MemoryStore::new();
        run(&mut store, &["import", path.to_str().unwrap()]).unwrap();
        let css = run(&mut store, &["code", "--format", "hex"]).unwrap();
        assert!(css.contains("--primary: #123456;"));
    }

    #[test]
    fn import_rejects_css_without_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.css");
        fs::write(&path, "body { color: red; }").unwrap();

        let mut store = MemoryStore::new();
        assert!(run(&mut store, &["import", path.to_str().unwrap()]).is_err());
    }

    #[test]
    fn contrast_pair_and_report() {
        let mut store = MemoryStore::new();
        let out = run(&mut store, &["contrast", "#000000", "#ffffff"]).unwrap();
        assert_eq!(out, "21.00\tAAA");

        let fallback = run(&mut store, &["contrast", "nope", "#ffffff"]).unwrap();
        assert!(fallback.starts_with("1.00\tunparseable: "), "{fallback}");

        let report = run(&mut store, &["contrast"]).unwrap();
        assert!(report.starts_with("foreground on background\t"));
    }

    #[test]
    fn install_uses_configured_registry() {
        let mut store = MemoryStore::new();
        let out = run(&mut store, &["install", "zinc", "--pm", "npm"]).unwrap();
        assert_eq!(out, "npx shadcn@latest add https://tinct.dev/r/zinc.json");
        assert!(run(&mut store, &["install", "missing"]).is_err());
    }

    #[test]
    fn open_applies_link_preset() {
        let mut store = MemoryStore::new();
        let out = run(&mut store, &["open", "https://tinct.dev/editor?theme=catppuccin"]).unwrap();
        assert_eq!(out, "https://tinct.dev/editor");
        assert!(run(&mut store, &["status"]).unwrap().contains("preset\tcatppuccin"));
    }

    #[test]
    fn registry_writes_every_preset() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::new();
        let out = run(&mut store, &["registry", "--out", dir.path().to_str().unwrap()]).unwrap();
        assert!(out.starts_with(&format!("Wrote {} registry items", presets().len())));
        assert!(dir.path().join("neo-brutalism.json").exists());
    }
}
