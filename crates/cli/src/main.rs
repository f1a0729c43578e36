#![deny(unsafe_code)]
//! CLI binary for theme-forge.
//!
//! Subcommands:
//! - `generate [color]` — derive a theme, preview it or export it
//! - `contrast <color>` — black or white text for a background
//! - `validate <color>` — check a hex color
//! - `random` — suggest random primary colors
//! - `list` — print export formats and theme roles

mod error;

use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use error::CliError;
use theme_forge_core::contrast::text_color_for;
use theme_forge_core::{
    contrast_text, is_valid_hex, parse_rgb, random_primary, Role, Theme, ThemeError, ThemeSpec,
    Xorshift64,
};
use theme_forge_export::file::{resolve_output, write_export};
use theme_forge_export::Format;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Upper bound of `random --count`.
const MAX_RANDOM_COUNT: i64 = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "theme-forge",
    about = "Derive a role-based color theme from one primary color"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a theme and print a preview, or export it with --format.
    Generate {
        /// Primary color (e.g. "#5344F4"). Overrides the config file.
        color: Option<String>,

        /// Export format (json, css, tailwind, wordpress).
        #[arg(short, long)]
        format: Option<String>,

        /// Theme title used by exports and download names.
        #[arg(short, long)]
        title: Option<String>,

        /// Theme spec JSON file with "title" and "primary".
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the export to this file, or into this directory.
        #[arg(short, long, requires = "format")]
        output: Option<PathBuf>,
    },
    /// Print the readable text color (black or white) for a background.
    Contrast {
        /// Background color.
        color: String,
    },
    /// Check whether a color is a valid hex color.
    Validate {
        /// Color to check.
        color: String,
    },
    /// Suggest random primary colors.
    Random {
        /// PRNG seed for deterministic output (defaults to the clock).
        #[arg(long)]
        seed: Option<u64>,

        /// Number of colors to draw (1 to 10000).
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=MAX_RANDOM_COUNT)
        )]
        count: u32,
    },
    /// List export formats and theme roles.
    List,
}

/// Layers CLI flags over the config file over the defaults.
fn resolve_spec(
    config: Option<&Path>,
    color: Option<String>,
    title: Option<String>,
) -> Result<ThemeSpec, CliError> {
    let mut spec = match config {
        Some(path) => ThemeSpec::load(path)?,
        None => ThemeSpec::default(),
    };
    if let Some(color) = color {
        spec.primary = color;
    }
    if let Some(title) = title {
        spec.title = title;
    }
    debug!(title = %spec.title, primary = %spec.primary, "resolved theme spec");
    Ok(spec)
}

/// One aligned line per role: label, hex, readable text color.
fn preview_lines(theme: &Theme) -> Vec<String> {
    theme
        .iter()
        .map(|(role, color)| {
            let text = text_color_for(color.to_rgb());
            format!("  {:<20} {:<8} {text} text", role.label(), color.as_str())
        })
        .collect()
}

fn preview_json(theme: &Theme, title: &str) -> serde_json::Value {
    let colors: Vec<serde_json::Value> = theme
        .iter()
        .map(|(role, color)| {
            serde_json::json!({
                "role": role,
                "label": role.label(),
                "color": color,
                "text": text_color_for(color.to_rgb()),
            })
        })
        .collect();
    serde_json::json!({ "title": title, "colors": colors })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            color,
            format,
            title,
            config,
            output,
        } => {
            let spec = resolve_spec(config.as_deref(), color, title)?;
            let theme = spec.theme()?;

            let Some(format) = format else {
                if cli.json {
                    let info = preview_json(&theme, &spec.title);
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!("{}", spec.title);
                    for line in preview_lines(&theme) {
                        println!("{line}");
                    }
                }
                return Ok(());
            };

            let format = Format::from_name(&format)?;
            let text = format.render(&theme, &spec.title)?;

            match output {
                Some(path) => {
                    let path = resolve_output(&path, &spec.title, format);
                    write_export(&path, &text)?;
                    if cli.json {
                        let info = serde_json::json!({
                            "format": format.name(),
                            "title": spec.title,
                            "primary": theme.primary,
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!("wrote {format} theme '{}' -> {}", spec.title, path.display());
                    }
                }
                None => println!("{text}"),
            }
        }
        Command::Contrast { color } => {
            let text = contrast_text(&color);
            if cli.json {
                let info = serde_json::json!({ "color": color, "text": text });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{text}");
            }
        }
        Command::Validate { color } => {
            let valid = is_valid_hex(&color);
            let shorthand = matches!(parse_rgb(color.trim()), Err(ThemeError::ShorthandHex(_)));
            if cli.json {
                let info = serde_json::json!({
                    "color": color,
                    "valid": valid,
                    "generates_theme": valid && !shorthand,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if valid && shorthand {
                println!("valid (3-digit shorthand, expand to 6 digits to generate a theme)");
            } else if valid {
                println!("valid");
            }
            if !valid {
                return Err(CliError::Input(format!("'{color}' is not a hex color")));
            }
        }
        Command::Random { seed, count } => {
            let seed = seed.unwrap_or_else(clock_seed);
            let mut rng = Xorshift64::new(seed);
            if cli.json {
                let colors: Vec<_> = (0..count).map(|_| random_primary(&mut rng)).collect();
                let info = serde_json::json!({ "seed": seed, "colors": colors });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for _ in 0..count {
                    println!("{}", random_primary(&mut rng));
                }
            }
        }
        Command::List => {
            let formats = Format::list_formats();
            if cli.json {
                let roles: Vec<serde_json::Value> = Role::ALL
                    .iter()
                    .map(|r| serde_json::json!({ "name": r, "slug": r.kebab(), "label": r.label() }))
                    .collect();
                let info = serde_json::json!({ "formats": formats, "roles": roles });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Formats:");
                println!("  {}", formats.join(", "));
                println!("Roles:");
                for role in Role::ALL {
                    println!("  {:<18} {}", role.name(), role.label());
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_forge_core::generate_theme;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_format_and_output() {
        let cli = Cli::try_parse_from([
            "theme-forge", "generate", "#0a9396", "-f", "css", "-o", "out.css", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Generate {
                color,
                format,
                output,
                ..
            } => {
                assert_eq!(color.as_deref(), Some("#0a9396"));
                assert_eq!(format.as_deref(), Some("css"));
                assert_eq!(output, Some(PathBuf::from("out.css")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_without_format_is_rejected() {
        let result = Cli::try_parse_from(["theme-forge", "generate", "-o", "out.css"]);
        assert!(result.is_err());
    }

    #[test]
    fn random_defaults_to_one_color() {
        let cli = Cli::try_parse_from(["theme-forge", "random", "--seed", "42"]).unwrap();
        match cli.command {
            Command::Random { seed, count } => {
                assert_eq!(seed, Some(42));
                assert_eq!(count, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn random_count_is_bounded() {
        for bad in ["0", "10001", "18446744073709551615"] {
            let result = Cli::try_parse_from(["theme-forge", "random", "-n", bad]);
            assert!(result.is_err(), "accepted -n {bad}");
        }
        let cli = Cli::try_parse_from(["theme-forge", "random", "-n", "10000"]).unwrap();
        assert!(matches!(cli.command, Command::Random { count: 10_000, .. }));
    }

    #[test]
    fn resolve_spec_defaults_without_config() {
        let spec = resolve_spec(None, None, None).unwrap();
        assert_eq!(spec, ThemeSpec::default());
    }

    #[test]
    fn resolve_spec_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        std::fs::write(&path, r##"{"title": "Ocean", "primary": "#005f73"}"##).unwrap();

        let from_file = resolve_spec(Some(&path), None, None).unwrap();
        assert_eq!(from_file, ThemeSpec::new("Ocean", "#005f73"));

        let overridden = resolve_spec(Some(&path), Some("#ff0000".into()), None).unwrap();
        assert_eq!(overridden, ThemeSpec::new("Ocean", "#ff0000"));
    }

    #[test]
    fn resolve_spec_missing_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_spec(Some(&dir.path().join("nope.json")), None, None).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn invalid_primary_maps_to_input_exit_code() {
        let err: CliError = ThemeSpec::new("x", "notacolor").theme().unwrap_err().into();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn preview_lists_every_role_with_text_color() {
        let theme = generate_theme("#5344F4").unwrap();
        let lines = preview_lines(&theme);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].contains("Primary") && lines[0].contains("#5344F4"));
        assert!(lines[0].ends_with("white text"));
        assert!(lines[6].contains("#FFFFFF") && lines[6].ends_with("black text"));
    }

    #[test]
    fn preview_json_carries_roles_in_order() {
        let theme = generate_theme("#5344F4").unwrap();
        let value = preview_json(&theme, "Custom Theme");
        let colors = value["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[0]["role"], "primary");
        assert_eq!(colors[10]["role"], "borderDark");
        assert_eq!(colors[6]["text"], "black");
    }
}
