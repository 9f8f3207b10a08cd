use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mview::graph_spec::{GraphSpec, ThemeName};
use mview::label_wrap::DEFAULT_WRAP_WIDTH;
use mview::theme::DEFAULT_CLICK_HOOK;
use mview::transform::Transform;
use mview::viewport::{self, Bounds, ViewportOptions, ViewportState};
use mview::{RenderConfig, event_parser};

#[derive(Parser)]
#[command(name = "mview", about = "Compile graph specs to Mermaid and replay viewport input")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report structural defects in a JSON graph spec
    Validate {
        /// Input file (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Compile a JSON graph spec into Mermaid source
    Compile {
        /// Input file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Maximum node label width in columns
        #[arg(long, short = 'w', default_value_t = DEFAULT_WRAP_WIDTH)]
        wrap: usize,

        /// Override the graph's theme (default, dark, neutral, forest, base)
        #[arg(long, value_parser = parse_theme)]
        theme: Option<ThemeName>,

        /// Callback name bound to every node
        #[arg(long, default_value = DEFAULT_CLICK_HOOK)]
        click_hook: String,

        /// Compile even if the graph has structural defects
        #[arg(long)]
        no_validate: bool,
    },
    /// Replay a viewport event script and print the resulting transform
    Viewport {
        /// Script file (reads from stdin if not provided)
        script: Option<PathBuf>,

        /// Container size as WIDTHxHEIGHT
        #[arg(long, short = 'c', value_parser = parse_size, default_value = "800x600")]
        container: Bounds,

        #[arg(long, default_value_t = viewport::DEFAULT_MIN_ZOOM)]
        min_zoom: f64,

        #[arg(long, default_value_t = viewport::DEFAULT_MAX_ZOOM)]
        max_zoom: f64,
    },
}

fn parse_theme(s: &str) -> Result<ThemeName, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unknown theme `{s}`"))
}

fn parse_size(s: &str) -> Result<Bounds, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok(Bounds::sized(width, height))
}

fn read_input(file: Option<&Path>) -> mview::Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {e}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Validate { file } => {
            let input = read_input(file.as_deref()).unwrap_or_else(|e| fail(e));
            let spec = GraphSpec::from_json(&input).unwrap_or_else(|e| fail(e));
            let errors = spec.validate();
            if errors.is_empty() {
                println!("ok");
                return;
            }
            for error in &errors {
                eprintln!("ERROR: {error}");
            }
            std::process::exit(1);
        }
        Command::Compile {
            file,
            wrap,
            theme,
            click_hook,
            no_validate,
        } => {
            let input = read_input(file.as_deref()).unwrap_or_else(|e| fail(e));
            let mut spec = GraphSpec::from_json(&input).unwrap_or_else(|e| fail(e));
            if let Some(theme) = theme {
                spec.theme_name = theme;
            }
            let config = RenderConfig {
                wrap_width: wrap,
                click_hook,
                ..RenderConfig::default()
            };
            let output = if no_validate {
                mview::compile(&spec, &config)
            } else {
                mview::compile_checked(&spec, &config).unwrap_or_else(|e| fail(e))
            };
            println!("{output}");
        }
        Command::Viewport {
            script,
            container,
            min_zoom,
            max_zoom,
        } => {
            if !(min_zoom > 0.0 && min_zoom <= max_zoom) {
                fail(format!("invalid zoom range {min_zoom}..{max_zoom}"));
            }
            let input = read_input(script.as_deref()).unwrap_or_else(|e| fail(e));
            let events = event_parser::parse_script(&input).unwrap_or_else(|e| fail(e));
            let options = ViewportOptions {
                min_zoom,
                max_zoom,
                ..ViewportOptions::default()
            };
            tracing::debug!(events = events.len(), "replaying viewport script");
            let state = viewport::replay(&events, ViewportState::default(), &options, &container);
            let transform = Transform::from_state(&state);
            println!("scale: {}", transform.scale);
            println!("translate: {},{}", transform.translate_x, transform.translate_y);
            println!("dragging: {}", state.is_dragging);
            println!("svg: {}", transform.to_svg_attribute());
            println!("css: {}", transform.to_css());
        }
    }
}
