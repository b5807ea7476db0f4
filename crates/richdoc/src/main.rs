//! Command line entry of richdoc.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ecow::EcoString;
use richdoc::{outline, to_html, Config, CourseContent, Renderer};
use richdoc_dom::{DiagnosticSeverity, SharedVecSink};
use serde_json::Value;

/// Placeholder written when the course has no renderable content.
const NO_CONTENT: &str = "<p class=\"no-content\">No content available yet.</p>\n";

/// What to write to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// An HTML fragment
    #[default]
    Html,
    /// The display tree as JSON
    Tree,
    /// The heading outline as JSON
    Outline,
}

/// Renders CMS course content to HTML.
#[derive(Debug, Clone, Parser)]
#[clap(name = "richdoc", author, version, about)]
struct Args {
    /// Path to the course payload (JSON)
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Path to output file, `-` for stdout
    #[clap(value_name = "OUTPUT", default_value = None)]
    output: Option<String>,

    /// Path to a TOML configuration file
    #[clap(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// JSON pointer to the rich-text document in the payload
    #[clap(long, default_value = "/content", value_name = "POINTER")]
    content_pointer: String,

    /// JSON pointer to the legacy block array in the payload
    #[clap(long, default_value = "/legacyContent", value_name = "POINTER")]
    legacy_pointer: String,

    /// Write element keys as `data-key` attributes
    #[clap(long)]
    emit_keys: bool,

    /// Add anchor ids to headings
    #[clap(long)]
    heading_ids: bool,

    /// Textualize invalid markup instead of failing
    #[clap(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_module("richdoc", log::LevelFilter::Info)
        .filter_module("richdoc_dom", log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.html.emit_keys |= args.emit_keys;
    config.html.strict &= !args.lenient;
    config.render.heading_ids |= args.heading_ids;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {:?}", args.input))?;
    let payload: Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {:?}", args.input))?;
    let content = CourseContent::from_payload(
        &payload,
        &args.legacy_pointer,
        &args.content_pointer,
        config.render.max_depth,
    );

    let result: EcoString = match args.format {
        OutputFormat::Outline => {
            let entries = outline(&content);
            (serde_json::to_string_pretty(&entries)? + "\n").into()
        }
        OutputFormat::Html | OutputFormat::Tree => {
            let sink = SharedVecSink::default();
            let nodes = Renderer::with_options(config.render.clone())
                .with_diagnostic_sink(Box::new(sink.clone()))
                .render(&content);
            for diagnostic in sink.drain() {
                let key = diagnostic.key.as_deref().unwrap_or("-");
                match diagnostic.severity {
                    DiagnosticSeverity::Warning => log::warn!("{key}: {}", diagnostic.message),
                    DiagnosticSeverity::Info => log::info!("{key}: {}", diagnostic.message),
                }
            }

            match (args.format, nodes) {
                (OutputFormat::Tree, nodes) => {
                    let nodes = nodes.unwrap_or_default();
                    (serde_json::to_string_pretty(&nodes)? + "\n").into()
                }
                (_, Some(nodes)) => to_html(&nodes, config.writer_options())
                    .context("failed to write HTML")?,
                (_, None) => NO_CONTENT.into(),
            }
        }
    };

    write_output(&args, result.as_bytes())
}

fn write_output(args: &Args, bytes: &[u8]) -> Result<()> {
    if args.output.as_deref() == Some("-") {
        std::io::stdout()
            .write_all(bytes)
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let extension = match args.format {
        OutputFormat::Html => "html",
        OutputFormat::Tree | OutputFormat::Outline => "json",
    };
    let output_path = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&args.input).with_extension(extension));
    if output_path == args.input {
        bail!("refusing to overwrite the input file {output_path:?}");
    }
    if let Err(err) = std::fs::write(&output_path, bytes) {
        bail!("failed to write file {output_path:?}: {err}");
    }

    Ok(())
}
