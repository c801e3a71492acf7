//! CLI tool for turning Markdown outlines into slide plans.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slidedeck_core::{convert, Deck, OutlineFormatter, PlannerConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Plan presentation slides from a heading-structured Markdown file.
#[derive(Parser, Debug)]
#[command(name = "md2slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Planner configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Title of the opening slide
    #[arg(long)]
    title: Option<String>,

    /// Subtitle of the opening slide
    #[arg(long)]
    subtitle: Option<String>,

    /// Do not merge adjacent thin sections
    #[arg(long)]
    no_merge: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON slide specifications
    Json,
    /// Plain-text outline
    Outline,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "slides.json",
            Self::Outline => "slides.txt",
        }
    }

    /// `<stem>.slides.<ext>` beside the input, or inside `output_dir`.
    fn output_path(self, input_path: &Path, output_dir: Option<&Path>) -> PathBuf {
        let file_name = input_path
            .file_name()
            .map(Path::new)
            .unwrap_or_else(|| Path::new("output"));

        let target = match output_dir {
            Some(dir) => dir.join(file_name),
            None => input_path.with_file_name(file_name),
        };
        target.with_extension(self.extension())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(&args)?;

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let failed = args
        .input
        .iter()
        .filter(|input_path| {
            convert_one(input_path, &args, &config)
                .map_err(|e| eprintln!("Error processing {}: {:#}", input_path.display(), e))
                .is_err()
        })
        .count();

    if failed > 0 {
        log::warn!("{} of {} file(s) failed", failed, args.input.len());
    }

    Ok(())
}

/// Convert one input and print it or write it next to its destination.
fn convert_one(input_path: &Path, args: &Args, config: &PlannerConfig) -> Result<()> {
    log::info!("Processing: {}", input_path.display());
    let output = process_file(input_path, args, config)?;

    if args.print {
        print!("{}", output);
        return Ok(());
    }

    let output_path = args.format.output_path(input_path, args.output.as_deref());
    fs::write(&output_path, output)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    log::info!("Written to: {}", output_path.display());

    Ok(())
}

/// Build the planner configuration from the config file and flags.
fn load_config(args: &Args) -> Result<PlannerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            PlannerConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };

    if let Some(title) = &args.title {
        config = config.with_deck_title(title);
    }
    if let Some(subtitle) = &args.subtitle {
        config = config.with_deck_subtitle(subtitle);
    }
    if args.no_merge {
        config = config.with_merge_thin_sections(false);
    }

    Ok(config)
}

/// Read and plan a single Markdown file, rendered in the requested format.
fn process_file(input_path: &Path, args: &Args, config: &PlannerConfig) -> Result<String> {
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let deck = convert(&text, config);
    log::info!(
        "{}: {} sections, {} slides",
        input_path.display(),
        deck.section_count,
        deck.slide_count()
    );

    render(&deck, args.format)
}

/// Serialize a planned deck in the requested format.
fn render(deck: &Deck, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(deck).context("Failed to serialize slides")?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Outline => Ok(OutlineFormatter::new().format_with_newline(&deck.slides)),
    }
}
