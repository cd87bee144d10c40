// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-annotate CLI
//!
//! Command-line interface for classifying variants against a JSON
//! annotation database.

use clap::{Parser, Subcommand};
use ferro_annotate::cli::{output_annotation, output_error, output_ids, OutputFormat};
use ferro_annotate::{AnnotationDb, AnnotatorConfig, TranslationMode, VariantAnnotator};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ferro-annotate")]
#[command(author, version, about = "Variant consequence annotator")]
#[command(long_about = "Classify genomic variants against transcript models.

Examples:
  ferro-annotate describe --annotations genes.json 17 7674220 C T
  ferro-annotate describe --annotations genes.json -f json 1 1000 AC A
  ferro-annotate genes --annotations genes.json 17 7674220 --bases 10")]
struct Cli {
    /// Configuration file (defaults to .ferro-annotate.toml, then ~/.config/ferro/annotate.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, ferro_annotate=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe the effect of a variant on every overlapping transcript
    Describe {
        /// Annotation database (JSON)
        #[arg(short, long)]
        annotations: PathBuf,

        /// Override the configured translation mode
        #[arg(long, value_parser = ["standard", "placeholder"])]
        translation: Option<String>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Contig name
        contig: String,

        /// 1-based position of the first reference base
        position: u64,

        /// Reference allele
        reference: String,

        /// Alternate allele
        alternate: String,
    },

    /// List genes overlapping a locus
    Genes {
        /// Annotation database (JSON)
        #[arg(short, long)]
        annotations: PathBuf,

        /// Number of modified bases after the position
        #[arg(long, default_value_t = 1)]
        bases: u64,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        contig: String,

        position: u64,
    },

    /// List transcripts overlapping a locus
    Transcripts {
        /// Annotation database (JSON)
        #[arg(short, long)]
        annotations: PathBuf,

        /// Number of modified bases after the position
        #[arg(long, default_value_t = 1)]
        bases: u64,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        contig: String,

        position: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Describe {
            annotations,
            translation,
            format,
            contig,
            position,
            reference,
            alternate,
        } => {
            let mut config = config;
            if let Some(mode) = translation.as_deref() {
                config.translation = match mode {
                    "placeholder" => TranslationMode::Placeholder,
                    _ => TranslationMode::Standard,
                };
            }
            let format: OutputFormat = format.parse()?;
            let annotator = VariantAnnotator::with_config(load_db(&annotations)?, &config);

            match annotator.describe_variant(&contig, position, &reference, &alternate) {
                Ok(annotation) => {
                    output_annotation(&mut out, &annotation, format)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    let input = format!("{}:{} {}>{}", contig, position, reference, alternate);
                    output_error(&mut io::stderr().lock(), &input, &e, format)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Genes {
            annotations,
            bases,
            format,
            contig,
            position,
        } => {
            let annotator = VariantAnnotator::with_config(load_db(&annotations)?, &config);
            let ids = annotator.variant_gene_ids_spanning(&contig, position, bases)?;
            output_ids(&mut out, &ids, format.parse()?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Transcripts {
            annotations,
            bases,
            format,
            contig,
            position,
        } => {
            let annotator = VariantAnnotator::with_config(load_db(&annotations)?, &config);
            let ids = annotator.variant_transcript_ids_spanning(&contig, position, bases)?;
            output_ids(&mut out, &ids, format.parse()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AnnotatorConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => AnnotatorConfig::load_from_path(path)?,
        None => AnnotatorConfig::load().unwrap_or_default(),
    };
    debug!("Using configuration: {:?}", config);
    Ok(config)
}

fn load_db(path: &Path) -> Result<AnnotationDb, Box<dyn std::error::Error>> {
    let db = AnnotationDb::from_json(path)?;
    info!(
        "Loaded {} genes and {} transcripts from {}",
        db.gene_count(),
        db.transcript_count(),
        path.display()
    );
    Ok(db)
}

/// Initialize tracing/logging
fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}
