/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rhetor CLI
//!
//! Extracts citation cards from a document and shows them in a browser.
//!
//! Usage: rhetor <document.docx> [--format html|plain|json] [-o page.html]

use clap::{ArgAction, Parser, ValueEnum};
use rhetor_core::ExtractorConfig;
use rhetor_processor::{
    io::{load_config, load_document},
    publish::{publish, PublishSpec},
    render::plain::PlainText,
    Extractor, Fragment,
};
use schemars::schema_for;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the source document (.docx, or a serialized document in JSON/YAML)
    #[arg(required_unless_present = "config_schema")]
    document: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write the HTML page here instead of a temporary file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open the HTML page in a viewer
    #[arg(long)]
    no_open: bool,

    /// Extraction options file (YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the JSON schema for the options file and exit
    #[arg(long)]
    config_schema: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Html,
    Plain,
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Plain => write!(f, "plain"),
            Format::Json => write!(f, "json"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rhetor={level},rhetor_processor={level},rhetor_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Keep stdout for fragments
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.config_schema {
        let schema = schema_for!(ExtractorConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }
    let Some(path) = cli.document else {
        return Err("missing document path".into());
    };

    let config = match &cli.config {
        Some(config_path) => load_config(config_path)?,
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::new(config);

    let document = load_document(&path)?;
    debug!(format = %cli.format, "extracting");

    match cli.format {
        Format::Html => {
            let fragments = extractor.extract_document(&document);
            let open = !cli.no_open && cli.output.is_none();
            let mut spec = PublishSpec::new(&fragments).open_in_viewer(open);
            if let Some(title) = document.title.as_deref() {
                spec = spec.with_title(title);
            }
            if let Some(output) = &cli.output {
                spec = spec.with_output_path(output);
            }
            let result = publish(spec)?;
            if !result.opened {
                println!("{}", result.path.display());
            }
        }
        Format::Plain => {
            let fragments = extractor.extract_document_with_format::<PlainText>(&document);
            for fragment in &fragments {
                println!("{}", fragment);
            }
        }
        Format::Json => {
            let fragments = extractor.extract_document(&document);
            println!("{}", serde_json::to_string_pretty(&fragments_json(&fragments))?);
        }
    }
    Ok(())
}

fn fragments_json(fragments: &[Fragment]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = fragments
        .iter()
        .map(|f| {
            json!({
                "tag": f.tag,
                "label": f.label,
                "body": f.body,
                "markup": f.markup(),
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn document_argument_is_required() {
        assert!(Cli::try_parse_from(["rhetor"]).is_err());
        assert!(Cli::try_parse_from(["rhetor", "a.docx", "b.docx"]).is_err());
        let cli = Cli::try_parse_from(["rhetor", "a.docx"]).unwrap();
        assert_eq!(cli.document, Some(PathBuf::from("a.docx")));
        assert_eq!(cli.format, Format::Html);
    }

    #[test]
    fn schema_flag_needs_no_document() {
        let cli = Cli::try_parse_from(["rhetor", "--config-schema"]).unwrap();
        assert!(cli.config_schema);
        assert!(cli.document.is_none());
    }

    #[test]
    fn options_parse() {
        let cli = Cli::try_parse_from([
            "rhetor", "notes.docx", "-f", "json", "-o", "out.html", "--no-open", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.no_open);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn json_output_shape() {
        let fragments = vec![Fragment::new(
            "Lead".to_string(),
            "<b>A</b> ".to_string(),
            "x ".to_string(),
        )];
        let value = fragments_json(&fragments);
        assert_eq!(value[0]["markup"], "Lead <b>A</b> : x");
        assert_eq!(value[0]["tag"], "Lead");
    }
}
