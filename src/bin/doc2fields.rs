//! CLI binary for doc2fields.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`, drives one extraction attempt, and prints the fields.

use anyhow::{Context, Result};
use clap::Parser;
use doc2fields::pipeline::validate;
use doc2fields::{extract_file, ExtractionConfig, ExtractionResult, SelectedFile};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract fields from an image (labelled table on stdout)
  doc2fields passport.png

  # JSON output
  doc2fields --json passport.png > fields.json

  # Write the JSON result to a file
  doc2fields passport.png -o fields.json

  # Point at a remote deployment of the extraction service
  doc2fields --endpoint https://extract.example.com/extract id-card.jpg

  # Validate without uploading (no network)
  doc2fields --check-only scan.gif

  # Override the declared media type for an unusual extension
  doc2fields --media-type image/jpeg photo.jpe

ACCEPTED MEDIA TYPES:
  image/jpeg   .jpg .jpeg
  image/png    .png
  image/gif    .gif

  The type is declared from the file extension and checked before upload;
  file content is never inspected client-side. Anything else is rejected
  without a request being made.

SERVICE CONTRACT:
  POST multipart/form-data with one part named "document" to the endpoint.
  Success: 2xx with {"data":{"name":…,"documentNumber":…,"expirationDate":…}}
  Anything else (network error, non-2xx, unusable body) is reported with a
  single generic message; run with -v to see the underlying cause.

ENVIRONMENT VARIABLES:
  DOC2FIELDS_ENDPOINT   Extraction service URL (default: http://localhost:5000/extract)
  DOC2FIELDS_TIMEOUT    Whole-request timeout in seconds (unset: platform default)
  RUST_LOG              Tracing filter; overrides the verbosity flags

SETUP:
  1. Start or locate an extraction service:   http://localhost:5000/extract
  2. Extract:                                  doc2fields passport.png
"#;

/// Extract identity fields from a document image.
#[derive(Parser, Debug)]
#[command(
    name = "doc2fields",
    version,
    about = "Extract identity fields from a document image via a remote extraction service",
    long_about = "Upload a document image (JPEG, PNG, or GIF) to an extraction service and print \
the structured fields it returns: name, document number, expiration date. The declared media \
type is validated before anything is sent; a single multipart request carries the file.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Document image to upload (.jpg, .jpeg, .png, .gif).
    input: PathBuf,

    /// Write the JSON result to this file instead of stdout.
    #[arg(short, long, env = "DOC2FIELDS_OUTPUT")]
    output: Option<PathBuf>,

    /// Extraction service URL.
    #[arg(
        long,
        env = "DOC2FIELDS_ENDPOINT",
        default_value = doc2fields::DEFAULT_ENDPOINT
    )]
    endpoint: String,

    /// Override the declared media type (skips extension mapping).
    #[arg(long, env = "DOC2FIELDS_MEDIA_TYPE")]
    media_type: Option<String>,

    /// Whole-request timeout in seconds.
    #[arg(long, env = "DOC2FIELDS_TIMEOUT")]
    timeout: Option<u64>,

    /// Output the fields as pretty JSON instead of a table.
    #[arg(long, env = "DOC2FIELDS_JSON")]
    json: bool,

    /// Validate the selection and exit without uploading.
    #[arg(long)]
    check_only: bool,

    /// Disable the progress spinner.
    #[arg(long, env = "DOC2FIELDS_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOC2FIELDS_VERBOSE")]
    verbose: bool,

    /// Suppress everything on stderr except errors.
    #[arg(short, long, env = "DOC2FIELDS_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs while the spinner is active; the
    // spinner provides the feedback that matters to the user.
    let show_spinner = !cli.quiet && !cli.no_progress && !cli.check_only;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_spinner {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Select ───────────────────────────────────────────────────────────
    let mut file = SelectedFile::from_path(&cli.input)
        .with_context(|| format!("Cannot select '{}'", cli.input.display()))?;
    if let Some(ref mt) = cli.media_type {
        file = file.with_media_type(mt);
    }

    // ── Check-only mode ──────────────────────────────────────────────────
    if cli.check_only {
        match validate::validate(Some(&file)) {
            Ok(f) => {
                println!(
                    "{} {}  {}  {}",
                    green("✔"),
                    bold(f.name()),
                    f.media_type(),
                    dim(&format!("{} bytes", f.len())),
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("{} {e}", red("✘"));
                std::process::exit(1);
            }
        }
    }

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ExtractionConfig::builder().endpoint(&cli.endpoint);
    if let Some(secs) = cli.timeout {
        builder = builder.request_timeout_secs(secs);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Submit ───────────────────────────────────────────────────────────
    let spinner = if show_spinner {
        Some(submit_spinner(&file))
    } else {
        None
    };

    let started = Instant::now();
    let outcome = extract_file(file, &config).await;

    if let Some(sp) = spinner {
        sp.finish_and_clear();
    }

    // Workflow rejections and transport failures carry the exact sentence a
    // user should see; print it verbatim rather than an anyhow chain.
    let fields = match outcome {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("{} {e}", red("✘"));
            std::process::exit(1);
        }
    };

    if !cli.quiet {
        eprintln!(
            "{} {} in {}ms",
            green("✔"),
            bold("fields extracted"),
            started.elapsed().as_millis()
        );
    }

    // ── Print result ─────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let json = serde_json::to_string_pretty(&fields).context("Failed to serialise result")?;
        tokio::fs::write(output_path, json.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        if !cli.quiet {
            eprintln!("   →  {}", bold(&output_path.display().to_string()));
        }
    } else if cli.json {
        let json = serde_json::to_string_pretty(&fields).context("Failed to serialise result")?;
        println!("{json}");
    } else {
        print_fields(&fields);
    }

    Ok(())
}

/// Spinner shown while the request is in flight.
fn submit_spinner(file: &SelectedFile) -> ProgressBar {
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
    bar.set_style(style);
    bar.set_prefix("Extracting");
    bar.set_message(format!("{} ({} bytes)", file.name(), file.len()));
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Labelled table of the extracted fields, mirroring the JSON field order.
fn print_fields(fields: &ExtractionResult) {
    println!("{}", bold("Extracted Information"));
    println!("  {} {}", dim("Name:            "), fields.name);
    println!("  {} {}", dim("Document Number: "), fields.document_number);
    println!("  {} {}", dim("Expiration Date: "), fields.expiration_date);
}
