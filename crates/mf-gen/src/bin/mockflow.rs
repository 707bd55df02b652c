//! `mockflow` — generate, edit, and render mockups from the terminal.
//!
//! ```text
//! mockflow generate "a pizza delivery app" -o pizza.json
//! mockflow edit pizza.json "make the header blue" --element s1/title
//! mockflow render pizza.json -o pizza.html
//! ```
//!
//! Set `NIM_API_KEY` (and optionally `NIM_MODEL` / `NIM_ENDPOINT`) before
//! generating; `RUST_LOG=debug` shows request and parse details.

use clap::{Parser, Subcommand};
use mf_core::{
    CanvasConfig, MockupDocument, SelectionItem, Size, ViewTransform, parse_mockup_response,
};
use mf_gen::{GenerationConfig, GenerationError, GenerationService, NimClient};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Mockflow: AI-generated mobile app mockups", long_about = None)]
struct Cli {
    /// Override the model id (defaults to NIM_MODEL or the built-in default).
    #[arg(long, global = true)]
    model: Option<String>,

    /// API key (defaults to NIM_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new mockup from a description.
    Generate {
        prompt: String,
        /// Write the document here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Revise an existing mockup document.
    Edit {
        document: PathBuf,
        request: String,
        /// Scope the edit to a screen (repeatable).
        #[arg(long = "screen", value_name = "ID")]
        screens: Vec<String>,
        /// Scope the edit to an element, as SCREEN/ID (repeatable).
        #[arg(long = "element", value_name = "SCREEN/ID", value_parser = parse_element)]
        elements: Vec<SelectionItem>,
        /// Write the document here instead of overwriting the input.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a document to a standalone HTML page.
    Render {
        document: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },
}

fn parse_element(arg: &str) -> Result<SelectionItem, String> {
    match arg.split_once('/') {
        Some((screen, id)) if !screen.is_empty() && !id.is_empty() => {
            Ok(SelectionItem::element(screen, id))
        }
        _ => Err(format!("expected SCREEN/ID, got {arg:?}")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), GenerationError> {
    let mut config = GenerationConfig::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }

    match cli.command {
        Command::Generate { prompt, output } => {
            let client = NimClient::new(config)?;
            let text = client.generate_mockup(&prompt, &mut progress).await?;
            eprintln!();
            let doc = parse_mockup_response(&text)?;
            write_document(&doc, output.as_deref())
        }
        Command::Edit {
            document,
            request,
            screens,
            elements,
            output,
        } => {
            let doc = read_document(&document)?;
            let selection: Vec<SelectionItem> = screens
                .iter()
                .map(|id| SelectionItem::screen(id.as_str()))
                .chain(elements)
                .collect();
            let client = NimClient::new(config)?;
            let text = client
                .edit_mockup(&doc, &selection, &request, &mut progress)
                .await?;
            eprintln!();
            let edited = parse_mockup_response(&text)?;
            write_document(&edited, Some(output.as_deref().unwrap_or(&document)))
        }
        Command::Render {
            document,
            output,
            width,
            height,
        } => {
            let doc = read_document(&document)?;
            let canvas = CanvasConfig::default();
            let mut view = ViewTransform::from_config(&canvas);
            view.fit_to_content(&doc.screens, Size::new(width, height), &canvas);
            let page = mf_render::render_page(&doc, &view);
            write_text(&page, output.as_deref())
        }
    }
}

/// Streaming progress on stderr so stdout stays clean for the document.
fn progress(_delta: &str, full: &str) {
    eprint!("\rreceived {} chars", full.chars().count());
}

fn read_document(path: &Path) -> Result<MockupDocument, GenerationError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_mockup_response(&text)?)
}

fn write_document(doc: &MockupDocument, path: Option<&Path>) -> Result<(), GenerationError> {
    log::info!(
        "{}: {} screens, {} flows",
        doc.app_name,
        doc.screens.len(),
        doc.flows.len()
    );
    write_text(&doc.to_json_pretty(), path)
}

fn write_text(text: &str, path: Option<&Path>) -> Result<(), GenerationError> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
