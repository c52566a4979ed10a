//! # tablestr
//!
//! A CLI for rendering box-drawing text tables.
//!
//! ## Overview
//!
//! tablestr is built on top of tablestrlib and renders a table to stdout
//! from either a JSON model file or inline flags. The JSON shape matches
//! `TableModel`: `{"caption": ..., "head": [...], "body": [[...]]}`.
//!
//! ## Usage
//!
//! ```bash
//! # Inline rows
//! tablestr --head Name,Count --row alpha,1 --row beta,2
//!
//! # A model file, caption overridden on the command line
//! tablestr report.json --caption "Totals"
//!
//! # Model on stdin, ASCII borders, no wrapping
//! cat report.json | tablestr - --ascii --no-wrap
//!
//! # The rendered lines as a JSON array
//! tablestr report.json --output json
//! ```

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use tablestrlib::{build_lines, Border, TableModel, TableStyle};

/// JSON payload for `--output json`
#[derive(Debug, Serialize)]
struct RenderedTable {
    /// Finished table lines, in order
    lines: Vec<String>,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tablestr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render box-drawing text tables from JSON models or inline rows")
        .arg(Arg::new("model").help("JSON table model file ('-' reads stdin)"))
        .arg(
            Arg::new("caption")
                .long("caption")
                .help("Caption banner above the table"),
        )
        .arg(
            Arg::new("head")
                .long("head")
                .help("Comma-separated header cells"),
        )
        .arg(
            Arg::new("row")
                .short('r')
                .long("row")
                .action(ArgAction::Append)
                .help("Comma-separated body row (can be specified multiple times)"),
        )
        .arg(
            Arg::new("padding")
                .short('p')
                .long("padding")
                .value_parser(clap::value_parser!(usize))
                .help("Placeholder glyphs on each side of a cell [default: 1]"),
        )
        .arg(
            Arg::new("max-width")
                .short('w')
                .long("max-width")
                .value_parser(clap::value_parser!(usize))
                .help("Cap each column at this width"),
        )
        .arg(
            Arg::new("no-wrap")
                .long("no-wrap")
                .action(ArgAction::SetTrue)
                .help("Truncate long cells instead of wrapping"),
        )
        .arg(
            Arg::new("no-divide")
                .long("no-divide")
                .action(ArgAction::SetTrue)
                .help("Skip the separator between body rows"),
        )
        .arg(
            Arg::new("align-caption")
                .long("align-caption")
                .value_parser(["left", "center", "right"])
                .help("Caption alignment [default: center]"),
        )
        .arg(
            Arg::new("align-head")
                .long("align-head")
                .value_parser(["left", "center", "right"])
                .help("Header alignment [default: left]"),
        )
        .arg(
            Arg::new("align-body")
                .long("align-body")
                .value_parser(["left", "center", "right"])
                .help("Body alignment [default: right]"),
        )
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Draw borders with +-| instead of Unicode box glyphs"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Split a comma-delimited flag value into cell texts
fn split_cells(spec: &str) -> Vec<String> {
    spec.split(',').map(str::to_string).collect()
}

/// Load the model file (if any) and apply inline overrides
fn load_model(matches: &ArgMatches) -> anyhow::Result<TableModel> {
    let mut model = match matches.get_one::<String>("model").map(String::as_str) {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read model from stdin")?;
            serde_json::from_str(&buf).context("failed to parse table model from stdin")?
        }
        Some(path) => {
            let buf = fs::read_to_string(path)
                .with_context(|| format!("failed to read model file '{path}'"))?;
            serde_json::from_str(&buf)
                .with_context(|| format!("failed to parse table model '{path}'"))?
        }
        None => TableModel::new(),
    };

    if let Some(caption) = matches.get_one::<String>("caption") {
        model.set_caption(caption.clone());
    }
    if let Some(head) = matches.get_one::<String>("head") {
        model.set_head(split_cells(head));
    }
    if let Some(rows) = matches.get_many::<String>("row") {
        for row in rows {
            model.add_row(split_cells(row));
        }
    }

    Ok(model)
}

/// Map style flags onto a TableStyle
fn build_style(matches: &ArgMatches) -> anyhow::Result<TableStyle> {
    let mut style = TableStyle::default();

    if matches.get_flag("ascii") {
        style.border = Border::ascii();
    }
    if let Some(padding) = matches.get_one::<usize>("padding") {
        style.cell_padding = *padding;
    }
    if let Some(max_width) = matches.get_one::<usize>("max-width") {
        style.cell_max_width = Some(*max_width);
    }
    style.cell_auto_wrap = !matches.get_flag("no-wrap");
    style.body_divide = !matches.get_flag("no-divide");

    if let Some(align) = matches.get_one::<String>("align-caption") {
        style.align.caption = align.parse()?;
    }
    if let Some(align) = matches.get_one::<String>("align-head") {
        style.align.head = align.parse()?;
    }
    if let Some(align) = matches.get_one::<String>("align-body") {
        style.align.body = align.parse()?;
    }

    Ok(style)
}

/// Render per the matches; returns what should land on stdout
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let model = load_model(matches)?;
    let style = build_style(matches)?;
    let lines = build_lines(&model, &style);

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => {
            let rendered = RenderedTable { lines };
            Ok(serde_json::to_string_pretty(&rendered)?)
        }
        _ => Ok(lines.join("\n")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", console::style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
