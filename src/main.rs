// SPDX-License-Identifier: MIT
//
// subword: subword boundary navigation from the command line.
//
// The binary is a thin shell over the two library crates:
//
//   subword-text   → rope buffer, lines, positions, word ranges
//   subword-motion → boundary rule, left/right scans, line stops
//
// Every command loads one document (a file, or stdin for `-`) and prints a
// result to stdout. Positions on the command line and in the output are
// 1-indexed, like an editor status line; internally everything is 0-indexed.
//
//   subword src/lib.rs right --line 3 --col 5   →  3:10
//   subword src/lib.rs stops --line 3           →  let| |parse|Http|Header| |=| |1|;|
//
// Diagnostics go to stderr through tracing; `RUST_LOG` picks the filter and
// `--verbose` forces debug output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use subword_motion::{classify, line_stops, next_boundary_left, next_boundary_right};
use subword_text::{Buffer, Position, TextDocument};

/// Navigate identifiers by subword: camelCase, `snake_case`, digits and acronyms
#[derive(Parser, Debug)]
#[command(name = "subword")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log every navigation decision to stderr
    #[arg(short, long)]
    verbose: bool,

    /// File to read, or `-` for stdin
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the next subword boundary to the left of a position
    Left {
        /// Line number (1-indexed)
        #[arg(long)]
        line: usize,
        /// Column (1-indexed)
        #[arg(long)]
        col: usize,
    },
    /// Print the next subword boundary to the right of a position
    Right {
        /// Line number (1-indexed)
        #[arg(long)]
        line: usize,
        /// Column (1-indexed)
        #[arg(long)]
        col: usize,
    },
    /// Show every stop `right` makes, marked with `|`
    Stops {
        /// Only this line (1-indexed); all lines when omitted
        #[arg(long)]
        line: Option<usize>,
    },
    /// Print the character class of each character of TEXT
    Classify {
        /// Characters to classify
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    execute(&cli.command, || load(&cli.file), out)
}

fn load(path: &Path) -> Result<Buffer> {
    let buf = if path.as_os_str() == "-" {
        Buffer::from_reader(io::stdin().lock()).context("failed to read stdin")?
    } else {
        Buffer::from_file(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    tracing::debug!(path = ?buf.path(), lines = buf.line_count(), "loaded document");
    Ok(buf)
}

/// Run `command`. The document is only loaded by commands that read it, so
/// `classify` never blocks on stdin.
fn execute(
    command: &Commands,
    document: impl FnOnce() -> Result<Buffer>,
    out: &mut impl Write,
) -> Result<()> {
    match *command {
        Commands::Left { line, col } => {
            let pos = zero_based(line, col)?;
            let target = next_boundary_left(&document()?, pos)
                .with_context(|| format!("cannot move left from {pos}"))?;
            writeln!(out, "{target}")?;
        }
        Commands::Right { line, col } => {
            let pos = zero_based(line, col)?;
            let target = next_boundary_right(&document()?, pos)
                .with_context(|| format!("cannot move right from {pos}"))?;
            writeln!(out, "{target}")?;
        }
        Commands::Stops { line: Some(line) } => {
            let line = one_to_zero(line, "line")?;
            write_stops(&document()?, line, out)?;
        }
        Commands::Stops { line: None } => {
            let buf = document()?;
            for line in 0..buf.line_count() {
                write_stops(&buf, line, out)?;
            }
        }
        Commands::Classify { ref text } => write_classes(text, out)?,
    }
    Ok(())
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn write_stops(buf: &Buffer, line: usize, out: &mut impl Write) -> Result<()> {
    let stops = line_stops(buf, line)
        .with_context(|| format!("cannot list stops of line {}", line + 1))?;
    let text = buf
        .line_at(line)
        .with_context(|| format!("line {} has no content", line + 1))?;
    writeln!(out, "{}", render_stops(text.chars(), &stops))?;
    Ok(())
}

/// Insert a `|` before every column in `stops`. A stop equal to the line
/// length lands after the last character.
fn render_stops(chars: &[char], stops: &[usize]) -> String {
    let mut rendered = String::with_capacity(chars.len() + stops.len());
    let mut stops = stops.iter().peekable();
    for col in 0..=chars.len() {
        while stops.next_if(|&&stop| stop == col).is_some() {
            rendered.push('|');
        }
        if let Some(&ch) = chars.get(col) {
            rendered.push(ch);
        }
    }
    rendered
}

fn write_classes(text: &str, out: &mut impl Write) -> Result<()> {
    for ch in text.chars() {
        writeln!(out, "{ch:?}\t{:?}", classify(Some(ch)))?;
    }
    Ok(())
}

// ─── Coordinates ────────────────────────────────────────────────────────────

fn zero_based(line: usize, col: usize) -> Result<Position> {
    Ok(Position::new(one_to_zero(line, "line")?, one_to_zero(col, "column")?))
}

fn one_to_zero(n: usize, what: &str) -> Result<usize> {
    if n == 0 {
        bail!("{what} numbers start at 1");
    }
    Ok(n - 1)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
