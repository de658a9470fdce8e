// Command-line interface for matchdiff.
//
// Follows diff(1) exit conventions: 0 when the inputs are identical,
// 1 when differences were rendered, 2 on usage or I/O trouble.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use crate::engine::{self, DiffOptions};
use crate::markup::Markup;
use crate::script::{self, Op, Segment};
use crate::value::{Value, json};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Render why two inputs differ.
#[derive(Parser, Debug)]
#[command(
    name = "matchdiff",
    version,
    about = "Shortest-edit-script diffs for texts and structured values",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Disable terminal styling.
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    /// Skip the semantic cleanup pass on character diffs.
    #[arg(long = "no-cleanup", global = true)]
    no_cleanup: bool,

    /// Quiet mode: suppress the rendered diff, keep the exit status.
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Output diff stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Line-by-line diff of two text files.
    Text { expected: PathBuf, received: PathBuf },
    /// Structured value diff of two JSON files.
    Values { expected: PathBuf, received: PathBuf },
    /// Received-oriented argument diff of two JSON array files.
    Args { expected: PathBuf, received: PathBuf },
    /// Raw character-level edit script of two files.
    Chars { expected: PathBuf, received: PathBuf },
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

struct CliOptions {
    diff: DiffOptions,
    quiet: bool,
    json_output: bool,
}

fn resolve_options(cli: &Cli) -> CliOptions {
    let markup = if cli.no_color {
        Markup::plain()
    } else {
        Markup::ansi()
    };
    CliOptions {
        diff: DiffOptions {
            cleanup: !cli.no_cleanup,
            markup,
        },
        quiet: cli.quiet,
        json_output: cli.json_output,
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_text(expected: &Path, received: &Path, opts: &CliOptions) -> i32 {
    let (Some(a), Some(b)) = (read_input(expected), read_input(received)) else {
        return 2;
    };
    let rendered = engine::diff_text(&a, &b, &opts.diff);
    finish_render(&rendered, a == b, opts)
}

fn cmd_values(expected: &Path, received: &Path, opts: &CliOptions) -> i32 {
    let (Some(a), Some(b)) = (read_value(expected), read_value(received)) else {
        return 2;
    };
    let rendered = engine::diff_values(&a, &b, &opts.diff);
    finish_render(&rendered, a == b, opts)
}

fn cmd_args(expected: &Path, received: &Path, opts: &CliOptions) -> i32 {
    let (Some(a), Some(b)) = (read_value(expected), read_value(received)) else {
        return 2;
    };
    let (Value::Seq(a_items), Value::Seq(b_items)) = (&a, &b) else {
        eprintln!("matchdiff: args expects a JSON array on each side");
        return 2;
    };
    let tokens = engine::diff_arguments(a_items, b_items, &opts.diff);
    if !opts.quiet {
        for token in &tokens {
            println!("{token}");
        }
    }
    if opts.json_output {
        let json = serde_json::json!({
            "expected_arguments": a_items.len(),
            "received_arguments": b_items.len(),
            "rendered_tokens": tokens.len(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }
    i32::from(a != b)
}

fn cmd_chars(expected: &Path, received: &Path, opts: &CliOptions) -> i32 {
    let (Some(a), Some(b)) = (read_input(expected), read_input(received)) else {
        return 2;
    };
    let mut segments = script::diff_chars(&a, &b);
    if opts.diff.cleanup {
        segments = script::cleanup_semantic(segments);
    }
    if !opts.quiet {
        for segment in &segments {
            let sign = match segment.op {
                Op::Delete => '-',
                Op::Equal => ' ',
                Op::Insert => '+',
            };
            println!("{sign}{:?}", segment.text);
        }
    }
    if opts.json_output {
        print_segment_stats(&segments);
    }
    i32::from(a != b)
}

fn finish_render(rendered: &str, identical: bool, opts: &CliOptions) -> i32 {
    if !opts.quiet && !rendered.is_empty() {
        println!("{rendered}");
    }
    if opts.json_output {
        let json = serde_json::json!({
            "rendered_lines": rendered.lines().count(),
            "identical": identical,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }
    i32::from(!identical)
}

fn print_segment_stats(segments: &[Segment]) {
    let count = |op: Op| segments.iter().filter(|s| s.op == op).count();
    let json = serde_json::json!({
        "segments": segments.len(),
        "deleted": count(Op::Delete),
        "equal": count(Op::Equal),
        "inserted": count(Op::Insert),
    });
    eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn read_input(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("matchdiff: {}: {e}", path.display());
            None
        }
    }
}

fn read_value(path: &Path) -> Option<Value> {
    let content = read_input(path)?;
    match json::from_json_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("matchdiff: {}: {e}", path.display());
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = resolve_options(&cli);

    let exit_code = match &cli.command {
        Cmd::Text { expected, received } => cmd_text(expected, received, &opts),
        Cmd::Values { expected, received } => cmd_values(expected, received, &opts),
        Cmd::Args { expected, received } => cmd_args(expected, received, &opts),
        Cmd::Chars { expected, received } => cmd_chars(expected, received, &opts),
    };

    process::exit(exit_code);
}
