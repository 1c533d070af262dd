use anyhow::Result;
use clap::Parser;

use ccwc::{Counts, acquire};

/// Count lines, words, characters, and bytes like wc
#[derive(Parser)]
struct Args {
    /// Print the newline counts
    #[arg(short = 'l')]
    lines: bool,
    /// Print the word counts
    #[arg(short = 'w')]
    words: bool,
    /// Print the byte counts
    #[arg(short = 'c')]
    bytes: bool,
    /// Print the character counts
    #[arg(short = 'm')]
    chars: bool,
    /// File to read (stdin if omitted)
    filename: Option<String>,
}

/// Which counts to print. Resolved once from the flags; without any flag
/// the set is lines, words, and bytes. -m is never implied.
struct Selection {
    lines: bool,
    words: bool,
    bytes: bool,
    chars: bool,
}

impl Selection {
    fn resolve(args: &Args) -> Self {
        if !(args.lines || args.words || args.bytes || args.chars) {
            return Selection {
                lines: true,
                words: true,
                bytes: true,
                chars: false,
            };
        }
        Selection {
            lines: args.lines,
            words: args.words,
            bytes: args.bytes,
            chars: args.chars,
        }
    }
}

// Selected counts in fixed l, w, c, m order regardless of flag order,
// right-justified to 7 columns and space-joined, then the label if any.
fn render(counts: Counts, selection: &Selection, label: &str) -> String {
    let mut fields = Vec::new();
    if selection.lines {
        fields.push(counts.lines);
    }
    if selection.words {
        fields.push(counts.words);
    }
    if selection.bytes {
        fields.push(counts.bytes);
    }
    if selection.chars {
        fields.push(counts.chars);
    }

    let mut line = fields
        .iter()
        .map(|n| format!("{n:7}"))
        .collect::<Vec<_>>()
        .join(" ");
    if !label.is_empty() {
        line.push(' ');
        line.push_str(label);
    }
    line
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = acquire(args.filename.as_deref())?;
    let counts = Counts::from_bytes(&input.data);
    let selection = Selection::resolve(&args);
    println!("{}", render(counts, &selection, &input.label));
    Ok(())
}
