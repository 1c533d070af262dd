use anyhow::{Context, Result};

use std::fs;
use std::io::Read;

/// Line, word, character, and byte totals for one input.
///
/// Each field follows its own rule: `bytes` and `lines` come from the raw
/// byte sequence, `words` and `chars` from a lossy UTF-8 decode of it. No
/// relationship between `chars` and `bytes` is assumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub bytes: usize,
}

impl Counts {
    /// Counts everything in `data`. Total for any byte sequence: invalid
    /// UTF-8 is replaced with U+FFFD, never rejected.
    pub fn from_bytes(data: &[u8]) -> Self {
        let bytes = data.len();
        // An unterminated trailing line is not counted, matching wc -l.
        let lines = data.iter().filter(|&&b| b == b'\n').count();

        let text = String::from_utf8_lossy(data);
        let words = text.split_whitespace().count();
        let chars = text.chars().count();

        Counts {
            lines,
            words,
            chars,
            bytes,
        }
    }
}

/// The bytes to count plus the label printed after the totals.
/// The label is empty when the input came from stdin.
pub struct RawInput {
    pub data: Vec<u8>,
    pub label: String,
}

pub fn acquire(filename: Option<&str>) -> Result<RawInput> {
    match filename {
        Some(path) if !path.is_empty() => {
            let data = fs::read(path).with_context(|| path.to_string())?;
            Ok(RawInput {
                data,
                label: path.to_string(),
            })
        }
        _ => {
            let mut data = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("stdin")?;
            Ok(RawInput {
                data,
                label: String::new(),
            })
        }
    }
}
