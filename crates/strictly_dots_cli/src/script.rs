//! Move script parsing.
//!
//! One move per line as `r1,c1 r2,c2`. Blank lines and `#` comments are
//! skipped.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use strictly_dots::Dot;
use tracing::{debug, instrument};

/// A parsed move with the script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    /// One-based line number in the script.
    pub line: usize,
    /// First endpoint.
    pub from: Dot,
    /// Second endpoint.
    pub to: Dot,
}

/// Reads and parses a move script from disk.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Vec<ScriptedMove>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read move script {}", path.as_ref().display()))?;
    let moves = parse(&content)?;
    debug!(count = moves.len(), "Move script loaded");
    Ok(moves)
}

/// Parses a move script.
pub fn parse(content: &str) -> Result<Vec<ScriptedMove>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = raw.split('#').next().unwrap_or_default().trim();
            (!text.is_empty()).then_some((index + 1, text))
        })
        .map(|(line, text)| {
            let (from, to) =
                parse_move(text).with_context(|| format!("Line {}: {:?}", line, text))?;
            Ok(ScriptedMove { line, from, to })
        })
        .collect()
}

fn parse_move(text: &str) -> Result<(Dot, Dot)> {
    let mut parts = text.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(anyhow!("Expected two dots separated by whitespace"));
    };
    Ok((parse_dot(from)?, parse_dot(to)?))
}

fn parse_dot(text: &str) -> Result<Dot> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected row,col but got {:?}", text))?;
    let row = row.trim().parse().with_context(|| format!("Invalid row in {:?}", text))?;
    let col = col.trim().parse().with_context(|| format!("Invalid column in {:?}", text))?;
    Ok(Dot::new(row, col))
}
