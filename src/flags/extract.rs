use crate::flags::{FlagItem, FlagSources};
use anyhow::{Result, anyhow};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Debug)]
pub struct UnreadableFlagFile {
    pub path: PathBuf,
    pub source: io::Error,
}

impl std::fmt::Display for UnreadableFlagFile {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "Could not read flag file {:?}: {}", self.path, self.source)
    }
}

impl std::error::Error for UnreadableFlagFile {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Splits a line on single spaces. Runs of spaces produce empty tokens.
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ')
}

/// Reads `path` as lines with the line terminator removed. `\r\n`, `\r`
/// and `\n` all end a line.
///
/// Returns `None` when `path` is not an existing regular file.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|source| {
        anyhow!(UnreadableFlagFile {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let lines = normalize_newlines(&contents)
        .split_inclusive('\n')
        .map(|l| l.strip_suffix('\n').unwrap_or(l).to_string())
        .collect();
    Ok(Some(lines))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Tokens of every existing source file, each source line closed by
/// [`FlagItem::EndOfLine`].
pub fn extract_items(sources: &FlagSources) -> Result<Vec<FlagItem>> {
    let mut items = Vec::new();
    for path in &sources.paths {
        let Some(lines) = read_lines(path)? else {
            debug!("Skipping missing flag file {:?}", path);
            continue;
        };
        debug!("Read {} lines from {:?}", lines.len(), path);
        for line in &lines {
            items.extend(split_line(line).map(|t| FlagItem::Token(t.to_string())));
            items.push(FlagItem::EndOfLine);
        }
    }
    Ok(items)
}

/// All tokens in source order, without line structure.
pub fn extract_tokens(sources: &FlagSources) -> Result<Vec<String>> {
    Ok(extract_items(sources)?
        .into_iter()
        .filter_map(|item| match item {
            FlagItem::Token(t) => Some(t),
            FlagItem::EndOfLine => None,
        })
        .collect())
}
