use crate::constants::{CLANGD_HEADER, INCLUDE_FLAG, LIST_ENTRY_PREFIX, RELATIVE_PATH_MARKER};
use crate::flags::{FlagItem, resolve::absolutize};
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Streams flag items into a `.clangd` document.
///
/// Tokens of one source line are glued together with no separator. The one
/// rewrite: a token starting with `.` that arrives while the line is exactly
/// `-I` is replaced by its absolute path under `base_dir`.
pub struct ClangdWriter<W: Write> {
    out: W,
    base_dir: PathBuf,
    line: String,
    tokens_in_line: usize,
    rewrote_include: bool,
}

impl<W: Write> ClangdWriter<W> {
    /// Writes the header and returns a writer ready for items.
    pub fn new(
        mut out: W,
        base_dir: &Path,
    ) -> Result<Self> {
        for header_line in CLANGD_HEADER {
            writeln!(out, "{header_line}")?;
        }
        Ok(Self {
            out,
            base_dir: base_dir.to_path_buf(),
            line: String::new(),
            tokens_in_line: 0,
            rewrote_include: false,
        })
    }

    pub fn push(
        &mut self,
        item: &FlagItem,
    ) -> Result<()> {
        match item {
            FlagItem::EndOfLine => self.end_line(),
            FlagItem::Token(token) => {
                self.push_token(token);
                Ok(())
            }
        }
    }

    fn push_token(
        &mut self,
        token: &str,
    ) {
        if self.line == INCLUDE_FLAG && token.starts_with(RELATIVE_PATH_MARKER) {
            let abs = absolutize(&self.base_dir, token);
            let text = abs.to_string_lossy();
            if abs.to_str().is_none() {
                warn!("Include path {:?} is not valid UTF-8, writing {:?}", abs, text);
            }
            self.line.push_str(&text);
            self.rewrote_include = true;
        } else {
            self.line.push_str(token);
        }
        self.tokens_in_line += 1;
    }

    fn end_line(&mut self) -> Result<()> {
        // `-I <path>` counts as a single flag
        let glued_ok = if self.rewrote_include { 2 } else { 1 };
        if self.tokens_in_line > glued_ok {
            warn!(
                "{} tokens joined without separator into {:?}",
                self.tokens_in_line, self.line
            );
        }
        writeln!(self.out, "{LIST_ENTRY_PREFIX}{}", self.line)?;
        self.line.clear();
        self.tokens_in_line = 0;
        self.rewrote_include = false;
        Ok(())
    }

    /// Flushes and hands back the destination. Tokens after the last line end
    /// are dropped.
    pub fn finish(mut self) -> Result<W> {
        if !self.line.is_empty() {
            debug!("Dropping unterminated flag line {:?}", self.line);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn write_clangd<W: Write>(
    items: &[FlagItem],
    base_dir: &Path,
    out: W,
) -> Result<W> {
    let mut writer = ClangdWriter::new(out, base_dir)?;
    for item in items {
        writer.push(item)?;
    }
    writer.finish()
}

/// Renders the whole document into a string.
pub fn render_clangd(
    items: &[FlagItem],
    base_dir: &Path,
) -> Result<String> {
    let buf = write_clangd(items, base_dir, Vec::new())?;
    Ok(String::from_utf8(buf)?)
}
