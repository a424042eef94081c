use crate::cli::{Cli, Command};
use crate::constants::CLANGD_FILE;
use crate::flags::FlagSources;
use crate::output::SettingsRequest;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Where the clangd document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClangdTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Settings(SettingsRequest),
    Clangd(ClangdTarget),
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for flag files, output and include-path resolution.
    pub dir: PathBuf,
    pub sources: FlagSources,
    pub mode: Mode,
    pub verbose: u8,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_parsed(Cli::parse())
    }

    pub fn from_parsed(cli: Cli) -> Result<Self> {
        let sources = FlagSources::new(vec![cli.dir.join(&cli.base), cli.dir.join(&cli.extra)]);
        let mode = match cli.command {
            Command::Settings { request } => Mode::Settings(match request {
                Some(json) => SettingsRequest::from_json(&json)?,
                None => SettingsRequest::default(),
            }),
            Command::Clangd { stdout: true, .. } => Mode::Clangd(ClangdTarget::Stdout),
            Command::Clangd { output, .. } => Mode::Clangd(ClangdTarget::File(
                cli.dir.join(output.unwrap_or_else(|| PathBuf::from(CLANGD_FILE))),
            )),
        };
        Ok(Config {
            dir: cli.dir,
            sources,
            mode,
            verbose: cli.verbose,
        })
    }
}
