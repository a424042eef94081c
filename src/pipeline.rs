use crate::config::{ClangdTarget, Config, Mode};
use crate::flags::{self, FlagItem, FlagSources};
use crate::io::output_file;
use crate::output::{self, Settings, SettingsRequest};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pipeline from flag files to one of the output formats.
#[derive(Debug, Default)]
pub struct Pipeline {
    base_dir: PathBuf,
    sources: FlagSources,
    items: Vec<FlagItem>,
}

impl Pipeline {
    /// `dir` is made absolute up front so include paths never depend on the
    /// process working directory later on.
    pub fn new(
        dir: &Path,
        sources: FlagSources,
    ) -> Result<Self> {
        let base_dir = std::path::absolute(dir)
            .with_context(|| format!("Could not resolve project directory {:?}", dir))?;
        Ok(Self {
            base_dir: dunce::simplified(&base_dir).to_path_buf(),
            sources,
            items: Vec::new(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn items(&self) -> &[FlagItem] {
        &self.items
    }

    /// Read all flag files into memory.
    pub fn extract(&mut self) -> Result<()> {
        self.items = flags::extract_items(&self.sources)?;
        Ok(())
    }

    /// Flag list from the items read by [`Pipeline::extract`].
    pub fn settings(
        &self,
        request: &SettingsRequest,
    ) -> Settings {
        if let Some(file) = &request.filename {
            debug!("Settings requested for {:?}", file);
        }
        Settings::from_items(&self.items)
    }

    pub fn render_clangd(&self) -> Result<String> {
        output::render_clangd(&self.items, &self.base_dir)
    }
}

/// Runs the mode selected in `config`, printing to stdout where asked.
pub fn run(config: &Config) -> Result<()> {
    let mut pipeline = Pipeline::new(&config.dir, config.sources.clone())?;
    pipeline.extract()?;
    match &config.mode {
        Mode::Settings(request) => {
            let settings = pipeline.settings(request);
            info!("Collected {} flags", settings.flags.len());
            println!("{}", settings.to_json_pretty()?);
        }
        Mode::Clangd(target) => {
            let doc = pipeline.render_clangd()?;
            match target {
                ClangdTarget::Stdout => print!("{doc}"),
                ClangdTarget::File(path) => output_file::write_output(path, &doc)?,
            }
        }
    }
    Ok(())
}
