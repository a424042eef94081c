pub mod clangd;
pub mod settings;

pub use clangd::{ClangdWriter, render_clangd, write_clangd};
pub use settings::{Settings, SettingsRequest, settings};
