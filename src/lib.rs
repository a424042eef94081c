pub mod cli;
pub mod config;
pub mod constants;
pub mod flags;
pub mod io;
pub mod output;
pub mod pipeline;

pub use pipeline::{Pipeline, run};
