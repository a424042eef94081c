#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const BASE: &str = "compiler_options.txt";
pub const EXTRA: &str = "compiler_options_extra.txt";

/// Builds a project dir holding whichever option files are given.
pub fn project(
    base: Option<&str>,
    extra: Option<&str>,
) -> TempDir {
    let td = TempDir::new().unwrap();
    if let Some(text) = base {
        td.child(BASE).write_str(text).unwrap();
    }
    if let Some(text) = extra {
        td.child(EXTRA).write_str(text).unwrap();
    }
    td
}
