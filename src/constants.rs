// Conventional file names & fixed output fragments
pub const BASE_OPTIONS_FILE: &str = "compiler_options.txt";
pub const EXTRA_OPTIONS_FILE: &str = "compiler_options_extra.txt";
pub const CLANGD_FILE: &str = ".clangd";

pub const INCLUDE_FLAG: &str = "-I";
pub const RELATIVE_PATH_MARKER: char = '.';

pub const CLANGD_HEADER: [&str; 2] = ["CompileFlags:", "  Add:"];
pub const LIST_ENTRY_PREFIX: &str = "    - ";
