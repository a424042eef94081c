pub mod extract;
pub mod resolve;
pub mod sources;
pub mod types;

pub use extract::{extract_items, extract_tokens, read_lines, split_line};
pub use sources::FlagSources;
pub use types::FlagItem;
