/// One item of the extracted flag stream.
///
/// `EndOfLine` follows the tokens of every source line, so consumers that
/// care about line structure never need a sentinel token value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagItem {
    Token(String),
    EndOfLine,
}

impl FlagItem {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            FlagItem::Token(t) => Some(t),
            FlagItem::EndOfLine => None,
        }
    }
}
