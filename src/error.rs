use std::fmt;

/// Every fallible operation in this crate returns this error. The core
/// recognizer never raises; only construction, extraction and evaluation do.
#[derive(Debug)]
pub enum Error {
    /// A rule was constructed with an empty right-hand side.
    InvalidRule,
    /// A textual `"A -> B C"` rule was malformed.
    InvalidGrammarText(String),
    /// `Grammar::symbols` found two distinct symbol identities sharing a name.
    DuplicateSymbolName(String),
    /// No complete derivation spans the input. `at` names the offending
    /// token position: 0 if nothing parsed at all, otherwise the longest
    /// prefix's end state. `token` is `t[at]`, the offending terminal, when
    /// the input has a token at that position.
    NoParse { at: usize, token: Option<String> },
    /// `Rule::evaluate` was called with a `Value` that is not `Value::List`.
    EvaluateInput,
    /// A chart state exceeded `RecognizerOptions::max_items_per_state`.
    GrammarTooExplosive { state: usize },
    /// A `/pattern/flags` terminal failed to compile as a regex.
    InvalidPattern(regex::Error),
    /// A grammar or input file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRule => write!(f, "rule right-hand side must not be empty"),
            Self::InvalidGrammarText(text) => write!(f, "invalid grammar text: {text}"),
            Self::DuplicateSymbolName(name) => {
                write!(f, "two distinct symbols share the name {name:?}")
            }
            Self::NoParse { at, token: Some(t) } => {
                write!(f, "no parse: failed at token position {at} (near {t:?})")
            }
            Self::NoParse { at, token: None } => {
                write!(f, "no parse: failed at token position {at} (end of input)")
            }
            Self::EvaluateInput => write!(f, "rule evaluate() requires a positional sequence"),
            Self::GrammarTooExplosive { state } => {
                write!(f, "chart state {state} exceeded the configured item cap")
            }
            Self::InvalidPattern(e) => write!(f, "invalid terminal pattern: {e}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::InvalidPattern(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
