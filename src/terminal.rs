//! Terminals: literal strings or patterns, matched against a single token.

use std::fmt;

use regex::Regex;
use smol_str::SmolStr;

use crate::error::Error;
use crate::symbol::Symbol;

/// Either a literal string, matched by exact equality against a token, or a
/// pattern, matched by a full-match regex test. Terminals have no identity
/// beyond their value.
#[derive(Clone, Debug)]
pub enum Terminal {
    Literal(SmolStr),
    Pattern(Regex, SmolStr),
}

impl Terminal {
    pub fn literal(value: &str) -> Self {
        Self::Literal(SmolStr::new(value))
    }

    /// Compile `body` (with `gimy`-style `flags`, of which only `i`, `m`,
    /// `s`, `x` have a `regex`-crate equivalent; `g` and `y` are accepted
    /// and ignored) as a full-match pattern terminal.
    pub fn pattern(body: &str, flags: &str) -> Result<Self, Error> {
        let inline: String = flags.chars().filter(|c| "imsx".contains(*c)).collect();
        let source = if inline.is_empty() {
            format!("^(?:{body})$")
        } else {
            format!("^(?{inline}:{body})$")
        };
        let re = Regex::new(&source)?;
        Ok(Self::Pattern(re, SmolStr::new(body)))
    }

    /// string equality for string terminals; full-match regex test for
    /// pattern terminals.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Literal(lit) => lit.as_str() == token,
            Self::Pattern(re, _) => re.is_match(token),
        }
    }

    /// The raw source text used to build the tokenizer's alternation.
    pub(crate) fn tokenizer_fragment(&self) -> String {
        match self {
            Self::Literal(lit) => regex::escape(lit.as_str()),
            Self::Pattern(_, body) => body.to_string(),
        }
    }
}

impl PartialEq for Terminal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(_, a), Self::Pattern(_, b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Terminal {}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "'{lit}'"),
            Self::Pattern(_, body) => write!(f, "/{body}/"),
        }
    }
}

/// A single position in a rule's right-hand side: either a reference to a
/// non-terminal or a terminal matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RhsElem {
    Sym(Symbol),
    Term(Terminal),
}

impl fmt::Display for RhsElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sym(sym) => write!(f, "{sym}"),
            Self::Term(term) => write!(f, "{term}"),
        }
    }
}

impl From<Symbol> for RhsElem {
    fn from(sym: Symbol) -> Self {
        Self::Sym(sym)
    }
}

impl From<Terminal> for RhsElem {
    fn from(term: Terminal) -> Self {
        Self::Term(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches_exact_equality_only() {
        let t = Terminal::literal("+");
        assert!(t.matches("+"));
        assert!(!t.matches("++"));
        assert!(!t.matches(" +"));
    }

    #[test]
    fn pattern_requires_full_match() {
        let t = Terminal::pattern(r"\d+", "").unwrap();
        assert!(t.matches("23"));
        assert!(!t.matches("23a"));
        assert!(!t.matches(""));
    }

    #[test]
    fn pattern_flags_apply_case_insensitivity() {
        let t = Terminal::pattern("abc", "i").unwrap();
        assert!(t.matches("ABC"));
    }

    #[test]
    fn invalid_pattern_reports_error() {
        let err = Terminal::pattern("(", "").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
