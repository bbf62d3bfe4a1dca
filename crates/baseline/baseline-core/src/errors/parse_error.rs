//! Dialect parse errors and selector grammar errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

/// Errors raised while turning one file into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No parser for extension: {extension}")]
    UnsupportedDialect { extension: String },

    #[error("Grammar for {dialect} could not be loaded")]
    GrammarNotFound { dialect: String },

    #[error("tree-sitter failed on {path}: {message}")]
    TreeSitter { path: PathBuf, message: String },

    #[error("Unrecoverable syntax in {path}: {error_count} error(s), first at line {line}")]
    Unrecoverable {
        path: PathBuf,
        error_count: usize,
        line: u32,
    },

    #[error("Stylesheet {path} failed to parse: {message}")]
    Stylesheet { path: PathBuf, message: String },
}

impl BaselineErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedDialect { .. } => error_code::UNSUPPORTED_DIALECT,
            _ => error_code::PARSE_ERROR,
        }
    }
}

/// A single selector that does not fit the selector grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("empty member in selector list at offset {offset}")]
    EmptyListMember { offset: usize },

    #[error("unbalanced '{open}' opened at offset {offset}")]
    Unbalanced { open: char, offset: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedClose { found: char, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("dangling escape at end of selector")]
    DanglingEscape,

    #[error("pseudo-class without a name at offset {offset}")]
    MissingPseudoName { offset: usize },

    #[error("empty argument list for :{name} at offset {offset}")]
    EmptyArguments { name: String, offset: usize },
}

impl BaselineErrorCode for SelectorError {
    fn error_code(&self) -> &'static str {
        error_code::SELECTOR_ERROR
    }
}
