//! Lexical layer for name identifiers
//!
//! This module provides:
//! - **logos** for fast lexing into structural tokens
//! - a nesting-aware scanner on top of the token stream
//!
//! ## Architecture
//!
//! ```text
//! Identifier text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Scanner → Tokens with nesting depth, balance checked
//!     ↓
//! split_top_level / find_top_level / Cursor
//!     ↓
//! Variant parsers (crate::names)
//! ```

mod lexer;
mod scan;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use scan::{
    Cursor, Lexeme, MAX_NESTING_DEPTH, Scanner, check_balanced, find_top_level, matching_close, split_top_level,
};
