//! Nesting-aware scanning over lexer tokens.
//!
//! Every parser locates its structural delimiters through this module so
//! that separators inside `[...]`, `(...)` and `{...}` are never mistaken
//! for top-level ones.

use std::ops::Range;

use crate::base::Problem;

use super::lexer::{Lexer, Token, TokenKind};

/// Deepest bracket nesting any identifier may use.
pub const MAX_NESTING_DEPTH: usize = 32;

/// A token annotated with its nesting depth.
///
/// Openers report the depth outside of the group they open and closers the
/// depth after the group is closed, so a top-level `[...]` has both its
/// brackets at depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token<'a>,
    pub depth: usize,
}

/// Iterator over [`Lexeme`]s that fails on unbalanced or mismatched nesting.
pub struct Scanner<'a> {
    lexer: Lexer<'a>,
    stack: Vec<(TokenKind, usize)>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            stack: Vec::new(),
            finished: false,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Lexeme<'a>, Problem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(token) = self.lexer.next() else {
            self.finished = true;
            return self
                .stack
                .last()
                .map(|&(_, offset)| Err(Problem::UnbalancedNesting { offset }));
        };

        let depth = self.stack.len();
        if token.kind.is_open() {
            if depth >= MAX_NESTING_DEPTH {
                self.finished = true;
                return Some(Err(Problem::TooDeep {
                    what: "brackets",
                    limit: MAX_NESTING_DEPTH,
                }));
            }
            self.stack.push((token.kind, token.span.start));
            return Some(Ok(Lexeme { token, depth }));
        }
        if token.kind.is_close() {
            return match self.stack.pop() {
                Some((open, _)) if open.closer() == Some(token.kind) => Some(Ok(Lexeme {
                    token,
                    depth: depth - 1,
                })),
                _ => {
                    self.finished = true;
                    Some(Err(Problem::UnbalancedNesting {
                        offset: token.span.start,
                    }))
                }
            };
        }
        Some(Ok(Lexeme { token, depth }))
    }
}

/// Split `text` at every top-level `separator`, trimming each piece.
///
/// `[`, `(` and `{` open nested regions closed by their matching bracket;
/// separators inside them do not split. An input without separators yields
/// a single piece, so `""` yields `[""]`.
pub fn split_top_level(text: &str, separator: TokenKind) -> Result<Vec<&str>, Problem> {
    let mut parts = Vec::new();
    let mut start = 0;
    for lexeme in Scanner::new(text) {
        let lexeme = lexeme?;
        if lexeme.depth == 0 && lexeme.token.kind == separator {
            parts.push(text[start..lexeme.token.span.start].trim());
            start = lexeme.token.span.end;
        }
    }
    parts.push(text[start..].trim());
    Ok(parts)
}

/// Byte range of the first top-level `kind` token, after checking that the
/// whole text is balanced.
pub fn find_top_level(text: &str, kind: TokenKind) -> Result<Option<Range<usize>>, Problem> {
    let mut found = None;
    for lexeme in Scanner::new(text) {
        let lexeme = lexeme?;
        if found.is_none() && lexeme.depth == 0 && lexeme.token.kind == kind {
            found = Some(lexeme.token.span);
        }
    }
    Ok(found)
}

/// Byte offset of the closer matching the opener at `open`.
pub fn matching_close(text: &str, open: usize) -> Result<usize, Problem> {
    let mut lexemes = Scanner::new(&text[open..]);
    match lexemes.next() {
        Some(Ok(first)) if first.token.kind.is_open() => {}
        _ => return Err(Problem::Expected("opening bracket")),
    }
    for lexeme in lexemes {
        let lexeme = lexeme.map_err(|_| Problem::UnbalancedNesting { offset: open })?;
        if lexeme.depth == 0 && lexeme.token.kind.is_close() {
            return Ok(open + lexeme.token.span.start);
        }
    }
    Err(Problem::UnbalancedNesting { offset: open })
}

/// Fail unless every opener in `text` is matched.
pub fn check_balanced(text: &str) -> Result<(), Problem> {
    Scanner::new(text).try_for_each(|lexeme| lexeme.map(drop))
}

/// Left-to-right reader used by the bracketed member grammars.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `expected` or fail with `what`.
    pub fn expect(&mut self, expected: char, what: &'static str) -> Result<(), Problem> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(Problem::Expected(what))
        }
    }

    /// Consume a run of characters up to the next whitespace or `stop`.
    pub fn word(&mut self, stop: char) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == stop)
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Consume a complete bracketed group and return its trimmed contents.
    pub fn group(&mut self) -> Result<&'a str, Problem> {
        let close = matching_close(self.text, self.pos)?;
        let inner = self.text[self.pos + 1..close].trim();
        self.pos = close + 1;
        Ok(inner)
    }

    /// Consume everything that is left.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.text.len();
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_respects_nesting() {
        let parts = split_top_level(
            "System.Nullable`1[[T -> System.Int32, mscore, 4.0.0.0]], mscore, 4.0.0.0",
            TokenKind::Comma,
        )
        .unwrap();
        assert_eq!(
            parts,
            vec![
                "System.Nullable`1[[T -> System.Int32, mscore, 4.0.0.0]]",
                "mscore",
                "4.0.0.0"
            ]
        );
    }

    #[test]
    fn test_split_trims_pieces() {
        let parts = split_top_level(" A , 1.2.3.4", TokenKind::Comma).unwrap();
        assert_eq!(parts, vec!["A", "1.2.3.4"]);
    }

    #[test]
    fn test_split_parentheses_and_braces() {
        let parts = split_top_level("M([A, B] a, [C] c), {x, y}", TokenKind::Comma).unwrap();
        assert_eq!(parts, vec!["M([A, B] a, [C] c)", "{x, y}"]);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_top_level("", TokenKind::Comma).unwrap(), vec![""]);
    }

    #[test]
    fn test_split_unbalanced() {
        assert!(matches!(
            split_top_level("A[, B", TokenKind::Comma),
            Err(Problem::UnbalancedNesting { offset: 1 })
        ));
        assert!(matches!(
            split_top_level("A], B", TokenKind::Comma),
            Err(Problem::UnbalancedNesting { offset: 1 })
        ));
        assert!(matches!(
            split_top_level("A[), B", TokenKind::Comma),
            Err(Problem::UnbalancedNesting { .. })
        ));
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let at_limit = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
        assert!(check_balanced(&at_limit).is_ok());
        let beyond = format!("[{at_limit}]");
        assert_eq!(
            check_balanced(&beyond),
            Err(Problem::TooDeep {
                what: "brackets",
                limit: MAX_NESTING_DEPTH
            })
        );
    }

    #[test]
    fn test_find_top_level_skips_nested() {
        let text = "[T -> A] -> B";
        assert_eq!(find_top_level(text, TokenKind::Arrow).unwrap(), Some(9..11));
        assert_eq!(find_top_level("[a, b]", TokenKind::Comma).unwrap(), None);
    }

    #[test]
    fn test_matching_close() {
        let text = "[A`1[[T -> B]]] [D].M()";
        assert_eq!(matching_close(text, 0).unwrap(), 14);
        assert_eq!(matching_close(text, 16).unwrap(), 18);
        assert!(matching_close("[A[B]", 0).is_err());
        assert!(matching_close("A", 0).is_err());
    }

    #[test]
    fn test_cursor_reads_member_header() {
        let mut cursor = Cursor::new("static [R, A] [D].M()");
        assert_eq!(cursor.word('['), "static");
        cursor.skip_whitespace();
        assert_eq!(cursor.group().unwrap(), "R, A");
        cursor.skip_whitespace();
        assert_eq!(cursor.group().unwrap(), "D");
        assert!(cursor.eat('.'));
        assert_eq!(cursor.take_rest(), "M()");
        assert!(cursor.is_empty());
    }
}
