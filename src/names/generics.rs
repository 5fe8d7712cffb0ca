//! Generic argument lists shared by type and method names.
//!
//! A list is written `[[T -> System.Int32, mscorlib, 4.0.0.0],[U]]`: each
//! argument binds a formal parameter to a type, or leaves it open.

use smol_str::SmolStr;

use crate::base::validate::bare_name;
use crate::base::{Kind, NameResult, Problem, ProblemContext};
use crate::parser::{TokenKind, find_top_level, matching_close, split_top_level};
use crate::pool::{Interned, Names};

use super::{Name, TypeName};

/// One generic argument: a formal parameter name and what it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBinding {
    formal: SmolStr,
    argument: Interned<TypeName>,
    open: bool,
}

impl GenericBinding {
    /// The formal parameter name, e.g. `T`.
    pub fn formal(&self) -> &str {
        &self.formal
    }

    /// The bound type, or the formal parameter itself (as a type) when open.
    pub fn argument(&self) -> &Interned<TypeName> {
        &self.argument
    }

    /// The bound type, `None` when open.
    pub fn bound(&self) -> Option<&Interned<TypeName>> {
        (!self.open).then_some(&self.argument)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push('[');
        out.push_str(&self.formal);
        if !self.open {
            out.push_str(" -> ");
            out.push_str(self.argument.identifier());
        }
        out.push(']');
    }
}

/// Print a whole list including the outer brackets.
pub(crate) fn write_list(bindings: &[GenericBinding], out: &mut String) {
    out.push('[');
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        binding.write_to(out);
    }
    out.push(']');
}

/// Parse the contents of a generic list, i.e. the text between its outer
/// brackets. `kind` and `identifier` describe the enclosing name for errors.
pub(crate) fn parse_list(
    content: &str,
    names: &Names,
    kind: Kind,
    identifier: &str,
) -> NameResult<Vec<GenericBinding>> {
    let pieces = split_top_level(content, TokenKind::Comma).for_name(kind, identifier)?;
    let mut bindings = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let inner = argument_text(piece).for_name(kind, identifier)?;
        bindings.push(parse_binding(inner, names, kind, identifier)?);
    }
    Ok(bindings)
}

/// Strip the brackets around one argument.
fn argument_text(piece: &str) -> Result<&str, Problem> {
    if piece.is_empty() {
        return Err(Problem::Missing("type argument"));
    }
    if !piece.starts_with('[') {
        return Err(Problem::Expected("`[` around type argument"));
    }
    let close = matching_close(piece, 0)?;
    if close + 1 != piece.len() {
        return Err(Problem::trailing(&piece[close + 1..]));
    }
    Ok(piece[1..close].trim())
}

fn parse_binding(
    inner: &str,
    names: &Names,
    kind: Kind,
    identifier: &str,
) -> NameResult<GenericBinding> {
    match find_top_level(inner, TokenKind::Arrow).for_name(kind, identifier)? {
        Some(arrow) => {
            let formal =
                bare_name(inner[..arrow.start].trim(), "formal parameter").for_name(kind, identifier)?;
            let bound = inner[arrow.end..].trim();
            if bound.is_empty() {
                return Err(Problem::Missing("bound type")).for_name(kind, identifier);
            }
            Ok(GenericBinding {
                formal: formal.into(),
                argument: names.type_name(bound)?,
                open: false,
            })
        }
        None => {
            let formal = bare_name(inner, "formal parameter").for_name(kind, identifier)?;
            Ok(GenericBinding {
                formal: formal.into(),
                argument: names.type_name(formal)?,
                open: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> NameResult<Vec<GenericBinding>> {
        let names = Names::new();
        parse_list(content, &names, Kind::Type, content)
    }

    #[test]
    fn test_bound_and_open() {
        let bindings = parse("[T -> System.Int32, mscore, 4.0.0.0],[U]").unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].formal(), "T");
        assert_eq!(
            bindings[0].bound().map(|t| t.identifier()),
            Some("System.Int32, mscore, 4.0.0.0")
        );
        assert!(bindings[1].is_open());
        assert_eq!(bindings[1].bound(), None);
        assert_eq!(bindings[1].argument().identifier(), "U");
    }

    #[test]
    fn test_write_list() {
        let bindings = parse(" [T->A, B] , [U] ").unwrap();
        let mut out = String::new();
        write_list(&bindings, &mut out);
        assert_eq!(out, "[[T -> A, B],[U]]");
    }

    #[test]
    fn test_rejects_missing_pieces() {
        assert!(parse("[T],").is_err());
        assert!(parse("[T -> ]").is_err());
        assert!(parse("[ -> A]").is_err());
        assert!(parse("T").is_err());
        assert!(parse("[T]x").is_err());
    }
}
