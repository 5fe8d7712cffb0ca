//! Pieces shared by the bracketed member grammars: modifiers, the
//! `[ValueType] [DeclaringType].` header and parameter lists.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{Kind, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::{Cursor, TokenKind, check_balanced, split_top_level};
use crate::pool::{Interned, Names};

use super::{Name, NameKind, ParameterName, TypeName};

/// A keyword written before the first bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Static,
    Get,
    Set,
    This,
    Params,
    Opt,
    Out,
    Ref,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Get => "get",
            Modifier::Set => "set",
            Modifier::This => "this",
            Modifier::Params => "params",
            Modifier::Opt => "opt",
            Modifier::Out => "out",
            Modifier::Ref => "ref",
        }
    }

    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "static" => Modifier::Static,
            "get" => Modifier::Get,
            "set" => Modifier::Set,
            "this" => Modifier::This,
            "params" => Modifier::Params,
            "opt" => Modifier::Opt,
            "out" => Modifier::Out,
            "ref" => Modifier::Ref,
            _ => return None,
        })
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read modifier words up to the first `[`.
///
/// Unknown words are unsupported grammar; known modifiers outside `allowed`
/// or written twice are validation errors. Input order is kept.
pub(crate) fn parse_modifiers(
    cursor: &mut Cursor<'_>,
    allowed: &[Modifier],
) -> Result<Vec<Modifier>, Problem> {
    let mut modifiers = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.is_empty() || cursor.peek() == Some('[') {
            return Ok(modifiers);
        }
        let word = cursor.word('[');
        let modifier = Modifier::from_word(word)
            .ok_or_else(|| Problem::unsupported(format!("modifier `{word}`")))?;
        if !allowed.contains(&modifier) {
            return Err(Problem::MisplacedModifier(modifier.as_str()));
        }
        if modifiers.contains(&modifier) {
            return Err(Problem::DuplicateModifier(modifier.as_str()));
        }
        modifiers.push(modifier);
    }
}

pub(crate) fn write_modifiers(modifiers: &[Modifier], out: &mut String) {
    for modifier in modifiers {
        out.push_str(modifier.as_str());
        out.push(' ');
    }
}

/// Read a `[TypeName]` group and resolve it through the type pool.
pub(crate) fn bracketed_type(
    cursor: &mut Cursor<'_>,
    what: &'static str,
    names: &Names,
    kind: Kind,
    identifier: &str,
) -> NameResult<Interned<TypeName>> {
    cursor.skip_whitespace();
    if cursor.peek() != Some('[') {
        return Err(Problem::Missing(what)).for_name(kind, identifier);
    }
    let inner = cursor.group().for_name(kind, identifier)?;
    if inner.is_empty() {
        return Err(Problem::Missing(what)).for_name(kind, identifier);
    }
    names.type_name(inner)
}

pub(crate) fn write_bracketed(ty: &TypeName, out: &mut String) {
    out.push('[');
    out.push_str(ty.identifier());
    out.push(']');
}

/// Decomposed `modifiers [ValueType] [DeclaringType].rest`.
pub(crate) struct Header<'a> {
    pub modifiers: Vec<Modifier>,
    pub value_type: Interned<TypeName>,
    pub declaring_type: Interned<TypeName>,
    pub rest: &'a str,
}

impl<'a> Header<'a> {
    pub fn parse(
        identifier: &'a str,
        allowed: &[Modifier],
        names: &Names,
        kind: Kind,
    ) -> NameResult<Self> {
        let text = identifier.trim();
        if text.is_empty() {
            return Err(Problem::Missing("member name")).for_name(kind, identifier);
        }
        check_balanced(text).for_name(kind, identifier)?;

        let mut cursor = Cursor::new(text);
        let modifiers = parse_modifiers(&mut cursor, allowed).for_name(kind, identifier)?;
        let value_type = bracketed_type(&mut cursor, "value type", names, kind, identifier)?;
        let declaring_type = bracketed_type(&mut cursor, "declaring type", names, kind, identifier)?;
        cursor.skip_whitespace();
        cursor
            .expect('.', "`.` before the member name")
            .for_name(kind, identifier)?;

        Ok(Self {
            modifiers,
            value_type,
            declaring_type,
            rest: cursor.take_rest().trim(),
        })
    }
}

pub(crate) fn write_header(
    modifiers: &[Modifier],
    value_type: &TypeName,
    declaring_type: &TypeName,
    out: &mut String,
) {
    write_modifiers(modifiers, out);
    write_bracketed(value_type, out);
    out.push(' ');
    write_bracketed(declaring_type, out);
    out.push('.');
}

/// Parse a parenthesized parameter list starting at the cursor.
pub(crate) fn parse_signature(
    cursor: &mut Cursor<'_>,
    names: &Names,
    kind: Kind,
    identifier: &str,
) -> NameResult<Vec<Interned<ParameterName>>> {
    cursor.skip_whitespace();
    if cursor.peek() != Some('(') {
        return Err(Problem::Missing("parameter list")).for_name(kind, identifier);
    }
    let inner = cursor.group().for_name(kind, identifier)?;
    cursor.skip_whitespace();
    if !cursor.is_empty() {
        return Err(Problem::trailing(cursor.rest())).for_name(kind, identifier);
    }
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(inner, TokenKind::Comma)
        .for_name(kind, identifier)?
        .into_iter()
        .map(|piece| {
            if piece.is_empty() {
                Err(Problem::Missing("parameter")).for_name(kind, identifier)
            } else {
                names.parameter(piece)
            }
        })
        .collect()
}

pub(crate) fn write_signature(parameters: &[Interned<ParameterName>], out: &mut String) {
    out.push('(');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(parameter.identifier());
    }
    out.push(')');
}

/// The part of a member shared by every member kind.
#[derive(Debug, Clone)]
pub(crate) struct Member {
    pub modifiers: Vec<Modifier>,
    pub value_type: Interned<TypeName>,
    pub declaring_type: Interned<TypeName>,
    pub name: SmolStr,
}

impl Member {
    pub fn unknown() -> Self {
        Self {
            modifiers: Vec::new(),
            value_type: TypeName::unknown(),
            declaring_type: TypeName::unknown(),
            name: SmolStr::new_static(UNKNOWN_IDENTIFIER),
        }
    }

    pub fn from_header(header: Header<'_>, name: &str) -> Self {
        Self {
            modifiers: header.modifiers,
            value_type: header.value_type,
            declaring_type: header.declaring_type,
            name: name.into(),
        }
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn write_to(&self, out: &mut String) {
        write_header(&self.modifiers, &self.value_type, &self.declaring_type, out);
        out.push_str(&self.name);
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}", self.declaring_type.full_name(), self.name)
    }
}

/// Accessors every member kind exposes over its [`Member`] field.
macro_rules! member_accessors {
    ($ty:ty) => {
        impl $ty {
            /// Modifiers in the order they were written.
            pub fn modifiers(&self) -> &[$crate::names::Modifier] {
                &self.member.modifiers
            }

            pub fn is_static(&self) -> bool {
                self.member.has($crate::names::Modifier::Static)
            }

            pub fn value_type(&self) -> &$crate::pool::Interned<$crate::names::TypeName> {
                &self.member.value_type
            }

            pub fn declaring_type(&self) -> &$crate::pool::Interned<$crate::names::TypeName> {
                &self.member.declaring_type
            }

            /// Simple name as written, including any generic arity.
            pub fn name(&self) -> &str {
                &self.member.name
            }

            /// Declaring type's full name plus the simple name.
            pub fn full_name(&self) -> String {
                self.member.full_name()
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}
    };
}

pub(crate) use member_accessors;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_in_order() {
        let mut cursor = Cursor::new("set get [T] [D].P");
        let modifiers =
            parse_modifiers(&mut cursor, &[Modifier::Static, Modifier::Get, Modifier::Set]).unwrap();
        assert_eq!(modifiers, vec![Modifier::Set, Modifier::Get]);
        assert_eq!(cursor.rest(), "[T] [D].P");
    }

    #[test]
    fn test_modifier_errors() {
        let parse = |text: &str| parse_modifiers(&mut Cursor::new(text), &[Modifier::Static]);
        assert_eq!(parse("static static [T]"), Err(Problem::DuplicateModifier("static")));
        assert_eq!(parse("out [T]"), Err(Problem::MisplacedModifier("out")));
        assert!(matches!(parse("virtual [T]"), Err(Problem::Unsupported(_))));
    }

    #[test]
    fn test_header() {
        let names = Names::new();
        let header = Header::parse(
            "static [R, A, 1.0.0.0] [D, A, 1.0.0.0].M([P, A, 1.0.0.0] p)",
            &[Modifier::Static],
            &names,
            Kind::Method,
        )
        .unwrap();
        assert_eq!(header.modifiers, vec![Modifier::Static]);
        assert_eq!(header.value_type.identifier(), "R, A, 1.0.0.0");
        assert_eq!(header.declaring_type.identifier(), "D, A, 1.0.0.0");
        assert_eq!(header.rest, "M([P, A, 1.0.0.0] p)");
    }

    #[test]
    fn test_header_requires_groups() {
        let names = Names::new();
        let parse = |text: &str| Header::parse(text, &[], &names, Kind::Field).map(|h| h.rest.to_string());
        assert!(parse("").is_err());
        assert!(parse("[T] f").is_err());
        assert!(parse("[] [D].f").is_err());
        assert!(parse("[T] [D] f").is_err());
        assert!(parse("[T] [D.f").is_err());
    }
}
