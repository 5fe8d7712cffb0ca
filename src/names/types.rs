//! Type names.
//!
//! ```text
//! [e:|s:|i:|d:] Namespace.Outer`1+Inner`1 [[T -> Arg],[U]] [] [,] , Assembly, 1.2.3.4
//! ```
//!
//! The raw name carries the namespace path, `+` nesting and one backtick
//! arity per generic segment. Generic arguments for all segments are listed
//! once, outermost first, before any array suffixes.

use std::fmt;
use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::{bare_name, non_negative};
use crate::base::{Kind, NameError, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::{Cursor, MAX_NESTING_DEPTH, TokenKind, find_top_level, split_top_level};
use crate::pool::{Interned, NamePool, Names};

use super::generics::{self, GenericBinding};
use super::{AssemblyName, Name, NameKind, NamespaceName};

/// Declared flavor of a type, taken from its optional prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// No prefix: a class, or a type whose flavor was not recorded.
    #[default]
    Unspecified,
    Enum,
    Struct,
    Interface,
    Delegate,
}

impl TypeKind {
    /// The prefix letter, `None` for [`TypeKind::Unspecified`].
    pub fn prefix(self) -> Option<char> {
        match self {
            TypeKind::Unspecified => None,
            TypeKind::Enum => Some('e'),
            TypeKind::Struct => Some('s'),
            TypeKind::Interface => Some('i'),
            TypeKind::Delegate => Some('d'),
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "e" => Some(TypeKind::Enum),
            "s" => Some(TypeKind::Struct),
            "i" => Some(TypeKind::Interface),
            "d" => Some(TypeKind::Delegate),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKind::Unspecified => "unspecified",
            TypeKind::Enum => "enum",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Delegate => "delegate",
        })
    }
}

const SIMPLE_TYPES: &[&str] = &[
    "System.SByte",
    "System.Byte",
    "System.Int16",
    "System.UInt16",
    "System.Int32",
    "System.UInt32",
    "System.Int64",
    "System.UInt64",
    "System.Char",
    "System.Single",
    "System.Double",
    "System.Decimal",
    "System.Boolean",
];

/// A fully qualified type reference.
#[derive(Debug, Clone)]
pub struct TypeName {
    id: SmolStr,
    kind: TypeKind,
    raw: SmolStr,
    arity: usize,
    generics: Vec<GenericBinding>,
    arrays: Vec<u32>,
    assembly: Option<Interned<AssemblyName>>,
    namespace: Interned<NamespaceName>,
    declaring: Option<Interned<TypeName>>,
}

impl TypeName {
    fn unknown_value() -> Self {
        Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            kind: TypeKind::Unspecified,
            raw: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            arity: 0,
            generics: Vec::new(),
            arrays: Vec::new(),
            assembly: None,
            namespace: NamespaceName::unknown(),
            declaring: None,
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Namespace path, nesting and arities, without generic arguments,
    /// arrays or assembly: `System.Collections.Generic.List`1`.
    pub fn raw_name(&self) -> &str {
        &self.raw
    }

    /// The innermost simple name including its arity: `List`1`.
    pub fn name(&self) -> &str {
        let innermost = self.raw.rsplit('+').next().unwrap_or(&self.raw);
        innermost.rsplit('.').next().unwrap_or(innermost)
    }

    /// Everything before the assembly, without the kind prefix.
    pub fn full_name(&self) -> String {
        let mut out = String::new();
        self.write_full_name(&mut out, None);
        out
    }

    /// Namespace of the outermost enclosing type.
    pub fn namespace(&self) -> &Interned<NamespaceName> {
        &self.namespace
    }

    /// The assembly, `None` for types written without one (such as the
    /// formal parameters of open generic arguments).
    pub fn assembly(&self) -> Option<&Interned<AssemblyName>> {
        self.assembly.as_ref()
    }

    /// For a nested type, the enclosing type with the outer generic
    /// arguments carried over.
    pub fn declaring_type(&self) -> Option<&Interned<TypeName>> {
        self.declaring.as_ref()
    }

    pub fn is_nested(&self) -> bool {
        self.declaring.is_some()
    }

    /// Sum of the backtick arities over all nesting levels.
    pub fn generic_arity(&self) -> usize {
        self.arity
    }

    pub fn is_generic(&self) -> bool {
        self.arity > 0
    }

    pub fn type_parameters(&self) -> &[GenericBinding] {
        &self.generics
    }

    pub fn has_type_parameters(&self) -> bool {
        !self.generics.is_empty()
    }

    /// One rank per array suffix, outermost last: `T[][,]` is `[1, 2]`.
    pub fn array_ranks(&self) -> &[u32] {
        &self.arrays
    }

    pub fn is_array(&self) -> bool {
        !self.arrays.is_empty()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum && !self.is_array()
    }

    pub fn is_struct(&self) -> bool {
        self.kind == TypeKind::Struct && !self.is_array()
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface && !self.is_array()
    }

    pub fn is_delegate(&self) -> bool {
        self.kind == TypeKind::Delegate && !self.is_array()
    }

    pub fn is_void(&self) -> bool {
        self.raw == "System.Void" && !self.is_array()
    }

    pub fn is_nullable(&self) -> bool {
        self.raw == "System.Nullable`1" && !self.is_array()
    }

    /// Built-in numeric types and `System.Boolean`.
    pub fn is_simple(&self) -> bool {
        SIMPLE_TYPES.contains(&self.raw.as_str()) && !self.is_array()
    }

    pub fn is_value_type(&self) -> bool {
        self.is_struct() || self.is_enum() || self.is_simple() || self.is_nullable() || self.is_void()
    }

    pub fn is_reference_type(&self) -> bool {
        !self.is_unknown() && !self.is_value_type()
    }

    /// A reference type that is neither an array, an interface nor a delegate.
    pub fn is_class(&self) -> bool {
        self.is_reference_type() && !self.is_array() && !self.is_interface() && !self.is_delegate()
    }

    /// The identifier of this type with one more array suffix of `rank`.
    pub fn with_array_suffix(&self, rank: u32) -> String {
        let mut out = String::new();
        self.write_with(&mut out, Some(rank));
        out
    }

    fn write_full_name(&self, out: &mut String, extra_rank: Option<u32>) {
        out.push_str(&self.raw);
        if !self.generics.is_empty() {
            generics::write_list(&self.generics, out);
        }
        for &rank in self.arrays.iter().chain(extra_rank.as_ref()) {
            write_array_suffix(rank, out);
        }
    }

    fn write_with(&self, out: &mut String, extra_rank: Option<u32>) {
        if let Some(prefix) = self.kind.prefix() {
            out.push(prefix);
            out.push(':');
        }
        self.write_full_name(out, extra_rank);
        if let Some(assembly) = &self.assembly {
            out.push_str(", ");
            out.push_str(assembly.identifier());
        }
    }
}

fn write_array_suffix(rank: u32, out: &mut String) {
    out.push('[');
    for _ in 1..rank {
        out.push(',');
    }
    out.push(']');
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeName {}

impl Name for TypeName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        self.write_with(out, None);
    }
}

impl NameKind for TypeName {
    const KIND: Kind = Kind::Type;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<TypeName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, Self::unknown_value)
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let fail = |problem: Problem| -> NameResult<Self> {
            Err(NameError::new(Self::KIND, identifier, problem))
        };
        let text = identifier.trim();
        if text.is_empty() {
            return fail(Problem::Missing("type name"));
        }
        if find_top_level(text, TokenKind::Arrow)
            .for_name(Self::KIND, identifier)?
            .is_some()
        {
            return fail(Problem::Shape("`->` is only allowed inside generic arguments"));
        }

        let (head, assembly) = match find_top_level(text, TokenKind::Comma).for_name(Self::KIND, identifier)? {
            Some(comma) => (text[..comma.start].trim(), Some(&text[comma.end..])),
            None => (text, None),
        };

        let (kind, body) = match find_top_level(head, TokenKind::Colon).for_name(Self::KIND, identifier)? {
            Some(colon) => {
                let prefix = head[..colon.start].trim();
                match TypeKind::from_prefix(prefix) {
                    Some(kind) => (kind, head[colon.end..].trim_start()),
                    None => return fail(Problem::unsupported(format!("type prefix `{prefix}:`"))),
                }
            }
            None => (TypeKind::Unspecified, head),
        };

        let split = body.find('[').unwrap_or(body.len());
        let raw = bare_name(body[..split].trim_end(), "type name").for_name(Self::KIND, identifier)?;
        if raw.split('+').count() > MAX_NESTING_DEPTH {
            return fail(Problem::TooDeep {
                what: "nested types",
                limit: MAX_NESTING_DEPTH,
            });
        }
        let arity = raw_arity(raw).for_name(Self::KIND, identifier)?;

        let mut generic_list = None;
        let mut arrays = Vec::new();
        let mut cursor = Cursor::new(&body[split..]);
        loop {
            cursor.skip_whitespace();
            if cursor.is_empty() {
                break;
            }
            if cursor.peek() != Some('[') {
                return fail(Problem::trailing(cursor.rest()));
            }
            let group = cursor.group().for_name(Self::KIND, identifier)?;
            if group.starts_with('[') {
                if generic_list.is_some() || !arrays.is_empty() {
                    return fail(Problem::Shape("generic arguments must precede array suffixes"));
                }
                generic_list = Some(group);
            } else {
                arrays.push(array_rank(group).for_name(Self::KIND, identifier)?);
            }
        }
        if let Some(list) = generic_list {
            let found = split_top_level(list, TokenKind::Comma)
                .for_name(Self::KIND, identifier)?
                .len();
            if found != arity {
                return fail(Problem::ArityMismatch {
                    declared: arity,
                    found,
                });
            }
        }

        // nested names are resolved only once the outer shape is valid
        let generics = match generic_list {
            Some(list) => generics::parse_list(list, names, Self::KIND, identifier)?,
            None => Vec::new(),
        };
        let assembly = assembly.map(|text| names.assembly(text)).transpose()?;
        let namespace = names.namespace(namespace_of(raw))?;
        let declaring = match raw.rsplit_once('+') {
            Some((outer, _)) => Some(declaring_type(outer, &generics, assembly.as_ref(), names)?),
            None => None,
        };

        let mut name = Self {
            id: SmolStr::default(),
            kind,
            raw: raw.into(),
            arity,
            generics,
            arrays,
            assembly,
            namespace,
            declaring,
        };
        name.id = name.print().into();
        Ok(name)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.types
    }
}

/// Sum of the backtick arities in a raw name. Every nesting level must be
/// non-empty.
fn raw_arity(raw: &str) -> Result<usize, Problem> {
    let mut arity = 0;
    for segment in raw.split('+') {
        if segment.is_empty() || segment.ends_with('.') {
            return Err(Problem::Missing("nested type name"));
        }
        if let Some((_, count)) = segment.rsplit_once('`') {
            arity += non_negative(count)? as usize;
        }
    }
    Ok(arity)
}

/// Rank of an array suffix from the text between its brackets.
fn array_rank(group: &str) -> Result<u32, Problem> {
    let mut rank = 1;
    for c in group.chars() {
        match c {
            ',' => rank += 1,
            c if c.is_whitespace() => {}
            _ => return Err(Problem::Expected("array suffix or generic argument list")),
        }
    }
    Ok(rank)
}

/// The namespace part of the outermost segment; empty for the global namespace.
fn namespace_of(raw: &str) -> &str {
    let outermost = raw.split('+').next().unwrap_or(raw);
    outermost.rsplit_once('.').map_or("", |(namespace, _)| namespace)
}

fn declaring_type(
    outer: &str,
    generics: &[GenericBinding],
    assembly: Option<&Interned<AssemblyName>>,
    names: &Names,
) -> NameResult<Interned<TypeName>> {
    let mut id = String::from(outer);
    if !generics.is_empty() {
        // `outer` already validated as part of the full raw name
        let outer_arity = raw_arity(outer).unwrap_or(0);
        if let Some(carried) = generics.get(..outer_arity).filter(|g| !g.is_empty()) {
            generics::write_list(carried, &mut id);
        }
    }
    if let Some(assembly) = assembly {
        id.push_str(", ");
        id.push_str(assembly.identifier());
    }
    names.type_name(&id)
}
