//! Method names.

use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::{bare_name, non_negative};
use crate::base::{Kind, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::Cursor;
use crate::pool::{Interned, NamePool, Names};

use super::generics::{self, GenericBinding};
use super::member::{self, Header, Member, Modifier, member_accessors};
use super::{Name, NameKind, ParameterName, TypeName};

/// `[static] [ReturnType] [DeclaringType].Name[`N[[T]...]](parameters)`
///
/// Constructors are named `.ctor` (instance) and `.cctor` (static).
#[derive(Debug, Clone)]
pub struct MethodName {
    id: SmolStr,
    member: Member,
    generics: Vec<GenericBinding>,
    parameters: Vec<Interned<ParameterName>>,
}

member_accessors!(MethodName);

impl MethodName {
    pub fn return_type(&self) -> &Interned<TypeName> {
        &self.member.value_type
    }

    /// The simple name without generic arity.
    pub fn simple_name(&self) -> &str {
        let name = self.member.name.as_str();
        name.split_once('`').map_or(name, |(simple, _)| simple)
    }

    /// Name, type parameters and parameter list:
    /// `M`1[[T]]([T] p)`.
    pub fn signature(&self) -> String {
        let mut out = String::new();
        self.write_signature(&mut out);
        out
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.simple_name(), ".ctor" | ".cctor")
    }

    pub fn parameters(&self) -> &[Interned<ParameterName>] {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn type_parameters(&self) -> &[GenericBinding] {
        &self.generics
    }

    pub fn has_type_parameters(&self) -> bool {
        !self.generics.is_empty()
    }

    fn write_signature(&self, out: &mut String) {
        out.push_str(&self.member.name);
        if !self.generics.is_empty() {
            generics::write_list(&self.generics, out);
        }
        member::write_signature(&self.parameters, out);
    }
}

impl Name for MethodName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        member::write_header(
            &self.member.modifiers,
            &self.member.value_type,
            &self.member.declaring_type,
            out,
        );
        self.write_signature(out);
    }
}

impl NameKind for MethodName {
    const KIND: Kind = Kind::Method;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<MethodName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            member: Member::unknown(),
            generics: Vec::new(),
            parameters: Vec::new(),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let header = Header::parse(identifier, &[Modifier::Static], names, Self::KIND)?;
        let rest = header.rest;
        let split = rest.find(['[', '(']).unwrap_or(rest.len());
        let name = bare_name(rest[..split].trim_end(), "method name").for_name(Self::KIND, identifier)?;

        let mut cursor = Cursor::new(&rest[split..]);
        let generics = if cursor.peek() == Some('[') {
            let list = cursor.group().for_name(Self::KIND, identifier)?;
            if !list.starts_with('[') {
                return Err(Problem::Expected("generic argument list")).for_name(Self::KIND, identifier);
            }
            generics::parse_list(list, names, Self::KIND, identifier)?
        } else {
            Vec::new()
        };
        let parameters = member::parse_signature(&mut cursor, names, Self::KIND, identifier)?;

        let declared = match name.rsplit_once('`') {
            Some((_, arity)) => non_negative(arity).for_name(Self::KIND, identifier)? as usize,
            None => 0,
        };
        // an omitted list is allowed, a written one must match the arity
        if !generics.is_empty() && generics.len() != declared {
            return Err(Problem::ArityMismatch {
                declared,
                found: generics.len(),
            })
            .for_name(Self::KIND, identifier);
        }

        let mut method = Self {
            id: SmolStr::default(),
            member: Member::from_header(header, name),
            generics,
            parameters,
        };
        method.id = method.print().into();
        Ok(method)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.methods
    }
}
