//! Delegate names: the invocation signature of a delegate type.

use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::bare_name;
use crate::base::{Kind, NameResult, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::Cursor;
use crate::pool::{Interned, NamePool, Names};

use super::member::{self, Header, Member};
use super::{Name, NameKind, ParameterName, TypeName};

/// `[ReturnType] [DelegateType].Name(parameters)`
///
/// The name may be empty, as in `[R] [D].()`. Delegates take no modifiers.
#[derive(Debug, Clone)]
pub struct DelegateName {
    id: SmolStr,
    member: Member,
    parameters: Vec<Interned<ParameterName>>,
}

impl DelegateName {
    pub fn return_type(&self) -> &Interned<TypeName> {
        &self.member.value_type
    }

    /// The delegate type this signature belongs to.
    pub fn delegate_type(&self) -> &Interned<TypeName> {
        &self.member.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.member.name
    }

    pub fn parameters(&self) -> &[Interned<ParameterName>] {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Name and parameter list.
    pub fn signature(&self) -> String {
        let mut out = String::from(self.name());
        member::write_signature(&self.parameters, &mut out);
        out
    }
}

impl PartialEq for DelegateName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DelegateName {}

impl Name for DelegateName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        self.member.write_to(out);
        member::write_signature(&self.parameters, out);
    }
}

impl NameKind for DelegateName {
    const KIND: Kind = Kind::Delegate;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<DelegateName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            member: Member::unknown(),
            parameters: Vec::new(),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let header = Header::parse(identifier, &[], names, Self::KIND)?;
        let rest = header.rest;
        let split = rest.find('(').unwrap_or(rest.len());
        let name = rest[..split].trim_end();
        if !name.is_empty() {
            bare_name(name, "delegate name").for_name(Self::KIND, identifier)?;
        }
        let mut cursor = Cursor::new(&rest[split..]);
        let parameters = member::parse_signature(&mut cursor, names, Self::KIND, identifier)?;

        let mut delegate = Self {
            id: SmolStr::default(),
            member: Member::from_header(header, name),
            parameters,
        };
        delegate.id = delegate.print().into();
        Ok(delegate)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.delegates
    }
}
