//! Field, event and property names.

use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::bare_name;
use crate::base::{Kind, NameResult, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::Cursor;
use crate::pool::{Interned, NamePool, Names};

use super::member::{self, Header, Member, Modifier, member_accessors};
use super::{Name, NameKind, ParameterName};

/// `[static] [ValueType] [DeclaringType].name`
#[derive(Debug, Clone)]
pub struct FieldName {
    id: SmolStr,
    member: Member,
}

member_accessors!(FieldName);

impl Name for FieldName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        self.member.write_to(out);
    }
}

impl NameKind for FieldName {
    const KIND: Kind = Kind::Field;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<FieldName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            member: Member::unknown(),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let header = Header::parse(identifier, &[Modifier::Static], names, Self::KIND)?;
        let name = bare_name(header.rest, "field name").for_name(Self::KIND, identifier)?;
        let mut field = Self {
            id: SmolStr::default(),
            member: Member::from_header(header, name),
        };
        field.id = field.print().into();
        Ok(field)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.fields
    }
}

/// `[static] [HandlerType] [DeclaringType].name`
#[derive(Debug, Clone)]
pub struct EventName {
    id: SmolStr,
    member: Member,
}

member_accessors!(EventName);

impl EventName {
    /// The delegate type of the event's handlers.
    pub fn handler_type(&self) -> &Interned<super::TypeName> {
        &self.member.value_type
    }
}

impl Name for EventName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        self.member.write_to(out);
    }
}

impl NameKind for EventName {
    const KIND: Kind = Kind::Event;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<EventName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            member: Member::unknown(),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let header = Header::parse(identifier, &[Modifier::Static], names, Self::KIND)?;
        let name = bare_name(header.rest, "event name").for_name(Self::KIND, identifier)?;
        let mut event = Self {
            id: SmolStr::default(),
            member: Member::from_header(header, name),
        };
        event.id = event.print().into();
        Ok(event)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.events
    }
}

/// `[static] [get] [set] [ValueType] [DeclaringType].name[(parameters)]`
///
/// A parameter list marks an indexer.
#[derive(Debug, Clone)]
pub struct PropertyName {
    id: SmolStr,
    member: Member,
    parameters: Option<Vec<Interned<ParameterName>>>,
}

member_accessors!(PropertyName);

impl PropertyName {
    pub fn has_getter(&self) -> bool {
        self.member.has(Modifier::Get)
    }

    pub fn has_setter(&self) -> bool {
        self.member.has(Modifier::Set)
    }

    pub fn is_indexer(&self) -> bool {
        self.parameters.is_some()
    }

    /// Indexer parameters; empty for plain properties.
    pub fn parameters(&self) -> &[Interned<ParameterName>] {
        self.parameters.as_deref().unwrap_or_default()
    }
}

impl Name for PropertyName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        self.member.write_to(out);
        if let Some(parameters) = &self.parameters {
            member::write_signature(parameters, out);
        }
    }
}

impl NameKind for PropertyName {
    const KIND: Kind = Kind::Property;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<PropertyName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            member: Member::unknown(),
            parameters: None,
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let header = Header::parse(
            identifier,
            &[Modifier::Static, Modifier::Get, Modifier::Set],
            names,
            Self::KIND,
        )?;
        let rest = header.rest;
        let split = rest.find('(').unwrap_or(rest.len());
        let name = bare_name(rest[..split].trim_end(), "property name").for_name(Self::KIND, identifier)?;
        let parameters = if split < rest.len() {
            let mut cursor = Cursor::new(&rest[split..]);
            Some(member::parse_signature(&mut cursor, names, Self::KIND, identifier)?)
        } else {
            None
        };

        let mut property = Self {
            id: SmolStr::default(),
            member: Member::from_header(header, name),
            parameters,
        };
        property.id = property.print().into();
        Ok(property)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.properties
    }
}
