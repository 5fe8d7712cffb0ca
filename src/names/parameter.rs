//! Parameter and local variable names: a bracketed type and a simple name.

use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::bare_name;
use crate::base::{Kind, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::{Cursor, check_balanced};
use crate::pool::{Interned, NamePool, Names};

use super::member::{self, Modifier};
use super::{Name, NameKind, TypeName};

const PARAMETER_MODIFIERS: &[Modifier] = &[
    Modifier::This,
    Modifier::Params,
    Modifier::Opt,
    Modifier::Out,
    Modifier::Ref,
];

/// `modifiers [ValueType] name`
struct Typed<'a> {
    modifiers: Vec<Modifier>,
    value_type: Interned<TypeName>,
    name: &'a str,
}

impl<'a> Typed<'a> {
    fn parse(
        identifier: &'a str,
        allowed: &[Modifier],
        names: &Names,
        kind: Kind,
        what: &'static str,
    ) -> NameResult<Self> {
        let text = identifier.trim();
        if text.is_empty() {
            return Err(Problem::Missing(what)).for_name(kind, identifier);
        }
        check_balanced(text).for_name(kind, identifier)?;

        let mut cursor = Cursor::new(text);
        let modifiers = member::parse_modifiers(&mut cursor, allowed).for_name(kind, identifier)?;
        let value_type = member::bracketed_type(&mut cursor, "value type", names, kind, identifier)?;
        let name = bare_name(cursor.take_rest().trim(), what).for_name(kind, identifier)?;
        Ok(Self {
            modifiers,
            value_type,
            name,
        })
    }
}

fn write_typed(modifiers: &[Modifier], value_type: &TypeName, name: &str, out: &mut String) {
    member::write_modifiers(modifiers, out);
    member::write_bracketed(value_type, out);
    out.push(' ');
    out.push_str(name);
}

/// A method, property or delegate parameter.
#[derive(Debug, Clone)]
pub struct ParameterName {
    id: SmolStr,
    modifiers: Vec<Modifier>,
    value_type: Interned<TypeName>,
    name: SmolStr,
}

impl ParameterName {
    pub fn value_type(&self) -> &Interned<TypeName> {
        &self.value_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Modifiers in the order they were written.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// `out`
    pub fn is_output(&self) -> bool {
        self.modifiers.contains(&Modifier::Out)
    }

    /// `ref`
    pub fn is_passed_by_reference(&self) -> bool {
        self.modifiers.contains(&Modifier::Ref)
    }

    /// `opt`
    pub fn is_optional(&self) -> bool {
        self.modifiers.contains(&Modifier::Opt)
    }

    /// `params`
    pub fn is_parameter_array(&self) -> bool {
        self.modifiers.contains(&Modifier::Params)
    }

    /// `this`: the receiver of an extension method.
    pub fn is_extension_method_parameter(&self) -> bool {
        self.modifiers.contains(&Modifier::This)
    }
}

impl PartialEq for ParameterName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParameterName {}

impl Name for ParameterName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        write_typed(&self.modifiers, &self.value_type, &self.name, out);
    }
}

impl NameKind for ParameterName {
    const KIND: Kind = Kind::Parameter;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<ParameterName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            modifiers: Vec::new(),
            value_type: TypeName::unknown(),
            name: SmolStr::new_static(UNKNOWN_IDENTIFIER),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let typed = Typed::parse(identifier, PARAMETER_MODIFIERS, names, Self::KIND, "parameter name")?;
        let mut parameter = Self {
            id: SmolStr::default(),
            modifiers: typed.modifiers,
            value_type: typed.value_type,
            name: typed.name.into(),
        };
        parameter.id = parameter.print().into();
        Ok(parameter)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.parameters
    }
}

/// A local variable declared in a method body.
#[derive(Debug, Clone)]
pub struct LocalVariableName {
    id: SmolStr,
    value_type: Interned<TypeName>,
    name: SmolStr,
}

impl LocalVariableName {
    pub fn value_type(&self) -> &Interned<TypeName> {
        &self.value_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for LocalVariableName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LocalVariableName {}

impl Name for LocalVariableName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        write_typed(&[], &self.value_type, &self.name, out);
    }
}

impl NameKind for LocalVariableName {
    const KIND: Kind = Kind::LocalVariable;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<LocalVariableName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            value_type: TypeName::unknown(),
            name: SmolStr::new_static(UNKNOWN_IDENTIFIER),
        })
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let typed = Typed::parse(identifier, &[], names, Self::KIND, "variable name")?;
        let mut local = Self {
            id: SmolStr::default(),
            value_type: typed.value_type,
            name: typed.name.into(),
        };
        local.id = local.print().into();
        Ok(local)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.locals
    }
}
