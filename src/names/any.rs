//! A name of any kind, for callers that pick the kind at runtime.

use crate::base::Kind;
use crate::pool::Interned;

use super::{
    AssemblyName, AssemblyVersion, DelegateName, EventName, FieldName, LocalVariableName,
    MethodName, Name, NamespaceName, ParameterName, PropertyName, TypeName,
};

/// Closed union over every name kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyName {
    AssemblyVersion(Interned<AssemblyVersion>),
    Assembly(Interned<AssemblyName>),
    Namespace(Interned<NamespaceName>),
    Type(Interned<TypeName>),
    Method(Interned<MethodName>),
    Field(Interned<FieldName>),
    Property(Interned<PropertyName>),
    Event(Interned<EventName>),
    Parameter(Interned<ParameterName>),
    Delegate(Interned<DelegateName>),
    LocalVariable(Interned<LocalVariableName>),
}

macro_rules! dispatch {
    ($value:expr, $name:ident => $body:expr) => {
        match $value {
            AnyName::AssemblyVersion($name) => $body,
            AnyName::Assembly($name) => $body,
            AnyName::Namespace($name) => $body,
            AnyName::Type($name) => $body,
            AnyName::Method($name) => $body,
            AnyName::Field($name) => $body,
            AnyName::Property($name) => $body,
            AnyName::Event($name) => $body,
            AnyName::Parameter($name) => $body,
            AnyName::Delegate($name) => $body,
            AnyName::LocalVariable($name) => $body,
        }
    };
}

impl AnyName {
    pub fn kind(&self) -> Kind {
        match self {
            AnyName::AssemblyVersion(_) => Kind::AssemblyVersion,
            AnyName::Assembly(_) => Kind::Assembly,
            AnyName::Namespace(_) => Kind::Namespace,
            AnyName::Type(_) => Kind::Type,
            AnyName::Method(_) => Kind::Method,
            AnyName::Field(_) => Kind::Field,
            AnyName::Property(_) => Kind::Property,
            AnyName::Event(_) => Kind::Event,
            AnyName::Parameter(_) => Kind::Parameter,
            AnyName::Delegate(_) => Kind::Delegate,
            AnyName::LocalVariable(_) => Kind::LocalVariable,
        }
    }

    /// `<tag>:<identifier>`, readable by [`crate::Names::parse_tagged`].
    pub fn to_tagged(&self) -> String {
        format!("{}:{}", self.kind().tag(), self.identifier())
    }

    pub fn as_type(&self) -> Option<&Interned<TypeName>> {
        match self {
            AnyName::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Interned<MethodName>> {
        match self {
            AnyName::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl Name for AnyName {
    fn identifier(&self) -> &str {
        dispatch!(self, name => name.identifier())
    }

    fn is_unknown(&self) -> bool {
        dispatch!(self, name => name.is_unknown())
    }

    fn write_to(&self, out: &mut String) {
        dispatch!(self, name => name.write_to(out))
    }
}

impl std::fmt::Display for AnyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<Interned<$ty>> for AnyName {
                fn from(name: Interned<$ty>) -> Self {
                    AnyName::$variant(name)
                }
            }
        )*
    };
}

impl_from!(
    AssemblyVersion(AssemblyVersion),
    Assembly(AssemblyName),
    Namespace(NamespaceName),
    Type(TypeName),
    Method(MethodName),
    Field(FieldName),
    Property(PropertyName),
    Event(EventName),
    Parameter(ParameterName),
    Delegate(DelegateName),
    LocalVariable(LocalVariableName),
);

/// Persists in the tagged form so the kind survives a round trip.
#[cfg(feature = "serde")]
impl serde::Serialize for AnyName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_tagged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameKind;
    use crate::pool::Names;

    #[test]
    fn test_dispatch() {
        let names = Names::new();
        let any: AnyName = names.type_name("T, A, 1.2.3.4").unwrap().into();
        assert_eq!(any.kind(), Kind::Type);
        assert_eq!(any.identifier(), "T, A, 1.2.3.4");
        assert_eq!(any.print(), "T, A, 1.2.3.4");
        assert!(any.as_type().is_some());
        assert!(any.as_method().is_none());
        assert_eq!(any.to_string(), "T, A, 1.2.3.4");
    }

    #[test]
    fn test_unknown_of_every_kind() {
        let unknowns: Vec<AnyName> = vec![
            AssemblyVersion::unknown().into(),
            AssemblyName::unknown().into(),
            NamespaceName::unknown().into(),
            TypeName::unknown().into(),
            MethodName::unknown().into(),
            FieldName::unknown().into(),
            PropertyName::unknown().into(),
            EventName::unknown().into(),
            ParameterName::unknown().into(),
            DelegateName::unknown().into(),
            LocalVariableName::unknown().into(),
        ];
        for unknown in unknowns {
            assert!(unknown.is_unknown(), "{:?}", unknown.kind());
            assert_eq!(unknown.identifier(), "???");
        }
    }

    #[test]
    fn test_tagged_round_trip() {
        let names = Names::new();
        let any: AnyName = names.field("[T] [D].f").unwrap().into();
        let tagged = any.to_tagged();
        assert_eq!(tagged, "CSharp.FieldName:[T] [D].f");
        assert_eq!(names.parse_tagged(&tagged).unwrap(), any);
    }
}
