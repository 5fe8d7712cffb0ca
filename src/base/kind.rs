//! Kind tags for the name variants.

use std::fmt;

/// Identifies which variant of name an identifier belongs to.
///
/// Used in error messages, log fields and the tagged persistence form
/// (`CSharp.TypeName:System.Int32, mscorlib, 4.0.0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    AssemblyVersion,
    Assembly,
    Namespace,
    Type,
    Method,
    Field,
    Property,
    Event,
    Parameter,
    Delegate,
    LocalVariable,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 11] = [
        Kind::AssemblyVersion,
        Kind::Assembly,
        Kind::Namespace,
        Kind::Type,
        Kind::Method,
        Kind::Field,
        Kind::Property,
        Kind::Event,
        Kind::Parameter,
        Kind::Delegate,
        Kind::LocalVariable,
    ];

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::AssemblyVersion => "assembly version",
            Kind::Assembly => "assembly",
            Kind::Namespace => "namespace",
            Kind::Type => "type",
            Kind::Method => "method",
            Kind::Field => "field",
            Kind::Property => "property",
            Kind::Event => "event",
            Kind::Parameter => "parameter",
            Kind::Delegate => "delegate",
            Kind::LocalVariable => "local variable",
        }
    }

    /// Tag used by the persisted `<tag>:<identifier>` form.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::AssemblyVersion => "CSharp.AssemblyVersion",
            Kind::Assembly => "CSharp.AssemblyName",
            Kind::Namespace => "CSharp.NamespaceName",
            Kind::Type => "CSharp.TypeName",
            Kind::Method => "CSharp.MethodName",
            Kind::Field => "CSharp.FieldName",
            Kind::Property => "CSharp.PropertyName",
            Kind::Event => "CSharp.EventName",
            Kind::Parameter => "CSharp.ParameterName",
            Kind::Delegate => "CSharp.DelegateName",
            Kind::LocalVariable => "CSharp.LocalVariableName",
        }
    }

    /// Reverse lookup of [`Kind::tag`].
    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
