//! Name variants: one parse/print pair per kind of code entity.
//!
//! ## Kinds
//!
//! ```text
//! AssemblyVersion   1.2.3.4
//! AssemblyName      mscorlib, 4.0.0.0
//! NamespaceName     System.Collections
//! TypeName          System.Nullable`1[[T -> System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0
//! MethodName        static [R, A] [D, A].M`1[[T]]([T] p)
//! FieldName         [V, A] [D, A]._field
//! PropertyName      get set [V, A] [D, A].P
//! EventName         [H, A] [D, A].Changed
//! DelegateName      [R, A] [D, A].Invoke([P, A] p)
//! ParameterName     out [P, A] p
//! LocalVariableName [V, A] v
//! ```
//!
//! Every kind exposes the same minimal contract through [`Name`] and is
//! created only through the pools of a [`Names`] context, which calls
//! [`NameKind::parse`] on first request. Recursive positions (generic
//! arguments, value and declaring types, parameters) are themselves
//! resolved through the pools, so nested names are shared too.

mod any;
mod assembly;
mod delegate;
mod generics;
mod member;
mod members;
mod method;
mod namespace;
mod parameter;
mod types;

pub use any::AnyName;
pub use assembly::{AssemblyName, AssemblyVersion};
pub use delegate::DelegateName;
pub use generics::GenericBinding;
pub use member::Modifier;
pub use members::{EventName, FieldName, PropertyName};
pub use method::MethodName;
pub use namespace::{MAX_NAMESPACE_DEPTH, NamespaceName};
pub use parameter::{LocalVariableName, ParameterName};
pub use types::{TypeKind, TypeName};

use crate::base::{Kind, NameResult, UNKNOWN_IDENTIFIER};
use crate::pool::{Interned, NamePool, Names};

/// Contract shared by every name variant.
pub trait Name {
    /// The canonical identifier.
    fn identifier(&self) -> &str;

    /// True only for the kind's unknown sentinel.
    fn is_unknown(&self) -> bool;

    /// Append the printed form, computed from parsed fields.
    fn write_to(&self, out: &mut String);

    /// The printed form. Always equal to [`Name::identifier`].
    fn print(&self) -> String {
        if self.is_unknown() {
            return UNKNOWN_IDENTIFIER.to_string();
        }
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// A name variant that can be parsed and pooled.
pub trait NameKind: Name + Sized + Send + Sync + 'static {
    const KIND: Kind;

    /// The process-wide unknown instance (`???`).
    fn unknown() -> Interned<Self>;

    /// Fixed instances answered without parsing or caching. `identifier` is
    /// already trimmed.
    fn sentinel(identifier: &str) -> Option<Interned<Self>> {
        (identifier == UNKNOWN_IDENTIFIER).then(Self::unknown)
    }

    /// Validate and decompose `identifier`.
    fn parse(identifier: &str, names: &Names) -> NameResult<Self>;

    /// The pool for this kind inside `names`.
    fn pool(names: &Names) -> &NamePool<Self>;
}
