//! # namekit-base
//!
//! Canonical, interned identifiers for code entities: assemblies, namespaces,
//! types, members, parameters and local variables.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pool      → Names context, per-kind pools, Interned handles
//!   ↓
//! names     → One parse/print pair per kind, AnyName
//!   ↓
//! parser    → Logos lexer, nesting-aware scanner
//!   ↓
//! base      → Kind, NameError/Problem, character validation
//! ```
//!
//! ## Example
//!
//! ```
//! use namekit::{Name, Names};
//!
//! let names = Names::new();
//! let nullable = names
//!     .type_name("System.Nullable`1[[T -> System.Int32, mscore, 4.0.0.0]], mscore, 4.0.0.0")
//!     .unwrap();
//! assert_eq!(nullable.type_parameters()[0].formal(), "T");
//! assert!(nullable.is_nullable());
//! assert_eq!(nullable.print(), nullable.identifier());
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → names → pool)
// ============================================================================

/// Foundation types: name kinds, errors, character validation
pub mod base;

/// Parser: Logos lexer and nesting-aware scanning
pub mod parser;

/// Name variants and their parse/print pairs
pub mod names;

/// Canonicalization pools and the injected naming context
pub mod pool;

// Re-export foundation types
pub use base::{Kind, NameError, NameResult, Problem, UNKNOWN_IDENTIFIER};

// Re-export name variants
pub use names::{
    AnyName, AssemblyName, AssemblyVersion, DelegateName, EventName, FieldName, GenericBinding,
    LocalVariableName, MethodName, Modifier, Name, NameKind, NamespaceName, ParameterName,
    PropertyName, TypeKind, TypeName,
};

// Re-export pooling
pub use pool::{Interned, NamePool, Names, NamesConfig};
