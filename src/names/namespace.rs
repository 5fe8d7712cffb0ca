//! Namespace names.

use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::bare_name;
use crate::base::{Kind, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::pool::{Interned, NamePool, Names};

use super::{Name, NameKind};

/// Most segments a namespace path may have.
pub const MAX_NAMESPACE_DEPTH: usize = 1024;

/// A dot-separated namespace path.
///
/// `""` is the global namespace: it has no parent and is not unknown.
/// Every other namespace has a parent, which is the global namespace for
/// single-segment paths. `???` is the unknown namespace, distinct from the
/// global one.
#[derive(Debug, Clone)]
pub struct NamespaceName {
    id: SmolStr,
    name: SmolStr,
    parent: Option<Interned<NamespaceName>>,
}

impl NamespaceName {
    /// The process-wide global namespace (`""`).
    pub fn global() -> Interned<Self> {
        static GLOBAL: OnceLock<Interned<NamespaceName>> = OnceLock::new();
        Interned::singleton(&GLOBAL, || Self {
            id: SmolStr::default(),
            name: SmolStr::default(),
            parent: None,
        })
    }

    /// Last path segment; empty for the global namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enclosing namespace; `None` for the global and unknown namespaces.
    pub fn parent(&self) -> Option<&Interned<NamespaceName>> {
        self.parent.as_ref()
    }

    pub fn is_global(&self) -> bool {
        self.id.is_empty()
    }

    /// Path segments from the outermost namespace inwards.
    pub fn segments(&self) -> Vec<&str> {
        if self.is_global() || self.is_unknown() {
            return Vec::new();
        }
        self.id.split('.').collect()
    }
}

impl PartialEq for NamespaceName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NamespaceName {}

impl Name for NamespaceName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        if let Some(parent) = self.parent.as_ref().filter(|p| !p.is_global()) {
            out.push_str(parent.identifier());
            out.push('.');
        }
        out.push_str(&self.name);
    }
}

impl NameKind for NamespaceName {
    const KIND: Kind = Kind::Namespace;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<NamespaceName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, || Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            name: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            parent: None,
        })
    }

    fn sentinel(identifier: &str) -> Option<Interned<Self>> {
        match identifier {
            "" => Some(Self::global()),
            UNKNOWN_IDENTIFIER => Some(Self::unknown()),
            _ => None,
        }
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let segments = identifier
            .trim()
            .split('.')
            .map(|segment| bare_name(segment.trim(), "namespace segment"))
            .collect::<Result<Vec<_>, _>>()
            .for_name(Self::KIND, identifier)?;
        if segments.len() > MAX_NAMESPACE_DEPTH {
            return Err(Problem::TooDeep {
                what: "namespace",
                limit: MAX_NAMESPACE_DEPTH,
            })
            .for_name(Self::KIND, identifier);
        }
        let Some((name, enclosing)) = segments.split_last() else {
            return Err(Problem::Missing("namespace segment")).for_name(Self::KIND, identifier);
        };

        // enclosing namespaces, outermost first
        let pool = Self::pool(names);
        let mut parent = Self::global();
        let mut path = String::new();
        for segment in enclosing {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);
            parent = match pool.lookup(&path) {
                Some(cached) => cached,
                None => pool.intern(Self {
                    id: path.as_str().into(),
                    name: (*segment).into(),
                    parent: Some(parent),
                }),
            };
        }

        let mut namespace = Self {
            id: SmolStr::default(),
            name: (*name).into(),
            parent: Some(parent),
        };
        namespace.id = namespace.print().into();
        Ok(namespace)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.namespaces
    }
}
