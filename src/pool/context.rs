//! The injected naming context: one pool per kind plus configuration.

use tracing::debug;

use crate::base::{Kind, NameError, NameResult, Problem, ProblemContext};
use crate::names::{
    AnyName, AssemblyName, AssemblyVersion, DelegateName, EventName, FieldName,
    LocalVariableName, MethodName, Name, NameKind, NamespaceName, ParameterName, PropertyName,
    TypeName,
};

use super::interned::Interned;
use super::pool::NamePool;

/// Tunables for a [`Names`] context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NamesConfig {
    /// Number of independently locked shards per pool (at least 1).
    pub shards: usize,
    /// Cache non-canonical spellings so repeated requests skip parsing.
    pub remember_aliases: bool,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            shards: 16,
            remember_aliases: true,
        }
    }
}

impl NamesConfig {
    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards.max(1);
        self
    }

    pub fn with_aliases(mut self, remember: bool) -> Self {
        self.remember_aliases = remember;
        self
    }
}

/// Canonicalizing factory for every kind of name.
///
/// Construct one per process (or per test) and pass it to whatever needs
/// to create names. All methods take `&self` and are safe to call from any
/// number of threads.
///
/// ```
/// use namekit::Names;
///
/// let names = Names::new();
/// let a = names.type_name("System.Int32, mscorlib, 4.0.0.0").unwrap();
/// let b = names.type_name("System.Int32,mscorlib,4.0.0.0").unwrap();
/// assert!(namekit::Interned::ptr_eq(&a, &b));
/// ```
pub struct Names {
    config: NamesConfig,
    pub(crate) versions: NamePool<AssemblyVersion>,
    pub(crate) assemblies: NamePool<AssemblyName>,
    pub(crate) namespaces: NamePool<NamespaceName>,
    pub(crate) types: NamePool<TypeName>,
    pub(crate) methods: NamePool<MethodName>,
    pub(crate) fields: NamePool<FieldName>,
    pub(crate) properties: NamePool<PropertyName>,
    pub(crate) events: NamePool<EventName>,
    pub(crate) parameters: NamePool<ParameterName>,
    pub(crate) delegates: NamePool<DelegateName>,
    pub(crate) locals: NamePool<LocalVariableName>,
}

impl Default for Names {
    fn default() -> Self {
        Self::new()
    }
}

impl Names {
    pub fn new() -> Self {
        Self::with_config(NamesConfig::default())
    }

    pub fn with_config(config: NamesConfig) -> Self {
        debug!(shards = config.shards, remember_aliases = config.remember_aliases, "creating name pools");
        Self {
            versions: NamePool::new(&config),
            assemblies: NamePool::new(&config),
            namespaces: NamePool::new(&config),
            types: NamePool::new(&config),
            methods: NamePool::new(&config),
            fields: NamePool::new(&config),
            properties: NamePool::new(&config),
            events: NamePool::new(&config),
            parameters: NamePool::new(&config),
            delegates: NamePool::new(&config),
            locals: NamePool::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &NamesConfig {
        &self.config
    }

    /// Canonical instance of any kind.
    pub fn get<T: NameKind>(&self, identifier: &str) -> NameResult<Interned<T>> {
        T::pool(self).get_or_create(identifier, self)
    }

    /// The pool backing kind `T`.
    pub fn pool<T: NameKind>(&self) -> &NamePool<T> {
        T::pool(self)
    }

    pub fn assembly_version(&self, identifier: &str) -> NameResult<Interned<AssemblyVersion>> {
        self.get(identifier)
    }

    pub fn assembly(&self, identifier: &str) -> NameResult<Interned<AssemblyName>> {
        self.get(identifier)
    }

    pub fn namespace(&self, identifier: &str) -> NameResult<Interned<NamespaceName>> {
        self.get(identifier)
    }

    pub fn type_name(&self, identifier: &str) -> NameResult<Interned<TypeName>> {
        self.get(identifier)
    }

    pub fn method(&self, identifier: &str) -> NameResult<Interned<MethodName>> {
        self.get(identifier)
    }

    pub fn field(&self, identifier: &str) -> NameResult<Interned<FieldName>> {
        self.get(identifier)
    }

    pub fn property(&self, identifier: &str) -> NameResult<Interned<PropertyName>> {
        self.get(identifier)
    }

    pub fn event(&self, identifier: &str) -> NameResult<Interned<EventName>> {
        self.get(identifier)
    }

    pub fn parameter(&self, identifier: &str) -> NameResult<Interned<ParameterName>> {
        self.get(identifier)
    }

    pub fn delegate(&self, identifier: &str) -> NameResult<Interned<DelegateName>> {
        self.get(identifier)
    }

    pub fn local_variable(&self, identifier: &str) -> NameResult<Interned<LocalVariableName>> {
        self.get(identifier)
    }

    /// Canonical instance of a kind chosen at runtime.
    pub fn get_any(&self, kind: Kind, identifier: &str) -> NameResult<AnyName> {
        Ok(match kind {
            Kind::AssemblyVersion => AnyName::AssemblyVersion(self.get(identifier)?),
            Kind::Assembly => AnyName::Assembly(self.get(identifier)?),
            Kind::Namespace => AnyName::Namespace(self.get(identifier)?),
            Kind::Type => AnyName::Type(self.get(identifier)?),
            Kind::Method => AnyName::Method(self.get(identifier)?),
            Kind::Field => AnyName::Field(self.get(identifier)?),
            Kind::Property => AnyName::Property(self.get(identifier)?),
            Kind::Event => AnyName::Event(self.get(identifier)?),
            Kind::Parameter => AnyName::Parameter(self.get(identifier)?),
            Kind::Delegate => AnyName::Delegate(self.get(identifier)?),
            Kind::LocalVariable => AnyName::LocalVariable(self.get(identifier)?),
        })
    }

    /// Parse the persisted `<tag>:<identifier>` form produced by
    /// [`AnyName::to_tagged`].
    pub fn parse_tagged(&self, tagged: &str) -> NameResult<AnyName> {
        let Some((tag, identifier)) = tagged.split_once(':') else {
            return Err(NameError::UnknownTag {
                tag: tagged.to_string(),
            });
        };
        let kind = Kind::from_tag(tag.trim()).ok_or_else(|| NameError::UnknownTag {
            tag: tag.to_string(),
        })?;
        self.get_any(kind, identifier)
    }

    /// Array type of `rank` over `base`, e.g. rank 2 over `T, A` is `T[,], A`.
    ///
    /// The new suffix is appended after any existing ones, so deriving from
    /// an array type yields a jagged array.
    pub fn derive_array_type(
        &self,
        base: &Interned<TypeName>,
        rank: u32,
    ) -> NameResult<Interned<TypeName>> {
        if rank == 0 {
            return Err(Problem::Shape("array rank must be at least 1"))
                .for_name(Kind::Type, base.identifier());
        }
        if base.is_unknown() {
            return Err(Problem::Shape("cannot derive an array of the unknown type"))
                .for_name(Kind::Type, base.identifier());
        }
        self.type_name(&base.with_array_suffix(rank))
    }

    /// Number of distinct instances across all pools.
    pub fn len(&self) -> usize {
        self.versions.len()
            + self.assemblies.len()
            + self.namespaces.len()
            + self.types.len()
            + self.methods.len()
            + self.fields.len()
            + self.properties.len()
            + self.events.len()
            + self.parameters.len()
            + self.delegates.len()
            + self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = NamesConfig::default();
        assert_eq!(config.shards, 16);
        assert!(config.remember_aliases);
        assert_eq!(NamesConfig::default().with_shards(0).shards, 1);
    }

    #[test]
    fn test_parse_tagged() {
        let names = Names::new();
        let name = names
            .parse_tagged("CSharp.AssemblyName:mscorlib, 4.0.0.0")
            .unwrap();
        assert_eq!(name.kind(), Kind::Assembly);
        assert_eq!(name.identifier(), "mscorlib, 4.0.0.0");
        assert_eq!(name.to_tagged(), "CSharp.AssemblyName:mscorlib, 4.0.0.0");
    }

    #[test]
    fn test_parse_tagged_type_keeps_inner_colons() {
        let names = Names::new();
        let name = names.parse_tagged("CSharp.TypeName:e:N.Color, A, 1.0.0.0").unwrap();
        assert_eq!(name.identifier(), "e:N.Color, A, 1.0.0.0");
    }

    #[test]
    fn test_parse_tagged_unknown_tag() {
        let names = Names::new();
        let error = names.parse_tagged("CSharp.LambdaName:[?] ()").unwrap_err();
        assert!(error.is_unsupported());
        assert_eq!(error.kind(), None);
        assert!(names.parse_tagged("no tag here").unwrap_err().is_unsupported());
    }

    #[test]
    fn test_derive_array_type() {
        let names = Names::new();
        let base = names.type_name("SomeType, Assembly, 1.2.3.4").unwrap();
        let array = names.derive_array_type(&base, 2).unwrap();
        assert_eq!(array.identifier(), "SomeType[,], Assembly, 1.2.3.4");
        assert_eq!(array.array_ranks(), &[2]);
        assert!(names.derive_array_type(&base, 0).is_err());
    }

    #[test]
    fn test_len_counts_nested_names() {
        let names = Names::new();
        assert!(names.is_empty());
        names.type_name("T, A, 1.2.3.4").unwrap();
        // type, assembly, version
        assert_eq!(names.len(), 3);
    }
}
