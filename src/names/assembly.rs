//! Assembly names and versions.
//!
//! Both are opaque labels: nothing here loads or verifies an assembly.

use std::cmp::Ordering;
use std::sync::OnceLock;

use smol_str::SmolStr;

use crate::base::validate::{bare_name, non_negative};
use crate::base::{Kind, NameResult, Problem, ProblemContext, UNKNOWN_IDENTIFIER};
use crate::parser::{TokenKind, split_top_level};
use crate::pool::{Interned, NamePool, Names};

use super::{Name, NameKind};

/// A four-part version such as `4.0.0.0`, or unknown (`???`).
///
/// Known versions are ordered component-wise, major first. The unknown
/// version equals only itself and is unordered against known versions.
#[derive(Debug, Clone)]
pub struct AssemblyVersion {
    id: SmolStr,
    parts: Option<[u32; 4]>,
}

impl AssemblyVersion {
    fn unknown_value() -> Self {
        Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            parts: None,
        }
    }

    /// `[major, minor, build, revision]`, `None` when unknown.
    pub fn parts(&self) -> Option<[u32; 4]> {
        self.parts
    }

    pub fn major(&self) -> Option<u32> {
        self.parts.map(|p| p[0])
    }

    pub fn minor(&self) -> Option<u32> {
        self.parts.map(|p| p[1])
    }

    pub fn build(&self) -> Option<u32> {
        self.parts.map(|p| p[2])
    }

    pub fn revision(&self) -> Option<u32> {
        self.parts.map(|p| p[3])
    }
}

impl PartialEq for AssemblyVersion {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for AssemblyVersion {}

impl PartialOrd for AssemblyVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.parts, other.parts) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Name for AssemblyVersion {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.parts.is_none()
    }

    fn write_to(&self, out: &mut String) {
        match self.parts {
            Some([major, minor, build, revision]) => {
                out.push_str(&format!("{major}.{minor}.{build}.{revision}"))
            }
            None => out.push_str(UNKNOWN_IDENTIFIER),
        }
    }
}

impl NameKind for AssemblyVersion {
    const KIND: Kind = Kind::AssemblyVersion;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<AssemblyVersion>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, Self::unknown_value)
    }

    fn parse(identifier: &str, _names: &Names) -> NameResult<Self> {
        let parts = parse_version_parts(identifier.trim()).for_name(Self::KIND, identifier)?;
        let mut version = Self {
            id: SmolStr::default(),
            parts: Some(parts),
        };
        version.id = version.print().into();
        Ok(version)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.versions
    }
}

fn parse_version_parts(text: &str) -> Result<[u32; 4], Problem> {
    if text.is_empty() {
        return Err(Problem::Missing("version"));
    }
    let pieces: Vec<&str> = text.split('.').map(str::trim).collect();
    let [major, minor, build, revision] = pieces[..] else {
        return Err(Problem::DelimiterCount {
            delimiter: '.',
            expected: "4",
            found: pieces.len(),
        });
    };
    Ok([
        non_negative(major)?,
        non_negative(minor)?,
        non_negative(build)?,
        non_negative(revision)?,
    ])
}

/// An assembly reference: a bare name with an optional version.
///
/// A reference without a version is assumed to be a project of the same
/// solution rather than a compiled library; see
/// [`AssemblyName::is_local_project`].
#[derive(Debug, Clone)]
pub struct AssemblyName {
    id: SmolStr,
    name: SmolStr,
    version: Option<Interned<AssemblyVersion>>,
}

impl AssemblyName {
    fn unknown_value() -> Self {
        Self {
            id: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            name: SmolStr::new_static(UNKNOWN_IDENTIFIER),
            version: None,
        }
    }

    /// The bare assembly name, e.g. `mscorlib`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version, or the unknown version when none was given.
    pub fn version(&self) -> Interned<AssemblyVersion> {
        self.version.clone().unwrap_or_else(AssemblyVersion::unknown)
    }

    /// True iff the identifier carries no version suffix.
    pub fn is_local_project(&self) -> bool {
        self.version.is_none() && !self.is_unknown()
    }
}

impl PartialEq for AssemblyName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssemblyName {}

impl Name for AssemblyName {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_IDENTIFIER
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&self.name);
        if let Some(version) = &self.version {
            out.push_str(", ");
            out.push_str(version.identifier());
        }
    }
}

impl NameKind for AssemblyName {
    const KIND: Kind = Kind::Assembly;

    fn unknown() -> Interned<Self> {
        static UNKNOWN: OnceLock<Interned<AssemblyName>> = OnceLock::new();
        Interned::singleton(&UNKNOWN, Self::unknown_value)
    }

    fn parse(identifier: &str, names: &Names) -> NameResult<Self> {
        let parts = split_top_level(identifier, TokenKind::Comma).for_name(Self::KIND, identifier)?;
        let (name, version) = match parts[..] {
            [name] => (name, None),
            [name, version] => (name, Some(names.assembly_version(version)?)),
            _ => {
                return Err(Problem::DelimiterCount {
                    delimiter: ',',
                    expected: "1 or 2",
                    found: parts.len(),
                })
                .for_name(Self::KIND, identifier);
            }
        };
        let name = bare_name(name, "assembly name").for_name(Self::KIND, identifier)?;

        let mut assembly = Self {
            id: SmolStr::default(),
            name: name.into(),
            version,
        };
        assembly.id = assembly.print().into();
        Ok(assembly)
    }

    fn pool(names: &Names) -> &NamePool<Self> {
        &names.assemblies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parts() {
        assert_eq!(parse_version_parts("1.2.3.4"), Ok([1, 2, 3, 4]));
        assert_eq!(parse_version_parts("0.100.90.666666"), Ok([0, 100, 90, 666666]));
        assert_eq!(parse_version_parts("1. 2 .3.4"), Ok([1, 2, 3, 4]));
        assert!(matches!(
            parse_version_parts("1.2.3"),
            Err(Problem::DelimiterCount { found: 3, .. })
        ));
        assert!(matches!(
            parse_version_parts("1.2.3.4.5"),
            Err(Problem::DelimiterCount { found: 5, .. })
        ));
        assert!(matches!(
            parse_version_parts("1.2.x.4"),
            Err(Problem::NotAnInteger { .. })
        ));
        assert_eq!(parse_version_parts(""), Err(Problem::Missing("version")));
    }

    #[test]
    fn test_version_order() {
        let names = Names::new();
        let low = names.assembly_version("1.2.3.4").unwrap();
        let high = names.assembly_version("1.2.3.5").unwrap();
        assert!(low < high);
        assert!(high > low);
        assert_eq!(low.partial_cmp(&low), Some(Ordering::Equal));
    }

    #[test]
    fn test_unknown_version_unordered() {
        let names = Names::new();
        let known = names.assembly_version("1.2.3.4").unwrap();
        let unknown = AssemblyVersion::unknown();
        assert_eq!(known.partial_cmp(&unknown), None);
        assert!(!(known < unknown));
        assert!(!(known > unknown));
        assert_eq!(unknown, AssemblyVersion::unknown());
        assert_eq!(*unknown, AssemblyVersion::unknown_value());
    }

    #[test]
    fn test_assembly_accessors() {
        let names = Names::new();
        let assembly = names.assembly("mscorlib, 4.0.0.0").unwrap();
        assert_eq!(assembly.name(), "mscorlib");
        assert_eq!(assembly.version().major(), Some(4));
        assert_eq!(assembly.version().revision(), Some(0));
        assert!(!assembly.is_local_project());
    }

    #[test]
    fn test_unknown_assembly_is_not_a_project() {
        let unknown = AssemblyName::unknown();
        assert!(unknown.is_unknown());
        assert!(!unknown.is_local_project());
        assert_eq!(unknown.name(), "???");
        assert!(unknown.version().is_unknown());
    }

    #[test]
    fn test_too_many_components() {
        let names = Names::new();
        let error = names
            .assembly("Assembly, 0.100.90.666666, PublicKeyToken=DEADBEEF")
            .unwrap_err();
        assert!(matches!(
            error.problem(),
            Some(Problem::DelimiterCount { found: 3, .. })
        ));
    }
}
