//! Error types for identifier parsing.

use thiserror::Error;

use super::kind::Kind;

/// A low-level defect found while scanning or decomposing an identifier.
///
/// Problems carry no knowledge of which name they occurred in; the variant
/// parsers attach that context by converting them into a [`NameError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    /// Brackets, parentheses or braces do not balance. The offset is relative
    /// to the component being scanned.
    #[error("unbalanced nesting at byte {offset}")]
    UnbalancedNesting { offset: usize },

    /// Wrong number of separated components.
    #[error("expected {expected} `{delimiter}`-separated components, found {found}")]
    DelimiterCount {
        delimiter: char,
        expected: &'static str,
        found: usize,
    },

    /// A numeric component is not a non-negative integer.
    #[error("`{text}` is not a non-negative integer")]
    NotAnInteger { text: String },

    /// A bare component contains a reserved character.
    #[error("bare name `{name}` contains reserved character {ch:?}")]
    ReservedCharacter { name: String, ch: char },

    /// A path segment spelled `???`. The unknown identifier only stands for a
    /// whole name.
    #[error("`{name}` uses `???` as a component")]
    UnknownComponent { name: String },

    /// Nesting beyond the supported depth.
    #[error("{what} nested deeper than {limit} levels")]
    TooDeep { what: &'static str, limit: usize },

    /// A required component is empty or absent.
    #[error("missing {0}")]
    Missing(&'static str),

    /// A structural token was expected but not found.
    #[error("expected {0}")]
    Expected(&'static str),

    /// Text remains after a complete name was read.
    #[error("unexpected trailing text `{0}`")]
    Trailing(String),

    /// The backtick arity disagrees with the number of generic arguments.
    #[error("generic arity {declared} does not match {found} type arguments")]
    ArityMismatch { declared: usize, found: usize },

    /// A known modifier used on a kind that does not accept it.
    #[error("modifier `{0}` is not allowed here")]
    MisplacedModifier(&'static str),

    /// A modifier written twice.
    #[error("modifier `{0}` appears more than once")]
    DuplicateModifier(&'static str),

    /// Any other structural violation.
    #[error("{0}")]
    Shape(&'static str),

    /// Looks well formed but uses a grammar extension this crate does not know.
    #[error("{0}")]
    Unsupported(String),
}

impl Problem {
    /// Create an unsupported-grammar problem.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported(feature.into())
    }

    /// Create a trailing-text problem.
    pub fn trailing(text: impl Into<String>) -> Self {
        Self::Trailing(text.into())
    }
}

/// Error returned by every name factory.
///
/// Errors are raised synchronously and never recovered internally.
/// Callers decide whether to propagate, log, or substitute an explicit
/// unknown sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The identifier is malformed.
    #[error("invalid {kind} identifier `{identifier}`: {problem}")]
    Validation {
        kind: Kind,
        identifier: String,
        problem: Problem,
    },

    /// The identifier uses an unrecognized grammar extension.
    #[error("unsupported {kind} grammar in `{identifier}`: {feature}")]
    UnsupportedGrammar {
        kind: Kind,
        identifier: String,
        feature: String,
    },

    /// A tagged identifier names no known kind.
    #[error("unsupported name tag `{tag}`")]
    UnknownTag { tag: String },
}

impl NameError {
    /// Attach name context to a problem. Unsupported problems become
    /// [`NameError::UnsupportedGrammar`], everything else a validation error.
    pub fn new(kind: Kind, identifier: impl Into<String>, problem: Problem) -> Self {
        let identifier = identifier.into();
        match problem {
            Problem::Unsupported(feature) => Self::UnsupportedGrammar {
                kind,
                identifier,
                feature,
            },
            problem => Self::Validation {
                kind,
                identifier,
                problem,
            },
        }
    }

    /// The kind of name that failed to parse, unknown for bad tags.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Validation { kind, .. } | Self::UnsupportedGrammar { kind, .. } => Some(*kind),
            Self::UnknownTag { .. } => None,
        }
    }

    /// The identifier (or nested component) that failed to parse.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Validation { identifier, .. } | Self::UnsupportedGrammar { identifier, .. } => {
                identifier
            }
            Self::UnknownTag { tag } => tag,
        }
    }

    /// The validation problem, if this is a validation error.
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            Self::Validation { problem, .. } => Some(problem),
            Self::UnsupportedGrammar { .. } | Self::UnknownTag { .. } => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True for every grammar extension this crate does not recognize.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedGrammar { .. } | Self::UnknownTag { .. }
        )
    }

    /// True when the identifier was rejected for unbalanced nesting.
    pub fn is_malformed_nesting(&self) -> bool {
        matches!(self.problem(), Some(Problem::UnbalancedNesting { .. }))
    }
}

/// Result alias used by all parsers and factories.
pub type NameResult<T> = Result<T, NameError>;

/// Converts problem results into name results at a parser boundary.
pub trait ProblemContext<T> {
    fn for_name(self, kind: Kind, identifier: &str) -> NameResult<T>;
}

impl<T> ProblemContext<T> for Result<T, Problem> {
    fn for_name(self, kind: Kind, identifier: &str) -> NameResult<T> {
        self.map_err(|problem| NameError::new(kind, identifier, problem))
    }
}
