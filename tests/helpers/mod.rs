//! Common identifier fixtures for tests.

#![allow(dead_code)]

use namekit::{Name, NameKind, Names};

pub const INT32: &str = "System.Int32, mscore, 4.0.0.0";
pub const STRING: &str = "System.String, mscore, 4.0.0.0";
pub const VOID: &str = "System.Void, mscore, 4.0.0.0";

pub const NULLABLE_INT: &str =
    "System.Nullable`1[[T -> System.Int32, mscore, 4.0.0.0]], mscore, 4.0.0.0";

pub const DICTIONARY: &str = "System.Collections.Dictionary`2[[TKey -> System.Int32, mscore, 4.0.0.0],[TValue -> System.String, mscore, 4.0.0.0]], mscore, 4.0.0.0";

/// Parse `identifier` as `T`, panicking with the error on failure.
pub fn parse<T: NameKind>(names: &Names, identifier: &str) -> namekit::Interned<T> {
    names
        .get::<T>(identifier)
        .unwrap_or_else(|e| panic!("Failed to parse {} `{identifier}`: {e}", T::KIND))
}

/// Assert that `identifier` parses and re-prints as `expected`.
pub fn assert_prints<T: NameKind>(identifier: &str, expected: &str) {
    let names = Names::new();
    let name = parse::<T>(&names, identifier);
    assert_eq!(name.identifier(), expected, "canonical form of `{identifier}`");
    assert_eq!(name.print(), expected, "printed form of `{identifier}`");
}
