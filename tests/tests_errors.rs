#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use namekit::{AnyName, Kind, Name, NameError, Names, Problem};
use rstest::rstest;

#[rstest]
#[case(Kind::AssemblyVersion, "1.2.3")]
#[case(Kind::Assembly, "a b")]
#[case(Kind::Namespace, "a..b")]
#[case(Kind::Type, "A[")]
#[case(Kind::Method, "[T] [D].M")]
#[case(Kind::Field, "[T] [D].f()")]
#[case(Kind::Property, "get get [T] [D].P")]
#[case(Kind::Event, "[T] [D]")]
#[case(Kind::Parameter, "[T]")]
#[case(Kind::Delegate, "static [R] [D].()")]
#[case(Kind::LocalVariable, "[T] a b")]
fn test_validation_error_per_kind(#[case] kind: Kind, #[case] identifier: &str) {
    let names = Names::new();
    let error = names.get_any(kind, identifier).unwrap_err();
    assert!(error.is_validation(), "{error}");
    assert_eq!(error.kind(), Some(kind));
    assert_eq!(error.identifier(), identifier);
}

#[rstest]
#[case(Kind::AssemblyVersion)]
#[case(Kind::Assembly)]
#[case(Kind::Type)]
#[case(Kind::Method)]
#[case(Kind::Field)]
#[case(Kind::Property)]
#[case(Kind::Event)]
#[case(Kind::Parameter)]
#[case(Kind::Delegate)]
#[case(Kind::LocalVariable)]
fn test_empty_identifier_is_missing(#[case] kind: Kind) {
    let names = Names::new();
    let error = names.get_any(kind, "").unwrap_err();
    assert!(matches!(error.problem(), Some(Problem::Missing(_))), "{error}");
}

#[test]
fn test_empty_namespace_is_global() {
    let names = Names::new();
    let global = names.get_any(Kind::Namespace, "").unwrap();
    assert!(!global.is_unknown());
    assert_eq!(global.identifier(), "");
}

#[rstest]
#[case(Kind::AssemblyVersion)]
#[case(Kind::Assembly)]
#[case(Kind::Namespace)]
#[case(Kind::Type)]
#[case(Kind::Method)]
#[case(Kind::Field)]
#[case(Kind::Property)]
#[case(Kind::Event)]
#[case(Kind::Parameter)]
#[case(Kind::Delegate)]
#[case(Kind::LocalVariable)]
fn test_unknown_sentinel_per_kind(#[case] kind: Kind) {
    let names = Names::new();
    let unknown = names.get_any(kind, "???").unwrap();
    assert_eq!(unknown.kind(), kind);
    assert!(unknown.is_unknown());
    assert_eq!(unknown.print(), "???");
    assert!(names.is_empty());
}

#[test]
fn test_nested_error_reports_the_nested_component() {
    let names = Names::new();
    let error = names.method("[T] [D].M([A, B, 1.2] a)").unwrap_err();
    assert!(error.is_validation());
    assert_eq!(error.kind(), Some(Kind::AssemblyVersion));
    assert_eq!(error.identifier(), "1.2");
}

#[test]
fn test_error_display() {
    let names = Names::new();
    let error = names.type_name("List`2[[T]], A").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid type identifier `List`2[[T]], A`: generic arity 2 does not match 1 type arguments"
    );
    let unsupported = names.type_name("p:int").unwrap_err();
    assert!(matches!(unsupported, NameError::UnsupportedGrammar { .. }));
}

#[rstest]
#[case("CSharp.AssemblyVersion:1.2.3.4", Kind::AssemblyVersion)]
#[case("CSharp.AssemblyName:A, 1.2.3.4", Kind::Assembly)]
#[case("CSharp.NamespaceName:N.M", Kind::Namespace)]
#[case("CSharp.TypeName:e:N.E, A, 1.2.3.4", Kind::Type)]
#[case("CSharp.MethodName:[T] [D].M()", Kind::Method)]
#[case("CSharp.FieldName:[T] [D].f", Kind::Field)]
#[case("CSharp.PropertyName:get [T] [D].P", Kind::Property)]
#[case("CSharp.EventName:[T] [D].E", Kind::Event)]
#[case("CSharp.ParameterName:out [T] p", Kind::Parameter)]
#[case("CSharp.DelegateName:[R] [D].()", Kind::Delegate)]
#[case("CSharp.LocalVariableName:[T] v", Kind::LocalVariable)]
fn test_tagged_round_trip(#[case] tagged: &str, #[case] kind: Kind) {
    let names = Names::new();
    let name = names.parse_tagged(tagged).unwrap();
    assert_eq!(name.kind(), kind);
    assert_eq!(name.to_tagged(), tagged);
}

#[rstest]
#[case("CSharp.LambdaName:[?] ()")]
#[case("TypeName:T, A")]
#[case("no tag")]
fn test_unknown_tag(#[case] tagged: &str) {
    let names = Names::new();
    let error = names.parse_tagged(tagged).unwrap_err();
    assert!(error.is_unsupported());
    assert!(error.kind().is_none());
}

#[test]
fn test_any_name_conversion() {
    let names = Names::new();
    let ty = names.type_name("T, A").unwrap();
    let any = AnyName::from(ty.clone());
    assert_eq!(any.as_type(), Some(&ty));
    assert_eq!(any, names.get_any(Kind::Type, "T,A").unwrap());
}
