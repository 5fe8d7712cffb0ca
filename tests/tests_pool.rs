#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

mod helpers;

use std::collections::HashSet;
use std::thread;

use helpers::{DICTIONARY, NULLABLE_INT, parse};
use namekit::{
    AssemblyName, Interned, MethodName, Name, NameKind, Names, NamesConfig, TypeName,
};
use rayon::prelude::*;
use rstest::rstest;

#[test]
fn test_equal_identifiers_share_one_instance() {
    let names = Names::new();
    let a = parse::<TypeName>(&names, NULLABLE_INT);
    let b = parse::<TypeName>(&names, NULLABLE_INT);
    assert!(Interned::ptr_eq(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn test_independent_contexts_are_isolated() {
    let first = Names::new();
    let second = Names::new();
    let a = parse::<TypeName>(&first, NULLABLE_INT);
    let b = parse::<TypeName>(&second, NULLABLE_INT);
    assert!(!Interned::ptr_eq(&a, &b));
    // still equal by identifier
    assert_eq!(a, b);
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(64)]
fn test_concurrent_first_requests_agree(#[case] shards: usize) {
    let names = Names::with_config(NamesConfig::default().with_shards(shards));
    let results: Vec<Interned<TypeName>> = (0..256)
        .into_par_iter()
        .map(|_| names.type_name(DICTIONARY).unwrap())
        .collect();
    let first = &results[0];
    assert!(results.iter().all(|r| Interned::ptr_eq(r, first)));
    assert_eq!(names.pool::<TypeName>().len(), 3);
}

#[test]
fn test_concurrent_spellings_agree() {
    let names = Names::new();
    let spellings = ["A, 1.2.3.4", "A,1.2.3.4", " A , 1.2.3.4 ", "A ,1.2.3.4"];
    let results: Vec<Interned<AssemblyName>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let names = &names;
                let spelling = spellings[i % spellings.len()];
                scope.spawn(move || names.assembly(spelling).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| Interned::ptr_eq(r, &results[0])));
    assert_eq!(names.pool::<AssemblyName>().len(), 1);
}

#[test]
fn test_concurrent_mixed_kinds() {
    let names = Names::new();
    let identifiers: Vec<String> = (0..50)
        .map(|i| format!("static [R{i}, A, 1.0.0.0] [C, A, 1.0.0.0].M{i}([P, A, 1.0.0.0] p)"))
        .collect();
    let methods: Vec<Interned<MethodName>> = identifiers
        .par_iter()
        .chain(identifiers.par_iter())
        .map(|id| names.method(id).unwrap())
        .collect();

    let distinct: HashSet<&str> = methods.iter().map(|m| m.identifier()).collect();
    assert_eq!(distinct.len(), 50);
    assert_eq!(names.pool::<MethodName>().len(), 50);

    // every method shares the single declaring type and parameter
    let declaring = methods[0].declaring_type();
    let parameter = &methods[0].parameters()[0];
    for method in &methods {
        assert!(Interned::ptr_eq(method.declaring_type(), declaring));
        assert!(Interned::ptr_eq(&method.parameters()[0], parameter));
    }
}

#[test]
fn test_unknown_is_a_process_wide_singleton() {
    let first = Names::new();
    let second = Names::new();
    let a = first.type_name("???").unwrap();
    let b = second.type_name(" ??? ").unwrap();
    assert!(Interned::ptr_eq(&a, &b));
    assert!(Interned::ptr_eq(&a, &TypeName::unknown()));
    assert!(first.is_empty());
}

#[test]
fn test_rejection_caches_nothing() {
    let names = Names::new();
    assert!(names.type_name("List`2[[T]], A, 1.0.0.0").is_err());
    assert!(!names.pool::<TypeName>().contains("List`2[[T]], A, 1.0.0.0"));
    assert!(names.pool::<TypeName>().is_empty());
}

#[test]
fn test_handles_work_as_set_members() {
    let names = Names::new();
    let mut set = HashSet::new();
    set.insert(parse::<TypeName>(&names, "A, B"));
    set.insert(parse::<TypeName>(&names, "A,B"));
    set.insert(parse::<TypeName>(&names, "C, B"));
    assert_eq!(set.len(), 2);
    assert!(set.contains("A, B"));
}
