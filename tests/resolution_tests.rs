//! End-to-end resolution through the public `tyres` surface.

use rayon::prelude::*;
use tyres::common::diagnostic_codes;
use tyres::solver::{general_type_from_types, to_bool};
use tyres::syntax::UseKind;
use tyres::{
    ContextResolver, DiagnosticCollector, FactoryReflector, NodeArena, NodeIndex, Type,
    TypeFactory,
};

/// ```text
/// namespace Shop\Billing;
/// use Shop\Core\Money;
/// use Psr\Log\LoggerInterface as Logger;
/// class Invoice extends Document {
///     function total() { <annotation> }
/// }
/// ```
fn invoice_tree() -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::new();
    let file = arena.add_source_file();
    let ns = arena.add_namespace(file, Some("Shop\\Billing"));
    arena.add_use_clause(ns, UseKind::Class, "Shop\\Core\\Money", None);
    arena.add_use_clause(ns, UseKind::Class, "Psr\\Log\\LoggerInterface", Some("Logger"));
    let invoice = arena.add_class(ns, "Invoice", Some("Document"));
    let total = arena.add_method(invoice, "total");
    let annotation = arena.add_name(total, "");
    (arena, annotation)
}

#[test]
fn test_resolves_method_annotation() {
    let (arena, annotation) = invoice_tree();
    let resolver = ContextResolver::new(&arena, &FactoryReflector);
    let mut diagnostics = DiagnosticCollector::new();

    let ty = resolver.resolve(
        annotation,
        Some("array<Money>|callable(Logger): static|parent|null".into()),
        None,
        &mut diagnostics,
    );

    assert_eq!(
        ty.to_string(),
        "Shop\\Core\\Money[]|callable(Psr\\Log\\LoggerInterface): Shop\\Billing\\Invoice|Shop\\Billing\\Document|null"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_warnings_are_collected() {
    let mut arena = NodeArena::new();
    let file = arena.add_source_file();
    let function = arena.add_function(file, "helper");
    let annotation = arena.add_name(function, "");

    let resolver = ContextResolver::new(&arena, &FactoryReflector);
    let mut diagnostics = DiagnosticCollector::new();
    let ty = resolver.resolve(annotation, Some("self|parent".into()), None, &mut diagnostics);

    assert_eq!(ty, Type::Union(vec![Type::Unknown, Type::Unknown]));
    let codes: Vec<u32> = diagnostics.warnings().map(|d| d.code).collect();
    assert_eq!(
        codes,
        [
            diagnostic_codes::SELF_OUTSIDE_CLASS,
            diagnostic_codes::PARENT_OUTSIDE_CLASS
        ]
    );
}

#[test]
fn test_parallel_resolution_shares_tree() {
    let (arena, annotation) = invoice_tree();
    let resolver = ContextResolver::new(&arena, &FactoryReflector);
    let inputs = ["Money", "Logger", "self", "Line", "\\DateTime", "int"];

    let resolved: Vec<String> = inputs
        .par_iter()
        .map(|text| {
            let mut diagnostics = DiagnosticCollector::new();
            let ty = resolver.resolve(annotation, Some((*text).into()), None, &mut diagnostics);
            assert!(diagnostics.is_empty());
            ty.to_string()
        })
        .collect();

    assert_eq!(
        resolved,
        [
            "Shop\\Core\\Money",
            "Psr\\Log\\LoggerInterface",
            "Shop\\Billing\\Invoice",
            "Shop\\Billing\\Line",
            "DateTime",
            "int",
        ]
    );
}

#[test]
fn test_resolved_type_serializes() {
    let (arena, annotation) = invoice_tree();
    let resolver = ContextResolver::new(&arena, &FactoryReflector);
    let ty = resolver.resolve(annotation, Some("Money".into()), None, &mut Vec::new());

    let json = serde_json::to_value(&ty).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Class": { "parts": ["Shop", "Core", "Money"], "fully_qualified": true }
        })
    );
    let back: Type = serde_json::from_value(json).unwrap();
    assert_eq!(back, ty);
}

#[test]
fn test_utilities_compose_with_parsed_types() {
    let literals = [
        TypeFactory::from_string("1"),
        TypeFactory::from_string("2.5"),
        TypeFactory::from_string("'x'"),
    ];
    assert_eq!(general_type_from_types(&literals[..1]), Type::Int);
    assert_eq!(general_type_from_types(&literals), Type::Mixed);
    assert_eq!(to_bool(&literals[2]), Type::bool_literal(true));
}
