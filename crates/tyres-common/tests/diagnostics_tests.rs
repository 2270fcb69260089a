use super::*;
use crate::{DiagnosticCategory, format_message, get_message_template};

#[test]
fn test_from_code_formats_template() {
    let diag = Diagnostic::from_code(codes::PARENT_WITHOUT_BASE_CLASS, &["App\\Foo"]);
    assert_eq!(diag.category, DiagnosticCategory::Warning);
    assert_eq!(
        diag.message_text,
        "\"parent\" keyword used but class \"App\\Foo\" does not extend anything"
    );
}

#[test]
fn test_from_unknown_code_is_empty_warning() {
    let diag = Diagnostic::from_code(1, &[]);
    assert_eq!(diag.code, 1);
    assert!(diag.message_text.is_empty());
}

#[test]
fn test_every_code_has_a_template() {
    for code in [
        codes::SELF_OUTSIDE_CLASS,
        codes::PARENT_OUTSIDE_CLASS,
        codes::PARENT_WITHOUT_BASE_CLASS,
    ] {
        assert!(get_message_template(code).is_some(), "missing {code}");
    }
}

#[test]
fn test_format_message_positional() {
    assert_eq!(format_message("{1} then {0}", &["a", "b"]), "b then a");
}

#[test]
fn test_collector_take_drains() {
    let mut collector = DiagnosticCollector::new();
    collector.report(Diagnostic::warning("first", 1).at_node(3));
    collector.report(Diagnostic::warning("second", 2));

    assert_eq!(collector.warnings().count(), 2);
    assert_eq!(collector.diagnostics()[0].node, Some(3));

    let taken = collector.take_diagnostics();
    assert_eq!(taken.len(), 2);
    assert!(collector.is_empty());
}

#[test]
fn test_vec_is_a_sink() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    sink.report(Diagnostic::from_code(codes::PARENT_OUTSIDE_CLASS, &[]));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_null_and_tracing_sinks_accept_anything() {
    NullSink.report(Diagnostic::warning("dropped", 0));
    TracingSink.report(Diagnostic::warning("logged", 0));
}
