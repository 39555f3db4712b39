//! Error handling tests for the expansion engine

use super::helpers::{people_data, render, template_with};
use crate::config::CompileOptions;
use crate::template::compile::compile;
use crate::template::error::{CompileError, ExpandError};
use crate::template::formatters::NoFormatters;
use serde_json::json;

#[test]
fn test_error_undefined_variable() {
    match render("Value: {nonexistent}", &json!({})) {
        Err(ExpandError::UndefinedVariable { name }) => assert_eq!(name, "nonexistent"),
        other => panic!("Expected UndefinedVariable error, got {:?}", other),
    }
}

#[test]
fn test_error_undefined_nested_path() {
    match render("{owner.phone}", &people_data()) {
        Err(ExpandError::UndefinedVariable { name }) => assert_eq!(name, "owner.phone"),
        other => panic!("Expected UndefinedVariable error, got {:?}", other),
    }
}

#[test]
fn test_error_null_value_is_undefined() {
    let err = render("{v}", &json!({"v": null})).unwrap_err();
    assert_eq!(err.kind(), "UndefinedVariable");
}

#[test]
fn test_error_aborts_without_partial_output() {
    // Output before the failing substitution is discarded
    let result = render("lots of text {ok} then {missing}", &json!({"ok": 1}));
    assert!(matches!(
        result,
        Err(ExpandError::UndefinedVariable { .. })
    ));
}

#[test]
fn test_error_inside_repeated_section() {
    let data = people_data();
    match render("{.repeated section people}{phone}{.end}", &data) {
        Err(ExpandError::UndefinedVariable { name }) => assert_eq!(name, "phone"),
        other => panic!("Expected UndefinedVariable error, got {:?}", other),
    }
}

#[test]
fn test_error_repeated_section_over_non_list() {
    let data = json!({"items": {"a": 1}});
    match render("{.repeated section items}x{.end}", &data) {
        Err(ExpandError::ExpectedList { name, found }) => {
            assert_eq!(name, "items");
            assert_eq!(found, "object");
        }
        other => panic!("Expected ExpectedList error, got {:?}", other),
    }

    let err = render("{.repeated section n}x{.end}", &json!({"n": 5})).unwrap_err();
    assert_eq!(err.kind(), "EvaluationError");
}

#[test]
fn test_error_no_formatter_in_hand_built_program() {
    use crate::template::engine::expand_program;
    use crate::template::program::{Path, Section, Statement, Substitution};

    let mut root = Section::root();
    root.push(
        None,
        Statement::Substitution(Substitution::new(Path::parse("x").unwrap(), vec![])),
    );
    match expand_program(&root, &json!({"x": 1})) {
        Err(ExpandError::NoFormatter { name }) => assert_eq!(name, "x"),
        other => panic!("Expected NoFormatter error, got {:?}", other),
    }
}

#[test]
fn test_bogus_formatter_fails_regardless_of_data() {
    for text in ["{x|bogus}", "{.section s}{x|bogus}{.end}", "{x|html|bogus}"] {
        match compile(text, &NoFormatters, &CompileOptions::default()) {
            Err(CompileError::BadFormatter { name }) => assert_eq!(name, "bogus"),
            other => panic!("Expected BadFormatter error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_unmatched_end_fails_regardless_of_rest() {
    for text in [
        "{.end}",
        "fine {x} then{.end}",
        "{.section a}{.end}{.end}",
        "{.repeated section a}{@}{.alternates with},{.end}\n{.end}",
    ] {
        let err = compile(text, &NoFormatters, &CompileOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "TemplateSyntaxError", "template {:?}", text);
    }
}

#[test]
fn test_missing_formatter_without_default() {
    let options = CompileOptions::new().with_default_formatter(None);
    assert!(matches!(
        compile("{name}", &NoFormatters, &options),
        Err(CompileError::MissingFormatter { .. })
    ));
    let template = template_with("{name|raw}", &options);
    assert_eq!(template.expand(&json!({"name": "x"})).unwrap(), "x");
}
