//! Integration tests for the public template API

use jsontemplate_core::template::{ChainedResolver, Formatter, NoFormatters, PrintfFormatters};
use jsontemplate_core::{compile, expand, CompileOptions, JsonTemplateError, Template};
use jsontemplate_testkit::{temp_dir_in_workspace, write_template};
use serde_json::{json, Value};

#[test]
fn test_hello_world_with_html_default() {
    let options = CompileOptions::new().with_default_formatter(Some("html"));
    let template = compile("Hello {name}!", &NoFormatters, &options).unwrap();
    assert_eq!(
        template.expand(&json!({"name": "World"})).unwrap(),
        "Hello World!"
    );
}

#[test]
fn test_compile_once_expand_many() {
    let template = Template::new("{.section user}Hi {name}{.or}Anonymous{.end}").unwrap();
    assert_eq!(
        template.expand(&json!({"user": {"name": "Ann"}})).unwrap(),
        "Hi Ann"
    );
    assert_eq!(template.expand(&json!({})).unwrap(), "Anonymous");
    assert_eq!(
        template.expand(&json!({"user": {"name": "Bo"}})).unwrap(),
        "Hi Bo"
    );
}

#[test]
fn test_printf_resolver() {
    let template = compile(
        "{price|printf %.2f} ({count|printf %03d})",
        &PrintfFormatters,
        &CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(
        template.expand(&json!({"price": 3.14159, "count": 7})).unwrap(),
        "3.14 (007)"
    );
}

#[test]
fn test_chained_resolver_with_custom_formatter() {
    let upper = |name: &str| {
        (name == "upper").then(|| {
            Formatter::new("upper", |v: &Value| {
                Value::String(v.as_str().unwrap_or_default().to_uppercase())
            })
        })
    };
    let resolver = ChainedResolver::new().with(upper).with(PrintfFormatters);
    let template = compile(
        "{name|upper|html} {n|printf %x}",
        &resolver,
        &CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(
        template.expand(&json!({"name": "<a>", "n": 255})).unwrap(),
        "&lt;A&gt; ff"
    );
}

#[test]
fn test_url_params_formatter() {
    let data = json!({"query": {"q": "rust templates", "page": 2}});
    assert_eq!(
        expand("/search?{query|url-params}", &data).unwrap(),
        "/search?page=2&q=rust+templates"
    );
}

#[test]
fn test_error_kinds() {
    let cases = [
        ("{x|bogus}", json!({}), "BadFormatter"),
        ("{.end}", json!({}), "TemplateSyntaxError"),
        ("{.section a}", json!({}), "TemplateSyntaxError"),
        ("{.or}", json!({}), "TemplateSyntaxError"),
        ("{x}", json!({}), "UndefinedVariable"),
        ("{.repeated section x}{.end}", json!({"x": "s"}), "EvaluationError"),
    ];
    for (text, data, kind) in cases {
        let err = expand(text, &data).unwrap_err();
        assert_eq!(err.kind(), kind, "template {:?}", text);
    }
}

#[test]
fn test_configuration_error_kind() {
    let options = CompileOptions::new().with_meta("{");
    let err: JsonTemplateError = compile("x", &NoFormatters, &options).unwrap_err().into();
    assert_eq!(err.kind(), "ConfigurationError");
}

#[test]
fn test_from_template_file_with_header() {
    let temp = temp_dir_in_workspace();
    let path = write_template(
        temp.path(),
        "greeting.jsont",
        "meta: [[]]\ndefault-formatter: html\n\n[[# greeting]]\nHello [[name]]!\n",
    );

    let template = Template::from_template_file(&path, &NoFormatters).unwrap();
    assert_eq!(template.options().meta, "[[]]");
    assert_eq!(
        template.expand(&json!({"name": "<World>"})).unwrap(),
        "Hello &lt;World&gt;!\n"
    );
}

#[test]
fn test_from_template_file_missing() {
    let temp = temp_dir_in_workspace();
    let result = Template::from_template_file(temp.path().join("missing.jsont"), &NoFormatters);
    assert!(matches!(result, Err(JsonTemplateError::IoError(_))));
}

#[test]
fn test_program_inspection() {
    let template = Template::new("a{.repeated section xs}{@}{.or}none{.end}").unwrap();
    let program = template.program();
    assert!(program.is_root());
    assert_eq!(program.statements().len(), 2);
    assert_eq!(program.statement_count(), 4);
}
