use apractool::error::Error;
use apractool::renderer::{TemplateRenderer, TokenRenderer};
use serde_json::json;

fn context() -> serde_json::Value {
    json!({
        "NamespaceAndFileName": "NS.Foo",
        "Namespace": "NS",
        "FileName": "Foo",
    })
}

#[test]
fn test_replaces_every_token() {
    let renderer = TokenRenderer::new();
    let stub = "a: {Namespace}.{FileName}\nb: {NamespaceAndFileName}\n";

    let rendered = renderer.render(stub, &context()).unwrap();

    assert_eq!(rendered, "a: NS.Foo\nb: NS.Foo\n");
    assert!(!rendered.contains('{'));
}

#[test]
fn test_replaces_all_occurrences() {
    let renderer = TokenRenderer::new();
    let rendered = renderer.render("{FileName} {FileName} {FileName}", &context()).unwrap();

    assert_eq!(rendered, "Foo Foo Foo");
}

#[test]
fn test_leaves_unknown_braces_alone() {
    let renderer = TokenRenderer::new();
    let stub = "function {FileName}() { return {Other}; }";

    let rendered = renderer.render(stub, &context()).unwrap();

    assert_eq!(rendered, "function Foo() { return {Other}; }");
}

#[test]
fn test_rejects_non_object_context() {
    let renderer = TokenRenderer::new();

    assert!(matches!(renderer.render("{FileName}", &json!("Foo")), Err(Error::TemplateError(_))));
    assert!(matches!(
        renderer.render("{FileName}", &json!({"FileName": 1})),
        Err(Error::TemplateError(_))
    ));
}

#[test]
fn test_substitutes_in_fixed_order() {
    let renderer = TokenRenderer::new();
    let context = json!({
        "NamespaceAndFileName": "{Namespace}.{FileName}",
        "Namespace": "{FileName}",
        "FileName": "Foo",
    });

    let rendered = renderer.render("ns={Namespace} q={NamespaceAndFileName}", &context).unwrap();

    assert_eq!(rendered, "ns=Foo q=Foo.Foo");
}

#[test]
fn test_later_tokens_are_not_expanded_backwards() {
    let renderer = TokenRenderer::new();
    let context = json!({
        "NamespaceAndFileName": "NS.Foo",
        "Namespace": "NS",
        "FileName": "{NamespaceAndFileName}",
    });

    let rendered = renderer.render("{FileName}", &context).unwrap();

    assert_eq!(rendered, "{NamespaceAndFileName}");
}
