use std::fs;

use serde_json::json;
use stencil::error::Error;
use stencil::filters::FilterRegistry;
use stencil::renderer::{MiniJinjaRenderer, TemplateRenderer};
use tempfile::TempDir;

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("t.ts.tmpl"), "Hello {{ name }}! {{ value }}").unwrap();

    let renderer = MiniJinjaRenderer::default();
    let context = json!({"name": "test", "value": 42});
    let result = renderer.render_file(temp_dir.path(), "t.ts.tmpl", &context).unwrap();
    assert_eq!(result, "Hello test! 42");
}

#[test]
fn test_builtin_filters() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("cases.tmpl"),
        "{{ name | kebab_case }} {{ name | snake_case }} {{ name | camel_case }} \
         {{ name | pascal_case }} {{ slug | kebab_to_pascal }}",
    )
    .unwrap();

    let renderer = MiniJinjaRenderer::default();
    let context = json!({"name": "UserProfile", "slug": "user-profile"});
    let result = renderer.render_file(temp_dir.path(), "cases.tmpl", &context).unwrap();
    assert_eq!(result, "user-profile user_profile userProfile UserProfile UserProfile");
}

#[test]
fn test_custom_filter_registry() {
    fn shout(s: &str) -> String {
        s.to_uppercase()
    }

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("t.tmpl"), "{{ name | shout }}").unwrap();

    let renderer = MiniJinjaRenderer::new(FilterRegistry::new().with("shout", shout));
    let result = renderer.render_file(temp_dir.path(), "t.tmpl", &json!({"name": "hi"})).unwrap();
    assert_eq!(result, "HI");

    // builtins are not registered on an empty registry
    fs::write(temp_dir.path().join("k.tmpl"), "{{ name | kebab_case }}").unwrap();
    assert!(renderer.render_file(temp_dir.path(), "k.tmpl", &json!({"name": "Hi"})).is_err());
}

#[test]
fn test_include_resolves_from_base_dir() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir(base.join("partials")).unwrap();
    fs::write(base.join("partials").join("header.txt"), "// {{ name }}").unwrap();
    fs::write(base.join("main.rs.jinja"), "{% include \"partials/header.txt\" %} body").unwrap();

    let renderer = MiniJinjaRenderer::default();
    let result = renderer.render_file(base, "main.rs.jinja", &json!({"name": "gen"})).unwrap();
    assert_eq!(result, "// gen body");
}

#[test]
fn test_dotfile_template_with_include() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::write(base.join("common.txt"), "DEBUG=false").unwrap();
    fs::write(base.join(".env.j2"), "NAME={{ name }}\n{% include \"common.txt\" %}").unwrap();

    let renderer = MiniJinjaRenderer::default();
    let result = renderer.render_file(base, ".env.j2", &json!({"name": "gen"})).unwrap();
    assert_eq!(result, "NAME=gen\nDEBUG=false");
}

#[test]
fn test_no_auto_escaping() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("page.html.jinja"), "{{ markup }}").unwrap();

    let renderer = MiniJinjaRenderer::default();
    let result = renderer
        .render_file(temp_dir.path(), "page.html.jinja", &json!({"markup": "<b>&</b>"}))
        .unwrap();
    assert_eq!(result, "<b>&</b>");
}

#[test]
fn test_undefined_variable_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("t.tmpl"), "{{ missing }}").unwrap();

    let renderer = MiniJinjaRenderer::default();
    match renderer.render_file(temp_dir.path(), "t.tmpl", &json!({})) {
        Err(Error::RenderError { template, .. }) => {
            assert_eq!(template, temp_dir.path().join("t.tmpl"))
        }
        other => panic!("Expected RenderError, got {other:?}"),
    }
}

#[test]
fn test_syntax_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("t.tmpl"), "{% if %}").unwrap();

    let renderer = MiniJinjaRenderer::default();
    let result = renderer.render_file(temp_dir.path(), "t.tmpl", &json!({}));
    assert!(matches!(result, Err(Error::RenderError { .. })));
}
