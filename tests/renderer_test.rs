use create_simple_ai::renderer::{MiniJinjaRenderer, TemplateRenderer};
use serde_json::json;

fn render(template: &str, context: serde_json::Value) -> String {
    MiniJinjaRenderer::new().render("test.j2", template, &context).unwrap()
}

#[test]
fn test_interpolation() {
    let context = json!({ "project_name": "demo-app", "versions": { "next": "15.1.0" } });
    assert_eq!(render("{{ project_name }}", context.clone()), "demo-app");
    assert_eq!(render("{{ versions.next }}", context.clone()), "15.1.0");
    assert_eq!(render("{{ versions[\"next\"] }}", context), "15.1.0");
}

#[test]
fn test_eq_helper() {
    let template = "{% if eq(database, \"postgres\") %}pg{% else %}other{% endif %}";
    assert_eq!(render(template, json!({ "database": "postgres" })), "pg");
    assert_eq!(render(template, json!({ "database": "sqlite" })), "other");
    assert_eq!(render("{{ eq(count, \"1\") }}", json!({ "count": 1 })), "False");
    assert_eq!(render("{{ eq(count, 1) }}", json!({ "count": 1 })), "True");
    assert_eq!(render("{{ eq(count, 1.0) }}", json!({ "count": 1 })), "True");
    assert_eq!(render("{{ eq(flag, 1) }}", json!({ "flag": true })), "False");
    assert_eq!(render("{{ eq(flag, 0) }}", json!({ "flag": false })), "False");
    assert_eq!(render("{{ eq(flag, true) }}", json!({ "flag": true })), "True");
}

#[test]
fn test_includes_helper() {
    let template = "{% if includes(examples, \"todo\") %}yes{% else %}no{% endif %}";
    assert_eq!(render(template, json!({ "examples": ["todo", "blog"] })), "yes");
    assert_eq!(render(template, json!({ "examples": [] })), "no");
    assert_eq!(render(template, json!({ "examples": "todo" })), "no");
    assert_eq!(render(template, json!({ "examples": { "todo": true } })), "no");
    assert_eq!(render(template, json!({ "examples": null })), "no");
    assert_eq!(render("{{ includes(flags, true) }}", json!({ "flags": [1] })), "False");
}

#[test]
fn test_includes_accepts_lazy_sequences() {
    assert_eq!(render("{{ includes(range(3), 1) }}", json!({})), "True");
    assert_eq!(render("{{ includes(xs|reverse, 1) }}", json!({ "xs": [1, 2] })), "True");
    assert_eq!(render("{{ includes(range(3), 5) }}", json!({})), "False");
}

#[test]
fn test_truthiness_and_loops() {
    let template = "{% if examples %}{% for e in examples %}[{{ e }}]{% endfor %}{% endif %}";
    assert_eq!(render(template, json!({ "examples": ["todo", "blog"] })), "[todo][blog]");
    assert_eq!(render(template, json!({ "examples": [] })), "");
}

#[test]
fn test_block_lines_are_trimmed() {
    let template = "a\n{% if true %}\nb\n{% endif %}\nc\n";
    assert_eq!(render(template, json!({})), "a\nb\nc\n");
}

#[test]
fn test_undefined_value_cannot_be_printed() {
    let renderer = MiniJinjaRenderer::new();
    assert!(renderer.render("test.j2", "{{ missing }}", &json!({})).is_err());
    assert_eq!(
        renderer.render("test.j2", "{% if missing %}x{% endif %}", &json!({})).unwrap(),
        ""
    );
}

#[test]
fn test_invalid_syntax() {
    let renderer = MiniJinjaRenderer::new();
    assert!(renderer.render("test.j2", "{% if %}", &json!({})).is_err());
    assert!(renderer.render("test.j2", "{{ unclosed", &json!({})).is_err());
}
