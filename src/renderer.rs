//! Template renderer for create-simple-ai.
//! Wraps MiniJinja and registers the helpers the bundled templates rely on
//! for per-database and per-feature branching.
use crate::error::{Error, Result};
use minijinja::value::{Value, ValueKind};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template source with the given context.
    ///
    /// # Arguments
    /// * `name` - Name reported in errors, normally the template's relative path
    /// * `template` - Template source to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Equality without cross-kind coercion: `true` is not `1`, `"1"` is not `1`.
/// Integers and floats share one kind, so `1` equals `1.0`.
fn strict_equal(a: &Value, b: &Value) -> bool {
    a.kind() == b.kind() && a == b
}

/// `eq(a, b)`: true iff both operands are the same kind of value and equal.
pub fn eq(a: Value, b: Value) -> bool {
    strict_equal(&a, &b)
}

/// `includes(collection, item)`: true iff `collection` is a sequence holding `item`.
///
/// Lists and lazy sequences such as `range(3)` qualify. Anything else,
/// strings and maps included, yields false.
pub fn includes(collection: Value, item: Value) -> bool {
    if !matches!(collection.kind(), ValueKind::Seq | ValueKind::Iterable) {
        return false;
    }
    match collection.try_iter() {
        Ok(mut iter) => iter.any(|value| strict_equal(&value, &item)),
        Err(_) => false,
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the `eq` and `includes` helpers registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Undefined values may be tested for truthiness but not printed or traversed.
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_function("eq", eq);
        env.add_function("includes", includes);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::RenderError` if the source fails to parse or evaluate
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_named_str(name, template, context)
            .map_err(|source| Error::RenderError { path: name.to_string(), source })
    }
}
