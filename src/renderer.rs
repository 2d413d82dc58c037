//! Template rendering for generated solution modules.
//! The built-in templates are embedded at compile time and filled with the
//! puzzle year and day through MiniJinja.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// The templates a scaffold is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The solution module, written to `solution.rs`.
    Solution,
    /// The example test module, written to `solution_test.rs`.
    SolutionTest,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Solution, TemplateKind::SolutionTest];

    /// Raw template source.
    pub fn source(self) -> &'static str {
        match self {
            TemplateKind::Solution => include_str!("../templates/solution.rs.j2"),
            TemplateKind::SolutionTest => include_str!("../templates/solution_test.rs.j2"),
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are an error rather than an empty string, so a
/// template referencing a token other than `year`, `day` or `day_padded`
/// fails loudly.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("temp", template.to_string())?;

        let tmpl = env.get_template("temp")?;

        Ok(tmpl.render(context)?)
    }
}

/// Renders one of the built-in templates for a puzzle day.
pub fn render_template(
    renderer: &dyn TemplateRenderer,
    kind: TemplateKind,
    year: u32,
    day: u32,
) -> Result<String> {
    let context = serde_json::json!({
        "year": year,
        "day": day,
        "day_padded": format!("{day:02}"),
    });
    renderer.render(kind.source(), &context)
}
