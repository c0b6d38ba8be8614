// dpack-core/src/infrastructure/report/markdown.rs
//
// Renders the human-readable evidence document from the same data that
// goes into the JSON artifact.

use minijinja::Environment;
use serde::Serialize;

use crate::infrastructure::error::InfrastructureError;

const TEMPLATE_NAME: &str = "validation_results.md";
const TEMPLATE: &str = include_str!("templates/validation_results.md.j2");

pub struct EvidenceRenderer {
    env: Environment<'static>,
}

impl EvidenceRenderer {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("thousands", thousands);
        env.add_filter("excerpt", excerpt);

        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, context: S) -> Result<String, InfrastructureError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context)?)
    }
}

/// 1234567 -> "1,234,567"
fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cuts `value` to `limit` characters, appending "..." when something was cut.
fn excerpt(value: String, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value;
    }
    let mut cut: String = value.chars().take(limit).collect();
    cut.push_str("...");
    cut
}
