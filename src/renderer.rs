//! Stub rendering.
//! Placeholders are literal `{Key}` tokens, replaced everywhere they occur.
use crate::constants::PLACEHOLDER_KEYS;
use crate::error::{Error, Result};

/// Trait for stub rendering engines.
pub trait TemplateRenderer {
    /// Renders a stub with the given context.
    ///
    /// # Arguments
    /// * `template` - Stub text to render
    /// * `context` - Placeholder values keyed by token name
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Literal token substitution engine.
#[derive(Debug, Default)]
pub struct TokenRenderer;

impl TokenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TokenRenderer {
    /// Replaces every `{key}` with the matching context value.
    ///
    /// The known placeholders go first, in `PLACEHOLDER_KEYS` order: a value
    /// holding a later token is expanded by the later pass. Other keys follow
    /// in map order.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the context is not an object or holds a
    ///   non-string value
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let values = context.as_object().ok_or_else(|| {
            Error::TemplateError("render context must be an object".to_string())
        })?;

        let mut keys: Vec<&str> = PLACEHOLDER_KEYS.to_vec();
        keys.extend(
            values.keys().map(String::as_str).filter(|key| !PLACEHOLDER_KEYS.contains(key)),
        );

        keys.into_iter().try_fold(template.to_string(), |rendered, key| -> Result<String> {
            let Some(value) = values.get(key) else {
                return Ok(rendered);
            };
            let value = value.as_str().ok_or_else(|| {
                Error::TemplateError(format!("value of '{}' is not a string", key))
            })?;
            Ok(rendered.replace(&format!("{{{}}}", key), value))
        })
    }
}
