//! User interaction: asking for the template name and showing notices.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Placeholder shown when asking for the template name
pub const NAME_PROMPT: &str = "Template name (including namespace, e.g. Namespace.Template)";

/// Trait for user interaction.
pub trait Prompter {
    /// Asks the user for a template name. An empty answer yields `None`.
    fn ask_name(&self) -> Result<Option<String>>;

    /// Shows an informational message to the user.
    fn notify(&self, message: &str);
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_name(&self) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(NAME_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        Ok(name_from_answer(answer))
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Answers are taken verbatim; only an empty answer means "no name".
pub fn name_from_answer(answer: String) -> Option<String> {
    (!answer.is_empty()).then_some(answer)
}

/// Returns the name passed on the command line, or asks for one.
pub fn get_name(prompt: &dyn Prompter, name: Option<String>) -> Result<Option<String>> {
    match name {
        Some(name) => Ok(name_from_answer(name)),
        None => prompt.ask_name(),
    }
}
