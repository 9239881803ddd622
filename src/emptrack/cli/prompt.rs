use super::styles::{names, EMPTRACK_THEME};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use emptrack::error::{Result, TrackerError};
use emptrack::prompt::{Answers, Field, FieldKind, Prompter};

/// Terminal prompts. Empty text, Esc/q on a list, or a list with nothing in it leave the
/// field unanswered.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }

    fn text(&self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TrackerError::Prompt(e.to_string()))
    }

    fn choose(&self, message: &str, choices: &[String]) -> Result<Option<String>> {
        if choices.is_empty() {
            let use_color = self.term.features().colors_supported();
            self.term
                .write_line(&empty_choice_notice(message, use_color))
                .map_err(|e| TrackerError::Prompt(e.to_string()))?;
            return Ok(None);
        }
        let picked = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact_opt()
            .map_err(|e| TrackerError::Prompt(e.to_string()))?;
        Ok(picked.and_then(|i| choices.get(i).cloned()))
    }
}

/// Shown on stderr, where dialoguer draws, in place of a list with no entries.
fn empty_choice_notice(message: &str, use_color: bool) -> String {
    EMPTRACK_THEME.apply(
        names::MUTED,
        &format!("{} (nothing to choose from)", message),
        use_color,
    )
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, fields: &[Field]) -> Result<Answers> {
        let mut answers = Answers::new();
        for field in fields {
            let value = match &field.kind {
                FieldKind::Text => Some(self.text(&field.message)?),
                FieldKind::Choice(choices) => self.choose(&field.message, choices)?,
            };
            if let Some(value) = value {
                answers.insert(field.name, value);
            }
        }
        Ok(answers)
    }
}
