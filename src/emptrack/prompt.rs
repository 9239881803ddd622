//! # Prompt Abstraction
//!
//! Mutation flows and the menu loop describe *what* to ask as a list of [`Field`]s and get
//! back [`Answers`]. How the questions reach a human (dialoguer in the binary, a script in
//! tests) is the [`Prompter`]'s business.
//!
//! A field left blank or cancelled has no answer: [`Answers::get`] and [`Answers::choice`]
//! return `None` for it.

use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text entry.
    Text,
    /// Pick one label from the list.
    Choice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub message: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn choice(name: &'static str, message: impl Into<String>, choices: &[String]) -> Self {
        Self {
            name,
            message: message.into(),
            kind: FieldKind::Choice(choices.to_vec()),
        }
    }
}

/// Field name → entered text or chosen label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<&'static str, String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// The trimmed answer for `field`, or `None` when it was skipped or left blank.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The chosen label for `field` exactly as offered, or `None` when nothing was chosen.
    /// Labels are matched verbatim, so surrounding whitespace is kept.
    pub fn choice(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// All text answers for `fields` in order, or `None` if any of them is missing.
    pub fn all<const N: usize>(&self, fields: [&str; N]) -> Option<[&str; N]> {
        let mut out = [""; N];
        for (slot, field) in out.iter_mut().zip(fields) {
            *slot = self.get(field)?;
        }
        Some(out)
    }
}

/// Asks a batch of questions and collects the answers.
pub trait Prompter {
    fn ask(&mut self, fields: &[Field]) -> Result<Answers>;
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use crate::error::TrackerError;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Step {
        Answer(String),
        Blank,
        Fail,
    }

    /// Replays canned answers, one step per field, and remembers what was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        steps: VecDeque<Step>,
        pub asked: Vec<Field>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answer(mut self, value: &str) -> Self {
            self.steps.push_back(Step::Answer(value.to_string()));
            self
        }

        pub fn answers(mut self, values: &[&str]) -> Self {
            for value in values {
                self = self.answer(value);
            }
            self
        }

        pub fn blank(mut self) -> Self {
            self.steps.push_back(Step::Blank);
            self
        }

        pub fn fail(mut self) -> Self {
            self.steps.push_back(Step::Fail);
            self
        }

        pub fn remaining(&self) -> usize {
            self.steps.len()
        }

        /// Choices offered for the most recent field called `name`.
        pub fn choices_for(&self, name: &str) -> Option<&[String]> {
            self.asked.iter().rev().find(|f| f.name == name).and_then(|f| match &f.kind {
                FieldKind::Choice(choices) => Some(choices.as_slice()),
                FieldKind::Text => None,
            })
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, fields: &[Field]) -> Result<Answers> {
            let mut answers = Answers::new();
            for field in fields {
                self.asked.push(field.clone());
                match self.steps.pop_front() {
                    Some(Step::Answer(value)) => answers.insert(field.name, value),
                    Some(Step::Blank) => {}
                    Some(Step::Fail) => {
                        return Err(TrackerError::Prompt("not a terminal".to_string()))
                    }
                    None => {
                        return Err(TrackerError::Prompt(format!(
                            "script exhausted at field `{}`",
                            field.name
                        )))
                    }
                }
            }
            Ok(answers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompter;
    use super::*;

    #[test]
    fn blank_answers_read_as_missing() {
        let mut answers = Answers::new();
        answers.insert("name", "   ");
        answers.insert("title", " Engineer ");
        assert_eq!(answers.get("name"), None);
        assert_eq!(answers.get("title"), Some("Engineer"));
        assert_eq!(answers.get("salary"), None);
    }

    #[test]
    fn choices_keep_their_padding() {
        let mut answers = Answers::new();
        answers.insert("department", " Sales ");
        answers.insert("role", "  ");
        assert_eq!(answers.choice("department"), Some(" Sales "));
        assert_eq!(answers.choice("role"), None);
        assert_eq!(answers.choice("manager"), None);
    }

    #[test]
    fn all_requires_every_field() {
        let mut answers = Answers::new();
        answers.insert("first", "Jane");
        answers.insert("last", "Doe");
        assert_eq!(answers.all(["first", "last"]), Some(["Jane", "Doe"]));
        assert_eq!(answers.all(["first", "role"]), None);
    }

    #[test]
    fn scripted_prompter_replays_in_order() {
        let mut prompter = ScriptedPrompter::new().answer("Sales").blank();
        let answers = prompter
            .ask(&[Field::text("a", "A?"), Field::text("b", "B?")])
            .unwrap();
        assert_eq!(answers.get("a"), Some("Sales"));
        assert_eq!(answers.get("b"), None);
        assert_eq!(prompter.asked.len(), 2);
        assert!(prompter.ask(&[Field::text("c", "C?")]).is_err());
    }
}
