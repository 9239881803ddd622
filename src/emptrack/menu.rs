//! # Menu Loop
//!
//! The interactive session is one explicit loop with a single state, "awaiting action":
//! ask for an action, run it to completion, hand the result to the output sink, pause,
//! ask again. Only one prompt is ever in flight and nothing is carried between iterations;
//! every flow re-reads its choice lists from the store.
//!
//! Failures never end the session. A failed action is logged and reported through the
//! sink, then the menu comes back. The one exception is the menu prompt itself: if it fails
//! [`MAX_PROMPT_FAILURES`] times in a row there is no way left to talk to the user, and
//! the loop gives up with [`TrackerError::Prompt`].

use crate::api::TrackerApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::prompt::{Field, Prompter};
use crate::store::DataStore;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const ACTION_FIELD: &str = "action";
pub const MAX_PROMPT_FAILURES: usize = 3;

/// The eight menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewEmployees,
    AddEmployee,
    UpdateEmployeeRole,
    ViewRoles,
    AddRole,
    ViewDepartments,
    AddDepartment,
    Quit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::ViewEmployees,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::ViewRoles,
        Action::AddRole,
        Action::ViewDepartments,
        Action::AddDepartment,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::ViewEmployees => "View All Employees",
            Action::AddEmployee => "Add Employee",
            Action::UpdateEmployeeRole => "Update Employee Role",
            Action::ViewRoles => "View All Roles",
            Action::AddRole => "Add Role",
            Action::ViewDepartments => "View All Departments",
            Action::AddDepartment => "Add Department",
            Action::Quit => "Quit",
        }
    }

    pub fn from_label(label: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.label() == label)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn menu_field() -> Field {
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    Field::choice(ACTION_FIELD, "What would you like to do?", &labels)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Completed non-Quit actions, failed ones included.
    pub iterations: usize,
}

/// Drives the menu until the user picks Quit.
///
/// `output` sees every action's result (a synthesized error message when the action
/// failed). `pause` is slept after each action, zero skips it.
pub fn run<S, P, F>(
    api: &mut TrackerApi<S>,
    prompter: &mut P,
    pause: Duration,
    mut output: F,
) -> Result<LoopSummary>
where
    S: DataStore,
    P: Prompter + ?Sized,
    F: FnMut(Action, &CmdResult),
{
    let mut iterations = 0;
    let mut failures = 0;

    loop {
        let action = match choose(prompter) {
            Ok(Some(action)) => {
                failures = 0;
                action
            }
            Ok(None) => {
                failures = 0;
                debug!("no action chosen, asking again");
                continue;
            }
            Err(e) => {
                failures += 1;
                error!(error = %e, attempt = failures, "menu prompt failed");
                if failures >= MAX_PROMPT_FAILURES {
                    return Err(TrackerError::Prompt(format!(
                        "menu prompt failed {} times in a row: {}",
                        failures, e
                    )));
                }
                continue;
            }
        };

        if action == Action::Quit {
            info!(iterations, "quit");
            return Ok(LoopSummary { iterations });
        }

        debug!(%action, "running action");
        match api.perform(action, prompter) {
            Ok(result) => output(action, &result),
            Err(e) => {
                error!(%action, error = %e, "action failed, back to the menu");
                let result = CmdResult::default().with_message(CmdMessage::error(e.to_string()));
                output(action, &result);
            }
        }
        iterations += 1;

        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

fn choose<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<Action>> {
    let answers = prompter.ask(&[menu_field()])?;
    let Some(label) = answers.choice(ACTION_FIELD) else {
        return Ok(None);
    };
    let action = Action::from_label(label);
    if action.is_none() {
        warn!(label, "unknown menu entry");
    }
    Ok(action)
}
