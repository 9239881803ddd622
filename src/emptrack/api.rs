//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every emptrack operation, whichever UI drives it (the interactive menu, the one-shot
//! subcommands, tests).
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: Questions go through the caller's [`Prompter`], answers come back
//!   as [`CmdResult`]s
//!
//! ## Generic Over DataStore
//!
//! `TrackerApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TrackerApi<SqliteStore>`
//! - Testing: `TrackerApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::menu::Action;
use crate::prompt::Prompter;
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::view::Table;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for emptrack operations.
pub struct TrackerApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TrackerApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hands the store back so the caller can close it.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn view(&self, table: Table) -> Result<CmdResult> {
        commands::view::run(&self.store, table)
    }

    pub fn add_department<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::add_department::run(&mut self.store, prompter)
    }

    pub fn add_role<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::add_role::run(&mut self.store, prompter)
    }

    pub fn add_employee<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::add_employee::run(&mut self.store, prompter)
    }

    pub fn update_employee_role<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
    ) -> Result<CmdResult> {
        commands::update_role::run(&mut self.store, prompter)
    }

    pub fn seed(&mut self) -> Result<CmdResult> {
        commands::seed::run(&mut self.store)
    }

    /// Runs one menu action. `Quit` does nothing here; ending the loop is the caller's job.
    pub fn perform<P: Prompter + ?Sized>(
        &mut self,
        action: Action,
        prompter: &mut P,
    ) -> Result<CmdResult> {
        match action {
            Action::ViewEmployees => self.view(Table::Employees),
            Action::ViewRoles => self.view(Table::Roles),
            Action::ViewDepartments => self.view(Table::Departments),
            Action::AddEmployee => self.add_employee(prompter),
            Action::AddRole => self.add_role(prompter),
            Action::AddDepartment => self.add_department(prompter),
            Action::UpdateEmployeeRole => self.update_employee_role(prompter),
            Action::Quit => Ok(CmdResult::default()),
        }
    }
}
