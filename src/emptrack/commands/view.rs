use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, Statement};
use std::fmt;

/// The three displayable tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Departments,
    Roles,
    Employees,
}

impl Table {
    pub fn statement(&self) -> Statement {
        match self {
            Table::Departments => Statement::ViewDepartments,
            Table::Roles => Statement::ViewRoles,
            Table::Employees => Statement::ViewEmployees,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Table::Departments => "departments",
            Table::Roles => "roles",
            Table::Employees => "employees",
        })
    }
}

pub fn run<S: DataStore>(store: &S, table: Table) -> Result<CmdResult> {
    let rows = store.query(table.statement(), &[])?;
    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::info(format!("No {} yet.", table)));
    }
    Ok(result.with_rows(rows))
}
