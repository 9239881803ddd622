//! # Storage Layer
//!
//! This module defines the storage abstraction for emptrack. The [`DataStore`] trait is the
//! only way the command layer talks to the database: it names a [`Statement`], passes
//! positional parameters, and gets [`Row`]s back.
//!
//! Commands never see SQL. Each statement owns its SQL text (see [`Statement::sql`]) and the
//! order of its parameters, so a backend that does not speak SQL can still honour the
//! same contract.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production store backed by a SQLite file
//!   - Bootstraps the three tables on open
//!   - Foreign keys enforced by SQLite
//!
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!   - Same statements, same integrity checks
//!   - Keeps a journal of every write for assertions on parameter order
//!
//! ## Schema
//!
//! ```text
//! department(id, name UNIQUE)
//! role(id, title, salary, department_id → department)
//! employee(id, first_name, last_name, role_id → role, manager_id → employee NULL)
//! ```

use crate::error::Result;
use crate::model::{Row, Value};
use std::fmt;

pub mod memory;
pub mod sqlite;

/// Every read and write the application issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Raw department rows: `id, name`.
    AllDepartments,
    /// Raw role rows: `id, title, salary, department_id`.
    AllRoles,
    /// Raw employee rows: `id, first_name, last_name, role_id, manager_id`.
    AllEmployees,
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    /// Params: `name`.
    InsertDepartment,
    /// Params: `title, salary, department_id`.
    InsertRole,
    /// Params: `first_name, last_name, role_id, manager_id`.
    InsertEmployee,
    /// Params: `role_id, employee_id`.
    UpdateEmployeeRole,
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::AllDepartments => "all_departments",
            Statement::AllRoles => "all_roles",
            Statement::AllEmployees => "all_employees",
            Statement::ViewDepartments => "view_departments",
            Statement::ViewRoles => "view_roles",
            Statement::ViewEmployees => "view_employees",
            Statement::InsertDepartment => "add_department",
            Statement::InsertRole => "add_role",
            Statement::InsertEmployee => "add_employee",
            Statement::UpdateEmployeeRole => "update_employee_role",
        }
    }

    /// Number of positional parameters the statement binds.
    pub fn arity(&self) -> usize {
        match self {
            Statement::InsertDepartment => 1,
            Statement::InsertRole => 3,
            Statement::InsertEmployee => 4,
            Statement::UpdateEmployeeRole => 2,
            _ => 0,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Statement::AllDepartments => "SELECT id, name FROM department ORDER BY id",
            Statement::AllRoles => {
                "SELECT id, title, salary, department_id FROM role ORDER BY id"
            }
            Statement::AllEmployees => {
                "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id"
            }
            Statement::ViewDepartments => "SELECT id, name FROM department ORDER BY id",
            Statement::ViewRoles => {
                "SELECT role.id, role.title, department.name AS department, role.salary \
                 FROM role \
                 JOIN department ON role.department_id = department.id \
                 ORDER BY role.id"
            }
            Statement::ViewEmployees => {
                "SELECT e.id, e.first_name, e.last_name, role.title, \
                        department.name AS department, role.salary, \
                        m.first_name || ' ' || m.last_name AS manager \
                 FROM employee e \
                 JOIN role ON e.role_id = role.id \
                 JOIN department ON role.department_id = department.id \
                 LEFT JOIN employee m ON e.manager_id = m.id \
                 ORDER BY e.id"
            }
            Statement::InsertDepartment => "INSERT INTO department (name) VALUES (?1)",
            Statement::InsertRole => {
                "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)"
            }
            Statement::InsertEmployee => {
                "INSERT INTO employee (first_name, last_name, role_id, manager_id) \
                 VALUES (?1, ?2, ?3, ?4)"
            }
            Statement::UpdateEmployeeRole => "UPDATE employee SET role_id = ?1 WHERE id = ?2",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract interface for the directory database.
///
/// Reads and writes are split so that listing never needs a mutable borrow; at most one
/// statement is in flight at any time.
pub trait DataStore {
    /// Run a read statement and return its rows in query order.
    fn query(&self, statement: Statement, params: &[Value]) -> Result<Vec<Row>>;

    /// Run a write statement, returning the number of affected rows.
    fn execute(&mut self, statement: Statement, params: &[Value]) -> Result<usize>;
}

pub(crate) fn check_arity(statement: Statement, params: &[Value]) -> Result<()> {
    if params.len() != statement.arity() {
        return Err(crate::error::TrackerError::Store(format!(
            "{} expects {} parameter(s), got {}",
            statement,
            statement.arity(),
            params.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_have_parameters() {
        assert_eq!(Statement::InsertRole.arity(), 3);
        assert_eq!(Statement::ViewEmployees.arity(), 0);
        assert_eq!(Statement::UpdateEmployeeRole.arity(), 2);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let err = check_arity(Statement::InsertDepartment, &[]).unwrap_err();
        assert!(err.to_string().contains("add_department expects 1"));
    }
}
