//! Populates an empty directory with a small sample organisation.
//!
//! Every row goes through the same statements and label lookups the interactive flows use,
//! so seeding also exercises foreign-key resolution end to end.

use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::lookup::NO_MANAGER_LABEL;
use crate::store::{DataStore, Statement};
use rust_decimal::Decimal;
use tracing::info;

const DEPARTMENTS: &[&str] = &["Engineering", "Finance", "Legal", "Sales"];

/// (title, salary, department)
const ROLES: &[(&str, &str, &str)] = &[
    ("Lead Engineer", "150000", "Engineering"),
    ("Software Engineer", "120000", "Engineering"),
    ("Account Manager", "160000", "Finance"),
    ("Accountant", "125000", "Finance"),
    ("Legal Team Lead", "250000", "Legal"),
    ("Lawyer", "190000", "Legal"),
    ("Sales Lead", "100000", "Sales"),
    ("Salesperson", "80000", "Sales"),
];

/// (first name, last name, role, manager); managers appear before their reports.
const EMPLOYEES: &[(&str, &str, &str, &str)] = &[
    ("John", "Doe", "Sales Lead", NO_MANAGER_LABEL),
    ("Mike", "Chan", "Salesperson", "John Doe"),
    ("Ashley", "Rodriguez", "Lead Engineer", NO_MANAGER_LABEL),
    ("Kevin", "Tupik", "Software Engineer", "Ashley Rodriguez"),
    ("Kunal", "Singh", "Account Manager", NO_MANAGER_LABEL),
    ("Malia", "Brown", "Accountant", "Kunal Singh"),
    ("Sarah", "Lourd", "Legal Team Lead", NO_MANAGER_LABEL),
    ("Tom", "Allen", "Lawyer", "Sarah Lourd"),
];

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    if !store.query(Statement::AllDepartments, &[])?.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "The directory already has departments; nothing seeded.",
        )));
    }

    let mut written = 0;
    for name in DEPARTMENTS {
        written += store.execute(Statement::InsertDepartment, &[(*name).into()])?;
    }

    let departments = list::departments(store);
    for (title, salary, department) in ROLES {
        let salary: Decimal = salary
            .parse()
            .map_err(|e: rust_decimal::Error| TrackerError::InvalidInput(e.to_string()))?;
        let department_id = departments
            .resolve(department)
            .into_required("department", department)?;
        written += store.execute(
            Statement::InsertRole,
            &[(*title).into(), salary.into(), department_id.into()],
        )?;
    }

    let roles = list::roles(store);
    for (first_name, last_name, role, manager) in EMPLOYEES {
        let role_id = roles.resolve(role).into_required("role", role)?;
        let manager_id = list::managers(store)
            .resolve(manager)
            .into_result("manager", manager)?;
        written += store.execute(
            Statement::InsertEmployee,
            &[
                (*first_name).into(),
                (*last_name).into(),
                role_id.into(),
                manager_id.into(),
            ],
        )?;
    }

    info!(rows = written, "sample directory seeded");
    Ok(CmdResult::default()
        .with_written(written)
        .with_message(CmdMessage::success(format!(
            "Seeded {} departments, {} roles and {} employees.",
            DEPARTMENTS.len(),
            ROLES.len(),
            EMPLOYEES.len()
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::sqlite::SqliteStore;

    #[test]
    fn seeds_an_empty_store() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();

        assert_eq!(
            result.written,
            DEPARTMENTS.len() + ROLES.len() + EMPLOYEES.len()
        );
        assert_eq!(list::employees(&store).len(), EMPLOYEES.len());
    }

    #[test]
    fn reports_link_to_their_managers() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        run(&mut store).unwrap();

        let rows = store.query(Statement::ViewEmployees, &[]).unwrap();
        let mike = rows
            .iter()
            .find(|r| r.get("first_name") == Some(&Value::Text("Mike".into())))
            .unwrap();
        assert_eq!(mike.get("manager"), Some(&Value::Text("John Doe".into())));
        assert_eq!(mike.get("department"), Some(&Value::Text("Sales".into())));
    }

    #[test]
    fn leaves_existing_data_alone() {
        let mut store = StoreFixture::new().with_department("Ops").build();
        let result = run(&mut store).unwrap();

        assert_eq!(result.written, 0);
        assert!(store.writes().is_empty());
    }
}
