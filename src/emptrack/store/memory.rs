use super::{check_arity, DataStore, Statement};
use crate::error::{Result, TrackerError};
use crate::model::{Department, Employee, Id, Role, Row, Value};
use rust_decimal::Decimal;

/// A write as it reached the store, parameters in bind order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub statement: Statement,
    pub params: Vec<Value>,
}

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Mirrors the SQLite schema's integrity rules (unique department names, foreign keys) and
/// journals every write it is handed.
#[derive(Default)]
pub struct InMemoryStore {
    departments: Vec<Department>,
    roles: Vec<Role>,
    employees: Vec<Employee>,
    journal: Vec<WriteRecord>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write attempted against this store, oldest first.
    pub fn writes(&self) -> &[WriteRecord] {
        &self.journal
    }

    /// Make every subsequent read fail, simulating a lost connection.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    fn department_name(&self, id: Id) -> Option<&str> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    fn role(&self, id: Id) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    fn employee(&self, id: Id) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn insert_department(&mut self, params: &[Value]) -> Result<usize> {
        let name = text_param(&params[0], "name")?;
        if name.is_empty() {
            return Err(constraint("department name must not be empty"));
        }
        if self.departments.iter().any(|d| d.name == name) {
            return Err(constraint(&format!("department \"{}\" already exists", name)));
        }
        let id = next_id(self.departments.len());
        self.departments.push(Department { id, name });
        Ok(1)
    }

    fn insert_role(&mut self, params: &[Value]) -> Result<usize> {
        let title = text_param(&params[0], "title")?;
        let salary = decimal_param(&params[1])?;
        let department_id = id_param(&params[2], "department_id")?;
        if self.department_name(department_id).is_none() {
            return Err(foreign_key("department", department_id));
        }
        let id = next_id(self.roles.len());
        self.roles.push(Role {
            id,
            title,
            salary,
            department_id,
        });
        Ok(1)
    }

    fn insert_employee(&mut self, params: &[Value]) -> Result<usize> {
        let first_name = text_param(&params[0], "first_name")?;
        let last_name = text_param(&params[1], "last_name")?;
        let role_id = id_param(&params[2], "role_id")?;
        let manager_id = match &params[3] {
            Value::Null => None,
            other => Some(id_param(other, "manager_id")?),
        };
        if self.role(role_id).is_none() {
            return Err(foreign_key("role", role_id));
        }
        if let Some(manager_id) = manager_id {
            if self.employee(manager_id).is_none() {
                return Err(foreign_key("employee", manager_id));
            }
        }
        let id = next_id(self.employees.len());
        self.employees.push(Employee {
            id,
            first_name,
            last_name,
            role_id,
            manager_id,
        });
        Ok(1)
    }

    fn update_employee_role(&mut self, params: &[Value]) -> Result<usize> {
        let role_id = id_param(&params[0], "role_id")?;
        let employee_id = id_param(&params[1], "employee_id")?;
        if self.role(role_id).is_none() {
            return Err(foreign_key("role", role_id));
        }
        match self.employees.iter_mut().find(|e| e.id == employee_id) {
            Some(employee) => {
                employee.role_id = role_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn view_roles(&self) -> Vec<Row> {
        self.roles
            .iter()
            .map(|r| {
                Row::new()
                    .with("id", r.id)
                    .with("title", r.title.as_str())
                    .with("department", self.department_name(r.department_id).unwrap_or(""))
                    .with("salary", r.salary)
            })
            .collect()
    }

    fn view_employees(&self) -> Vec<Row> {
        self.employees
            .iter()
            .filter_map(|e| {
                let role = self.role(e.role_id)?;
                let manager = e
                    .manager_id
                    .and_then(|id| self.employee(id))
                    .map(|m| Value::Text(m.full_name()))
                    .unwrap_or(Value::Null);
                Some(
                    Row::new()
                        .with("id", e.id)
                        .with("first_name", e.first_name.as_str())
                        .with("last_name", e.last_name.as_str())
                        .with("title", role.title.as_str())
                        .with(
                            "department",
                            self.department_name(role.department_id).unwrap_or(""),
                        )
                        .with("salary", role.salary)
                        .with("manager", manager),
                )
            })
            .collect()
    }
}

impl DataStore for InMemoryStore {
    fn query(&self, statement: Statement, _params: &[Value]) -> Result<Vec<Row>> {
        if self.failing {
            return Err(TrackerError::Store("connection refused".to_string()));
        }
        let rows = match statement {
            Statement::AllDepartments | Statement::ViewDepartments => self
                .departments
                .iter()
                .map(|d| Row::new().with("id", d.id).with("name", d.name.as_str()))
                .collect(),
            Statement::AllRoles => self
                .roles
                .iter()
                .map(|r| {
                    Row::new()
                        .with("id", r.id)
                        .with("title", r.title.as_str())
                        .with("salary", r.salary)
                        .with("department_id", r.department_id)
                })
                .collect(),
            Statement::AllEmployees => self
                .employees
                .iter()
                .map(|e| {
                    Row::new()
                        .with("id", e.id)
                        .with("first_name", e.first_name.as_str())
                        .with("last_name", e.last_name.as_str())
                        .with("role_id", e.role_id)
                        .with("manager_id", e.manager_id)
                })
                .collect(),
            Statement::ViewRoles => self.view_roles(),
            Statement::ViewEmployees => self.view_employees(),
            write => {
                return Err(TrackerError::Store(format!(
                    "{} is a write statement",
                    write
                )))
            }
        };
        Ok(rows)
    }

    fn execute(&mut self, statement: Statement, params: &[Value]) -> Result<usize> {
        check_arity(statement, params)?;
        self.journal.push(WriteRecord {
            statement,
            params: params.to_vec(),
        });
        match statement {
            Statement::InsertDepartment => self.insert_department(params),
            Statement::InsertRole => self.insert_role(params),
            Statement::InsertEmployee => self.insert_employee(params),
            Statement::UpdateEmployeeRole => self.update_employee_role(params),
            read => Err(TrackerError::Store(format!("{} is a read statement", read))),
        }
    }
}

/// Rows are never deleted, so ids follow the row count like SQLite's rowids.
fn next_id(len: usize) -> Id {
    len as Id + 1
}

fn text_param(value: &Value, name: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| constraint(&format!("{} must be text", name)))
}

fn id_param(value: &Value, name: &str) -> Result<Id> {
    value
        .as_i64()
        .ok_or_else(|| constraint(&format!("{} must be an integer id", name)))
}

fn decimal_param(value: &Value) -> Result<Decimal> {
    match value {
        Value::Decimal(d) => Ok(*d),
        Value::Integer(n) => Ok(Decimal::from(*n)),
        Value::Text(s) => s
            .parse()
            .map_err(|_| constraint(&format!("\"{}\" is not a decimal", s))),
        Value::Null => Err(constraint("salary must not be null")),
    }
}

fn constraint(message: &str) -> TrackerError {
    TrackerError::Store(format!("constraint failed: {}", message))
}

fn foreign_key(table: &str, id: Id) -> TrackerError {
    TrackerError::Store(format!(
        "FOREIGN KEY constraint failed: no {} with id {}",
        table, id
    ))
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_department(mut self, name: &str) -> Self {
            self.store
                .execute(Statement::InsertDepartment, &[name.into()])
                .unwrap();
            self
        }

        pub fn with_role(mut self, title: &str, salary: &str, department: &str) -> Self {
            let department_id = self
                .store
                .departments
                .iter()
                .find(|d| d.name == department)
                .map(|d| d.id)
                .unwrap();
            let salary: Decimal = salary.parse().unwrap();
            self.store
                .execute(
                    Statement::InsertRole,
                    &[title.into(), salary.into(), department_id.into()],
                )
                .unwrap();
            self
        }

        pub fn with_employee(
            mut self,
            first_name: &str,
            last_name: &str,
            role: &str,
            manager: Option<&str>,
        ) -> Self {
            let role_id = self
                .store
                .roles
                .iter()
                .find(|r| r.title == role)
                .map(|r| r.id)
                .unwrap();
            let manager_id = manager.map(|full_name| {
                self.store
                    .employees
                    .iter()
                    .find(|e| e.full_name() == full_name)
                    .map(|e| e.id)
                    .unwrap()
            });
            self.store
                .execute(
                    Statement::InsertEmployee,
                    &[
                        first_name.into(),
                        last_name.into(),
                        role_id.into(),
                        manager_id.into(),
                    ],
                )
                .unwrap();
            self
        }

        /// Two departments, three roles, three employees with one reporting line.
        pub fn with_sample_directory(self) -> Self {
            self.with_department("Engineering")
                .with_department("Sales")
                .with_role("Engineer", "120000", "Engineering")
                .with_role("Engineering Manager", "150000", "Engineering")
                .with_role("Account Executive", "90000", "Sales")
                .with_employee("Grace", "Hopper", "Engineering Manager", None)
                .with_employee("Linus", "Torvalds", "Engineer", Some("Grace Hopper"))
                .with_employee("Mary", "Kay", "Account Executive", None)
        }

        /// Drop the journal entries produced while building the fixture.
        pub fn build(mut self) -> InMemoryStore {
            self.store.journal.clear();
            self.store
        }
    }
}
