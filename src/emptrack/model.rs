//! Core data types: the generic [`Row`]/[`Value`] shape returned by the store, and the
//! typed [`Department`], [`Role`] and [`Employee`] records built from it.

use crate::error::{Result, TrackerError};
use rust_decimal::Decimal;
use std::fmt;

/// Generated primary key of every table.
pub type Id = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Decimal(Decimal),
    Text(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<Option<i64>> for Value {
    fn from(n: Option<i64>) -> Self {
        n.map(Value::Integer).unwrap_or(Value::Null)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// One result row. Column order is the statement's select order and drives the
/// header order when the row is rendered as a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn require_i64(&self, column: &str) -> Result<i64> {
        self.get(column)
            .and_then(Value::as_i64)
            .ok_or_else(|| missing_column(column))
    }

    fn require_text(&self, column: &str) -> Result<String> {
        self.get(column)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| missing_column(column))
    }

    fn optional_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => v.as_i64().map(Some).ok_or_else(|| missing_column(column)),
        }
    }

    fn require_decimal(&self, column: &str) -> Result<Decimal> {
        match self.get(column) {
            Some(Value::Decimal(d)) => Ok(*d),
            Some(Value::Integer(n)) => Ok(Decimal::from(*n)),
            Some(Value::Text(s)) => s.parse().map_err(|_| missing_column(column)),
            _ => Err(missing_column(column)),
        }
    }
}

fn missing_column(column: &str) -> TrackerError {
    TrackerError::Store(format!("row has no usable `{}` column", column))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: Id,
    pub name: String,
}

impl TryFrom<&Row> for Department {
    type Error = TrackerError;

    fn try_from(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.require_i64("id")?,
            name: row.require_text("name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Id,
    pub title: String,
    pub salary: Decimal,
    pub department_id: Id,
}

impl TryFrom<&Row> for Role {
    type Error = TrackerError;

    fn try_from(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.require_i64("id")?,
            title: row.require_text("title")?,
            salary: row.require_decimal("salary")?,
            department_id: row.require_i64("department_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Id,
    pub manager_id: Option<Id>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TryFrom<&Row> for Employee {
    type Error = TrackerError;

    fn try_from(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.require_i64("id")?,
            first_name: row.require_text("first_name")?,
            last_name: row.require_text("last_name")?,
            role_id: row.require_i64("role_id")?,
            manager_id: row.optional_i64("manager_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_keeps_column_order() {
        let row = Row::new().with("id", 1).with("name", "Sales");
        let names: Vec<_> = row.column_names().collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn employee_from_row_with_null_manager() {
        let row = Row::new()
            .with("id", 3)
            .with("first_name", "Jane")
            .with("last_name", "Doe")
            .with("role_id", 9)
            .with("manager_id", Value::Null);

        let employee = Employee::try_from(&row).unwrap();
        assert_eq!(employee.manager_id, None);
        assert_eq!(employee.full_name(), "Jane Doe");
    }

    #[test]
    fn role_from_row_parses_text_salary() {
        let row = Row::new()
            .with("id", 2)
            .with("title", "Engineer")
            .with("salary", "125000.50")
            .with("department_id", 1);

        let role = Role::try_from(&row).unwrap();
        assert_eq!(role.salary, "125000.50".parse::<Decimal>().unwrap());
    }

    #[test]
    fn missing_column_is_a_store_error() {
        let row = Row::new().with("id", 1);
        assert!(matches!(
            Department::try_from(&row),
            Err(TrackerError::Store(_))
        ));
    }

    #[test]
    fn null_displays_as_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(Some(4)).to_string(), "4");
    }
}
