use super::{check_arity, DataStore, Statement};
use crate::error::{Result, TrackerError};
use crate::model::{Row, Value};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, ToSql};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS department (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(name) > 0)
);

CREATE TABLE IF NOT EXISTS role (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    title         TEXT NOT NULL,
    salary        TEXT NOT NULL,
    department_id INTEGER NOT NULL REFERENCES department(id)
);

CREATE TABLE IF NOT EXISTS employee (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    role_id    INTEGER NOT NULL REFERENCES role(id),
    manager_id INTEGER REFERENCES employee(id) ON DELETE SET NULL
);
";

/// Columns holding exact decimals stored as TEXT.
const DECIMAL_COLUMNS: &[&str] = &["salary"];

/// SQLite-backed directory store.
///
/// Holds the single connection for the whole session: opened before the menu loop starts
/// and released through [`SqliteStore::close`] when the user quits.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and bootstrap the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TrackerError::Io)?;
            }
        }

        let conn = Connection::open(path)?;
        bootstrap(&conn)?;
        debug!(path = %path.display(), "opened directory database");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        bootstrap(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Location of the database file; `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, surfacing any error SQLite reports while flushing.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| TrackerError::Sqlite(e))
    }
}

fn bootstrap(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

impl DataStore for SqliteStore {
    fn query(&self, statement: Statement, params: &[Value]) -> Result<Vec<Row>> {
        debug!(%statement, params = params.len(), "query");
        let mut stmt = self.conn.prepare_cached(statement.sql())?;
        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
            let mut out = Row::new();
            for (i, name) in names.iter().enumerate() {
                out.push(name.clone(), decode(name, row.get_ref(i)?));
            }
            Ok(out)
        })?;

        let collected = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(collected)
    }

    fn execute(&mut self, statement: Statement, params: &[Value]) -> Result<usize> {
        check_arity(statement, params)?;
        debug!(%statement, params = params.len(), "execute");
        let affected = self
            .conn
            .execute(statement.sql(), params_from_iter(params.iter()))?;
        Ok(affected)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(n) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*n)),
            Value::Decimal(d) => ToSqlOutput::Owned(rusqlite::types::Value::Text(d.to_string())),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

fn decode(column: &str, raw: ValueRef<'_>) -> Value {
    match raw {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Integer(n),
        ValueRef::Real(f) => Decimal::try_from(f)
            .map(Value::Decimal)
            .unwrap_or_else(|_| Value::Text(f.to_string())),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            if DECIMAL_COLUMNS.contains(&column) {
                if let Ok(d) = text.parse::<Decimal>() {
                    return Value::Decimal(d);
                }
            }
            Value::Text(text)
        }
    }
}
