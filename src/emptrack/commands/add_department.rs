use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::{Field, Prompter};
use crate::store::{DataStore, Statement};
use tracing::info;

pub fn run<S: DataStore, P: Prompter + ?Sized>(store: &mut S, prompter: &mut P) -> Result<CmdResult> {
    let answers = prompter.ask(&[Field::text("name", "What is the name of your department?")])?;
    let Some(name) = answers.get("name") else {
        return Ok(CmdResult::skipped("department"));
    };

    let written = store.execute(Statement::InsertDepartment, &[name.into()])?;
    info!(department = name, "department added");

    Ok(CmdResult::default()
        .with_written(written)
        .with_message(CmdMessage::success(format!(
            "Department \"{}\" added successfully!",
            name
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn inserts_named_department() {
        let mut store = InMemoryStore::new();
        let mut prompter = ScriptedPrompter::new().answer("Engineering");

        let result = run(&mut store, &mut prompter).unwrap();

        assert_eq!(result.written, 1);
        assert_eq!(store.writes().len(), 1);
        assert_eq!(store.writes()[0].statement, Statement::InsertDepartment);
        assert_eq!(
            store.writes()[0].params,
            vec![Value::Text("Engineering".into())]
        );
    }

    #[test]
    fn blank_name_writes_nothing() {
        let mut store = InMemoryStore::new();
        let mut prompter = ScriptedPrompter::new().blank();

        let result = run(&mut store, &mut prompter).unwrap();

        assert!(store.writes().is_empty());
        assert_eq!(result.written, 0);
        assert_eq!(result.messages[0].content, "No department added.");
    }

    #[test]
    fn whitespace_name_writes_nothing() {
        let mut store = InMemoryStore::new();
        let mut prompter = ScriptedPrompter::new().answer("   ");
        run(&mut store, &mut prompter).unwrap();
        assert!(store.writes().is_empty());
    }

    #[test]
    fn duplicate_name_is_a_store_error() {
        let mut store = InMemoryStore::new();
        run(&mut store, &mut ScriptedPrompter::new().answer("Sales")).unwrap();
        let second = run(&mut store, &mut ScriptedPrompter::new().answer("Sales"));
        assert!(second.is_err());
    }
}
