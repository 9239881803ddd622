use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::{Field, Prompter};
use crate::store::{DataStore, Statement};
use tracing::info;

pub fn run<S: DataStore, P: Prompter + ?Sized>(store: &mut S, prompter: &mut P) -> Result<CmdResult> {
    let roles = list::roles(store);
    let managers = list::managers(store);
    let answers = prompter.ask(&[
        Field::text("first_name", "What is the employee's first name?"),
        Field::text("last_name", "What is the employee's last name?"),
        Field::choice("role", "What is the employee's role?", roles.labels()),
        Field::choice("manager", "Who is the employee's manager?", managers.labels()),
    ])?;
    let (Some([first_name, last_name]), Some(role), Some(manager)) = (
        answers.all(["first_name", "last_name"]),
        answers.choice("role"),
        answers.choice("manager"),
    ) else {
        return Ok(CmdResult::skipped("employee"));
    };

    let role_id = roles.resolve(role).into_required("role", role)?;
    let manager_id = managers.resolve(manager).into_result("manager", manager)?;

    let written = store.execute(
        Statement::InsertEmployee,
        &[
            first_name.into(),
            last_name.into(),
            role_id.into(),
            manager_id.into(),
        ],
    )?;
    info!(first_name, last_name, role_id, ?manager_id, "employee added");

    Ok(CmdResult::default()
        .with_written(written)
        .with_message(CmdMessage::success("Employee added successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::lookup::NO_MANAGER_LABEL;
    use crate::model::Value;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn inserts_with_resolved_role_and_manager() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        let mut prompter =
            ScriptedPrompter::new().answers(&["Ken", "Thompson", "Engineer", "Grace Hopper"]);

        run(&mut store, &mut prompter).unwrap();

        assert_eq!(
            store.writes()[0].params,
            vec![
                Value::Text("Ken".into()),
                Value::Text("Thompson".into()),
                Value::Integer(1),
                Value::Integer(1),
            ]
        );
    }

    #[test]
    fn none_manager_is_written_as_null() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        let mut prompter = ScriptedPrompter::new().answers(&[
            "Ken",
            "Thompson",
            "Account Executive",
            NO_MANAGER_LABEL,
        ]);

        let result = run(&mut store, &mut prompter).unwrap();

        assert_eq!(result.written, 1);
        assert_eq!(store.writes()[0].params[2], Value::Integer(3));
        assert_eq!(store.writes()[0].params[3], Value::Null);
    }

    #[test]
    fn manager_choices_end_with_none() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        let mut prompter =
            ScriptedPrompter::new().answers(&["Ken", "Thompson", "Engineer", NO_MANAGER_LABEL]);
        run(&mut store, &mut prompter).unwrap();

        let choices = prompter.choices_for("manager").unwrap();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[3], NO_MANAGER_LABEL);
    }

    #[test]
    fn missing_last_name_writes_nothing() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        let mut prompter = ScriptedPrompter::new()
            .answer("Ken")
            .blank()
            .answers(&["Engineer", NO_MANAGER_LABEL]);

        let result = run(&mut store, &mut prompter).unwrap();

        assert!(store.writes().is_empty());
        assert_eq!(result.messages[0].content, "No employee added.");
    }

    #[test]
    fn vanished_manager_is_an_error_not_no_manager() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        let mut prompter =
            ScriptedPrompter::new().answers(&["Ken", "Thompson", "Engineer", "Dennis Ritchie"]);

        let err = run(&mut store, &mut prompter).unwrap_err();

        assert!(matches!(err, TrackerError::Unresolved { kind: "manager", .. }));
        assert!(store.writes().is_empty());
    }
}
