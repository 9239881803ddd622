use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::{Field, Prompter};
use crate::store::{DataStore, Statement};
use rust_decimal::Decimal;
use tracing::{info, warn};

pub fn run<S: DataStore, P: Prompter + ?Sized>(store: &mut S, prompter: &mut P) -> Result<CmdResult> {
    let departments = list::departments(store);
    let answers = prompter.ask(&[
        Field::text("title", "What is the name of your role?"),
        Field::text("salary", "What is the salary of the role?"),
        Field::choice(
            "department",
            "Which department does the role belong to?",
            departments.labels(),
        ),
    ])?;
    let (Some([title, salary]), Some(department)) =
        (answers.all(["title", "salary"]), answers.choice("department"))
    else {
        return Ok(CmdResult::skipped("role"));
    };

    let Ok(salary) = salary.parse::<Decimal>() else {
        warn!(salary, "salary is not a number, role not added");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "\"{}\" is not a valid salary. No role added.",
            salary
        ))));
    };

    let department_id = departments
        .resolve(department)
        .into_required("department", department)?;

    let written = store.execute(
        Statement::InsertRole,
        &[title.into(), salary.into(), department_id.into()],
    )?;
    info!(role = title, department_id, "role added");

    Ok(CmdResult::default()
        .with_written(written)
        .with_message(CmdMessage::success("Role added successfully!")))
}
