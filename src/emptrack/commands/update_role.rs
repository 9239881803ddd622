use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::prompt::{Field, Prompter};
use crate::store::{DataStore, Statement};
use tracing::info;

pub fn run<S: DataStore, P: Prompter + ?Sized>(store: &mut S, prompter: &mut P) -> Result<CmdResult> {
    let employees = list::employees(store);
    let roles = list::roles(store);
    let answers = prompter.ask(&[
        Field::choice(
            "employee",
            "Which employee's role do you want to update?",
            employees.labels(),
        ),
        Field::choice(
            "role",
            "Which role do you want to assign the selected employee?",
            roles.labels(),
        ),
    ])?;
    let (Some(employee), Some(role)) = (answers.choice("employee"), answers.choice("role")) else {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No role updated.")));
    };

    let employee_id = employees
        .resolve(employee)
        .into_required("employee", employee)?;
    let role_id = roles.resolve(role).into_required("role", role)?;

    let written = store.execute(
        Statement::UpdateEmployeeRole,
        &[role_id.into(), employee_id.into()],
    )?;
    if written == 0 {
        return Err(TrackerError::Store(format!(
            "employee \"{}\" (id {}) no longer exists",
            employee, employee_id
        )));
    }
    info!(employee_id, role_id, "employee role updated");

    Ok(CmdResult::default()
        .with_written(written)
        .with_message(CmdMessage::success("Employee role updated successfully!")))
}
