//! Entity listers: fresh choice lists for the mutation flows.
//!
//! A lister never fails. A store error is logged and yields an empty lookup, so the prompt
//! shows an empty (or "None"-only) choice list instead of tearing down the menu loop.

use crate::lookup::Lookup;
use crate::model::{Department, Employee, Role, Row};
use crate::store::{DataStore, Statement};
use tracing::warn;

pub fn departments<S: DataStore>(store: &S) -> Lookup {
    let rows: Vec<Department> = load(store, Statement::AllDepartments);
    Lookup::build(&rows, |d| d.name.clone(), |d| d.id)
}

pub fn roles<S: DataStore>(store: &S) -> Lookup {
    let rows: Vec<Role> = load(store, Statement::AllRoles);
    Lookup::build(&rows, |r| r.title.clone(), |r| r.id)
}

pub fn employees<S: DataStore>(store: &S) -> Lookup {
    let rows: Vec<Employee> = load(store, Statement::AllEmployees);
    Lookup::build(&rows, Employee::full_name, |e| e.id)
}

/// The employees list followed by the `("None", null)` entry.
pub fn managers<S: DataStore>(store: &S) -> Lookup {
    employees(store).with_none_sentinel()
}

fn load<S, T>(store: &S, statement: Statement) -> Vec<T>
where
    S: DataStore,
    T: for<'a> TryFrom<&'a Row, Error = crate::error::TrackerError>,
{
    let decoded = store
        .query(statement, &[])
        .and_then(|rows| {
            rows.iter()
                .map(|row| T::try_from(row))
                .collect::<std::result::Result<Vec<T>, _>>()
        });
    match decoded {
        Ok(records) => records,
        Err(e) => {
            warn!(%statement, error = %e, "listing failed, offering an empty choice list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{Resolution, NO_MANAGER_LABEL};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn departments_are_labelled_by_name() {
        let store = StoreFixture::new()
            .with_department("Engineering")
            .with_department("Sales")
            .build();

        let lookup = departments(&store);
        assert_eq!(lookup.labels(), &["Engineering", "Sales"]);
        assert_eq!(lookup.resolve("Sales"), Resolution::Id(2));
    }

    #[test]
    fn roles_are_labelled_by_title() {
        let store = StoreFixture::new().with_sample_directory().build();
        let lookup = roles(&store);
        assert_eq!(
            lookup.labels(),
            &["Engineer", "Engineering Manager", "Account Executive"]
        );
    }

    #[test]
    fn employees_are_labelled_by_full_name() {
        let store = StoreFixture::new().with_sample_directory().build();
        let lookup = employees(&store);
        assert_eq!(
            lookup.labels(),
            &["Grace Hopper", "Linus Torvalds", "Mary Kay"]
        );
        assert_eq!(lookup.resolve("Linus Torvalds"), Resolution::Id(2));
    }

    #[test]
    fn managers_append_none_sentinel() {
        let store = StoreFixture::new().with_sample_directory().build();
        let staff = employees(&store);
        let lookup = managers(&store);

        assert_eq!(lookup.len(), staff.len() + 1);
        assert_eq!(lookup.labels().last().unwrap(), NO_MANAGER_LABEL);
        assert_eq!(lookup.pairs().last().unwrap().1, None);
        assert_eq!(&lookup.pairs()[..staff.len()], staff.pairs());
    }

    #[test]
    fn managers_of_empty_directory_is_just_none() {
        let store = InMemoryStore::new();
        assert_eq!(managers(&store).labels(), &[NO_MANAGER_LABEL]);
    }

    #[test]
    fn store_failure_yields_empty_lists() {
        let mut store = StoreFixture::new().with_sample_directory().build();
        store.set_failing(true);

        assert!(departments(&store).is_empty());
        assert!(roles(&store).is_empty());
        assert!(employees(&store).is_empty());
        assert_eq!(managers(&store).len(), 1);
    }
}
