//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating employee records.

use core_kernel::EmployeeId;
use domain_employee::Employee;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// Strategy for capitalised given names
pub fn first_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}"
}

/// Strategy for capitalised family names
pub fn last_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}"
}

/// Strategy for plausible email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.[a-z]{1,8}@example\\.(com|org|net)"
}

/// Strategy for positive employee ids
pub fn employee_id_strategy() -> impl Strategy<Value = EmployeeId> {
    (1i64..1_000_000i64).prop_map(|value| {
        EmployeeId::new(value).expect("strategy range is positive")
    })
}

/// Strategy for unsaved employees
pub fn employee_strategy() -> impl Strategy<Value = Employee> {
    (first_name_strategy(), last_name_strategy(), email_strategy())
        .prop_map(|(first, last, email)| Employee::new(first, last, email))
}

/// Strategy for up to `max` unsaved employees with pairwise distinct emails
pub fn distinct_employees_strategy(max: usize) -> impl Strategy<Value = Vec<Employee>> {
    btree_set(email_strategy(), 0..=max)
        .prop_flat_map(|emails| {
            let count = emails.len();
            (
                Just(emails),
                vec((first_name_strategy(), last_name_strategy()), count),
            )
        })
        .prop_map(|(emails, names)| {
            emails
                .into_iter()
                .zip(names)
                .map(|(email, (first, last))| Employee::new(first, last, email))
                .collect()
        })
}
