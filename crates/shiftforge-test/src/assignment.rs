//! Assignment fixtures.

use shiftforge_core::{Assignment, EmployeeId};

/// Builds an assignment from `(day, [employee ids])` rows.
///
/// # Example
///
/// ```
/// use shiftforge_test::assignment_of;
///
/// let a = assignment_of(&[(1, &[1, 2]), (2, &[2])]);
/// assert_eq!(a.headcount(1), 2);
/// ```
pub fn assignment_of(rows: &[(u32, &[u64])]) -> Assignment {
    let mut a = Assignment::new();
    for (day, ids) in rows {
        for &id in *ids {
            a.insert(*day, EmployeeId(id));
        }
    }
    a
}

/// Marks `employee` as working every day in `start..=end`.
pub fn block(assignment: &mut Assignment, employee: u64, start: u32, end: u32) {
    for day in start..=end {
        assignment.insert(day, EmployeeId(employee));
    }
}
