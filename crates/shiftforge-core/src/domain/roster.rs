//! The ordered collection of employees being planned.

use crate::domain::employee::{Employee, EmployeeId};
use crate::error::{Result, ShiftError};

/// Employees in roster order.
///
/// Order matters only as the final tie-break when the allocation engine
/// ranks equally suited candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting repeated ids.
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> Result<Self> {
        let mut roster = Self::new();
        for employee in employees {
            roster.add(employee)?;
        }
        Ok(roster)
    }

    /// Appends an employee.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::DuplicateEmployee`] if the id is already present.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if self.contains(employee.id) {
            return Err(ShiftError::DuplicateEmployee(employee.id));
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Id one past the largest id in use, or 1 for an empty roster.
    pub fn next_id(&self) -> EmployeeId {
        EmployeeId(self.employees.iter().map(|e| e.id.0).max().map_or(1, |max| max + 1))
    }

    /// Creates and appends an employee with a fresh id and default name.
    pub fn add_new(&mut self, required_rest_days: u32) -> EmployeeId {
        let id = self.next_id();
        self.employees
            .push(Employee::new(id, format!("Staff {}", id.0), required_rest_days));
        id
    }

    /// Removes an employee. Existing assignments are not touched.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let idx = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(idx))
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    /// Like [`Roster::get_mut`] but reports a missing id as an error.
    pub fn require_mut(&mut self, id: EmployeeId) -> Result<&mut Employee> {
        self.get_mut(id).ok_or(ShiftError::UnknownEmployee(id))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.employees.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
