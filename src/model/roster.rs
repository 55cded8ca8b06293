use strum_macros::{Display, EnumString};

use super::employee::{Employee, EmployeeId};

/// How `Roster::register` picks the id of a new employee.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Display, EnumString)]
pub enum IdPolicy {
    /// `len + 1`. Can hand out an id that is still in use after a deletion.
    #[default]
    #[strum(serialize = "roster-size")]
    RosterSize,
    /// One past the highest id on the roster.
    #[strum(serialize = "monotonic")]
    Monotonic,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Roster {
    employees: Vec<Employee>,
    id_policy: IdPolicy,
}

impl Roster {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            employees: Vec::new(),
            id_policy,
        }
    }

    pub fn from_employees(employees: Vec<Employee>, id_policy: IdPolicy) -> Self {
        Self {
            employees,
            id_policy,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// `None` once the policy runs out of representable ids.
    pub fn next_id(&self) -> Option<EmployeeId> {
        match self.id_policy {
            IdPolicy::RosterSize => EmployeeId::try_from(self.employees.len())
                .ok()?
                .checked_add(1),
            IdPolicy::Monotonic => self
                .employees
                .iter()
                .map(|e| e.id)
                .max()
                .unwrap_or(0)
                .checked_add(1),
        }
    }

    pub fn register(
        &mut self,
        name: &str,
        designation: &str,
        department: &str,
    ) -> Option<EmployeeId> {
        let id = self.next_id()?;
        self.employees
            .push(Employee::new(id, name, designation, department));
        Some(id)
    }

    /// Removes the first employee carrying `id`, records included.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let pos = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(pos))
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }
}
