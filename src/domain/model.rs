use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::error::{KataError, Result};

/// Shared handle to a [`Department`]. A department's lifetime is independent
/// of the people referencing it and may be shared across several of them.
pub type DepartmentRef = Rc<RefCell<Department>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    charge_code: String,
    manager: String,
}

impl Department {
    pub fn new(charge_code: impl Into<String>, manager: impl Into<String>) -> Self {
        Self {
            charge_code: charge_code.into(),
            manager: manager.into(),
        }
    }

    /// Convenience constructor for the shared handle people hold.
    pub fn shared(charge_code: impl Into<String>, manager: impl Into<String>) -> DepartmentRef {
        Rc::new(RefCell::new(Self::new(charge_code, manager)))
    }

    pub fn charge_code(&self) -> &str {
        &self.charge_code
    }

    pub fn set_charge_code(&mut self, value: impl Into<String>) {
        self.charge_code = value.into();
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn set_manager(&mut self, value: impl Into<String>) {
        self.manager = value.into();
    }
}

/// A person that still delegates the manager lookup to its department.
/// The department reference may be assigned after construction; looking up
/// the manager before that is the one hard failure in this model.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    department: Option<DepartmentRef>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: None,
        }
    }

    pub fn with_department(name: impl Into<String>, department: DepartmentRef) -> Self {
        Self {
            name: name.into(),
            department: Some(department),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Option<&DepartmentRef> {
        self.department.as_ref()
    }

    pub fn set_department(&mut self, department: DepartmentRef) {
        self.department = Some(department);
    }

    /// Reads through the department reference on every call; nothing is
    /// cached, so a later `set_manager` on the shared department shows up
    /// in the next lookup.
    pub fn manager(&self) -> Result<String> {
        let department =
            self.department
                .as_ref()
                .ok_or_else(|| KataError::DepartmentUnassigned {
                    name: self.name.clone(),
                })?;
        Ok(department.borrow().manager().to_string())
    }
}

/// The refactored person: constructed strictly with a department and exposing
/// the reference itself instead of a forwarding `manager` getter. Callers
/// chase `department().borrow().manager()` directly.
#[derive(Debug, Clone)]
pub struct PersonRefactoring {
    name: String,
    department: DepartmentRef,
}

impl PersonRefactoring {
    pub fn new(name: impl Into<String>, department: DepartmentRef) -> Self {
        Self {
            name: name.into(),
            department,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &DepartmentRef {
        &self.department
    }

    pub fn set_department(&mut self, department: DepartmentRef) {
        self.department = department;
    }
}
