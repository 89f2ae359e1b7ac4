use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::db::{seed::seed_employees, Persistence, StoreError};
use crate::models::employee::{Employee, EmployeeForm, EmployeeId, Stats};
use crate::utils::filter::{self, Criteria};
use crate::utils::validation::{date_of_birth_required, validate_on};

/// Result of an operation addressed by employee id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
}

/// Owns the employee collection and keeps it in step with its backend.
///
/// Every mutation writes the full collection. When the write fails the
/// in-memory collection is restored, so memory never runs ahead of storage.
#[derive(Debug)]
pub struct RecordStore<P: Persistence> {
    backend: P,
    employees: Vec<Employee>,
}

impl<P: Persistence> RecordStore<P> {
    /// Loads the stored roster, seeding the sample roster when the slot is
    /// empty or unreadable.
    pub fn open(backend: P) -> Result<Self, StoreError> {
        let employees = match backend.load() {
            Ok(Some(employees)) => {
                info!("Loaded {} employees", employees.len());
                employees
            }
            Ok(None) => {
                info!("No stored roster, seeding sample employees");
                let seed = seed_employees();
                backend.save(&seed)?;
                seed
            }
            Err(StoreError::Corrupt(err)) => {
                warn!("Stored roster is unreadable ({}), falling back to sample employees", err);
                backend.quarantine()?;
                let seed = seed_employees();
                backend.save(&seed)?;
                seed
            }
            Err(err) => return Err(err),
        };

        Ok(Self { backend, employees })
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    pub fn create(&mut self, form: &EmployeeForm) -> Result<Employee, StoreError> {
        self.create_on(form, today())
    }

    /// Adds a record created on `today`.
    pub fn create_on(
        &mut self,
        form: &EmployeeForm,
        today: NaiveDate,
    ) -> Result<Employee, StoreError> {
        validate_on(form, today)?;
        let Some(date_of_birth) = form.date_of_birth else {
            return Err(StoreError::Validation(date_of_birth_required()));
        };

        let mut id = EmployeeId::generate();
        while self.get(&id).is_some() {
            id = EmployeeId::generate();
        }

        let employee = Employee {
            id,
            full_name: form.full_name.clone(),
            gender: form.gender,
            date_of_birth,
            profile_image: form.profile_image.clone(),
            state: form.state.clone(),
            is_active: form.is_active,
            created_at: today,
        };

        let previous = self.employees.clone();
        self.employees.push(employee.clone());
        self.persist(previous)?;

        info!("Created employee {} ({})", employee.id, employee.full_name);
        Ok(employee)
    }

    pub fn update(
        &mut self,
        id: &EmployeeId,
        form: &EmployeeForm,
    ) -> Result<Outcome<Employee>, StoreError> {
        self.update_on(id, form, today())
    }

    pub fn update_on(
        &mut self,
        id: &EmployeeId,
        form: &EmployeeForm,
        today: NaiveDate,
    ) -> Result<Outcome<Employee>, StoreError> {
        validate_on(form, today)?;

        let Some(index) = self.position(id) else {
            return Ok(Outcome::NotFound);
        };

        let previous = self.employees.clone();
        self.employees[index].apply(form);
        self.persist(previous)?;

        info!("Updated employee {}", id);
        Ok(Outcome::Found(self.employees[index].clone()))
    }

    pub fn delete(&mut self, id: &EmployeeId) -> Result<Outcome<Employee>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(Outcome::NotFound);
        };

        let previous = self.employees.clone();
        let removed = self.employees.remove(index);
        self.persist(previous)?;

        info!("Deleted employee {} ({})", removed.id, removed.full_name);
        Ok(Outcome::Found(removed))
    }

    /// Flips the active flag and returns the new value.
    pub fn toggle_status(&mut self, id: &EmployeeId) -> Result<Outcome<bool>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(Outcome::NotFound);
        };

        let previous = self.employees.clone();
        let employee = &mut self.employees[index];
        employee.is_active = !employee.is_active;
        let is_active = employee.is_active;
        self.persist(previous)?;

        info!(
            "Employee {} is now {}",
            id,
            if is_active { "active" } else { "inactive" }
        );
        Ok(Outcome::Found(is_active))
    }

    pub fn stats(&self) -> Stats {
        let active = self.employees.iter().filter(|e| e.is_active).count();
        Stats {
            total: self.employees.len(),
            active,
            inactive: self.employees.len() - active,
        }
    }

    pub fn filter(&self, criteria: &Criteria) -> Vec<&Employee> {
        filter::filter(&self.employees, criteria)
    }

    fn position(&self, id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| &employee.id == id)
    }

    fn persist(&mut self, previous: Vec<Employee>) -> Result<(), StoreError> {
        if let Err(err) = self.backend.save(&self.employees) {
            warn!("Failed to persist roster, reverting in-memory change: {}", err);
            self.employees = previous;
            return Err(err);
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
