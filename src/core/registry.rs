use crate::core::{Developer, DeveloperRequest, Experience, TaxPolicy, Taxable};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, validate_salary};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Validated request body, minus the id.
struct DeveloperDraft {
    name: String,
    gross_salary: f64,
    experience: Experience,
}

impl DeveloperDraft {
    fn from_request(request: &DeveloperRequest) -> Result<Self> {
        let name = validate_required_field("name", &request.name)?;
        validate_non_empty_string("name", name)?;
        let gross_salary = *validate_required_field("salary", &request.gross_salary)?;
        validate_salary("salary", gross_salary)?;
        let experience = *validate_required_field("experience", &request.experience)?;

        Ok(Self {
            name: name.clone(),
            gross_salary,
            experience,
        })
    }
}

/// In-memory store of developer records keyed by id.
///
/// Net salary is computed once, when a record is written, using the rates of
/// the injected policy. Each operation holds the lock for a single map access,
/// so readers never observe a partially written record.
pub struct DeveloperRegistry<T: Taxable = TaxPolicy> {
    developers: RwLock<HashMap<i32, Developer>>,
    taxable: T,
}

impl<T: Taxable> DeveloperRegistry<T> {
    pub fn new(taxable: T) -> Self {
        Self {
            developers: RwLock::new(HashMap::new()),
            taxable,
        }
    }

    pub fn taxable(&self) -> &T {
        &self.taxable
    }

    // A panic while holding the lock cannot leave the map half-updated, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i32, Developer>> {
        self.developers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i32, Developer>> {
        self.developers.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn build(&self, id: i32, draft: DeveloperDraft) -> Developer {
        let net_salary = self.taxable.net_salary(draft.gross_salary, draft.experience);
        Developer::new(draft.experience, id, draft.name, net_salary)
    }

    /// Snapshot of every stored record, in no particular order.
    pub fn list_all(&self) -> Vec<Developer> {
        let developers = self.read();
        tracing::debug!("Listing {} developers", developers.len());
        developers.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: i32) -> Result<Developer> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    /// Stores a new record under `request.id`. An existing record with the
    /// same id is overwritten.
    pub fn create(&self, request: &DeveloperRequest) -> Result<Developer> {
        let id = *validate_required_field("id", &request.id)?;
        let draft = DeveloperDraft::from_request(request)?;
        let developer = self.build(id, draft);

        if let Some(previous) = self.write().insert(id, developer.clone()) {
            tracing::warn!(
                "Create replaced existing developer {} ({} -> {})",
                id,
                previous.experience(),
                developer.experience()
            );
        }

        tracing::info!(
            "Created developer {} ({}), net salary {:.2}",
            id,
            developer.experience(),
            developer.net_salary()
        );
        Ok(developer)
    }

    /// Replaces the record at `id` wholesale; the tier may change. The id in
    /// the request body, if any, is ignored.
    pub fn update(&self, id: i32, request: &DeveloperRequest) -> Result<Developer> {
        let mut developers = self.write();
        if !developers.contains_key(&id) {
            return Err(RegistryError::NotFound { id });
        }

        let draft = DeveloperDraft::from_request(request)?;
        let developer = self.build(id, draft);
        developers.insert(id, developer.clone());
        drop(developers);

        tracing::info!(
            "Updated developer {} ({}), net salary {:.2}",
            id,
            developer.experience(),
            developer.net_salary()
        );
        Ok(developer)
    }

    pub fn delete(&self, id: i32) -> Result<Developer> {
        let removed = self
            .write()
            .remove(&id)
            .ok_or(RegistryError::NotFound { id })?;

        tracing::info!("Deleted developer {}", id);
        Ok(removed)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for DeveloperRegistry<TaxPolicy> {
    fn default() -> Self {
        Self::new(TaxPolicy::default())
    }
}
