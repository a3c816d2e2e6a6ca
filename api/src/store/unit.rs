use payloads::{CompanyId, Unit, UnitId, requests};
use tracing::Level;

use super::{Store, StoreError};

pub fn list_company_units(
    company_id: &CompanyId,
    store: &Store,
) -> Result<Vec<Unit>, StoreError> {
    if !store.company_exists(company_id) {
        return Err(StoreError::CompanyNotFound);
    }
    Ok(store
        .units
        .values()
        .filter(|unit| unit.company_id == *company_id)
        .cloned()
        .collect())
}

pub fn get_unit(unit_id: &UnitId, store: &Store) -> Result<Unit, StoreError> {
    store
        .units
        .get(unit_id)
        .cloned()
        .ok_or(StoreError::UnitNotFound)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn create_unit(
    details: &requests::UnitData,
    store: &mut Store,
) -> Result<Unit, StoreError> {
    details.validate()?;
    if !store.company_exists(&details.company_id) {
        return Err(StoreError::UnknownCompany);
    }
    store.last_unit_id += 1;
    let unit = Unit {
        id: UnitId(store.last_unit_id),
        name: details.name.trim().to_string(),
        company_id: details.company_id,
    };
    store.units.insert(unit.id, unit.clone());
    Ok(unit)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn update_unit(
    unit_id: &UnitId,
    details: &requests::UnitData,
    store: &mut Store,
) -> Result<Unit, StoreError> {
    details.validate()?;
    if !store.company_exists(&details.company_id) {
        return Err(StoreError::UnknownCompany);
    }
    let current = store.units.get(unit_id).ok_or(StoreError::UnitNotFound)?;
    if current.company_id != details.company_id && unit_in_use(unit_id, store)
    {
        return Err(StoreError::UnitInUse);
    }

    let unit = Unit {
        id: *unit_id,
        name: details.name.trim().to_string(),
        company_id: details.company_id,
    };
    store.units.insert(unit.id, unit.clone());
    Ok(unit)
}

/// Removes the unit and the users and assets assigned to it.
#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn delete_unit(
    unit_id: &UnitId,
    store: &mut Store,
) -> Result<(), StoreError> {
    store.units.remove(unit_id).ok_or(StoreError::UnitNotFound)?;
    store.users.retain(|_, user| user.unit_id != *unit_id);
    store.assets.retain(|_, asset| asset.unit_id != *unit_id);
    Ok(())
}

fn unit_in_use(unit_id: &UnitId, store: &Store) -> bool {
    store.users.values().any(|user| user.unit_id == *unit_id)
        || store.assets.values().any(|asset| asset.unit_id == *unit_id)
}
