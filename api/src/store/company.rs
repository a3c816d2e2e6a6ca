use payloads::{Company, CompanyId, requests};
use tracing::Level;

use super::{Store, StoreError};

pub fn list_companies(store: &Store) -> Vec<Company> {
    store.companies.values().cloned().collect()
}

pub fn get_company(
    company_id: &CompanyId,
    store: &Store,
) -> Result<Company, StoreError> {
    store
        .companies
        .get(company_id)
        .cloned()
        .ok_or(StoreError::CompanyNotFound)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn create_company(
    details: &requests::CompanyData,
    store: &mut Store,
) -> Result<Company, StoreError> {
    details.validate()?;
    store.last_company_id += 1;
    let company = Company {
        id: CompanyId(store.last_company_id),
        name: details.name.trim().to_string(),
    };
    store.companies.insert(company.id, company.clone());
    Ok(company)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn update_company(
    company_id: &CompanyId,
    details: &requests::CompanyData,
    store: &mut Store,
) -> Result<Company, StoreError> {
    details.validate()?;
    let company = store
        .companies
        .get_mut(company_id)
        .ok_or(StoreError::CompanyNotFound)?;
    company.name = details.name.trim().to_string();
    Ok(company.clone())
}

/// Removes the company and everything that belongs to it.
#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn delete_company(
    company_id: &CompanyId,
    store: &mut Store,
) -> Result<(), StoreError> {
    store
        .companies
        .remove(company_id)
        .ok_or(StoreError::CompanyNotFound)?;
    store.units.retain(|_, unit| unit.company_id != *company_id);
    store.users.retain(|_, user| user.company_id != *company_id);
    store.assets.retain(|_, asset| asset.company_id != *company_id);
    Ok(())
}
