use payloads::{Asset, AssetId, CompanyId, requests};
use tracing::Level;

use super::{Store, StoreError};

pub fn list_company_assets(
    company_id: &CompanyId,
    store: &Store,
) -> Result<Vec<Asset>, StoreError> {
    if !store.company_exists(company_id) {
        return Err(StoreError::CompanyNotFound);
    }
    Ok(store
        .assets
        .values()
        .filter(|asset| asset.company_id == *company_id)
        .cloned()
        .collect())
}

pub fn get_asset(
    asset_id: &AssetId,
    store: &Store,
) -> Result<Asset, StoreError> {
    store
        .assets
        .get(asset_id)
        .cloned()
        .ok_or(StoreError::AssetNotFound)
}

#[tracing::instrument(skip(store, details), fields(name = %details.name), err(level = Level::INFO))]
pub fn create_asset(
    details: &requests::AssetData,
    store: &mut Store,
) -> Result<Asset, StoreError> {
    details.validate()?;
    store.check_unit_membership(&details.company_id, &details.unit_id)?;
    store.last_asset_id += 1;
    let asset = asset_from_details(AssetId(store.last_asset_id), details);
    store.assets.insert(asset.id, asset.clone());
    Ok(asset)
}

#[tracing::instrument(skip(store, details), err(level = Level::INFO))]
pub fn update_asset(
    asset_id: &AssetId,
    details: &requests::AssetData,
    store: &mut Store,
) -> Result<Asset, StoreError> {
    details.validate()?;
    if !store.assets.contains_key(asset_id) {
        return Err(StoreError::AssetNotFound);
    }
    store.check_unit_membership(&details.company_id, &details.unit_id)?;
    let asset = asset_from_details(*asset_id, details);
    store.assets.insert(asset.id, asset.clone());
    Ok(asset)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn delete_asset(
    asset_id: &AssetId,
    store: &mut Store,
) -> Result<(), StoreError> {
    store
        .assets
        .remove(asset_id)
        .ok_or(StoreError::AssetNotFound)?;
    Ok(())
}

fn asset_from_details(id: AssetId, details: &requests::AssetData) -> Asset {
    Asset {
        id,
        name: details.name.trim().to_string(),
        model: details.model.trim().to_string(),
        status: details.status,
        healthscore: details.healthscore,
        image: details.image.trim().to_string(),
        specifications: details.specifications.clone(),
        metrics: details.metrics.clone(),
        sensors: details
            .sensors
            .iter()
            .map(|sensor| sensor.trim().to_string())
            .filter(|sensor| !sensor.is_empty())
            .collect(),
        unit_id: details.unit_id,
        company_id: details.company_id,
    }
}
