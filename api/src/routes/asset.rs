use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{AssetId, requests};

use crate::store;

use super::{APIError, StoreData, lock};

#[tracing::instrument(skip(store), ret)]
#[post("/assets")]
pub async fn create_asset(
    details: web::Json<requests::AssetData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let asset = store::create_asset(&details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Created().json(asset))
}

#[tracing::instrument(skip(store))]
#[get("/assets/{asset_id}")]
pub async fn get_asset(
    asset_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let asset_id = AssetId(asset_id.into_inner());
    let asset = store::get_asset(&asset_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(asset))
}

#[tracing::instrument(skip(store), ret)]
#[put("/assets/{asset_id}")]
pub async fn update_asset(
    asset_id: web::Path<u64>,
    details: web::Json<requests::AssetData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let asset_id = AssetId(asset_id.into_inner());
    let asset = store::update_asset(&asset_id, &details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().json(asset))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/assets/{asset_id}")]
pub async fn delete_asset(
    asset_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let asset_id = AssetId(asset_id.into_inner());
    store::delete_asset(&asset_id, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().finish())
}
