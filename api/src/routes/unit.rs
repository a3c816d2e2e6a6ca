use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{UnitId, requests};

use crate::store;

use super::{APIError, StoreData, lock};

#[tracing::instrument(skip(store), ret)]
#[post("/units")]
pub async fn create_unit(
    details: web::Json<requests::UnitData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let unit = store::create_unit(&details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Created().json(unit))
}

#[tracing::instrument(skip(store))]
#[get("/units/{unit_id}")]
pub async fn get_unit(
    unit_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let unit_id = UnitId(unit_id.into_inner());
    let unit = store::get_unit(&unit_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(unit))
}

#[tracing::instrument(skip(store), ret)]
#[put("/units/{unit_id}")]
pub async fn update_unit(
    unit_id: web::Path<u64>,
    details: web::Json<requests::UnitData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let unit_id = UnitId(unit_id.into_inner());
    let unit = store::update_unit(&unit_id, &details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().json(unit))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/units/{unit_id}")]
pub async fn delete_unit(
    unit_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let unit_id = UnitId(unit_id.into_inner());
    store::delete_unit(&unit_id, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().finish())
}
