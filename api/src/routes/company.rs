use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{CompanyId, requests};

use crate::store;

use super::{APIError, StoreData, lock};

#[tracing::instrument(skip(store))]
#[get("/companies")]
pub async fn list_companies(store: StoreData) -> Result<HttpResponse, APIError> {
    let companies = store::list_companies(&*lock(&store)?);
    Ok(HttpResponse::Ok().json(companies))
}

#[tracing::instrument(skip(store), ret)]
#[post("/companies")]
pub async fn create_company(
    details: web::Json<requests::CompanyData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company = store::create_company(&details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Created().json(company))
}

#[tracing::instrument(skip(store))]
#[get("/companies/{company_id}")]
pub async fn get_company(
    company_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    let company = store::get_company(&company_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(company))
}

#[tracing::instrument(skip(store), ret)]
#[put("/companies/{company_id}")]
pub async fn update_company(
    company_id: web::Path<u64>,
    details: web::Json<requests::CompanyData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    let company =
        store::update_company(&company_id, &details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().json(company))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/companies/{company_id}")]
pub async fn delete_company(
    company_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    store::delete_company(&company_id, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(store))]
#[get("/companies/{company_id}/units")]
pub async fn list_company_units(
    company_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    let units = store::list_company_units(&company_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(units))
}

#[tracing::instrument(skip(store))]
#[get("/companies/{company_id}/users")]
pub async fn list_company_users(
    company_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    let users = store::list_company_users(&company_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(users))
}

#[tracing::instrument(skip(store))]
#[get("/companies/{company_id}/assets")]
pub async fn list_company_assets(
    company_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let company_id = CompanyId(company_id.into_inner());
    let assets = store::list_company_assets(&company_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(assets))
}
