pub mod asset;
pub mod company;
pub mod unit;
pub mod user;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use std::sync::{Mutex, MutexGuard};

use crate::store::{Store, StoreError};
use crate::telemetry::log_error;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(company::list_companies)
        .service(company::create_company)
        .service(company::get_company)
        .service(company::update_company)
        .service(company::delete_company)
        .service(company::list_company_units)
        .service(company::list_company_users)
        .service(company::list_company_assets)
        .service(unit::create_unit)
        .service(unit::get_unit)
        .service(unit::update_unit)
        .service(unit::delete_unit)
        .service(user::create_user)
        .service(user::get_user)
        .service(user::update_user)
        .service(user::delete_user)
        .service(asset::create_asset)
        .service(asset::get_asset)
        .service(asset::update_asset)
        .service(asset::delete_asset)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(e) => {
                log_error(anyhow::anyhow!("{e:#}"));
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::CompanyNotFound
            | StoreError::UnitNotFound
            | StoreError::UserNotFound
            | StoreError::AssetNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}

type StoreData = web::Data<Mutex<Store>>;

/// Lock the shared store. Handlers hold the guard only for the synchronous
/// store call.
fn lock(store: &StoreData) -> Result<MutexGuard<'_, Store>, APIError> {
    store
        .lock()
        .map_err(|_| anyhow::anyhow!("store mutex poisoned").into())
}
