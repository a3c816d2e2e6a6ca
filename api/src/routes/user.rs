use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{UserId, requests};

use crate::store;

use super::{APIError, StoreData, lock};

#[tracing::instrument(skip(store), ret)]
#[post("/users")]
pub async fn create_user(
    details: web::Json<requests::UserData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let user = store::create_user(&details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Created().json(user))
}

#[tracing::instrument(skip(store))]
#[get("/users/{user_id}")]
pub async fn get_user(
    user_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let user_id = UserId(user_id.into_inner());
    let user = store::get_user(&user_id, &*lock(&store)?)?;
    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(skip(store), ret)]
#[put("/users/{user_id}")]
pub async fn update_user(
    user_id: web::Path<u64>,
    details: web::Json<requests::UserData>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let user_id = UserId(user_id.into_inner());
    let user = store::update_user(&user_id, &details, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<u64>,
    store: StoreData,
) -> Result<HttpResponse, APIError> {
    let user_id = UserId(user_id.into_inner());
    store::delete_user(&user_id, &mut *lock(&store)?)?;
    Ok(HttpResponse::Ok().finish())
}
