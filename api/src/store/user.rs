use payloads::{CompanyId, User, UserId, requests};
use tracing::Level;

use super::{Store, StoreError};

pub fn list_company_users(
    company_id: &CompanyId,
    store: &Store,
) -> Result<Vec<User>, StoreError> {
    if !store.company_exists(company_id) {
        return Err(StoreError::CompanyNotFound);
    }
    Ok(store
        .users
        .values()
        .filter(|user| user.company_id == *company_id)
        .cloned()
        .collect())
}

pub fn get_user(user_id: &UserId, store: &Store) -> Result<User, StoreError> {
    store
        .users
        .get(user_id)
        .cloned()
        .ok_or(StoreError::UserNotFound)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn create_user(
    details: &requests::UserData,
    store: &mut Store,
) -> Result<User, StoreError> {
    details.validate()?;
    store.check_unit_membership(&details.company_id, &details.unit_id)?;
    store.last_user_id += 1;
    let user = user_from_details(UserId(store.last_user_id), details);
    store.users.insert(user.id, user.clone());
    Ok(user)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn update_user(
    user_id: &UserId,
    details: &requests::UserData,
    store: &mut Store,
) -> Result<User, StoreError> {
    details.validate()?;
    if !store.users.contains_key(user_id) {
        return Err(StoreError::UserNotFound);
    }
    store.check_unit_membership(&details.company_id, &details.unit_id)?;
    let user = user_from_details(*user_id, details);
    store.users.insert(user.id, user.clone());
    Ok(user)
}

#[tracing::instrument(skip(store), err(level = Level::INFO))]
pub fn delete_user(
    user_id: &UserId,
    store: &mut Store,
) -> Result<(), StoreError> {
    store.users.remove(user_id).ok_or(StoreError::UserNotFound)?;
    Ok(())
}

fn user_from_details(id: UserId, details: &requests::UserData) -> User {
    User {
        id,
        name: details.name.trim().to_string(),
        email: details.email.trim().to_string(),
        company_id: details.company_id,
        unit_id: details.unit_id,
    }
}
