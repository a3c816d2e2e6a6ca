//! In-memory store backing the development API.
//!
//! ## Invariants
//!
//! The console forwards whatever the user typed; this layer is where the
//! entity hierarchy is enforced:
//! - every unit, user and asset references an existing company;
//! - every user and asset references a unit of that same company;
//! - asset health scores lie in `[0, 100]`.
//!
//! ## Deletion
//! - Deleting a company removes its units, users and assets.
//! - Deleting a unit removes the users and assets assigned to it.
//! - Moving a unit to another company is rejected while users or assets
//!   still reference it, since they would be left pointing across companies.
//!
//! Ids are allocated per entity kind from 1 and never reused.

use payloads::{
    Asset, AssetId, Company, CompanyId, Unit, UnitId, User, UserId,
    requests::ValidationError,
};
use std::collections::BTreeMap;

pub mod asset;
pub mod company;
pub mod unit;
pub mod user;

pub use asset::*;
pub use company::*;
pub use unit::*;
pub use user::*;

#[derive(Debug, Default)]
pub struct Store {
    companies: BTreeMap<CompanyId, Company>,
    units: BTreeMap<UnitId, Unit>,
    users: BTreeMap<UserId, User>,
    assets: BTreeMap<AssetId, Asset>,
    last_company_id: u64,
    last_unit_id: u64,
    last_user_id: u64,
    last_asset_id: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Company not found")]
    CompanyNotFound,
    #[error("Unit not found")]
    UnitNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("Asset not found")]
    AssetNotFound,
    #[error("Referenced company does not exist")]
    UnknownCompany,
    #[error("Referenced unit does not exist")]
    UnknownUnit,
    #[error("Unit does not belong to the given company")]
    UnitCompanyMismatch,
    #[error("Unit still has users or assets and cannot change company")]
    UnitInUse,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Store {
    fn company_exists(&self, company_id: &CompanyId) -> bool {
        self.companies.contains_key(company_id)
    }

    /// Check that `unit_id` exists and belongs to `company_id`.
    fn check_unit_membership(
        &self,
        company_id: &CompanyId,
        unit_id: &UnitId,
    ) -> Result<(), StoreError> {
        if !self.company_exists(company_id) {
            return Err(StoreError::UnknownCompany);
        }
        let unit = self.units.get(unit_id).ok_or(StoreError::UnknownUnit)?;
        if unit.company_id != *company_id {
            return Err(StoreError::UnitCompanyMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::requests::{CompanyData, UnitData, UserData};

    fn company(store: &mut Store, name: &str) -> CompanyId {
        create_company(&CompanyData { name: name.into() }, store)
            .unwrap()
            .id
    }

    fn unit(store: &mut Store, company_id: CompanyId) -> UnitId {
        create_unit(
            &UnitData {
                name: "Unidade Jaguar".into(),
                company_id,
            },
            store,
        )
        .unwrap()
        .id
    }

    fn user_data(company_id: CompanyId, unit_id: UnitId) -> UserData {
        UserData {
            name: "Ana".into(),
            email: "ana@tractian.com".into(),
            company_id,
            unit_id,
        }
    }

    #[test]
    fn ids_are_allocated_per_kind_and_never_reused() {
        let mut store = Store::default();
        let first = company(&mut store, "Acme");
        delete_company(&first, &mut store).unwrap();
        let second = company(&mut store, "Globex");
        assert_eq!(first, CompanyId(1));
        assert_eq!(second, CompanyId(2));
        assert_eq!(unit(&mut store, second), UnitId(1));
    }

    #[test]
    fn users_must_reference_a_unit_of_their_company() {
        let mut store = Store::default();
        let acme = company(&mut store, "Acme");
        let globex = company(&mut store, "Globex");
        let globex_unit = unit(&mut store, globex);

        let err = create_user(&user_data(acme, globex_unit), &mut store)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnitCompanyMismatch));

        let err = create_user(&user_data(CompanyId(99), globex_unit), &mut store)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownCompany));

        let err = create_user(&user_data(globex, UnitId(99)), &mut store)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownUnit));
    }

    #[test]
    fn deleting_a_company_cascades() {
        let mut store = Store::default();
        let acme = company(&mut store, "Acme");
        let globex = company(&mut store, "Globex");
        let acme_unit = unit(&mut store, acme);
        let globex_unit = unit(&mut store, globex);
        create_user(&user_data(acme, acme_unit), &mut store).unwrap();
        create_user(&user_data(globex, globex_unit), &mut store).unwrap();

        delete_company(&acme, &mut store).unwrap();

        assert!(matches!(
            list_company_units(&acme, &store),
            Err(StoreError::CompanyNotFound)
        ));
        assert_eq!(list_company_units(&globex, &store).unwrap().len(), 1);
        assert_eq!(list_company_users(&globex, &store).unwrap().len(), 1);
        assert!(store.users.values().all(|u| u.company_id == globex));
    }

    #[test]
    fn unit_with_dependents_cannot_change_company() {
        let mut store = Store::default();
        let acme = company(&mut store, "Acme");
        let globex = company(&mut store, "Globex");
        let acme_unit = unit(&mut store, acme);

        let moved = UnitData {
            name: "Unidade Jaguar".into(),
            company_id: globex,
        };
        // an empty unit may move
        update_unit(&acme_unit, &moved, &mut store).unwrap();

        create_user(&user_data(globex, acme_unit), &mut store).unwrap();
        let back = UnitData {
            name: "Unidade Jaguar".into(),
            company_id: acme,
        };
        assert!(matches!(
            update_unit(&acme_unit, &back, &mut store),
            Err(StoreError::UnitInUse)
        ));
    }
}
