pub mod asset_registration;
pub mod asset_view;
pub mod company_assets;
pub mod company_cover;
pub mod company_list;
pub mod company_registration;
pub mod company_units;
pub mod company_users;
pub mod company_view;
pub mod not_found;
pub mod registration;
pub mod unit_registration;
pub mod user_registration;

pub use asset_registration::AssetRegistrationPage;
pub use asset_view::AssetViewPage;
pub use company_assets::CompanyAssetsTab;
pub use company_cover::CompanyCoverTab;
pub use company_list::CompanyListPage;
pub use company_registration::CompanyRegistrationPage;
pub use company_units::CompanyUnitsTab;
pub use company_users::CompanyUsersTab;
pub use company_view::CompanyViewPage;
pub use not_found::NotFoundPage;
pub use unit_registration::UnitRegistrationPage;
pub use user_registration::UserRegistrationPage;
