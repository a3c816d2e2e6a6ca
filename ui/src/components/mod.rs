pub mod company_tab_header;
pub mod confirmation_modal;
pub mod error_result;
pub mod form_field;
pub mod health_gauge;
pub mod layout;
pub mod modal;
pub mod register_menu;
pub mod registration_form;
pub mod status_tag;
pub mod toast;

pub use company_tab_header::CompanyTabHeader;
pub use confirmation_modal::ConfirmationModal;
pub use error_result::ErrorResult;
pub use form_field::{SelectField, TextField};
pub use health_gauge::{HealthBar, HealthGauge};
pub use modal::Modal;
pub use register_menu::RegisterMenu;
pub use registration_form::RegistrationForm;
pub use status_tag::StatusTag;
pub use toast::ToastContainer;
