//! Pieces shared by the registration pages.

use payloads::{
    Company, CompanyId, ResourcePath, Unit, requests::ValidationError,
    responses::MutationResponse,
};
use reqwest::StatusCode;
use std::str::FromStr;
use yew::prelude::*;

use crate::{
    Route,
    contexts::ToastHandle,
    hooks::{MutationHandlers, MutationHookReturn},
};

/// Why a form could not be turned into a request body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Selecione uma empresa")]
    MissingCompany,
    #[error("Selecione uma unidade")]
    MissingUnit,
    #[error("Valor inválido para {0}")]
    InvalidNumber(&'static str),
    #[error("Data inválida para {0}")]
    InvalidTimestamp(&'static str),
}

/// Writes only count as done when they answer with the exact status their
/// mode expects.
pub fn check_status(
    expected: StatusCode,
    actual: StatusCode,
) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("Resposta inesperada do servidor ({actual})"))
    }
}

fn handlers_with<T: 'static>(
    expected: StatusCode,
    toast: ToastHandle,
    push_route: Callback<Route>,
    notify: fn(&ToastHandle, &'static str),
    message: &'static str,
    destination: impl Fn(&T) -> Route + 'static,
) -> MutationHandlers<T> {
    let on_error = toast.error_callback();
    let on_completed = Callback::from(move |response: MutationResponse<T>| {
        match check_status(expected, response.status) {
            Ok(()) => {
                notify(&toast, message);
                push_route.emit(destination(&response.body));
            }
            Err(unexpected) => toast.error(unexpected),
        }
    });
    MutationHandlers {
        on_completed,
        on_error,
    }
}

/// Handlers for a create or update: toast and navigate on the expected
/// status, toast the error otherwise.
pub fn save_handlers<T: 'static>(
    expected: StatusCode,
    toast: ToastHandle,
    push_route: Callback<Route>,
    message: &'static str,
    destination: impl Fn(&T) -> Route + 'static,
) -> MutationHandlers<T> {
    handlers_with(
        expected,
        toast,
        push_route,
        |toast, message| toast.success(message),
        message,
        destination,
    )
}

pub fn delete_handlers(
    toast: ToastHandle,
    push_route: Callback<Route>,
    message: &'static str,
    destination: Route,
) -> MutationHandlers<()> {
    handlers_with(
        StatusCode::OK,
        toast,
        push_route,
        |toast, message| toast.info(message),
        message,
        move |_| destination.clone(),
    )
}

/// Whether a write already landed with the status its mode expects. The form
/// stays locked from then on while the page navigates away.
pub fn has_saved<T>(
    write: &MutationHookReturn<T>,
    expected: StatusCode,
) -> bool {
    write
        .data
        .as_ref()
        .is_some_and(|response| response.status == expected)
}

/// First failure among a page's writes, shown inline under the fields.
pub fn first_error(errors: &[&Option<String>]) -> Option<AttrValue> {
    errors
        .iter()
        .find_map(|error| error.as_deref())
        .map(|error| AttrValue::from(error.to_string()))
}

/// Path of the edited entity, or the collection when creating.
pub fn entity_path<Id: Copy>(
    id: Option<Id>,
    item: fn(Id) -> ResourcePath,
    collection: ResourcePath,
) -> ResourcePath {
    id.map(item).unwrap_or(collection)
}

/// Path of a company's units, and whether there is a company to ask about.
pub fn company_units_path(
    company_id: Option<CompanyId>,
) -> (ResourcePath, bool) {
    match company_id {
        Some(id) => (ResourcePath::CompanyUnits(id), true),
        None => (ResourcePath::CompanyUnits(CompanyId(0)), false),
    }
}

/// Select values are ids, or empty for none.
pub fn parse_id<Id: FromStr>(value: &str) -> Option<Id> {
    value.trim().parse().ok()
}

pub fn id_value<Id: ToString>(id: Option<Id>) -> AttrValue {
    id.map(|id| AttrValue::from(id.to_string()))
        .unwrap_or_default()
}

pub fn company_options(companies: &[Company]) -> Vec<(String, String)> {
    companies
        .iter()
        .map(|company| (company.id.to_string(), company.name.clone()))
        .collect()
}

pub fn unit_options(units: &[Unit]) -> Vec<(String, String)> {
    units
        .iter()
        .map(|unit| (unit.id.to_string(), unit.name.clone()))
        .collect()
}

fn normalize_decimal(value: &str) -> String {
    value.trim().replace(',', ".")
}

/// Required decimal field. Accepts a comma as decimal separator.
pub fn parse_decimal(
    field: &'static str,
    value: &str,
) -> Result<f64, FormError> {
    normalize_decimal(value)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormError::InvalidNumber(field))
}

/// Optional decimal field: blank means absent.
pub fn parse_optional_decimal(
    field: &'static str,
    value: &str,
) -> Result<Option<f64>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(field, value).map(Some)
}

pub fn parse_count(
    field: &'static str,
    value: &str,
) -> Result<u64, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber(field))
}

pub fn optional_to_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::UnitId;

    #[test]
    fn only_the_expected_status_completes() {
        assert!(check_status(StatusCode::CREATED, StatusCode::CREATED).is_ok());
        assert!(check_status(StatusCode::OK, StatusCode::OK).is_ok());
        let err = check_status(StatusCode::CREATED, StatusCode::OK).unwrap_err();
        assert!(err.contains("200"));
    }

    fn write<T>(
        data: Option<MutationResponse<T>>,
        error: Option<&str>,
    ) -> MutationHookReturn<T> {
        MutationHookReturn {
            data,
            is_loading: false,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn form_locks_only_after_the_expected_status() {
        let created = write(
            Some(MutationResponse {
                status: StatusCode::CREATED,
                body: (),
            }),
            None,
        );
        assert!(has_saved(&created, StatusCode::CREATED));
        assert!(!has_saved(&created, StatusCode::OK));
        let failed = write::<()>(None, Some("Not found"));
        assert!(!has_saved(&failed, StatusCode::OK));
    }

    #[test]
    fn failed_write_is_reported_inline() {
        let ok = write::<()>(None, None);
        let failed = write::<()>(None, Some("Not found: Unit not found"));
        assert_eq!(first_error(&[&ok.error, &ok.error]), None);
        assert_eq!(
            first_error(&[&ok.error, &failed.error]),
            Some(AttrValue::from("Not found: Unit not found"))
        );
    }

    #[test]
    fn entity_path_depends_on_mode() {
        assert_eq!(
            entity_path(Some(UnitId(3)), ResourcePath::Unit, ResourcePath::Units),
            ResourcePath::Unit(UnitId(3))
        );
        assert_eq!(
            entity_path(None, ResourcePath::Unit, ResourcePath::Units),
            ResourcePath::Units
        );
    }

    #[test]
    fn unit_options_are_gated_on_a_company() {
        assert!(!company_units_path(None).1);
        assert_eq!(
            company_units_path(Some(CompanyId(42))),
            (ResourcePath::CompanyUnits(CompanyId(42)), true)
        );
    }

    #[test]
    fn decimals_accept_either_separator() {
        assert_eq!(parse_decimal("saúde", "70,5"), Ok(70.5));
        assert_eq!(parse_decimal("saúde", " 70.5 "), Ok(70.5));
        assert_eq!(
            parse_decimal("saúde", "setenta"),
            Err(FormError::InvalidNumber("saúde"))
        );
        assert_eq!(parse_optional_decimal("rpm", "  "), Ok(None));
        assert_eq!(parse_optional_decimal("rpm", "1500"), Ok(Some(1500.0)));
        assert_eq!(
            parse_count("coletas", "-1"),
            Err(FormError::InvalidNumber("coletas"))
        );
    }

    #[test]
    fn select_values_round_trip_ids() {
        assert_eq!(parse_id::<CompanyId>("42"), Some(CompanyId(42)));
        assert_eq!(parse_id::<CompanyId>(""), None);
        assert_eq!(id_value(Some(CompanyId(42))), AttrValue::from("42"));
        assert_eq!(id_value::<CompanyId>(None), AttrValue::default());
    }
}
