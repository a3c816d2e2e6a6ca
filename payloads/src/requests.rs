use crate::{
    Asset, AssetMetrics, AssetSpecifications, AssetStatus, Company,
    CompanyId, Unit, UnitId, User,
};
use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 255;

/// Body for creating or fully replacing a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitData {
    pub name: String,
    pub company_id: CompanyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub company_id: CompanyId,
    pub unit_id: UnitId,
}

/// Every editable asset field. A PUT replaces all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    pub name: String,
    pub model: String,
    pub status: AssetStatus,
    pub healthscore: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specifications: AssetSpecifications,
    pub metrics: AssetMetrics,
    #[serde(default)]
    pub sensors: Vec<String>,
    pub unit_id: UnitId,
    pub company_id: CompanyId,
}

impl From<&Company> for CompanyData {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
        }
    }
}

impl From<&Unit> for UnitData {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name.clone(),
            company_id: unit.company_id,
        }
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            company_id: user.company_id,
            unit_id: user.unit_id,
        }
    }
}

impl From<&Asset> for AssetData {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            model: asset.model.clone(),
            status: asset.status,
            healthscore: asset.healthscore,
            image: asset.image.clone(),
            specifications: asset.specifications.clone(),
            metrics: asset.metrics.clone(),
            sensors: asset.sensors.clone(),
            unit_id: asset.unit_id,
            company_id: asset.company_id,
        }
    }
}

/// Reasons a request body is rejected, shared by form validation and the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("O nome é obrigatório")]
    EmptyName,
    #[error("O nome deve ter no máximo 255 caracteres")]
    NameTooLong,
    #[error("Informe um email válido")]
    InvalidEmail,
    #[error("A saúde deve estar entre 0 e 100")]
    HealthscoreOutOfRange,
    #[error("Os valores de uptime não podem ser negativos")]
    NegativeUptime,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Deliberately loose: one `@`, something on each side, and a dot in the
/// domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.len() > EMAIL_MAX_LEN {
        return Err(ValidationError::InvalidEmail);
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

pub fn validate_healthscore(score: f64) -> Result<(), ValidationError> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(ValidationError::HealthscoreOutOfRange)
    }
}

impl CompanyData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

impl UnitData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

impl UserData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

impl AssetData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_healthscore(self.healthscore)?;
        if self.metrics.total_uptime < 0.0 {
            return Err(ValidationError::NegativeUptime);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_must_have_content() {
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("Acme"), Ok(()));
        assert_eq!(
            validate_name(&"x".repeat(NAME_MAX_LEN + 1)),
            Err(ValidationError::NameTooLong)
        );
    }

    #[test]
    fn emails_need_a_local_part_and_dotted_domain() {
        assert!(validate_email("ana@tractian.com").is_ok());
        assert!(validate_email(" ana@tractian.com ").is_ok());
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@tractian.com").is_err());
        assert!(validate_email("ana@localhost").is_err());
        assert!(validate_email("ana@@tractian.com").is_err());
        assert!(validate_email("ana@tractian.").is_err());
    }

    #[test]
    fn healthscore_is_a_percentage() {
        assert!(validate_healthscore(0.0).is_ok());
        assert!(validate_healthscore(100.0).is_ok());
        assert!(validate_healthscore(75.1).is_ok());
        assert!(validate_healthscore(-0.1).is_err());
        assert!(validate_healthscore(100.1).is_err());
        assert!(validate_healthscore(f64::NAN).is_err());
    }
}
