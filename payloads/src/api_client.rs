use crate::{
    Asset, AssetId, Company, CompanyId, ResourcePath, Unit, UnitId, User,
    UserId, requests, responses::MutationResponse,
};
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Where the backend lives. Resolved once by the caller and handed to
/// [`APIClient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base url every resource path is appended to, e.g.
    /// `http://127.0.0.1:8000/api`.
    pub base_url: String,
}

/// An API client for interfacing with the backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            address: config.base_url.trim_end_matches('/').to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &ResourcePath) -> String {
        format!("{}/{path}", &self.address)
    }

    async fn empty_get(&self, path: &ResourcePath) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn json_post(
        &self,
        path: &ResourcePath,
        body: &impl Serialize,
    ) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn json_put(
        &self,
        path: &ResourcePath,
        body: &impl Serialize,
    ) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_delete(&self, path: &ResourcePath) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Generic resource access, used by the UI hooks which only know a path.
impl APIClient {
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
    ) -> Result<T, ClientError> {
        let response = self.empty_get(path).await?;
        ok_body(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<MutationResponse<T>, ClientError> {
        let response = self.json_post(path, body).await?;
        ok_mutation(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &ResourcePath,
        body: &B,
    ) -> Result<MutationResponse<T>, ClientError> {
        let response = self.json_put(path, body).await?;
        ok_mutation(response).await
    }

    pub async fn delete(
        &self,
        path: &ResourcePath,
    ) -> Result<MutationResponse<()>, ClientError> {
        let response = self.empty_delete(path).await?;
        let status = response.status();
        ok_empty(response).await?;
        Ok(MutationResponse { status, body: () })
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get(&ResourcePath::HealthCheck).await?;
        ok_empty(response).await
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.get(&ResourcePath::Companies).await
    }

    pub async fn get_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Company, ClientError> {
        self.get(&ResourcePath::Company(*company_id)).await
    }

    pub async fn create_company(
        &self,
        details: &requests::CompanyData,
    ) -> Result<MutationResponse<Company>, ClientError> {
        self.post(&ResourcePath::Companies, details).await
    }

    pub async fn update_company(
        &self,
        company_id: &CompanyId,
        details: &requests::CompanyData,
    ) -> Result<MutationResponse<Company>, ClientError> {
        self.put(&ResourcePath::Company(*company_id), details).await
    }

    /// Delete a company along with its units, users and assets.
    pub async fn delete_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<MutationResponse<()>, ClientError> {
        self.delete(&ResourcePath::Company(*company_id)).await
    }

    pub async fn list_company_units(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Unit>, ClientError> {
        self.get(&ResourcePath::CompanyUnits(*company_id)).await
    }

    pub async fn list_company_users(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<User>, ClientError> {
        self.get(&ResourcePath::CompanyUsers(*company_id)).await
    }

    pub async fn list_company_assets(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Asset>, ClientError> {
        self.get(&ResourcePath::CompanyAssets(*company_id)).await
    }

    pub async fn get_unit(&self, unit_id: &UnitId) -> Result<Unit, ClientError> {
        self.get(&ResourcePath::Unit(*unit_id)).await
    }

    pub async fn create_unit(
        &self,
        details: &requests::UnitData,
    ) -> Result<MutationResponse<Unit>, ClientError> {
        self.post(&ResourcePath::Units, details).await
    }

    pub async fn update_unit(
        &self,
        unit_id: &UnitId,
        details: &requests::UnitData,
    ) -> Result<MutationResponse<Unit>, ClientError> {
        self.put(&ResourcePath::Unit(*unit_id), details).await
    }

    /// Delete a unit along with the users and assets assigned to it.
    pub async fn delete_unit(
        &self,
        unit_id: &UnitId,
    ) -> Result<MutationResponse<()>, ClientError> {
        self.delete(&ResourcePath::Unit(*unit_id)).await
    }

    pub async fn get_user(&self, user_id: &UserId) -> Result<User, ClientError> {
        self.get(&ResourcePath::User(*user_id)).await
    }

    pub async fn create_user(
        &self,
        details: &requests::UserData,
    ) -> Result<MutationResponse<User>, ClientError> {
        self.post(&ResourcePath::Users, details).await
    }

    pub async fn update_user(
        &self,
        user_id: &UserId,
        details: &requests::UserData,
    ) -> Result<MutationResponse<User>, ClientError> {
        self.put(&ResourcePath::User(*user_id), details).await
    }

    pub async fn delete_user(
        &self,
        user_id: &UserId,
    ) -> Result<MutationResponse<()>, ClientError> {
        self.delete(&ResourcePath::User(*user_id)).await
    }

    pub async fn get_asset(
        &self,
        asset_id: &AssetId,
    ) -> Result<Asset, ClientError> {
        self.get(&ResourcePath::Asset(*asset_id)).await
    }

    pub async fn create_asset(
        &self,
        details: &requests::AssetData,
    ) -> Result<MutationResponse<Asset>, ClientError> {
        self.post(&ResourcePath::Assets, details).await
    }

    pub async fn update_asset(
        &self,
        asset_id: &AssetId,
        details: &requests::AssetData,
    ) -> Result<MutationResponse<Asset>, ClientError> {
        self.put(&ResourcePath::Asset(*asset_id), details).await
    }

    pub async fn delete_asset(
        &self,
        asset_id: &AssetId,
    ) -> Result<MutationResponse<()>, ClientError> {
        self.delete(&ResourcePath::Asset(*asset_id)).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Like [`ok_body`], but keeps the status code for callers that branch on it.
pub async fn ok_mutation<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<MutationResponse<T>, ClientError> {
    let status = response.status();
    let body = ok_body(response).await?;
    Ok(MutationResponse { status, body })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = APIClient::new(&ClientConfig {
            base_url: "http://localhost:8000/api/".into(),
        });
        assert_eq!(
            client.format_url(&ResourcePath::CompanyUsers(CompanyId(3))),
            "http://localhost:8000/api/companies/3/users"
        );
    }
}
