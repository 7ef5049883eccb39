use crate::core::error::FetchError;
use crate::models::user::UserRecord;
use serde::Deserialize;
use std::time::Duration;

/// Client for the remote user source
#[derive(Clone, Debug)]
pub struct UserSourceClient {
    client: reqwest::Client,
    endpoint: String,
}

/// User object as served by the remote source. Fields beyond these four
/// (address, phone, company, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<ApiUser> for UserRecord {
    fn from(user: ApiUser) -> Self {
        UserRecord::new(user.id, user.name, user.username, user.email)
    }
}

impl UserSourceClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the seed user list with a single GET.
    /// No retries; any failure is returned to the caller as is.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let users = response
            .json::<Vec<ApiUser>>()
            .await
            .map_err(FetchError::Decode)?;

        Ok(users.into_iter().map(UserRecord::from).collect())
    }
}
