use crate::{
    credentials::{Credential, CredentialStore},
    errors::{ClientError, ClientResult},
};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "PORTFOLIO_API_BASE_URL";

const LOGIN_PATH: &str = "login";

/// Single choke point for all requests to the content API.
///
/// Every outgoing request carries an `Authorization: Basic …` header derived
/// from the currently stored credential; with no credential stored the
/// request goes out unauthenticated (read-only endpoints may accept it).
/// The client never mutates the credential store and never retries.
pub struct AuthorizedClient {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl AuthorizedClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            store,
        }
    }

    /// Build a client from the `PORTFOLIO_API_BASE_URL` environment variable.
    pub fn from_env(store: Arc<dyn CredentialStore>) -> Result<Self, std::env::VarError> {
        Ok(Self::new(std::env::var(BASE_URL_ENV)?, store))
    }

    /// Handle to the credential store this client reads from.
    #[must_use]
    pub fn store(&self) -> Arc<dyn CredentialStore> {
        self.store.clone()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    // An unreadable store is logged and treated as "no credential"; custody
    // stays with the store, the client only reads.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.store.load() {
            Ok(Some(credential)) => {
                builder.header(header::AUTHORIZATION, credential.basic_auth())
            }
            Ok(None) => builder,
            Err(err) => {
                tracing::warn!("credential store unreadable, sending unauthenticated: {err}");
                builder
            }
        }
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status(
                status,
                response.text().await.unwrap_or_default(),
            ))
        }
    }

    /// Send a body-less request, failing on any non-2xx status.
    pub async fn send(&self, method: Method, path: &str) -> ClientResult<Response> {
        tracing::debug!(%method, path, "dispatching request");
        let response = self.request(method, path).send().await?;
        Self::check_status(response).await
    }

    /// GET a JSON resource.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        let response = self.send(Method::GET, path).await?;
        Ok(response.json::<R>().await?)
    }

    /// Send a JSON body, parse the JSON response.
    pub async fn send_json<T, R>(&self, method: Method, path: &str, data: &T) -> ClientResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        tracing::debug!(%method, path, "dispatching request");
        let response = self.request(method, path).json(data).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<R>().await?)
    }

    /// Send a JSON body to an endpoint that answers with an empty body.
    pub async fn send_json_discard<T>(
        &self,
        method: Method,
        path: &str,
        data: &T,
    ) -> ClientResult<()>
    where
        T: Serialize + Sync,
    {
        tracing::debug!(%method, path, "dispatching request");
        let response = self.request(method, path).json(data).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Authentication operations against the content API. The session layer
/// talks to this seam so it can be exercised without a live server.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Validate an explicit candidate pair (`POST /login`), bypassing
    /// whatever the store currently holds.
    async fn check_credentials(&self, credential: &Credential) -> ClientResult<()>;

    /// Cheap authenticated probe with the stored credential (`POST /login`).
    async fn probe(&self) -> ClientResult<()>;
}

#[async_trait::async_trait]
impl AuthApi for AuthorizedClient {
    async fn check_credentials(&self, credential: &Credential) -> ClientResult<()> {
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .header(header::AUTHORIZATION, credential.basic_auth())
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn probe(&self) -> ClientResult<()> {
        self.send(Method::POST, LOGIN_PATH).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;

    #[test]
    fn url_join_tolerates_stray_slashes() {
        let store = Arc::new(MemoryCredentialStore::new());
        let client = AuthorizedClient::new("https://api.test/", store);
        assert_eq!(client.url("experience"), "https://api.test/experience");
        assert_eq!(client.url("/experience/3"), "https://api.test/experience/3");
    }
}
