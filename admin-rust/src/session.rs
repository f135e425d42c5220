use crate::errors::AdminError;
use portfolio_sdk::{AuthApi, ClientError, Credential, CredentialStore};
use std::sync::Arc;

/// Where the guard stands for the current activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The probe has not settled yet; render a loading placeholder.
    #[default]
    Unknown,
    /// Render the guarded content.
    Authenticated,
    /// Redirect to the login entry point.
    Unauthenticated,
}

/// Gates the management views behind an authenticated probe.
///
/// Evaluated once per activation: the first [`evaluate`](Self::evaluate)
/// settles the state and later calls return it unchanged. A credential
/// rejection clears the store (this guard is the only writer of `clear`);
/// any other failure leaves the stored pair alone, since an unreachable
/// server says nothing about its validity.
pub struct SessionGuard {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn CredentialStore>,
    state: SessionState,
}

impl SessionGuard {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            auth,
            store,
            state: SessionState::Unknown,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Probe the API with the stored credential and settle the state.
    pub async fn evaluate(&mut self) -> SessionState {
        if self.state != SessionState::Unknown {
            return self.state;
        }
        self.state = match self.auth.probe().await {
            Ok(()) => SessionState::Authenticated,
            Err(err) if err.is_auth_failure() => {
                tracing::warn!("session probe rejected, clearing stored credential: {err}");
                if let Err(store_err) = self.store.clear() {
                    tracing::warn!("failed to clear credential store: {store_err}");
                }
                SessionState::Unauthenticated
            }
            Err(err) => {
                tracing::warn!("session probe failed: {err}");
                SessionState::Unauthenticated
            }
        };
        self.state
    }
}

/// Outcome of a login attempt. Any non-2xx answer from the login endpoint
/// means the pair was rejected; only transport failures are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    InvalidCredentials,
}

/// Validate the pair against the API and persist it on success. This flow is
/// the only writer of `save`; a rejected pair leaves the store untouched.
pub async fn login(
    auth: &dyn AuthApi,
    store: &dyn CredentialStore,
    credential: Credential,
) -> Result<LoginOutcome, AdminError> {
    match auth.check_credentials(&credential).await {
        Ok(()) => {
            store.save(&credential)?;
            tracing::debug!(username = %credential.username, "login accepted");
            Ok(LoginOutcome::LoggedIn)
        }
        Err(ClientError::Status(status, _)) => {
            tracing::debug!(%status, "login rejected");
            Ok(LoginOutcome::InvalidCredentials)
        }
        Err(err) => Err(err.into()),
    }
}
