use crate::{
    client::AuthApi,
    credentials::{Credential, CredentialStore},
    errors::{ClientError, ClientResult},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A mock login endpoint accepting exactly one valid pair. `probe` validates
/// whatever the shared store currently holds, the way the real endpoint
/// validates the Basic header the client derives from it. Failures injected
/// with [`inject_failure`](Self::inject_failure) pre-empt the next call,
/// emulating an outage rather than a rejection.
pub struct MockAuthApi {
    valid: Credential,
    store: Arc<dyn CredentialStore>,
    failures: Mutex<VecDeque<ClientError>>,
    check_calls: Mutex<usize>,
    probe_calls: Mutex<usize>,
}

impl MockAuthApi {
    #[must_use]
    pub fn new(valid: Credential, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            valid,
            store,
            failures: Mutex::new(VecDeque::new()),
            check_calls: Mutex::new(0),
            probe_calls: Mutex::new(0),
        }
    }

    /// Fail the next call with the given error instead of judging the pair.
    pub fn inject_failure(&self, error: ClientError) -> &Self {
        self.failures
            .lock()
            .expect("mock state poisoned")
            .push_back(error);
        self
    }

    pub fn check_calls(&self) -> usize {
        *self.check_calls.lock().expect("mock state poisoned")
    }

    pub fn probe_calls(&self) -> usize {
        *self.probe_calls.lock().expect("mock state poisoned")
    }

    fn verdict(&self, candidate: Option<&Credential>) -> ClientResult<()> {
        if let Some(error) = self
            .failures
            .lock()
            .expect("mock state poisoned")
            .pop_front()
        {
            return Err(error);
        }
        match candidate {
            Some(candidate) if *candidate == self.valid => Ok(()),
            _ => Err(ClientError::Status(
                StatusCode::UNAUTHORIZED,
                "invalid credentials".into(),
            )),
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn check_credentials(&self, credential: &Credential) -> ClientResult<()> {
        *self.check_calls.lock().expect("mock state poisoned") += 1;
        self.verdict(Some(credential))
    }

    async fn probe(&self) -> ClientResult<()> {
        *self.probe_calls.lock().expect("mock state poisoned") += 1;
        let stored = self.store.load().expect("store unreadable");
        self.verdict(stored.as_ref())
    }
}
