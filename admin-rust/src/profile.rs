use crate::{forms::ProfileForm, notice::Notice};
use portfolio_sdk::{PersonalInformation, Presence, SingletonGateway};
use std::sync::Arc;

/// Lifecycle of the profile singleton in the edit view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    /// The profile has not been created yet; the view offers a create form,
    /// not an error.
    Absent,
    Present(PersonalInformation),
    /// The initial fetch failed for a reason other than absence.
    Error(String),
}

/// Manages the profile's existence ambiguity and routes submission to create
/// or update accordingly.
pub struct ProfileController {
    gateway: Arc<dyn SingletonGateway<PersonalInformation>>,
    state: ProfileState,
    submitting: bool,
    notice: Option<Notice>,
}

impl ProfileController {
    #[must_use]
    pub fn new(gateway: Arc<dyn SingletonGateway<PersonalInformation>>) -> Self {
        Self {
            gateway,
            state: ProfileState::Loading,
            submitting: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether submission would create rather than update.
    #[must_use]
    pub fn is_create_mode(&self) -> bool {
        matches!(self.state, ProfileState::Absent)
    }

    /// Take the pending transient message, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Initial fetch. "Not yet created" lands in `Absent`, never in `Error`.
    pub async fn fetch(&mut self) {
        self.state = ProfileState::Loading;
        self.state = match self.gateway.get().await {
            Ok(Presence::Found(profile)) => ProfileState::Present(profile),
            Ok(Presence::NotYetCreated) => ProfileState::Absent,
            Err(err) => {
                tracing::warn!("profile fetch failed: {err}");
                ProfileState::Error(err.to_string())
            }
        };
    }

    /// Submit the form, creating or updating depending on current existence.
    /// Success keeps the gateway's canonical value without a re-fetch;
    /// failure keeps the prior state and leaves the form values untouched.
    pub async fn submit(&mut self, form: &mut ProfileForm) {
        let data = form.commit();
        let creating = self.is_create_mode();
        self.submitting = true;
        let result = if creating {
            self.gateway.create(&data).await
        } else {
            self.gateway.update(&data).await
        };
        self.submitting = false;
        match result {
            Ok(canonical) => {
                self.state = ProfileState::Present(canonical);
                self.notice = Some(Notice::success(if creating {
                    "Personal information created successfully"
                } else {
                    "Personal information updated successfully"
                }));
            }
            Err(err) => {
                tracing::warn!("profile submit failed: {err}");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }
}
