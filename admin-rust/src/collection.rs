use crate::{
    forms::{ExperienceForm, ProjectForm, ResourceForm},
    notice::Notice,
};
use portfolio_sdk::{CollectionGateway, CollectionResource, Experience, Project, ResourceId};
use std::sync::Arc;

/// Whether the list has been loaded at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Loading,
    Ready,
}

/// An open edit form: fresh defaults for create, or an existing item's
/// values copied in for update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<F> {
    pub form: F,
    editing_id: Option<ResourceId>,
}

impl<F> EditSession<F> {
    /// The id being updated; `None` while creating a new item.
    #[must_use]
    pub fn editing_id(&self) -> Option<ResourceId> {
        self.editing_id
    }
}

/// List-editing controller shared by the experiences and projects views.
///
/// The local list is only a cached view of the server's: every successful
/// mutation is followed by a wholesale re-fetch rather than a local patch,
/// the simplest strategy that cannot drift. Because no optimistic list
/// mutation is ever performed, a failed operation has nothing to roll back;
/// it surfaces a notice and leaves both the list and any open form as they
/// were.
pub struct CollectionController<R: CollectionResource, F> {
    gateway: Arc<dyn CollectionGateway<R>>,
    items: Vec<R>,
    list_state: ListState,
    editing: Option<EditSession<F>>,
    pending_delete: Option<ResourceId>,
    submitting: bool,
    notice: Option<Notice>,
}

impl<R, F> CollectionController<R, F>
where
    R: CollectionResource,
    F: ResourceForm<R>,
{
    #[must_use]
    pub fn new(gateway: Arc<dyn CollectionGateway<R>>) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            list_state: ListState::Loading,
            editing: None,
            pending_delete: None,
            submitting: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub fn list_state(&self) -> ListState {
        self.list_state
    }

    #[must_use]
    pub fn editing(&self) -> Option<&EditSession<F>> {
        self.editing.as_ref()
    }

    /// The open form, for the view to bind inputs to.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        self.editing.as_mut().map(|session| &mut session.form)
    }

    /// The id awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<ResourceId> {
        self.pending_delete
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Take the pending transient message, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Replace the local list wholesale with the server's current list.
    pub async fn fetch_all(&mut self) {
        match self.gateway.list().await {
            Ok(items) => {
                self.items = items;
                self.list_state = ListState::Ready;
            }
            Err(err) => {
                tracing::warn!("list fetch failed: {err}");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    /// Open the form with empty defaults.
    pub fn open_create(&mut self) {
        self.editing = Some(EditSession {
            form: F::empty(),
            editing_id: None,
        });
    }

    /// Open the form with the selected item's values copied in. False when
    /// the id is not in the local list.
    pub fn open_edit(&mut self, id: ResourceId) -> bool {
        match self.items.iter().find(|item| item.id() == id) {
            Some(item) => {
                self.editing = Some(EditSession {
                    form: F::prefilled(item),
                    editing_id: Some(id),
                });
                true
            }
            None => false,
        }
    }

    /// Close the form without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit the open form and create or update accordingly. Success
    /// re-synchronizes the list with a full re-fetch and closes the form;
    /// any failure leaves the list and the open form untouched.
    pub async fn submit(&mut self) {
        let Some(session) = self.editing.as_mut() else {
            return;
        };
        let draft = match session.form.commit() {
            Ok(draft) => draft,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return;
            }
        };
        let editing_id = session.editing_id;

        self.submitting = true;
        let result = match editing_id {
            Some(id) => self.gateway.update(id, &draft).await,
            None => self.gateway.create(&draft).await,
        };
        self.submitting = false;

        match result {
            Ok(_) => {
                // The list truth comes from the re-fetch, not the response.
                self.fetch_all().await;
                self.editing = None;
            }
            Err(err) => {
                tracing::warn!("submit failed: {err}");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    /// Ask for confirmation; no network effect until confirmed.
    pub fn request_delete(&mut self, id: ResourceId) {
        self.pending_delete = Some(id);
    }

    /// Back out of the confirmation with no network effect.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Issue the confirmed DELETE, then re-synchronize the list. The
    /// confirmation closes either way.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.gateway.delete(id).await {
            Ok(()) => self.fetch_all().await,
            Err(err) => {
                tracing::warn!("delete failed: {err}");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }
}

pub type ExperiencesController = CollectionController<Experience, ExperienceForm>;
pub type ProjectsController = CollectionController<Project, ProjectForm>;
