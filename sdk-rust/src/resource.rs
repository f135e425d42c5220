use crate::types::{
    Experience, ExperienceDraft, PersonalInformation, Project, ProjectDraft, ResourceId,
};
use serde::{de::DeserializeOwned, Serialize};

/// A resource type with many independently identified instances, living at
/// `GET|POST /{PATH}` and `PUT|DELETE /{PATH}/{id}`.
///
/// Sibling collections keep independent id namespaces; an experience id says
/// nothing about any project id.
pub trait CollectionResource: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// URL segment under the API base.
    const PATH: &'static str;
    /// Label used in error messages.
    const NAME: &'static str;
    /// The resource minus its server-assigned id, as sent on create/update.
    type Draft: Serialize + Send + Sync;

    fn id(&self) -> ResourceId;
}

/// A resource type with at most one instance, identified by presence rather
/// than by id. `GET /{PATH}` answers 404 while it has not been created.
pub trait SingletonResource:
    DeserializeOwned + Serialize + Clone + Send + Sync + 'static
{
    const PATH: &'static str;
    const NAME: &'static str;
}

impl CollectionResource for Experience {
    const PATH: &'static str = "experience";
    const NAME: &'static str = "experience";
    type Draft = ExperienceDraft;

    fn id(&self) -> ResourceId {
        self.id
    }
}

impl CollectionResource for Project {
    const PATH: &'static str = "project";
    const NAME: &'static str = "project";
    type Draft = ProjectDraft;

    fn id(&self) -> ResourceId {
        self.id
    }
}

impl SingletonResource for PersonalInformation {
    const PATH: &'static str = "personal-information";
    const NAME: &'static str = "personal information";
}
