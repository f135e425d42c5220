mod collection;
mod errors;
mod fields;
mod forms;
mod notice;
mod overview;
mod profile;
mod session;

pub use collection::{
    CollectionController, EditSession, ExperiencesController, ListState, ProjectsController,
};
pub use errors::AdminError;
pub use fields::{DynamicList, SocialLinkRow, SocialLinksField, TagListField};
pub use forms::{ExperienceForm, FormError, ProfileForm, ProjectForm, ResourceForm, DATE_FORMAT};
pub use notice::{Notice, Severity};
pub use overview::{load_overview, PortfolioOverview};
pub use profile::{ProfileController, ProfileState};
pub use session::{login, LoginOutcome, SessionGuard, SessionState};
