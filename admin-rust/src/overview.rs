use crate::errors::AdminError;
use portfolio_sdk::{
    CollectionGateway, Experience, GatewayError, PersonalInformation, Presence, Project,
    SingletonGateway, SingletonResource,
};

/// Everything the public portfolio page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOverview {
    pub profile: PersonalInformation,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
}

/// Fetch the three content resources concurrently and await them jointly:
/// either all succeed before anything renders, or the first failure is
/// surfaced. A profile that has not been created yet counts as a failure
/// here; the read-only page cannot render without one.
pub async fn load_overview(
    profile: &dyn SingletonGateway<PersonalInformation>,
    experiences: &dyn CollectionGateway<Experience>,
    projects: &dyn CollectionGateway<Project>,
) -> Result<PortfolioOverview, AdminError> {
    let (profile, experiences, projects) =
        futures::try_join!(profile.get(), experiences.list(), projects.list())?;
    let profile = match profile {
        Presence::Found(profile) => profile,
        Presence::NotYetCreated => {
            return Err(GatewayError::NotFound(
                <PersonalInformation as SingletonResource>::NAME,
            )
            .into())
        }
    };
    Ok(PortfolioOverview {
        profile,
        experiences,
        projects,
    })
}
