use dotenvy::dotenv;
use portfolio_admin::{load_overview, login, LoginOutcome, SessionGuard, SessionState};
use portfolio_sdk::{
    AuthorizedClient, Credential, Experience, FileCredentialStore, HttpCollectionGateway,
    HttpSingletonGateway, PersonalInformation, Project,
};
use std::{path::PathBuf, sync::Arc};

// End-to-end session walkthrough against a live API. Requires
// PORTFOLIO_API_BASE_URL, PORTFOLIO_USERNAME and PORTFOLIO_PASSWORD.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credential_path = std::env::var("PORTFOLIO_CREDENTIAL_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("portfolio-admin-credential.json"));
    let store = Arc::new(FileCredentialStore::new(credential_path));
    let client = Arc::new(AuthorizedClient::from_env(store.clone())?);

    let credential = Credential::new(
        std::env::var("PORTFOLIO_USERNAME")?,
        std::env::var("PORTFOLIO_PASSWORD")?,
    );
    match login(client.as_ref(), store.as_ref(), credential).await? {
        LoginOutcome::LoggedIn => println!("logged in"),
        LoginOutcome::InvalidCredentials => {
            eprintln!("invalid username or password");
            return Ok(());
        }
    }

    let mut guard = SessionGuard::new(client.clone(), store.clone());
    if guard.evaluate().await != SessionState::Authenticated {
        eprintln!("session could not be confirmed");
        return Ok(());
    }

    let profile_gw = HttpSingletonGateway::<PersonalInformation>::new(client.clone());
    let experiences_gw = HttpCollectionGateway::<Experience>::new(client.clone());
    let projects_gw = HttpCollectionGateway::<Project>::new(client);

    match load_overview(&profile_gw, &experiences_gw, &projects_gw).await {
        Ok(overview) => {
            println!(
                "{} {} - {}",
                overview.profile.name, overview.profile.surname, overview.profile.job
            );
            for experience in &overview.experiences {
                println!(
                    "  {} at {} ({})",
                    experience.role,
                    experience.company_name,
                    experience.date_range()
                );
            }
            for project in &overview.projects {
                println!("  {} - {}", project.name, project.url);
            }
        }
        Err(err) => eprintln!("overview unavailable: {err}"),
    }

    Ok(())
}
