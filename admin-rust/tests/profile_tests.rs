use portfolio_admin::{
    login, LoginOutcome, ProfileController, ProfileForm, ProfileState, Severity,
};
use portfolio_sdk::{
    portfolio_sdk_test::{MockAuthApi, MockSingletonGateway},
    ClientError, Credential, GatewayError, MemoryCredentialStore, Operation, PersonalInformation,
    StatusCode,
};
use std::sync::Arc;

fn server_fault() -> GatewayError {
    GatewayError::RequestFailed {
        operation: Operation::Get,
        resource: "personal information",
        source: ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
    }
}

#[tokio::test]
async fn absent_profile_enters_create_mode_not_error() {
    let gateway = Arc::new(MockSingletonGateway::<PersonalInformation>::new());
    let mut controller = ProfileController::new(gateway);

    controller.fetch().await;
    assert_eq!(controller.state(), &ProfileState::Absent);
    assert!(controller.is_create_mode());
}

#[tokio::test]
async fn non_absence_fetch_failure_is_an_error_state() {
    let gateway = Arc::new(MockSingletonGateway::<PersonalInformation>::new());
    gateway.inject_failure(server_fault());
    let mut controller = ProfileController::new(gateway);

    controller.fetch().await;
    assert!(matches!(controller.state(), ProfileState::Error(_)));
    assert!(!controller.is_create_mode());
}

#[tokio::test]
async fn create_mode_submit_creates_and_keeps_the_submitted_data() {
    let gateway = Arc::new(MockSingletonGateway::<PersonalInformation>::new());
    let mut controller = ProfileController::new(gateway.clone());
    controller.fetch().await;
    assert!(controller.is_create_mode());

    let mut form = ProfileForm::empty();
    form.name = "Ada".into();
    form.surname = "Lovelace".into();
    form.job = "Engineer".into();
    controller.submit(&mut form).await;

    let expected = form.commit();
    assert_eq!(controller.state(), &ProfileState::Present(expected.clone()));
    assert!(!controller.is_create_mode());
    assert_eq!(gateway.created(), vec![expected]);
    assert!(gateway.updated().is_empty());

    let notice = controller.take_notice().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert!(notice.message.contains("created"));
}

#[tokio::test]
async fn present_profile_submits_as_update() {
    let stored = PersonalInformation {
        name: "Ada".into(),
        ..PersonalInformation::default()
    };
    let gateway = Arc::new(MockSingletonGateway::with_value(stored.clone()));
    let mut controller = ProfileController::new(gateway.clone());
    controller.fetch().await;
    assert_eq!(controller.state(), &ProfileState::Present(stored.clone()));

    let mut form = ProfileForm::prefilled(&stored);
    form.job = "Mathematician".into();
    controller.submit(&mut form).await;

    assert!(gateway.created().is_empty());
    assert_eq!(gateway.updated().len(), 1);
    assert_eq!(gateway.updated()[0].job, "Mathematician");

    let notice = controller.take_notice().unwrap();
    assert!(notice.message.contains("updated"));
}

#[tokio::test]
async fn failed_submit_keeps_the_prior_state_and_the_form_values() {
    let gateway = Arc::new(MockSingletonGateway::<PersonalInformation>::new());
    let mut controller = ProfileController::new(gateway.clone());
    controller.fetch().await;

    gateway.inject_failure(server_fault());
    let mut form = ProfileForm::empty();
    form.name = "Ada".into();
    controller.submit(&mut form).await;

    // Still in create mode, the entered values untouched, failure surfaced
    // as a transient notice.
    assert_eq!(controller.state(), &ProfileState::Absent);
    assert_eq!(form.name, "Ada");
    let notice = controller.take_notice().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(gateway.value(), None);
}

// Login with a valid pair, find no profile, create it, and read it back
// verbatim on the next fetch.
#[tokio::test]
async fn first_run_scenario_creates_the_profile() {
    let store = Arc::new(MemoryCredentialStore::new());
    let auth = MockAuthApi::new(Credential::new("op", "secret"), store.clone());
    let outcome = login(&auth, store.as_ref(), Credential::new("op", "secret"))
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::LoggedIn);

    let gateway = Arc::new(MockSingletonGateway::<PersonalInformation>::new());
    let mut controller = ProfileController::new(gateway.clone());
    controller.fetch().await;
    assert!(controller.is_create_mode());

    let mut form = ProfileForm::empty();
    form.name = "Ada".into();
    form.summary = "I build things".into();
    controller.submit(&mut form).await;
    let submitted = form.commit();

    let mut reloaded = ProfileController::new(gateway);
    reloaded.fetch().await;
    assert_eq!(reloaded.state(), &ProfileState::Present(submitted));
}
