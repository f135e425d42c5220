use portfolio_sdk::{
    portfolio_sdk_test::{MockCollectionGateway, MockSingletonGateway},
    ClientError, CollectionGateway, GatewayError, Operation, PersonalInformation, Presence,
    Project, ProjectDraft, SingletonGateway, StatusCode,
};

fn draft(name: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.into(),
        detail: "detail".into(),
        skills: vec![],
        logo_url: String::new(),
        url: String::new(),
    }
}

#[tokio::test]
async fn create_assigns_monotonic_server_side_ids() {
    let gateway = MockCollectionGateway::<Project>::new();

    let first = gateway.create(&draft("one")).await.unwrap();
    let second = gateway.create(&draft("two")).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let listed = gateway.list().await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn seeded_items_do_not_collide_with_new_ids() {
    let seeded = Project::from((5, draft("seeded")));
    let gateway = MockCollectionGateway::with_items(vec![seeded]);

    let created = gateway.create(&draft("fresh")).await.unwrap();
    assert_eq!(created.id, 6);
}

#[tokio::test]
async fn updating_an_unknown_id_is_not_found() {
    let gateway = MockCollectionGateway::<Project>::new();
    let result = gateway.update(9, &draft("ghost")).await;
    assert!(matches!(result, Err(GatewayError::NotFound(_))));
}

#[tokio::test]
async fn injected_failure_pre_empts_one_operation_and_leaves_state_alone() {
    let gateway = MockCollectionGateway::<Project>::new();
    gateway.inject_failure(GatewayError::RequestFailed {
        operation: Operation::Create,
        resource: "project",
        source: ClientError::Status(StatusCode::BAD_REQUEST, "bad payload".into()),
    });

    assert!(gateway.create(&draft("rejected")).await.is_err());
    assert!(gateway.items().is_empty());

    // The next operation goes through.
    assert!(gateway.create(&draft("accepted")).await.is_ok());
}

#[tokio::test]
async fn singleton_presence_round_trip() {
    let gateway = MockSingletonGateway::<PersonalInformation>::new();
    assert_eq!(gateway.get().await.unwrap(), Presence::NotYetCreated);

    let profile = PersonalInformation {
        name: "Ada".into(),
        ..PersonalInformation::default()
    };
    let canonical = gateway.create(&profile).await.unwrap();
    assert_eq!(canonical, profile);
    assert_eq!(gateway.get().await.unwrap(), Presence::Found(profile));
}
