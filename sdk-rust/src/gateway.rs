use crate::{
    client::AuthorizedClient,
    errors::{ClientError, GatewayError, GatewayResult, Operation},
    resource::{CollectionResource, SingletonResource},
    types::ResourceId,
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::{marker::PhantomData, sync::Arc};

/// Existence-tagged fetch result for a singleton resource. A 404 from the
/// API is not an operational error but the "not yet created" signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<R> {
    Found(R),
    NotYetCreated,
}

impl<R> Presence<R> {
    /// The resource, when present.
    pub fn found(self) -> Option<R> {
        match self {
            Self::Found(resource) => Some(resource),
            Self::NotYetCreated => None,
        }
    }
}

/// Request/response mapping for a collection resource. Stateless
/// pass-through: all caching and list reconciliation lives in the
/// controllers on top.
#[async_trait]
pub trait CollectionGateway<R: CollectionResource>: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<R>>;
    async fn create(&self, draft: &R::Draft) -> GatewayResult<R>;
    async fn update(&self, id: ResourceId, draft: &R::Draft) -> GatewayResult<R>;
    async fn delete(&self, id: ResourceId) -> GatewayResult<()>;
}

/// Request/response mapping for a singleton resource.
#[async_trait]
pub trait SingletonGateway<R: SingletonResource>: Send + Sync {
    async fn get(&self) -> GatewayResult<Presence<R>>;
    async fn create(&self, data: &R) -> GatewayResult<R>;
    async fn update(&self, data: &R) -> GatewayResult<R>;
}

fn classify(operation: Operation, resource: &'static str, err: ClientError) -> GatewayError {
    if err.status() == Some(StatusCode::NOT_FOUND) {
        GatewayError::NotFound(resource)
    } else {
        GatewayError::RequestFailed {
            operation,
            resource,
            source: err,
        }
    }
}

/// [`CollectionGateway`] over the live API, routed through an
/// [`AuthorizedClient`].
pub struct HttpCollectionGateway<R> {
    client: Arc<AuthorizedClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> HttpCollectionGateway<R> {
    #[must_use]
    pub fn new(client: Arc<AuthorizedClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: CollectionResource> CollectionGateway<R> for HttpCollectionGateway<R> {
    async fn list(&self) -> GatewayResult<Vec<R>> {
        self.client
            .get_json(R::PATH)
            .await
            .map_err(|err| classify(Operation::List, R::NAME, err))
    }

    async fn create(&self, draft: &R::Draft) -> GatewayResult<R> {
        self.client
            .send_json(Method::POST, R::PATH, draft)
            .await
            .map_err(|err| classify(Operation::Create, R::NAME, err))
    }

    async fn update(&self, id: ResourceId, draft: &R::Draft) -> GatewayResult<R> {
        let path = format!("{}/{id}", R::PATH);
        self.client
            .send_json(Method::PUT, &path, draft)
            .await
            .map_err(|err| classify(Operation::Update, R::NAME, err))
    }

    async fn delete(&self, id: ResourceId) -> GatewayResult<()> {
        let path = format!("{}/{id}", R::PATH);
        self.client
            .send(Method::DELETE, &path)
            .await
            .map(drop)
            .map_err(|err| classify(Operation::Delete, R::NAME, err))
    }
}

/// [`SingletonGateway`] over the live API.
pub struct HttpSingletonGateway<R> {
    client: Arc<AuthorizedClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> HttpSingletonGateway<R> {
    #[must_use]
    pub fn new(client: Arc<AuthorizedClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: SingletonResource> SingletonGateway<R> for HttpSingletonGateway<R> {
    async fn get(&self) -> GatewayResult<Presence<R>> {
        match self.client.get_json::<R>(R::PATH).await {
            Ok(found) => Ok(Presence::Found(found)),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => Ok(Presence::NotYetCreated),
            Err(err) => Err(classify(Operation::Get, R::NAME, err)),
        }
    }

    // The singleton endpoints answer create/update with empty bodies, so the
    // submitted value is echoed back as the canonical result.
    async fn create(&self, data: &R) -> GatewayResult<R> {
        self.client
            .send_json_discard(Method::POST, R::PATH, data)
            .await
            .map_err(|err| classify(Operation::Create, R::NAME, err))?;
        Ok(data.clone())
    }

    async fn update(&self, data: &R) -> GatewayResult<R> {
        self.client
            .send_json_discard(Method::PUT, R::PATH, data)
            .await
            .map_err(|err| classify(Operation::Update, R::NAME, err))?;
        Ok(data.clone())
    }
}
