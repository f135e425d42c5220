use crate::{
    errors::{GatewayError, GatewayResult},
    gateway::{CollectionGateway, Presence, SingletonGateway},
    resource::{CollectionResource, SingletonResource},
    types::ResourceId,
};
use async_trait::async_trait;
use std::{collections::VecDeque, sync::Mutex};

struct MockCollectionState<R: CollectionResource> {
    items: Vec<R>,
    next_id: ResourceId,
    failures: VecDeque<GatewayError>,
    list_calls: usize,
    created: Vec<R::Draft>,
    updated: Vec<(ResourceId, R::Draft)>,
    deleted: Vec<ResourceId>,
}

/// A mock collection gateway holding its items in memory and assigning ids
/// the way the server would. Failures injected with
/// [`inject_failure`](MockCollectionGateway::inject_failure) fail the next
/// operation (of any kind) and leave the item state untouched.
pub struct MockCollectionGateway<R: CollectionResource> {
    state: Mutex<MockCollectionState<R>>,
}

impl<R: CollectionResource> Default for MockCollectionGateway<R> {
    fn default() -> Self {
        Self {
            state: Mutex::new(MockCollectionState {
                items: Vec::new(),
                next_id: 1,
                failures: VecDeque::new(),
                list_calls: 0,
                created: Vec::new(),
                updated: Vec::new(),
                deleted: Vec::new(),
            }),
        }
    }
}

impl<R> MockCollectionGateway<R>
where
    R: CollectionResource + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the gateway with existing items; the next assigned id continues
    /// past the highest seeded one.
    #[must_use]
    pub fn with_items(items: Vec<R>) -> Self {
        let next_id = items.iter().map(CollectionResource::id).max().unwrap_or(0) + 1;
        let gateway = Self::new();
        {
            let mut state = gateway.state.lock().expect("mock state poisoned");
            state.items = items;
            state.next_id = next_id;
        }
        gateway
    }

    /// Fail the next operation with the given error.
    pub fn inject_failure(&self, error: GatewayError) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.failures.push_back(error);
        drop(state);
        self
    }

    /// Snapshot of the items the "server" currently holds.
    pub fn items(&self) -> Vec<R> {
        self.state.lock().expect("mock state poisoned").items.clone()
    }

    /// How many list requests were received.
    pub fn list_calls(&self) -> usize {
        self.state.lock().expect("mock state poisoned").list_calls
    }

    /// Ids of the delete requests received, in order.
    pub fn deleted(&self) -> Vec<ResourceId> {
        self.state.lock().expect("mock state poisoned").deleted.clone()
    }
}

impl<R> MockCollectionGateway<R>
where
    R: CollectionResource,
    R::Draft: Clone,
{
    /// Drafts received by create requests, in order.
    pub fn created(&self) -> Vec<R::Draft> {
        self.state.lock().expect("mock state poisoned").created.clone()
    }

    /// `(id, draft)` pairs received by update requests, in order.
    pub fn updated(&self) -> Vec<(ResourceId, R::Draft)> {
        self.state.lock().expect("mock state poisoned").updated.clone()
    }
}

#[async_trait]
impl<R> CollectionGateway<R> for MockCollectionGateway<R>
where
    R: CollectionResource + Clone + From<(ResourceId, R::Draft)>,
    R::Draft: Clone,
{
    async fn list(&self) -> GatewayResult<Vec<R>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.list_calls += 1;
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state.items.clone())
    }

    async fn create(&self, draft: &R::Draft) -> GatewayResult<R> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.created.push(draft.clone());
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let id = state.next_id;
        state.next_id += 1;
        let item = R::from((id, draft.clone()));
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ResourceId, draft: &R::Draft) -> GatewayResult<R> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.updated.push((id, draft.clone()));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let position = state
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(GatewayError::NotFound(R::NAME))?;
        let item = R::from((id, draft.clone()));
        state.items[position] = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: ResourceId) -> GatewayResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.deleted.push(id);
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let position = state
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(GatewayError::NotFound(R::NAME))?;
        state.items.remove(position);
        Ok(())
    }
}

struct MockSingletonState<R> {
    value: Option<R>,
    failures: VecDeque<GatewayError>,
    get_calls: usize,
    created: Vec<R>,
    updated: Vec<R>,
}

/// A mock singleton gateway holding at most one value, answering
/// `NotYetCreated` while empty.
pub struct MockSingletonGateway<R: SingletonResource> {
    state: Mutex<MockSingletonState<R>>,
}

impl<R: SingletonResource> Default for MockSingletonGateway<R> {
    fn default() -> Self {
        Self {
            state: Mutex::new(MockSingletonState {
                value: None,
                failures: VecDeque::new(),
                get_calls: 0,
                created: Vec::new(),
                updated: Vec::new(),
            }),
        }
    }
}

impl<R: SingletonResource> MockSingletonGateway<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(value: R) -> Self {
        let gateway = Self::new();
        gateway.state.lock().expect("mock state poisoned").value = Some(value);
        gateway
    }

    /// Fail the next operation with the given error.
    pub fn inject_failure(&self, error: GatewayError) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.failures.push_back(error);
        drop(state);
        self
    }

    /// The value the "server" currently holds.
    pub fn value(&self) -> Option<R> {
        self.state.lock().expect("mock state poisoned").value.clone()
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().expect("mock state poisoned").get_calls
    }

    /// Values received by create requests, in order.
    pub fn created(&self) -> Vec<R> {
        self.state.lock().expect("mock state poisoned").created.clone()
    }

    /// Values received by update requests, in order.
    pub fn updated(&self) -> Vec<R> {
        self.state.lock().expect("mock state poisoned").updated.clone()
    }
}

#[async_trait]
impl<R: SingletonResource> SingletonGateway<R> for MockSingletonGateway<R> {
    async fn get(&self) -> GatewayResult<Presence<R>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.get_calls += 1;
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state
            .value
            .clone()
            .map_or(Presence::NotYetCreated, Presence::Found))
    }

    async fn create(&self, data: &R) -> GatewayResult<R> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.created.push(data.clone());
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state.value = Some(data.clone());
        Ok(data.clone())
    }

    async fn update(&self, data: &R) -> GatewayResult<R> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.updated.push(data.clone());
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state.value = Some(data.clone());
        Ok(data.clone())
    }
}
