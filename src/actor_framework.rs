use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, DTOs, and Queries)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    /// Use `std::convert::Infallible` for entities that can only be seeded.
    type CreatePayload: Send + Sync + Debug;
    type Query: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }

    // --- Filtering ---

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, query: &Self::Query) -> bool;
}

/// Errors raised by the actor plumbing itself, independent of the domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response channel")]
    ActorDropped,
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Option<T::Query>,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// Owns one collection. Requests are served one at a time, so every append
/// is serialized through this task.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            index: HashMap::new(),
            next_id_fn: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Enables `Create` requests. Without a generator the store is read-only.
    pub fn with_id_generator(mut self, next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static) -> Self {
        self.next_id_fn = Some(Box::new(next_id_fn));
        self
    }

    /// Preloads items in the given order. Fails on the first repeated id.
    pub fn seed(mut self, items: impl IntoIterator<Item = T>) -> Result<Self, FrameworkError> {
        for item in items {
            self.insert(item)?;
        }
        Ok(self)
    }

    fn insert(&mut self, item: T) -> Result<(), FrameworkError> {
        let id = item.id().clone();
        if self.index.contains_key(&id) {
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }
        self.index.insert(id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    fn create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let next_id = self
            .next_id_fn
            .as_ref()
            .ok_or_else(|| FrameworkError::Rejected("store is read-only".to_string()))?;
        let mut item = T::from_create(next_id(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.insert(item.clone())?;
        Ok(item)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!(seeded = self.items.len(), "ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let result = self.create(payload);
                    match &result {
                        Ok(item) => debug!(id = %item.id(), "Item created"),
                        Err(e) => warn!(error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).map(|&position| self.items[position].clone());
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = match &query {
                        Some(query) => self.items.iter().filter(|item| item.matches(query)).cloned().collect(),
                        None => self.items.clone(),
                    };
                    debug!(count = items.len(), "Items listed");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!("ResourceActor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { payload, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, query: Option<T::Query>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { query, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
