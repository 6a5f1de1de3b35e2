use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (State machine with Actions)
// =============================================================================

/// Trait that any piece of UI state must implement to be hosted by a StoreActor.
///
/// The actor owns the only mutable copy. Every successful action that changes
/// the state is published to subscribers before the caller gets its reply.
pub trait Store: Clone + PartialEq + Debug + Send + Sync + 'static {
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Apply one action to the state.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, String>>;

#[derive(Debug)]
pub enum StoreRequest<S: Store> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct StoreActor<S: Store> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    notifier: watch::Sender<S>,
}

impl<S: Store> StoreActor<S> {
    pub fn new(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (notifier, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            notifier,
        };
        let client = StoreClient::new(sender, watcher);
        (actor, client)
    }

    /// Main actor loop. Ends on `Shutdown` or once every client is gone.
    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Store actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    self.handle_dispatch(action, respond_to);
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!("Processing snapshot request");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Shutdown => {
                    info!("Store actor shutting down");
                    break;
                }
            }
        }

        info!("Store actor stopped");
    }

    fn handle_dispatch(&mut self, action: S::Action, respond_to: Response<S::ActionResult>) {
        debug!(?action, "Processing dispatch request");

        let result = self.state.handle_action(action);
        if result.is_ok() {
            self.publish();
        }

        let _ = respond_to.send(result);
    }

    fn publish(&self) {
        let state = &self.state;
        let changed = self.notifier.send_if_modified(|current| {
            if current == state {
                return false;
            }
            *current = state.clone();
            true
        });

        if changed {
            debug!(subscribers = self.notifier.receiver_count(), "State change published");
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StoreClient<S: Store> {
    sender: mpsc::Sender<StoreRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: Store> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    pub async fn dispatch(&self, action: S::Action) -> Result<S::ActionResult, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(StoreRequest::Dispatch { action, respond_to })
            .await.map_err(|_| "Actor closed".to_string())?;
        response.await.map_err(|_| "Actor dropped".to_string())?
    }

    pub async fn snapshot(&self) -> Result<S, String> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(StoreRequest::Snapshot { respond_to })
            .await.map_err(|_| "Actor closed".to_string())?;
        response.await.map_err(|_| "Actor dropped".to_string())?
    }

    /// Receiver that is notified on every published change after this call.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        let mut watcher = self.watcher.clone();
        drop(watcher.borrow_and_update());
        watcher
    }

    pub async fn shutdown(&self) -> Result<(), String> {
        self.sender.send(StoreRequest::Shutdown)
            .await.map_err(|_| "Actor closed".to_string())
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
