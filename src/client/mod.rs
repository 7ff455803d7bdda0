//! Request/poll lifecycle against the simulation backend
//!
//! A [`SimulationClient`] keeps at most one request in flight. Starting a run
//! cancels whatever request or poll loop came before it, and a result is only
//! applied while its request is still the active one. Each applied result
//! replaces the current snapshot whole.

mod error;
mod params;
mod scheduler;
mod signal;
mod transport;

pub use error::FetchError;
pub use params::{parse_block_list, parse_speed_up, SimulationParams};
#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;
pub use scheduler::Scheduler;
pub use signal::{graph_view_memo, snapshot_signal};
pub use transport::{HttpTransport, Transport};

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use futures::FutureExt;
use leptos::logging::error;
use url::Url;
use crate::config::{ClientConfig, ConfigError};
use crate::logging::log;
use crate::models::SimulationSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    Idle,
    /// A run request is in flight
    Running,
    /// A run succeeded and its target is being re-fetched on a timer
    Polling,
    Disposed,
}

/// What became of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The response replaced the current snapshot
    Applied,
    /// Superseded by a newer request or by disposal; nothing changed
    Superseded,
    /// The backend could not be reached or answered badly; the previous
    /// snapshot is still current
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&Rc<SimulationSnapshot>)>;

struct ActiveRequest {
    id: u64,
    handle: AbortHandle,
}

struct PollTimer {
    id: u64,
    handle: AbortHandle,
    target: Url,
}

struct ClientState {
    phase: ClientPhase,
    snapshot: Option<Rc<SimulationSnapshot>>,
    active_request: Option<ActiveRequest>,
    poll_timer: Option<PollTimer>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ClientState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

struct Shared<T> {
    transport: T,
    scheduler: Rc<dyn Scheduler>,
    base_url: Url,
    poll_interval: Duration,
    state: RefCell<ClientState>,
}

/// Service object owning the current snapshot and the request/poll lifecycle
///
/// Dropping the client disposes it.
pub struct SimulationClient<T: Transport + 'static> {
    shared: Rc<Shared<T>>,
}

impl<T: Transport + 'static> SimulationClient<T> {
    /// # Errors
    ///
    /// Returns an error if the configured base URL is unusable or the poll
    /// interval is zero
    pub fn new(
        config: &ClientConfig,
        transport: T,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        let shared = Shared {
            transport,
            scheduler,
            base_url: config.base_url()?,
            poll_interval: config.checked_poll_interval()?,
            state: RefCell::new(ClientState {
                phase: ClientPhase::Idle,
                snapshot: None,
                active_request: None,
                poll_timer: None,
                subscribers: Vec::new(),
                next_id: 0,
            }),
        };
        Ok(Self { shared: Rc::new(shared) })
    }

    /// The most recently applied snapshot, if any
    #[must_use]
    pub fn snapshot(&self) -> Option<Rc<SimulationSnapshot>> {
        self.shared.state.borrow().snapshot.clone()
    }

    #[must_use]
    pub fn phase(&self) -> ClientPhase {
        self.shared.state.borrow().phase
    }

    /// URL the poll loop is re-fetching, while polling
    #[must_use]
    pub fn poll_target(&self) -> Option<Url> {
        self.shared
            .state
            .borrow()
            .poll_timer
            .as_ref()
            .map(|timer| timer.target.clone())
    }

    /// Call `callback` with every snapshot applied from now on
    pub fn subscribe(&self, callback: impl Fn(&Rc<SimulationSnapshot>) + 'static) -> SubscriptionId {
        let mut state = self.shared.state.borrow_mut();
        let id = SubscriptionId(state.next_id());
        state.subscribers.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.shared.state.borrow_mut();
        let before = state.subscribers.len();
        state.subscribers.retain(|(sub_id, _)| *sub_id != id);
        state.subscribers.len() != before
    }

    /// Start a simulation, superseding any request or poll loop in flight
    ///
    /// On success the snapshot is replaced and the same URL is re-polled every
    /// poll interval until the next run or disposal.
    pub async fn run_simulation(&self, params: &SimulationParams) -> RequestOutcome {
        let shared = &self.shared;
        if shared.is_disposed() {
            return RequestOutcome::Superseded;
        }

        let url = match params.target_url(&shared.base_url) {
            Ok(url) => url,
            Err(e) => {
                error!("Cannot build simulation request: {e}");
                return RequestOutcome::Failed;
            }
        };

        shared.stop_polling();
        let (id, registration) = shared.begin_request();
        shared.state.borrow_mut().phase = ClientPhase::Running;
        log!("Running simulation: {}", url);

        let result = shared.transport.fetch_snapshot(&url, registration).await;
        let outcome = shared.complete_request(id, result, "Simulation request");

        match outcome {
            RequestOutcome::Applied => Shared::start_polling(shared, url),
            RequestOutcome::Failed => shared.state.borrow_mut().phase = ClientPhase::Idle,
            RequestOutcome::Superseded => {}
        }
        outcome
    }

    /// Run one poll tick immediately against the current poll target
    ///
    /// Returns [`RequestOutcome::Superseded`] when no poll loop is active.
    pub async fn poll_once(&self) -> RequestOutcome {
        let timer_id = self.shared.state.borrow().poll_timer.as_ref().map(|timer| timer.id);
        match timer_id {
            Some(timer_id) => Rc::clone(&self.shared).poll(timer_id).await,
            None => RequestOutcome::Superseded,
        }
    }

    /// Cancel the outstanding request, stop the poll timer and drop the snapshot
    ///
    /// Safe to call more than once; later runs and polls are no-ops.
    pub fn dispose(&self) {
        self.shared.dispose();
    }
}

impl<T: Transport + 'static> Drop for SimulationClient<T> {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}

impl<T: Transport + 'static> Shared<T> {
    fn is_disposed(&self) -> bool {
        self.state.borrow().phase == ClientPhase::Disposed
    }

    /// Cancel the active request and register a fresh one in its place
    fn begin_request(&self) -> (u64, AbortRegistration) {
        let mut state = self.state.borrow_mut();
        if let Some(previous) = state.active_request.take() {
            previous.handle.abort();
            log!("Cancelled request #{}", previous.id);
        }
        let id = state.next_id();
        let (handle, registration) = AbortHandle::new_pair();
        state.active_request = Some(ActiveRequest { id, handle });
        (id, registration)
    }

    fn complete_request(
        &self,
        id: u64,
        result: Result<SimulationSnapshot, FetchError>,
        context: &str,
    ) -> RequestOutcome {
        let mut state = self.state.borrow_mut();
        let is_current = state.phase != ClientPhase::Disposed
            && state.active_request.as_ref().is_some_and(|active| active.id == id);

        match result {
            Ok(snapshot) if is_current => {
                state.active_request = None;
                let snapshot = Rc::new(snapshot);
                state.snapshot = Some(Rc::clone(&snapshot));
                let subscribers: Vec<Subscriber> =
                    state.subscribers.iter().map(|(_, sub)| Rc::clone(sub)).collect();
                drop(state);

                log!("{} #{} applied ({} trains)", context, id, snapshot.trains.len());
                for subscriber in subscribers {
                    subscriber(&snapshot);
                }
                RequestOutcome::Applied
            }
            Err(e) if is_current && !e.is_cancelled() => {
                state.active_request = None;
                drop(state);
                error!("{context} failed: {e}");
                RequestOutcome::Failed
            }
            _ => {
                log!("{} #{} superseded, result dropped", context, id);
                RequestOutcome::Superseded
            }
        }
    }

    fn start_polling(shared: &Rc<Self>, target: Url) {
        let (handle, registration) = AbortHandle::new_pair();
        let timer_id = {
            let mut state = shared.state.borrow_mut();
            if state.phase == ClientPhase::Disposed {
                return;
            }
            let id = state.next_id();
            state.poll_timer = Some(PollTimer { id, handle, target });
            state.phase = ClientPhase::Polling;
            id
        };

        let weak = Rc::downgrade(shared);
        let ticker = async move {
            loop {
                let Some(sleep) = weak.upgrade().map(|s| s.scheduler.sleep(s.poll_interval)) else {
                    break;
                };
                sleep.await;
                let Some(shared) = weak.upgrade() else {
                    break;
                };
                // One task per tick keeps the cadence fixed even when a fetch is slow
                let tick = Rc::clone(&shared).poll(timer_id).map(|_| ());
                shared.scheduler.spawn(Box::pin(tick));
            }
        };
        shared
            .scheduler
            .spawn(Box::pin(Abortable::new(ticker, registration).map(|_| ())));
    }

    fn stop_polling(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(timer) = state.poll_timer.take() {
            timer.handle.abort();
            log!("Stopped poll timer #{}", timer.id);
        }
        if state.phase == ClientPhase::Polling {
            state.phase = ClientPhase::Idle;
        }
    }

    /// One poll tick: replace any outstanding request with a fresh fetch of
    /// the poll target
    async fn poll(self: Rc<Self>, timer_id: u64) -> RequestOutcome {
        let request = {
            let target = self
                .state
                .borrow()
                .poll_timer
                .as_ref()
                .filter(|timer| timer.id == timer_id)
                .map(|timer| timer.target.clone());
            target.map(|url| (url, self.begin_request()))
        };
        // A tick queued just before its timer was stopped must not cancel the
        // request that replaced it
        let Some((url, (id, registration))) = request else {
            return RequestOutcome::Superseded;
        };

        let result = self.transport.fetch_snapshot(&url, registration).await;
        self.complete_request(id, result, "Poll")
    }

    fn dispose(&self) {
        let mut state = self.state.borrow_mut();
        if state.phase == ClientPhase::Disposed {
            return;
        }
        state.phase = ClientPhase::Disposed;
        if let Some(active) = state.active_request.take() {
            active.handle.abort();
        }
        if let Some(timer) = state.poll_timer.take() {
            timer.handle.abort();
        }
        state.snapshot = None;
        state.subscribers.clear();
        log!("Simulation client disposed");
    }
}
