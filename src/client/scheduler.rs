use std::time::Duration;
use futures::future::LocalBoxFuture;

/// Single-threaded task spawning and timers for the client
///
/// Everything the client spawns runs on the same thread as the client itself,
/// so shared state needs no locking.
pub trait Scheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser event loop: `spawn_local` for tasks, `setTimeout` for sleeps
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
