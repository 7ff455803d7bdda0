use std::rc::Rc;
use leptos::{create_memo, create_signal, Memo, ReadSignal, SignalGet, SignalSet};
use crate::diagram::GraphView;
use crate::geometry::StationTable;
use crate::models::SimulationSnapshot;
use super::{SimulationClient, Transport};

/// Mirror the client's current snapshot into a reactive signal
///
/// The signal starts from whatever snapshot the client already holds and is
/// set again on every applied snapshot.
pub fn snapshot_signal<T: Transport + 'static>(
    client: &SimulationClient<T>,
) -> ReadSignal<Option<Rc<SimulationSnapshot>>> {
    let (snapshot, set_snapshot) = create_signal(client.snapshot());
    client.subscribe(move |latest| set_snapshot.set(Some(Rc::clone(latest))));
    snapshot
}

/// Derive the diagram from a snapshot signal, recomputed only when the
/// snapshot changes
pub fn graph_view_memo(
    snapshot: ReadSignal<Option<Rc<SimulationSnapshot>>>,
    stations: StationTable,
    base_width: f64,
) -> Memo<GraphView> {
    create_memo(move |_| GraphView::from_snapshot(snapshot.get().as_deref(), &stations, base_width))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::future::{AbortRegistration, Abortable};
    use futures::task::LocalSpawnExt;
    use leptos::SignalGetUntracked;
    use url::Url;
    use super::*;
    use crate::client::scheduler::testing::ManualScheduler;
    use crate::client::{FetchError, SimulationParams};
    use crate::config::ClientConfig;
    use crate::models::TrainRun;

    /// Answers every request with a fixed snapshot once released
    struct GateTransport {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl Transport for GateTransport {
        async fn fetch_snapshot(
            &self,
            _url: &Url,
            cancel: AbortRegistration,
        ) -> Result<SimulationSnapshot, FetchError> {
            let gate = self.gate.borrow_mut().take().ok_or(FetchError::Cancelled)?;
            Abortable::new(gate, cancel).await?.map_err(|_| FetchError::Cancelled)?;
            Ok(SimulationSnapshot {
                trains: vec![TrainRun::default(); 2],
                ..SimulationSnapshot::default()
            })
        }
    }

    #[test]
    fn test_signal_and_memo_follow_client() {
        let runtime = leptos::create_runtime();
        let mut pool = LocalPool::new();
        let (release, gate) = oneshot::channel();
        let client = Rc::new(
            SimulationClient::new(
                &ClientConfig::default(),
                GateTransport { gate: RefCell::new(Some(gate)) },
                Rc::new(ManualScheduler::new(pool.spawner())),
            )
            .expect("valid config"),
        );

        let snapshot = snapshot_signal(&*client);
        let view = graph_view_memo(snapshot, StationTable::corridor(), 1000.0);
        assert!(snapshot.get_untracked().is_none());
        assert!(view.get_untracked().graph().is_none());

        let runner = Rc::clone(&client);
        pool.spawner()
            .spawn_local(async move {
                runner.run_simulation(&SimulationParams::default()).await;
            })
            .expect("pool is alive");
        pool.run_until_stalled();
        assert!(snapshot.get_untracked().is_none());

        release.send(()).expect("transport is waiting");
        pool.run_until_stalled();

        let latest = snapshot.get_untracked().expect("snapshot applied");
        assert_eq!(latest.trains.len(), 2);
        let graph = view.get_untracked();
        assert_eq!(graph.graph().map(|g| g.series.len()), Some(2));

        client.dispose();
        runtime.dispose();
    }
}
