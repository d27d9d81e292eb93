//! Background computation with restart on change.
//!
//! A [`Coordinator`] owns one worker thread and a [`Shared`] state that the editor
//! side mutates. Every structural edit raises the `changed` flag and wakes the worker.
//! The worker copies the graph under the lock, clears the flag and runs the
//! [pipeline](crate::pipeline). The same flag doubles as the cancellation signal, so
//! an edit made mid-run makes the running pipeline return [`Error::Cancelled`] at its
//! next poll point, and the worker starts over from the latest graph.
//!
//! ```text
//! Idle ──changed──> Computing ──ok──> Done
//!   ^                   │  └──changed──> Aborted ──> Computing
//!   └──n = 0 / error────┘
//! ```
//!
//! A result is published only if no edit happened since its snapshot was taken, and
//! the lattice, matrix, Möbius values and polynomial are published together as one
//! [`Computation`].

use std::fmt;
use std::io;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::error::{EditError, Error};
use crate::graph::Graph;
use crate::pipeline::{self, Computation};
use crate::polynomial::ChromaticPolynomial;
use crate::progress::{Counters, Observer, Progress};

#[derive(Debug, Clone)]
pub struct Config {
    thread_name: String,
    idle_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thread_name: "chrompoly-worker".to_string(),
            idle_timeout: Duration::from_millis(100),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// How long the idle worker sleeps before re-checking its flags on its own.
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for a change; nothing published.
    Idle,
    /// A snapshot has been taken and the pipeline is running.
    Computing,
    /// The published result matches the current graph.
    Done,
    /// The last run was discarded because of an edit or a shutdown.
    Aborted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Idle => "idle",
            Status::Computing => "computing",
            Status::Done => "done",
            Status::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
struct State {
    status: Status,
    /// Generation of the snapshot the result was computed from, and the result.
    published: Option<(u64, Arc<Computation>)>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared between the editor and the worker.
#[derive(Debug)]
pub struct Shared {
    graph: Mutex<Graph>,
    /// Signalled (under the `graph` lock) on every edit and on shutdown.
    wake: Condvar,
    changed: AtomicBool,
    running: AtomicBool,
    /// Bumped on every edit.
    generation: AtomicU64,
    state: Mutex<State>,
    /// Signalled on every status change.
    settled: Condvar,
    counters: Counters,
}

impl Shared {
    /// Creates the shared state for `graph`, with a pending change so that the first
    /// run starts right away.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph: Mutex::new(graph),
            wake: Condvar::new(),
            changed: AtomicBool::new(true),
            running: AtomicBool::new(true),
            generation: AtomicU64::new(0),
            state: Mutex::new(State {
                status: Status::Idle,
                published: None,
            }),
            settled: Condvar::new(),
            counters: Counters::new(),
        }
    }

    /// Applies an edit to the graph. A successful edit raises the change signal; a
    /// rejected one leaves everything untouched.
    pub fn edit<F, T>(&self, f: F) -> Result<T, EditError>
    where
        F: FnOnce(&mut Graph) -> Result<T, EditError>,
    {
        let mut graph = lock(&self.graph);
        let value = f(&mut graph)?;
        self.mark_changed();
        Ok(value)
    }

    /// Must be called with the `graph` lock held.
    fn mark_changed(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.changed.store(true, Ordering::SeqCst);
        self.wake.notify_one();
        debug!("graph changed (generation {})", generation);
    }

    pub fn add_vertex(&self) -> usize {
        let mut graph = lock(&self.graph);
        let v = graph.add_vertex();
        self.mark_changed();
        v
    }

    pub fn remove_vertex(&self, v: usize) -> Result<(), EditError> {
        self.edit(|g| g.remove_vertex(v))
    }

    pub fn add_edge(&self, a: usize, b: usize) -> Result<(), EditError> {
        self.edit(|g| g.add_edge(a, b))
    }

    pub fn remove_edge(&self, a: usize, b: usize) -> Result<(), EditError> {
        self.edit(|g| g.remove_edge(a, b))
    }

    /// Adds the edge if absent, removes it otherwise. Returns whether it now exists.
    pub fn toggle_edge(&self, a: usize, b: usize) -> Result<bool, EditError> {
        self.edit(|g| g.toggle_edge(a, b))
    }

    /// Replaces the whole graph.
    pub fn set_graph(&self, new: Graph) {
        let mut graph = lock(&self.graph);
        *graph = new;
        self.mark_changed();
    }

    /// A copy of the current graph.
    pub fn snapshot(&self) -> Graph {
        lock(&self.graph).clone()
    }

    /// Number of edits so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_changed(&self) -> bool {
        self.changed.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> Status {
        lock(&self.state).status
    }

    /// The polynomial of the current graph, once computed. `None` while a
    /// computation is pending and for a graph without vertices.
    pub fn polynomial(&self) -> Option<ChromaticPolynomial> {
        self.result().map(|c| c.polynomial().clone())
    }

    /// Everything computed for the current graph, once computed.
    pub fn result(&self) -> Option<Arc<Computation>> {
        let state = lock(&self.state);
        match (&state.status, &state.published) {
            (Status::Done, Some((_, computation))) => Some(Arc::clone(computation)),
            _ => None,
        }
    }

    /// Generation of the graph the last published result was computed from.
    pub fn result_generation(&self) -> Option<u64> {
        lock(&self.state).published.as_ref().map(|(g, _)| *g)
    }

    pub fn progress(&self) -> Progress {
        match self.polynomial() {
            Some(polynomial) => Progress::Done(polynomial),
            None => Progress::from_counters(&self.counters),
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    fn is_settled(&self, status: Status) -> bool {
        matches!(status, Status::Idle | Status::Done) && !self.is_changed()
    }

    /// Blocks until the worker has caught up with every edit, or until `timeout`
    /// elapses. Returns the status at that point, or `None` on timeout.
    pub fn wait_until_settled(&self, timeout: Duration) -> Option<Status> {
        let state = lock(&self.state);
        let (state, result) = self
            .settled
            .wait_timeout_while(state, timeout, |s| !self.is_settled(s.status))
            .unwrap_or_else(PoisonError::into_inner);
        if result.timed_out() {
            None
        } else {
            Some(state.status)
        }
    }

    fn set_state(&self, status: Status, published: Option<Option<(u64, Arc<Computation>)>>) {
        let mut state = lock(&self.state);
        state.status = status;
        if let Some(published) = published {
            state.published = published;
        }
        self.settled.notify_all();
    }

    /// Waits for a change and takes a snapshot of the graph. Returns `None` once
    /// shutdown has been requested.
    fn next_snapshot(&self, timeout: Duration) -> Option<(u64, Graph)> {
        let mut graph = lock(&self.graph);
        loop {
            if !self.is_running() {
                return None;
            }
            if self.is_changed() {
                // Computing must be visible before the change is cleared.
                self.set_state(Status::Computing, None);
                self.changed.store(false, Ordering::SeqCst);
                return Some((self.generation(), graph.clone()));
            }
            graph = self
                .wake
                .wait_timeout(graph, timeout)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// Publishes `computation` unless the graph changed since its snapshot.
    fn publish(&self, generation: u64, computation: Computation) {
        let _graph = lock(&self.graph);
        if self.is_changed() {
            debug!("discarding result of generation {}", generation);
            self.set_state(Status::Aborted, None);
            return;
        }
        self.set_state(Status::Done, Some(Some((generation, Arc::new(computation)))));
    }

    fn stop(&self) {
        let _graph = lock(&self.graph);
        self.running.store(false, Ordering::SeqCst);
        self.wake.notify_all();
    }
}

/// The running pipeline polls the shared state: an edit or a shutdown cancels it.
impl Observer for Shared {
    fn is_cancelled(&self) -> bool {
        self.is_changed() || !self.is_running()
    }

    fn partition_discovered(&self, count: usize) {
        self.counters.set_discovered(count);
    }

    fn lattice_complete(&self, size: usize) {
        self.counters.set_total(size);
    }

    fn row_processed(&self, rows: usize) {
        self.counters.set_rows(rows);
    }
}

fn run_worker(shared: &Shared, config: &Config) {
    info!("worker started");
    while let Some((generation, graph)) = shared.next_snapshot(config.idle_timeout()) {
        shared.counters.reset();
        if graph.order() == 0 {
            debug!("graph has no vertices");
            shared.set_state(Status::Idle, Some(None));
            continue;
        }

        info!(
            "computing generation {}: n = {}, {} edges",
            generation,
            graph.order(),
            graph.size()
        );
        let outcome = pipeline::compute(&graph, shared);
        shared.counters.reset();

        match outcome {
            Ok(computation) => shared.publish(generation, computation),
            Err(Error::Cancelled) => {
                debug!("generation {} cancelled", generation);
                shared.set_state(Status::Aborted, None);
            }
            Err(e @ Error::OutOfMemory(_)) => {
                error!("generation {}: {}", generation, e);
                shared.set_state(Status::Idle, Some(None));
            }
            Err(e) => {
                warn!("generation {}: rejected snapshot: {}", generation, e);
                shared.set_state(Status::Idle, Some(None));
            }
        }
    }
    info!("worker stopped");
}

/// Owner of the worker thread.
///
/// Dereferences to [`Shared`], so edits and queries go straight through it.
#[derive(Debug)]
pub struct Coordinator {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Coordinator {
    /// Starts a worker with the default [`Config`]. The first computation starts
    /// immediately on `graph`.
    pub fn new(graph: Graph) -> io::Result<Self> {
        Self::spawn(graph, Config::default())
    }

    pub fn spawn(graph: Graph, config: Config) -> io::Result<Self> {
        let shared = Arc::new(Shared::new(graph));
        let worker = {
            let shared = Arc::clone(&shared);
            thread::Builder::new()
                .name(config.thread_name().to_string())
                .spawn(move || run_worker(&shared, &config))?
        };
        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    pub fn shared(&self) -> &Arc<Shared> {
        &self.shared
    }

    /// Stops the worker, cancelling any running computation, and joins it.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.shared.stop();
            if worker.join().is_err() {
                error!("worker thread panicked");
            }
        }
    }
}

impl Deref for Coordinator {
    type Target = Shared;

    fn deref(&self) -> &Self::Target {
        &self.shared
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
