//! Backend layer: the bridge between the synchronous UI loop and the async
//! console services.
//!
//! ```text
//!   update::*            Backend::spawn(task)          tokio worker
//!   ─────────  ────────────────────────────────▶  ─────────────────────
//!                                                 task.await (HTTP, store)
//!                                                          │
//!   app.rs loop  ◀──── mpsc channel (Job) ─────────────────┘
//!   job(&mut App)  → update::*::finished(...)
//! ```
//!
//! A task never touches the model. It ends with a [`Job`], a closure the
//! loop applies to the model on the UI thread, which calls back into the
//! update layer with the result.
//!
//! Reads of the local key-value store that a page needs before its first
//! frame (cached panel rows) go through [`Backend::block_on`] instead.

pub mod tasks;

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use appconsole_app::AppState;

use crate::model::App;

/// Model change produced by a finished task.
pub type Job = Box<dyn FnOnce(&mut App) + Send>;

/// Owns the tokio runtime the services run on.
pub struct Backend {
    state: Arc<AppState>,
    runtime: Runtime,
    tx: UnboundedSender<Job>,
    rx: UnboundedReceiver<Job>,
    in_flight: Arc<AtomicUsize>,
}

impl Backend {
    pub fn new(state: Arc<AppState>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("appconsole-worker")
            .enable_all()
            .build()?;
        let (tx, rx) = unbounded_channel();
        Ok(Self {
            state,
            runtime,
            tx,
            rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Run a future to completion on the backend runtime.
    ///
    /// Only for startup and local store reads; network calls go through
    /// [`Self::spawn`].
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Run `task` in the background; its job is applied on a later frame.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Job> + Send + 'static,
    {
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);
        self.runtime.spawn(async move {
            let job = task.await;
            if tx.send(job).is_err() {
                log::debug!("UI loop is gone, dropping task result");
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Whether any spawned task has not delivered its job yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Jobs delivered since the last call.
    pub fn drain(&mut self) -> Vec<Job> {
        let mut jobs = Vec::new();
        while let Ok(job) = self.rx.try_recv() {
            jobs.push(job);
        }
        jobs
    }

    /// Wait for the next job.
    #[cfg(test)]
    pub fn next_job(&mut self) -> Option<Job> {
        let rx = &mut self.rx;
        self.runtime.block_on(async {
            tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
                .await
                .ok()
                .flatten()
        })
    }
}

/// Apply jobs until no task is left running.
#[cfg(test)]
pub fn settle(app: &mut App) {
    while app.backend.is_busy() || !app.backend.rx.is_empty() {
        match app.backend.next_job() {
            Some(job) => job(app),
            None => break,
        }
    }
}
