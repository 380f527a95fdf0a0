//! Checker: the public face of the monitoring core.
//!
//! Owns the registry, result store and prober, and drives the lifecycle
//! described in [`crate::lifecycle::state`].
//!
//! # Caller contract
//! - An instance is single use: `start()` once, `stop()` once.
//! - Registering after `stop()` has begun only updates the registry.
//! - `start()` must be called from within a Tokio runtime.

use std::mem;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::config::validation::validate_checker;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::lifecycle::{LifecycleState, Shutdown};
use crate::observability::logging::{internal_log, ResultLogger};
use crate::probe::{CheckResult, HttpProber};
use crate::registry::{read_endpoints_file, Endpoint, EndpointRegistry, LoadError};
use crate::scheduler::{job_queue, spawn_ticker, spawn_workers, JobSender, WorkerContext};
use crate::store::{ResultStore, ResultStream};

#[derive(Debug)]
struct Runtime {
    state: LifecycleState,
    /// Controller's own producer handle, cloned into new tickers.
    jobs: Option<JobSender>,
    tickers: Vec<JoinHandle<()>>,
    workers: Vec<JoinHandle<()>>,
}

/// Periodic HTTP endpoint checker.
#[derive(Debug)]
pub struct Checker {
    config: CheckerConfig,
    registry: EndpointRegistry,
    store: Arc<ResultStore>,
    prober: Arc<HttpProber>,
    logger: ResultLogger,
    shutdown: Shutdown,
    runtime: Mutex<Runtime>,
}

impl Checker {
    /// Validate `config` and build a checker in the Created state.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        validate_checker(&config)?;
        let prober = HttpProber::new(config.timeout())?;

        Ok(Self {
            store: Arc::new(ResultStore::new(config.log_retention, config.result_buffer)),
            prober: Arc::new(prober),
            logger: ResultLogger::new(config.log_level),
            registry: EndpointRegistry::new(),
            shutdown: Shutdown::new(),
            runtime: Mutex::new(Runtime {
                state: LifecycleState::Created,
                jobs: None,
                tickers: Vec::new(),
                workers: Vec::new(),
            }),
            config,
        })
    }

    /// Spawn the worker pool, then a ticker for every registered endpoint.
    pub fn start(&self) {
        let mut rt = self.runtime();
        if !rt.state.can_transition_to(LifecycleState::Running) {
            tracing::warn!(state = %rt.state, "start() ignored: checker is single use");
            return;
        }

        let (jobs, receiver) = job_queue(self.config.job_queue_capacity);
        rt.workers = spawn_workers(
            self.config.workers,
            WorkerContext {
                jobs: receiver,
                prober: self.prober.clone(),
                store: self.store.clone(),
                logger: self.logger,
                shutdown: self.shutdown.subscribe(),
                internal_logs: self.config.internal_logs,
            },
        );

        if self.registry.is_empty() {
            internal_log!(self.config.internal_logs, "No endpoints registered yet");
        }

        // Registration takes the runtime lock too, so no endpoint is missed
        // between this snapshot and the state change.
        for endpoint in self.registry.list() {
            let ticker = spawn_ticker(
                endpoint,
                jobs.clone(),
                self.shutdown.subscribe(),
                self.config.internal_logs,
            );
            rt.tickers.push(ticker);
        }

        rt.jobs = Some(jobs);
        rt.state = LifecycleState::Running;
        internal_log!(
            self.config.internal_logs,
            workers = self.config.workers,
            endpoints = rt.tickers.len(),
            "Checker started"
        );
    }

    /// Raise the stop signal and wait for every task to exit.
    ///
    /// Tickers stop, the job queue closes, workers drain the queue and
    /// exit, and finally the result stream is closed.
    pub async fn stop(&self) {
        let (tickers, workers) = {
            let mut rt = self.runtime();
            match rt.state {
                LifecycleState::Running => {}
                LifecycleState::Created => {
                    rt.state = LifecycleState::Stopped;
                    self.shutdown.trigger();
                    self.store.close_stream();
                    return;
                }
                state => {
                    tracing::warn!(%state, "stop() ignored: already stopping or stopped");
                    return;
                }
            }
            rt.state = LifecycleState::Stopping;
            rt.jobs = None;
            (mem::take(&mut rt.tickers), mem::take(&mut rt.workers))
        };

        internal_log!(self.config.internal_logs, "Stopping checker");
        self.shutdown.trigger();

        for handle in tickers.into_iter().chain(workers) {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "checker task failed");
            }
        }

        self.store.close_stream();
        self.runtime().state = LifecycleState::Stopped;
        internal_log!(self.config.internal_logs, "Checker stopped");
    }

    /// Register one endpoint, scheduling it at once if running.
    ///
    /// Returns the endpoint with defaults applied.
    pub fn register_endpoint(&self, endpoint: Endpoint) -> Endpoint {
        let mut rt = self.runtime();
        let endpoint = self.registry.register(endpoint);
        internal_log!(
            self.config.internal_logs,
            name = %endpoint.name,
            url = %endpoint.url,
            "Registered endpoint"
        );
        self.schedule(&mut rt, &endpoint);
        endpoint
    }

    /// Register many endpoints under one registry lock.
    pub fn register_endpoints(&self, endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
        let mut rt = self.runtime();
        let endpoints = self.registry.register_batch(endpoints);
        internal_log!(
            self.config.internal_logs,
            count = endpoints.len(),
            "Registered endpoints"
        );
        for endpoint in &endpoints {
            self.schedule(&mut rt, endpoint);
        }
        endpoints
    }

    /// Register every endpoint in a JSON file (intervals in seconds).
    ///
    /// Nothing is registered if the file cannot be read or parsed.
    pub fn load_endpoints_file(&self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let endpoints = read_endpoints_file(path)?;
        internal_log!(
            self.config.internal_logs,
            count = endpoints.len(),
            path = %path.display(),
            "Loaded endpoints from file"
        );
        Ok(self.register_endpoints(endpoints).len())
    }

    /// Handle on the live result stream; ends after `stop()` completes.
    pub fn result_stream(&self) -> ResultStream {
        self.store.stream()
    }

    /// Up to `limit` most recent results for `endpoint_id`, oldest first.
    pub fn query_logs(&self, endpoint_id: &str, limit: usize) -> Vec<CheckResult> {
        self.store.query(endpoint_id, limit)
    }

    /// Snapshot of every registered endpoint.
    pub fn list_endpoints(&self) -> Vec<Endpoint> {
        self.registry.list()
    }

    pub fn state(&self) -> LifecycleState {
        self.runtime().state
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    fn schedule(&self, rt: &mut Runtime, endpoint: &Endpoint) {
        match (rt.state, &rt.jobs) {
            (state, Some(jobs)) if state.is_running() => {
                let ticker = spawn_ticker(
                    endpoint.clone(),
                    jobs.clone(),
                    self.shutdown.subscribe(),
                    self.config.internal_logs,
                );
                rt.tickers.push(ticker);
            }
            (LifecycleState::Created, _) => {}
            (state, _) => {
                tracing::warn!(%state, id = %endpoint.id, "endpoint registered but not scheduled");
            }
        }
    }

    fn runtime(&self) -> MutexGuard<'_, Runtime> {
        self.runtime.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
