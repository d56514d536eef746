//! Owner of every running child and the receiving end of their events.

use std::collections::HashMap;
use std::sync::{mpsc, Arc};

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info};

use hudkit_common::{ProcessError, SpawnKey};

use super::spawn::{self, EventSink};
use super::types::{ProcessEvent, ProcessUpdate, SupervisorConfig};

/// Called from runtime threads after an event is queued.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

struct SpawnRecord {
    kill: Option<oneshot::Sender<()>>,
    started: bool,
}

/// Tracks children by `SpawnKey` until their terminal event is drained.
///
/// A record is terminal after `Exit`, or after an `Error` that arrives
/// before `Started` (spawn failure).
pub struct ProcessSupervisor {
    runtime: Option<Handle>,
    config: SupervisorConfig,
    records: HashMap<SpawnKey, SpawnRecord>,
    tx: mpsc::Sender<(SpawnKey, ProcessEvent)>,
    rx: mpsc::Receiver<(SpawnKey, ProcessEvent)>,
    waker: Waker,
}

impl ProcessSupervisor {
    pub fn new(runtime: Handle, config: SupervisorConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            runtime: Some(runtime),
            config,
            records: HashMap::new(),
            tx,
            rx,
            waker: Arc::new(|| {}),
        }
    }

    /// Install the callback used to wake the UI loop. Applies to children
    /// spawned afterwards.
    pub fn set_waker(&mut self, waker: Waker) {
        self.waker = waker;
    }

    /// Start `program` under `key`. Returns as soon as the task is queued;
    /// spawn failures arrive later as an `Error` event.
    pub fn spawn(
        &mut self,
        key: SpawnKey,
        program: &str,
        args: &[String],
    ) -> Result<(), ProcessError> {
        let runtime = self.runtime.as_ref().ok_or(ProcessError::ReactorStopped)?;
        if self.records.contains_key(&key) {
            return Err(ProcessError::DuplicateSpawn(key.id.0));
        }

        let sink = EventSink {
            key,
            tx: self.tx.clone(),
            waker: Arc::clone(&self.waker),
        };
        let kill = spawn::start(
            runtime,
            program.to_string(),
            args.to_vec(),
            self.config.clone(),
            sink,
        );
        self.records.insert(
            key,
            SpawnRecord {
                kill: Some(kill),
                started: false,
            },
        );
        debug!(spawn_id = key.id.0, program, ?args, "spawn queued");
        Ok(())
    }

    /// Take every queued event, releasing records that reached a terminal
    /// event.
    pub fn drain_events(&mut self) -> Vec<ProcessUpdate> {
        let mut updates = Vec::new();
        while let Ok((key, event)) = self.rx.try_recv() {
            let terminal = match (&event, self.records.get_mut(&key)) {
                (ProcessEvent::Started { .. }, Some(record)) => {
                    record.started = true;
                    false
                }
                (ProcessEvent::Error { .. }, Some(record)) => !record.started,
                (ProcessEvent::Exit { .. }, Some(_)) => true,
                _ => false,
            };
            if terminal {
                self.records.remove(&key);
                debug!(spawn_id = key.id.0, "spawn record released");
            }
            updates.push(ProcessUpdate {
                key,
                event,
                terminal,
            });
        }
        updates
    }

    /// Ask a child to terminate. Its end markers and `Exit` still follow.
    /// Returns false for unknown keys.
    pub fn kill(&mut self, key: SpawnKey) -> bool {
        match self.records.get_mut(&key) {
            Some(record) => {
                if let Some(kill) = record.kill.take() {
                    let _ = kill.send(());
                }
                true
            }
            None => false,
        }
    }

    /// Kill every live child.
    pub fn kill_all(&mut self) {
        if !self.records.is_empty() {
            info!(count = self.records.len(), "killing all children");
        }
        let keys: Vec<SpawnKey> = self.records.keys().copied().collect();
        for key in keys {
            self.kill(key);
        }
    }

    /// Kill everything and refuse further spawns.
    pub fn shutdown(&mut self) {
        self.kill_all();
        self.runtime = None;
    }

    pub fn contains(&self, key: SpawnKey) -> bool {
        self.records.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
