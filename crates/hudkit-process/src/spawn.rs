//! Per-child task: spawn, pump both output streams, wait, report.

use std::process::Stdio;
use std::sync::mpsc;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use hudkit_common::{ProcessError, SpawnKey};

use super::supervisor::Waker;
use super::types::{ProcessEvent, SupervisorConfig};

// =============================================================================
// EVENT SINK
// =============================================================================

/// Sending half used by one child task. Every send nudges the UI loop.
#[derive(Clone)]
pub(crate) struct EventSink {
    pub(crate) key: SpawnKey,
    pub(crate) tx: mpsc::Sender<(SpawnKey, ProcessEvent)>,
    pub(crate) waker: Waker,
}

impl EventSink {
    fn send(&self, event: ProcessEvent) {
        if self.tx.send((self.key, event)).is_ok() {
            (self.waker)();
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }

    fn data(self, bytes: Vec<u8>) -> ProcessEvent {
        match self {
            Self::Stdout => ProcessEvent::Stdout(bytes),
            Self::Stderr => ProcessEvent::Stderr(bytes),
        }
    }

    fn end(self) -> ProcessEvent {
        match self {
            Self::Stdout => ProcessEvent::StdoutEnd,
            Self::Stderr => ProcessEvent::StderrEnd,
        }
    }
}

// =============================================================================
// SPAWN
// =============================================================================

/// Start a child task on `runtime`. Dropping the returned sender leaves the
/// child running; sending on it kills the child.
pub(crate) fn start(
    runtime: &Handle,
    program: String,
    args: Vec<String>,
    config: SupervisorConfig,
    sink: EventSink,
) -> oneshot::Sender<()> {
    let (kill_tx, kill_rx) = oneshot::channel();
    runtime.spawn(run_child(program, args, config, sink, kill_rx));
    kill_tx
}

async fn run_child(
    program: String,
    args: Vec<String>,
    config: SupervisorConfig,
    sink: EventSink,
    mut kill_rx: oneshot::Receiver<()>,
) {
    let spawn_id = sink.key.id.0;

    let mut child = match Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(source) => {
            let err = ProcessError::Spawn { program, source };
            debug!(spawn_id, error = %err, "spawn failed");
            sink.send(ProcessEvent::Error {
                message: err.to_string(),
            });
            return;
        }
    };

    let pid = child.id().unwrap_or_default();
    debug!(spawn_id, pid, program = %program, "child started");
    sink.send(ProcessEvent::Started { pid });

    let chunk = config.read_chunk_bytes.max(1);
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let streams = async {
        tokio::join!(
            pump(stdout, Stream::Stdout, chunk, &sink, true),
            pump(stderr, Stream::Stderr, chunk, &sink, config.forward_stderr),
        )
    };
    tokio::pin!(streams);

    let mut kill_requested = false;
    loop {
        tokio::select! {
            _ = &mut streams => break,
            res = &mut kill_rx, if !kill_requested => {
                kill_requested = true;
                if res.is_ok() {
                    request_kill(&mut child, spawn_id);
                }
            }
        }
    }

    let status = loop {
        tokio::select! {
            status = child.wait() => break status,
            res = &mut kill_rx, if !kill_requested => {
                kill_requested = true;
                if res.is_ok() {
                    request_kill(&mut child, spawn_id);
                }
            }
        }
    };

    let (code, signal) = match status {
        Ok(status) => (status.code(), exit_signal(&status)),
        Err(e) => {
            warn!(spawn_id, error = %e, "failed to reap child");
            (None, None)
        }
    };
    debug!(spawn_id, ?code, ?signal, "child exited");
    sink.send(ProcessEvent::Exit { code, signal });
}

fn request_kill(child: &mut tokio::process::Child, spawn_id: u32) {
    debug!(spawn_id, "kill requested");
    if let Err(e) = child.start_kill() {
        debug!(spawn_id, error = %e, "kill failed, child already gone");
    }
}

/// Read `reader` to EOF in chunks of at most `chunk` bytes.
///
/// When `forward` is false the data is logged instead of sent, and no end
/// marker is emitted.
async fn pump<R>(reader: Option<R>, stream: Stream, chunk: usize, sink: &EventSink, forward: bool)
where
    R: AsyncRead + Unpin,
{
    let spawn_id = sink.key.id.0;
    let Some(mut reader) = reader else {
        if forward {
            sink.send(stream.end());
        }
        return;
    };

    let mut buf = vec![0u8; chunk];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) if forward => sink.send(stream.data(buf[..n].to_vec())),
            Ok(n) => debug!(
                spawn_id,
                stream = stream.name(),
                data = %String::from_utf8_lossy(&buf[..n]),
                "child output (not forwarded)"
            ),
            Err(source) => {
                let err = ProcessError::Stream {
                    stream: stream.name(),
                    source,
                };
                if forward {
                    sink.send(ProcessEvent::Error {
                        message: err.to_string(),
                    });
                } else {
                    warn!(spawn_id, error = %err, "stream read failed");
                }
                break;
            }
        }
    }

    if forward {
        sink.send(stream.end());
    }
}

#[cfg(unix)]
fn exit_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}
