//! `spawn` and `kill`.

use serde_json::Value;
use tracing::{debug, warn};

use hudkit_common::{BridgeError, ProcessError, SpawnId, SpawnKey};
use hudkit_webview::{escape, payload, Replies};

use super::BridgeContext;

fn spawn_key(ctx: &BridgeContext, payload: &Value) -> SpawnKey {
    SpawnKey::new(
        ctx.generation,
        SpawnId(payload::int_field(payload, "id") as u32),
    )
}

/// Payload is `{id, program, args}`. The page already holds `id`; results
/// arrive as process events on its listener.
pub(super) fn spawn(
    ctx: &mut BridgeContext,
    replies: &mut Replies,
    payload: &Value,
) -> Result<(), BridgeError> {
    let key = spawn_key(ctx, payload);
    let program = payload::str_field(payload, "program");
    let args = payload::string_list(payload, "args");

    match ctx.supervisor.spawn(key, &program, &args) {
        Ok(()) => Ok(()),
        Err(e @ ProcessError::DuplicateSpawn(_)) => {
            // The running child keeps its record and its listener entry.
            warn!(spawn_id = key.id.0, "page reused a live spawn id");
            let message = escape::quote(&e.to_string());
            replies.emit_process_event(key.id, "error", &[message.as_str()], false);
            Ok(())
        }
        Err(e) => {
            debug!(spawn_id = key.id.0, error = %e, "spawn refused");
            let message = escape::quote(&e.to_string());
            replies.emit_process_event(key.id, "error", &[message.as_str()], true);
            Ok(())
        }
    }
}

/// Payload is `{id}`. Unknown ids are ignored.
pub(super) fn kill(
    ctx: &mut BridgeContext,
    _replies: &mut Replies,
    payload: &Value,
) -> Result<(), BridgeError> {
    let key = spawn_key(ctx, payload);
    if !ctx.supervisor.kill(key) {
        debug!(spawn_id = key.id.0, "kill for unknown spawn id ignored");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{deliver_process_update, dispatcher, test_support};
    use hudkit_common::{SpawnId, SpawnKey};
    use serde_json::json;
    use std::time::Duration;

    /// Pump process events into `d`'s replies until `key` is released.
    async fn run_until_released(
        d: &mut hudkit_webview::BridgeDispatcher<super::BridgeContext>,
        ctx: &mut super::BridgeContext,
        key: SpawnKey,
    ) -> Vec<String> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        loop {
            for update in ctx.supervisor.drain_events() {
                deliver_process_update(ctx.generation, d.replies_mut(), &update);
            }
            if !ctx.supervisor.contains(key) {
                break;
            }
            assert!(tokio::time::Instant::now() < deadline, "timed out");
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        d.replies_mut().take_scripts()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn echo_streams_to_listener() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        d.dispatch(
            &mut ctx,
            "spawn",
            &json!({"id": 0, "program": "echo", "args": ["hi"]}),
        )
        .unwrap();

        let key = SpawnKey::new(ctx.generation, SpawnId(0));
        let scripts = run_until_released(&mut d, &mut ctx, key).await;

        let joined = scripts.join("\n");
        let start = joined.find("listener('start', ").unwrap();
        let data = joined.find(r"listener('stdoutData', 'hi\n')").unwrap();
        let end = joined.find("listener('stdoutEnd', undefined)").unwrap();
        let exit = joined.find("listener('exit', 0, null)").unwrap();
        assert!(start < data && data < end && end < exit);
        assert!(scripts.last().unwrap().contains("delete window.Hudkit._processListeners[0]"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_program_reports_only_an_error() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        d.dispatch(
            &mut ctx,
            "spawn",
            &json!({"id": 1, "program": "/does/not/exist", "args": []}),
        )
        .unwrap();

        let key = SpawnKey::new(ctx.generation, SpawnId(1));
        let scripts = run_until_released(&mut d, &mut ctx, key).await;
        assert_eq!(scripts.len(), 1, "got {scripts:?}");
        assert!(scripts[0].contains("listener('error', '"));
        assert!(scripts[0].contains("/does/not/exist"));
        assert!(scripts[0].contains("delete window.Hudkit._processListeners[1]"));
        assert!(!scripts[0].contains("'start'"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn kill_ends_a_running_child() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        d.dispatch(
            &mut ctx,
            "spawn",
            &json!({"id": 2, "program": "sleep", "args": ["30"]}),
        )
        .unwrap();
        d.dispatch(&mut ctx, "kill", &json!({"id": 2})).unwrap();

        let key = SpawnKey::new(ctx.generation, SpawnId(2));
        let scripts = run_until_released(&mut d, &mut ctx, key).await;
        assert!(scripts.last().unwrap().contains("listener('exit', "));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn kill_of_unknown_id_is_ignored() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        d.dispatch(&mut ctx, "kill", &json!({"id": 42})).unwrap();
        assert!(d.replies_mut().take_scripts().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn spawn_after_shutdown_reports_error_event() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        ctx.supervisor.shutdown();
        d.dispatch(&mut ctx, "spawn", &json!({"id": 5, "program": "true"}))
            .unwrap();
        let scripts = d.replies_mut().take_scripts();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains("listener('error', 'process reactor is not running')"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn reused_live_id_reports_error_and_keeps_child() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        let spawn = json!({"id": 3, "program": "sleep", "args": ["30"]});
        d.dispatch(&mut ctx, "spawn", &spawn).unwrap();
        d.dispatch(&mut ctx, "spawn", &spawn).unwrap();

        let scripts = d.replies_mut().take_scripts();
        assert_eq!(scripts.len(), 1, "got {scripts:?}");
        assert!(scripts[0].contains("listener('error', 'spawn id 3 is already running')"));
        assert!(!scripts[0].contains("delete"));

        let key = SpawnKey::new(ctx.generation, SpawnId(3));
        assert!(ctx.supervisor.contains(key));
        d.dispatch(&mut ctx, "kill", &json!({"id": 3})).unwrap();
        let scripts = run_until_released(&mut d, &mut ctx, key).await;
        assert!(scripts.iter().any(|s| s.contains("listener('start', ")));
        assert!(scripts.last().unwrap().contains("listener('exit', "));
    }
}
