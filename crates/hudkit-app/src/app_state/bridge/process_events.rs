//! Process events to guest listener calls.

use tracing::debug;

use hudkit_common::Generation;
use hudkit_process::{ProcessEvent, ProcessUpdate};
use hudkit_webview::{escape, Replies};

/// Arguments passed to the guest listener after the event name.
///
/// `exit` gets the status code (`null` when killed by a signal) followed by
/// the signal number (`null` when it exited normally).
pub(crate) fn event_args(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started { pid } => vec![pid.to_string()],
        ProcessEvent::Error { message } => vec![escape::quote(message)],
        ProcessEvent::Stdout(bytes) | ProcessEvent::Stderr(bytes) => {
            vec![escape::quote_bytes(bytes)]
        }
        ProcessEvent::StdoutEnd | ProcessEvent::StderrEnd => Vec::new(),
        ProcessEvent::Exit { code, signal } => vec![js_opt(*code), js_opt(*signal)],
    }
}

fn js_opt(value: Option<i32>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Queue the listener call for one update. Updates from an earlier page are
/// dropped. Returns whether anything was queued.
pub(in crate::app_state) fn deliver_process_update(
    current: Generation,
    replies: &mut Replies,
    update: &ProcessUpdate,
) -> bool {
    if update.key.generation != current {
        debug!(
            spawn = %update.key,
            event = update.event.name(),
            "dropping event from previous page"
        );
        return false;
    }
    let args = event_args(&update.event);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    replies.emit_process_event(update.key.id, update.event.name(), &args, update.terminal);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudkit_common::{SpawnId, SpawnKey};

    fn update(generation: u32, event: ProcessEvent, terminal: bool) -> ProcessUpdate {
        ProcessUpdate {
            key: SpawnKey::new(Generation(generation), SpawnId(7)),
            event,
            terminal,
        }
    }

    #[test]
    fn listener_arguments() {
        assert_eq!(event_args(&ProcessEvent::Started { pid: 1234 }), vec!["1234"]);
        assert_eq!(
            event_args(&ProcessEvent::Error {
                message: "can't".into()
            }),
            vec![r"'can\'t'"]
        );
        assert_eq!(
            event_args(&ProcessEvent::Stdout(b"a\"b\n\xff".to_vec())),
            vec![r#"'a\"b\n\xff'"#]
        );
        assert!(event_args(&ProcessEvent::StderrEnd).is_empty());
        assert_eq!(
            event_args(&ProcessEvent::Exit {
                code: Some(0),
                signal: None
            }),
            vec!["0", "null"]
        );
        assert_eq!(
            event_args(&ProcessEvent::Exit {
                code: None,
                signal: Some(9)
            }),
            vec!["null", "9"]
        );
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut replies = Replies::new();
        assert!(!deliver_process_update(
            Generation(2),
            &mut replies,
            &update(1, ProcessEvent::StdoutEnd, false)
        ));
        assert!(replies.take_scripts().is_empty());
    }

    #[test]
    fn terminal_update_removes_listener() {
        let mut replies = Replies::new();
        assert!(deliver_process_update(
            Generation(1),
            &mut replies,
            &update(
                1,
                ProcessEvent::Exit {
                    code: Some(0),
                    signal: None
                },
                true
            )
        ));
        let scripts = replies.take_scripts();
        assert!(scripts[0].contains("listener('exit', 0, null)"));
        assert!(scripts[0].contains("delete window.Hudkit._processListeners[7]"));
    }
}
