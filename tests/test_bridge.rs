//! Tests for the host-call bridging contract.
//!
//! These tests verify that every guest-visible method produces exactly one
//! bridge invocation with the documented command and argument, that call
//! order is preserved, and that host failures propagate unchanged.

extern crate webenv;

use std::cell::RefCell;
use std::rc::Rc;

use webenv::bridge::{HostBridge, HostCommand, HostError};
use webenv::env::{EnvConfig, EnvError, GuestContext, GuestNumber, GuestValue};

/// Shared log of every bridge invocation, in call order.
type CallLog = Rc<RefCell<Vec<(HostCommand, Option<GuestValue>)>>>;

/// Host double that records every invocation and returns Undefined.
struct RecordingHost {
    calls: CallLog,
}

impl RecordingHost {
    fn new() -> (Self, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        (
            RecordingHost {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl HostBridge for RecordingHost {
    fn invoke(
        &mut self,
        command: HostCommand,
        argument: Option<GuestValue>,
    ) -> Result<GuestValue, HostError> {
        self.calls.borrow_mut().push((command, argument));
        Ok(GuestValue::Undefined)
    }

    fn name(&self) -> &str {
        "recording_host"
    }
}

/// Host double that fails every invocation.
struct FailingHost;

impl HostBridge for FailingHost {
    fn invoke(
        &mut self,
        command: HostCommand,
        _argument: Option<GuestValue>,
    ) -> Result<GuestValue, HostError> {
        Err(HostError::CommandFailed(command, "host refused".to_string()))
    }

    fn name(&self) -> &str {
        "failing_host"
    }
}

/// Host double that returns a fixed value for every invocation.
struct ReplyingHost(GuestValue);

impl HostBridge for ReplyingHost {
    fn invoke(
        &mut self,
        _command: HostCommand,
        _argument: Option<GuestValue>,
    ) -> Result<GuestValue, HostError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "replying_host"
    }
}

fn recording_context() -> (GuestContext, CallLog) {
    let (host, calls) = RecordingHost::new();
    (GuestContext::new(Box::new(host)), calls)
}

// ============================================================================
// Command table tests — one invocation per row, documented command + argument
// ============================================================================

mod command_table_tests {
    use super::*;

    #[test]
    fn test_console_log_forwards_argument() {
        let (mut ctx, calls) = recording_context();
        ctx.call("console", "log", vec![GuestValue::String("hi".to_string())])
            .unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(
                HostCommand::Log,
                Some(GuestValue::String("hi".to_string()))
            )]
        );
    }

    #[test]
    fn test_history_print() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "print", vec![]).unwrap();
        assert_eq!(*calls.borrow(), vec![(HostCommand::PrintHistory, None)]);
    }

    #[test]
    fn test_history_clear() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "clear", vec![]).unwrap();
        assert_eq!(*calls.borrow(), vec![(HostCommand::ClearHistory, None)]);
    }

    #[test]
    fn test_history_next() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "next", vec![]).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(HostCommand::GetNextHistoryUrl, None)]
        );
    }

    #[test]
    fn test_history_prev() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "prev", vec![]).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(HostCommand::GetPrevHistoryUrl, None)]
        );
    }

    #[test]
    fn test_document_tree() {
        let (mut ctx, calls) = recording_context();
        ctx.call("document", "tree", vec![]).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(HostCommand::PrintDocumentTree, None)]
        );
    }

    #[test]
    fn test_argument_is_identity_preserved() {
        // The value crosses the bridge exactly as the guest passed it.
        let (mut ctx, calls) = recording_context();
        let arg = GuestValue::Number(GuestNumber::Float(3.25));
        ctx.call("console", "log", vec![arg.clone()]).unwrap();
        assert_eq!(*calls.borrow(), vec![(HostCommand::Log, Some(arg))]);
    }

    #[test]
    fn test_log_without_argument_forwards_undefined() {
        let (mut ctx, calls) = recording_context();
        ctx.call("console", "log", vec![]).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![(HostCommand::Log, Some(GuestValue::Undefined))]
        );
    }
}

// ============================================================================
// Alias transparency — alias and window-qualified routes dispatch identically
// ============================================================================

mod alias_tests {
    use super::*;

    #[test]
    fn test_qualified_and_alias_log_are_identical() {
        let (mut ctx, calls) = recording_context();
        ctx.call("console", "log", vec![GuestValue::Boolean(true)])
            .unwrap();
        ctx.call_qualified("console", "log", vec![GuestValue::Boolean(true)])
            .unwrap();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_qualified_and_alias_history_are_identical() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "next", vec![]).unwrap();
        ctx.call_qualified("history", "next", vec![]).unwrap();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_qualified_and_alias_document_are_identical() {
        let (mut ctx, calls) = recording_context();
        ctx.call("document", "tree", vec![]).unwrap();
        ctx.call_qualified("document", "tree", vec![]).unwrap();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}

// ============================================================================
// Arity policy — both host readings of surplus arguments
// ============================================================================

mod arity_tests {
    use super::*;

    #[test]
    fn test_lenient_ignores_extra_arguments() {
        let (mut ctx, calls) = recording_context();
        ctx.call(
            "history",
            "clear",
            vec![GuestValue::Null, GuestValue::Boolean(false)],
        )
        .unwrap();
        assert_eq!(*calls.borrow(), vec![(HostCommand::ClearHistory, None)]);
    }

    #[test]
    fn test_strict_rejects_extra_arguments() {
        let config = EnvConfig::parse("strict_arity = true").unwrap();
        let (host, calls) = RecordingHost::new();
        let mut ctx = GuestContext::with_config(config, Box::new(host));

        let result = ctx.call("history", "clear", vec![GuestValue::Null]);
        match result {
            Err(EnvError::TypeError(_)) => {}
            other => panic!("expected TypeError, got {:?}", other),
        }
        // The bridge was never reached.
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_strict_rejects_second_argument_to_log() {
        let config = EnvConfig::parse("strict_arity = true").unwrap();
        let (host, _calls) = RecordingHost::new();
        let mut ctx = GuestContext::with_config(config, Box::new(host));

        let result = ctx.call(
            "console",
            "log",
            vec![GuestValue::Null, GuestValue::Null],
        );
        assert!(matches!(result, Err(EnvError::TypeError(_))));
    }

    #[test]
    fn test_strict_allows_exact_arity() {
        let config = EnvConfig::parse("strict_arity = true").unwrap();
        let (host, calls) = RecordingHost::new();
        let mut ctx = GuestContext::with_config(config, Box::new(host));

        ctx.call("console", "log", vec![GuestValue::Null]).unwrap();
        ctx.call("history", "print", vec![]).unwrap();
        assert_eq!(calls.borrow().len(), 2);
    }
}

// ============================================================================
// Ordering and independence
// ============================================================================

mod ordering_tests {
    use super::*;

    #[test]
    fn test_consecutive_calls_in_order() {
        let (mut ctx, calls) = recording_context();
        ctx.call("history", "next", vec![]).unwrap();
        ctx.call("history", "prev", vec![]).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![
                (HostCommand::GetNextHistoryUrl, None),
                (HostCommand::GetPrevHistoryUrl, None),
            ]
        );
    }

    #[test]
    fn test_one_call_one_invocation() {
        let (mut ctx, calls) = recording_context();
        for _ in 0..5 {
            ctx.call("history", "print", vec![]).unwrap();
        }
        assert_eq!(calls.borrow().len(), 5);
    }
}

// ============================================================================
// Result and failure passthrough
// ============================================================================

mod passthrough_tests {
    use super::*;

    #[test]
    fn test_host_return_value_surfaces_to_guest() {
        let url = GuestValue::String("https://example.com/next".to_string());
        let mut ctx = GuestContext::new(Box::new(ReplyingHost(url.clone())));
        let result = ctx.call("history", "next", vec![]).unwrap();
        assert_eq!(result, url);
    }

    #[test]
    fn test_host_failure_propagates_unchanged() {
        let mut ctx = GuestContext::new(Box::new(FailingHost));
        let result = ctx.call("history", "clear", vec![]);
        assert_eq!(
            result,
            Err(EnvError::Host(HostError::CommandFailed(
                HostCommand::ClearHistory,
                "host refused".to_string()
            )))
        );
    }

    #[test]
    fn test_failure_does_not_affect_later_calls() {
        // The shim keeps no state; a failed call leaves no residue.
        let mut ctx = GuestContext::new(Box::new(FailingHost));
        assert!(ctx.call("history", "next", vec![]).is_err());

        let mut ctx = GuestContext::new(Box::new(ReplyingHost(GuestValue::Null)));
        assert_eq!(
            ctx.call("history", "next", vec![]).unwrap(),
            GuestValue::Null
        );
    }
}
