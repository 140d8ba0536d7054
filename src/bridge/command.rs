//! The closed command set of the host-call bridging contract.
//!
//! Every guest-visible method maps to exactly one `HostCommand`. The host
//! routes on the command's wire name, a short stable string identifier.

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// How many arguments a command carries across the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandArity {
    /// No argument is passed to the host.
    Nullary,
    /// The caller's single argument is passed to the host.
    Unary,
}

/// A command understood by the embedding host.
///
/// The set is closed by design: guest code cannot invent commands, and the
/// wire names never change once a host has shipped against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// `console.log(x)` — log a value through the host.
    Log,
    /// `history.print()` — print the navigation history.
    PrintHistory,
    /// `history.clear()` — clear the navigation history.
    ClearHistory,
    /// `history.next()` — fetch the next history URL.
    GetNextHistoryUrl,
    /// `history.prev()` — fetch the previous history URL.
    GetPrevHistoryUrl,
    /// `document.tree()` — print the document tree.
    PrintDocumentTree,
}

impl HostCommand {
    /// Every command, in table order.
    pub const ALL: [HostCommand; 6] = [
        HostCommand::Log,
        HostCommand::PrintHistory,
        HostCommand::ClearHistory,
        HostCommand::GetNextHistoryUrl,
        HostCommand::GetPrevHistoryUrl,
        HostCommand::PrintDocumentTree,
    ];

    /// The stable string identifier transmitted to the host.
    pub fn wire_name(self) -> &'static str {
        match self {
            HostCommand::Log => "log",
            HostCommand::PrintHistory => "print_history",
            HostCommand::ClearHistory => "clear_history",
            HostCommand::GetNextHistoryUrl => "get_next_history_url",
            HostCommand::GetPrevHistoryUrl => "get_prev_history_url",
            HostCommand::PrintDocumentTree => "print_document_tree",
        }
    }

    /// How many arguments this command forwards.
    pub fn arity(self) -> CommandArity {
        match self {
            HostCommand::Log => CommandArity::Unary,
            _ => CommandArity::Nullary,
        }
    }

    /// Reverse lookup from a wire name, for hosts that route on strings.
    pub fn from_wire_name(name: &str) -> Option<HostCommand> {
        WIRE_NAMES.get(name).copied()
    }
}

impl Display for HostCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

lazy_static! {
    static ref WIRE_NAMES: HashMap<&'static str, HostCommand> = {
        let mut names = HashMap::new();
        for &command in HostCommand::ALL.iter() {
            names.insert(command.wire_name(), command);
        }
        names
    };
}
