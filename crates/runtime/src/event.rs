//! Inbound notifications and outbound commands.
//!
//! There is no global event bus: hosts push [`Notification`]s into the
//! controller, and the controller emits [`Command`]s into an injected
//! [`CommandSink`]. The channel is fire-and-forget; emitting never waits for
//! an acknowledgement.

use smol_str::SmolStr;

use crate::core::FilterValue;

/// An inbound notification consumed by the menu core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The locale changed; every locale-derived title must be recomputed.
    SetLocale,
    /// Move the selection to the next node in document order.
    SelectNextMenuItem,
    /// Move the selection to the previous node in document order.
    SelectPreviousMenuItem,
}

/// An outbound command emitted by the menu core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a filter criterion: one key with a dynamic name.
    ///
    /// `value` is `None` for criteria that carry no value, e.g. the
    /// "all items" wildcard.
    SetFilter {
        /// Name of the filter criterion.
        key: SmolStr,
        /// Value of the filter criterion, if any.
        value: Option<FilterValue>,
    },

    /// Navigate to a settings page.
    SetPage {
        /// Identifier of the page.
        page: SmolStr,
        /// File argument of the page, if any.
        file: Option<SmolStr>,
    },
}

/// Receiver for the commands a controller emits.
///
/// Exactly one command is emitted per successful selection.
pub trait CommandSink {
    /// Delivers a command to the host application.
    fn emit(&mut self, command: Command);
}

impl<F> CommandSink for F
where
    F: FnMut(Command),
{
    fn emit(&mut self, command: Command) {
        self(command);
    }
}

/// Recording sink, mainly useful in tests.
impl CommandSink for Vec<Command> {
    fn emit(&mut self, command: Command) {
        self.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut seen = 0;
        {
            let mut sink = |_: Command| seen += 1;
            sink.emit(Command::SetFilter {
                key: "trash".into(),
                value: Some(FilterValue::Flag(true)),
            });
        }
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<Command> = Vec::new();
        sink.emit(Command::SetPage {
            page: "about".into(),
            file: None,
        });
        sink.emit(Command::SetFilter {
            key: "*".into(),
            value: None,
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], Command::SetPage { .. }));
    }
}
