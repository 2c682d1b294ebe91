//! Drag-and-drop protocol.
//!
//! Models the small slice of the browser drag API the board relies on: a
//! [`DataTransfer`] carrying typed payloads, a [`DragEvent`] whose default
//! action can be prevented, and the two roles a view can play
//! ([`Draggable`] sources and [`DragTarget`] columns).
//!
//! A drop is only delivered to a target whose `dragover` handler prevented
//! the default action. [`perform_drag`] runs one full gesture.

use tracing::debug;

/// Payload format used for project ids.
pub const PLAIN_TEXT: &str = "text/plain";

/// Operations a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Typed payloads attached to a drag operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload for `format`, replacing an existing entry in place.
    pub fn set_data(&mut self, format: &str, data: &str) {
        match self.items.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data.to_string(),
            None => self.items.push((format.to_string(), data.to_string())),
        }
    }

    /// Payload for `format`, or an empty string when absent.
    pub fn get_data(&self, format: &str) -> &str {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.as_str())
            .unwrap_or("")
    }

    /// Formats in the order they were first set.
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(f, _)| f.as_str()).collect()
    }

    pub fn clear_data(&mut self) {
        self.items.clear();
    }
}

/// A drag event as seen by a handler.
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    /// An event carrying an empty data transfer.
    pub fn new() -> Self {
        Self {
            data_transfer: Some(DataTransfer::new()),
            default_prevented: false,
        }
    }

    /// An event carrying the given data transfer.
    pub fn with_data(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// True when the first payload type is plain text.
    pub fn carries_plain_text(&self) -> bool {
        self.data_transfer
            .as_ref()
            .and_then(|dt| dt.types().first().copied())
            == Some(PLAIN_TEXT)
    }
}

/// A view that can be picked up.
pub trait Draggable {
    fn drag_start_handler(&self, event: &mut DragEvent);
    fn drag_end_handler(&self, event: &DragEvent);
}

/// A view that accepts drops.
pub trait DragTarget {
    fn drag_over_handler(&self, event: &mut DragEvent);
    fn drop_handler(&self, event: &DragEvent);
    fn drag_leave_handler(&self, event: &DragEvent);
}

/// Result of a full drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target accepted the drag and received the drop.
    Dropped,
    /// The target did not accept the drag; nothing was dropped.
    Rejected,
}

/// Run one drag gesture from `source` onto `target`.
///
/// Fires `dragstart` on the source, `dragover` on the target, then `drop`
/// if the target prevented the default action (or `dragleave` if it did
/// not), and finally `dragend` on the source.
pub fn perform_drag(source: &dyn Draggable, target: &dyn DragTarget) -> DropOutcome {
    let mut start = DragEvent::new();
    source.drag_start_handler(&mut start);
    let payload = start.data_transfer.unwrap_or_default();

    let mut over = DragEvent::with_data(payload.clone());
    target.drag_over_handler(&mut over);

    let outcome = if over.default_prevented() {
        target.drop_handler(&DragEvent::with_data(payload.clone()));
        DropOutcome::Dropped
    } else {
        target.drag_leave_handler(&DragEvent::with_data(payload.clone()));
        DropOutcome::Rejected
    };

    source.drag_end_handler(&DragEvent::with_data(payload));
    debug!(?outcome, "Drag gesture finished");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_data_transfer_set_and_get() {
        let mut dt = DataTransfer::new();
        dt.set_data(PLAIN_TEXT, "abc");
        dt.set_data("text/uri-list", "http://example.com");
        dt.set_data(PLAIN_TEXT, "def");

        assert_eq!(dt.get_data(PLAIN_TEXT), "def");
        assert_eq!(dt.types(), vec![PLAIN_TEXT, "text/uri-list"]);
        assert_eq!(dt.get_data("application/json"), "");

        dt.clear_data();
        assert!(dt.types().is_empty());
    }

    #[test]
    fn test_carries_plain_text_checks_first_type() {
        let mut dt = DataTransfer::new();
        dt.set_data("text/html", "<b>x</b>");
        dt.set_data(PLAIN_TEXT, "x");
        assert!(!DragEvent::with_data(dt).carries_plain_text());

        let mut dt = DataTransfer::new();
        dt.set_data(PLAIN_TEXT, "x");
        assert!(DragEvent::with_data(dt).carries_plain_text());

        let bare = DragEvent {
            data_transfer: None,
            ..Default::default()
        };
        assert!(!bare.carries_plain_text());
    }

    struct Source(&'static str);

    impl Draggable for Source {
        fn drag_start_handler(&self, event: &mut DragEvent) {
            if let Some(dt) = event.data_transfer.as_mut() {
                dt.set_data(PLAIN_TEXT, self.0);
                dt.effect_allowed = DropEffect::Move;
            }
        }

        fn drag_end_handler(&self, _event: &DragEvent) {}
    }

    #[derive(Default)]
    struct Target {
        accept: bool,
        log: RefCell<Vec<String>>,
    }

    impl DragTarget for Target {
        fn drag_over_handler(&self, event: &mut DragEvent) {
            self.log.borrow_mut().push("over".into());
            if self.accept {
                event.prevent_default();
            }
        }

        fn drop_handler(&self, event: &DragEvent) {
            let id = event
                .data_transfer
                .as_ref()
                .map(|dt| dt.get_data(PLAIN_TEXT).to_string())
                .unwrap_or_default();
            self.log.borrow_mut().push(format!("drop:{id}"));
        }

        fn drag_leave_handler(&self, _event: &DragEvent) {
            self.log.borrow_mut().push("leave".into());
        }
    }

    #[test]
    fn test_perform_drag_delivers_payload() {
        let target = Target {
            accept: true,
            ..Default::default()
        };

        let outcome = perform_drag(&Source("p-1"), &target);

        assert_eq!(outcome, DropOutcome::Dropped);
        assert_eq!(*target.log.borrow(), vec!["over", "drop:p-1"]);
    }

    #[test]
    fn test_perform_drag_rejected_without_prevent_default() {
        let target = Target::default();

        let outcome = perform_drag(&Source("p-1"), &target);

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(*target.log.borrow(), vec!["over", "leave"]);
    }
}
