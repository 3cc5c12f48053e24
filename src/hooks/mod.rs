//! Small state machines behind interactive widgets: each owns its state,
//! talks to the host through a trait, and is torn down explicitly.

pub mod clipboard;
pub mod resize_observer;

pub use clipboard::{Clipboard, ClipboardError, ClipboardSink, ClipboardStatus};
pub use resize_observer::{ElementId, ObservedSize, ResizeObserver, ResizePlatform, SubscriptionId};
