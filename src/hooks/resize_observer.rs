// src/hooks/resize_observer.rs
//! Tracks the size of one element through the platform's resize notifications.

use thiserror::Error;

/// Opaque identifier of an element on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Handle returned by the platform when a subscription is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObservedSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("resize notifications are not supported")]
    Unsupported,
    #[error("element {0:?} cannot be observed")]
    UnknownElement(ElementId),
}

/// The host's element-resize notification capability.
///
/// Sizes arrive later through [`ResizeObserver::notify`], tagged with the
/// subscription they belong to.
pub trait ResizePlatform {
    fn subscribe(&mut self, element: ElementId) -> Result<SubscriptionId, ObserveError>;
    fn unsubscribe(&mut self, subscription: SubscriptionId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    Unobserved,
    Observing {
        element: ElementId,
        subscription: SubscriptionId,
    },
    Detached,
}

pub struct ResizeObserver<P: ResizePlatform> {
    platform: P,
    state: ObserverState,
    size: Option<ObservedSize>,
}

impl<P: ResizePlatform> ResizeObserver<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: ObserverState::Unobserved,
            size: None,
        }
    }

    /// Starts observing `element`. Re-attaching to the current element keeps
    /// the existing subscription; a different element releases the old one
    /// first. On failure the observer is left unobserved.
    pub fn attach(&mut self, element: ElementId) -> Result<SubscriptionId, ObserveError> {
        if let ObserverState::Observing {
            element: current,
            subscription,
        } = self.state
        {
            if current == element {
                return Ok(subscription);
            }
            self.release();
            self.size = None;
        }

        match self.platform.subscribe(element) {
            Ok(subscription) => {
                self.state = ObserverState::Observing {
                    element,
                    subscription,
                };
                Ok(subscription)
            }
            Err(e) => {
                self.state = ObserverState::Unobserved;
                Err(e)
            }
        }
    }

    /// Delivers a size from the platform. Returns false, and changes nothing,
    /// when `subscription` is not the live one.
    pub fn notify(&mut self, subscription: SubscriptionId, size: ObservedSize) -> bool {
        match self.state {
            ObserverState::Observing {
                subscription: live, ..
            } if live == subscription => {
                self.size = Some(size);
                true
            }
            _ => false,
        }
    }

    /// Releases the subscription. Later notifications are ignored.
    pub fn detach(&mut self) {
        if self.release() {
            self.state = ObserverState::Detached;
        }
    }

    /// Latest size, `None` until the first notification arrives.
    pub fn size(&self) -> Option<ObservedSize> {
        self.size
    }

    pub fn state(&self) -> ObserverState {
        self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn release(&mut self) -> bool {
        match self.state {
            ObserverState::Observing { subscription, .. } => {
                self.platform.unsubscribe(subscription);
                self.state = ObserverState::Unobserved;
                true
            }
            _ => false,
        }
    }
}

impl<P: ResizePlatform> Drop for ResizeObserver<P> {
    fn drop(&mut self) {
        self.detach();
    }
}
