//! Synchronous fan-out of engine events to presentation layers.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::types::{Board, Symbol};

/// State change announced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GameEvent {
    /// A move was accepted and evaluated.
    MoveMade {
        /// Cell that was marked.
        cell: usize,
        /// Symbol placed there.
        symbol: Symbol,
        /// Board after the move.
        board: Board,
    },
}

impl GameEvent {
    /// Short event name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveMade { .. } => "move_made",
        }
    }

    /// Board snapshot carried by the event.
    pub fn board(&self) -> &Board {
        match self {
            Self::MoveMade { board, .. } => board,
        }
    }
}

/// Subscriber to engine events.
///
/// Called synchronously, in subscription order, before the triggering
/// engine call returns.
pub trait Observer {
    /// Receives one event.
    fn update(&mut self, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent),
{
    fn update(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Ordered list of observers.
///
/// The same observer type may be subscribed several times; each
/// subscription fires on its own. A panicking observer is not caught.
#[derive(Default)]
pub struct ObserverBus {
    observers: Vec<Box<dyn Observer>>,
}

impl ObserverBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Delivers `event` to every observer in subscription order.
    #[instrument(skip(self, event), fields(kind = event.name(), observers = self.observers.len()))]
    pub fn notify(&mut self, event: &GameEvent) {
        for (position, observer) in self.observers.iter_mut().enumerate() {
            trace!(position, "Notifying observer");
            observer.update(event);
        }
    }

    /// Number of subscriptions.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}
