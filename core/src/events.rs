//! Observation channel between the engine and whoever is watching it.
//!
//! The engine only knows about [`EventSink`]; renderers and loggers subscribe
//! through it and never get a handle back into the search state.

use crate::search::Direction;
use serde::Serialize;
use std::fmt::Debug;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent<N> {
    Started { start: N, goal: N },
    /// A node left its frontier and is about to have its neighbors examined.
    Expanded { direction: Direction, node: N },
    Discovered { direction: Direction, from: N, to: N },
    Meeting { node: N },
    Exhausted,
    PathEdge { from: N, to: N, index: usize },
    PathComplete { length: usize },
}

/// Receives point-in-time notifications. Implementations must return quickly;
/// anything slow belongs behind a channel.
pub trait EventSink<N>: Send {
    fn publish(&mut self, event: &SearchEvent<N>);
}

/// Buffered delivery: events queue up until the receiver drains them.
/// A dropped receiver silently discards further events.
impl<N: Clone + Send> EventSink<N> for UnboundedSender<SearchEvent<N>> {
    fn publish(&mut self, event: &SearchEvent<N>) {
        let _ = self.send(event.clone());
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<N, F> EventSink<N> for FnSink<F>
where
    F: FnMut(&SearchEvent<N>) + Send,
{
    fn publish(&mut self, event: &SearchEvent<N>) {
        (self.0)(event)
    }
}

/// Writes every event to the `tracing` subscriber at debug/trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl<N: Debug> EventSink<N> for TracingSink {
    fn publish(&mut self, event: &SearchEvent<N>) {
        match event {
            SearchEvent::Discovered { direction, from, to } => {
                tracing::trace!(?direction, ?from, ?to, "discovered");
            }
            SearchEvent::Expanded { direction, node } => {
                tracing::trace!(?direction, ?node, "expanded");
            }
            SearchEvent::PathEdge { from, to, index } => {
                tracing::trace!(?from, ?to, index, "path edge");
            }
            SearchEvent::Started { start, goal } => {
                tracing::debug!(?start, ?goal, "search started");
            }
            SearchEvent::Meeting { node } => tracing::debug!(?node, "frontiers met"),
            SearchEvent::Exhausted => tracing::debug!("both frontiers exhausted"),
            SearchEvent::PathComplete { length } => tracing::debug!(length, "path complete"),
        }
    }
}

/// Fans each event out to every subscriber, in subscription order.
pub struct EventBus<N> {
    sinks: Vec<Box<dyn EventSink<N>>>,
}

impl<N> Default for EventBus<N> {
    fn default() -> Self {
        Self { sinks: Vec::new() }
    }
}

impl<N> EventBus<N> {
    pub fn subscribe(&mut self, sink: Box<dyn EventSink<N>>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn publish(&mut self, event: SearchEvent<N>) {
        for sink in &mut self.sinks {
            sink.publish(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn test_bus_delivers_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus: EventBus<u32> = EventBus::default();

        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(Box::new(FnSink(move |_: &SearchEvent<u32>| {
                seen.lock().unwrap().push(tag);
            })));
        }
        bus.publish(SearchEvent::Meeting { node: 3 });

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (tx, rx) = unbounded_channel::<SearchEvent<u32>>();
        let mut bus = EventBus::default();
        bus.subscribe(Box::new(tx));
        drop(rx);

        bus.publish(SearchEvent::Exhausted);
    }

    #[test]
    fn test_event_json_shape() {
        let event = SearchEvent::Discovered {
            direction: Direction::Goal,
            from: 1,
            to: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "discovered", "direction": "goal", "from": 1, "to": 2})
        );
    }
}
