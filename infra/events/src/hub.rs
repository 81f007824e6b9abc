use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Marker trait for types that can be dispatched through the [`EventHub`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// A synchronous, type-safe event hub.
///
/// Manages handler lists indexed by [`TypeId`] of the event. Emission runs
/// every registered handler inline, in subscription order, before returning.
/// Handlers are fire-and-forget: their return value is not consumed and a
/// publisher never learns who listened.
///
/// The handle is internally reference-counted and can be cheaply cloned into
/// every slice that publishes or subscribes.
///
/// # Reentrancy
///
/// Handlers run outside the internal lock, so a handler may `emit` further
/// events. Subscribing from inside a handler is supported too, but the new
/// handler only sees events emitted after the current dispatch completes.
#[derive(Clone, Default)]
pub struct EventHub {
    handlers: Arc<RwLock<FxHashMap<TypeId, Vec<Handler>>>>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.read();
        f.debug_struct("EventHub")
            .field("event_types", &handlers.len())
            .field("handlers", &handlers.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl EventHub {
    /// Creates a new, empty `EventHub`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for events of type `T`.
    ///
    /// Multiple handlers may subscribe to the same event type; each emission
    /// invokes all of them in subscription order.
    ///
    /// # Examples
    /// ```rust
    /// use ohub_events::EventHub;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct DraftUpdated(u64);
    ///
    /// let hub = EventHub::new();
    /// hub.subscribe::<DraftUpdated, _>(|event| assert_eq!(event.0, 7));
    /// hub.emit(&DraftUpdated(7));
    /// ```
    pub fn subscribe<T: Event, F>(&self, handler: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let wrapped: Handler = Arc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<T>() {
                handler(event);
            }
        });

        self.handlers.write().entry(TypeId::of::<T>()).or_default().push(wrapped);
        trace!(event = std::any::type_name::<T>(), "Handler subscribed");
    }

    /// Emits an event to every handler registered for its type.
    ///
    /// Returns the number of handlers invoked. Zero subscribers is not an
    /// error; the event is simply dropped.
    ///
    /// # Examples
    /// ```rust
    /// use ohub_events::EventHub;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Ping;
    ///
    /// let hub = EventHub::new();
    /// assert_eq!(hub.emit(&Ping), 0);
    /// ```
    pub fn emit<T: Event>(&self, event: &T) -> usize {
        let batch: Vec<Handler> = {
            let handlers = self.handlers.read();
            match handlers.get(&TypeId::of::<T>()) {
                Some(list) => list.clone(),
                None => {
                    trace!(
                        event = std::any::type_name::<T>(),
                        "Event dropped: no active subscribers"
                    );
                    return 0;
                },
            }
        };

        for handler in &batch {
            handler(event);
        }

        trace!(event = std::any::type_name::<T>(), count = batch.len(), "Event dispatched");
        batch.len()
    }

    /// Returns the number of handlers currently registered for `T`.
    #[must_use]
    pub fn subscriber_count<T: Event>(&self) -> usize {
        self.handlers.read().get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    /// Drops every registered handler.
    ///
    /// Returns the number of event types that had handlers.
    #[must_use]
    pub fn clear(&self) -> usize {
        let mut handlers = self.handlers.write();
        let count = handlers.len();
        handlers.clear();
        count
    }
}
