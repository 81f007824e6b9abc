//! # Event Hub
//!
//! A synchronous, type-safe event hub designed for vertical slice
//! architectures with a single-threaded, event-driven core.
//!
//! ## Overview
//!
//! Provides a centralized [`EventHub`] connecting decoupled components: the
//! wizard orchestrator publishes progress notifications, outer collaborators
//! (a dashboard shell, a live mirror of in-progress state) subscribe without
//! the publisher knowing about them.
//!
//! ## Features
//!
//! * **Type-Safe**: Events are identified by their Rust type.
//! * **Synchronous**: Handlers run inline on `emit`; nothing suspends,
//!   queues, or outlives the call.
//! * **Fire-and-Forget**: Handler return values are not consumed; `emit`
//!   only reports how many handlers ran.
//! * **Lightweight**: `FxHashMap` + `parking_lot::RwLock`.
//!
//! # Example
//!
//! ```rust
//! use ohub_events::EventHub;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct StepAdvanced { index: usize }
//!
//! let hub = EventHub::new();
//! let seen = Arc::new(AtomicU32::new(0));
//!
//! let mirror = seen.clone();
//! hub.subscribe::<StepAdvanced, _>(move |event| {
//!     assert_eq!(event.index, 1);
//!     mirror.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! assert_eq!(hub.emit(&StepAdvanced { index: 1 }), 1);
//! assert_eq!(seen.load(Ordering::Relaxed), 1);
//! ```

mod hub;

pub use hub::{Event, EventHub};
