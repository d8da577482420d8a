//! Core systems for Horizon Press.
//!
//! This crate provides the pieces shared by the document model, the
//! model/view layer and the scripting bridge:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: `tracing` targets and span names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_press_core::Signal;
//!
//! // Create a signal that notifies when a row is inserted
//! let row_inserted = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = row_inserted.connect(|row| {
//!     println!("Row inserted at: {}", row);
//! });
//!
//! // Emit the signal
//! row_inserted.emit(3);
//!
//! // Disconnect when done
//! row_inserted.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
