//! Logging facilities for Horizon Press.
//!
//! Horizon Press uses the `tracing` crate for instrumentation. To see logs,
//! you need to install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Use the constants in [`targets`] with `tracing` directives to filter by
//! subsystem, for example `RUST_LOG=horizon_press::model=debug`.

/// Span names used throughout Horizon Press for tracing.
pub mod span_names {
    /// Structural model change span (reset, insert, remove).
    pub const MODEL_CHANGE: &str = "horizon_press::model_change";
    /// Script accessor invocation span.
    pub const SCRIPT_CALL: &str = "horizon_press::script_call";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_press_core::signal";
    /// Document model target.
    pub const DOCUMENT: &str = "horizon_press::document";
    /// Model/view layer target.
    pub const MODEL: &str = "horizon_press::model";
    /// Scripting bridge target.
    pub const SCRIPT: &str = "horizon_press_script";
}
