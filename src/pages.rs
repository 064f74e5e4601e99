//! Page controller and DOM bindings
//!
//! ## Architecture
//!
//! - **Controller**: one instance per page holding validation, submission and
//!   scroll state
//! - **Views**: traits between the controller and the page, implemented over
//!   the DOM in the browser and in memory for tests
//! - **Mounting**: binds DOM events to the controller (WASM only)

// Re-export all sabor-pages functionality
pub use sabor_pages::*;
