//! Core runtime module.
//!
//! This module provides access to the evaluation runtime, state cells,
//! context slots and view descriptions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use arbor::core::{Runtime, View};
//!
//! let mut runtime = Runtime::new();
//! runtime.evaluate(View::text("hello")).unwrap();
//! ```

pub use arbor_core::*;
