//! Client-side routing module.
//!
//! This module provides the router, its path patterns and history, and the
//! `Link` and `RouterOutlet` components.
//!
//! # Examples
//!
//! ```rust,no_run
//! use arbor::core::View;
//! use arbor::router::Router;
//!
//! let router = Router::new()
//!     .named_route("home", "/", || View::text("Home"))
//!     .not_found(|| View::text("Not Found"));
//! assert!(router.has_route("home"));
//! ```

pub use arbor_router::*;
