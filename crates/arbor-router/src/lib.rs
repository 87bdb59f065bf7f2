//! Arbor Router - client-side routing
//!
//! Maps the current location to one view and re-evaluates it whenever the
//! location changes.
//!
//! ## Architecture
//!
//! - [`pattern`]: path patterns with `{name}` parameters
//! - [`history`]: the [`LocationSource`] boundary and an in-memory history
//! - [`core`](mod@self::core): the route table and navigation
//! - [`components`]: [`RouterOutlet`] and [`Link`]
//!
//! ## Example
//!
//! ```ignore
//! use arbor_core::{Runtime, View};
//! use arbor_router::{Link, Router, RouterOutlet};
//! use std::rc::Rc;
//!
//! let router = Rc::new(
//!     Router::new()
//!         .named_route("home", "/", || View::text("Home"))
//!         .named_route("about", "/about", || View::text("About")),
//! );
//!
//! let mut runtime = Runtime::new();
//! runtime.evaluate(Router::provide(&router, [
//!     View::from_component(Link::new("/about", "About").id("to-about")),
//!     View::from_component(RouterOutlet::new()),
//! ]))?;
//!
//! runtime.dispatch("to-about", "click")?;
//! runtime.run_until_idle()?;
//! assert!(runtime.render_to_string()?.contains("About"));
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod core;
pub mod error;
pub mod history;
pub mod pattern;

pub use components::{Link, RouterOutlet};
pub use self::core::{ROUTE_PARAMS, ROUTER, Route, RouteMatch, Router};
pub use error::{Result, RouterError};
pub use history::{HistoryState, LocationListener, LocationSource, MemoryHistory, NavigationType};
pub use pattern::{PathPattern, RouteParams};
