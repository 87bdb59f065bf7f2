//! # Arbor
//!
//! A small reactive view-composition framework.
//!
//! Components are functions from explicit parameters, context values and
//! their own state to a view tree. Writing to a state cell schedules the
//! owning component and its subtree for re-evaluation; context slots hand
//! values to whole subtrees without threading them through every component;
//! the router maps a location to one view and re-evaluates it on navigation.
//!
//! ## Feature Flags
//!
//! - `router` (default) - Client-side routing ([`router`])
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use arbor::prelude::*;
//!
//! let app = View::component("Counter", |cx| {
//!     let count = cx.use_state(|| 0)?;
//!     let inc = count.clone();
//!     Ok(View::element("button")
//!         .attr("id", "inc")
//!         .on("click", move || inc.update(|n| n + 1))
//!         .child(format!("Current Count: {}", count.read()))
//!         .into_view())
//! });
//!
//! let mut runtime = Runtime::new();
//! runtime.evaluate(app)?;
//! runtime.dispatch("inc", "click")?;
//! runtime.run_until_idle()?;
//! assert_eq!(runtime.render_to_string()?, "<button id=\"inc\">Current Count: 1</button>");
//! ```

pub mod core;
#[cfg(feature = "router")]
pub mod router;

pub use arbor_core::{
	Component, ContextSlot, IntoView, Result, Runtime, RuntimeConfig, Scope, StateCell, Tree, View,
	ViewError,
};

#[cfg(feature = "router")]
pub use arbor_router::{Link, Router, RouterError, RouterOutlet};

/// Commonly used items.
pub mod prelude {
	pub use arbor_core::{
		Component, ContextSlot, ElementView, IntoView, Invalidator, NodeId, Result, Runtime, Scope,
		StateCell, View, ViewError,
	};

	#[cfg(feature = "router")]
	pub use arbor_router::{Link, MemoryHistory, ROUTE_PARAMS, Router, RouterOutlet};
}
