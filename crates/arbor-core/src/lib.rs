//! Arbor Core - reactive view composition
//!
//! Views are trees of elements, text and components. Components keep local
//! state in cells that survive re-evaluation, and read tree-scoped context
//! bindings without having them passed through every intermediate component.
//!
//! ## Architecture
//!
//! - [`view`]: view vocabulary ([`View`], [`ElementView`], [`IntoView`], [`Component`])
//! - [`state`]: state cells with batched, ordered writes
//! - [`context`]: typed context slots and providers
//! - [`scope`]: what a component sees while it is evaluated
//! - [`runtime`]: evaluation passes and subtree re-evaluation
//! - [`tree`]: evaluated output and HTML rendering
//!
//! ## Example
//!
//! ```ignore
//! use arbor_core::{IntoView, Runtime, View};
//!
//! fn counter() -> View {
//!     View::component("Counter", |cx| {
//!         let count = cx.use_state(|| 0)?;
//!         let inc = count.clone();
//!         Ok(View::element("div")
//!             .child(View::element("p").child(format!("Current Count: {}", count.read())))
//!             .child(View::element("button").attr("id", "inc").on("click", move || inc.update(|n| n + 1)).child("+"))
//!             .into_view())
//!     })
//! }
//!
//! let mut runtime = Runtime::new();
//! runtime.evaluate(counter())?;
//! runtime.dispatch("inc", "click")?;
//! runtime.run_until_idle()?;
//! assert!(runtime.render_to_string()?.contains("Current Count: 1"));
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod node;
pub mod runtime;
mod scheduler;
pub mod scope;
pub mod state;
pub mod tree;
pub mod view;

pub use context::{ContextSlot, SlotId};
pub use error::{Result, ViewError};
pub use node::{NodeId, NodeKey};
pub use runtime::{DEFAULT_MAX_PASSES, PassReport, Runtime, RuntimeConfig};
pub use scheduler::InvalidateCallback;
pub use scope::{Invalidator, Scope};
pub use state::StateCell;
pub use tree::{ComponentNode, Tree};
pub use view::{
	Component, ComponentView, Element, ElementView, EventHandler, IntoView, ProviderView, RenderFn,
	View,
};
