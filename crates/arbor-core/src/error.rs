//! Error types for view evaluation.

use thiserror::Error;

/// Result type for view evaluation.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors raised while evaluating a view tree.
///
/// Every variant is a programmer error: the runtime reports it to the caller
/// of the pass and never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViewError {
	/// A context slot was consumed with no enclosing provider and no default.
	#[error("context `{slot}` consumed outside of any provider and has no default")]
	UnboundContext {
		/// Debug name of the slot.
		slot: &'static str,
	},

	/// A bound context value did not have the slot's type.
	#[error("context `{slot}` holds a value of an unexpected type")]
	ContextTypeMismatch {
		/// Debug name of the slot.
		slot: &'static str,
	},

	/// A component requested its state cells in a different order than on
	/// its first evaluation.
	#[error(
		"state cell #{index} of component `{component}` was requested as `{expected}` but holds another type"
	)]
	StateTypeMismatch {
		/// Component that owns the cell.
		component: &'static str,
		/// Position of the cell in request order.
		index: usize,
		/// Type requested on this evaluation.
		expected: &'static str,
	},

	/// Two sibling components resolved to the same identity.
	#[error("duplicate key `{key}` for component `{component}` under the same parent")]
	DuplicateKey {
		/// Component name.
		component: &'static str,
		/// Offending key.
		key: String,
	},

	/// No route matched the location and no fallback was registered.
	#[error("no route matches `{path}`")]
	NoRouteMatch {
		/// Location that failed to match.
		path: String,
	},

	/// The driver loop kept finding work after the configured pass limit.
	#[error("render loop did not settle after {passes} passes")]
	RenderLoop {
		/// Number of passes that ran.
		passes: usize,
	},

	/// An event was dispatched to an element id that is not in the tree.
	#[error("no element with id `{id}` in the mounted tree")]
	ElementNotFound {
		/// The `id` attribute that was looked up.
		id: String,
	},

	/// A pass was requested before any tree was mounted.
	#[error("no view tree is mounted")]
	NotMounted,

	/// A component reported its own failure.
	#[error("component `{component}` failed: {message}")]
	Component {
		/// Component name.
		component: &'static str,
		/// Failure description.
		message: String,
	},
}

impl ViewError {
	/// Builds a [`ViewError::Component`] error.
	pub fn component(component: &'static str, message: impl Into<String>) -> Self {
		Self::Component {
			component,
			message: message.into(),
		}
	}
}
