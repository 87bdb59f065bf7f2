//! Error types for routing.

use arbor_core::ViewError;
use thiserror::Error;

/// Result type for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RouterError {
	/// No route matched and no not-found fallback is registered.
	#[error("no route matches `{0}`")]
	NoRouteMatch(String),

	/// `reverse` was called with a name no route carries.
	#[error("invalid route name: {0}")]
	InvalidRouteName(String),

	/// `reverse` was called without a value for one of the route's parameters.
	#[error("missing parameter `{param}` for route `{route}`")]
	MissingParameter {
		/// Route name.
		route: String,
		/// Parameter name.
		param: String,
	},

	/// The location source refused the navigation.
	#[error("navigation failed: {0}")]
	NavigationFailed(String),

	/// Evaluating a routed view failed.
	#[error(transparent)]
	View(#[from] ViewError),
}

impl From<RouterError> for ViewError {
	fn from(error: RouterError) -> Self {
		match error {
			RouterError::NoRouteMatch(path) => ViewError::NoRouteMatch { path },
			RouterError::View(inner) => inner,
			other => ViewError::component("Router", other.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(RouterError::NoRouteMatch("/missing".into()), "no route matches `/missing`")]
	#[case(RouterError::InvalidRouteName("home".into()), "invalid route name: home")]
	#[case(
		RouterError::MissingParameter { route: "user".into(), param: "id".into() },
		"missing parameter `id` for route `user`"
	)]
	fn test_router_error_display(#[case] error: RouterError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_no_route_match_maps_to_view_error() {
		let error: ViewError = RouterError::NoRouteMatch("/x".into()).into();
		assert_eq!(error, ViewError::NoRouteMatch { path: "/x".into() });
	}

	#[rstest]
	fn test_view_error_round_trips_through_router_error() {
		let inner = ViewError::UnboundContext { slot: "Router" };
		let error: ViewError = RouterError::from(inner.clone()).into();
		assert_eq!(error, inner);
	}
}
