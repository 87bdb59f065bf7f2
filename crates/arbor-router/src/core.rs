//! Core Router Implementation.
//!
//! A [`Router`] is an ordered route table plus a [`LocationSource`]. The
//! router is handed to the view tree through the [`ROUTER`] context slot so
//! that [`RouterOutlet`](crate::RouterOutlet) and [`Link`](crate::Link) can
//! find it without it being passed through every component.

use crate::error::{Result, RouterError};
use crate::history::{HistoryState, LocationListener, LocationSource, MemoryHistory, NavigationType};
use crate::pattern::{PathPattern, RouteParams};
use arbor_core::{ContextSlot, IntoView, View};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;

/// Context slot carrying the router of the enclosing tree.
pub static ROUTER: LazyLock<ContextSlot<Rc<Router>>> = LazyLock::new(|| ContextSlot::new("Router"));

/// Context slot carrying the parameters of the matched route.
pub static ROUTE_PARAMS: LazyLock<ContextSlot<RouteParams>> =
	LazyLock::new(|| ContextSlot::with_default("RouteParams", RouteParams::new));

type ViewFactory = Rc<dyn Fn() -> View>;

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Extracted path parameters.
	pub params: RouteParams,
}

/// A single route definition.
#[derive(Clone)]
pub struct Route {
	pattern: PathPattern,
	name: Option<String>,
	component: ViewFactory,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	pub fn new<F>(pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern),
			name: None,
			component: Rc::new(component),
		}
	}

	/// Creates a named route.
	pub fn named<F>(name: impl Into<String>, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		Self {
			name: Some(name.into()),
			..Self::new(pattern, component)
		}
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Renders the route's view.
	pub fn render(&self) -> View {
		(self.component)()
	}
}

/// The main router.
pub struct Router {
	routes: Vec<Route>,
	named_routes: HashMap<String, usize>,
	not_found: Option<ViewFactory>,
	location: Rc<dyn LocationSource>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes)
			.field("has_not_found", &self.not_found.is_some())
			.field("location", &self.location.current_location())
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates a router over an in-memory history starting at `/`.
	pub fn new() -> Self {
		Self::with_location(Rc::new(MemoryHistory::default()))
	}

	/// Creates a router over `location`.
	pub fn with_location(location: Rc<dyn LocationSource>) -> Self {
		Self {
			routes: Vec::new(),
			named_routes: HashMap::new(),
			not_found: None,
			location,
		}
	}

	/// Adds a route to the router.
	pub fn route<F>(mut self, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route::new(pattern, component));
		self
	}

	/// Adds a named route to the router.
	pub fn named_route<F>(mut self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.named_routes.insert(name.to_string(), self.routes.len());
		self.routes.push(Route::named(name, pattern, component));
		self
	}

	/// Sets the view rendered when no route matches.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.not_found = Some(Rc::new(component));
		self
	}

	/// Returns the registered routes in match order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Returns whether a not-found view is registered.
	pub fn has_not_found(&self) -> bool {
		self.not_found.is_some()
	}

	/// Returns the current location.
	pub fn current_location(&self) -> String {
		self.location.current_location()
	}

	/// Matches a path against registered routes, first match wins.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		self.routes.iter().find_map(|route| {
			route.pattern.matches(path).map(|params| RouteMatch {
				route: route.clone(),
				params,
			})
		})
	}

	/// Returns the view for `path`.
	///
	/// The matched route's view is wrapped in a component keyed by the route
	/// pattern, so switching routes resets the state of the routed subtree
	/// while parameter changes within one route keep it. Route parameters are
	/// provided through [`ROUTE_PARAMS`].
	///
	/// # Errors
	///
	/// [`RouterError::NoRouteMatch`] if nothing matches and no not-found view
	/// is registered.
	pub fn resolve(&self, path: &str) -> Result<View> {
		if let Some(route_match) = self.match_path(path) {
			let component = route_match.route.component.clone();
			let routed = View::component("Route", move |_| Ok(component())).keyed(route_match.route.pattern.as_str());
			return Ok(ROUTE_PARAMS.provide(route_match.params, [routed]));
		}

		match &self.not_found {
			Some(not_found) => {
				tracing::warn!(path, "no route matched, rendering fallback");
				let component = not_found.clone();
				Ok(View::component("NotFound", move |_| Ok(component())))
			}
			None => Err(RouterError::NoRouteMatch(path.to_string())),
		}
	}

	/// Resolves the current location.
	pub fn render_current(&self) -> Result<View> {
		self.resolve(&self.current_location())
	}

	/// Navigates to a path, pushing a history entry.
	pub fn navigate(&self, path: &str) -> Result<()> {
		self.push(path)
	}

	/// Navigates to a path, pushing a history entry.
	pub fn push(&self, path: &str) -> Result<()> {
		self.go(path, NavigationType::Push)
	}

	/// Navigates to a path, replacing the current history entry.
	pub fn replace(&self, path: &str) -> Result<()> {
		self.go(path, NavigationType::Replace)
	}

	/// Moves one history entry back.
	pub fn back(&self) -> bool {
		self.location.back()
	}

	/// Moves one history entry forward.
	pub fn forward(&self) -> bool {
		self.location.forward()
	}

	fn go(&self, path: &str, navigation: NavigationType) -> Result<()> {
		let route_match = self.match_path(path);
		if route_match.is_none() && self.not_found.is_none() {
			return Err(RouterError::NoRouteMatch(path.to_string()));
		}

		let route_name = route_match.as_ref().and_then(|m| m.route.name());
		tracing::debug!(path, ?navigation, route = ?route_name, "navigating");
		let state = HistoryState::new(path).with_route_name(route_name);
		self.location
			.set_location(state, navigation)
			.map_err(RouterError::NavigationFailed)
	}

	/// Generates a path by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let params: RouteParams = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		self.routes[*index]
			.pattern
			.reverse(&params)
			.map_err(|param| RouterError::MissingParameter {
				route: name.to_string(),
				param,
			})
	}

	/// Registers a listener for location changes.
	pub fn subscribe<F>(&self, listener: F)
	where
		F: Fn(&HistoryState, NavigationType) -> bool + 'static,
	{
		let listener: LocationListener = Box::new(listener);
		self.location.subscribe(listener);
	}

	/// Makes `router` available to `children` through [`ROUTER`].
	pub fn provide(router: &Rc<Self>, children: impl IntoIterator<Item = impl IntoView>) -> View {
		ROUTER.provide(router.clone(), children)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn home_view() -> View {
		View::text("Home")
	}

	fn user_view() -> View {
		View::text("User")
	}

	#[rstest]
	fn test_route_named() {
		let route = Route::named("home", "/", home_view);
		assert_eq!(route.name(), Some("home"));
		assert_eq!(route.pattern().as_str(), "/");
	}

	#[rstest]
	fn test_router_match_first_wins() {
		let router = Router::new()
			.route("/users/{id}/", user_view)
			.route("/users/me/", home_view);

		let route_match = router.match_path("/users/me/").unwrap();
		assert_eq!(route_match.route.pattern().as_str(), "/users/{id}/");
		assert_eq!(route_match.params["id"], "me");
	}

	#[rstest]
	fn test_router_reverse() {
		let router = Router::new()
			.named_route("home", "/", home_view)
			.named_route("user_detail", "/users/{id}/", user_view);

		assert_eq!(router.reverse("home", &[]).unwrap(), "/");
		assert_eq!(router.reverse("user_detail", &[("id", "42")]).unwrap(), "/users/42/");
		assert_eq!(
			router.reverse("user_detail", &[]),
			Err(RouterError::MissingParameter {
				route: "user_detail".into(),
				param: "id".into()
			})
		);
		assert!(matches!(router.reverse("nope", &[]), Err(RouterError::InvalidRouteName(_))));
	}

	#[rstest]
	fn test_navigate_unmatched_without_fallback_keeps_location() {
		let router = Router::new().route("/", home_view);
		assert_eq!(
			router.navigate("/missing"),
			Err(RouterError::NoRouteMatch("/missing".into()))
		);
		assert_eq!(router.current_location(), "/");
	}

	#[rstest]
	fn test_navigate_unmatched_with_fallback() {
		let router = Router::new().route("/", home_view).not_found(|| View::text("404"));
		router.navigate("/missing").unwrap();
		assert_eq!(router.current_location(), "/missing");
		assert!(router.render_current().is_ok());
	}

	#[rstest]
	fn test_resolve_without_fallback_fails() {
		let router = Router::new();
		assert_eq!(
			router.resolve("/").unwrap_err(),
			RouterError::NoRouteMatch("/".into())
		);
	}

	#[rstest]
	fn test_replace_and_back() {
		let history = MemoryHistory::shared("/");
		let router = Router::with_location(history.clone())
			.route("/", home_view)
			.route("/a", home_view)
			.route("/b", home_view);

		router.push("/a").unwrap();
		router.replace("/b").unwrap();
		assert_eq!(history.len(), 2);
		assert!(router.back());
		assert_eq!(router.current_location(), "/");
		assert!(router.forward());
		assert_eq!(router.current_location(), "/b");
	}
}
