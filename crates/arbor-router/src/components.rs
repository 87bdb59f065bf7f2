//! Router Components for navigation.
//!
//! This module provides Link and RouterOutlet components for
//! declarative navigation in component trees. Both find the router through
//! the [`ROUTER`] context slot.

use crate::core::ROUTER;
use arbor_core::{Component, ElementView, IntoView, Result, Scope, View};

/// A link component that navigates without a page reload.
///
/// Renders an `<a>` whose click handler pushes (or replaces) the target
/// path on the enclosing router. Outside a router the link renders as a
/// plain anchor.
///
/// # Example
///
/// ```ignore
/// use arbor_router::Link;
///
/// let link = Link::new("/about", "About").id("nav-about");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	to: String,
	content: String,
	id: Option<String>,
	class: Option<String>,
	style: Option<String>,
	replace: bool,
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			id: None,
			class: None,
			style: None,
			replace: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the id attribute, which is also how events are dispatched to it.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets an inline style.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns whether this is a replace navigation.
	pub fn is_replace(&self) -> bool {
		self.replace
	}
}

impl Component for Link {
	fn render(&self, cx: &mut Scope<'_>) -> Result<View> {
		let mut el = ElementView::new("a").attr("href", self.to.clone());

		if let Some(ref id) = self.id {
			el = el.attr("id", id.clone());
		}
		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}
		if let Some(ref style) = self.style {
			el = el.attr("style", style.clone());
		}
		for (name, value) in &self.attrs {
			el = el.attr(name.clone(), value.clone());
		}

		if let Some(router) = cx.try_consume(&ROUTER)? {
			el = el.attr("data-link", "true");
			if self.replace {
				el = el.attr("data-replace", "true");
			}

			let to = self.to.clone();
			let replace = self.replace;
			el = el.on("click", move || {
				let result = if replace { router.replace(&to) } else { router.push(&to) };
				if let Err(error) = result {
					tracing::warn!(to = %to, %error, "link navigation failed");
				}
			});
		}

		Ok(el.child(self.content.clone()).into_view())
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// A component that renders the view of the route matching the current
/// location.
///
/// The outlet subscribes to the router's location source on its first
/// evaluation and is re-evaluated on every location change.
///
/// # Errors
///
/// Evaluation fails with [`ViewError::NoRouteMatch`](arbor_core::ViewError::NoRouteMatch)
/// if the location has no match and the router has no not-found view.
#[derive(Debug, Clone, Default)]
pub struct RouterOutlet {
	id: Option<String>,
	style: Option<String>,
}

impl RouterOutlet {
	/// Creates a new router outlet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the ID attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets an inline style on the wrapper element.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}
}

impl Component for RouterOutlet {
	fn render(&self, cx: &mut Scope<'_>) -> Result<View> {
		let router = cx.consume(&ROUTER)?;

		if cx.is_first_evaluation() {
			let invalidator = cx.invalidator();
			router.subscribe(move |_, _| invalidator.invalidate());
		}

		let content = router.render_current()?;

		let mut el = ElementView::new("div").attr("data-router-outlet", "true");
		if let Some(ref id) = self.id {
			el = el.attr("id", id.clone());
		}
		if let Some(ref style) = self.style {
			el = el.attr("style", style.clone());
		}
		Ok(el.child(content).into_view())
	}

	fn name() -> &'static str {
		"RouterOutlet"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Router;
	use arbor_core::{Runtime, ViewError};
	use rstest::rstest;
	use std::rc::Rc;

	#[rstest]
	fn test_link_without_router_is_plain_anchor() {
		let mut runtime = Runtime::new();
		let link = Link::new("/admin/", "Admin")
			.class("nav-link")
			.attr("aria-label", "Admin Panel");

		runtime.evaluate(View::from_component(link)).unwrap();
		let html = runtime.render_to_string().unwrap();
		assert_eq!(
			html,
			"<a href=\"/admin/\" class=\"nav-link\" aria-label=\"Admin Panel\">Admin</a>"
		);
	}

	#[rstest]
	fn test_link_inside_router_is_marked() {
		let router = Rc::new(Router::new().route("/", || View::text("home")));
		let mut runtime = Runtime::new();
		runtime
			.evaluate(Router::provide(
				&router,
				[View::from_component(Link::new("/", "Home").replace(true))],
			))
			.unwrap();

		let html = runtime.render_to_string().unwrap();
		assert!(html.contains("data-link=\"true\""));
		assert!(html.contains("data-replace=\"true\""));
	}

	#[rstest]
	fn test_outlet_requires_router() {
		let mut runtime = Runtime::new();
		let error = runtime
			.evaluate(View::from_component(RouterOutlet::new()))
			.unwrap_err();
		assert_eq!(error, ViewError::UnboundContext { slot: "Router" });
	}

	#[rstest]
	fn test_component_names() {
		assert_eq!(Link::name(), "Link");
		assert_eq!(RouterOutlet::name(), "RouterOutlet");
	}
}
