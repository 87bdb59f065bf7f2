//! View descriptions: what a component function returns.
//!
//! A [`View`] is an unevaluated description. Component instances and context
//! providers inside it are resolved by the runtime into a [`Tree`](crate::Tree).

use crate::context::SlotId;
use crate::error::Result;
use crate::scope::Scope;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Event handler attached to an element.
pub type EventHandler = Rc<dyn Fn()>;

/// Render function of a component instance.
pub type RenderFn = Rc<dyn Fn(&mut Scope<'_>) -> Result<View>>;

/// An HTML element, generic over its child representation.
///
/// `Element<View>` is built by components; `Element<Tree>` is what the
/// runtime hands to a driver.
#[derive(Clone)]
pub struct Element<C> {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	handlers: Vec<(Cow<'static, str>, EventHandler)>,
	children: Vec<C>,
	is_void: bool,
}

/// Element under construction inside a component.
pub type ElementView = Element<View>;

impl<C: fmt::Debug> fmt::Debug for Element<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("handlers_count", &self.handlers.len())
			.finish()
	}
}

impl<C> Element<C> {
	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of an attribute.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[C] {
		&self.children
	}

	pub(crate) fn children_mut(&mut self) -> &mut Vec<C> {
		&mut self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the names of the events this element handles.
	pub fn events(&self) -> impl Iterator<Item = &str> {
		self.handlers.iter().map(|(name, _)| name.as_ref())
	}

	/// Invokes every handler registered for `event`.
	///
	/// Returns `false` if the element has no handler for it.
	pub fn trigger(&self, event: &str) -> bool {
		let mut handled = false;
		for (name, handler) in &self.handlers {
			if name == event {
				handler();
				handled = true;
			}
		}
		handled
	}

	/// Converts the children one by one, keeping tag, attributes and handlers.
	pub(crate) fn try_map_children<D, E>(
		self,
		mut f: impl FnMut(C) -> std::result::Result<D, E>,
	) -> std::result::Result<Element<D>, E> {
		let children = self
			.children
			.into_iter()
			.map(&mut f)
			.collect::<std::result::Result<Vec<_>, _>>()?;
		Ok(Element {
			tag: self.tag,
			attrs: self.attrs,
			handlers: self.handlers,
			children,
			is_void: self.is_void,
		})
	}
}

impl Element<View> {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			handlers: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Adds an event handler.
	pub fn on<F>(mut self, event: impl Into<Cow<'static, str>>, handler: F) -> Self
	where
		F: Fn() + 'static,
	{
		self.handlers.push((event.into(), Rc::new(handler)));
		self
	}
}

/// A component instance inside a view description.
#[derive(Clone)]
pub struct ComponentView {
	pub(crate) name: &'static str,
	pub(crate) key: Option<String>,
	pub(crate) render: RenderFn,
}

impl fmt::Debug for ComponentView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentView")
			.field("name", &self.name)
			.field("key", &self.key)
			.finish()
	}
}

impl ComponentView {
	/// Returns the component name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the explicit key, if any.
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}
}

/// A context binding that covers `children`.
#[derive(Clone)]
pub struct ProviderView {
	pub(crate) slot: SlotId,
	pub(crate) slot_name: &'static str,
	pub(crate) value: Rc<dyn Any>,
	pub(crate) children: Vec<View>,
}

impl fmt::Debug for ProviderView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderView")
			.field("slot", &self.slot_name)
			.field("children", &self.children)
			.finish()
	}
}

/// A view description.
#[derive(Debug, Clone)]
pub enum View {
	/// An HTML element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// A component instance, evaluated by the runtime.
	Component(ComponentView),
	/// A context provider for its children.
	Provider(ProviderView),
	/// Renders nothing.
	Empty,
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Creates a component instance from a render closure.
	///
	/// The closure captures the component's explicit parameters.
	pub fn component<F>(name: &'static str, render: F) -> Self
	where
		F: Fn(&mut Scope<'_>) -> Result<View> + 'static,
	{
		Self::Component(ComponentView {
			name,
			key: None,
			render: Rc::new(render),
		})
	}

	/// Creates a component instance from a [`Component`] value.
	pub fn from_component<C: Component>(component: C) -> Self {
		Self::component(C::name(), move |cx| component.render(cx))
	}

	/// Gives a component instance an explicit key.
	///
	/// Keys keep state attached to a component when its siblings are
	/// reordered. Views that are not components are returned unchanged.
	pub fn keyed(self, key: impl Into<String>) -> Self {
		match self {
			Self::Component(mut component) => {
				component.key = Some(key.into());
				Self::Component(component)
			}
			other => other,
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

/// Trait for reusable components.
///
/// The struct fields are the component's explicit parameters; state and
/// context come from the [`Scope`].
///
/// # Example
///
/// ```ignore
/// use arbor_core::{Component, Result, Scope, View};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self, _cx: &mut Scope<'_>) -> Result<View> {
///         Ok(View::element("p")
///             .child(format!("Hello, {}!", self.name))
///             .into_view())
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Produces the component's child tree.
	fn render(&self, cx: &mut Scope<'_>) -> Result<View>;

	/// Returns the component's name. Part of the node identity.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[test]
	fn test_void_element_detection() {
		assert!(ElementView::new("br").is_void());
		assert!(ElementView::new("input").is_void());
		assert!(!ElementView::new("div").is_void());
	}

	#[test]
	fn test_element_attrs_and_children() {
		let el = View::element("nav")
			.attr("class", "navbar")
			.child("Home")
			.children(["About", "Services"]);
		assert_eq!(el.attr_value("class"), Some("navbar"));
		assert_eq!(el.attr_value("id"), None);
		assert_eq!(el.child_nodes().len(), 3);
	}

	#[test]
	fn test_trigger_runs_matching_handlers() {
		let clicks = Rc::new(Cell::new(0));
		let counter = clicks.clone();
		let el = View::element("button").on("click", move || counter.set(counter.get() + 1));

		assert!(el.trigger("click"));
		assert!(!el.trigger("submit"));
		assert_eq!(clicks.get(), 1);
		assert_eq!(el.events().collect::<Vec<_>>(), vec!["click"]);
	}

	#[test]
	fn test_keyed_only_applies_to_components() {
		let component = View::component("Row", |_| Ok(View::Empty)).keyed("a");
		match component {
			View::Component(c) => assert_eq!(c.key(), Some("a")),
			other => panic!("expected component, got {:?}", other),
		}

		let text = View::text("plain").keyed("ignored");
		assert!(matches!(text, View::Text(_)));
	}

	#[test]
	fn test_into_view_conversions() {
		assert!(matches!(None::<String>.into_view(), View::Empty));
		assert!(matches!(().into_view(), View::Empty));
		match ("a", "b", "c").into_view() {
			View::Fragment(children) => assert_eq!(children.len(), 3),
			other => panic!("expected fragment, got {:?}", other),
		}
	}

	#[test]
	fn test_html_escape() {
		assert_eq!(html_escape("Hello"), Cow::Borrowed("Hello"));
		assert_eq!(
			html_escape("<b>&\"'"),
			Cow::<str>::Owned("&lt;b&gt;&amp;&quot;&#x27;".to_string())
		);
	}
}
