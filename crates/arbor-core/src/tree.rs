//! Evaluated view trees.
//!
//! A [`Tree`] is what one evaluation pass produces: component instances are
//! resolved to their node id and output, providers are flattened away. Trees
//! are replaced wholesale per subtree on re-render and never mutated in
//! place by components.

use crate::node::NodeId;
use crate::view::{Element, html_escape};
use std::borrow::Cow;

/// An evaluated view tree.
#[derive(Debug, Clone)]
pub enum Tree {
	/// An HTML element.
	Element(Element<Tree>),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Tree>),
	/// The output of one component node.
	Component(ComponentNode),
	/// Renders nothing.
	Empty,
}

/// The output of one component node.
#[derive(Debug, Clone)]
pub struct ComponentNode {
	pub(crate) id: NodeId,
	pub(crate) name: &'static str,
	pub(crate) child: Box<Tree>,
}

impl ComponentNode {
	/// Returns the node id.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Returns the component name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the component's output.
	pub fn child(&self) -> &Tree {
		&self.child
	}
}

impl Tree {
	/// Renders the tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Tree::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_nodes() {
						child.render_into(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Tree::Text(text) => output.push_str(&html_escape(text)),
			Tree::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Tree::Component(component) => component.child.render_into(output),
			Tree::Empty => {}
		}
	}

	/// Concatenates the text content of the tree, without markup.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		match self {
			Tree::Element(el) => el.child_nodes().iter().for_each(|c| c.collect_text(output)),
			Tree::Text(text) => output.push_str(text),
			Tree::Fragment(children) => children.iter().for_each(|c| c.collect_text(output)),
			Tree::Component(component) => component.child.collect_text(output),
			Tree::Empty => {}
		}
	}

	/// Finds the first element whose `id` attribute equals `id`.
	pub fn find_element(&self, id: &str) -> Option<&Element<Tree>> {
		match self {
			Tree::Element(el) => {
				if el.attr_value("id") == Some(id) {
					return Some(el);
				}
				el.child_nodes().iter().find_map(|c| c.find_element(id))
			}
			Tree::Fragment(children) => children.iter().find_map(|c| c.find_element(id)),
			Tree::Component(component) => component.child.find_element(id),
			Tree::Text(_) | Tree::Empty => None,
		}
	}

	/// Finds the output of component node `id`.
	pub fn find_component(&self, id: NodeId) -> Option<&ComponentNode> {
		match self {
			Tree::Component(component) if component.id == id => Some(component),
			Tree::Component(component) => component.child.find_component(id),
			Tree::Element(el) => el.child_nodes().iter().find_map(|c| c.find_component(id)),
			Tree::Fragment(children) => children.iter().find_map(|c| c.find_component(id)),
			Tree::Text(_) | Tree::Empty => None,
		}
	}

	/// Finds the first component node with the given name, depth-first.
	pub fn find_component_by_name(&self, name: &str) -> Option<&ComponentNode> {
		match self {
			Tree::Component(component) if component.name == name => Some(component),
			Tree::Component(component) => component.child.find_component_by_name(name),
			Tree::Element(el) => el
				.child_nodes()
				.iter()
				.find_map(|c| c.find_component_by_name(name)),
			Tree::Fragment(children) => children.iter().find_map(|c| c.find_component_by_name(name)),
			Tree::Text(_) | Tree::Empty => None,
		}
	}

	/// Replaces the output of component node `id` with `replacement`.
	///
	/// Returns `false` if the node is not part of this tree.
	pub(crate) fn splice(&mut self, id: NodeId, replacement: ComponentNode) -> bool {
		let mut slot = Some(replacement);
		self.splice_inner(id, &mut slot)
	}

	fn splice_inner(&mut self, id: NodeId, slot: &mut Option<ComponentNode>) -> bool {
		match self {
			Tree::Component(component) if component.id == id => match slot.take() {
				Some(replacement) => {
					*component = replacement;
					true
				}
				None => false,
			},
			Tree::Component(component) => component.child.splice_inner(id, slot),
			Tree::Element(el) => el.children_mut().iter_mut().any(|c| c.splice_inner(id, slot)),
			Tree::Fragment(children) => children.iter_mut().any(|c| c.splice_inner(id, slot)),
			Tree::Text(_) | Tree::Empty => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{IntoView, View};

	fn element(view: View) -> Tree {
		match view {
			View::Element(el) => Tree::Element(
				el.try_map_children(|child| Ok::<_, ()>(element(child)))
					.unwrap(),
			),
			View::Text(text) => Tree::Text(text),
			View::Fragment(children) => Tree::Fragment(children.into_iter().map(element).collect()),
			_ => Tree::Empty,
		}
	}

	#[test]
	fn test_render_nested_elements() {
		let tree = element(
			View::element("div")
				.attr("class", "card")
				.child(View::element("h2").child("Alice"))
				.child(View::element("br"))
				.into_view(),
		);
		assert_eq!(
			tree.render_to_string(),
			"<div class=\"card\"><h2>Alice</h2><br /></div>"
		);
	}

	#[test]
	fn test_render_escapes_text_and_attrs() {
		let tree = element(View::element("p").attr("title", "a\"b").child("<&>").into_view());
		assert_eq!(
			tree.render_to_string(),
			"<p title=\"a&quot;b\">&lt;&amp;&gt;</p>"
		);
	}

	#[test]
	fn test_find_element_and_text_content() {
		let tree = element(
			View::element("main")
				.child(View::element("span").attr("id", "count").child("3"))
				.child(View::fragment(["a", "b"]))
				.into_view(),
		);
		assert_eq!(tree.find_element("count").map(|e| e.tag_name()), Some("span"));
		assert!(tree.find_element("missing").is_none());
		assert_eq!(tree.text_content(), "3ab");
	}

	#[test]
	fn test_splice_replaces_component_output() {
		let id = NodeId::new();
		let mut tree = Tree::Fragment(vec![Tree::Component(ComponentNode {
			id,
			name: "Counter",
			child: Box::new(Tree::Text("0".into())),
		})]);

		let replaced = tree.splice(
			id,
			ComponentNode {
				id,
				name: "Counter",
				child: Box::new(Tree::Text("1".into())),
			},
		);
		assert!(replaced);
		assert_eq!(tree.render_to_string(), "1");
		assert_eq!(tree.find_component(id).map(|c| c.name()), Some("Counter"));
		assert!(tree.find_component(NodeId::new()).is_none());
	}
}
