//! The evaluation runtime.
//!
//! A [`Runtime`] owns the cell arena, the node records and the current
//! [`Tree`]. A render driver mounts a root view with [`Runtime::evaluate`],
//! registers for invalidations with [`Runtime::on_invalidate`], and whenever
//! one fires either calls [`Runtime::evaluate`] again, which re-evaluates the
//! whole tree while keeping the state of surviving nodes, or
//! [`Runtime::flush`] (or [`Runtime::run_until_idle`]), which re-evaluates
//! only the dirty subtrees.
//!
//! ## Pass semantics
//!
//! 1. Every cell with queued writes commits them in issue order. A cell whose
//!    value did not change does not dirty its node.
//! 2. Dirty nodes whose ancestor is also dirty are dropped: the ancestor's
//!    re-evaluation covers them.
//! 3. Each remaining node is re-evaluated together with its whole subtree and
//!    the result is spliced into the current tree. Siblings and ancestors are
//!    left untouched.
//!
//! Writes issued while a pass runs are visible only in the following pass.

use crate::context::{ContextEnv, ContextSlot, SlotId};
use crate::error::{Result, ViewError};
use crate::node::{Identity, NodeId, NodeKey};
use crate::scheduler::{InvalidateCallback, Scheduler};
use crate::scope::Scope;
use crate::state::AnyCell;
use crate::tree::{ComponentNode, Tree};
use crate::view::{RenderFn, View};
use std::any::Any;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

/// Default bound for [`Runtime::run_until_idle`].
pub const DEFAULT_MAX_PASSES: usize = 32;

/// Name of the synthetic component that owns the root view.
const ROOT_NAME: &str = "Root";

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
	/// Maximum passes [`Runtime::run_until_idle`] runs before giving up.
	pub max_passes: usize,
}

impl Default for RuntimeConfig {
	fn default() -> Self {
		Self {
			max_passes: DEFAULT_MAX_PASSES,
		}
	}
}

/// What one pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
	/// Sequence number of the pass, starting at 1 for the first flush.
	pub pass: u64,
	/// Cells whose committed value changed.
	pub committed_cells: usize,
	/// Subtree roots that were re-evaluated, in evaluation order.
	pub reevaluated: Vec<NodeId>,
	/// Nodes removed from the tree.
	pub unmounted: usize,
}

impl PassReport {
	/// Returns whether the pass re-evaluated anything.
	pub fn is_noop(&self) -> bool {
		self.reevaluated.is_empty()
	}
}

struct NodeRecord {
	identity: Identity,
	parent: Option<NodeId>,
	render: RenderFn,
	env: ContextEnv,
	cells: Vec<Rc<dyn AnyCell>>,
	children: Vec<NodeId>,
	root_reads: Vec<SlotId>,
	evaluations: u64,
}

/// Evaluates view trees and re-evaluates invalidated subtrees.
pub struct Runtime {
	config: RuntimeConfig,
	scheduler: Rc<Scheduler>,
	nodes: HashMap<NodeId, NodeRecord>,
	identities: HashMap<Identity, NodeId>,
	root_bindings: HashMap<SlotId, Rc<dyn Any>>,
	root_readers: HashMap<SlotId, BTreeSet<NodeId>>,
	tree: Option<Tree>,
	passes: u64,
}

impl std::fmt::Debug for Runtime {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Runtime")
			.field("config", &self.config)
			.field("mounted_nodes", &self.nodes.len())
			.field("root_bindings", &self.root_bindings.len())
			.field("passes", &self.passes)
			.finish()
	}
}

impl Default for Runtime {
	fn default() -> Self {
		Self::new()
	}
}

impl Runtime {
	/// Creates a runtime with the default configuration.
	pub fn new() -> Self {
		Self::with_config(RuntimeConfig::default())
	}

	/// Creates a runtime with `config`.
	pub fn with_config(config: RuntimeConfig) -> Self {
		Self {
			config,
			scheduler: Rc::new(Scheduler::default()),
			nodes: HashMap::new(),
			identities: HashMap::new(),
			root_bindings: HashMap::new(),
			root_readers: HashMap::new(),
			tree: None,
			passes: 0,
		}
	}

	/// Returns the configuration.
	pub fn config(&self) -> RuntimeConfig {
		self.config
	}

	/// Evaluates `root` as the top of the tree.
	///
	/// The first call mounts the tree. Later calls reconcile against it:
	/// queued writes are committed, the whole tree is re-evaluated from the
	/// new root, and nodes whose identity reappears keep their cells and
	/// invalidation listeners. Only nodes that do not reappear are unmounted.
	pub fn evaluate(&mut self, root: impl crate::view::IntoView) -> Result<&Tree> {
		let root = root.into_view();
		let render: RenderFn = Rc::new(move |_| Ok(root.clone()));

		if let Some(record) = self.nodes.get_mut(&NodeId::ROOT) {
			record.render = render;
			let (committed, _) = self.commit_queued();
			// The whole tree is re-evaluated, so forced nodes are covered.
			self.scheduler.take_forced();
			self.scheduler.end_batch();
			tracing::debug!(committed, "re-evaluating root view");
		} else {
			self.nodes.insert(
				NodeId::ROOT,
				NodeRecord {
					identity: Identity {
						parent: NodeId::ROOT,
						name: ROOT_NAME,
						key: NodeKey::Index(0),
					},
					parent: None,
					render,
					env: ContextEnv::default(),
					cells: Vec::new(),
					children: Vec::new(),
					root_reads: Vec::new(),
					evaluations: 0,
				},
			);
			self.scheduler.mount(NodeId::ROOT, None);
			tracing::debug!("mounting root view");
		}

		let node = match self.evaluate_node(NodeId::ROOT) {
			Ok(node) => node,
			Err(error) => {
				self.scheduler.force(NodeId::ROOT);
				return Err(error);
			}
		};
		let tree: &Tree = self.tree.insert(Tree::Component(node));
		Ok(tree)
	}

	/// Returns the current tree, if one is mounted.
	pub fn tree(&self) -> Option<&Tree> {
		self.tree.as_ref()
	}

	/// Renders the current tree to HTML.
	pub fn render_to_string(&self) -> Result<String> {
		self.tree
			.as_ref()
			.map(Tree::render_to_string)
			.ok_or(ViewError::NotMounted)
	}

	/// Registers `callback` for invalidations of `subtree` or any node below it.
	///
	/// Pass [`NodeId::ROOT`] to watch the whole tree. The callback fires at
	/// most once per node per pass, at the moment the node is first
	/// invalidated. It must not call back into the runtime.
	pub fn on_invalidate<F>(&self, subtree: NodeId, callback: F)
	where
		F: Fn(NodeId) + 'static,
	{
		let callback: InvalidateCallback = Rc::new(callback);
		self.scheduler.add_listener(subtree, callback);
	}

	/// Returns whether work is queued for the next pass.
	pub fn has_pending(&self) -> bool {
		self.scheduler.has_pending()
	}

	/// Returns how many times node `id` has been evaluated since it mounted.
	pub fn evaluation_count(&self, id: NodeId) -> Option<u64> {
		self.nodes.get(&id).map(|record| record.evaluations)
	}

	/// Returns whether node `id` is mounted.
	pub fn is_mounted(&self, id: NodeId) -> bool {
		self.nodes.contains_key(&id)
	}

	/// Returns the number of mounted nodes, including the root.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Binds `value` to `slot` above the whole tree.
	///
	/// Nodes that read this root binding (or fell back to the slot default)
	/// are re-evaluated in the next pass; nodes under a provider for the same
	/// slot are not affected. Providing an equal value schedules nothing.
	pub fn provide<T>(&mut self, slot: &ContextSlot<T>, value: T)
	where
		T: Clone + PartialEq + 'static,
	{
		let unchanged = self
			.root_bindings
			.get(&slot.id())
			.and_then(|current| current.downcast_ref::<T>())
			.is_some_and(|current| *current == value);
		if unchanged {
			return;
		}

		self.root_bindings.insert(slot.id(), Rc::new(value));
		let readers = self.root_readers.get(&slot.id()).cloned().unwrap_or_default();
		tracing::debug!(slot = slot.name(), readers = readers.len(), "root context changed");
		for reader in readers {
			self.scheduler.force(reader);
		}
	}

	/// Dispatches `event` to the element whose `id` attribute is `element_id`.
	///
	/// Returns `Ok(false)` if the element exists but does not handle the
	/// event, and `Ok(true)` once its handlers ran. Handlers typically write
	/// to state cells, so a pass is usually due afterwards.
	pub fn dispatch(&self, element_id: &str, event: &str) -> Result<bool> {
		let tree = self.tree.as_ref().ok_or(ViewError::NotMounted)?;
		let element = tree
			.find_element(element_id)
			.ok_or_else(|| ViewError::ElementNotFound {
				id: element_id.to_string(),
			})?;
		tracing::debug!(element = element_id, event, "dispatching event");
		Ok(element.trigger(event))
	}

	/// Runs one pass: commits queued writes and re-evaluates dirty subtrees.
	pub fn flush(&mut self) -> Result<PassReport> {
		if self.tree.is_none() {
			return Err(ViewError::NotMounted);
		}
		self.passes += 1;
		let mut report = PassReport {
			pass: self.passes,
			..PassReport::default()
		};

		let (committed, mut dirty) = self.commit_queued();
		report.committed_cells = committed;
		dirty.extend(
			self.scheduler
				.take_forced()
				.into_iter()
				.filter(|id| self.nodes.contains_key(id)),
		);
		self.scheduler.end_batch();

		let roots: Vec<NodeId> = dirty
			.iter()
			.copied()
			.filter(|id| !self.has_ancestor_in(*id, &dirty))
			.collect();

		tracing::debug!(pass = report.pass, dirty = dirty.len(), roots = roots.len(), "pass started");

		let before = self.nodes.len();
		for (position, &id) in roots.iter().enumerate() {
			// An earlier root in this pass may have unmounted this one.
			if !self.nodes.contains_key(&id) {
				continue;
			}
			let node = match self.evaluate_node(id) {
				Ok(node) => node,
				Err(error) => {
					// Keep the failed subtree and the ones not reached queued
					// so the next pass retries them.
					for pending in &roots[position..] {
						self.scheduler.force(*pending);
					}
					tracing::debug!(pass = report.pass, node = %id, %error, "pass failed");
					return Err(error);
				}
			};
			let spliced = match self.tree.as_mut() {
				Some(tree) if id == NodeId::ROOT => {
					*tree = Tree::Component(node);
					true
				}
				Some(tree) => tree.splice(id, node),
				None => false,
			};
			if spliced {
				report.reevaluated.push(id);
			}
		}
		report.unmounted = before.saturating_sub(self.nodes.len());

		tracing::debug!(
			pass = report.pass,
			reevaluated = report.reevaluated.len(),
			committed = report.committed_cells,
			"pass finished"
		);
		Ok(report)
	}

	/// Runs passes until no work is queued.
	///
	/// # Errors
	///
	/// [`ViewError::RenderLoop`] if work is still queued after
	/// `max_passes` passes, which means components keep writing state during
	/// evaluation.
	pub fn run_until_idle(&mut self) -> Result<Vec<PassReport>> {
		let mut reports = Vec::new();
		while self.scheduler.has_pending() {
			if reports.len() >= self.config.max_passes {
				tracing::warn!(passes = reports.len(), "render loop did not settle");
				return Err(ViewError::RenderLoop {
					passes: reports.len(),
				});
			}
			reports.push(self.flush()?);
		}
		Ok(reports)
	}

	/// Commits every queued write and returns the number of changed cells
	/// together with their owners.
	fn commit_queued(&mut self) -> (usize, BTreeSet<NodeId>) {
		let mut committed = 0;
		let mut dirty = BTreeSet::new();
		for cell in self.scheduler.take_queued_cells() {
			if !cell.is_alive() || !self.nodes.contains_key(&cell.owner()) {
				continue;
			}
			if cell.commit() {
				tracing::trace!(node = %cell.owner(), cell_type = cell.type_name(), "state cell committed");
				committed += 1;
				dirty.insert(cell.owner());
			}
		}
		(committed, dirty)
	}

	fn has_ancestor_in(&self, id: NodeId, set: &BTreeSet<NodeId>) -> bool {
		let mut cursor = self.nodes.get(&id).and_then(|record| record.parent);
		while let Some(parent) = cursor {
			if set.contains(&parent) {
				return true;
			}
			cursor = self.nodes.get(&parent).and_then(|record| record.parent);
		}
		false
	}

	/// Evaluates node `id` and its whole subtree.
	fn evaluate_node(&mut self, id: NodeId) -> Result<ComponentNode> {
		let (name, render, env, mut cells, first) = {
			let record = self
				.nodes
				.get_mut(&id)
				.ok_or_else(|| ViewError::component(ROOT_NAME, format!("node {} is not mounted", id)))?;
			(
				record.identity.name,
				record.render.clone(),
				record.env.clone(),
				std::mem::take(&mut record.cells),
				record.evaluations == 0,
			)
		};

		let mut root_reads = Vec::new();
		let output = {
			let mut cx = Scope::new(
				id,
				name,
				first,
				&mut cells,
				&env,
				&self.root_bindings,
				&mut root_reads,
				&self.scheduler,
			);
			render(&mut cx)
		};

		let previous_reads = match self.nodes.get_mut(&id) {
			Some(record) => {
				record.cells = cells;
				record.evaluations += 1;
				std::mem::replace(&mut record.root_reads, root_reads.clone())
			}
			None => Vec::new(),
		};
		self.update_root_readers(id, &previous_reads, &root_reads);

		let output = output?;
		tracing::trace!(node = %id, component = name, first, "node evaluated");

		let mut children = Vec::new();
		let mut position = 0;
		let child = self.resolve(output, id, &env, &mut position, &mut children);

		// Children that did not reappear are gone, even if resolving failed.
		let previous_children = match self.nodes.get_mut(&id) {
			Some(record) => std::mem::replace(&mut record.children, children.clone()),
			None => Vec::new(),
		};
		let kept: HashSet<NodeId> = children.iter().copied().collect();
		for stale in previous_children {
			if !kept.contains(&stale) {
				self.unmount(stale);
			}
		}

		Ok(ComponentNode {
			id,
			name,
			child: Box::new(child?),
		})
	}

	/// Resolves the output of component `owner` into a tree.
	fn resolve(
		&mut self,
		view: View,
		owner: NodeId,
		env: &ContextEnv,
		position: &mut usize,
		children: &mut Vec<NodeId>,
	) -> Result<Tree> {
		match view {
			View::Element(el) => {
				let el = el.try_map_children(|child| self.resolve(child, owner, env, position, children))?;
				Ok(Tree::Element(el))
			}
			View::Text(text) => Ok(Tree::Text(text)),
			View::Empty => Ok(Tree::Empty),
			View::Fragment(items) => items
				.into_iter()
				.map(|child| self.resolve(child, owner, env, position, children))
				.collect::<Result<Vec<_>>>()
				.map(Tree::Fragment),
			View::Provider(provider) => {
				let inner = env.bind(provider.slot, provider.value, owner);
				provider
					.children
					.into_iter()
					.map(|child| self.resolve(child, owner, &inner, position, children))
					.collect::<Result<Vec<_>>>()
					.map(Tree::Fragment)
			}
			View::Component(component) => {
				let key = match component.key {
					Some(key) => NodeKey::Keyed(key),
					None => {
						let index = *position;
						*position += 1;
						NodeKey::Index(index)
					}
				};
				let duplicate_key = match &key {
					NodeKey::Keyed(key) => key.clone(),
					NodeKey::Index(index) => index.to_string(),
				};
				let identity = Identity {
					parent: owner,
					name: component.name,
					key,
				};
				let id = self.mount_child(identity, owner, component.render, env)?;
				if children.contains(&id) {
					return Err(ViewError::DuplicateKey {
						component: component.name,
						key: duplicate_key,
					});
				}
				children.push(id);
				self.evaluate_node(id).map(Tree::Component)
			}
		}
	}

	/// Finds or creates the node for `identity` and refreshes its inputs.
	fn mount_child(
		&mut self,
		identity: Identity,
		parent: NodeId,
		render: RenderFn,
		env: &ContextEnv,
	) -> Result<NodeId> {
		if let Some(&id) = self.identities.get(&identity) {
			if let Some(record) = self.nodes.get_mut(&id) {
				record.render = render;
				record.env = env.clone();
				return Ok(id);
			}
		}

		let id = NodeId::new();
		tracing::debug!(node = %id, parent = %parent, component = identity.name, key = %identity.key, "node mounted");
		self.identities.insert(identity.clone(), id);
		self.nodes.insert(
			id,
			NodeRecord {
				identity,
				parent: Some(parent),
				render,
				env: env.clone(),
				cells: Vec::new(),
				children: Vec::new(),
				root_reads: Vec::new(),
				evaluations: 0,
			},
		);
		self.scheduler.mount(id, Some(parent));
		Ok(id)
	}

	/// Removes node `id` and its subtree, destroying their cells.
	fn unmount(&mut self, id: NodeId) {
		let Some(record) = self.nodes.remove(&id) else {
			return;
		};
		tracing::debug!(node = %id, component = record.identity.name, "node unmounted");

		for cell in &record.cells {
			cell.retire();
		}
		self.identities.remove(&record.identity);
		self.update_root_readers(id, &record.root_reads, &[]);
		self.scheduler.unmount(id);

		for child in record.children {
			self.unmount(child);
		}
	}

	fn update_root_readers(&mut self, id: NodeId, previous: &[SlotId], current: &[SlotId]) {
		for slot in previous {
			if let Some(readers) = self.root_readers.get_mut(slot) {
				readers.remove(&id);
			}
		}
		for slot in current {
			self.root_readers.entry(*slot).or_default().insert(id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::IntoView;
	use rstest::rstest;
	use std::cell::{Cell, RefCell};

	fn counter_view(label: &'static str) -> View {
		View::component("Counter", move |cx| {
			let count = cx.use_state(|| 0)?;
			let on_click = count.clone();
			Ok(View::element("button")
				.attr("id", label)
				.on("click", move || on_click.update(|n| n + 1))
				.child(format!("{}", count.read()))
				.into_view())
		})
	}

	#[rstest]
	fn test_evaluate_renders_root() {
		let mut runtime = Runtime::new();
		let tree = runtime.evaluate(View::element("p").child("hello")).unwrap();
		assert_eq!(tree.render_to_string(), "<p>hello</p>");
		assert_eq!(runtime.evaluation_count(NodeId::ROOT), Some(1));
	}

	#[rstest]
	fn test_flush_without_tree_fails() {
		let mut runtime = Runtime::new();
		assert_eq!(runtime.flush().unwrap_err(), ViewError::NotMounted);
	}

	#[rstest]
	fn test_batched_updates_single_reevaluation() {
		let mut runtime = Runtime::new();
		runtime.evaluate(counter_view("inc")).unwrap();

		for _ in 0..3 {
			assert!(runtime.dispatch("inc", "click").unwrap());
		}
		let report = runtime.flush().unwrap();

		assert_eq!(report.reevaluated.len(), 1);
		assert_eq!(report.committed_cells, 1);
		assert_eq!(runtime.render_to_string().unwrap(), "<button id=\"inc\">3</button>");

		let counter = report.reevaluated[0];
		assert_eq!(runtime.evaluation_count(counter), Some(2));
	}

	#[rstest]
	fn test_sibling_subtree_is_not_reevaluated() {
		let mut runtime = Runtime::new();
		runtime
			.evaluate(View::fragment([counter_view("a"), counter_view("b")]))
			.unwrap();
		let tree = runtime.tree().unwrap();
		let html_before = tree.render_to_string();
		assert_eq!(html_before, "<button id=\"a\">0</button><button id=\"b\">0</button>");

		runtime.dispatch("a", "click").unwrap();
		let report = runtime.flush().unwrap();
		assert_eq!(report.reevaluated.len(), 1);

		let evaluated = report.reevaluated[0];
		let others: Vec<_> = runtime
			.nodes
			.keys()
			.copied()
			.filter(|id| *id != evaluated && *id != NodeId::ROOT)
			.collect();
		assert_eq!(others.len(), 1);
		assert_eq!(runtime.evaluation_count(others[0]), Some(1));
		assert_eq!(runtime.evaluation_count(NodeId::ROOT), Some(1));
		assert_eq!(
			runtime.render_to_string().unwrap(),
			"<button id=\"a\">1</button><button id=\"b\">0</button>"
		);
	}

	#[rstest]
	fn test_unchanged_value_skips_reevaluation() {
		let mut runtime = Runtime::new();
		let handle = Rc::new(RefCell::new(None));
		let slot = handle.clone();
		runtime
			.evaluate(View::component("Label", move |cx| {
				let text = cx.use_state(|| "same".to_string())?;
				*slot.borrow_mut() = Some(text.clone());
				Ok(View::text(text.read()))
			}))
			.unwrap();

		let text = handle.borrow().clone().unwrap();
		text.replace("other".to_string());
		text.replace("same".to_string());
		let report = runtime.flush().unwrap();
		assert!(report.is_noop());
	}

	#[rstest]
	fn test_on_invalidate_fires_once_per_node_per_batch() {
		let mut runtime = Runtime::new();
		runtime.evaluate(counter_view("btn")).unwrap();
		let fired = Rc::new(Cell::new(0));
		let seen = fired.clone();
		runtime.on_invalidate(NodeId::ROOT, move |_| seen.set(seen.get() + 1));

		runtime.dispatch("btn", "click").unwrap();
		runtime.dispatch("btn", "click").unwrap();
		assert_eq!(fired.get(), 1);
		assert!(runtime.has_pending());

		runtime.flush().unwrap();
		runtime.dispatch("btn", "click").unwrap();
		assert_eq!(fired.get(), 2);
	}

	#[rstest]
	fn test_run_until_idle_detects_render_loop() {
		let mut runtime = Runtime::with_config(RuntimeConfig { max_passes: 4 });
		runtime
			.evaluate(View::component("Runaway", |cx| {
				let ticks = cx.use_state(|| 0u32)?;
				ticks.update(|n| n + 1);
				Ok(View::text(ticks.read().to_string()))
			}))
			.unwrap();

		assert_eq!(
			runtime.run_until_idle().unwrap_err(),
			ViewError::RenderLoop { passes: 4 }
		);
	}

	#[rstest]
	fn test_state_type_mismatch() {
		let mut runtime = Runtime::new();
		let flip = Rc::new(Cell::new(false));
		let flag = flip.clone();
		runtime
			.evaluate(View::component("Fickle", move |cx| {
				if flag.get() {
					cx.use_state(|| "text".to_string())?;
				} else {
					cx.use_state(|| 1u8)?;
				}
				Ok(View::Empty)
			}))
			.unwrap();

		flip.set(true);
		runtime.scheduler.force(NodeId::ROOT);
		assert!(matches!(
			runtime.flush().unwrap_err(),
			ViewError::StateTypeMismatch {
				component: "Fickle",
				index: 0,
				..
			}
		));
	}

	#[rstest]
	fn test_duplicate_key_is_rejected() {
		let mut runtime = Runtime::new();
		let row = || View::component("Row", |_| Ok(View::Empty)).keyed("a");
		let error = runtime.evaluate(View::fragment([row(), row()])).unwrap_err();
		assert_eq!(
			error,
			ViewError::DuplicateKey {
				component: "Row",
				key: "a".to_string()
			}
		);
	}

	#[rstest]
	fn test_dispatch_to_missing_element() {
		let mut runtime = Runtime::new();
		runtime.evaluate(counter_view("inc")).unwrap();
		assert_eq!(
			runtime.dispatch("dec", "click").unwrap_err(),
			ViewError::ElementNotFound {
				id: "dec".to_string()
			}
		);
	}

	#[rstest]
	fn test_failed_pass_keeps_subtree_queued() {
		let mut runtime = Runtime::new();
		let handle = Rc::new(RefCell::new(None));
		let slot = handle.clone();
		runtime
			.evaluate(View::component("Picky", move |cx| {
				let value = cx.use_state(|| 0u32)?;
				*slot.borrow_mut() = Some(value.clone());
				if value.read() == 1 {
					return Err(ViewError::component("Picky", "one is not allowed"));
				}
				Ok(View::text(value.read().to_string()))
			}))
			.unwrap();

		let value = handle.borrow().clone().unwrap();
		value.replace(1);
		assert!(matches!(
			runtime.flush().unwrap_err(),
			ViewError::Component {
				component: "Picky",
				..
			}
		));
		assert!(runtime.has_pending());
		assert_eq!(runtime.render_to_string().unwrap(), "0");

		value.replace(2);
		runtime.run_until_idle().unwrap();
		assert!(!runtime.has_pending());
		assert_eq!(runtime.render_to_string().unwrap(), "2");
	}

	#[rstest]
	fn test_reevaluate_commits_queued_writes() {
		let mut runtime = Runtime::new();
		runtime.evaluate(counter_view("inc")).unwrap();
		runtime.dispatch("inc", "click").unwrap();

		runtime.evaluate(counter_view("inc")).unwrap();
		assert!(!runtime.has_pending());
		assert_eq!(runtime.render_to_string().unwrap(), "<button id=\"inc\">1</button>");
		assert_eq!(runtime.evaluation_count(NodeId::ROOT), Some(2));
	}
}
