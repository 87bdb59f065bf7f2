//! Invalidation bookkeeping shared between a runtime and its handles.
//!
//! State cells, invalidators and root bindings report work here; the
//! runtime drains it at the start of each pass. Callbacks registered with
//! [`Runtime::on_invalidate`](crate::Runtime::on_invalidate) fire the first
//! time a node inside their subtree is invalidated within a batch.

use crate::node::NodeId;
use crate::state::AnyCell;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

/// Callback fired when a node inside a watched subtree is invalidated.
pub type InvalidateCallback = Rc<dyn Fn(NodeId)>;

#[derive(Default)]
pub(crate) struct Scheduler {
	/// Cells with queued writes, in the order they were first written.
	queued_cells: RefCell<Vec<Rc<dyn AnyCell>>>,
	/// Nodes that must re-evaluate whatever their cells hold.
	forced: RefCell<BTreeSet<NodeId>>,
	/// Mounted nodes and their parents.
	topology: RefCell<HashMap<NodeId, Option<NodeId>>>,
	listeners: RefCell<HashMap<NodeId, Vec<InvalidateCallback>>>,
	/// Nodes already reported to listeners in the current batch.
	notified: RefCell<HashSet<NodeId>>,
}

impl Scheduler {
	pub(crate) fn queue_cell(&self, cell: Rc<dyn AnyCell>) {
		let owner = cell.owner();
		self.queued_cells.borrow_mut().push(cell);
		self.notify(owner);
	}

	pub(crate) fn force(&self, node: NodeId) {
		self.forced.borrow_mut().insert(node);
		self.notify(node);
	}

	pub(crate) fn take_queued_cells(&self) -> Vec<Rc<dyn AnyCell>> {
		std::mem::take(&mut *self.queued_cells.borrow_mut())
	}

	pub(crate) fn take_forced(&self) -> BTreeSet<NodeId> {
		std::mem::take(&mut *self.forced.borrow_mut())
	}

	pub(crate) fn end_batch(&self) {
		self.notified.borrow_mut().clear();
	}

	pub(crate) fn has_pending(&self) -> bool {
		!self.queued_cells.borrow().is_empty() || !self.forced.borrow().is_empty()
	}

	pub(crate) fn is_mounted(&self, node: NodeId) -> bool {
		self.topology.borrow().contains_key(&node)
	}

	pub(crate) fn parent_of(&self, node: NodeId) -> Option<NodeId> {
		self.topology.borrow().get(&node).copied().flatten()
	}

	pub(crate) fn mount(&self, node: NodeId, parent: Option<NodeId>) {
		self.topology.borrow_mut().insert(node, parent);
	}

	pub(crate) fn unmount(&self, node: NodeId) {
		self.topology.borrow_mut().remove(&node);
		self.listeners.borrow_mut().remove(&node);
		self.forced.borrow_mut().remove(&node);
	}

	pub(crate) fn add_listener(&self, node: NodeId, callback: InvalidateCallback) {
		self.listeners
			.borrow_mut()
			.entry(node)
			.or_default()
			.push(callback);
	}

	/// Reports `node` to every listener registered on it or an ancestor.
	fn notify(&self, node: NodeId) {
		if !self.notified.borrow_mut().insert(node) {
			return;
		}

		let mut callbacks = Vec::new();
		{
			let listeners = self.listeners.borrow();
			let mut cursor = Some(node);
			while let Some(current) = cursor {
				if let Some(registered) = listeners.get(&current) {
					callbacks.extend(registered.iter().cloned());
				}
				cursor = self.parent_of(current);
			}
		}

		// Listeners may write to other cells, so no borrow is held here.
		for callback in callbacks {
			callback(node);
		}
	}
}
