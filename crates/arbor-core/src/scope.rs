//! Evaluation scope handed to component render functions.

use crate::context::{ContextEnv, ContextSlot, SlotId};
use crate::error::{Result, ViewError};
use crate::node::NodeId;
use crate::scheduler::Scheduler;
use crate::state::{AnyCell, CellSlot, StateCell};
use std::any::Any;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Per-evaluation access to a node's state cells and the context bindings
/// visible at its position.
///
/// Cells are addressed by request order: the n-th `use_state` call on every
/// evaluation returns the n-th cell of the node.
pub struct Scope<'a> {
	node: NodeId,
	name: &'static str,
	first: bool,
	cursor: usize,
	cells: &'a mut Vec<Rc<dyn AnyCell>>,
	env: &'a ContextEnv,
	root_bindings: &'a HashMap<SlotId, Rc<dyn Any>>,
	root_reads: &'a mut Vec<SlotId>,
	scheduler: &'a Rc<Scheduler>,
}

impl<'a> Scope<'a> {
	#[allow(clippy::too_many_arguments)] // Scope is only built by the runtime
	pub(crate) fn new(
		node: NodeId,
		name: &'static str,
		first: bool,
		cells: &'a mut Vec<Rc<dyn AnyCell>>,
		env: &'a ContextEnv,
		root_bindings: &'a HashMap<SlotId, Rc<dyn Any>>,
		root_reads: &'a mut Vec<SlotId>,
		scheduler: &'a Rc<Scheduler>,
	) -> Self {
		Self {
			node,
			name,
			first,
			cursor: 0,
			cells,
			env,
			root_bindings,
			root_reads,
			scheduler,
		}
	}

	/// Returns the id of the node being evaluated.
	pub fn node_id(&self) -> NodeId {
		self.node
	}

	/// Returns the component name of the node being evaluated.
	pub fn component_name(&self) -> &'static str {
		self.name
	}

	/// Returns whether this is the node's first evaluation since it mounted.
	pub fn is_first_evaluation(&self) -> bool {
		self.first
	}

	/// Returns the node's next state cell, creating it with `init` on the
	/// first evaluation.
	///
	/// # Errors
	///
	/// [`ViewError::StateTypeMismatch`] if the cell at this position was
	/// created with another type, which happens when cells are requested
	/// conditionally or in a different order.
	pub fn use_state<T, F>(&mut self, init: F) -> Result<StateCell<T>>
	where
		T: Clone + PartialEq + 'static,
		F: FnOnce() -> T,
	{
		let index = self.cursor;
		self.cursor += 1;

		let slot = match self.cells.get(index) {
			Some(existing) => existing.clone().into_any().downcast::<CellSlot<T>>().map_err(|_| {
				ViewError::StateTypeMismatch {
					component: self.name,
					index,
					expected: std::any::type_name::<T>(),
				}
			})?,
			None => {
				let slot = Rc::new(CellSlot::new(self.node, init()));
				self.cells.push(slot.clone());
				tracing::trace!(node = %self.node, index, "state cell created");
				slot
			}
		};

		Ok(StateCell::new(slot, Rc::downgrade(self.scheduler)))
	}

	/// Reads the nearest binding of `slot`.
	///
	/// Lookup order: enclosing providers (innermost first), runtime root
	/// bindings, the slot default.
	///
	/// # Errors
	///
	/// [`ViewError::UnboundContext`] if none of those exist.
	pub fn consume<T: Clone + 'static>(&mut self, slot: &ContextSlot<T>) -> Result<T> {
		if let Some((value, _provider)) = self.env.lookup(slot.id()) {
			return downcast_context(value, slot);
		}

		// Root bindings can change between passes; remember who read them.
		self.root_reads.push(slot.id());
		if let Some(value) = self.root_bindings.get(&slot.id()) {
			return downcast_context(value, slot);
		}

		slot.default_value()
			.ok_or(ViewError::UnboundContext { slot: slot.name() })
	}

	/// Like [`consume`](Self::consume) but maps an unbound slot to `None`.
	pub fn try_consume<T: Clone + 'static>(&mut self, slot: &ContextSlot<T>) -> Result<Option<T>> {
		match self.consume(slot) {
			Ok(value) => Ok(Some(value)),
			Err(ViewError::UnboundContext { .. }) => Ok(None),
			Err(other) => Err(other),
		}
	}

	/// Returns a handle that schedules this node for re-evaluation.
	///
	/// Used to bridge external sources (such as a router location) into the
	/// runtime.
	pub fn invalidator(&self) -> Invalidator {
		Invalidator {
			node: self.node,
			scheduler: Rc::downgrade(self.scheduler),
		}
	}
}

fn downcast_context<T: Clone + 'static>(value: &Rc<dyn Any>, slot: &ContextSlot<T>) -> Result<T> {
	value
		.downcast_ref::<T>()
		.cloned()
		.ok_or(ViewError::ContextTypeMismatch { slot: slot.name() })
}

/// Schedules one node for re-evaluation from outside a pass.
#[derive(Clone)]
pub struct Invalidator {
	node: NodeId,
	scheduler: Weak<Scheduler>,
}

impl std::fmt::Debug for Invalidator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Invalidator")
			.field("node", &self.node)
			.field("live", &self.is_live())
			.finish()
	}
}

impl Invalidator {
	/// Schedules the node. Returns `false` once the node is gone, so callers
	/// can drop the subscription that owns this handle.
	pub fn invalidate(&self) -> bool {
		let Some(scheduler) = self.scheduler.upgrade() else {
			return false;
		};
		if !scheduler.is_mounted(self.node) {
			return false;
		}
		scheduler.force(self.node);
		true
	}

	/// Returns whether the node is still mounted.
	pub fn is_live(&self) -> bool {
		self.scheduler
			.upgrade()
			.is_some_and(|scheduler| scheduler.is_mounted(self.node))
	}

	/// Returns the target node.
	pub fn node_id(&self) -> NodeId {
		self.node
	}
}
