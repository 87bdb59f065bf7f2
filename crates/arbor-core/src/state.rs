//! State cells: persistent values local to one view node.
//!
//! A [`StateCell`] is a handle to a slot in the runtime's cell arena. Reads
//! return the value committed at the start of the current pass. Writes are
//! queued and only become visible in the next pass, where they are applied in
//! the order they were issued:
//!
//! ```ignore
//! let count = cx.use_state(|| 0)?;
//! count.update(|n| n + 1);
//! count.update(|n| n + 1);
//! count.update(|n| n + 1);
//! assert_eq!(count.read(), 0); // still the committed value
//! // next pass: the component sees 3 and is evaluated once
//! ```

use crate::node::NodeId;
use crate::scheduler::Scheduler;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Updater<T> = Box<dyn FnOnce(&T) -> T>;

/// Type-erased view of a cell, as stored in the arena.
pub(crate) trait AnyCell {
	/// Node that owns the cell.
	fn owner(&self) -> NodeId;

	/// Applies queued writes. Returns whether the value changed.
	fn commit(&self) -> bool;

	/// Marks the cell destroyed; later writes are dropped.
	fn retire(&self);

	fn is_alive(&self) -> bool;

	fn type_name(&self) -> &'static str;

	fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

pub(crate) struct CellSlot<T> {
	owner: NodeId,
	value: RefCell<T>,
	pending: RefCell<Vec<Updater<T>>>,
	alive: Cell<bool>,
}

impl<T> CellSlot<T> {
	pub(crate) fn new(owner: NodeId, value: T) -> Self {
		Self {
			owner,
			value: RefCell::new(value),
			pending: RefCell::new(Vec::new()),
			alive: Cell::new(true),
		}
	}
}

impl<T: Clone + PartialEq + 'static> AnyCell for CellSlot<T> {
	fn owner(&self) -> NodeId {
		self.owner
	}

	fn commit(&self) -> bool {
		let updates = std::mem::take(&mut *self.pending.borrow_mut());
		if updates.is_empty() {
			return false;
		}

		let mut next = self.value.borrow().clone();
		for update in updates {
			next = update(&next);
		}

		let mut current = self.value.borrow_mut();
		if *current == next {
			return false;
		}
		*current = next;
		true
	}

	fn retire(&self) {
		self.alive.set(false);
		self.pending.borrow_mut().clear();
	}

	fn is_alive(&self) -> bool {
		self.alive.get()
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
		self
	}
}

/// Handle to a state cell owned by a view node.
///
/// Handles are cheap to clone and may be moved into event handlers. Writes
/// through a handle whose node has been unmounted are ignored.
pub struct StateCell<T: 'static> {
	slot: Rc<CellSlot<T>>,
	scheduler: Weak<Scheduler>,
}

impl<T: 'static> Clone for StateCell<T> {
	fn clone(&self) -> Self {
		Self {
			slot: self.slot.clone(),
			scheduler: self.scheduler.clone(),
		}
	}
}

impl<T: Clone + PartialEq + 'static> StateCell<T> {
	pub(crate) fn new(slot: Rc<CellSlot<T>>, scheduler: Weak<Scheduler>) -> Self {
		Self { slot, scheduler }
	}

	/// Returns the committed value.
	pub fn read(&self) -> T {
		self.slot.value.borrow().clone()
	}

	/// Borrows the committed value.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.slot.value.borrow())
	}

	/// Queues `value` as the next value.
	pub fn replace(&self, value: T) {
		self.push(Box::new(move |_| value));
	}

	/// Queues a functional update applied to the latest queued value.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&T) -> T + 'static,
	{
		self.push(Box::new(f));
	}

	/// Returns the owning node.
	pub fn owner(&self) -> NodeId {
		self.slot.owner
	}

	/// Returns whether the owning node is still mounted.
	pub fn is_alive(&self) -> bool {
		self.slot.alive.get() && self.scheduler.strong_count() > 0
	}

	fn push(&self, update: Updater<T>) {
		if !self.slot.alive.get() {
			tracing::warn!(node = %self.slot.owner, "write to state cell of unmounted node ignored");
			return;
		}
		let Some(scheduler) = self.scheduler.upgrade() else {
			tracing::warn!(node = %self.slot.owner, "write to state cell after runtime was dropped");
			return;
		};

		let first_write = {
			let mut pending = self.slot.pending.borrow_mut();
			pending.push(update);
			pending.len() == 1
		};
		if first_write {
			scheduler.queue_cell(self.slot.clone());
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for StateCell<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StateCell")
			.field("owner", &self.slot.owner)
			.field("value", &*self.slot.value.borrow())
			.field("pending", &self.slot.pending.borrow().len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn cell<T: Clone + PartialEq + 'static>(
		value: T,
	) -> (StateCell<T>, Rc<CellSlot<T>>, Rc<Scheduler>) {
		let scheduler = Rc::new(Scheduler::default());
		let owner = NodeId::new();
		scheduler.mount(owner, None);
		let slot = Rc::new(CellSlot::new(owner, value));
		(
			StateCell::new(slot.clone(), Rc::downgrade(&scheduler)),
			slot,
			scheduler,
		)
	}

	#[rstest]
	fn test_write_is_invisible_until_commit() {
		let (count, slot, _scheduler) = cell(0);
		count.replace(5);
		assert_eq!(count.read(), 0);

		assert!(slot.commit());
		assert_eq!(count.read(), 5);
	}

	#[rstest]
	fn test_updates_apply_in_issue_order() {
		let (count, slot, _scheduler) = cell(0);
		count.update(|n| n + 1);
		count.update(|n| n * 10);
		count.update(|n| n + 2);

		assert!(slot.commit());
		assert_eq!(count.read(), 12);
	}

	#[rstest]
	fn test_equal_value_is_not_a_change() {
		let (label, slot, _scheduler) = cell("same".to_string());
		label.replace("same".to_string());
		assert!(!slot.commit());
	}

	#[rstest]
	fn test_cell_is_queued_once_per_batch() {
		let (count, _slot, scheduler) = cell(0);
		count.replace(1);
		count.replace(2);
		assert_eq!(scheduler.take_queued_cells().len(), 1);
	}

	#[rstest]
	fn test_retired_cell_drops_writes() {
		let (count, slot, scheduler) = cell(1);
		slot.retire();
		count.replace(9);

		assert!(!count.is_alive());
		assert!(!scheduler.has_pending());
		assert!(!slot.commit());
		assert_eq!(count.read(), 1);
	}

	#[rstest]
	fn test_write_after_runtime_dropped() {
		let (count, _slot, scheduler) = cell(1);
		drop(scheduler);
		count.replace(2);
		assert!(!count.is_alive());
	}
}
