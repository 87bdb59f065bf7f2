//! Location sources.
//!
//! The router never owns "the" location. It reads and writes it through a
//! [`LocationSource`], which a host environment implements (a browser
//! history, a test harness, a CLI argument). [`MemoryHistory`] is the
//! in-process implementation with back/forward support.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// How a location change came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// A new history entry was pushed.
	Push,
	/// The current history entry was replaced.
	Replace,
	/// The user moved through existing entries (back/forward).
	Pop,
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
	/// Location path.
	pub path: String,
	/// Name of the route that matched when the entry was created.
	pub route_name: Option<String>,
}

impl HistoryState {
	/// Creates an entry for `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			route_name: None,
		}
	}

	/// Sets the matched route name.
	pub fn with_route_name(mut self, name: Option<&str>) -> Self {
		self.route_name = name.map(str::to_string);
		self
	}
}

/// Callback invoked after the location changed.
///
/// Returning `false` removes the listener.
pub type LocationListener = Box<dyn Fn(&HistoryState, NavigationType) -> bool>;

/// Source of the current location.
pub trait LocationSource {
	/// Returns the current path.
	fn current_location(&self) -> String;

	/// Moves to `state` and notifies listeners.
	fn set_location(&self, state: HistoryState, navigation: NavigationType) -> Result<(), String>;

	/// Registers `listener` for location changes.
	fn subscribe(&self, listener: LocationListener);

	/// Moves one entry back. Returns `false` if there is none.
	fn back(&self) -> bool {
		false
	}

	/// Moves one entry forward. Returns `false` if there is none.
	fn forward(&self) -> bool {
		false
	}
}

/// In-memory history stack.
pub struct MemoryHistory {
	entries: RefCell<Vec<HistoryState>>,
	index: Cell<usize>,
	listeners: RefCell<Vec<LocationListener>>,
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &self.entries.borrow())
			.field("index", &self.index.get())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![HistoryState::new(initial)]),
			index: Cell::new(0),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// Creates a shared history, ready to hand to a router.
	pub fn shared(initial: impl Into<String>) -> Rc<Self> {
		Rc::new(Self::new(initial))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Always `false`: a history has at least its initial entry.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Returns the current entry.
	pub fn current(&self) -> HistoryState {
		let entries = self.entries.borrow();
		entries[self.index.get()].clone()
	}

	fn notify(&self, navigation: NavigationType) {
		let state = self.current();
		// Listeners may subscribe again while they run.
		let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
		let mut kept: Vec<LocationListener> = listeners
			.into_iter()
			.filter(|listener| listener(&state, navigation))
			.collect();
		let mut current = self.listeners.borrow_mut();
		kept.append(&mut current);
		*current = kept;
	}

	fn step(&self, forward: bool) -> bool {
		let index = self.index.get();
		let target = if forward {
			index + 1
		} else {
			match index.checked_sub(1) {
				Some(target) => target,
				None => return false,
			}
		};
		if target >= self.len() {
			return false;
		}
		self.index.set(target);
		tracing::debug!(path = %self.current().path, "history moved");
		self.notify(NavigationType::Pop);
		true
	}
}

impl LocationSource for MemoryHistory {
	fn current_location(&self) -> String {
		self.current().path
	}

	fn set_location(&self, state: HistoryState, navigation: NavigationType) -> Result<(), String> {
		{
			let mut entries = self.entries.borrow_mut();
			let index = self.index.get();
			match navigation {
				NavigationType::Push => {
					entries.truncate(index + 1);
					entries.push(state);
					self.index.set(index + 1);
				}
				NavigationType::Replace => entries[index] = state,
				NavigationType::Pop => {
					return Err("pop navigation goes through back/forward".to_string());
				}
			}
		}
		self.notify(navigation);
		Ok(())
	}

	fn subscribe(&self, listener: LocationListener) {
		self.listeners.borrow_mut().push(listener);
	}

	fn back(&self) -> bool {
		self.step(false)
	}

	fn forward(&self) -> bool {
		self.step(true)
	}
}
