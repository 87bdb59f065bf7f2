//! Context slots: tree-scoped bindings.
//!
//! A [`ContextSlot`] is a typed key. A provider view binds a value to the
//! slot for its children, and any descendant component reads the nearest
//! binding through [`Scope::consume`](crate::Scope::consume) without the
//! value being passed through the components in between.
//!
//! Bindings are kept in a persistent list ([`ContextEnv`]) that the runtime
//! stores next to every node, so re-evaluating a subtree sees exactly the
//! bindings it saw when it was first mounted.
//!
//! ## Example
//!
//! ```ignore
//! use arbor_core::{ContextSlot, View};
//! use std::sync::LazyLock;
//!
//! static THEME: LazyLock<ContextSlot<String>> =
//!     LazyLock::new(|| ContextSlot::with_default("Theme", || "light".to_string()));
//!
//! fn app() -> View {
//!     THEME.provide("dark".to_string(), [View::component("Toolbar", |cx| {
//!         let theme = cx.consume(&THEME)?;
//!         Ok(View::text(format!("theme: {}", theme)))
//!     })])
//! }
//! ```

use crate::node::NodeId;
use crate::view::{IntoView, ProviderView, View};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a declared context slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

/// A typed context key.
///
/// Slots are cheap to copy and can be declared in a `static` through
/// `LazyLock`. The optional default is a function so that the slot itself
/// stays `Send + Sync` whatever `T` is.
pub struct ContextSlot<T> {
	id: SlotId,
	name: &'static str,
	default: Option<fn() -> T>,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ContextSlot<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for ContextSlot<T> {}

impl<T> fmt::Debug for ContextSlot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ContextSlot")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("has_default", &self.default.is_some())
			.finish()
	}
}

impl<T: Clone + 'static> ContextSlot<T> {
	/// Declares a slot without a default value.
	pub fn new(name: &'static str) -> Self {
		Self {
			id: SlotId(NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed)),
			name,
			default: None,
			_marker: PhantomData,
		}
	}

	/// Declares a slot whose consumers fall back to `default` when no
	/// provider encloses them.
	pub fn with_default(name: &'static str, default: fn() -> T) -> Self {
		Self {
			default: Some(default),
			..Self::new(name)
		}
	}

	/// Returns the slot identity.
	pub fn id(&self) -> SlotId {
		self.id
	}

	/// Returns the debug name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the default value, if one was declared.
	pub fn default_value(&self) -> Option<T> {
		self.default.map(|f| f())
	}

	/// Binds `value` for `children` and everything below them.
	///
	/// The component that returns this view does not see the binding itself.
	pub fn provide(&self, value: T, children: impl IntoIterator<Item = impl IntoView>) -> View {
		View::Provider(ProviderView {
			slot: self.id,
			slot_name: self.name,
			value: Rc::new(value),
			children: children.into_iter().map(|c| c.into_view()).collect(),
		})
	}
}

/// One binding in the persistent list.
struct Binding {
	slot: SlotId,
	value: Rc<dyn Any>,
	provider: NodeId,
	next: Option<Rc<Binding>>,
}

/// Persistent list of bindings visible at a point in the tree.
///
/// Cloning is O(1); binding a new value shares the tail with the parent
/// environment.
#[derive(Clone, Default)]
pub(crate) struct ContextEnv {
	head: Option<Rc<Binding>>,
}

impl fmt::Debug for ContextEnv {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut list = f.debug_list();
		let mut cursor = self.head.as_deref();
		while let Some(binding) = cursor {
			list.entry(&(binding.slot, binding.provider));
			cursor = binding.next.as_deref();
		}
		list.finish()
	}
}

impl ContextEnv {
	/// Returns a new environment with `value` bound on top of `self`.
	pub(crate) fn bind(&self, slot: SlotId, value: Rc<dyn Any>, provider: NodeId) -> Self {
		Self {
			head: Some(Rc::new(Binding {
				slot,
				value,
				provider,
				next: self.head.clone(),
			})),
		}
	}

	/// Finds the innermost binding for `slot`.
	pub(crate) fn lookup(&self, slot: SlotId) -> Option<(&Rc<dyn Any>, NodeId)> {
		let mut cursor = self.head.as_deref();
		while let Some(binding) = cursor {
			if binding.slot == slot {
				return Some((&binding.value, binding.provider));
			}
			cursor = binding.next.as_deref();
		}
		None
	}
}
