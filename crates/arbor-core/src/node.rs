//! Node identity.
//!
//! A view node is identified by where it sits in the tree: its parent, its
//! component name, and either an explicit key or its position among the
//! unkeyed components its parent produced. The runtime interns that
//! structural identity into a compact [`NodeId`].

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Compact identifier of a mounted view node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
	/// The synthetic node that owns the root view of a runtime.
	pub const ROOT: NodeId = NodeId(0);

	pub(crate) fn new() -> Self {
		Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Returns the raw numeric id.
	pub fn as_u64(self) -> u64 {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// How a child component is told apart from its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
	/// Position among the parent's unkeyed components, in declaration order.
	Index(usize),
	/// Explicit key supplied by the parent.
	Keyed(String),
}

impl fmt::Display for NodeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{}", index),
			Self::Keyed(key) => write!(f, "{:?}", key),
		}
	}
}

/// Structural identity of a child component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Identity {
	pub(crate) parent: NodeId,
	pub(crate) name: &'static str,
	pub(crate) key: NodeKey,
}
