//! The graph store: canonical owner of the current node/relationship sets.
//!
//! State lives in two [`RwSignal`]s so every view reading them is notified
//! synchronously when a mutation lands. Inserts de-duplicate by identity
//! and skip notification entirely when they turn out to be no-ops, so a
//! duplicate submission never restarts the layout.
//!
//! The store is an explicitly owned value handed to the component tree via
//! context, not a global singleton.

use leptos::prelude::*;

use crate::types::{Node, Relationship};

/// Handle to the shared graph state. `Copy`, so event handlers and async
/// tasks can capture it freely. Obtain it with [`use_graph_store`].
#[derive(Clone, Copy)]
pub struct GraphStore {
	/// Current node set, unique by id.
	pub nodes: RwSignal<Vec<Node>>,
	/// Current relationship set, unique by directed (fromnode, tonode).
	pub relationships: RwSignal<Vec<Relationship>>,
}

impl GraphStore {
	/// An empty store.
	pub fn new() -> Self {
		Self {
			nodes: RwSignal::new(Vec::new()),
			relationships: RwSignal::new(Vec::new()),
		}
	}

	/// Replace the whole snapshot. No merging with previous contents.
	pub fn set_graph_data(&self, nodes: Vec<Node>, relationships: Vec<Relationship>) {
		self.nodes.set(nodes);
		self.relationships.set(relationships);
	}

	/// Insert a node unless one with the same id already exists. The
	/// duplicate case is a silent no-op, not an error.
	pub fn add_node(&self, node: Node) {
		self.nodes.maybe_update(|nodes| insert_node(nodes, node));
	}

	/// Insert a relationship unless the same directed (fromnode, tonode)
	/// pair already exists. The duplicate case is a silent no-op.
	pub fn add_relationship(&self, rel: Relationship) {
		self.relationships
			.maybe_update(|rels| insert_relationship(rels, rel));
	}
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new()
	}
}

/// Create a fresh store and provide it to the component tree.
pub fn provide_graph_store() -> GraphStore {
	let store = GraphStore::new();
	provide_context(store);
	store
}

/// Fetch the store provided by [`provide_graph_store`] higher in the tree.
pub fn use_graph_store() -> GraphStore {
	expect_context::<GraphStore>()
}

/// Push `node` unless its id is taken. Returns whether the set changed.
fn insert_node(nodes: &mut Vec<Node>, node: Node) -> bool {
	if nodes.iter().any(|n| n.id == node.id) {
		return false;
	}
	nodes.push(node);
	true
}

/// Push `rel` unless its (fromnode, tonode) pair is taken. The check is
/// directed: (a, b) and (b, a) are distinct relationships.
fn insert_relationship(rels: &mut Vec<Relationship>, rel: Relationship) -> bool {
	if rels
		.iter()
		.any(|r| r.fromnode == rel.fromnode && r.tonode == rel.tonode)
	{
		return false;
	}
	rels.push(rel);
	true
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn node(id: i64, name: &str) -> Node {
		Node {
			id,
			name: name.into(),
			node_type: "person".into(),
		}
	}

	fn rel(id: i64, from: i64, to: i64) -> Relationship {
		Relationship {
			id,
			fromnode: from,
			tonode: to,
			relationship: "knows".into(),
		}
	}

	#[test]
	fn insert_node_is_idempotent_by_id() {
		let mut nodes = vec![node(1, "A")];

		assert!(!insert_node(&mut nodes, node(1, "A again")));
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].name, "A");

		assert!(insert_node(&mut nodes, node(2, "B")));
		assert_eq!(nodes.len(), 2);
	}

	#[test]
	fn insert_relationship_is_idempotent_by_endpoint_pair() {
		let mut rels = vec![rel(1, 1, 2)];

		assert!(!insert_relationship(&mut rels, rel(99, 1, 2)));
		assert_eq!(rels.len(), 1);
		assert_eq!(rels[0].id, 1);
	}

	#[test]
	fn insert_relationship_keeps_direction_distinct() {
		let mut rels = vec![rel(1, 1, 2)];

		// The reversed pair is a different relationship.
		assert!(insert_relationship(&mut rels, rel(2, 2, 1)));
		assert_eq!(rels.len(), 2);
	}
}
