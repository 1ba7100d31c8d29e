//! Input and resolved view-model types for the layout engine.

use crate::types::{Node, Relationship};

/// Reactive input to the graph canvas: the store snapshot as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutInput {
	pub nodes: Vec<Node>,
	pub relationships: Vec<Relationship>,
}

/// A relationship resolved to node indices, ready for simulation and
/// rendering. Relationships with a missing endpoint never reach this form.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	/// Index of the source node in the layout's node list.
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
	/// Text drawn at the link midpoint.
	pub label: String,
}

/// Resolve relationship endpoints against `nodes` by id.
///
/// A relationship referencing an id absent from the node set is silently
/// dropped: a designed filter, not a fault.
pub fn resolve_links(nodes: &[Node], relationships: &[Relationship]) -> Vec<Link> {
	relationships
		.iter()
		.filter_map(|rel| {
			let source = nodes.iter().position(|n| n.id == rel.fromnode)?;
			let target = nodes.iter().position(|n| n.id == rel.tonode)?;
			Some(Link {
				source,
				target,
				label: rel.relationship.clone(),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn nodes() -> Vec<Node> {
		vec![
			Node {
				id: 1,
				name: "A".into(),
				node_type: "person".into(),
			},
			Node {
				id: 2,
				name: "B".into(),
				node_type: "company".into(),
			},
		]
	}

	fn rel(from: i64, to: i64) -> Relationship {
		Relationship {
			id: 1,
			fromnode: from,
			tonode: to,
			relationship: "works_at".into(),
		}
	}

	#[test]
	fn resolves_endpoints_to_indices() {
		let links = resolve_links(&nodes(), &[rel(1, 2)]);
		assert_eq!(
			links,
			vec![Link {
				source: 0,
				target: 1,
				label: "works_at".into(),
			}]
		);
	}

	#[test]
	fn drops_links_with_missing_endpoints() {
		// Node 99 does not exist; neither direction survives.
		assert_eq!(resolve_links(&nodes(), &[rel(1, 99)]), vec![]);
		assert_eq!(resolve_links(&nodes(), &[rel(99, 2)]), vec![]);
	}

	#[test]
	fn keeps_resolvable_links_among_dropped_ones() {
		let links = resolve_links(&nodes(), &[rel(1, 99), rel(1, 2), rel(42, 2)]);
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].label, "works_at");
	}
}
