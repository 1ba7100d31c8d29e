//! Domain types and backend JSON shapes.
//!
//! The backend's relationship contract is asymmetric on purpose: reads
//! deliver `fromnode`/`tonode`, writes expect `fromNode`/`toNode`. Both
//! shapes are kept here, side by side, so neither can drift.

use serde::{Deserialize, Serialize};

/// A graph node as the backend stores it.
///
/// The read and write shapes are identical. Submissions carry a
/// provisional client-generated id (current timestamp) which the backend
/// replaces with its own on creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// Unique identifier within the graph.
	pub id: i64,
	/// Display name.
	pub name: String,
	/// Free-form category tag, e.g. "person" or "company".
	#[serde(rename = "type")]
	pub node_type: String,
}

/// A directed relationship between two nodes, as `GET /graph` returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
	/// Unique identifier within the graph.
	pub id: i64,
	/// Source node id.
	pub fromnode: i64,
	/// Target node id.
	pub tonode: i64,
	/// Human-readable edge label.
	pub relationship: String,
}

/// The write shape for `POST /relationships`.
///
/// Field casing deliberately differs from [`Relationship`]; the backend
/// accepts camelCase endpoints on write and answers lowercase on read.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRelationship {
	/// Provisional client-generated id.
	pub id: i64,
	/// Source node id.
	#[serde(rename = "fromNode")]
	pub from_node: i64,
	/// Target node id.
	#[serde(rename = "toNode")]
	pub to_node: i64,
	/// Human-readable edge label.
	pub relationship: String,
}

/// Full graph snapshot returned by `GET /graph`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphResponse {
	pub nodes: Vec<Node>,
	pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn node_round_trips_the_type_field_name() {
		let node: Node =
			serde_json::from_value(json!({ "id": 1, "name": "A", "type": "person" })).unwrap();
		assert_eq!(node.node_type, "person");

		let value = serde_json::to_value(&node).unwrap();
		assert_eq!(value, json!({ "id": 1, "name": "A", "type": "person" }));
	}

	#[test]
	fn relationship_reads_lowercase_endpoints() {
		let rel: Relationship = serde_json::from_value(json!({
			"id": 1, "fromnode": 1, "tonode": 2, "relationship": "works_at"
		}))
		.unwrap();
		assert_eq!(rel.fromnode, 1);
		assert_eq!(rel.tonode, 2);
		assert_eq!(rel.relationship, "works_at");
	}

	#[test]
	fn new_relationship_writes_camel_case_endpoints() {
		let rel = NewRelationship {
			id: 7,
			from_node: 1,
			to_node: 2,
			relationship: "works_at".into(),
		};
		let value = serde_json::to_value(&rel).unwrap();
		assert_eq!(
			value,
			json!({ "id": 7, "fromNode": 1, "toNode": 2, "relationship": "works_at" })
		);
	}

	#[test]
	fn graph_response_parses_both_sets() {
		let graph: GraphResponse = serde_json::from_value(json!({
			"nodes": [
				{ "id": 1, "name": "A", "type": "person" },
				{ "id": 2, "name": "B", "type": "company" }
			],
			"relationships": [
				{ "id": 1, "fromnode": 1, "tonode": 2, "relationship": "works_at" }
			]
		}))
		.unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.relationships.len(), 1);
	}
}
