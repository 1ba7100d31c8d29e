//! Layout engine state: the simulation plus interaction tracking.
//!
//! A [`GraphState`] is rebuilt from scratch whenever the input snapshot
//! changes: relationships are re-resolved against the new node set, the
//! previous state's positions are carried over by node id, and a fresh
//! simulation restarts. No incremental diffing; graphs in scope are small
//! and updates infrequent.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::simulation::{DRAG_ALPHA_TARGET, SimNode, Simulation};
use super::theme::Theme;
use super::types::{LayoutInput, Link, resolve_links};

/// Hit-test radius around a node center, in graph units.
pub const HIT_RADIUS: f64 = 14.0;

/// Display metadata per simulation node, resolved once at build time.
#[derive(Clone, Debug)]
pub struct NodeMeta {
	/// Text drawn beside the node.
	pub label: String,
	/// CSS fill color derived from the node's type tag.
	pub color: String,
}

/// Pan and zoom transform applied to the whole scene.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor, clamped to 0.1..10.0 by the wheel handler.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

/// Tracks an in-progress node drag gesture.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything the canvas needs each frame: the running simulation, the
/// resolved scene, and interaction state.
pub struct GraphState {
	pub sim: Simulation,
	pub links: Vec<Link>,
	pub meta: Vec<NodeMeta>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl GraphState {
	/// Build the engine state for an input snapshot.
	///
	/// Returns `None` when either set is empty: nothing is rendered and no
	/// simulation is set up (explicit guard, not an error). Prior node
	/// positions are carried over from `prev` by id so a data update does
	/// not scatter the arrangement.
	pub fn new(
		input: &LayoutInput,
		width: f64,
		height: f64,
		theme: &Theme,
		prev: Option<&GraphState>,
	) -> Option<Self> {
		if input.nodes.is_empty() || input.relationships.is_empty() {
			return None;
		}

		let links = resolve_links(&input.nodes, &input.relationships);

		let carried: HashMap<i64, (f64, f64)> = prev
			.map(|p| {
				p.sim
					.nodes()
					.iter()
					.map(|n| (n.id, (n.x, n.y)))
					.collect()
			})
			.unwrap_or_default();

		let center = (width / 2.0, height / 2.0);
		let count = input.nodes.len();
		let sim_nodes = input
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let (x, y) = carried.get(&node.id).copied().unwrap_or_else(|| {
					// New nodes start on a circle around the center.
					let angle = i as f64 * 2.0 * PI / count as f64;
					(center.0 + 100.0 * angle.cos(), center.1 + 100.0 * angle.sin())
				});
				SimNode::new(node.id, x, y)
			})
			.collect();

		let meta = input
			.nodes
			.iter()
			.map(|node| NodeMeta {
				label: node.name.clone(),
				color: theme.color_for_type(&node.node_type).to_css(),
			})
			.collect();

		Some(Self {
			sim: Simulation::new(sim_nodes, &links, center),
			links,
			meta,
			transform: prev.map(|p| p.transform.clone()).unwrap_or_default(),
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
		})
	}

	/// Advance the simulation one frame. No-op once settled.
	pub fn tick(&mut self) -> bool {
		self.sim.tick()
	}

	/// Map screen coordinates through the pan/zoom transform.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under the given screen position, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		for (i, node) in self.sim.nodes().iter().enumerate() {
			let (dx, dy) = (node.x - gx, node.y - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(i);
			}
		}
		found
	}

	/// Begin dragging the node under the pointer, if there is one.
	/// Returns whether a drag gesture started.
	pub fn drag_start(&mut self, sx: f64, sy: f64) -> bool {
		let Some(idx) = self.node_at_position(sx, sy) else {
			return false;
		};
		// Reheat only when this event finds no gesture already keeping
		// the simulation hot; the check is against the gesture state the
		// event observes, never a shared counter.
		if !self.drag.active {
			self.sim.set_alpha_target(DRAG_ALPHA_TARGET);
		}
		self.drag.active = true;
		self.drag.node = Some(idx);
		let node = &mut self.sim.nodes_mut()[idx];
		let (px, py) = (node.x, node.y);
		node.pin(px, py);
		true
	}

	/// Track the pointer with the dragged node's pin.
	pub fn drag_move(&mut self, sx: f64, sy: f64) {
		if !self.drag.active {
			return;
		}
		let (gx, gy) = self.screen_to_graph(sx, sy);
		if let Some(idx) = self.drag.node {
			self.sim.nodes_mut()[idx].pin(gx, gy);
		}
	}

	/// End the drag gesture: release the pin so the node rejoins free
	/// simulation from where it was dropped, and let the layout cool if
	/// no other gesture is keeping it hot.
	pub fn drag_end(&mut self) {
		if !self.drag.active {
			return;
		}
		if let Some(idx) = self.drag.node.take() {
			self.sim.nodes_mut()[idx].unpin();
		}
		self.drag.active = false;
		// The ending gesture was the only one; nothing is left keeping
		// the layout hot.
		self.sim.set_alpha_target(0.0);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::types::{Node, Relationship};

	fn node(id: i64, name: &str, node_type: &str) -> Node {
		Node {
			id,
			name: name.into(),
			node_type: node_type.into(),
		}
	}

	fn rel(id: i64, from: i64, to: i64, label: &str) -> Relationship {
		Relationship {
			id,
			fromnode: from,
			tonode: to,
			relationship: label.into(),
		}
	}

	fn sample_input() -> LayoutInput {
		LayoutInput {
			nodes: vec![node(1, "A", "person"), node(2, "B", "company")],
			relationships: vec![rel(1, 1, 2, "works_at")],
		}
	}

	fn build(input: &LayoutInput) -> GraphState {
		GraphState::new(input, 1000.0, 800.0, &Theme::default(), None).unwrap()
	}

	#[test]
	fn empty_input_builds_no_state() {
		let theme = Theme::default();
		let no_nodes = LayoutInput {
			nodes: vec![],
			relationships: vec![rel(1, 1, 2, "works_at")],
		};
		let no_rels = LayoutInput {
			nodes: vec![node(1, "A", "person")],
			relationships: vec![],
		};
		assert!(GraphState::new(&no_nodes, 1000.0, 800.0, &theme, None).is_none());
		assert!(GraphState::new(&no_rels, 1000.0, 800.0, &theme, None).is_none());
	}

	#[test]
	fn sample_graph_resolves_one_labeled_link_and_two_node_labels() {
		let state = build(&sample_input());
		assert_eq!(state.links.len(), 1);
		assert_eq!(state.links[0].label, "works_at");

		let labels: Vec<&str> = state.meta.iter().map(|m| m.label.as_str()).collect();
		assert_eq!(labels, vec!["A", "B"]);
	}

	#[test]
	fn dangling_relationship_renders_no_link() {
		let mut input = sample_input();
		input.relationships = vec![rel(1, 1, 99, "works_at")];
		let state = build(&input);
		assert_eq!(state.links.len(), 0);
		// Nodes themselves still render.
		assert_eq!(state.meta.len(), 2);
	}

	#[test]
	fn rebuild_carries_positions_by_id() {
		let mut first = build(&sample_input());
		first.sim.nodes_mut()[0].x = 123.0;
		first.sim.nodes_mut()[0].y = 456.0;

		// Same snapshot plus one more node arrives; node 1 keeps its spot.
		let mut input = sample_input();
		input.nodes.push(node(3, "C", "ngo"));
		input.relationships.push(rel(2, 2, 3, "funds"));
		let second =
			GraphState::new(&input, 1000.0, 800.0, &Theme::default(), Some(&first)).unwrap();

		let carried = &second.sim.nodes()[0];
		assert_eq!((carried.x, carried.y), (123.0, 456.0));
		// The new node got a seeded position instead.
		let seeded = &second.sim.nodes()[2];
		assert!(seeded.x != 0.0 || seeded.y != 0.0);
	}

	#[test]
	fn drag_pins_then_releases_the_node() {
		let mut state = build(&sample_input());
		let (nx, ny) = (state.sim.nodes()[0].x, state.sim.nodes()[0].y);

		assert!(state.drag_start(nx, ny));
		assert!(state.drag.active);
		assert_eq!(state.sim.nodes()[0].fx, Some(nx));

		state.drag_move(nx + 40.0, ny + 10.0);
		assert_eq!(state.sim.nodes()[0].fx, Some(nx + 40.0));
		assert_eq!(state.sim.nodes()[0].fy, Some(ny + 10.0));

		state.drag_end();
		assert!(!state.drag.active);
		assert_eq!(state.sim.nodes()[0].fx, None);
		assert_eq!(state.sim.nodes()[0].fy, None);
	}

	#[test]
	fn drag_start_reheats_a_settled_simulation() {
		let mut state = build(&sample_input());
		while state.tick() {}
		assert!(!state.sim.active());

		let (nx, ny) = (state.sim.nodes()[0].x, state.sim.nodes()[0].y);
		assert!(state.drag_start(nx, ny));
		assert!(state.sim.active());

		state.drag_end();
		while state.tick() {}
		assert!(!state.sim.active());
	}

	#[test]
	fn drag_start_misses_empty_space() {
		let mut state = build(&sample_input());
		assert!(!state.drag_start(-5000.0, -5000.0));
		assert!(!state.drag.active);
	}
}
