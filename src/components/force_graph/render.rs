//! Canvas rendering for the graph scene.
//!
//! Every frame redraws edges, edge labels, node circles, and node labels
//! straight from the current simulated positions. Nothing here touches the
//! force structure; per-frame cost is attribute writes and text placement
//! only.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::GraphState;
use super::theme::{Color, Theme};

/// Node marker radius, fixed for every node.
pub const NODE_RADIUS: f64 = 12.0;
/// Vertical lift of an edge label above the segment midpoint.
const EDGE_LABEL_OFFSET: f64 = 10.0;

/// Wipe the canvas down to the theme background.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);
}

/// Renders the complete scene for the current frame.
pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	clear(ctx, state.width, state.height, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, theme);
	draw_edge_labels(state, ctx, theme);
	draw_nodes(state, ctx);
	draw_node_labels(state, ctx, theme);

	ctx.restore();
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_stroke_style_str(&theme.edge.to_css());
	ctx.set_line_width(theme.edge_width);
	for link in &state.links {
		let source = &state.sim.nodes()[link.source];
		let target = &state.sim.nodes()[link.target];
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();
	}
}

fn draw_edge_labels(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.edge_label.to_css());
	ctx.set_font(theme.label_font);
	ctx.set_text_align("center");
	for link in &state.links {
		let source = &state.sim.nodes()[link.source];
		let target = &state.sim.nodes()[link.target];
		let mid_x = (source.x + target.x) / 2.0;
		let mid_y = (source.y + target.y) / 2.0;
		let _ = ctx.fill_text(&link.label, mid_x, mid_y - EDGE_LABEL_OFFSET);
	}
	ctx.set_text_align("start");
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	for (node, meta) in state.sim.nodes().iter().zip(&state.meta) {
		fill_node_circle(ctx, node.x, node.y, &meta.color);
	}
}

/// Fixed-radius circle with a soft radial gradient fill.
fn fill_node_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, color: &str) {
	let base = parse_color(color);
	let gradient = ctx.create_radial_gradient(
		x - NODE_RADIUS * 0.3,
		y - NODE_RADIUS * 0.3,
		0.0,
		x,
		y,
		NODE_RADIUS,
	);
	ctx.begin_path();
	let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
	match gradient {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &base.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base.to_css());
			let _ = gradient.add_color_stop(1.0, &base.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(color),
	}
	ctx.fill();
}

fn draw_node_labels(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.node_label.to_css());
	ctx.set_font(theme.label_font);
	for (node, meta) in state.sim.nodes().iter().zip(&state.meta) {
		let _ = ctx.fill_text(&meta.label, node.x + NODE_RADIUS + 4.0, node.y + 4.0);
	}
}

/// Parses a `#RRGGBB` CSS color string back into a [`Color`].
fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else {
		Color::rgb(128, 128, 128)
	}
}
