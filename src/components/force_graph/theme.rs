//! Visual styling for the graph scene.
//!
//! Node fills are keyed off the node's type tag: well-known tags get fixed
//! colors, everything else falls back to a palette slot picked by a stable
//! hash, so the same tag always renders the same color.

use std::collections::HashMap;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fallback palette for node types without a fixed color.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted, harmonious palette - slate blues and teals
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Fixed colors for the type tags the entry form offers.
pub fn default_type_colors() -> HashMap<String, Color> {
	[
		("person", Color::rgb(108, 142, 173)),
		("company", Color::rgb(100, 148, 160)),
		("ngo", Color::rgb(122, 153, 168)),
	]
	.into_iter()
	.map(|(k, v)| (k.to_string(), v))
	.collect()
}

/// Complete visual theme for the scene.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background.
	pub background: Color,
	/// Edge line color.
	pub edge: Color,
	/// Edge line width.
	pub edge_width: f64,
	/// Edge label text color.
	pub edge_label: Color,
	/// Node label text color.
	pub node_label: Color,
	/// Font for both label kinds.
	pub label_font: &'static str,
	/// Fallback palette for unknown type tags.
	pub palette: NodePalette,
	/// Fixed type-tag colors consulted before the palette.
	pub type_colors: HashMap<String, Color>,
}

impl Theme {
	/// Color for a node with the given type tag.
	pub fn color_for_type(&self, node_type: &str) -> Color {
		if let Some(color) = self.type_colors.get(node_type) {
			return *color;
		}
		self.palette.get(tag_slot(node_type))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(250, 250, 250),
			edge: Color::rgb(170, 170, 170),
			edge_width: 2.0,
			edge_label: Color::rgb(40, 40, 40),
			node_label: Color::rgb(30, 30, 30),
			label_font: "12px sans-serif",
			palette: NodePalette::slate(),
			type_colors: default_type_colors(),
		}
	}
}

/// Stable palette slot for an arbitrary tag.
fn tag_slot(tag: &str) -> usize {
	tag.bytes()
		.fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_formats() {
		assert_eq!(Color::rgb(255, 0, 128).to_css(), "#ff0080");
		assert_eq!(Color::rgba(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
	}

	#[test]
	fn type_colors_are_stable() {
		let theme = Theme::default();
		assert_eq!(
			theme.color_for_type("person"),
			theme.color_for_type("person")
		);
		// Unknown tags hash to a consistent palette slot.
		assert_eq!(
			theme.color_for_type("charity"),
			theme.color_for_type("charity")
		);
	}
}
