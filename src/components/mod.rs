//! UI components: the graph canvas, the modal shell, and the entry forms.

pub mod force_graph;
pub mod modal;
pub mod node_modal;
pub mod relationship_modal;

/// Required-field check shared by the entry forms. Produces the inline
/// message shown next to the offending field.
pub(crate) fn validate_required(value: &str, field: &str) -> Result<(), String> {
	if value.trim().is_empty() {
		Err(format!("{field} is required"))
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::validate_required;

	#[test]
	fn missing_value_names_the_field() {
		assert_eq!(
			validate_required("", "Node Name"),
			Err("Node Name is required".to_string())
		);
		assert_eq!(
			validate_required("   ", "Relationship"),
			Err("Relationship is required".to_string())
		);
	}

	#[test]
	fn present_value_passes() {
		assert_eq!(validate_required("Alice", "Node Name"), Ok(()));
	}
}
