//! Wrapper markup around a control's own tag.
//!
//! The wrapper builder emits the optional `<div class=divClass>` frame,
//! the `<label>` and the help/feedback text blocks surrounding an
//! input. It is called twice per control, once for the markup before
//! the tag and once for the markup after it, and the two halves must
//! agree on which elements were left open in between.
//!
//! Checkbox and radio ("box-type") fields invert the label placement:
//! native semantics put the caption after the control, either nested in
//! the label (no `id`) or linked via `for` (with `id`).

use crate::document::FieldSpec;

/// Which half of the wrapper to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
	Before,
	After,
}

/// Builds the wrapper markup for one side of a control.
///
/// # Examples
///
/// ```
/// use formgen::{FormDocument, Position, label_wrap};
/// use serde_json::json;
///
/// let doc = FormDocument::from_value(json!({
///     "properties": { "name": { "type": "text", "label": "Name", "id": "n" } }
/// })).unwrap();
/// let field = doc.fields().next().unwrap().unwrap();
/// assert_eq!(label_wrap(&field, Position::Before), "<label for='n'>Name</label>\n");
/// assert_eq!(label_wrap(&field, Position::After), "");
/// ```
pub fn label_wrap(field: &FieldSpec, position: Position) -> String {
	let mut wrap = String::new();

	let id = field.text("id");
	let label = field.text("label");
	let aria = field.aria_label();
	let label_class = field.text("labelClass");
	let div_class = field.text("divClass");

	if !field.is_box() {
		match position {
			Position::Before => {
				if let Some(dc) = &div_class {
					wrap.push_str(&format!("\n<div class='{}'>\n", dc));
				}
				// aria-label replaces the visible label entirely
				if let Some(label) = &label
					&& !aria
				{
					wrap.push_str("<label");
					if let Some(id) = &id {
						wrap.push_str(&format!(" for='{}'", id));
					}
					if let Some(lc) = &label_class {
						wrap.push_str(&format!(" class='{}'", lc));
					}
					wrap.push_str(&format!(">{}", label));
					// Without an id the label stays open and wraps the
					// control; the after-half closes it.
					if id.is_some() {
						wrap.push_str("</label>\n");
					}
				}
			}
			Position::After => {
				if let Some(feedback) = field.text("feedback") {
					wrap.push_str(&text_block(
						id.is_some() || aria,
						&feedback,
						field.text("feedbackID"),
						field.text("feedbackClass"),
					));
				}
				if let Some(help) = field.text("help") {
					wrap.push_str(&text_block(
						id.is_some() || aria,
						&help,
						field.text("aria-describedby"),
						field.text("helpClass"),
					));
				}
				if label.is_some() && !aria && id.is_none() {
					wrap.push_str("</label>\n");
				}
				if div_class.is_some() {
					wrap.push_str("</div>\n");
				}
			}
		}
	} else {
		match position {
			Position::Before => {
				if let Some(dc) = &div_class {
					wrap.push_str(&format!("\n<div class='{}'>\n", dc));
				}
				if id.is_none() {
					wrap.push_str("<label");
					if let Some(lc) = &label_class {
						wrap.push_str(&format!(" class='{}'", lc));
					}
					wrap.push('>');
				}
			}
			Position::After => {
				if let Some(id) = &id {
					wrap.push_str(&format!("<label for='{}'", id));
					if let Some(lc) = &label_class {
						wrap.push_str(&format!(" class='{}'", lc));
					}
					wrap.push('>');
				}
				wrap.push_str(&format!("{}</label>\n", label.unwrap_or_default()));
				if div_class.is_some() {
					wrap.push_str("</div>\n");
				}
			}
		}
	}
	wrap
}

/// Help or validation-feedback text block.
///
/// Wrapped in a `<div>` when the owning control has an `id` or an
/// active `aria-label`, else a `<span>`.
fn text_block(wrap_div: bool, text: &str, text_id: Option<String>, text_class: Option<String>) -> String {
	let mut block = String::from(if wrap_div { "<div" } else { "<span" });
	if let Some(tid) = text_id {
		block.push_str(&format!(" id='{}'", tid));
	}
	if let Some(tc) = text_class {
		block.push_str(&format!(" class='{}'", tc));
	}
	block.push_str(&format!(">{}", text));
	block.push_str(if wrap_div { "</div>\n" } else { "</span>\n" });
	block
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{Map, Value, json};

	fn props(value: Value) -> Map<String, Value> {
		value.as_object().expect("object fixture").clone()
	}

	fn wrap_both(props: &Map<String, Value>) -> (String, String) {
		let field = FieldSpec::new("f", props);
		(
			label_wrap(&field, Position::Before),
			label_wrap(&field, Position::After),
		)
	}

	#[test]
	fn test_label_with_id_self_closes() {
		let props = props(json!({ "type": "text", "label": "Name", "id": "n" }));
		let (before, after) = wrap_both(&props);
		assert_eq!(before, "<label for='n'>Name</label>\n");
		assert_eq!(after, "");
	}

	#[test]
	fn test_label_without_id_stays_open() {
		let props = props(json!({ "type": "text", "label": "Name" }));
		let (before, after) = wrap_both(&props);
		assert_eq!(before, "<label>Name");
		assert_eq!(after, "</label>\n");
	}

	#[test]
	fn test_aria_label_suppresses_visible_label() {
		let props = props(json!({
			"type": "search",
			"label": "Search",
			"aria-label": true
		}));
		let (before, after) = wrap_both(&props);
		assert_eq!(before, "");
		assert_eq!(after, "");
	}

	#[test]
	fn test_div_class_frames_both_halves() {
		let props = props(json!({
			"type": "text",
			"label": "Name",
			"id": "n",
			"divClass": "mb-3",
			"labelClass": "form-label"
		}));
		let (before, after) = wrap_both(&props);
		assert_eq!(
			before,
			"\n<div class='mb-3'>\n<label for='n' class='form-label'>Name</label>\n"
		);
		assert_eq!(after, "</div>\n");
	}

	#[test]
	fn test_help_block_span_without_id() {
		let props = props(json!({
			"type": "text",
			"label": "Name",
			"help": "Use your full name",
			"helpClass": "form-text"
		}));
		let (_, after) = wrap_both(&props);
		assert_eq!(
			after,
			"<span class='form-text'>Use your full name</span>\n</label>\n"
		);
	}

	#[test]
	fn test_help_block_div_with_id() {
		let props = props(json!({
			"type": "text",
			"label": "Name",
			"id": "n",
			"help": "Use your full name",
			"aria-describedby": "nameHelp"
		}));
		let (_, after) = wrap_both(&props);
		assert_eq!(after, "<div id='nameHelp'>Use your full name</div>\n");
	}

	#[test]
	fn test_feedback_precedes_help() {
		let props = props(json!({
			"type": "email",
			"label": "Email",
			"id": "e",
			"feedback": "Looks good!",
			"feedbackID": "emailFeedback",
			"feedbackClass": "valid-feedback",
			"help": "Never shared",
			"helpClass": "form-text"
		}));
		let (_, after) = wrap_both(&props);
		assert_eq!(
			after,
			"<div id='emailFeedback' class='valid-feedback'>Looks good!</div>\n\
			 <div class='form-text'>Never shared</div>\n"
		);
	}

	#[test]
	fn test_box_without_id_nests_control_in_label() {
		let props = props(json!({
			"type": "checkbox",
			"label": "Remember me",
			"labelClass": "form-check-label"
		}));
		let (before, after) = wrap_both(&props);
		assert_eq!(before, "<label class='form-check-label'>");
		assert_eq!(after, "Remember me</label>\n");
	}

	#[test]
	fn test_box_with_id_links_label_after_control() {
		let props = props(json!({
			"type": "radio",
			"label": "Option A",
			"id": "optA",
			"divClass": "form-check"
		}));
		let (before, after) = wrap_both(&props);
		assert_eq!(before, "\n<div class='form-check'>\n");
		assert_eq!(after, "<label for='optA'>Option A</label>\n</div>\n");
	}
}
