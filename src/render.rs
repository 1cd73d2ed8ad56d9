//! Tag generators and the form renderer.
//!
//! One generator per field family: generic `<input>`, `<textarea>`,
//! `<select>`, the `button`/`submit`/`reset` family and the structural
//! `<div>` toggle. [`render`] drives them over the document's field
//! declarations in order and assembles the surrounding `<form>` tag.
//!
//! Rendering is fail-fast: the first invalid field aborts the render
//! with a [`RenderError`] and no partial HTML escapes to the caller.

use serde_json::{Map, Value};

use crate::attrs;
use crate::document::{FieldKind, FieldSpec, FormDocument, OptionEntry, truthy};
use crate::error::{RenderError, RenderResult};
use crate::wrapper::{Position, label_wrap};

/// Renders a complete `<form>…</form>` subtree for `doc`.
///
/// # Errors
///
/// [`RenderError::MissingProperties`] when the document declares no
/// fields; [`RenderError::MissingType`] / [`RenderError::Field`] for
/// per-field defects. Checked before any output is produced.
///
/// # Examples
///
/// ```
/// use formgen::{FormDocument, render};
/// use serde_json::json;
///
/// let doc = FormDocument::from_value(json!({
///     "method": "post",
///     "properties": {
///         "send": { "type": "submit", "label": "Send", "class": "btn" }
///     }
/// })).unwrap();
/// assert_eq!(
///     render(&doc).unwrap(),
///     "<form method='post'>\n<button class='btn' type='submit'>Send</button>\n</form>\n"
/// );
/// ```
pub fn render(doc: &FormDocument) -> RenderResult<String> {
	if doc.properties().is_none() {
		return Err(RenderError::MissingProperties);
	}

	tracing::debug!(
		fields = doc.properties().map(|p| p.len()).unwrap_or(0),
		"rendering form document"
	);

	let mut html = format!("<form{}>\n", attrs::serialize(doc.attrs()));
	let mut div_depth: i64 = 0;

	for field in doc.fields() {
		let field = field?;
		let kind = field.kind()?;
		if kind == FieldKind::Div {
			div_depth += if field.flag("open") { 1 } else { -1 };
		}
		html.push_str(&render_field(&field, kind)?);
	}
	html.push_str("</form>\n");

	// Additive safety net only; unbalanced markup is still emitted as
	// declared, matching the documented flat-layout contract.
	if div_depth != 0 {
		tracing::warn!(depth = div_depth, "unbalanced div open/close declarations");
	}

	Ok(html)
}

/// Dispatches one field declaration to its tag generator.
fn render_field(field: &FieldSpec, kind: FieldKind) -> RenderResult<String> {
	match kind {
		FieldKind::Button => button(field),
		FieldKind::Textarea => textarea(field),
		FieldKind::Select => select(field),
		FieldKind::Div => div(field),
		FieldKind::Input => input(field),
	}
}

/// The field's properties minus the keys a particular tag cannot carry.
fn props_without(field: &FieldSpec, keys: &[&str]) -> Map<String, Value> {
	let mut props = field.props().clone();
	for key in keys {
		props.remove(*key);
	}
	props
}

fn require_label(field: &FieldSpec) -> RenderResult<String> {
	field
		.text("label")
		.ok_or_else(|| RenderError::field(field.name(), "no label specified"))
}

/// Generic `<input>` of any type token.
fn input(field: &FieldSpec) -> RenderResult<String> {
	let hidden = field.text("type").as_deref() == Some("hidden");

	if !hidden && field.get("label").is_none() && field.get("placeholder").is_none() {
		return Err(RenderError::field(
			field.name(),
			"no label or placeholder specified",
		));
	}
	if hidden && field.get("value").is_none() {
		return Err(RenderError::field(
			field.name(),
			"input type hidden but no value is set",
		));
	}

	let mut tag = label_wrap(field, Position::Before);
	tag.push('\n');
	tag.push_str(&format!("<input{}>\n", attrs::serialize(field.props())));
	tag.push_str(&label_wrap(field, Position::After));
	Ok(tag)
}

/// `<textarea>`; `type` and `pattern` are not valid on the element and
/// `value` becomes the body, so none of the three is serialized.
fn textarea(field: &FieldSpec) -> RenderResult<String> {
	require_label(field)?;

	let mut props = props_without(field, &["type", "pattern", "value"]);
	if !props.contains_key("rows") {
		props.insert("rows".to_string(), Value::from(5));
	}

	let mut tag = label_wrap(field, Position::Before);
	tag.push_str(&format!(
		"<textarea{}>{}</textarea>\n",
		attrs::serialize(&props),
		field.text("value").unwrap_or_default()
	));
	tag.push_str(&label_wrap(field, Position::After));
	Ok(tag)
}

/// `<select>` with one `<option>` per entry of `options`, in
/// declaration order.
fn select(field: &FieldSpec) -> RenderResult<String> {
	require_label(field)?;

	let mut tag = label_wrap(field, Position::Before);
	tag.push_str(&format!(
		"<select{}>\n",
		attrs::serialize(&props_without(field, &["type"]))
	));

	if let Some(options) = field.get("options") {
		let options = options.as_object().ok_or_else(|| {
			RenderError::field(field.name(), "'options' must be a JSON object")
		})?;
		for (value, entry) in options {
			let entry: OptionEntry = serde_json::from_value(entry.clone()).map_err(|_| {
				RenderError::field(
					field.name(),
					format!("option '{}' must be a [label, selected] pair", value),
				)
			})?;
			let selected = if entry.selected() { " selected" } else { "" };
			tag.push_str(&format!(
				"<option value='{}'{}>{}</option>\n",
				value,
				selected,
				entry.label()
			));
		}
	}

	tag.push_str("</select>\n");
	tag.push_str(&label_wrap(field, Position::After));
	Ok(tag)
}

/// `button`, `submit` and `reset` all render as `<button>` with the
/// declared type carried through; the label is the element body and no
/// wrapper markup applies.
fn button(field: &FieldSpec) -> RenderResult<String> {
	let label = require_label(field)?;
	Ok(format!(
		"<button{}>{}</button>\n",
		attrs::serialize(field.props()),
		label
	))
}

/// Structural div toggle: `open` decides between an opening tag with
/// attributes and a bare closing tag. Pairs are the author's
/// responsibility; unbalanced declarations are emitted as-is.
fn div(field: &FieldSpec) -> RenderResult<String> {
	let open = field
		.get("open")
		.ok_or_else(|| RenderError::field(field.name(), "div element requires 'open'"))?;

	if truthy(open) {
		Ok(format!(
			"<div{}>\n",
			attrs::serialize(&props_without(field, &["type"]))
		))
	} else {
		Ok("</div>\n".to_string())
	}
}

/// Renders a document parsed from raw JSON text.
///
/// Convenience for callers that hold the tree as a [`Value`] already;
/// see [`crate::loader`] for file and string input.
pub fn render_value(value: Value) -> Result<String, crate::Error> {
	let doc = FormDocument::from_value(value)?;
	Ok(render(&doc)?)
}
