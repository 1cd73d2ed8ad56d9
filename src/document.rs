//! Parsed form document model.
//!
//! A [`FormDocument`] wraps the top-level JSON object of a form
//! declaration. Everything at the top level except `properties` is a
//! candidate `<form>` attribute; `properties` holds the ordered field
//! declarations. [`FieldSpec`] is a borrowed view over one such entry.
//!
//! The model mirrors loose JSON semantics on purpose: keys holding
//! `null` count as absent, and several switches (`open`, option
//! selection) use truthiness rather than strict booleans.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{LoadError, RenderError, RenderResult};

/// Returns the value for `key` if it is present and not `null`.
pub(crate) fn present<'a>(props: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
	props.get(key).filter(|v| !v.is_null())
}

/// Loose truthiness: `false`, `null`, `0`, `""`, `"0"` and empty
/// collections are falsy, everything else is truthy.
pub(crate) fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
		Value::String(s) => !s.is_empty() && s != "0",
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

/// Renders a scalar JSON value as attribute/body text.
///
/// Strings pass through verbatim, numbers and booleans via their
/// canonical display form. Arrays and objects have no textual form
/// here and collapse to the empty string.
pub(crate) fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Number(n) => n.to_string(),
		Value::Bool(b) => b.to_string(),
		_ => String::new(),
	}
}

/// The generator family selected by a field's `type` discriminator.
///
/// # Examples
///
/// ```
/// use formgen::FieldKind;
///
/// assert_eq!(FieldKind::from_type("submit"), FieldKind::Button);
/// assert_eq!(FieldKind::from_type("textarea"), FieldKind::Textarea);
/// assert_eq!(FieldKind::from_type("email"), FieldKind::Input);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// `button`, `submit` and `reset` share one generator; the declared
	/// type is carried through as the `<button>` type attribute.
	Button,
	Textarea,
	Select,
	/// Structural `<div>` open/close marker.
	Div,
	/// Any other type token renders as a generic `<input>`.
	Input,
}

impl FieldKind {
	pub fn from_type(ty: &str) -> Self {
		match ty {
			"button" | "submit" | "reset" => Self::Button,
			"textarea" => Self::Textarea,
			"select" => Self::Select,
			"div" => Self::Div,
			_ => Self::Input,
		}
	}
}

/// One `<option>` entry of a `select` field: `[displayLabel, isSelected]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionEntry(String, Value);

impl OptionEntry {
	pub fn label(&self) -> &str {
		&self.0
	}

	pub fn selected(&self) -> bool {
		truthy(&self.1)
	}
}

/// A parsed top-level form declaration.
///
/// # Examples
///
/// ```
/// use formgen::FormDocument;
/// use serde_json::json;
///
/// let doc = FormDocument::from_value(json!({
///     "method": "post",
///     "properties": {
///         "name": { "type": "text", "label": "Name" }
///     }
/// })).unwrap();
/// assert!(doc.attrs().contains_key("method"));
/// ```
#[derive(Debug, Clone)]
pub struct FormDocument {
	root: Map<String, Value>,
}

impl FormDocument {
	/// Wraps a parsed JSON value. Fails if the top level is not an object.
	pub fn from_value(value: Value) -> Result<Self, LoadError> {
		match value {
			Value::Object(root) => Ok(Self { root }),
			_ => Err(LoadError::NotAnObject),
		}
	}

	/// The top-level mapping, including `properties`.
	///
	/// Passed as-is to the attribute serializer when the `<form>` tag is
	/// built; `properties` is not a whitelisted attribute, so it can
	/// never leak into the markup.
	pub fn attrs(&self) -> &Map<String, Value> {
		&self.root
	}

	/// The ordered field declarations, if present and non-empty.
	pub fn properties(&self) -> Option<&Map<String, Value>> {
		present(&self.root, "properties")
			.and_then(Value::as_object)
			.filter(|m| !m.is_empty())
	}

	/// Iterates the field declarations in document order.
	///
	/// Yields an error for entries whose value is not a JSON object.
	pub fn fields(&self) -> impl Iterator<Item = RenderResult<FieldSpec<'_>>> {
		self.properties().into_iter().flatten().map(|(name, value)| {
			value
				.as_object()
				.map(|props| FieldSpec::new(name, props))
				.ok_or_else(|| RenderError::FieldNotObject(name.clone()))
		})
	}
}

/// A borrowed view over one entry of `properties`.
///
/// The entry key is used for diagnostics only; the HTML `name`
/// attribute comes from the field's own `name` property.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<'a> {
	name: &'a str,
	props: &'a Map<String, Value>,
}

impl<'a> FieldSpec<'a> {
	pub(crate) fn new(name: &'a str, props: &'a Map<String, Value>) -> Self {
		Self { name, props }
	}

	pub fn name(&self) -> &str {
		self.name
	}

	pub fn props(&self) -> &Map<String, Value> {
		self.props
	}

	/// Property lookup with `null` treated as absent.
	pub fn get(&self, key: &str) -> Option<&Value> {
		present(self.props, key)
	}

	/// Textual form of a property, if present.
	pub fn text(&self, key: &str) -> Option<String> {
		self.get(key).map(value_text)
	}

	/// Loose-boolean property (`open`, option selection switches).
	pub fn flag(&self, key: &str) -> bool {
		self.get(key).map(truthy).unwrap_or(false)
	}

	/// Whether `aria-label` is activated: only the literal boolean
	/// `true` counts.
	pub fn aria_label(&self) -> bool {
		matches!(self.get("aria-label"), Some(Value::Bool(true)))
	}

	/// The generator family for this field.
	pub fn kind(&self) -> RenderResult<FieldKind> {
		match self.text("type") {
			Some(ty) if !ty.is_empty() => Ok(FieldKind::from_type(&ty)),
			_ => Err(RenderError::MissingType(self.name.to_string())),
		}
	}

	/// Box-type fields (checkbox/radio) place their caption after the
	/// control instead of before it.
	pub fn is_box(&self) -> bool {
		matches!(self.text("type").as_deref(), Some("checkbox") | Some("radio"))
	}
}
