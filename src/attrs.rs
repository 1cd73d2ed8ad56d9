//! Attribute serialization for generated tags.
//!
//! A fixed whitelist decides which field properties become HTML
//! attributes. Everything else (`label`, `help`, `divClass`, …) is
//! presentation metadata consumed by the wrapper builder and is
//! silently dropped here. Output order is the whitelist order, never
//! the input key order.
//!
//! # Security
//!
//! Attribute values are inserted verbatim, with no HTML escaping. This
//! reproduces the behavior of the original generator and makes the
//! output unsafe for untrusted documents: callers must only render
//! JSON they control.

use serde_json::{Map, Value};

use crate::document::{present, value_text};

/// How a whitelisted key is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrKind {
	/// ` key='value'`
	Valued,
	/// ` key`, emitted on mere presence of the key.
	Bare,
	/// `aria-label` only: emitted as ` aria-label='<label text>'` when
	/// the key holds the literal boolean `true` and a `label` property
	/// exists. The boolean itself never appears in the output.
	LabelAlias,
}

/// The recognized HTML attributes, in canonical (alphabetical) order.
const WHITELIST: &[(&str, AttrKind)] = &[
	("accept", AttrKind::Valued),
	("accesskey", AttrKind::Valued),
	("action", AttrKind::Valued),
	("aria-describedby", AttrKind::Valued),
	("aria-label", AttrKind::LabelAlias),
	("autocomplete", AttrKind::Valued),
	("autofocus", AttrKind::Bare),
	("checked", AttrKind::Bare),
	("class", AttrKind::Valued),
	("dir", AttrKind::Valued),
	("disabled", AttrKind::Bare),
	("enctype", AttrKind::Valued),
	("id", AttrKind::Valued),
	("max", AttrKind::Valued),
	("method", AttrKind::Valued),
	("min", AttrKind::Valued),
	("minlength", AttrKind::Valued),
	("multiple", AttrKind::Bare),
	("name", AttrKind::Valued),
	("novalidate", AttrKind::Bare),
	("onblur", AttrKind::Valued),
	("onchange", AttrKind::Valued),
	("onclick", AttrKind::Valued),
	("onfocus", AttrKind::Valued),
	("oninput", AttrKind::Valued),
	("oninvalid", AttrKind::Valued),
	("onreset", AttrKind::Valued),
	("onsearch", AttrKind::Valued),
	("onselect", AttrKind::Valued),
	("onsubmit", AttrKind::Valued),
	("pattern", AttrKind::Valued),
	("placeholder", AttrKind::Valued),
	("readonly", AttrKind::Bare),
	("required", AttrKind::Bare),
	("rows", AttrKind::Valued),
	("size", AttrKind::Valued),
	("step", AttrKind::Valued),
	("style", AttrKind::Valued),
	("tabindex", AttrKind::Valued),
	("target", AttrKind::Valued),
	("title", AttrKind::Valued),
	("type", AttrKind::Valued),
	("value", AttrKind::Valued),
];

/// Serializes the whitelisted subset of `props` as a space-prefixed
/// attribute string.
///
/// Keys holding `null` count as absent. The result is empty when no
/// whitelisted key is present.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let props = json!({
///     "value": "v1",
///     "required": true,
///     "id": "n",
///     "help": "dropped: not an attribute"
/// });
/// let attrs = formgen::serialize_attrs(props.as_object().unwrap());
/// assert_eq!(attrs, " id='n' required value='v1'");
/// ```
pub fn serialize(props: &Map<String, Value>) -> String {
	let mut out = String::new();
	for (key, kind) in WHITELIST {
		let Some(value) = present(props, key) else {
			continue;
		};
		match kind {
			AttrKind::Valued => {
				out.push_str(&format!(" {}='{}'", key, value_text(value)));
			}
			AttrKind::Bare => {
				out.push(' ');
				out.push_str(key);
			}
			AttrKind::LabelAlias => {
				if value == &Value::Bool(true)
					&& let Some(label) = present(props, "label")
				{
					out.push_str(&format!(" aria-label='{}'", value_text(label)));
				}
			}
		}
	}
	out
}
