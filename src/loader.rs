//! Obtaining and parsing the raw JSON input.
//!
//! Peripheral glue around the rendering core: the core only consumes a
//! parsed [`FormDocument`], while this module decides whether the given
//! source is a `.json` file path or inline JSON text.

use std::fs;
use std::path::Path;

use crate::document::FormDocument;
use crate::error::{Error, LoadError};
use crate::render;

/// Loads a form document from a file path or inline JSON.
///
/// A source ending in `.json` (case-insensitively) is treated as a
/// file path; anything else is parsed as JSON text directly.
///
/// # Examples
///
/// ```
/// let doc = formgen::load(r#"{ "properties": { "x": { "type": "hidden", "value": "1" } } }"#)
///     .unwrap();
/// assert!(doc.properties().is_some());
/// ```
pub fn load(source: &str) -> Result<FormDocument, LoadError> {
	if source.to_ascii_lowercase().ends_with(".json") {
		load_path(source)
	} else {
		load_str(source)
	}
}

/// Reads and parses a form document from a JSON file.
pub fn load_path(path: impl AsRef<Path>) -> Result<FormDocument, LoadError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	load_str(&text)
}

/// Parses a form document from inline JSON text.
pub fn load_str(code: &str) -> Result<FormDocument, LoadError> {
	let value: serde_json::Value = serde_json::from_str(code)?;
	FormDocument::from_value(value)
}

/// Loads and renders in one step.
///
/// # Examples
///
/// ```
/// let html = formgen::render_source(
///     r#"{ "properties": { "x": { "type": "hidden", "value": "v1" } } }"#,
/// ).unwrap();
/// assert_eq!(html, "<form>\n\n<input type='hidden' value='v1'>\n</form>\n");
/// ```
pub fn render_source(source: &str) -> Result<String, Error> {
	let doc = load(source)?;
	Ok(render::render(&doc)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	const FORM: &str = r#"{ "properties": { "name": { "type": "text", "label": "Name" } } }"#;

	#[test]
	fn test_inline_string() {
		let doc = load(FORM).unwrap();
		assert_eq!(doc.properties().unwrap().len(), 1);
	}

	#[test]
	fn test_json_file_path() {
		let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
		file.write_all(FORM.as_bytes()).unwrap();

		let doc = load(file.path().to_str().unwrap()).unwrap();
		assert_eq!(doc.properties().unwrap().len(), 1);
	}

	#[test]
	fn test_json_suffix_is_case_insensitive() {
		let mut file = tempfile::NamedTempFile::with_suffix(".JSON").unwrap();
		file.write_all(FORM.as_bytes()).unwrap();

		let doc = load(file.path().to_str().unwrap()).unwrap();
		assert_eq!(doc.properties().unwrap().len(), 1);
	}

	#[test]
	fn test_missing_file() {
		let err = load("/definitely/not/here.json").unwrap_err();
		assert!(matches!(err, LoadError::Read { .. }));
	}

	#[test]
	fn test_malformed_json() {
		let err = load("{ not json").unwrap_err();
		assert!(matches!(err, LoadError::Parse(_)));
	}

	#[test]
	fn test_non_object_root() {
		let err = load("[1, 2, 3]").unwrap_err();
		assert!(matches!(err, LoadError::NotAnObject));
	}
}
