//! Error taxonomy for document loading and rendering.

use std::path::PathBuf;

/// Errors produced while rendering a form document.
///
/// Rendering is fail-fast: the first error aborts the whole render and
/// no partial HTML is returned. The renderer never writes diagnostics
/// into the output stream and never terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The document has no `properties` object, or it is empty.
	#[error("form document has no non-empty 'properties' object")]
	MissingProperties,
	/// A field entry under `properties` is not a JSON object.
	#[error("field '{0}' is not a JSON object")]
	FieldNotObject(String),
	/// A field has no `type` discriminator.
	#[error("no type specified for field '{0}'")]
	MissingType(String),
	/// A kind-specific required property is missing or malformed.
	#[error("field '{field}': {message}")]
	Field { field: String, message: String },
}

impl RenderError {
	pub(crate) fn field(name: &str, message: impl Into<String>) -> Self {
		Self::Field {
			field: name.to_string(),
			message: message.into(),
		}
	}
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors produced while obtaining and parsing the raw JSON input.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("could not read form file '{path}'")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("could not decode form JSON")]
	Parse(#[from] serde_json::Error),
	#[error("form document must be a JSON object")]
	NotAnObject,
}

/// Umbrella error for the load-then-render convenience paths.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Load(#[from] LoadError),
	#[error(transparent)]
	Render(#[from] RenderError),
}
