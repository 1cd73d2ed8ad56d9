//! Server-rendered HTML form markup from declarative JSON documents.
//!
//! This crate turns a JSON form declaration into a `<form>…</form>`
//! subtree styled for Bootstrap-flavored class hooks:
//! - A fixed attribute whitelist maps JSON keys onto HTML attributes in
//!   canonical order
//! - Wrapper markup (`<div>`, `<label>`, help and feedback blocks) is
//!   assembled around each control, with checkbox/radio caption
//!   placement handled natively
//! - One generator per field family: generic input, textarea, select,
//!   the button family and structural div open/close toggles
//! - Structured errors instead of inline diagnostics; rendering is
//!   fail-fast and never produces partial output
//!
//! # Security
//!
//! Attribute values and text blocks are inserted verbatim, without HTML
//! escaping. Only render documents you control.
//!
//! # Examples
//!
//! ```
//! let html = formgen::render_source(r#"{
//!     "method": "post",
//!     "properties": {
//!         "email": { "type": "email", "label": "Email", "id": "em",
//!                    "divClass": "mb-3", "required": true },
//!         "send":  { "type": "submit", "label": "Send", "class": "btn" }
//!     }
//! }"#).unwrap();
//! assert!(html.starts_with("<form method='post'>\n"));
//! assert!(html.contains("<label for='em'>Email</label>"));
//! assert!(html.contains("<input id='em' required type='email'>"));
//! assert!(html.contains("<button class='btn' type='submit'>Send</button>"));
//! ```

pub mod attrs;
pub mod document;
pub mod error;
pub mod loader;
pub mod render;
pub mod wrapper;

pub use attrs::serialize as serialize_attrs;
pub use document::{FieldKind, FieldSpec, FormDocument, OptionEntry};
pub use error::{Error, LoadError, RenderError, RenderResult};
pub use loader::{load, load_path, load_str, render_source};
pub use render::{render, render_value};
pub use wrapper::{Position, label_wrap};
