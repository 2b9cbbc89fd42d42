//! # Blockpress Import
//!
//! Template and import adapter: both entry points produce `Vec<Block>`
//! for the editor session.
//!
//! - **Template selection** ([`materialize_template`]) replaces the
//!   session's content with a predefined `{blocks, theme}` pair.
//! - **Heuristic extraction** ([`extract_blocks`]) synthesizes blocks
//!   from pasted raw markup via fixed-order pattern rules; appended onto
//!   the session.
//! - **Remote import** ([`import_from_url`]) trusts an external
//!   fetch-and-extract service and passes its blocks through.
//!
//! Everything here is best-effort: malformed markup and empty results
//! are normal outcomes, not errors (the remote path's failure modes are
//! the one fallible boundary).

mod dom;
mod extract;
mod remote;
mod templates;
mod tokenizer;

pub use dom::{parse_html, HtmlNode};
pub use extract::{extract_blocks, Extraction};
pub use remote::{import_from_url, ImportError, RemoteImportResponse, RemoteImporter};
pub use templates::{
    materialize_template, template_catalog, TemplateContent, TemplateDescriptor,
};
