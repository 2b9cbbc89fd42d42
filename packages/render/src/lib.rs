//! # Blockpress Renderer
//!
//! Pure `(block, theme) → VNode` rendering for the page builder.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Rendering is fully deterministic.**
//!
//! For any `Block` + `Theme`, [`render_block`] produces identical output
//! on every invocation:
//!
//! - Same block → same VNode structure (ordered attribute/style pairs,
//!   no map iteration order leaks)
//! - No time/random/environment dependence
//! - No I/O — the renderer runs synchronously on every editor keystroke
//!
//! ## Totality Contract
//!
//! Every variant renders for every content shape: missing or empty fields
//! degrade to empty-state output. The only way to get no output is a
//! `hidden` block, which yields `None`.

mod html;
mod render;
mod style;
mod vdom;

pub use html::{node_to_html, render_page_html};
pub use render::{render_block, render_page};
pub use style::{alignment_value, lightness, padding_value, resolve_styles, ResolvedStyles};
pub use vdom::VNode;
