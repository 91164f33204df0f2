//! AEGIS Core
//!
//! Foundational primitives shared by the AEGIS dashboard crates:
//!
//! - **Colors**: RGBA values with CSS rendering
//! - **Style scopes**: the document surface that receives custom properties
//!   and marker classes
//! - **Batches**: property and class changes committed in a single pass so
//!   consumers never observe a half-applied theme
//!
//! # Example
//!
//! ```rust
//! use aegis_core::{ClassSwap, Color, Document, StyleBatch, StyleScope};
//!
//! let mut doc = Document::new();
//! let batch = StyleBatch::new()
//!     .property("accent", Color::from_hex(0xDC2626).to_css())
//!     .swap(ClassSwap::exact(&["light", "dark"], "light"));
//!
//! doc.commit(&batch);
//! assert_eq!(doc.property("accent"), Some("#DC2626"));
//! ```

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{
    ClassList, ClassMatcher, ClassSwap, CustomProperty, Document, ScopeRoot, StyleBatch,
    StyleRoot, StyleScope,
};
