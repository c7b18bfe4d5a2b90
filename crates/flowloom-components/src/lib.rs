//! # FlowLoom Components
//!
//! Declarative UI component model for the flow builder. A flow step carries an
//! ordered list of [`Component`]s; this crate defines what a component *is*
//! (kind, variant, config), what the editor may do to it (field schemas,
//! variant presets), and how it turns into a presentation
//! ([`ComponentAdapter`] producing [`ViewPrimitive`]s for the host to render).
//!
//! The [`Registry`] is the single dispatch point: kind -> adapter + schema +
//! variants, resolved once at startup.

pub mod adapters;
pub mod model;
pub mod palette;
pub mod registry;
pub mod schema;

pub use adapters::{ComponentAdapter, Rendered, TextAlign, ViewPrimitive};
pub use model::{Component, ComponentConfig, ComponentKind};
pub use palette::{Palette, PaletteEntry};
pub use registry::{KindSpec, Registry, RegistryError, VariantDef};
pub use schema::{FieldSchema, FieldType, ValidationError};
