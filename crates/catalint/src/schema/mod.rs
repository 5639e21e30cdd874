//! Sheet schemas: field order, requiredness, cardinality and format rules.

mod registry;
mod rule;
mod sheets;

pub use registry::{SchemaRegistry, SheetSchema};
pub use rule::{Cardinality, CardinalityFn, FieldRule};
pub use sheets::{ENTRY_TYPES, RESOURCE_KINDS, Sheet, isbn_pairing, title_multiplicity};
