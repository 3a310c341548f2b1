//! ## Crate layout
//! - `types`: canonical scalars — the date representation, dynamic field
//!   values, and the untyped record map.
//! - `schema`: entity records and the validation rule sets over them.
//!
//! The `prelude` module mirrors the surface a content pipeline uses when
//! loading and validating story entities.

pub use saga_schema as schema;
pub use saga_types as types;

pub use saga_schema::{
    Check, ErrorTree, ValidateError, ValidateRecord, validate_arc, validate_chapter,
    validate_chapter_metadata, validate_episode, validate_part, validate_text_stats,
    validate_timeline,
};
pub use saga_schema::{Arc, Chapter, ChapterMetadata, Episode, Part, TextStats, Timeline};
pub use saga_types::{Date, Record, RecordError, Value, ValueTag, record};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use saga_schema::prelude::*;
    pub use saga_types::record;
}
