//! Validation schemas for the saga story-content model.
//!
//! One stateless rule set per entity kind (Timeline → Arc → Episode →
//! Part → Chapter, plus chapter frontmatter and text statistics). Each
//! entry point takes an untyped record and either returns the typed
//! entity or fails with every violated field constraint collected into a
//! single [`ValidateError`].

pub mod check;
pub mod error;
pub mod model;
pub mod validate;

pub use check::Check;
pub use error::{ErrorTree, ValidateError};
pub use model::{Arc, Chapter, ChapterMetadata, Episode, Part, TextStats, Timeline};
pub use validate::{
    ValidateRecord, validate_arc, validate_chapter, validate_chapter_metadata, validate_episode,
    validate_part, validate_text_stats, validate_timeline,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        check::Check,
        err,
        error::{ErrorTree, ValidateError},
        model::{Arc, Chapter, ChapterMetadata, Episode, Part, TextStats, Timeline},
        validate::ValidateRecord,
    };
    pub use saga_types::{Date, Record, Value, ValueTag};
    pub use serde::{Deserialize, Serialize};
}
