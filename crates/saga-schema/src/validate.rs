//! Validation entry points, one per entity kind.
//!
//! Each is a pure function of its input record: either the full typed
//! record comes back, or a [`ValidateError`] naming every violated field.

use crate::{
    error::ValidateError,
    model::{Arc, Chapter, ChapterMetadata, Episode, Part, TextStats, Timeline},
};
use saga_types::Record;

///
/// ValidateRecord
///

pub trait ValidateRecord: Sized {
    /// Check every declared field constraint and produce the typed record,
    /// or report all violations at once.
    fn validate(record: &Record) -> Result<Self, ValidateError>;
}

pub fn validate_timeline(record: &Record) -> Result<Timeline, ValidateError> {
    Timeline::validate(record)
}

pub fn validate_arc(record: &Record) -> Result<Arc, ValidateError> {
    Arc::validate(record)
}

pub fn validate_episode(record: &Record) -> Result<Episode, ValidateError> {
    Episode::validate(record)
}

pub fn validate_part(record: &Record) -> Result<Part, ValidateError> {
    Part::validate(record)
}

pub fn validate_chapter(record: &Record) -> Result<Chapter, ValidateError> {
    Chapter::validate(record)
}

pub fn validate_chapter_metadata(record: &Record) -> Result<ChapterMetadata, ValidateError> {
    ChapterMetadata::validate(record)
}

pub fn validate_text_stats(record: &Record) -> Result<TextStats, ValidateError> {
    TextStats::validate(record)
}
