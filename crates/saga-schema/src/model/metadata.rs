use crate::prelude::*;

///
/// ChapterMetadata
/// Frontmatter block accompanying one chapter's content, as written by an
/// author. Unlike the chapter record itself, the hierarchy coordinates
/// here use author-facing 1-based numbering throughout.
///
/// The legacy `summary` key is accepted as an alias for `excerpt` when the
/// canonical key is absent.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChapterMetadata {
    pub pov: String,
    pub title: String,
    pub date: Date,
    pub timeline: String,
    pub arc: String,
    pub episode: u32,
    pub part: u32,
    pub chapter: u32,
    pub excerpt: String,
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kink: Option<String>,
}

impl ValidateRecord for ChapterMetadata {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            pov: check.text("pov"),
            title: check.text("title"),
            date: check.date("date"),
            timeline: check.text("timeline"),
            arc: check.text("arc"),
            episode: check.pos("episode"),
            part: check.pos("part"),
            chapter: check.pos("chapter"),
            excerpt: check.text_aliased("excerpt", "summary"),
            location: check.text("location"),
            outfit: check.text_opt("outfit"),
            kink: check.text_opt("kink"),
        };

        check.result()?;
        Ok(out)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use saga_types::record;

    fn valid() -> Record {
        record! {
            "pov" => "Alice",
            "title" => "First Meeting",
            "date" => "2025-01-01",
            "timeline" => "main-story",
            "arc" => "introduction",
            "episode" => 1,
            "part" => 1,
            "chapter" => 1,
            "excerpt" => "Alice meets Bob",
            "location" => "Coffee Shop",
        }
    }

    #[test]
    fn minimal_metadata_validates() {
        let metadata = ChapterMetadata::validate(&valid()).unwrap();
        assert_eq!(metadata.date, Date::new_checked(2025, 1, 1).unwrap());
        assert_eq!(metadata.outfit, None);
    }

    #[test]
    fn optional_fields_are_kept_when_present() {
        let record = valid()
            .with("outfit", "red summer dress")
            .with("kink", "none");
        let metadata = ChapterMetadata::validate(&record).unwrap();
        assert_eq!(metadata.outfit.as_deref(), Some("red summer dress"));
        assert_eq!(metadata.kink.as_deref(), Some("none"));
    }

    #[test]
    fn legacy_summary_key_still_works() {
        let record = record! {
            "pov" => "Alice",
            "title" => "First Meeting",
            "date" => "2025-01-01",
            "timeline" => "main-story",
            "arc" => "introduction",
            "episode" => 1,
            "part" => 1,
            "chapter" => 1,
            "summary" => "Alice meets Bob",
            "location" => "Coffee Shop",
        };
        let metadata = ChapterMetadata::validate(&record).unwrap();
        assert_eq!(metadata.excerpt, "Alice meets Bob");
    }

    #[test]
    fn author_facing_numbers_are_one_based() {
        let err = ChapterMetadata::validate(&valid().with("episode", 0)).unwrap_err();
        assert!(err.cites("episode"));

        let err = ChapterMetadata::validate(&valid().with("chapter", 0)).unwrap_err();
        assert!(err.cites("chapter"));
    }

    #[test]
    fn native_date_values_are_accepted() {
        let record = valid().with("date", Date::new_checked(2025, 1, 1).unwrap());
        let metadata = ChapterMetadata::validate(&record).unwrap();
        assert_eq!(metadata.date.to_string(), "2025-01-01");
    }
}
