use crate::prelude::*;

///
/// Chapter
/// Leaf content unit: the hierarchy coordinates of one content file plus
/// its frontmatter metadata and text statistics, flattened into a single
/// record the way the content pipeline stores them.
///
/// `episode_number` is 0-based (a prologue lives in episode 0) while
/// `part_number` and `number` start at 1.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub timeline_name: String,
    pub arc_name: String,
    pub episode_number: u32,
    pub part_number: u32,
    pub number: u32,

    // frontmatter metadata
    pub pov: String,
    pub title: String,
    pub date: Date,
    pub excerpt: String,
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kink: Option<String>,

    // text statistics
    pub words: u32,
    pub characters: u32,
    pub characters_no_spaces: u32,
    pub paragraphs: u32,
    pub sentences: u32,
    pub reading_time_minutes: u32,
}

impl Chapter {
    /// Project the embedded statistics field set.
    #[must_use]
    pub const fn stats(&self) -> TextStats {
        TextStats {
            words: self.words,
            characters: self.characters,
            characters_no_spaces: self.characters_no_spaces,
            paragraphs: self.paragraphs,
            sentences: self.sentences,
            reading_time_minutes: self.reading_time_minutes,
        }
    }
}

impl ValidateRecord for Chapter {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            timeline_name: check.text("timelineName"),
            arc_name: check.text("arcName"),
            episode_number: check.nat("episodeNumber"),
            part_number: check.pos("partNumber"),
            number: check.pos("number"),

            pov: check.text("pov"),
            title: check.text("title"),
            date: check.date("date"),
            excerpt: check.text_aliased("excerpt", "summary"),
            location: check.text("location"),
            outfit: check.text_opt("outfit"),
            kink: check.text_opt("kink"),

            words: check.nat("words"),
            characters: check.nat("characters"),
            characters_no_spaces: check.nat("charactersNoSpaces"),
            paragraphs: check.nat("paragraphs"),
            sentences: check.nat("sentences"),
            reading_time_minutes: check.nat("readingTimeMinutes"),
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
            "timelineName" => "main-story",
            "arcName" => "introduction",
            "episodeNumber" => 0,
            "partNumber" => 1,
            "number" => 1,
            "pov" => "Alice",
            "title" => "First Meeting",
            "date" => "2025-01-01",
            "excerpt" => "Alice meets Bob",
            "location" => "Coffee Shop",
            "words" => 1000,
            "characters" => 5000,
            "charactersNoSpaces" => 4000,
            "paragraphs" => 10,
            "sentences" => 50,
            "readingTimeMinutes" => 5,
        }
    }

    #[test]
    fn minimal_chapter_validates() {
        let chapter = Chapter::validate(&valid()).unwrap();
        assert_eq!(chapter.episode_number, 0);
        assert_eq!(chapter.number, 1);
        assert_eq!(chapter.date.to_string(), "2025-01-01");
    }

    #[test]
    fn negative_episode_number_is_cited() {
        let err = Chapter::validate(&valid().with("episodeNumber", -1)).unwrap_err();
        assert!(err.cites("episodeNumber"));
        assert_eq!(err.issues().len(), 1);
    }

    #[test]
    fn part_and_chapter_numbering_start_at_one() {
        let err = Chapter::validate(&valid().with("partNumber", 0)).unwrap_err();
        assert!(err.cites("partNumber"));

        let err = Chapter::validate(&valid().with("number", 0)).unwrap_err();
        assert!(err.cites("number"));
    }

    #[test]
    fn stats_projection_copies_the_counts() {
        let chapter = Chapter::validate(&valid()).unwrap();
        let stats = chapter.stats();
        assert_eq!(stats.words, 1000);
        assert_eq!(stats.characters_no_spaces, 4000);
        assert_eq!(stats.reading_time_minutes, 5);
    }

    #[test]
    fn violations_across_field_groups_are_reported_together() {
        let record = valid()
            .with("pov", "")
            .with("words", -3)
            .with("partNumber", 0);
        let err = Chapter::validate(&record).unwrap_err();
        assert!(err.cites("pov"));
        assert!(err.cites("words"));
        assert!(err.cites("partNumber"));
        assert_eq!(err.issues().len(), 3);
    }
}
