use crate::prelude::*;

///
/// TextStats
/// Derived content metrics for one chapter, produced by an external
/// analysis pass. Every count is non-negative; zero is a legal value for
/// all of them (an empty chapter has empty stats).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub words: u32,
    pub characters: u32,
    pub characters_no_spaces: u32,
    pub paragraphs: u32,
    pub sentences: u32,
    pub reading_time_minutes: u32,
}

impl ValidateRecord for TextStats {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
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
