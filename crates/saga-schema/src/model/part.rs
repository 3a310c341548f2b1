use crate::prelude::*;

///
/// Part
/// Subdivision of an episode.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub timeline_name: String,
    pub arc_name: String,
    pub episode_number: u32,
    pub number: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
}

impl ValidateRecord for Part {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            timeline_name: check.text("timelineName"),
            arc_name: check.text("arcName"),
            episode_number: check.nat("episodeNumber"),
            number: check.pos("number"),
            slug: check.text("slug"),
            title: check.text("title"),
            description: check.text("description"),
        };

        check.result()?;
        Ok(out)
    }
}

///
/// TESTS
///
