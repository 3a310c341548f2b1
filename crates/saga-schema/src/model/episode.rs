use crate::prelude::*;

///
/// Episode
/// Unit within an arc. Numbering starts at 0 so a prologue can precede
/// the first numbered episode.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub timeline_name: String,
    pub arc_name: String,
    pub number: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
}

impl ValidateRecord for Episode {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            timeline_name: check.text("timelineName"),
            arc_name: check.text("arcName"),
            number: check.nat("number"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use saga_types::record;

    fn valid() -> Record {
        record! {
            "timelineName" => "main-story",
            "arcName" => "introduction",
            "number" => 1,
            "slug" => "first-meeting",
            "title" => "First Meeting",
            "description" => "The first encounter",
        }
    }

    #[test]
    fn minimal_episode_validates() {
        assert!(Episode::validate(&valid()).is_ok());
    }

    #[test]
    fn episode_zero_is_a_prologue() {
        let episode = Episode::validate(&valid().with("number", 0)).unwrap();
        assert_eq!(episode.number, 0);
    }

    #[test]
    fn negative_episode_number_is_rejected() {
        let err = Episode::validate(&valid().with("number", -1)).unwrap_err();
        assert!(err.cites("number"));
    }
}
