use crate::prelude::*;

///
/// Arc
/// Story arc within a timeline, ordered by number.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arc {
    pub timeline_name: String,
    pub name: String,
    pub number: u32,
    pub description: String,
}

impl ValidateRecord for Arc {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            timeline_name: check.text("timelineName"),
            name: check.text("name"),
            number: check.pos("number"),
            description: check.text("description"),
        };

        check.result()?;
        Ok(out)
    }
}

///
/// TESTS
///
