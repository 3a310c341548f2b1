use crate::prelude::*;

///
/// Timeline
/// Root story container, keyed by name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Timeline {
    pub name: String,
    pub description: String,
}

impl ValidateRecord for Timeline {
    fn validate(record: &Record) -> Result<Self, ValidateError> {
        let mut check = Check::new(record);

        let out = Self {
            name: check.text("name"),
            description: check.text("description"),
        };

        check.result()?;
        Ok(out)
    }
}

///
/// TESTS
///
