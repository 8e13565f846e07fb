use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A game the club competes in, as provided by the e-sports API.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Modality {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    tag: String,
    #[serde(default)]
    scheduled_trainings: Vec<ScheduledTraining>,
}

impl Modality {
    pub fn new(
        id: String,
        name: String,
        tag: String,
        scheduled_trainings: Vec<ScheduledTraining>,
    ) -> Self {
        Self {
            id,
            name,
            tag,
            scheduled_trainings,
        }
    }
}

/// A weekly training slot, whose bounds are cron expressions such as `0 00 20 * * 1`.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledTraining {
    start: String,
    end: String,
}

impl ScheduledTraining {
    pub fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn counter_strike() -> Modality {
        Modality::new(
            "64124b9114a24f13c339bb21".to_owned(),
            "Counter Strike 2".to_owned(),
            "CS2".to_owned(),
            vec![
                ScheduledTraining::new("0 00 20 * * 1".to_owned(), "0 00 22 * * 1".to_owned()),
                ScheduledTraining::new("0 00 20 * * 3".to_owned(), "0 00 22 * * 3".to_owned()),
            ],
        )
    }

    pub fn league_of_legends() -> Modality {
        Modality::new(
            "64124b9114a24f13c339bb22".to_owned(),
            "League of Legends".to_owned(),
            "LOL".to_owned(),
            vec![ScheduledTraining::new(
                "0 00 19 * * 2".to_owned(),
                "0 00 22 * * 2".to_owned(),
            )],
        )
    }

    #[test]
    fn should_deserialize_modality() {
        let json = r#"{"_id":"64124b9114a24f13c339bb22","Name":"League of Legends","Tag":"LOL","ScheduledTrainings":[{"Start":"0 00 19 * * 2","End":"0 00 22 * * 2"}]}"#;

        let modality: Modality = serde_json::from_str(json).unwrap();

        assert_eq!(league_of_legends(), modality);
    }
}
