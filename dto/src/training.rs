use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A practice session of a modality.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    #[serde(rename = "_id")]
    id: String,
    modality_id: String,
    #[serde(default)]
    modality_name: String,
    #[serde(default)]
    modality_tag: String,
    #[serde(default)]
    description: String,
    start_timestamp: DateTime<Utc>,
    end_timestamp: DateTime<Utc>,
    #[serde(default)]
    status: TrainingStatus,
    /// IDs of the members attending the training.
    #[serde(default, deserialize_with = "deserialize_participant_ids")]
    attended_players: Vec<String>,
}

impl Training {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        modality_id: String,
        modality_name: String,
        modality_tag: String,
        description: String,
        start_timestamp: DateTime<Utc>,
        end_timestamp: DateTime<Utc>,
        status: TrainingStatus,
        attended_players: Vec<String>,
    ) -> Self {
        Self {
            id,
            modality_id,
            modality_name,
            modality_tag,
            description,
            start_timestamp,
            end_timestamp,
            status,
            attended_players,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStatus {
    #[default]
    Scheduled,
    Running,
    Completed,
    Canceled,
}

impl TrainingStatus {
    /// Value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStatus::Scheduled => "SCHEDULED",
            TrainingStatus::Running => "RUNNING",
            TrainingStatus::Completed => "COMPLETED",
            TrainingStatus::Canceled => "CANCELED",
        }
    }
}

impl Display for TrainingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrainingStatus {
    type Err = UnknownTrainingStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "SCHEDULED" => Ok(TrainingStatus::Scheduled),
            "RUNNING" => Ok(TrainingStatus::Running),
            "COMPLETED" => Ok(TrainingStatus::Completed),
            "CANCELED" => Ok(TrainingStatus::Canceled),
            _ => Err(UnknownTrainingStatus(value.to_owned())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTrainingStatus(pub String);

impl Display for UnknownTrainingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown training status [status: {}]", self.0)
    }
}

impl Error for UnknownTrainingStatus {}

/// The backend either sends participants as plain IDs or as populated members.
#[derive(Deserialize)]
#[serde(untagged)]
enum Participant {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
    },
}

fn deserialize_participant_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let participants = Option::<Vec<Participant>>::deserialize(deserializer)?;
    Ok(participants
        .unwrap_or_default()
        .into_iter()
        .map(|participant| match participant {
            Participant::Id(id) => id,
            Participant::Populated { id } => id,
        })
        .collect())
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::TimeZone;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn cs_training() -> Training {
        Training::new(
            "train1".to_owned(),
            "64124b9114a24f13c339bb21".to_owned(),
            "Counter Strike 2".to_owned(),
            "CS2".to_owned(),
            "Retakes on Mirage".to_owned(),
            Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 22, 0, 0).unwrap(),
            TrainingStatus::Completed,
            vec!["1".to_owned(), "2".to_owned()],
        )
    }

    pub fn lol_training() -> Training {
        Training::new(
            "train2".to_owned(),
            "64124b9114a24f13c339bb22".to_owned(),
            "League of Legends".to_owned(),
            "LOL".to_owned(),
            "".to_owned(),
            Utc.with_ymd_and_hms(2025, 3, 11, 19, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 11, 22, 0, 0).unwrap(),
            TrainingStatus::Scheduled,
            vec![],
        )
    }

    #[test]
    fn should_deserialize_populated_participants() {
        let json = r#"{"_id":"train1","modalityId":"64124b9114a24f13c339bb21","modalityName":"Counter Strike 2","modalityTag":"CS2","description":"Retakes on Mirage","startTimestamp":"2025-03-10T20:00:00Z","endTimestamp":"2025-03-10T22:00:00.000Z","status":"COMPLETED","attendedPlayers":[{"_id":"1","name":"Jon Doe"},"2"]}"#;

        let training: Training = serde_json::from_str(json).unwrap();

        assert_eq!(cs_training(), training);
    }

    #[test]
    fn should_deserialize_training_without_optional_fields() {
        let json = r#"{"_id":"train2","modalityId":"64124b9114a24f13c339bb22","startTimestamp":"2025-03-11T19:00:00Z","endTimestamp":"2025-03-11T22:00:00Z"}"#;

        let training: Training = serde_json::from_str(json).unwrap();

        assert_eq!(TrainingStatus::Scheduled, *training.status());
        assert!(training.attended_players().is_empty());
        assert_eq!("", training.modality_name());
    }

    #[parameterized(
        value = {"SCHEDULED", "running", "Completed", "CANCELED"},
        expected_status = {TrainingStatus::Scheduled, TrainingStatus::Running, TrainingStatus::Completed, TrainingStatus::Canceled}
    )]
    fn should_parse_status(value: &str, expected_status: TrainingStatus) {
        assert_eq!(Ok(expected_status), value.parse::<TrainingStatus>());
    }

    #[test]
    fn should_fail_to_parse_unknown_status() {
        assert_eq!(
            Err(UnknownTrainingStatus("POSTPONED".to_owned())),
            "POSTPONED".parse::<TrainingStatus>()
        );
    }
}
