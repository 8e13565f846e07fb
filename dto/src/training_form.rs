use crate::modality::Modality;
use crate::training::{Training, TrainingStatus};
use chrono::{DateTime, Duration, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const DEFAULT_TRAINING_DURATION_IN_HOURS: i64 = 2;

/// The content of a training creation or edition form.
/// Each `with_*` method returns an updated copy, so that a form is never modified in place.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingForm {
    modality_id: String,
    modality_name: String,
    modality_tag: String,
    description: String,
    start_timestamp: DateTime<Utc>,
    end_timestamp: DateTime<Utc>,
    status: TrainingStatus,
    attended_players: Vec<String>,
}

impl TrainingForm {
    /// A scheduled training starting at `now` and lasting two hours, without any modality.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            modality_id: String::new(),
            modality_name: String::new(),
            modality_tag: String::new(),
            description: String::new(),
            start_timestamp: now,
            end_timestamp: now + Duration::hours(DEFAULT_TRAINING_DURATION_IN_HOURS),
            status: TrainingStatus::Scheduled,
            attended_players: vec![],
        }
    }

    /// Select a modality. Its name and tag are copied along with its ID.
    pub fn with_modality(self, modality: &Modality) -> Self {
        Self {
            modality_id: modality.id().clone(),
            modality_name: modality.name().clone(),
            modality_tag: modality.tag().clone(),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_schedule(self, start_timestamp: DateTime<Utc>, end_timestamp: DateTime<Utc>) -> Self {
        Self {
            start_timestamp,
            end_timestamp,
            ..self
        }
    }

    pub fn with_status(self, status: TrainingStatus) -> Self {
        Self { status, ..self }
    }

    /// Add a participant. Adding the same member twice has no effect.
    pub fn with_participant(self, member_id: impl Into<String>) -> Self {
        let member_id = member_id.into();
        let mut attended_players = self.attended_players;
        if !attended_players.contains(&member_id) {
            attended_players.push(member_id);
        }
        Self {
            attended_players,
            ..self
        }
    }

    pub fn without_participant(self, member_id: &str) -> Self {
        let attended_players = self
            .attended_players
            .into_iter()
            .filter(|id| id != member_id)
            .collect();
        Self {
            attended_players,
            ..self
        }
    }

    #[cfg(any(test, feature = "test"))]
    /// Turn the form into a training, once the backend has attributed it an ID.
    pub fn into_training(self, id: String) -> Training {
        Training::new(
            id,
            self.modality_id,
            self.modality_name,
            self.modality_tag,
            self.description,
            self.start_timestamp,
            self.end_timestamp,
            self.status,
            self.attended_players,
        )
    }
}

impl Default for TrainingForm {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl From<&Training> for TrainingForm {
    fn from(training: &Training) -> Self {
        Self {
            modality_id: training.modality_id().clone(),
            modality_name: training.modality_name().clone(),
            modality_tag: training.modality_tag().clone(),
            description: training.description().clone(),
            start_timestamp: *training.start_timestamp(),
            end_timestamp: *training.end_timestamp(),
            status: *training.status(),
            attended_players: training.attended_players().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modality::tests::counter_strike;
    use crate::training::tests::cs_training;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap()
    }

    #[test]
    fn should_create_scheduled_two_hours_training() {
        let form = TrainingForm::new(now());

        assert_eq!(TrainingStatus::Scheduled, *form.status());
        assert_eq!(now(), *form.start_timestamp());
        assert_eq!(
            Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap(),
            *form.end_timestamp()
        );
        assert!(form.attended_players().is_empty());
    }

    #[test]
    fn should_copy_modality_details() {
        let form = TrainingForm::new(now()).with_modality(&counter_strike());

        assert_eq!("64124b9114a24f13c339bb21", form.modality_id());
        assert_eq!("Counter Strike 2", form.modality_name());
        assert_eq!("CS2", form.modality_tag());
    }

    #[test]
    fn should_not_add_participant_twice() {
        let form = TrainingForm::new(now())
            .with_participant("1")
            .with_participant("2")
            .with_participant("1");

        assert_eq!(&vec!["1".to_owned(), "2".to_owned()], form.attended_players());
    }

    #[test]
    fn should_remove_participant() {
        let form = TrainingForm::new(now())
            .with_participant("1")
            .with_participant("2")
            .without_participant("1")
            .without_participant("3");

        assert_eq!(&vec!["2".to_owned()], form.attended_players());
    }

    #[test]
    fn should_edit_existing_training() {
        let training = cs_training();

        let form = TrainingForm::from(&training).with_status(TrainingStatus::Canceled);
        let edited_training = form.into_training(training.id().clone());

        assert_eq!(TrainingStatus::Canceled, *edited_training.status());
        assert_eq!(training.attended_players(), edited_training.attended_players());
        assert_eq!(training.start_timestamp(), edited_training.start_timestamp());
    }
}
