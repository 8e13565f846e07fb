use crate::member::{Member, Role};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The content of a member creation or edition form.
/// Each `with_*` method returns an updated copy, so that a form is never modified in place.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberForm {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    discord_id: Option<String>,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    modality: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    teams: Vec<String>,
    pae_hours: u32,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            discord_id: None,
            role: Role::Member,
            modality: None,
            teams: vec![],
            pae_hours: 0,
        }
    }
}

impl MemberForm {
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    /// A blank Discord ID clears the field.
    pub fn with_discord_id(self, discord_id: impl Into<String>) -> Self {
        Self {
            discord_id: non_blank(discord_id.into()),
            ..self
        }
    }

    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    /// A blank modality clears the field.
    pub fn with_modality(self, modality: impl Into<String>) -> Self {
        Self {
            modality: non_blank(modality.into()),
            ..self
        }
    }

    pub fn with_teams(self, teams: Vec<String>) -> Self {
        Self { teams, ..self }
    }

    pub fn with_pae_hours(self, pae_hours: u32) -> Self {
        Self { pae_hours, ..self }
    }

    #[cfg(any(test, feature = "test"))]
    /// Turn the form into a member, once the backend has attributed it an ID.
    pub fn into_member(self, id: String) -> Member {
        Member::new(
            id,
            self.name,
            self.email,
            self.discord_id,
            self.role,
            self.modality,
            self.teams,
            Some(self.pae_hours),
        )
    }
}

impl From<&Member> for MemberForm {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name().clone(),
            email: member.email().clone(),
            discord_id: member.discord_id().clone(),
            role: *member.role(),
            modality: member.modality().clone(),
            teams: member.teams().clone(),
            pae_hours: member.pae_hours().unwrap_or_default(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::{jon_doe, john_smith};

    #[test]
    fn should_create_default_form() {
        let form = MemberForm::default();

        assert_eq!("", form.name());
        assert_eq!(Role::Member, *form.role());
        assert_eq!(0, *form.pae_hours());
        assert_eq!(None, *form.discord_id());
    }

    #[test]
    fn should_build_form_without_altering_previous_value() {
        let form = MemberForm::default().with_name("Jon Doe");
        let updated_form = form.clone().with_email("jon@doe.com");

        assert_eq!("", form.email());
        assert_eq!("jon@doe.com", updated_form.email());
        assert_eq!("Jon Doe", updated_form.name());
    }

    #[test]
    fn should_clear_blank_optional_fields() {
        let form = MemberForm::default()
            .with_discord_id("1234")
            .with_modality("CS2")
            .with_discord_id("  ")
            .with_modality("");

        assert_eq!(None, *form.discord_id());
        assert_eq!(None, *form.modality());
    }

    #[test]
    fn should_round_trip_through_member() {
        let member = jon_doe();

        let form = MemberForm::from(&member);

        assert_eq!(member, form.into_member(member.id().clone()));
    }

    #[test]
    fn should_report_missing_hours_as_zero() {
        let form = MemberForm::from(&john_smith());

        assert_eq!(0, *form.pae_hours());
    }

    #[test]
    fn should_deserialize_partial_form() {
        let json = r#"{"name":"Jon Doe","email":"jon@doe.com","role":"captain"}"#;

        let form: MemberForm = serde_json::from_str(json).unwrap();

        assert_eq!(
            MemberForm::default()
                .with_name("Jon Doe")
                .with_email("jon@doe.com")
                .with_role(Role::Captain),
            form
        );
    }
}
