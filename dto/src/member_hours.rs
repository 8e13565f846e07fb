use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What a member can see about themselves on the hours lookup page.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberHours {
    name: String,
    email: String,
    discord_id: Option<String>,
    modality: Option<String>,
    pae_hours: u32,
}

impl From<&Member> for MemberHours {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name().clone(),
            email: member.email().clone(),
            discord_id: member.discord_id().clone(),
            modality: member.modality().clone(),
            pae_hours: member.pae_hours().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::{jon_doe, john_smith};

    #[test]
    fn should_copy_member_hours() {
        let hours = MemberHours::from(&jon_doe());

        assert_eq!("Jon Doe", hours.name());
        assert_eq!(15, *hours.pae_hours());
    }

    #[test]
    fn should_report_missing_hours_as_zero() {
        let hours = MemberHours::from(&john_smith());

        assert_eq!(0, *hours.pae_hours());
        assert_eq!(None, *hours.discord_id());
    }
}
