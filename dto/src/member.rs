use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A club member, as stored by the club backend.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discord_id: Option<String>,
    #[serde(default)]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modality: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    teams: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pae_hours: Option<u32>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        email: String,
        discord_id: Option<String>,
        role: Role,
        modality: Option<String>,
        teams: Vec<String>,
        pae_hours: Option<u32>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            discord_id,
            role,
            modality,
            teams,
            pae_hours,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Captain,
    Admin,
}

impl Role {
    /// Value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Captain => "captain",
            Role::Admin => "admin",
        }
    }

    #[cfg(any(test, feature = "test"))]
    /// Human-readable name, as displayed in members tables.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Captain => "Captain",
            Role::Admin => "Admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn jon_doe() -> Member {
        Member::new(
            "1".to_owned(),
            "Jon Doe".to_owned(),
            "24.01193-2@club.org".to_owned(),
            Some("000000000000000001".to_owned()),
            Role::Captain,
            Some("CS2".to_owned()),
            vec!["Academy".to_owned()],
            Some(15),
        )
    }

    pub fn jonette_snow() -> Member {
        Member::new(
            "2".to_owned(),
            "Jonette Snow".to_owned(),
            "24.02193-3@club.org".to_owned(),
            Some("000000000000000002".to_owned()),
            Role::Member,
            Some("LOL".to_owned()),
            vec![],
            Some(12),
        )
    }

    /// A member with none of the optional fields.
    pub fn john_smith() -> Member {
        Member::new(
            "3".to_owned(),
            "John Smith".to_owned(),
            "john.smith@club.org".to_owned(),
            None,
            Role::Admin,
            None,
            vec![],
            None,
        )
    }

    #[test]
    fn should_deserialize_member_without_optional_fields() {
        let json = r#"{"_id":"3","name":"John Smith","email":"john.smith@club.org","role":"admin"}"#;

        let member: Member = serde_json::from_str(json).unwrap();

        assert_eq!(john_smith(), member);
    }

    #[test]
    fn should_serialize_member_with_wire_names() {
        let value = serde_json::to_value(jon_doe()).unwrap();

        assert_eq!("1", value["_id"]);
        assert_eq!("000000000000000001", value["discordId"]);
        assert_eq!("captain", value["role"]);
        assert_eq!(15, value["paeHours"]);
        assert_eq!("Academy", value["teams"][0]);
    }

    #[test]
    fn should_default_to_member_role() {
        let json = r#"{"_id":"4","name":"Nobody","email":"nobody@club.org"}"#;

        let member: Member = serde_json::from_str(json).unwrap();

        assert_eq!(Role::Member, *member.role());
        assert_eq!("Member", member.role().label());
    }
}
