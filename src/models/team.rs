//! Team records and the admin team form.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::{error::NuflError, Result, TeamId};

/// A club as returned by `GET /teams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stadium: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub founded: Option<u16>,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Only present on list responses.
    #[serde(default, deserialize_with = "lenient::opt_parsed")]
    pub player_count: Option<u32>,
}

/// Form state for creating or editing a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamDraft {
    pub name: String,
    pub university: Option<String>,
    pub city: Option<String>,
    pub founded: Option<u16>,
    pub coach: Option<String>,
    pub stadium: Option<String>,
    pub logo_url: Option<String>,
}

impl TeamDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NuflError::MissingField { field: "name" });
        }
        Ok(())
    }
}

impl From<&Team> for TeamDraft {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            university: team.university.clone(),
            city: team.city.clone(),
            founded: team.founded,
            coach: team.coach.clone(),
            stadium: team.stadium.clone(),
            logo_url: team.logo_url.clone(),
        }
    }
}

/// Name of the team with `id`, or `"Unknown Team"`.
pub fn team_name(teams: &[Team], id: TeamId) -> &str {
    teams
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.as_str())
        .unwrap_or("Unknown Team")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_list_payload() {
        let team: Team = serde_json::from_value(json!({
            "id": 3,
            "name": "Riverside Rovers",
            "university": "Riverside University",
            "city": "Leeds",
            "founded": "1998",
            "coach": "A. Coach",
            "stadium": "Campus Park",
            "logo_url": null,
            "player_count": 18
        }))
        .unwrap();

        assert_eq!(team.id, TeamId::new(3));
        assert_eq!(team.founded, Some(1998));
        assert_eq!(team.player_count, Some(18));
        assert_eq!(team.logo_url, None);
    }

    #[test]
    fn test_team_single_payload_without_count() {
        let team: Team =
            serde_json::from_value(json!({"id": 1, "name": "Hall FC", "founded": 1901})).unwrap();
        assert_eq!(team.founded, Some(1901));
        assert_eq!(team.player_count, None);
        assert_eq!(team.city, None);
    }

    #[test]
    fn test_draft_copies_every_field() {
        let team = Team {
            id: TeamId::new(9),
            name: "Dockside".to_string(),
            university: Some("Port Uni".to_string()),
            city: Some("Hull".to_string()),
            stadium: Some("The Docks".to_string()),
            founded: Some(1950),
            coach: Some("J. Smith".to_string()),
            logo_url: Some("http://img/logo.png".to_string()),
            player_count: Some(20),
        };
        let draft = TeamDraft::from(&team);

        assert_eq!(draft.name, team.name);
        assert_eq!(draft.university, team.university);
        assert_eq!(draft.city, team.city);
        assert_eq!(draft.stadium, team.stadium);
        assert_eq!(draft.founded, team.founded);
        assert_eq!(draft.coach, team.coach);
        assert_eq!(draft.logo_url, team.logo_url);
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(matches!(
            TeamDraft::default().validate(),
            Err(NuflError::MissingField { field: "name" })
        ));
        let draft = TeamDraft {
            name: "Hall FC".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_team_name_lookup() {
        let teams = vec![Team {
            id: TeamId::new(1),
            name: "Hall FC".to_string(),
            university: None,
            city: None,
            stadium: None,
            founded: None,
            coach: None,
            logo_url: None,
            player_count: None,
        }];
        assert_eq!(team_name(&teams, TeamId::new(1)), "Hall FC");
        assert_eq!(team_name(&teams, TeamId::new(2)), "Unknown Team");
    }
}
