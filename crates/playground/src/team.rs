//! The entity the demos look up, and how they render it.

use serde::{Deserialize, Serialize};

/// Fallback shown when a single lookup yields no team.
pub const NO_TEAM: &str = "No team!";

/// Fallback shown when a query yields no teams.
pub const NO_TEAMS: &str = "No teams!";

/// A team as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "nbMembers")]
    pub nb_members: u32,
}

#[cfg(test)]
impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, nb_members: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nb_members,
        }
    }
}

/// `"Team {name} has {members} members!"`
pub fn format_one(team: &Team) -> String {
    format!("Team {} has {} members!", team.name, team.nb_members)
}

/// Formats at most the first three teams, one per line.
///
/// Stops pulling after the third team, so a lazy source is never drained
/// further than needed. Returns [`NO_TEAMS`] when there is nothing to show.
pub fn format_three(teams: impl IntoIterator<Item = Team>) -> String {
    let lines: Vec<String> = teams.into_iter().take(3).map(|t| format_one(&t)).collect();
    if lines.is_empty() {
        NO_TEAMS.to_string()
    } else {
        lines.join("\n")
    }
}
