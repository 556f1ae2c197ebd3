//! In-process source with canned teams, for running the demos offline.

use clap::ValueEnum;
use outcome::{EntitySource, ErrorDetail, ManyOutcome, Request, SingleOutcome, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Which outcome the simulated source answers every call with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Lookups find a team; queries stream the canned teams.
    Found,
    /// Lookups find nothing; queries stream nothing.
    Empty,
    /// Every call fails with `404 not found`.
    Failed,
}

/// An [`EntitySource`] that never touches the network.
///
/// Entities are stored as JSON and decoded into whatever type the caller
/// asks for, the same way a remote response would be.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    scenario: Scenario,
    entities: Vec<Value>,
}

impl SimulatedSource {
    pub fn new(scenario: Scenario) -> Self {
        Self::with_entities(scenario, default_teams())
    }

    pub fn with_entities(scenario: Scenario, entities: Vec<Value>) -> Self {
        Self { scenario, entities }
    }

    fn not_found() -> (StatusCode, ErrorDetail) {
        (StatusCode::new(404), ErrorDetail::new("not found"))
    }

    /// The entity whose `id` matches the last path segment, else the first.
    fn pick(&self, request: &Request) -> Option<&Value> {
        let wanted = request.path().rsplit('/').next().unwrap_or_default();
        self.entities
            .iter()
            .find(|entity| entity.get("id").and_then(Value::as_str) == Some(wanted))
            .or_else(|| self.entities.first())
    }
}

impl EntitySource for SimulatedSource {
    fn fetch_one<T>(&self, request: &Request) -> SingleOutcome<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(scenario = ?self.scenario, request = %request, "simulated lookup");
        match self.scenario {
            Scenario::Found => match self.pick(request) {
                Some(entity) => match serde_json::from_value(entity.clone()) {
                    Ok(value) => SingleOutcome::found(value),
                    Err(err) => SingleOutcome::failed(
                        StatusCode::new(200),
                        ErrorDetail::with_cause("failed to decode response body", err),
                    ),
                },
                None => SingleOutcome::empty(),
            },
            Scenario::Empty => SingleOutcome::empty(),
            Scenario::Failed => {
                let (status, error) = Self::not_found();
                SingleOutcome::failed(status, error)
            }
        }
    }

    fn fetch_many<T>(&self, request: &Request) -> ManyOutcome<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        tracing::debug!(scenario = ?self.scenario, request = %request, "simulated query");
        match self.scenario {
            Scenario::Found => ManyOutcome::stream(
                self.entities
                    .clone()
                    .into_iter()
                    .map_while(|entity| serde_json::from_value(entity).ok()),
            ),
            Scenario::Empty => ManyOutcome::stream(Vec::new()),
            Scenario::Failed => {
                let (status, error) = Self::not_found();
                ManyOutcome::failed(status, error)
            }
        }
    }
}

fn default_teams() -> Vec<Value> {
    vec![
        json!({"id": "lichess-swiss", "name": "Lichess Swiss", "nbMembers": 40}),
        json!({"id": "lichess-curator", "name": "Lichess Curators", "nbMembers": 12}),
        json!({"id": "coders", "name": "Coders", "nbMembers": 7}),
        json!({"id": "lichess-content", "name": "Lichess Content Team", "nbMembers": 25}),
        json!({"id": "lichess-four", "name": "Lichess Four", "nbMembers": 4}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Team;

    #[test]
    fn found_picks_entity_by_last_path_segment() {
        let source = SimulatedSource::new(Scenario::Found);

        let team: SingleOutcome<Team> = source.fetch_one(&Request::get("/api/team/coders"));

        assert_eq!(team.unwrap().name, "Coders");
    }

    #[test]
    fn found_falls_back_to_first_entity() {
        let source = SimulatedSource::new(Scenario::Found);

        let team: SingleOutcome<Team> = source.fetch_one(&Request::get("/api/team/unknown"));

        assert_eq!(team.unwrap().id, "lichess-swiss");
    }

    #[test]
    fn undecodable_entity_is_failed() {
        let source = SimulatedSource::with_entities(Scenario::Found, vec![json!({"id": 1})]);

        let team: SingleOutcome<Team> = source.fetch_one(&Request::get("/api/team/x"));

        assert!(team.is_failed());
    }

    #[test]
    fn queries_stream_every_entity_in_order() {
        let source = SimulatedSource::new(Scenario::Found);

        let ids: Vec<String> = source
            .fetch_many::<Team>(&Request::get("/api/team/search"))
            .into_iter()
            .map(|team| team.id)
            .collect();

        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], "lichess-swiss");
        assert_eq!(ids[4], "lichess-four");
    }

    #[test]
    fn empty_scenario_is_never_a_failure() {
        let source = SimulatedSource::new(Scenario::Empty);

        let one: SingleOutcome<Team> = source.fetch_one(&Request::get("/api/team/x"));
        let many: ManyOutcome<Team> = source.fetch_many(&Request::get("/api/team/search"));

        assert!(one.is_empty());
        assert!(many.is_stream());
        assert_eq!(many.into_iter().count(), 0);
    }

    #[test]
    fn failed_scenario_reports_404() {
        let source = SimulatedSource::new(Scenario::Failed);

        let many: ManyOutcome<Team> = source.fetch_many(&Request::get("/api/team/search"));

        let (status, error) = many.failure().unwrap();
        assert_eq!(status.as_u16(), 404);
        assert_eq!(error.message(), "not found");
    }
}
