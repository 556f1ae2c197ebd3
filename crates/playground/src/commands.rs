//! The demo programs. Each writes its results to `out` and works against any
//! [`EntitySource`], so the same code runs over HTTP or the simulation.

use std::io::Write;

use anyhow::{bail, Context, Result};
use outcome::{EntitySource, ManyOutcome, Request, SingleOutcome};

use crate::cli::Command;
use crate::handling::{describe_many, describe_one};
use crate::team::{format_one, Team};

/// How many search hits are kept to replay through each extraction style.
const SEARCH_SNAPSHOT: usize = 4;

pub fn run<S, W>(source: &S, command: &Command, out: &mut W) -> Result<()>
where
    S: EntitySource,
    W: Write,
{
    match command {
        Command::Team { id, path } => team(source, id, path, out),
        Command::Results {
            team_id,
            search,
            team_path,
            search_path,
        } => results(source, team_id, team_path, search, search_path, out),
        Command::Fetch { path, limit, query } => fetch(source, path, query, *limit, out),
    }
}

fn team_request(path_template: &str, id: &str) -> Request {
    Request::get(path_template.replace("{id}", id))
}

/// Looks up one team and prints a sentence about it, or a fallback.
pub fn team<S, W>(source: &S, id: &str, path_template: &str, out: &mut W) -> Result<()>
where
    S: EntitySource,
    W: Write,
{
    let message = source
        .fetch_one::<Team>(&team_request(path_template, id))
        .map_or_else(
            || format!("Couldn't find team {id}"),
            |team| format_one(&team),
        );

    writeln!(out, "{message}").context("failed to write output")?;
    Ok(())
}

/// Runs every extraction style over a lookup and over a search.
///
/// The search is issued once. Its first few matching hits are kept and
/// replayed as fresh outcomes for each style, since a streamed result can
/// only be consumed once.
pub fn results<S, W>(
    source: &S,
    team_id: &str,
    team_path: &str,
    search: &str,
    search_path: &str,
    out: &mut W,
) -> Result<()>
where
    S: EntitySource,
    W: Write,
{
    let one: SingleOutcome<Team> = source.fetch_one(&team_request(team_path, team_id));

    writeln!(out, "Result SingleOutcome<Team>:")?;
    for message in describe_one(&one) {
        writeln!(out, "{message}")?;
    }

    let mut many: ManyOutcome<Team> =
        source.fetch_many(&Request::get(search_path).query("text", search));
    let snapshot: Vec<Team> = many
        .as_sequence()
        .filter(|team| team.name.contains(search))
        .take(SEARCH_SNAPSHOT)
        .collect();
    tracing::debug!(kept = snapshot.len(), "search snapshot taken");

    let fresh = || match many.failure() {
        Some((status, error)) => ManyOutcome::failed(status, error.clone()),
        None => ManyOutcome::stream(snapshot.clone()),
    };

    writeln!(out, "Result ManyOutcome<Team> (3):")?;
    for message in describe_many(fresh) {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

/// Streams arbitrary JSON entities, stopping after `limit`.
///
/// # Errors
///
/// Fails if the query itself failed; a stream that ends early is not an error.
pub fn fetch<S, W>(
    source: &S,
    path: &str,
    query: &[(String, String)],
    limit: usize,
    out: &mut W,
) -> Result<()>
where
    S: EntitySource,
    W: Write,
{
    let request = query
        .iter()
        .fold(Request::get(path), |request, (key, value)| request.query(key.as_str(), value));

    match source.fetch_many::<serde_json::Value>(&request) {
        ManyOutcome::Stream(entities) => {
            for entity in entities.take(limit) {
                writeln!(out, "{entity}").context("failed to write output")?;
            }
            Ok(())
        }
        ManyOutcome::Failed { status, error } => {
            bail!("query {request} failed with status {status}: {error}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::{Scenario, SimulatedSource};
    use rstest::rstest;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[rstest]
    #[case(Scenario::Found, "Team Lichess Swiss has 40 members!\n")]
    #[case(Scenario::Empty, "Couldn't find team lichess-swiss\n")]
    #[case(Scenario::Failed, "Couldn't find team lichess-swiss\n")]
    fn team_prints_sentence_or_fallback(#[case] scenario: Scenario, #[case] expected: &str) {
        let source = SimulatedSource::new(scenario);

        let printed = output(|out| team(&source, "lichess-swiss", "/api/team/{id}", out));

        assert_eq!(printed, expected);
    }

    #[test]
    fn results_agree_across_styles_for_found() {
        let source = SimulatedSource::new(Scenario::Found);

        let printed = output(|out| {
            results(&source, "lichess-swiss", "/api/team/{id}", "Lichess", "/api/team/search", out)
        });

        assert_eq!(
            printed,
            "Result SingleOutcome<Team>:\n\
             Team Lichess Swiss has 40 members!\n\
             Result ManyOutcome<Team> (3):\n\
             Team Lichess Swiss has 40 members!\n\
             Team Lichess Curators has 12 members!\n\
             Team Lichess Content Team has 25 members!\n"
        );
    }

    #[test]
    fn results_show_failure_detail_only_from_match() {
        let source = SimulatedSource::new(Scenario::Failed);

        let printed = output(|out| {
            results(&source, "x", "/api/team/{id}", "Lichess", "/api/team/search", out)
        });

        assert_eq!(
            printed,
            "Result SingleOutcome<Team>:\n\
             No team!\n\
             Code: 404 - not found\n\
             Result ManyOutcome<Team> (3):\n\
             No teams!\n\
             Code: 404 - not found\n"
        );
    }

    #[test]
    fn fetch_stops_at_limit() {
        let source = SimulatedSource::new(Scenario::Found);

        let printed = output(|out| fetch(&source, "/api/team/all", &[], 2, out));

        let lines: Vec<_> = printed.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("lichess-swiss"));
    }

    #[test]
    fn fetch_reports_failed_query_as_error() {
        let source = SimulatedSource::new(Scenario::Failed);
        let mut buffer = Vec::new();

        let err = fetch(&source, "/api/team/all", &[], 2, &mut buffer).unwrap_err();

        assert!(err.to_string().contains("404"));
        assert!(buffer.is_empty());
    }
}
