//! Different ways of getting a message out of an outcome.
//!
//! Each function is one extraction style. Applied to the same outcome they
//! agree on successes and absences; only the full `match` forms surface the
//! failure detail, the others fall back to [`NO_TEAM`] / [`NO_TEAMS`].

use outcome::{ManyOutcome, SingleOutcome};

use crate::team::{format_one, format_three, Team, NO_TEAM, NO_TEAMS};

// ---------------------------------------------------------------------------
// SingleOutcome<Team>
// ---------------------------------------------------------------------------

/// Not recommended: panics unless the outcome is `Found`.
pub fn one_unchecked(outcome: SingleOutcome<Team>) -> String {
    let team = outcome.unwrap();
    format_one(&team)
}

pub fn one_via_option(outcome: SingleOutcome<Team>) -> String {
    match outcome.into_option() {
        Some(team) => format_one(&team),
        None => NO_TEAM.to_string(),
    }
}

pub fn one_via_map_or(outcome: SingleOutcome<Team>) -> String {
    outcome.map_or(NO_TEAM.to_string(), |team| format_one(&team))
}

pub fn one_if_let(outcome: SingleOutcome<Team>) -> String {
    if let SingleOutcome::Found(team) = outcome {
        format_one(&team)
    } else {
        NO_TEAM.to_string()
    }
}

/// Early return keeps the happy path unindented.
pub fn one_let_else(outcome: SingleOutcome<Team>) -> String {
    let SingleOutcome::Found(team) = outcome else {
        return NO_TEAM.to_string();
    };
    format_one(&team)
}

pub fn one_match(outcome: SingleOutcome<Team>) -> String {
    match outcome {
        SingleOutcome::Found(team) => format_one(&team),
        SingleOutcome::Failed { status, error } => format!("Code: {status} - {}", error.message),
        SingleOutcome::Empty => NO_TEAM.to_string(),
    }
}

/// Runs every single-outcome style over copies of `outcome` and returns the
/// distinct messages in first-seen order.
///
/// The unchecked style only runs on `Found`.
pub fn describe_one(outcome: &SingleOutcome<Team>) -> Vec<String> {
    let mut messages = Vec::new();
    if outcome.is_found() {
        messages.push(one_unchecked(outcome.clone()));
    }
    messages.extend([
        one_via_option(outcome.clone()),
        one_via_map_or(outcome.clone()),
        one_if_let(outcome.clone()),
        one_let_else(outcome.clone()),
        one_match(outcome.clone()),
    ]);
    distinct(messages)
}

// ---------------------------------------------------------------------------
// ManyOutcome<Team>
// ---------------------------------------------------------------------------

/// Takes the sequence regardless of variant; a failure reads as no teams.
pub fn many_unconditional(outcome: ManyOutcome<Team>) -> String {
    format_three(outcome.into_sequence())
}

pub fn many_if_let(outcome: ManyOutcome<Team>) -> String {
    if let ManyOutcome::Stream(teams) = outcome {
        format_three(teams)
    } else {
        NO_TEAMS.to_string()
    }
}

pub fn many_let_else(outcome: ManyOutcome<Team>) -> String {
    let ManyOutcome::Stream(teams) = outcome else {
        return NO_TEAMS.to_string();
    };
    format_three(teams)
}

pub fn many_match(outcome: ManyOutcome<Team>) -> String {
    match outcome {
        ManyOutcome::Stream(teams) => format_three(teams),
        ManyOutcome::Failed { status, error } => format!("Code: {status} - {}", error.message),
    }
}

/// Runs every multi-outcome style and returns the distinct messages.
///
/// A `ManyOutcome` can only be consumed once, so each style gets its own
/// outcome from `fresh` instead of re-querying the remote service.
pub fn describe_many<F>(fresh: F) -> Vec<String>
where
    F: Fn() -> ManyOutcome<Team>,
{
    distinct(vec![
        many_unconditional(fresh()),
        many_if_let(fresh()),
        many_let_else(fresh()),
        many_match(fresh()),
    ])
}

fn distinct(messages: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(messages.len());
    for message in messages {
        if !seen.contains(&message) {
            seen.push(message);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome::StatusCode;

    fn teams(n: u32) -> Vec<Team> {
        (1..=n)
            .map(|i| Team::new(format!("t{i}"), format!("Lichess {i}"), i * 10))
            .collect()
    }

    #[test]
    fn found_team_gives_one_message_across_all_styles() {
        let outcome = SingleOutcome::found(Team::new("x", "X", 40));

        assert_eq!(describe_one(&outcome), vec!["Team X has 40 members!"]);
    }

    #[test]
    fn empty_gives_only_the_fallback() {
        let outcome: SingleOutcome<Team> = SingleOutcome::empty();

        assert_eq!(describe_one(&outcome), vec![NO_TEAM]);
    }

    #[test]
    fn failure_detail_only_reaches_the_match_style() {
        let outcome: SingleOutcome<Team> =
            SingleOutcome::failed(StatusCode::new(404), "not found");

        let matched = one_match(outcome.clone());
        assert!(matched.contains("404"));
        assert!(matched.contains("not found"));

        assert_eq!(one_via_map_or(outcome.clone()), NO_TEAM);
        assert_eq!(one_via_option(outcome.clone()), NO_TEAM);
        assert_eq!(describe_one(&outcome), vec![NO_TEAM.to_string(), matched]);
    }

    #[test]
    #[should_panic(expected = "SingleOutcome::unwrap")]
    fn unchecked_style_panics_on_empty() {
        one_unchecked(SingleOutcome::empty());
    }

    #[test]
    fn stream_gives_first_three_across_all_styles() {
        let list = teams(4);

        let messages = describe_many(|| ManyOutcome::stream(list.clone()));

        assert_eq!(
            messages,
            vec!["Team Lichess 1 has 10 members!\nTeam Lichess 2 has 20 members!\nTeam Lichess 3 has 30 members!"]
        );
    }

    #[test]
    fn empty_stream_gives_the_fallback() {
        let messages = describe_many(|| ManyOutcome::stream(Vec::new()));

        assert_eq!(messages, vec![NO_TEAMS]);
    }

    #[test]
    fn failed_query_detail_only_reaches_the_match_style() {
        let messages =
            describe_many(|| ManyOutcome::failed(StatusCode::new(500), "internal error"));

        assert_eq!(
            messages,
            vec![NO_TEAMS.to_string(), "Code: 500 - internal error".to_string()]
        );
    }
}
