//! Whitespace-token reader for the trip case format: a case count, then per
//! case a location count and road count followed by that many
//! `source target weight` triples.

use std::str::{FromStr, SplitWhitespace};

use anyhow::{Context, Result};
use detour_core::constants::{LocationId, Weight};

#[derive(Debug, PartialEq, Eq)]
pub struct TripCase {
    pub locations: usize,
    pub roads: Vec<(LocationId, LocationId, Weight)>,
}

fn next_int<T>(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = tokens
        .next()
        .with_context(|| format!("Unexpected end of input while reading {what}"))?;
    token
        .parse::<T>()
        .with_context(|| format!("Invalid {what}: {token:?}"))
}

/// Parses all declared cases. Tokens after the final case are ignored;
/// missing or non-integer tokens are errors.
pub fn parse_cases(input: &str) -> Result<Vec<TripCase>> {
    let mut tokens = input.split_whitespace();

    let case_count: usize = next_int(&mut tokens, "case count")?;
    let mut cases = Vec::with_capacity(case_count);

    for case in 1..=case_count {
        let locations: usize =
            next_int(&mut tokens, "location count").with_context(|| format!("Case {case}"))?;
        let road_count: usize =
            next_int(&mut tokens, "road count").with_context(|| format!("Case {case}"))?;

        let mut roads = Vec::with_capacity(road_count);
        for road in 1..=road_count {
            let source = next_int(&mut tokens, "road source")
                .with_context(|| format!("Case {case}, road {road}"))?;
            let target = next_int(&mut tokens, "road target")
                .with_context(|| format!("Case {case}, road {road}"))?;
            let weight = next_int(&mut tokens, "road weight")
                .with_context(|| format!("Case {case}, road {road}"))?;
            roads.push((source, target, weight));
        }

        cases.push(TripCase { locations, roads });
    }

    Ok(cases)
}
