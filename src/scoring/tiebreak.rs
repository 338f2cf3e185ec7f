use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::engine::{hundredths, round2, ScoredCandidate};

/// Raw weighted scores closer than this are treated as equal.
pub const WEIGHTED_EPSILON: f64 = 0.001;

/// Smallest score difference visible at 2 decimals.
pub const TIE_STEP: f64 = 0.01;

/// Make every `final_score` unique at 2 decimals.
///
/// Candidates sharing a base score get strictly decreasing increments
/// (`n * 0.01` for the best of `n`, down to `0.01`). If an increment lands a
/// candidate on someone else's score, a final sweep lifts the better of the
/// two by the minimum needed, keeping the tie order.
pub(crate) fn resolve_ties(scored: &mut [ScoredCandidate]) {
    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, entry) in scored.iter().enumerate() {
        groups.entry(hundredths(entry.base_score)).or_default().push(i);
    }

    for members in groups.values_mut().filter(|m| m.len() > 1) {
        order_tied(scored, members);
        let size = members.len();
        for (position, &i) in members.iter().enumerate() {
            let increment = (size - position) as f64 * TIE_STEP;
            let entry = &mut scored[i];
            entry.final_score = round2(entry.base_score + increment);
            entry.tie_break = round2(entry.final_score - entry.base_score);
        }
    }

    separate_collisions(scored);
}

/// Order tied candidates best-first: higher raw weighted score wins, and
/// runs of scores within `WEIGHTED_EPSILON` of each other go by name.
fn order_tied(scored: &[ScoredCandidate], members: &mut [usize]) {
    members.sort_by(|&a, &b| {
        scored[b]
            .weighted_score
            .total_cmp(&scored[a].weighted_score)
            .then_with(|| scored[a].candidate.cmp(&scored[b].candidate))
    });

    let mut start = 0;
    while start < members.len() {
        let mut end = start + 1;
        while end < members.len()
            && scored[members[end - 1]].weighted_score - scored[members[end]].weighted_score
                < WEIGHTED_EPSILON
        {
            end += 1;
        }
        members[start..end].sort_by_key(|&i| scored[i].candidate);
        start = end;
    }
}

fn separate_collisions(scored: &mut [ScoredCandidate]) {
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by_key(|&i| Reverse(hundredths(scored[i].final_score)));

    let mut start = 0;
    while start < order.len() {
        let key = hundredths(scored[order[start]].final_score);
        let mut end = start + 1;
        while end < order.len() && hundredths(scored[order[end]].final_score) == key {
            end += 1;
        }
        if end - start > 1 {
            order_tied(scored, &mut order[start..end]);
        }
        start = end;
    }

    // Bottom-up: each entry must sit at least one hundredth above the next.
    // Scores beyond i64 hundredths saturate instead of wrapping.
    for position in (0..order.len().saturating_sub(1)).rev() {
        let below = hundredths(scored[order[position + 1]].final_score);
        let entry = &mut scored[order[position]];
        if hundredths(entry.final_score) <= below {
            entry.final_score = below.saturating_add(1) as f64 / 100.0;
            entry.tie_break = round2(entry.final_score - entry.base_score);
        }
    }
}
