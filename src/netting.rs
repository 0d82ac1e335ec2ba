use indexmap::IndexMap;

use crate::error::InvalidInputError;
use crate::model::{Balance, Participant, ParticipantId};
use crate::money::Money;

/// Turns totals paid into balances against an even per-head share.
///
/// The returned balances follow the order of `participants` and include
/// participants who are exactly even. Each balance is rounded to cents, so the
/// set sums to zero only within [`Money::rounding_tolerance`].
pub fn net_balances(
    total_paid: &IndexMap<ParticipantId, Money>,
    participants: &[Participant],
) -> Result<Vec<Balance>, InvalidInputError> {
    let paid_by = |id: &ParticipantId| total_paid.get(id).copied().unwrap_or(Money::ZERO);

    let total: Money = participants.iter().map(|p| paid_by(&p.id)).sum();
    let average = total
        .split(participants.len())
        .ok_or(InvalidInputError::NoParticipants)?;

    let balances: Vec<Balance> = participants
        .iter()
        .map(|p| Balance::new(p.id, (paid_by(&p.id) - average).round2()))
        .collect();

    tracing::debug!(
        participant_count = participants.len(),
        total = %total,
        average = %average.round2(),
        imbalance = %imbalance(&balances),
        "netted balances"
    );
    Ok(balances)
}

/// Sum of all balances; zero up to rounding for a consistent set.
pub fn imbalance(balances: &[Balance]) -> Money {
    balances.iter().map(|b| b.net).sum()
}
