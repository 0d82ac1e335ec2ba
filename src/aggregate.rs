use indexmap::IndexMap;

use crate::error::InvalidInputError;
use crate::model::{Expense, Participant, ParticipantId};
use crate::money::Money;

/// Sums what each participant paid, in participant order.
///
/// Every participant gets an entry, zero if they never paid. Only the payer of
/// an expense is credited; who the expense was shared between does not matter
/// here, the netting step splits the whole trip evenly. Expenses paid by
/// someone outside `participants` are skipped.
pub fn total_paid(
    expenses: &[Expense],
    participants: &[Participant],
) -> Result<IndexMap<ParticipantId, Money>, InvalidInputError> {
    let mut totals: IndexMap<ParticipantId, Money> =
        participants.iter().map(|p| (p.id, Money::ZERO)).collect();

    for expense in expenses {
        let amount = expense.checked_amount()?;
        match totals.get_mut(&expense.payer) {
            Some(total) => *total += amount,
            None => tracing::warn!(
                expense = %expense.id,
                payer = %expense.payer,
                "skipping expense paid by someone outside the trip"
            ),
        }
    }

    for total in totals.values_mut() {
        *total = total.round2();
    }

    tracing::debug!(
        participant_count = participants.len(),
        expense_count = expenses.len(),
        "aggregated totals paid"
    );
    Ok(totals)
}
