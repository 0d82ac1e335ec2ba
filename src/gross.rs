use indexmap::IndexMap;

use crate::error::InvalidInputError;
use crate::model::{Expense, ParticipantDirectory};
use crate::money::Money;
use crate::session::SessionContext;

/// What the viewer owes each payer, expense by expense, without netting.
///
/// Every expense paid by someone other than the viewer adds an even share of
/// it to that payer's entry. Entries are keyed by the payer's display name in
/// the order payers are first seen, so two participants with the same name
/// share one entry. Debts in the other direction are never subtracted: if the
/// viewer also paid for that person, both stay on the books. For groups larger
/// than two this rarely matches what [`crate::settle::settle`] asks the viewer
/// to pay.
///
/// The share is taken whether or not the viewer is one of the beneficiaries.
pub fn gross_debts(
    expenses: &[Expense],
    session: &SessionContext,
    directory: &ParticipantDirectory<'_>,
) -> Result<IndexMap<String, Money>, InvalidInputError> {
    let mut debts: IndexMap<String, Money> = IndexMap::new();

    for expense in expenses.iter().filter(|e| e.payer != session.viewer()) {
        let share = expense
            .checked_amount()?
            .split(expense.beneficiaries.len())
            .ok_or(InvalidInputError::NoBeneficiaries(expense.id))?;
        *debts
            .entry(directory.name_of(expense.payer).into_owned())
            .or_insert(Money::ZERO) += share;
    }

    for owed in debts.values_mut() {
        *owed = owed.round2();
    }

    tracing::debug!(
        viewer = %session.viewer(),
        creditor_count = debts.len(),
        "computed gross debts"
    );
    Ok(debts)
}
