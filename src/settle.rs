//! Greedy settlement of netted balances.

use itertools::{Either, Itertools};
use std::collections::HashMap;

use crate::model::{Balance, ParticipantId, Transfer};
use crate::money::Money;

/// Returns the transfers that drain every balance to zero.
///
/// Debtors and creditors are each kept in the order they appear in `balances`
/// and matched front to front: the first debtor pays the first creditor until
/// one of them is even, then the cursor on that side moves on. Nothing is
/// sorted by size, so the result is not the fewest possible transfers:
/// debtors owing 10 and 20 facing creditors owed 20 and 10 take three
/// transfers where two would do.
///
/// For whole-cent balances that sum to zero, such as the ones
/// [`net_balances`](crate::net_balances) produces, every residual ends up
/// below a cent. Each transfer is rounded to cents while the unrounded amount
/// is taken off both sides. With sub-cent input the two roundings can add up
/// to just over a cent on one participant. Whatever cannot be matched once one
/// side runs out is left unsettled.
///
/// A participant listed on both sides is never told to pay themselves: that
/// pair is drained without a transfer.
pub fn settle(balances: &[Balance]) -> Vec<Transfer> {
    // Payers carry the amount they owe as a positive number.
    let (mut payers, mut receivers): (Vec<(ParticipantId, Money)>, Vec<(ParticipantId, Money)>) =
        balances
            .iter()
            .filter(|b| !b.net.is_zero())
            .partition_map(|b| {
                if b.net.is_negative() {
                    Either::Left((b.participant, -b.net))
                } else {
                    Either::Right((b.participant, b.net))
                }
            });

    let mut payments: Vec<Transfer> = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < payers.len() && j < receivers.len() {
        let (debtor, owed) = payers[i];
        let (creditor, credit) = receivers[j];
        let amount = owed.min(credit);
        let rounded = amount.round2();

        // Less than half a cent left on one side. Move past it without a
        // transfer, otherwise the loop would spin on a zero payment.
        if rounded.is_zero() {
            if owed.is_settled() {
                i += 1;
            }
            if credit.is_settled() {
                j += 1;
            }
            continue;
        }

        match Transfer::new(debtor, creditor, rounded) {
            Ok(transfer) => payments.push(transfer),
            Err(err) => tracing::warn!(participant = %debtor, %err, "skipping transfer"),
        }

        payers[i].1 -= amount;
        receivers[j].1 -= amount;

        if payers[i].1.is_settled() {
            i += 1;
        }
        if receivers[j].1.is_settled() {
            j += 1;
        }
    }

    tracing::debug!(
        payer_count = payers.len(),
        receiver_count = receivers.len(),
        transfer_count = payments.len(),
        "settled balances"
    );
    payments
}

/// Applies `transfers` to `balances`: the payer's balance goes up by the
/// amount, the receiver's goes down. Settled participants end up at zero.
pub fn residual_balances(balances: &[Balance], transfers: &[Transfer]) -> Vec<Balance> {
    let mut remaining: HashMap<ParticipantId, Money> =
        balances.iter().map(|b| (b.participant, b.net)).collect();

    for transfer in transfers {
        *remaining.entry(transfer.from).or_insert(Money::ZERO) += transfer.amount;
        *remaining.entry(transfer.to).or_insert(Money::ZERO) -= transfer.amount;
    }

    balances
        .iter()
        .map(|b| Balance::new(b.participant, remaining[&b.participant]))
        .collect()
}
