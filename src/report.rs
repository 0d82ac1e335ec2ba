use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::aggregate::total_paid;
use crate::config::EconomyConfig;
use crate::error::EconomyError;
use crate::gross::gross_debts;
use crate::model::{ParticipantDirectory, ParticipantId};
use crate::money::Money;
use crate::netting::net_balances;
use crate::personal::{personal_debts, PersonalDebt};
use crate::session::SessionContext;
use crate::settle::settle;
use crate::store::TripSnapshot;

/// How much one payer has put into the trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpendingShare {
    pub name: String,
    pub paid: Money,
}

/// Everything the economy page shows one viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EconomyReport {
    pub total_spent: Money,
    /// Payers in the order they first paid.
    pub spending: Vec<SpendingShare>,
    /// Gross, per-expense debts by payer name.
    pub you_owe: IndexMap<String, Money>,
    /// What the viewer pays to settle up.
    pub settlement: Vec<PersonalDebt>,
}

impl EconomyReport {
    pub fn compute(snapshot: &TripSnapshot, session: &SessionContext) -> Result<Self, EconomyError> {
        let directory = ParticipantDirectory::new(&snapshot.participants);

        let spending = spending_by_payer(snapshot, &directory)?;
        let total_spent: Money = spending.iter().map(|s| s.paid).sum();

        let you_owe = gross_debts(&snapshot.expenses, session, &directory)?;

        let totals = total_paid(&snapshot.expenses, &snapshot.participants)?;
        let balances = net_balances(&totals, &snapshot.participants)?;
        let transfers = settle(&balances);
        let settlement = personal_debts(&transfers, session, &directory);

        Ok(EconomyReport {
            total_spent,
            spending,
            you_owe,
            settlement,
        })
    }

    /// Renders the report as the lines the economy page prints.
    pub fn render(&self, config: &EconomyConfig) -> String {
        let symbol = &config.currency_symbol;
        let mut lines = vec![format!("TOTAL: {symbol}{}", self.total_spent), String::new()];

        lines.push("YOU OWE".to_string());
        if self.you_owe.is_empty() {
            lines.push(config.settled_message.clone());
        } else {
            lines.extend(self.you_owe.iter().map(|(name, owed)| {
                let name = if config.uppercase_names {
                    name.to_uppercase()
                } else {
                    name.clone()
                };
                format!("{name}: {symbol}{owed}")
            }));
        }

        lines.push(String::new());
        lines.push("Settlement Summary".to_string());
        if self.settlement.is_empty() {
            lines.push(config.settled_message.clone());
        } else {
            lines.extend(
                self.settlement
                    .iter()
                    .map(|debt| format!("You pay {}: {symbol}{}", debt.to_name, debt.amount)),
            );
        }

        lines.iter().join("\n")
    }
}

// Totals per payer, for the spending breakdown. Unlike `total_paid` this only
// lists people who actually paid, including payers no longer in the trip.
fn spending_by_payer(
    snapshot: &TripSnapshot,
    directory: &ParticipantDirectory<'_>,
) -> Result<Vec<SpendingShare>, EconomyError> {
    let mut paid: IndexMap<ParticipantId, Money> = IndexMap::new();
    for expense in &snapshot.expenses {
        *paid.entry(expense.payer).or_insert(Money::ZERO) += expense.checked_amount()?;
    }

    Ok(paid
        .into_iter()
        .map(|(payer, amount)| SpendingShare {
            name: directory.name_of(payer).into_owned(),
            paid: amount.round2(),
        })
        .collect())
}
