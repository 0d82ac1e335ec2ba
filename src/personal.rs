use serde::Serialize;

use crate::model::{ParticipantDirectory, Transfer};
use crate::money::Money;
use crate::session::SessionContext;

/// A payment the viewer has to make.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonalDebt {
    pub to_name: String,
    pub amount: Money,
}

/// The viewer's side of a settlement, in settlement order.
pub fn personal_debts(
    transfers: &[Transfer],
    session: &SessionContext,
    directory: &ParticipantDirectory<'_>,
) -> Vec<PersonalDebt> {
    transfers
        .iter()
        .filter(|t| t.from == session.viewer())
        .map(|t| PersonalDebt {
            to_name: directory.name_of(t.to).into_owned(),
            amount: t.amount,
        })
        .collect()
}
