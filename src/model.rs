//! Records read from the store and the values derived from them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::error::InvalidInputError;
use crate::money::Money;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// A person's membership in one trip. This is the key all debts use.
    ParticipantId
);
id_type!(
    /// A login account; one user has a different participant per trip.
    UserId
);
id_type!(ExpenseId);
id_type!(TripId);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "participant_id")]
    pub id: ParticipantId,
    pub user_id: UserId,
    /// Mutable and not unique within a trip.
    #[serde(rename = "username", default)]
    pub display_name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, user_id: UserId, display_name: impl Into<String>) -> Self {
        Participant {
            id,
            user_id,
            display_name: display_name.into(),
        }
    }
}

/// One payment logged for the trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "expense_id")]
    pub id: ExpenseId,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "paid_by")]
    pub payer: ParticipantId,
    #[serde(rename = "shared_between")]
    pub beneficiaries: Vec<ParticipantId>,
}

impl Expense {
    /// Rejects negative amounts. Zero is allowed.
    pub fn checked_amount(&self) -> Result<Money, InvalidInputError> {
        if self.amount.is_negative() {
            return Err(InvalidInputError::NegativeAmount {
                expense: self.id,
                amount: self.amount,
            });
        }
        Ok(self.amount)
    }
}

/// A participant's signed deviation from an even share of the trip's spend.
/// Positive means they are owed money, negative means they owe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Balance {
    pub participant: ParticipantId,
    pub net: Money,
}

impl Balance {
    pub fn new(participant: ParticipantId, net: Money) -> Self {
        Balance { participant, net }
    }
}

/// A payment one participant has to make to another to settle up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

impl Transfer {
    pub fn new(
        from: ParticipantId,
        to: ParticipantId,
        amount: Money,
    ) -> Result<Self, InvalidInputError> {
        if !amount.is_positive() {
            return Err(InvalidInputError::NonPositiveTransfer(amount));
        }
        if from == to {
            return Err(InvalidInputError::SelfTransfer(from));
        }
        Ok(Transfer { from, to, amount })
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.from, self.to, self.amount)
    }
}

/// Looks up display names by participant id.
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory<'a> {
    names: HashMap<ParticipantId, &'a str>,
}

impl<'a> ParticipantDirectory<'a> {
    pub fn new(participants: &'a [Participant]) -> Self {
        let names = participants
            .iter()
            .map(|p| (p.id, p.display_name.as_str()))
            .collect();
        ParticipantDirectory { names }
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.names.contains_key(&id)
    }

    /// The participant's display name, or `Participant {id}` when the
    /// participant is unknown or has no name.
    pub fn name_of(&self, id: ParticipantId) -> Cow<'a, str> {
        match self.names.get(&id) {
            Some(name) if !name.is_empty() => Cow::Borrowed(*name),
            _ => Cow::Owned(format!("Participant {id}")),
        }
    }
}
