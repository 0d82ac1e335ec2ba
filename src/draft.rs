use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::model::{Participant, ParticipantId};
use crate::money::Money;

/// An expense as typed into the add/edit form, not yet checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub payer: Option<ParticipantId>,
    pub description: String,
    pub amount: String,
}

/// A checked expense ready to be sent to the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    #[serde(rename = "paid_by")]
    pub payer: ParticipantId,
    #[serde(rename = "shared_between")]
    pub beneficiaries: Vec<ParticipantId>,
}

impl ExpenseDraft {
    /// Checks the form and shares the expense between every participant.
    /// The amount is rounded to cents.
    pub fn validate(&self, participants: &[Participant]) -> Result<NewExpense, InvalidInputError> {
        let payer = self.payer.ok_or(InvalidInputError::MissingField("payer"))?;
        if self.description.trim().is_empty() {
            return Err(InvalidInputError::MissingField("description"));
        }
        if self.amount.trim().is_empty() {
            return Err(InvalidInputError::MissingField("amount"));
        }

        let amount: Money = self.amount.parse()?;
        if amount.is_negative() {
            return Err(InvalidInputError::MalformedAmount(self.amount.clone()));
        }
        if !participants.iter().any(|p| p.id == payer) {
            return Err(InvalidInputError::UnknownParticipant(payer));
        }

        Ok(NewExpense {
            amount: amount.round2(),
            description: self.description.clone(),
            payer,
            beneficiaries: participants.iter().map(|p| p.id).collect(),
        })
    }
}
