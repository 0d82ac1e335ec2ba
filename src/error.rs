use thiserror::Error;

use crate::model::{ExpenseId, ParticipantId, UserId};
use crate::money::Money;

/// Input the debt computation refuses to work with. Nothing is computed when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("a trip needs at least one participant to split expenses")]
    NoParticipants,
    #[error("expense {expense} has a negative amount of {amount}")]
    NegativeAmount { expense: ExpenseId, amount: Money },
    #[error("{0:?} is not a valid amount")]
    MalformedAmount(String),
    #[error("expense {0} is not shared between anyone")]
    NoBeneficiaries(ExpenseId),
    #[error("user {0} is not a participant of this trip")]
    NotAParticipant(UserId),
    #[error("participant {0} is not part of this trip")]
    UnknownParticipant(ParticipantId),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("transfer amount {0} is less than or equal to 0")]
    NonPositiveTransfer(Money),
    #[error("participant {0} cannot transfer money to themselves")]
    SelfTransfer(ParticipantId),
}

/// Failures reported by the record store. They are handed back to the caller
/// untouched; the core never retries or reinterprets them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not authorized to access this trip")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EconomyError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EconomyError {
    /// Callers send the user back to the login flow when this is true.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, EconomyError::Store(StoreError::Unauthorized))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
