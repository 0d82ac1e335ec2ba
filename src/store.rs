//! The record store the trip's expenses and participants live in.
//!
//! The debt computation only ever reads a [`TripSnapshot`]. Mutations go
//! through [`RecordStore`] from the caller, which then fetches a fresh snapshot
//! and recomputes. Concurrent writers are not reconciled here: the store keeps
//! whichever write lands last.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::draft::NewExpense;
use crate::error::{EconomyError, InvalidInputError, StoreError};
use crate::model::{Expense, ExpenseId, Participant, ParticipantId, TripId};
use crate::money::Money;

pub trait RecordStore {
    fn list_expenses(&self, trip: TripId) -> Result<Vec<Expense>, StoreError>;

    fn list_participants(&self, trip: TripId) -> Result<Vec<Participant>, StoreError>;

    fn create_expense(&mut self, trip: TripId, expense: NewExpense) -> Result<Expense, StoreError>;

    fn update_expense(
        &mut self,
        trip: TripId,
        id: ExpenseId,
        expense: NewExpense,
    ) -> Result<Expense, StoreError>;

    fn delete_expense(&mut self, trip: TripId, id: ExpenseId) -> Result<(), StoreError>;
}

/// Everything the computation needs about one trip, fetched at one point in
/// time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

impl TripSnapshot {
    /// Reads expenses and participants. Store errors are returned as they
    /// come; nothing is retried.
    pub fn fetch<S: RecordStore + ?Sized>(store: &S, trip: TripId) -> Result<Self, StoreError> {
        let expenses = store.list_expenses(trip)?;
        let participants = store.list_participants(trip)?;
        tracing::debug!(
            trip = %trip,
            expense_count = expenses.len(),
            participant_count = participants.len(),
            "fetched trip snapshot"
        );
        Ok(TripSnapshot {
            participants,
            expenses,
        })
    }

    /// Builds a snapshot from the store's JSON list responses.
    ///
    /// A response that is not the expected shape is a [`StoreError::Other`].
    /// An amount that is not a decimal number is rejected as
    /// [`InvalidInputError::MalformedAmount`] before anything is computed.
    pub fn from_json(expenses: &str, participants: &str) -> Result<Self, EconomyError> {
        let decode =
            |err: serde_json::Error| StoreError::Other(format!("malformed store response: {err}"));
        let stored: Vec<StoredExpense> = serde_json::from_str(expenses).map_err(decode)?;
        Ok(TripSnapshot {
            expenses: stored
                .into_iter()
                .map(StoredExpense::into_expense)
                .collect::<Result<_, _>>()?,
            participants: serde_json::from_str(participants).map_err(decode)?,
        })
    }
}

/// An expense as the store serves it. The amount comes as a decimal string
/// or a bare number and is only parsed once the record is otherwise valid.
#[derive(Debug, Deserialize)]
struct StoredExpense {
    expense_id: ExpenseId,
    amount: Value,
    #[serde(default)]
    description: String,
    paid_by: ParticipantId,
    shared_between: Vec<ParticipantId>,
}

impl StoredExpense {
    fn into_expense(self) -> Result<Expense, InvalidInputError> {
        let amount: Money = match &self.amount {
            Value::String(raw) => raw.parse()?,
            Value::Number(raw) => raw.to_string().parse()?,
            other => return Err(InvalidInputError::MalformedAmount(other.to_string())),
        };
        Ok(Expense {
            id: self.expense_id,
            amount,
            description: self.description,
            payer: self.paid_by,
            beneficiaries: self.shared_between,
        })
    }
}

#[derive(Debug, Default)]
struct TripRecords {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

/// A [`RecordStore`] kept in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trips: HashMap<TripId, TripRecords>,
    next_expense_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Registers a trip with its participants, replacing any previous one.
    pub fn insert_trip(&mut self, trip: TripId, participants: Vec<Participant>) {
        self.trips.insert(
            trip,
            TripRecords {
                participants,
                expenses: Vec::new(),
            },
        );
    }

    fn trip(&self, trip: TripId) -> Result<&TripRecords, StoreError> {
        self.trips
            .get(&trip)
            .ok_or_else(|| StoreError::NotFound(format!("trip {trip}")))
    }

    fn trip_mut(&mut self, trip: TripId) -> Result<&mut TripRecords, StoreError> {
        self.trips
            .get_mut(&trip)
            .ok_or_else(|| StoreError::NotFound(format!("trip {trip}")))
    }
}

fn stored(id: ExpenseId, expense: NewExpense) -> Expense {
    Expense {
        id,
        amount: expense.amount,
        description: expense.description,
        payer: expense.payer,
        beneficiaries: expense.beneficiaries,
    }
}

impl RecordStore for MemoryStore {
    fn list_expenses(&self, trip: TripId) -> Result<Vec<Expense>, StoreError> {
        Ok(self.trip(trip)?.expenses.clone())
    }

    fn list_participants(&self, trip: TripId) -> Result<Vec<Participant>, StoreError> {
        Ok(self.trip(trip)?.participants.clone())
    }

    fn create_expense(&mut self, trip: TripId, expense: NewExpense) -> Result<Expense, StoreError> {
        let id = ExpenseId(self.next_expense_id + 1);
        let records = self.trip_mut(trip)?;
        let created = stored(id, expense);
        records.expenses.push(created.clone());
        self.next_expense_id += 1;
        Ok(created)
    }

    fn update_expense(
        &mut self,
        trip: TripId,
        id: ExpenseId,
        expense: NewExpense,
    ) -> Result<Expense, StoreError> {
        let records = self.trip_mut(trip)?;
        let slot = records
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("expense {id}")))?;
        *slot = stored(id, expense);
        Ok(slot.clone())
    }

    fn delete_expense(&mut self, trip: TripId, id: ExpenseId) -> Result<(), StoreError> {
        let records = self.trip_mut(trip)?;
        let before = records.expenses.len();
        records.expenses.retain(|e| e.id != id);
        if records.expenses.len() == before {
            return Err(StoreError::NotFound(format!("expense {id}")));
        }
        Ok(())
    }
}
