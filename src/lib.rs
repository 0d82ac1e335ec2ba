//! Work out who owes whom on a shared trip.
//!
//! Tripsplit takes the expenses a group logged and derives two things from
//! them: a gross "you owe" list for one participant, and a list of transfers
//! that settles every balance in the group.
//!
//! # Use
//!
//! Participants and expenses come from the record store. The settlement is a
//! pipeline of small pure functions:
//!
//! - [`total_paid`] sums what each participant paid,
//! - [`net_balances`] compares that with an even share of the total,
//! - [`settle`] pairs debtors with creditors, front to front,
//! - [`personal_debts`] keeps the transfers the viewer has to make.
//!
//! [`gross_debts`] is computed straight from the expenses and is not netted,
//! so once more than two people are involved it usually disagrees with the
//! settlement. Both views are kept on purpose.
//!
//! Nothing is cached between calls; recompute after every change to the
//! expenses.
//!
//! ### Examples
//! ```
//! use tripsplit::{
//!     net_balances, personal_debts, settle, total_paid, Expense, ExpenseId, Money,
//!     Participant, ParticipantDirectory, ParticipantId, SessionContext, UserId,
//! };
//!
//! let participants = vec![
//!     Participant::new(ParticipantId(1), UserId(10), "Alice"),
//!     Participant::new(ParticipantId(2), UserId(20), "Bob"),
//!     Participant::new(ParticipantId(3), UserId(30), "Charlie"),
//! ];
//!
//! // Alice paid 90 for dinner for all three.
//! let expenses = vec![Expense {
//!     id: ExpenseId(1),
//!     amount: Money::from_cents(9000),
//!     description: "Dinner".to_string(),
//!     payer: ParticipantId(1),
//!     beneficiaries: vec![ParticipantId(1), ParticipantId(2), ParticipantId(3)],
//! }];
//!
//! let totals = total_paid(&expenses, &participants).unwrap();
//! let balances = net_balances(&totals, &participants).unwrap();
//! let transfers = settle(&balances);
//!
//! for transfer in &transfers {
//!     println!("{}", transfer)
//! }
//! // 2 owes 1 30.00
//! // 3 owes 1 30.00
//!
//! let bob = SessionContext::new(ParticipantId(2));
//! let directory = ParticipantDirectory::new(&participants);
//! let debts = personal_debts(&transfers, &bob, &directory);
//! assert_eq!(debts[0].to_name, "Alice");
//! assert_eq!(debts[0].amount, Money::from_cents(3000));
//! ```

pub mod aggregate;
pub mod config;
pub mod draft;
pub mod error;
pub mod gross;
pub mod model;
pub mod money;
pub mod netting;
pub mod personal;
pub mod report;
pub mod session;
pub mod settle;
pub mod store;

pub use aggregate::total_paid;
pub use config::EconomyConfig;
pub use draft::{ExpenseDraft, NewExpense};
pub use error::{ConfigError, EconomyError, InvalidInputError, StoreError};
pub use gross::gross_debts;
pub use model::{
    Balance, Expense, ExpenseId, Participant, ParticipantDirectory, ParticipantId, Transfer,
    TripId, UserId,
};
pub use money::Money;
pub use netting::{imbalance, net_balances};
pub use personal::{personal_debts, PersonalDebt};
pub use report::{EconomyReport, SpendingShare};
pub use session::SessionContext;
pub use settle::{residual_balances, settle};
pub use store::{MemoryStore, RecordStore, TripSnapshot};
