use tripsplit::{
    EconomyConfig, EconomyError, EconomyReport, Expense, ExpenseDraft, ExpenseId, MemoryStore,
    NewExpense, Participant, ParticipantId, RecordStore, SessionContext, StoreError, TripId,
    TripSnapshot, UserId,
};

const TRIP: TripId = TripId(7);

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_trip(
        TRIP,
        vec![
            Participant::new(ParticipantId(1), UserId(100), "Alice"),
            Participant::new(ParticipantId(2), UserId(200), "Bob"),
            Participant::new(ParticipantId(3), UserId(300), "Charlie"),
        ],
    );
    store
}

fn add(store: &mut MemoryStore, payer: u64, description: &str, amount: &str) -> Expense {
    let participants = store.list_participants(TRIP).unwrap();
    let draft = ExpenseDraft {
        payer: Some(ParticipantId(payer)),
        description: description.to_string(),
        amount: amount.to_string(),
    };
    store
        .create_expense(TRIP, draft.validate(&participants).unwrap())
        .unwrap()
}

fn report_for(store: &MemoryStore, user: UserId) -> Result<EconomyReport, EconomyError> {
    let snapshot = TripSnapshot::fetch(store, TRIP)?;
    let session = SessionContext::for_user(user, &snapshot.participants)?;
    EconomyReport::compute(&snapshot, &session)
}

#[test]
fn report_follows_expense_changes() {
    let mut store = seeded_store();
    let dinner = add(&mut store, 1, "Dinner", "90");

    let rendered = report_for(&store, UserId(200))
        .unwrap()
        .render(&EconomyConfig::default());
    assert_eq!(
        rendered,
        "TOTAL: €90.00\n\nYOU OWE\nALICE: €30.00\n\nSettlement Summary\nYou pay Alice: €30.00"
    );

    // Bob pays for the next one, which cuts what he owes Alice.
    add(&mut store, 2, "Museum", "30");
    let report = report_for(&store, UserId(200)).unwrap();
    assert_eq!(report.total_spent.to_string(), "120.00");
    assert_eq!(report.settlement.len(), 1);
    assert_eq!(report.settlement[0].amount.to_string(), "10.00");
    // The gross view still lists the full share of the dinner.
    assert_eq!(report.you_owe["Alice"].to_string(), "30.00");

    store.delete_expense(TRIP, dinner.id).unwrap();
    let report = report_for(&store, UserId(200)).unwrap();
    assert!(report.settlement.is_empty());
    assert!(report.you_owe.is_empty());
}

#[test]
fn editing_an_expense_replaces_it() {
    let mut store = seeded_store();
    let taxi = add(&mut store, 3, "Taxi", "45");

    let participants = store.list_participants(TRIP).unwrap();
    let edited = ExpenseDraft {
        payer: Some(ParticipantId(3)),
        description: "Taxi".to_string(),
        amount: "60".to_string(),
    }
    .validate(&participants)
    .unwrap();
    store.update_expense(TRIP, taxi.id, edited).unwrap();

    let report = report_for(&store, UserId(100)).unwrap();
    assert_eq!(report.total_spent.to_string(), "60.00");
    assert_eq!(report.settlement[0].to_name, "Charlie");
    assert_eq!(report.settlement[0].amount.to_string(), "20.00");
}

#[test]
fn outsiders_cannot_get_a_report() {
    let store = seeded_store();
    assert!(matches!(
        report_for(&store, UserId(999)),
        Err(EconomyError::InvalidInput(tripsplit::InvalidInputError::NotAParticipant(UserId(999))))
    ));
}

struct LockedStore;

impl RecordStore for LockedStore {
    fn list_expenses(&self, _trip: TripId) -> Result<Vec<Expense>, StoreError> {
        Err(StoreError::Unauthorized)
    }

    fn list_participants(&self, _trip: TripId) -> Result<Vec<Participant>, StoreError> {
        Err(StoreError::Unauthorized)
    }

    fn create_expense(&mut self, _trip: TripId, _expense: NewExpense) -> Result<Expense, StoreError> {
        Err(StoreError::Unauthorized)
    }

    fn update_expense(
        &mut self,
        _trip: TripId,
        _id: ExpenseId,
        _expense: NewExpense,
    ) -> Result<Expense, StoreError> {
        Err(StoreError::Unauthorized)
    }

    fn delete_expense(&mut self, _trip: TripId, _id: ExpenseId) -> Result<(), StoreError> {
        Err(StoreError::Unauthorized)
    }
}

#[test]
fn unauthorized_store_errors_reach_the_caller() {
    let err: EconomyError = TripSnapshot::fetch(&LockedStore, TRIP).unwrap_err().into();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "not authorized to access this trip");
}

#[test]
fn other_store_errors_are_not_unauthorized() {
    let err: EconomyError = TripSnapshot::fetch(&seeded_store(), TripId(1)).unwrap_err().into();
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "trip 1 not found");
}
