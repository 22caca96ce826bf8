use chrono::{DateTime, Duration, TimeZone, Utc};
use homeboard_core::store::chore_store::ChoreStore;
use homeboard_core::{Chore, ChoreFilter, MemoryStore};
use std::sync::{Arc, Mutex};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 20, 12, 0, 0).unwrap()
}

/// Records every delivered snapshot as a list of chore titles.
fn recording_callback() -> (
    Arc<Mutex<Vec<Vec<String>>>>,
    homeboard_core::ChoreCallback,
) {
    let deliveries: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&deliveries);
    let callback: homeboard_core::ChoreCallback = Arc::new(move |snapshot: &[Chore]| {
        let titles = snapshot.iter().map(|c| c.title.clone()).collect();
        sink.lock().unwrap().push(titles);
    });
    (deliveries, callback)
}

#[test]
fn subscribe_delivers_current_snapshot_immediately() {
    let store = MemoryStore::new();
    let chore = Chore::new("user-1", "Existing", now());
    store.create_chore(&chore).unwrap();

    let (deliveries, callback) = recording_callback();
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();

    let seen = deliveries.lock().unwrap().clone();
    assert_eq!(seen, vec![vec!["Existing".to_string()]]);
    subscription.cancel();
}

#[test]
fn every_committed_write_delivers_a_replacement_snapshot() {
    let store = MemoryStore::new();
    let (deliveries, callback) = recording_callback();
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();

    let first = Chore::new("user-1", "First", now());
    let second = Chore::new("user-1", "Second", now() + Duration::minutes(1));
    store.create_chore(&first).unwrap();
    store.create_chore(&second).unwrap();
    store.set_completion(first.id, true).unwrap();
    store.delete_chore(second.id).unwrap();

    let seen = deliveries.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            Vec::<String>::new(),
            vec!["First".to_string()],
            vec!["First".to_string(), "Second".to_string()],
            vec!["First".to_string(), "Second".to_string()],
            vec!["First".to_string()],
        ]
    );
    subscription.cancel();
}

#[test]
fn writes_for_other_accounts_are_not_delivered() {
    let store = MemoryStore::new();
    let (deliveries, callback) = recording_callback();
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();

    let foreign = Chore::new("user-2", "Foreign", now());
    store.create_chore(&foreign).unwrap();

    // Only the initial empty snapshot was delivered.
    assert_eq!(deliveries.lock().unwrap().len(), 1);
    subscription.cancel();
}

#[test]
fn cancel_stops_snapshot_delivery() {
    let store = MemoryStore::new();
    let (deliveries, callback) = recording_callback();
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();

    subscription.cancel();
    store
        .create_chore(&Chore::new("user-1", "After cancel", now()))
        .unwrap();

    assert_eq!(deliveries.lock().unwrap().len(), 1);
}

#[test]
fn dropping_the_handle_keeps_the_subscription_alive() {
    let store = MemoryStore::new();
    let (deliveries, callback) = recording_callback();
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();
    drop(subscription);

    store
        .create_chore(&Chore::new("user-1", "Still delivered", now()))
        .unwrap();

    assert_eq!(deliveries.lock().unwrap().len(), 2);
}

#[test]
fn service_subscribe_scopes_to_the_service_user() {
    let store = MemoryStore::new();
    let service = homeboard_core::ChoreService::new(store.clone());
    let (deliveries, callback) = recording_callback();
    let subscription = service.subscribe("user-1", callback).unwrap();

    service
        .add_chore("user-1", homeboard_core::NewChore::today("Mine"), now())
        .unwrap();
    service
        .add_chore("user-2", homeboard_core::NewChore::today("Theirs"), now())
        .unwrap();

    let seen = deliveries.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![Vec::<String>::new(), vec!["Mine".to_string()]]
    );
    subscription.cancel();
}

#[test]
fn callback_may_reenter_the_store() {
    let store = MemoryStore::new();
    let reentrant = store.clone();
    let observed: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);

    let callback: homeboard_core::ChoreCallback = Arc::new(move |_snapshot: &[Chore]| {
        let count = reentrant
            .query_chores(&ChoreFilter::for_user("user-1"))
            .unwrap()
            .len();
        sink.lock().unwrap().push(count);
    });
    let subscription = store
        .subscribe_chores(ChoreFilter::for_user("user-1"), callback)
        .unwrap();

    store
        .create_chore(&Chore::new("user-1", "Reentrant", now()))
        .unwrap();

    assert_eq!(observed.lock().unwrap().clone(), vec![0, 1]);
    subscription.cancel();
}
