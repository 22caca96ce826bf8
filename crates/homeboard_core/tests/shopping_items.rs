use chrono::{DateTime, Duration, TimeZone, Utc};
use homeboard_core::service::shopping_service::{
    completed_count, ShoppingService, ShoppingServiceError,
};
use homeboard_core::MemoryStore;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap()
}

#[test]
fn items_are_trimmed_and_listed_newest_first() {
    let service = ShoppingService::new(MemoryStore::new());

    let older = service.add_item("user-1", "Rice", now()).unwrap();
    let newer = service
        .add_item("user-1", "  Coffee  ", now() + Duration::minutes(3))
        .unwrap();
    service.add_item("user-2", "Foreign", now()).unwrap();

    assert_eq!(newer.item, "Coffee");

    let items = service.items("user-1").unwrap();
    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let err = service.add_item("user-1", "   ", now()).unwrap_err();
    assert!(matches!(err, ShoppingServiceError::BlankItem));
}

#[test]
fn toggle_flips_completion_both_ways() {
    let service = ShoppingService::new(MemoryStore::new());
    let item = service.add_item("user-1", "Milk", now()).unwrap();

    service.toggle_item(&item).unwrap();
    let reloaded = service.items("user-1").unwrap().remove(0);
    assert!(reloaded.is_completed);

    service.toggle_item(&reloaded).unwrap();
    let reloaded = service.items("user-1").unwrap().remove(0);
    assert!(!reloaded.is_completed);
}

#[test]
fn delete_removes_one_item() {
    let service = ShoppingService::new(MemoryStore::new());
    let item = service.add_item("user-1", "Soap", now()).unwrap();
    service.add_item("user-1", "Sponge", now()).unwrap();

    service.delete_item(item.id).unwrap();

    let items = service.items("user-1").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "Sponge");
}

#[test]
fn clear_completed_sweeps_only_one_account() {
    let service = ShoppingService::new(MemoryStore::new());
    let done = service.add_item("user-1", "Done", now()).unwrap();
    service.add_item("user-1", "Open", now()).unwrap();
    let foreign = service.add_item("user-2", "Foreign done", now()).unwrap();
    service.toggle_item(&done).unwrap();
    service.toggle_item(&foreign).unwrap();

    let removed = service.clear_completed("user-1").unwrap();
    assert_eq!(removed, 1);

    assert_eq!(service.items("user-1").unwrap().len(), 1);
    assert_eq!(service.items("user-2").unwrap().len(), 1);
}

#[test]
fn completed_count_reads_a_loaded_snapshot() {
    let service = ShoppingService::new(MemoryStore::new());
    let done = service.add_item("user-1", "Done", now()).unwrap();
    service.add_item("user-1", "Open", now()).unwrap();
    service.toggle_item(&done).unwrap();

    let items = service.items("user-1").unwrap();
    assert_eq!(completed_count(&items), 1);
}
