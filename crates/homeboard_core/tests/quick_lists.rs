use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use homeboard_core::service::quick_list_service::{
    share_file_stem, QuickListService, QuickListServiceError,
};
use homeboard_core::store::list_store::{QuickListFilter, QuickListStore};
use homeboard_core::MemoryStore;
use uuid::Uuid;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap()
}

#[test]
fn create_list_uses_default_title_and_lists_are_newest_first() {
    let service = QuickListService::new(MemoryStore::new());

    let older = service.create_list("user-1", now()).unwrap();
    let newer = service
        .create_list("user-1", now() + Duration::minutes(5))
        .unwrap();
    service.create_list("user-2", now()).unwrap();

    assert_eq!(older.title, "Quick List");

    let lists = service.lists("user-1").unwrap();
    let ids: Vec<_> = lists.iter().map(|list| list.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[test]
fn rename_trims_and_rejects_blank_titles() {
    let service = QuickListService::new(MemoryStore::new());
    let list = service.create_list("user-1", now()).unwrap();

    let renamed = service
        .rename_list(list.id, "  Weekend Prep  ", now() + Duration::minutes(1))
        .unwrap();
    assert_eq!(renamed.title, "Weekend Prep");
    assert_eq!(renamed.updated_at, Some(now() + Duration::minutes(1)));

    let err = service.rename_list(list.id, "   ", now()).unwrap_err();
    assert!(matches!(err, QuickListServiceError::BlankTitle));

    let ghost = Uuid::new_v4();
    let err = service.rename_list(ghost, "Title", now()).unwrap_err();
    assert!(matches!(err, QuickListServiceError::ListNotFound(id) if id == ghost));
}

#[test]
fn archived_lists_are_hidden_from_the_default_query() {
    let store = MemoryStore::new();
    let service = QuickListService::new(store.clone());
    let list = service.create_list("user-1", now()).unwrap();

    service.archive_list(list.id, now()).unwrap();

    assert!(service.lists("user-1").unwrap().is_empty());
    let mut filter = QuickListFilter::for_user("user-1");
    filter.include_archived = true;
    assert_eq!(store.query_lists(&filter).unwrap().len(), 1);
}

#[test]
fn items_append_in_order_and_toggle_in_place() {
    let service = QuickListService::new(MemoryStore::new());
    let list = service.create_list("user-1", now()).unwrap();

    let bread = service.add_item(list.id, "Bread", now()).unwrap();
    let eggs = service
        .add_item(list.id, "  Eggs  ", now() + Duration::minutes(1))
        .unwrap();
    assert_eq!(eggs.item, "Eggs");
    assert_eq!((bread.order, eggs.order), (1, 2));

    let toggled = service
        .toggle_item(&bread, now() + Duration::minutes(2))
        .unwrap();
    assert!(toggled.is_completed);

    let items = service.items(list.id).unwrap();
    let view: Vec<(&str, bool)> = items
        .iter()
        .map(|item| (item.item.as_str(), item.is_completed))
        .collect();
    assert_eq!(view, vec![("Bread", true), ("Eggs", false)]);

    let err = service.add_item(list.id, "   ", now()).unwrap_err();
    assert!(matches!(err, QuickListServiceError::BlankItem));
}

#[test]
fn delete_completed_sweeps_only_finished_items() {
    let service = QuickListService::new(MemoryStore::new());
    let list = service.create_list("user-1", now()).unwrap();

    let done_a = service.add_item(list.id, "Done A", now()).unwrap();
    service.add_item(list.id, "Open", now()).unwrap();
    let done_b = service.add_item(list.id, "Done B", now()).unwrap();
    service.toggle_item(&done_a, now()).unwrap();
    service.toggle_item(&done_b, now()).unwrap();

    let removed = service.delete_completed(list.id).unwrap();
    assert_eq!(removed, 2);

    let remaining = service.items(list.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].item, "Open");
}

#[test]
fn deleting_a_list_removes_its_items() {
    let store = MemoryStore::new();
    let service = QuickListService::new(store.clone());
    let keep = service.create_list("user-1", now()).unwrap();
    let doomed = service.create_list("user-1", now()).unwrap();
    service.add_item(keep.id, "Kept", now()).unwrap();
    service.add_item(doomed.id, "Doomed", now()).unwrap();

    service.delete_list(doomed.id).unwrap();

    assert!(store.get_list(doomed.id).unwrap().is_none());
    assert!(store.items_for_list(doomed.id).unwrap().is_empty());
    assert_eq!(store.items_for_list(keep.id).unwrap().len(), 1);
}

#[test]
fn progress_counts_completed_items() {
    let service = QuickListService::new(MemoryStore::new());
    let list = service.create_list("user-1", now()).unwrap();

    let progress = service.progress(list.id).unwrap();
    assert_eq!((progress.completed, progress.total), (0, 0));
    assert_eq!(progress.percent(), 0);

    let first = service.add_item(list.id, "First", now()).unwrap();
    service.add_item(list.id, "Second", now()).unwrap();
    service.add_item(list.id, "Third", now()).unwrap();
    service.toggle_item(&first, now()).unwrap();

    let progress = service.progress(list.id).unwrap();
    assert_eq!((progress.completed, progress.total), (1, 3));
    assert_eq!(progress.percent(), 33);
}

#[test]
fn share_text_renders_title_date_items_and_progress() {
    let service = QuickListService::new(MemoryStore::new());
    let list = service.create_list("user-1", now()).unwrap();
    service.rename_list(list.id, "Weekend Prep", now()).unwrap();
    let balloons = service.add_item(list.id, "Buy balloons", now()).unwrap();
    service.add_item(list.id, "Clean patio", now()).unwrap();
    service.toggle_item(&balloons, now()).unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let card = service.share_text(list.id, today).unwrap();

    assert_eq!(
        card,
        "Weekend Prep\n2026-08-06\n\n[x] 1. Buy balloons\n[ ] 2. Clean patio\n\n1/2 completed (50%)\n"
    );
    assert_eq!(
        share_file_stem("Weekend Prep", today),
        "weekend-prep-2026-08-06"
    );
}
