use std::collections::HashSet;
use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use crate::config::StoreConfig;
use crate::error::Error;
use crate::model::task::{TaskChanges, TodoStatus};
use crate::repository::{FileTaskRepository, TaskRepository};

fn create_test_repo() -> (FileTaskRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("store.json"), 1);
    (FileTaskRepository::new(config), temp_dir)
}

fn store_bytes(repo: &FileTaskRepository) -> Vec<u8> {
    fs::read(repo.store().path()).unwrap()
}

#[test]
fn test_missing_store_is_empty_and_created() {
    let (repo, _temp) = create_test_repo();
    assert!(!repo.store().path().exists());

    assert!(repo.list_all().unwrap().is_empty());
    assert!(repo.store().path().exists());
}

#[test]
fn test_create_then_list() {
    let (repo, _temp) = create_test_repo();

    let id = repo.create("T", "D").unwrap();
    let tasks = repo.list_all().unwrap();

    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "T");
    assert_eq!(task.description, "D");
    assert_eq!(task.status, TodoStatus::Open);
    assert!(!task.is_liked);
    assert_eq!(task.comment, None);
    assert_eq!(task.created_by_user_id, 1);
}

#[test]
fn test_create_requires_title() {
    let (repo, _temp) = create_test_repo();
    let err = repo.create("   ", "D").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn test_list_preserves_insertion_order() {
    let (repo, _temp) = create_test_repo();
    let ids: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|t| repo.create(t, "").unwrap())
        .collect();

    let listed: Vec<String> = repo.list_all().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(listed, ids);
}

// Regression: editing a task must not re-identify it or reset its creation audit.
#[test]
fn test_update_preserves_identity_and_creation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    let creator = FileTaskRepository::new(StoreConfig::new(&path, 1));
    let editor = FileTaskRepository::new(StoreConfig::new(&path, 2));

    let id = creator.create("T", "D").unwrap();
    let before = creator.get(&id).unwrap();

    let returned = editor.update(&id, TaskChanges::new().title("X")).unwrap();
    let after = editor.get(&id).unwrap();

    assert_eq!(returned, id);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_date, before.created_date);
    assert_eq!(after.created_by_user_id, 1);
    assert_eq!(after.title, "X");
    assert_eq!(after.description, before.description);
    assert_eq!(after.status, before.status);
    assert_eq!(after.is_liked, before.is_liked);
    assert_eq!(after.comment, before.comment);
    assert_eq!(after.last_update_by_user_id, 2);
    assert!(after.last_update_date >= before.last_update_date);
}

#[test]
fn test_update_unknown_id_leaves_store_untouched() {
    let (repo, _temp) = create_test_repo();
    repo.create("T", "D").unwrap();
    let before = store_bytes(&repo);

    let err = repo.update("missing", TaskChanges::new().title("X")).unwrap_err();
    assert!(matches!(err, Error::NotFound(ref id) if id == "missing"));
    assert_eq!(store_bytes(&repo), before);
}

#[test]
fn test_update_with_empty_changes_is_rejected() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();
    let before = store_bytes(&repo);

    assert!(repo.update(&id, TaskChanges::new()).unwrap_err().is_invalid_argument());
    assert_eq!(store_bytes(&repo), before);
}

#[test]
fn test_remove_existing_and_missing() {
    let (repo, _temp) = create_test_repo();
    let keep = repo.create("keep", "").unwrap();
    let drop = repo.create("drop", "").unwrap();

    assert_eq!(repo.remove(&drop).unwrap(), 1);
    let ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![keep]);

    let before = store_bytes(&repo);
    assert_eq!(repo.remove("missing").unwrap(), 0);
    assert_eq!(store_bytes(&repo), before);
}

#[test]
fn test_set_status_rejects_unknown_token() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();
    let before = store_bytes(&repo);

    let err = repo.set_status(&id, "bogus").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(store_bytes(&repo), before);
}

#[test]
fn test_status_can_move_freely() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();

    repo.set_status(&id, "TODO_STATUS_DONE").unwrap();
    assert_eq!(repo.get(&id).unwrap().status, TodoStatus::Done);
    repo.set_status(&id, "OPEN").unwrap();
    assert_eq!(repo.get(&id).unwrap().status, TodoStatus::Open);
    repo.set_status(&id, "IN_PROGRESS").unwrap();
    assert_eq!(repo.get(&id).unwrap().status, TodoStatus::InProgress);
}

#[test]
fn test_list_by_status() {
    let (repo, _temp) = create_test_repo();
    repo.create("one", "").unwrap();
    let done = repo.create("two", "").unwrap();
    repo.create("three", "").unwrap();
    repo.set_status(&done, "TODO_STATUS_DONE").unwrap();

    let tasks = repo.list_by_status("TODO_STATUS_DONE").unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, done);
    assert_eq!(repo.list_by_status("OPEN").unwrap().len(), 2);
    assert!(repo.list_by_status("done").unwrap_err().is_invalid_argument());
}

#[test]
fn test_like_and_comment() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();

    repo.set_liked(&id, true).unwrap();
    repo.set_comment(&id, "looks good").unwrap();
    let task = repo.get(&id).unwrap();
    assert!(task.is_liked);
    assert_eq!(task.comment.as_deref(), Some("looks good"));

    repo.set_liked(&id, false).unwrap();
    assert!(!repo.get(&id).unwrap().is_liked);
}

#[test]
fn test_get_missing() {
    let (repo, _temp) = create_test_repo();
    assert!(repo.get("nope").unwrap_err().is_not_found());
}

#[test]
fn test_resolve_id_prefix() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();

    assert_eq!(repo.resolve_id(&id).unwrap(), id);
    assert_eq!(repo.resolve_id(&id[..8]).unwrap(), id);
    assert!(repo.resolve_id("zz").unwrap_err().is_not_found());
    assert!(repo.resolve_id("").unwrap_err().is_invalid_argument());
}

#[test]
fn test_resolve_id_ambiguous() {
    let (repo, _temp) = create_test_repo();
    fs::write(
        repo.store().path(),
        br#"{"todos":[
            {"id":"ab12","title":"a","description":"","comment":null,"status":"TODO_STATUS_OPEN",
             "isLiked":false,"createdDate":"2020-01-01T00:00:00Z","createdByUserId":1,
             "lastUpdateDate":"2020-01-01T00:00:00Z","lastUpdateByUserId":1},
            {"id":"ab34","title":"b","description":"","comment":null,"status":"TODO_STATUS_OPEN",
             "isLiked":false,"createdDate":"2020-01-01T00:00:00Z","createdByUserId":1,
             "lastUpdateDate":"2020-01-01T00:00:00Z","lastUpdateByUserId":1}]}"#,
    )
    .unwrap();

    assert!(repo.resolve_id("ab").unwrap_err().is_invalid_argument());
    assert_eq!(repo.resolve_id("ab3").unwrap(), "ab34");
}

#[test]
fn test_corrupt_store_is_not_overwritten() {
    let (repo, _temp) = create_test_repo();
    fs::write(repo.store().path(), b"{ definitely not json").unwrap();

    assert!(matches!(repo.list_all(), Err(Error::CorruptStore(_))));
    assert!(matches!(repo.create("T", "D"), Err(Error::CorruptStore(_))));
    assert_eq!(store_bytes(&repo), b"{ definitely not json");
}

// Two handles on one path do not coordinate: the later write wins.
#[test]
fn test_stale_snapshot_overwrites() {
    let (repo, _temp) = create_test_repo();
    let id = repo.create("T", "D").unwrap();

    let snapshot = store_bytes(&repo);
    repo.set_comment(&id, "first").unwrap();
    repo.store().write_all(&snapshot).unwrap();

    assert_eq!(repo.get(&id).unwrap().comment, None);
}

#[derive(Debug, Clone)]
enum Op {
    Create,
    Update(usize),
    Remove(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Create),
        2 => any::<usize>().prop_map(Op::Update),
        1 => any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ids_stay_unique(ops in proptest::collection::vec(arb_op(), 1..20)) {
        let (repo, _temp) = create_test_repo();
        for op in ops {
            let ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|t| t.id).collect();
            match op {
                Op::Create => {
                    repo.create("task", "").unwrap();
                }
                Op::Update(i) if !ids.is_empty() => {
                    repo.update(&ids[i % ids.len()], TaskChanges::new().title("edited")).unwrap();
                }
                Op::Remove(i) if !ids.is_empty() => {
                    prop_assert_eq!(repo.remove(&ids[i % ids.len()]).unwrap(), 1);
                }
                _ => {}
            }
            let tasks = repo.list_all().unwrap();
            let unique: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
            prop_assert_eq!(unique.len(), tasks.len());
        }
    }
}
