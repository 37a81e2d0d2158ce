//! Port contract tests for the in-memory task repository.

use super::helpers::{new_task, repository};
use rstest::rstest;
use std::sync::Arc;
use tasklist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Deadline, TaskChanges, TaskId, TaskName},
    ports::TaskRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_increasing_ids(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    repository.insert(&new_task("First", None)?).await?;
    repository.insert(&new_task("Second", None)?).await?;

    let ids: Vec<i32> = repository
        .list_all()
        .await?
        .iter()
        .map(|task| task.id().into_inner())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_not_reused_after_delete(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    repository.insert(&new_task("First", None)?).await?;
    repository.delete(TaskId::new(1)).await?;
    repository.insert(&new_task("Second", None)?).await?;

    let found = repository.find_by_id(TaskId::new(2)).await?;
    assert_eq!(found.map(|task| task.name().as_str().to_owned()).as_deref(), Some("Second"));
    assert!(repository.find_by_id(TaskId::new(1)).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_name_and_deadline(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    repository
        .insert(&new_task("Call plumber", Some("2024-05-01T09:30"))?)
        .await?;

    let changes = TaskChanges::new(TaskName::new("Call electrician")?, None);
    let rows = repository.update(TaskId::new(1), &changes).await?;
    let task = repository
        .find_by_id(TaskId::new(1))
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;

    assert_eq!(rows.count(), 1);
    assert_eq!(task.name().as_str(), "Call electrician");
    assert!(task.deadline().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_of_missing_id_touch_nothing(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let changes = TaskChanges::new(
        TaskName::new("Ghost")?,
        Some(Deadline::parse_input("2024-01-01T00:00")?),
    );

    assert!(repository.update(TaskId::new(9), &changes).await?.is_noop());
    assert!(repository.delete(TaskId::new(9)).await?.is_noop());
    assert!(repository.list_all().await?.is_empty());
    Ok(())
}
