//! Task board workflows against a real `PostgreSQL` database.

use crate::postgres::helpers::{PgContext, pg_context};
use rstest::rstest;
use tasklist::task::services::{AddTaskRequest, EditTaskRequest, TaskBoardError};

#[rstest]
fn buy_milk_scenario(pg_context: PgContext) {
    let ctx = pg_context;
    let service = ctx.service();

    ctx.rt
        .block_on(service.add_task(AddTaskRequest::new("Buy milk", "")))
        .expect("add succeeds");
    let after_add = ctx.rt.block_on(service.list_tasks()).expect("listing");
    let record = after_add.first().expect("one task");
    assert_eq!(record.name, "Buy milk");
    assert_eq!(record.deadline, "no deadline");

    let id = record.id.to_string();
    ctx.rt
        .block_on(service.edit_task(EditTaskRequest::new(
            id.as_str(),
            "Buy milk and bread",
            "2024-12-25T08:00",
        )))
        .expect("edit succeeds");
    assert_eq!(
        ctx.stored_deadline(record.id).expect("raw read").as_deref(),
        Some("2024-12-25 08:00:00")
    );
    let edit = ctx
        .rt
        .block_on(service.task_for_edit(&id))
        .expect("edit lookup");
    assert_eq!(edit.deadline, "2024-12-25T08:00");

    ctx.rt
        .block_on(service.edit_task(EditTaskRequest::new(
            id.as_str(),
            "Buy milk and bread",
            "",
        )))
        .expect("clearing succeeds");
    assert_eq!(ctx.stored_deadline(record.id).expect("raw read"), None);
    let after_clear = ctx.rt.block_on(service.list_tasks()).expect("listing");
    assert_eq!(
        after_clear.first().map(|task| task.deadline.as_str()),
        Some("no deadline")
    );

    let rows = ctx
        .rt
        .block_on(service.delete_task(&id))
        .expect("delete succeeds");
    assert_eq!(rows.count(), 1);
    assert!(
        ctx.rt
            .block_on(service.list_tasks())
            .expect("listing")
            .is_empty()
    );
}

#[rstest]
fn edit_lookup_of_unknown_id_is_not_found(pg_context: PgContext) {
    let ctx = pg_context;
    let service = ctx.service();

    let result = ctx.rt.block_on(service.task_for_edit("404"));

    assert!(matches!(result, Err(TaskBoardError::NotFound(_))));
}

#[rstest]
fn seconds_in_submitted_deadline_survive_storage(pg_context: PgContext) {
    let ctx = pg_context;
    let service = ctx.service();

    ctx.rt
        .block_on(service.add_task(AddTaskRequest::new("Launch", "2024-05-01T09:30:45")))
        .expect("add succeeds");

    assert_eq!(
        ctx.stored_deadline(1).expect("raw read").as_deref(),
        Some("2024-05-01 09:30:45")
    );
}
