//! Application services for the task board.

mod board;
mod record;

pub use board::{
    AddTaskRequest, EditTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
};
pub use record::{NO_DEADLINE, TaskRecord, edit_form_deadline, listing_deadline};
