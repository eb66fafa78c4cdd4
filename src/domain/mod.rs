pub mod collection;
pub mod enums;
pub mod filter;
pub mod row;
pub mod task;
pub mod views;

pub use collection::TaskList;
pub use enums::UiMode;
pub use filter::{current_view, Filter};
pub use row::{RowAction, TaskRow};
pub use task::Task;
pub use views::{checkbox, TaskCounts};
