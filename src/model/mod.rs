pub mod common;
pub mod folder;
pub mod list;
pub mod space;
pub mod task;
pub mod team_data;
pub mod time_entry;

pub use common::{CustomField, Priority, Status, Tag, User};
pub use folder::Folder;
pub use list::List;
pub use space::{Space, SpaceRef};
pub use task::Task;
pub use team_data::TeamData;
pub use time_entry::TimeEntry;
