pub mod de;
pub mod query;
pub mod time;
