pub mod entry;
pub mod migration;
pub mod topic;
pub mod util;

pub use sea_orm;
