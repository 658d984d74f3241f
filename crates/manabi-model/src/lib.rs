pub mod entry;
pub mod partial;
pub mod topic;
