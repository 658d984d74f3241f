pub(crate) mod admin;
pub(crate) mod error;
pub(crate) mod pages;
pub(crate) mod status;
