pub mod create;
pub mod delete;
pub mod delete_all;
pub mod files;
pub mod get;
pub mod list;
