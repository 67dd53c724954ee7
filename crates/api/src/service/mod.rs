//! Business-logic layer between the HTTP handlers and the repositories.

pub mod record;

pub use record::RecordService;
