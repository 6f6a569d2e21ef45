//! # coach-session
//!
//! One linear walk-through of a fixed question catalog: the catalog loader,
//! the `QASession` state, and the `SessionController` that applies
//! transitions and records feedback.

pub mod catalog;
pub mod controller;
pub mod export;
pub mod ids;
pub mod item;
pub mod session;

pub use catalog::{Catalog, CatalogEntry, CatalogLoader};
pub use controller::{SessionController, SessionControllerBuilder};
pub use export::{ExportRecord, SessionExport};
pub use ids::{SequentialIdSource, SessionIdSource, TimestampIdSource};
pub use item::QuestionItem;
pub use session::{Progress, QASession};
