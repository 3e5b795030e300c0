//! Tab management module
//!
//! Содержит:
//! - `tab_labels` - перечень табов и их заголовки
//! - `registry` - маппинг таба на endpoint (единственный источник правды)
//! - `controller` - активный таб, фоновый polling и защита от устаревших ответов

pub mod controller;
pub mod registry;
pub mod tab_labels;

pub use controller::{ContentRenderer, LoadTicket, PollSettings, TabController};
pub use registry::{ContentLoader, TabData};
pub use tab_labels::Tab;
