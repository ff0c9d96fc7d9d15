pub mod live_search;
pub mod templates;
pub mod widgets;

pub use crate::domain::model::{Row, SearchField, SearchResult, StalePolicy, TableBody, WidgetSpec};
pub use crate::domain::ports::{ConfigProvider, RowTemplate, SearchBackend};
pub use crate::utils::error::Result;
