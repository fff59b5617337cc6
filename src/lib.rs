pub mod app;
pub mod cli;
pub mod display;
pub mod error;
pub mod lock;
pub mod model;
pub mod ops;
pub mod quotes;
pub mod storage;
pub mod theme;
pub mod util;

pub use app::run;
pub use error::{Error, Result, TaskError};
pub use model::{SettingsDocument, Task};
pub use storage::SettingsStore;
