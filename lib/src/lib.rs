pub mod actor;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod mode;
pub mod model;
pub mod render;
pub mod sharing;
pub mod store;
pub mod ui;

pub use actor::{Actor, Fetched};
pub use config::Config;
pub use error::{ActorError, ConfigError, Error, Result};
pub use mode::Mode;
pub use model::{ResourceReference, ServiceInstanceDetail};
pub use ui::Ui;
