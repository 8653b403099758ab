pub mod config;
pub mod logging;

pub use config::Settings;
pub use logging::init_logging;
