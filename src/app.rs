pub mod core;
pub mod settings;
pub mod types;

pub use self::core::roster::Roster;
pub use self::core::App;
pub use settings::Settings;
pub use types::{ResultRow, Screen};
