//! Command implementations.

pub mod analyze;
pub mod check;
pub mod fields;
pub mod generate;
pub mod health;
pub mod profile;

pub use self::analyze::execute_analyze;
pub use self::check::execute_check;
pub use self::fields::execute_fields;
pub use self::generate::execute_generate;
pub use self::health::execute_health;
pub use self::profile::execute_profile;
