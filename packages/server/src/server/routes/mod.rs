// HTTP routes
pub mod actions;
pub mod health;
pub mod uploads;

pub use actions::*;
pub use health::*;
pub use uploads::*;
