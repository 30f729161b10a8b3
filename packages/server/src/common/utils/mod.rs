pub mod content;
pub mod format;

pub use content::*;
pub use format::*;
