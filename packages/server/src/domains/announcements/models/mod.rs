mod announcement;

pub use announcement::*;
