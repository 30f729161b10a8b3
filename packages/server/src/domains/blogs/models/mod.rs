mod blog;

pub use blog::*;
