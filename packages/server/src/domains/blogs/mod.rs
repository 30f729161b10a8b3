//! Blogs domain - moderated publishing
//!
//! Posts are born `pending`. Only an admin releases (or rejects) them;
//! the author's single status move is sending a moderated post back for
//! review. The machine in `machines` owns those edges, the approval stamp
//! travels with every status write.

pub mod actions;
pub mod machines;
pub mod models;

pub use models::{Blog, BlogDetail, BlogSummary, CreateBlog, UpdateBlogContent};
