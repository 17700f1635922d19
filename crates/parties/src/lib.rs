//! `orderdesk-parties` — users as seen by the order workflow.
//!
//! User/profile/address CRUD lives outside this system; the workflow only
//! ever asks "does this user exist".

pub mod user;

pub use user::{User, UserDirectory};
