//! A small server-rendered blog.
//!
//! Visitors read posts; anyone holding an `email` cookie may write them; anyone
//! at all may delete them by title. Pages are rendered as HTML on every request
//! and the posts live in memory for the lifetime of the process.
//!
//! - **Repository**: insertion-ordered posts keyed (non-uniquely) by title
//! - **Session**: an unverified identity claim carried in a cookie
//! - **Routes**: the verb + path table gluing the two to the views
//! - **Views**: pure maud templates

pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod repository;
pub mod routes;
pub mod session;
pub mod states;
pub mod views;

pub use config::Config;
pub use routes::router;
pub use states::AppState;
