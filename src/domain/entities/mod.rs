//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation uses a
//! separate input struct ([`NewShortUrl`]) since `id` and `created_at` are
//! assigned by the store.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
