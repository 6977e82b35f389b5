//! Server-rendered front end for browsing a digital-file archive
//! through faceted search.
//!
//! Filter state lives entirely in the page URL as repeated `key=value`
//! pairs; every interaction (removing a filter tag, re-sorting, paging,
//! switching language) is a full navigation. The search engine itself
//! sits behind [`search::SearchBackend`].

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod search;
pub mod session;
pub mod templates_structs;
