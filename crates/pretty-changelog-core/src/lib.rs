//! Core library for pretty-changelog.
//!
//! This crate turns the commit lines of a release into the changelog
//! document: filtering, sorting, abbreviating and grouping entries, then
//! assembling the final Markdown.

mod document;
mod error;
mod filter;
mod generate;
mod group;
mod pipeline;

pub use document::Document;
pub use error::{CoreError, CoreResult};
pub use filter::EntryFilter;
pub use generate::Generator;
pub use group::{EntryGroup, Section, distribute};
pub use pipeline::EntryPipeline;
