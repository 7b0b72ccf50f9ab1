//! Shared library module for the Ristikko app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::RistikkoApp;

mod action;
mod app;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
