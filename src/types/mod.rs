// Type definitions for the notebook stripper

pub mod notebook;

pub use notebook::{keys, Notebook};
