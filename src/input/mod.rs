//! Input collection.
//!
//! - [`prompt`] - Interactive prompts for the base network and host counts

mod prompt;

pub use prompt::{parse_host_count, Prompter};
