//! Component Core - resolution of UI component scaffold selections
//!
//! Turns command-line flags and interactive answers into a single
//! [`ResolvedSelection`]: a component name, a framework id, a template id and a
//! destination folder. Copying the template is left to the caller.
//!
//! # Architecture
//!
//! - **Validation** - [`validate_component_name`], used to re-ask prompted names
//! - **Resolution** - [`resolver::resolve`] merges flags with prompted answers
//!   (flags win and suppress their prompt), then [`resolver::dispatch`] hands
//!   off to the resolver of the chosen [`Framework`]
//! - **Framework resolvers** - one module per framework under [`frameworks`],
//!   each mapping its follow-up answers to exactly one template id
//! - **Prompts** - the [`Prompter`] trait; [`tui::ClackPrompter`] renders it
//!   with cliclack, [`testing::ScriptedPrompter`] replays scripted answers
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use component_core::testing::{Answer, ScriptedPrompter};
//! use component_core::{resolver, ComponentFlags};
//!
//! let flags = ComponentFlags {
//!     name: Some("card".into()),
//!     framework: Some("react".into()),
//!     ..Default::default()
//! };
//! let mut prompter = ScriptedPrompter::new(vec![
//!     Answer::Text(""),
//!     Answer::Confirm(true),
//!     Answer::Choice("Tailwind"),
//! ]);
//! let selection = resolver::resolve(&mut prompter, &flags).await?;
//! assert_eq!(selection.template, "function-component-tailwind.tsx");
//! ```

pub mod error;
pub mod framework;
pub mod frameworks;
pub mod prompt;
pub mod resolver;
pub mod selection;
pub mod testing;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use framework::Framework;
pub use prompt::Prompter;
pub use resolver::ComponentFlags;
pub use selection::ResolvedSelection;
pub use validate::{validate_component_name, NameError};

#[cfg(feature = "tui")]
pub use tui::run;
