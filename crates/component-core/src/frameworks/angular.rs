//! Angular components

use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::Prompter;
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &["component.component.ts"];

/// Angular has no follow-up questions
pub async fn resolve<P: Prompter>(
    _prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    Ok(ResolvedSelection::new(Framework::Angular, name, TEMPLATES[0], folder))
}
