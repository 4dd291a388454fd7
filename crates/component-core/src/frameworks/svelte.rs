//! Svelte components

use super::confirm_typescript;
use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::Prompter;
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &["component-ts.svelte", "component.svelte"];

pub fn template(typescript: bool) -> &'static str {
    if typescript {
        "component-ts.svelte"
    } else {
        "component.svelte"
    }
}

pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let typescript = confirm_typescript(prompter, "svelte.typescript").await?;
    Ok(ResolvedSelection::new(Framework::Svelte, name, template(typescript), folder))
}
