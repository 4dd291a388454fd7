//! Astro components

use super::confirm_typescript;
use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::Prompter;
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &["component-ts.astro", "component.astro"];

/// Typed variant declares a `Props` interface in the frontmatter
pub fn template(typescript: bool) -> &'static str {
    if typescript {
        "component-ts.astro"
    } else {
        "component.astro"
    }
}

pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let typescript = confirm_typescript(prompter, "astro.typescript").await?;
    Ok(ResolvedSelection::new(Framework::Astro, name, template(typescript), folder))
}
