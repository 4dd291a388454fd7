//! Qwik components

use super::confirm_typescript;
use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::Prompter;
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &["component.tsx", "component.jsx"];

pub fn template(typescript: bool) -> &'static str {
    if typescript {
        "component.tsx"
    } else {
        "component.jsx"
    }
}

pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let typescript = confirm_typescript(prompter, "qwik.typescript").await?;
    Ok(ResolvedSelection::new(Framework::Qwik, name, template(typescript), folder))
}
