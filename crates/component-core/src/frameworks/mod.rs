//! Per-framework template resolvers
//!
//! Each resolver elicits its own follow-up questions in order and maps the
//! answers to exactly one template id through an exhaustive `match`.

pub mod angular;
pub mod astro;
pub mod qwik;
pub mod react;
pub mod svelte;
pub mod vue;

use crate::error::Result;
use crate::prompt::{ConfirmPrompt, Prompter, SelectPrompt};
use std::io;

/// Ask whether the type-checked (TypeScript) variant should be used
pub(crate) async fn confirm_typescript<P: Prompter>(
    prompter: &mut P,
    key: &'static str,
) -> Result<bool> {
    let prompt = ConfirmPrompt::new(key, "Use TypeScript?", true);
    Ok(prompter.confirm(&prompt).await?)
}

/// Ask a select prompt and map the chosen index back onto `options`
pub(crate) async fn select_one<P: Prompter, T: Copy>(
    prompter: &mut P,
    prompt: &SelectPrompt,
    options: &[T],
) -> Result<T> {
    let index = prompter.select(prompt).await?;
    options.get(index).copied().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no option {} for '{}'", index, prompt.key),
        )
        .into()
    })
}
