//! Vue single-file components

use super::select_one;
use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::{Prompter, SelectPrompt};
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &["component-composition.vue", "component-options.vue"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
    Composition,
    Options,
}

impl ApiStyle {
    const ALL: [ApiStyle; 2] = [ApiStyle::Composition, ApiStyle::Options];

    pub fn label(&self) -> &'static str {
        match self {
            ApiStyle::Composition => "Composition API",
            ApiStyle::Options => "Options API",
        }
    }
}

pub fn template(api: ApiStyle) -> &'static str {
    match api {
        ApiStyle::Composition => "component-composition.vue",
        ApiStyle::Options => "component-options.vue",
    }
}

pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let prompt = ApiStyle::ALL
        .iter()
        .fold(SelectPrompt::new("vue.api", "Which API style?"), |p, api| {
            p.choice(api.label(), template(*api))
        });
    let api = select_one(prompter, &prompt, &ApiStyle::ALL).await?;

    Ok(ResolvedSelection::new(Framework::Vue, name, template(api), folder))
}
