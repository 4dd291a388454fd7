//! React function components

use super::{confirm_typescript, select_one};
use crate::error::Result;
use crate::framework::Framework;
use crate::prompt::{Prompter, SelectPrompt};
use crate::selection::ResolvedSelection;

pub const TEMPLATES: &[&str] = &[
    "function-component-tailwind.tsx",
    "function-component-styled.tsx",
    "function-component.tsx",
    "function-component-tailwind.jsx",
    "function-component-styled.jsx",
    "function-component.jsx",
];

/// How the component is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    Tailwind,
    StyledComponents,
    None,
}

impl Styling {
    const ALL: [Styling; 3] = [Styling::Tailwind, Styling::StyledComponents, Styling::None];

    pub fn label(&self) -> &'static str {
        match self {
            Styling::Tailwind => "Tailwind",
            Styling::StyledComponents => "Styled-Components",
            Styling::None => "None",
        }
    }
}

pub fn template(typescript: bool, styling: Styling) -> &'static str {
    match (typescript, styling) {
        (true, Styling::Tailwind) => "function-component-tailwind.tsx",
        (true, Styling::StyledComponents) => "function-component-styled.tsx",
        (true, Styling::None) => "function-component.tsx",
        (false, Styling::Tailwind) => "function-component-tailwind.jsx",
        (false, Styling::StyledComponents) => "function-component-styled.jsx",
        (false, Styling::None) => "function-component.jsx",
    }
}

pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let typescript = confirm_typescript(prompter, "react.typescript").await?;

    // Hints name the file each option produces for the chosen language
    let prompt = Styling::ALL.iter().fold(
        SelectPrompt::new("react.styling", "How should the component be styled?"),
        |p, styling| p.choice(styling.label(), template(typescript, *styling)),
    );
    let styling = select_one(prompter, &prompt, &Styling::ALL).await?;

    Ok(ResolvedSelection::new(
        Framework::React,
        name,
        template(typescript, styling),
        folder,
    ))
}
