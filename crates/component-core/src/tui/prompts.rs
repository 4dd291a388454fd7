//! Charm-style CLI prompts using cliclack

use crate::error::{Result, ScaffoldError};
use crate::framework::Framework;
use crate::prompt::{ConfirmPrompt, InputPrompt, Prompter, SelectPrompt};
use crate::resolver::{self, ComponentFlags};
use crate::selection::ResolvedSelection;
use crate::validate::validate_component_name;
use std::io;

/// Prompter that renders every question in the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    async fn input(&mut self, prompt: &InputPrompt) -> io::Result<String> {
        let mut input = cliclack::input(&prompt.message);

        if let Some(placeholder) = &prompt.placeholder {
            input = input.placeholder(placeholder);
        }
        if let Some(default) = &prompt.default {
            input = input.default_input(default);
        }
        // Otherwise cliclack answers blank input with its own "Input required"
        if !prompt.requires_input() {
            input = input.required(false);
        }
        if let Some(validator) = prompt.validator {
            input = input.validate(move |value: &String| validator(value));
        }

        let value: String = input.interact()?;

        match &prompt.default {
            Some(default) if value.is_empty() => Ok(default.clone()),
            _ => Ok(value),
        }
    }

    async fn select(&mut self, prompt: &SelectPrompt) -> io::Result<usize> {
        // Use indices so the choices can stay borrowed
        let mut select = cliclack::select(&prompt.message);
        for (idx, choice) in prompt.choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        select.interact()
    }

    async fn confirm(&mut self, prompt: &ConfirmPrompt) -> io::Result<bool> {
        cliclack::confirm(&prompt.message)
            .initial_value(prompt.default)
            .interact()
    }
}

/// Run the interactive resolution in the terminal
pub async fn run(flags: &ComponentFlags) -> Result<ResolvedSelection> {
    cliclack::intro("Create a component")?;

    // Step 1: Report values taken from flags
    report_flags(flags)?;

    // Step 2: Ask for whatever is missing and pick the template
    let mut prompter = ClackPrompter;
    match resolver::resolve(&mut prompter, flags).await {
        Ok(selection) => {
            cliclack::log::success(format!(
                "{} component '{}' from {}",
                selection.framework, selection.component_name, selection.template
            ))?;
            Ok(selection)
        }
        Err(ScaffoldError::Cancelled) => {
            cliclack::outro_cancel("Cancelled.")?;
            Err(ScaffoldError::Cancelled)
        }
        Err(e) => {
            cliclack::outro_cancel(e.to_string())?;
            Err(e)
        }
    }
}

fn report_flags(flags: &ComponentFlags) -> Result<()> {
    if let Some(name) = flags.name() {
        match validate_component_name(name) {
            Ok(()) => cliclack::log::info(format!("Using name: {}", name))?,
            Err(e) => cliclack::log::warning(format!("Using name '{}' as given: {}", name, e))?,
        }
    }

    if let Some(folder) = flags.folder() {
        cliclack::log::info(format!("Using folder: {}", folder))?;
    }

    if let Some(framework) = flags.framework() {
        match framework.parse::<Framework>() {
            Ok(fw) => cliclack::log::info(format!("Using framework: {}", fw))?,
            Err(e) => cliclack::log::warning(e.to_string())?,
        }
    }

    Ok(())
}
