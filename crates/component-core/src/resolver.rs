//! Flag/prompt merging and framework dispatch

use crate::error::{Result, ScaffoldError};
use crate::framework::Framework;
use crate::prompt::{InputPrompt, Prompter, SelectPrompt};
use crate::selection::ResolvedSelection;
use crate::validate::validate_component_name;

/// Values supplied on the command line
///
/// Built once at the argument-parsing boundary. A missing flag and an empty
/// one are both treated as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFlags {
    pub name: Option<String>,
    pub framework: Option<String>,
    pub folder: Option<String>,
}

impl ComponentFlags {
    pub fn name(&self) -> Option<&str> {
        supplied(&self.name)
    }

    pub fn framework(&self) -> Option<&str> {
        supplied(&self.framework)
    }

    pub fn folder(&self) -> Option<&str> {
        supplied(&self.folder)
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Top-level questions, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelPrompt {
    Name,
    Folder,
    Framework,
}

/// Top-level prompts needed for the given flags (those without a flag value)
pub fn scheduled_prompts(flags: &ComponentFlags) -> Vec<TopLevelPrompt> {
    let mut prompts = Vec::new();
    if flags.name().is_none() {
        prompts.push(TopLevelPrompt::Name);
    }
    if flags.folder().is_none() {
        prompts.push(TopLevelPrompt::Folder);
    }
    if flags.framework().is_none() {
        prompts.push(TopLevelPrompt::Framework);
    }
    prompts
}

fn name_prompt() -> InputPrompt {
    InputPrompt::new("name", "Component name")
        .placeholder("my-component")
        .validator(validate_component_name)
}

fn folder_prompt() -> InputPrompt {
    InputPrompt::new("folder", "Folder (relative to the components directory)")
        .placeholder("leave empty for the default directory")
        .default_value("")
}

fn framework_prompt() -> SelectPrompt {
    Framework::ALL
        .iter()
        .fold(SelectPrompt::new("framework", "Select a framework"), |p, fw| {
            p.choice(fw.display_name(), "")
        })
}

/// Resolve a scaffold selection from flags, prompting for anything missing
///
/// Flag values always win and suppress their prompt. Flag-supplied names are
/// not rejected by the validator; a malformed one is only logged.
pub async fn resolve<P: Prompter>(
    prompter: &mut P,
    flags: &ComponentFlags,
) -> Result<ResolvedSelection> {
    let mut name = flags.name().map(str::to_string);
    let mut folder = flags.folder().map(str::to_string);
    let mut framework = flags.framework().map(Framework::canonicalize);

    if let Some(flag_name) = &name {
        if let Err(e) = validate_component_name(flag_name) {
            tracing::warn!(name = %flag_name, error = %e, "using flag-supplied component name as given");
        }
    }

    for prompt in scheduled_prompts(flags) {
        tracing::debug!(?prompt, "prompting for missing value");
        match prompt {
            TopLevelPrompt::Name => {
                let answer = prompter.input(&name_prompt()).await?;
                name = Some(answer.trim().to_string());
            }
            TopLevelPrompt::Folder => {
                folder = Some(prompter.input(&folder_prompt()).await?);
            }
            TopLevelPrompt::Framework => {
                let index = prompter.select(&framework_prompt()).await?;
                // An out-of-range answer falls through to the fatal path below
                framework = Framework::ALL
                    .get(index)
                    .map(|fw| fw.display_name().to_string());
            }
        }
    }

    let name = name.unwrap_or_default();
    let folder = folder.unwrap_or_default();
    let framework = framework.unwrap_or_default();

    dispatch(prompter, &framework, name, folder).await
}

/// Hand the finalized name and folder to the resolver of `framework`
///
/// `framework` is matched case-insensitively against the supported list
/// rather than by exact equality with the list casing, so `react` and
/// `REACT` dispatch like `React`.
pub async fn dispatch<P: Prompter>(
    prompter: &mut P,
    framework: &str,
    name: String,
    folder: String,
) -> Result<ResolvedSelection> {
    let Ok(fw) = framework.parse::<Framework>() else {
        tracing::debug!(framework, "no framework matched");
        return Err(ScaffoldError::FrameworkNotSelected);
    };

    tracing::debug!(framework = fw.id(), %name, %folder, "dispatching to framework resolver");
    fw.resolve(prompter, name, folder).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Answer, ScriptedPrompter};

    fn flags(name: Option<&str>, framework: Option<&str>, folder: Option<&str>) -> ComponentFlags {
        ComponentFlags {
            name: name.map(String::from),
            framework: framework.map(String::from),
            folder: folder.map(String::from),
        }
    }

    #[test]
    fn test_all_prompts_scheduled_without_flags() {
        assert_eq!(
            scheduled_prompts(&ComponentFlags::default()),
            vec![
                TopLevelPrompt::Name,
                TopLevelPrompt::Folder,
                TopLevelPrompt::Framework
            ]
        );
    }

    #[test]
    fn test_supplied_flags_suppress_prompts() {
        assert_eq!(
            scheduled_prompts(&flags(Some("card"), None, None)),
            vec![TopLevelPrompt::Folder, TopLevelPrompt::Framework]
        );
        assert_eq!(
            scheduled_prompts(&flags(None, Some("vue"), None)),
            vec![TopLevelPrompt::Name, TopLevelPrompt::Folder]
        );
        assert!(scheduled_prompts(&flags(Some("card"), Some("vue"), Some("ui"))).is_empty());
    }

    #[test]
    fn test_empty_flags_count_as_missing() {
        assert_eq!(
            scheduled_prompts(&flags(Some(""), Some(""), Some(""))),
            vec![
                TopLevelPrompt::Name,
                TopLevelPrompt::Folder,
                TopLevelPrompt::Framework
            ]
        );
    }

    #[tokio::test]
    async fn test_lowercase_framework_flag_is_canonicalized() {
        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(false)]);
        let selection = resolve(&mut prompter, &flags(Some("btn"), Some("svelte"), Some("ui")))
            .await
            .unwrap();

        assert_eq!(selection.framework, "svelte");
        assert_eq!(selection.template, "component.svelte");
        assert_eq!(prompter.asked(), ["svelte.typescript"]);
    }

    #[tokio::test]
    async fn test_flag_name_bypasses_validator() {
        let mut prompter = ScriptedPrompter::new(vec![]);
        let selection = resolve(
            &mut prompter,
            &flags(Some("not valid!"), Some("Angular"), Some("x")),
        )
        .await
        .unwrap();

        assert_eq!(selection.component_name, "not valid!");
        assert!(prompter.asked().is_empty());
    }

    #[tokio::test]
    async fn test_prompted_framework_is_used() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Text("hero"),
            Answer::Text(""),
            Answer::Choice("Astro"),
            Answer::Confirm(true),
        ]);
        let selection = resolve(&mut prompter, &ComponentFlags::default())
            .await
            .unwrap();

        assert_eq!(selection.framework, "astro");
        assert_eq!(selection.template, "component-ts.astro");
        assert_eq!(selection.folder, "");
        assert_eq!(
            prompter.asked(),
            ["name", "folder", "framework", "astro.typescript"]
        );
    }

    #[tokio::test]
    async fn test_prompted_empty_name_reports_empty_message() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Text(""),
            Answer::Text("card"),
            Answer::Text(""),
        ]);
        let selection = resolve(&mut prompter, &flags(None, Some("Angular"), None))
            .await
            .unwrap();

        assert_eq!(selection.component_name, "card");
        assert_eq!(prompter.rejections(), ["component name cannot be empty"]);
    }

    #[test]
    fn test_name_prompt_leaves_blank_input_to_validator() {
        assert!(!name_prompt().requires_input());
    }

    #[tokio::test]
    async fn test_dispatch_ignores_framework_casing() {
        for framework in ["vue", "VUE", "Vue"] {
            let mut prompter = ScriptedPrompter::new(vec![Answer::Choice("Composition API")]);
            let selection = dispatch(&mut prompter, framework, "x".into(), String::new())
                .await
                .unwrap();
            assert_eq!(selection.framework, "vue");
        }
    }

    #[tokio::test]
    async fn test_dispatch_rejects_unknown_framework() {
        let mut prompter = ScriptedPrompter::new(vec![]);
        let err = dispatch(&mut prompter, "Ember", "x".into(), String::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::FrameworkNotSelected));
        assert!(prompter.asked().is_empty());
    }
}
