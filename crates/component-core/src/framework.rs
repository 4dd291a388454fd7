//! Supported UI frameworks

use crate::error::Result;
use crate::frameworks::{angular, astro, qwik, react, svelte, vue};
use crate::prompt::Prompter;
use crate::selection::ResolvedSelection;
use std::fmt;
use std::str::FromStr;

/// Supported frameworks, each backed by its own template resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Vue,
    Angular,
    React,
    Svelte,
    Qwik,
    Astro,
}

impl Framework {
    /// All frameworks in the order they are offered
    pub const ALL: [Framework; 6] = [
        Framework::Vue,
        Framework::Angular,
        Framework::React,
        Framework::Svelte,
        Framework::Qwik,
        Framework::Astro,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::React => "React",
            Framework::Svelte => "Svelte",
            Framework::Qwik => "Qwik",
            Framework::Astro => "Astro",
        }
    }

    /// Lowercase canonical id used in the resolved selection
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::React => "react",
            Framework::Svelte => "svelte",
            Framework::Qwik => "qwik",
            Framework::Astro => "astro",
        }
    }

    /// Every template id this framework can resolve to
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Framework::Vue => vue::TEMPLATES,
            Framework::Angular => angular::TEMPLATES,
            Framework::React => react::TEMPLATES,
            Framework::Svelte => svelte::TEMPLATES,
            Framework::Qwik => qwik::TEMPLATES,
            Framework::Astro => astro::TEMPLATES,
        }
    }

    /// Bring a flag value to list casing: first letter upper-cased, rest kept
    pub fn canonicalize(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Elicit the framework-specific choices and pick a template
    pub async fn resolve<P: Prompter>(
        &self,
        prompter: &mut P,
        name: String,
        folder: String,
    ) -> Result<ResolvedSelection> {
        match self {
            Framework::Vue => vue::resolve(prompter, name, folder).await,
            Framework::Angular => angular::resolve(prompter, name, folder).await,
            Framework::React => react::resolve(prompter, name, folder).await,
            Framework::Svelte => svelte::resolve(prompter, name, folder).await,
            Framework::Qwik => qwik::resolve(prompter, name, folder).await,
            Framework::Astro => astro::resolve(prompter, name, folder).await,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error for strings that name no supported framework
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown framework '{0}'")]
pub struct UnknownFramework(pub String);

impl FromStr for Framework {
    type Err = UnknownFramework;

    /// Case-insensitive match against the display names
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Framework::ALL
            .into_iter()
            .find(|fw| fw.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFramework(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_capitalizes_first_letter_only() {
        assert_eq!(Framework::canonicalize("react"), "React");
        assert_eq!(Framework::canonicalize("vUE"), "VUE");
        assert_eq!(Framework::canonicalize("Astro"), "Astro");
        assert_eq!(Framework::canonicalize(""), "");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("React".parse(), Ok(Framework::React));
        assert_eq!("svelte".parse(), Ok(Framework::Svelte));
        assert_eq!("QWIK".parse(), Ok(Framework::Qwik));
        assert_eq!(
            "NotAFramework".parse::<Framework>(),
            Err(UnknownFramework("NotAFramework".to_string()))
        );
    }

    #[test]
    fn test_ids_are_lowercase_display_names() {
        for fw in Framework::ALL {
            assert_eq!(fw.id(), fw.display_name().to_lowercase());
        }
    }

    #[test]
    fn test_every_framework_has_templates() {
        for fw in Framework::ALL {
            assert!(!fw.templates().is_empty(), "{} has no templates", fw);
            assert!(fw.templates().iter().all(|t| !t.is_empty()));
        }
    }
}
