//! The resolved scaffold selection handed to the file writer

use crate::framework::Framework;
use serde::Serialize;

/// Result of a successful resolution run
///
/// `folder` is relative to the default components directory; an empty string
/// means the default directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    pub component_name: String,

    /// Lowercase canonical framework id (e.g. `react`)
    pub framework: String,

    /// Template identifier within the framework's template set
    pub template: String,

    pub folder: String,
}

impl ResolvedSelection {
    pub fn new(framework: Framework, name: String, template: &'static str, folder: String) -> Self {
        Self {
            component_name: name,
            framework: framework.id().to_string(),
            template: template.to_string(),
            folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let selection = ResolvedSelection::new(
            Framework::React,
            "card".to_string(),
            "function-component-tailwind.tsx",
            String::new(),
        );
        let yaml = serde_yaml::to_string(&selection).unwrap();

        assert!(yaml.contains("componentName: card"));
        assert!(yaml.contains("framework: react"));
        assert!(yaml.contains("template: function-component-tailwind.tsx"));
        assert!(yaml.contains("folder: ''"));
    }
}
