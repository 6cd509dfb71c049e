use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is a valid regex")
});

/// Text with `{{name}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Names of the placeholders in order of appearance, repeats included.
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.template)
            .filter_map(|caps| caps.get(1).map(|name| name.as_str()))
            .collect()
    }

    /// Single pass over the template: names missing from `vars` become the
    /// empty string, and substituted values are never scanned again.
    pub fn render(&self, vars: &HashMap<&str, &str>) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures| {
                vars.get(&caps[1]).copied().unwrap_or_default()
            })
            .into_owned()
    }
}
