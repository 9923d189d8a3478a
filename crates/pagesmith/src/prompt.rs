//! Prompt templates
//!
//! F-string style templates: `{variable}` placeholders filled from a
//! map. The fill is a single forward scan; unknown placeholders are
//! kept literally so stray braces in user text survive untouched.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Instructions for the web-developer agent, sent as the system message
/// on every generation call.
pub const DEVELOPER_AGENT_INSTRUCTIONS: &str = "\
You are an expert front-end developer. You will be given a description of a webpage.
Your job is to output a single HTML file (with <html>, <head>, <body> tags) that implements the description.
Include any required CSS in a <style> tag in the head for internal styling. Do NOT use external CSS files.
Your response should contain only the HTML code, nothing else.";

/// Task template filled with the user's page description.
pub const PAGE_TASK_TEMPLATE: &str = "\
Create a basic styled webpage based on the following requirements:
\"\"\"{specification}\"\"\"

Requirements:
 - Use HTML5 with a head and body section.
 - Add internal CSS styles in a <style> tag for styling as needed.
 - The content and design should match the description above.
Output only the complete HTML code for the page.";

/// A text template with `{variable}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    input_variables: Vec<String>,
}

impl PromptTemplate {
    /// Create a template, extracting its input variables.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let input_variables = extract_variables(&template);
        Self {
            template,
            input_variables,
        }
    }

    /// The variables this template requires.
    #[must_use]
    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// The raw template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fill the template with the given variables.
    ///
    /// Every variable the template names must be present, otherwise
    /// this is an [`Error::InvalidInput`].
    pub fn format(&self, variables: &HashMap<String, String>) -> Result<String> {
        let missing: Vec<&str> = self
            .input_variables
            .iter()
            .filter(|v| !variables.contains_key(*v))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(Error::invalid_input(format!(
                "Missing required input variables: {}",
                missing.join(", ")
            )));
        }

        Ok(fill(&self.template, variables))
    }
}

/// Collect `{variable}` names from a template, in first-seen order.
fn extract_variables(template: &str) -> Vec<String> {
    let mut variables = Vec::new();
    let mut remaining = template;

    while let Some(start) = remaining.find('{') {
        remaining = &remaining[start + 1..];
        if let Some(end) = remaining.find('}') {
            let name = &remaining[..end];
            if !name.is_empty()
                && !name.contains('{')
                && !variables.iter().any(|v| v == name)
            {
                variables.push(name.to_string());
            }
            remaining = &remaining[end + 1..];
        } else {
            break;
        }
    }

    variables
}

/// Substitute `{variable}` placeholders in one forward scan.
///
/// Placeholders with no matching variable, and unmatched braces, are
/// copied through literally.
fn fill(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut remaining = template;

    while let Some(start) = remaining.find('{') {
        result.push_str(&remaining[..start]);
        remaining = &remaining[start..];

        if let Some(end) = remaining.find('}') {
            let key = &remaining[1..end];
            if let Some(value) = variables.get(key) {
                result.push_str(value);
            } else {
                result.push_str(&remaining[..=end]);
            }
            remaining = &remaining[end + 1..];
        } else {
            result.push('{');
            remaining = &remaining[1..];
        }
    }

    result.push_str(remaining);
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_extract_variables() {
        let template = PromptTemplate::new("Hello {name}, you asked for {thing}");
        assert_eq!(template.input_variables(), &["name", "thing"]);
    }

    #[test]
    fn test_extract_variables_dedupe() {
        let template = PromptTemplate::new("{name} and {name} again");
        assert_eq!(template.input_variables(), &["name"]);
    }

    #[test]
    fn test_format_basic() {
        let template = PromptTemplate::new("Hello {name}!");
        let result = template.format(&vars(&[("name", "Alice")])).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn test_format_repeated_variable() {
        let template = PromptTemplate::new("{word}, {word}!");
        let result = template.format(&vars(&[("word", "again")])).unwrap();
        assert_eq!(result, "again, again!");
    }

    #[test]
    fn test_format_missing_variable_errors() {
        let template = PromptTemplate::new("Hello {name}!");
        let err = template.format(&HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_format_preserves_unmatched_brace() {
        let template = PromptTemplate::new("a { dangling");
        assert_eq!(template.input_variables().len(), 0);
        let result = template.format(&HashMap::new()).unwrap();
        assert_eq!(result, "a { dangling");
    }

    #[test]
    fn test_page_task_template_has_specification_variable() {
        let template = PromptTemplate::new(PAGE_TASK_TEMPLATE);
        assert_eq!(template.input_variables(), &["specification"]);
    }

    #[test]
    fn test_page_task_template_fill() {
        let template = PromptTemplate::new(PAGE_TASK_TEMPLATE);
        let result = template
            .format(&vars(&[("specification", "a red button that says Hello")]))
            .unwrap();

        // The description lands inside the triple-quoted block
        assert!(result.contains("\"\"\"a red button that says Hello\"\"\""));
        // The fixed requirements survive the fill verbatim
        assert!(result.contains("Use HTML5 with a head and body section."));
        assert!(result.contains("Output only the complete HTML code for the page."));
        assert!(!result.contains("{specification}"));
    }

    #[test]
    fn test_agent_instructions_are_static() {
        // The system message carries no placeholders
        let template = PromptTemplate::new(DEVELOPER_AGENT_INSTRUCTIONS);
        assert!(template.input_variables().is_empty());
        assert!(DEVELOPER_AGENT_INSTRUCTIONS.contains("only the HTML code"));
    }
}
