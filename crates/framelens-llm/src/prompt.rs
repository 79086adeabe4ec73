//! Prompt template loading and rendering.

use std::path::Path;

/// The single substitution point the template must contain.
const TITLE_PLACEHOLDER: &str = "{title}";

/// Loads the classification prompt template from disk.
///
/// A missing or unreadable template degrades to an empty string rather than
/// failing the run: the classifier still calls the backend, it just sends the
/// bare title. The condition is logged so operators notice.
#[must_use]
pub fn load_prompt_template(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(template) => template,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load prompt template");
            String::new()
        }
    }
}

/// Renders the template with the title substituted in.
#[must_use]
pub fn render_prompt(template: &str, title: &str) -> String {
    template.replace(TITLE_PLACEHOLDER, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prompt_substitutes_title() {
        let rendered = render_prompt("Classify: \"{title}\" now", "My Video");
        assert_eq!(rendered, "Classify: \"My Video\" now");
    }

    #[test]
    fn render_prompt_empty_template_stays_empty() {
        assert_eq!(render_prompt("", "My Video"), "");
    }

    #[test]
    fn load_prompt_template_missing_file_is_empty() {
        let template = load_prompt_template(Path::new("/nonexistent/prompt.txt"));
        assert!(template.is_empty());
    }
}
