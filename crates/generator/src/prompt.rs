//! Prompt text sent to the models.

/// System instruction for the vision call.
pub const VISION_SYSTEM: &str = "You are an expert at converting UI designs into Angular \
components with Angular Material and TailwindCSS. Analyze the image and provide a detailed \
description of the layout, components, styling, and structure that would be needed to \
recreate it as an Angular application.";

/// User instruction accompanying the image.
pub const VISION_INSTRUCTION: &str = "Analyze this UI design image. Describe it in detail, \
identifying Angular Material components and suggesting appropriate TailwindCSS classes for \
styling. If the design shows several distinct pages or views, describe each one separately.";

/// System instruction for the code generation call.
pub const CODE_SYSTEM: &str = "You are an expert Angular developer who specializes in \
creating standalone components with Angular Material and TailwindCSS. Generate clean, \
organized code that follows Angular best practices.";

/// Build the code generation prompt for a UI description.
#[must_use]
pub fn code_prompt(description: &str) -> String {
    format!(
        r#"Based on the following UI description, generate Angular components that implement this design using Angular Material components and TailwindCSS for styling:

{description}

For every component provide:

1. A TypeScript file using the standalone component architecture
2. An HTML template using Angular Material components where appropriate
3. An SCSS file with TailwindCSS utility classes
4. A component name in kebab-case

The first component is the main view of the application. When the design has several pages, add one route per page.

Format your response using the following JSON structure:

```json
{{
  "components": [
    {{
      "componentName": "main-page",
      "typescript": "// TypeScript code here",
      "html": "<!-- HTML template here -->",
      "scss": "/* SCSS styles here */"
    }}
  ],
  "routing": [
    {{ "path": "", "componentName": "main-page" }}
  ]
}}
```

Each component's selector must be `app-` followed by its componentName, and its class name the PascalCase form of its componentName. Use proper typing and modern Angular features.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_prompt_embeds_description() {
        let prompt = code_prompt("A login form with two fields.");
        assert!(prompt.contains("\n\nA login form with two fields.\n\n"));
        assert!(prompt.contains("```json\n{\n  \"components\": ["));
        assert!(prompt.contains("\"routing\": ["));
    }
}
