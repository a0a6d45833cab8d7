//! Generated TypeScript and markup for the root shell and the route table.

/// Markup of the root shell: one content slot embedding `selector`, then the
/// router outlet.
#[must_use]
pub fn shell_template(selector: &str) -> String {
    format!(
        "<div class=\"app-container\">\n  <{selector}></{selector}>\n</div>\n\n<router-outlet></router-outlet>\n"
    )
}

/// Component class that embeds another generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedComponent<'a> {
    /// PascalCase class name
    pub type_name: &'a str,
    /// Kebab-case directory and file stem
    pub segment: &'a str,
}

impl EmbeddedComponent<'_> {
    fn import_line(&self) -> String {
        import_line(self.type_name, self.segment)
    }
}

/// Source of the root shell component.
///
/// With `embedded`, the shell imports that component so its selector
/// resolves in the shell template.
#[must_use]
pub fn shell_source(embedded: Option<&EmbeddedComponent<'_>>) -> String {
    let mut lines = vec![
        "import { Component } from '@angular/core';".to_string(),
        "import { CommonModule } from '@angular/common';".to_string(),
        "import { RouterOutlet } from '@angular/router';".to_string(),
    ];
    let mut imports = vec!["CommonModule", "RouterOutlet"];
    if let Some(component) = embedded {
        lines.push(component.import_line());
        imports.push(component.type_name);
    }

    lines.push(String::new());
    lines.push("@Component({".to_string());
    lines.push("  selector: 'app-root',".to_string());
    lines.push("  standalone: true,".to_string());
    lines.push(format!("  imports: [{}],", imports.join(", ")));
    lines.push("  templateUrl: './app.component.html',".to_string());
    lines.push("  styleUrls: ['./app.component.scss']".to_string());
    lines.push("})".to_string());
    lines.push("export class AppComponent {".to_string());
    lines.push("  title = 'Generated Angular App';".to_string());
    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

fn import_line(type_name: &str, segment: &str) -> String {
    format!("import {{ {type_name} }} from './{segment}/{segment}.component';")
}

/// Builder for `app.routes.ts`.
///
/// Imports are emitted once per component, in first-use order; routes keep
/// the order they were pushed in.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    imports: Vec<String>,
    routes: Vec<String>,
}

impl RouteTable {
    /// Create an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route bound to the component with the given class name and path segment.
    pub fn push(&mut self, path: &str, type_name: &str, segment: &str) {
        let import = import_line(type_name, segment);
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self.routes.push(format!(
            "  {{ path: '{}', component: {type_name} }}",
            escape_single_quoted(path)
        ));
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Render the complete `app.routes.ts` file.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "import {{ Routes }} from '@angular/router';\n{}\n\nexport const routes: Routes = [\n{}\n];\n",
            self.imports.join("\n"),
            self.routes.join(",\n")
        )
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
