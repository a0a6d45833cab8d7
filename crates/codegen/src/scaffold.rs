//! Baseline project files present in every generated project.
//!
//! The scaffold is a standalone, route-enabled Angular 19 project with
//! Angular Material and Tailwind CSS. The assembler overlays generated
//! components on top of it and overwrites the well-known shell and route
//! table files in [`paths`].

use crate::shell::{shell_source, shell_template};
use shotcraft_core::VirtualFileTree;
use shotcraft_core::naming::to_selector;

/// Well-known paths inside a generated project.
pub mod paths {
    /// Directory holding the root shell and every generated component.
    pub const APP_DIR: &str = "src/app";
    /// Root shell markup; its content slot embeds the primary component.
    pub const SHELL_TEMPLATE: &str = "src/app/app.component.html";
    /// Root shell class.
    pub const SHELL_SOURCE: &str = "src/app/app.component.ts";
    /// Root shell stylesheet.
    pub const SHELL_STYLE: &str = "src/app/app.component.scss";
    /// Route table.
    pub const ROUTE_TABLE: &str = "src/app/app.routes.ts";
    /// Application providers.
    pub const APP_CONFIG: &str = "src/app/app.config.ts";
    /// Build manifest.
    pub const PACKAGE_JSON: &str = "package.json";
    /// Angular workspace configuration.
    pub const ANGULAR_JSON: &str = "angular.json";
    /// Strict compiler configuration.
    pub const TSCONFIG: &str = "tsconfig.json";
}

/// File extension of component classes.
pub const SOURCE_EXT: &str = "ts";
/// File extension of component templates.
pub const TEMPLATE_EXT: &str = "html";
/// File extension of component stylesheets.
pub const STYLE_EXT: &str = "scss";

/// Name of the component the scaffold shell embeds before anything is generated.
pub const PLACEHOLDER_COMPONENT: &str = "generated-component";

/// Path of one generated component file, e.g. `src/app/main-page/main-page.component.ts`.
#[must_use]
pub fn component_path(segment: &str, extension: &str) -> String {
    format!("{}/{segment}/{segment}.component.{extension}", paths::APP_DIR)
}

/// Source of baseline project files.
///
/// Implementations are stateless: every call returns a fresh tree, so one
/// provider can serve any number of concurrent assemblies.
pub trait ScaffoldProvider: Send + Sync {
    /// Version of the baseline; the file set is constant for a version.
    fn version(&self) -> &'static str;

    /// All baseline files.
    fn files(&self) -> VirtualFileTree;
}

/// Angular 19 / Material / Tailwind baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularScaffold;

impl AngularScaffold {
    /// Create the scaffold.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ScaffoldProvider for AngularScaffold {
    fn version(&self) -> &'static str {
        "angular-19.1"
    }

    fn files(&self) -> VirtualFileTree {
        let mut tree = VirtualFileTree::new();
        tree.insert(paths::PACKAGE_JSON, PACKAGE_JSON);
        tree.insert(paths::ANGULAR_JSON, ANGULAR_JSON);
        tree.insert(paths::TSCONFIG, TSCONFIG_JSON);
        tree.insert("tsconfig.app.json", TSCONFIG_APP_JSON);
        tree.insert("tsconfig.spec.json", TSCONFIG_SPEC_JSON);
        tree.insert("tailwind.config.js", TAILWIND_CONFIG);
        tree.insert("postcss.config.js", POSTCSS_CONFIG);
        tree.insert(".gitignore", GITIGNORE);
        tree.insert("README.md", README);
        tree.insert("src/main.ts", MAIN_TS);
        tree.insert("src/index.html", INDEX_HTML);
        tree.insert("src/styles.scss", STYLES_SCSS);
        tree.insert(paths::APP_CONFIG, APP_CONFIG_TS);
        tree.insert(paths::SHELL_SOURCE, shell_source(None));
        tree.insert(
            paths::SHELL_TEMPLATE,
            shell_template(&to_selector(PLACEHOLDER_COMPONENT)),
        );
        tree.insert(paths::SHELL_STYLE, APP_COMPONENT_SCSS);
        tree.insert(paths::ROUTE_TABLE, APP_ROUTES_TS);
        tree.insert("src/assets/.gitkeep", "");
        tree
    }
}

const PACKAGE_JSON: &str = r#"{
  "name": "generated-angular-app",
  "version": "0.0.0",
  "private": true,
  "scripts": {
    "ng": "ng",
    "start": "ng serve",
    "build": "ng build",
    "watch": "ng build --watch",
    "test": "ng test"
  },
  "dependencies": {
    "@angular/animations": "^19.0.0",
    "@angular/cdk": "^19.0.0",
    "@angular/common": "^19.0.0",
    "@angular/compiler": "^19.0.0",
    "@angular/core": "^19.0.0",
    "@angular/forms": "^19.0.0",
    "@angular/material": "^19.0.0",
    "@angular/platform-browser": "^19.0.0",
    "@angular/platform-browser-dynamic": "^19.0.0",
    "@angular/router": "^19.0.0",
    "rxjs": "~7.8.0",
    "tslib": "^2.6.0",
    "zone.js": "~0.15.0"
  },
  "devDependencies": {
    "@angular-devkit/build-angular": "^19.0.0",
    "@angular/cli": "^19.0.0",
    "@angular/compiler-cli": "^19.0.0",
    "@types/jasmine": "~5.1.0",
    "autoprefixer": "^10.4.14",
    "jasmine-core": "~5.1.0",
    "karma": "~6.4.0",
    "karma-chrome-launcher": "~3.2.0",
    "karma-coverage": "~2.2.0",
    "karma-jasmine": "~5.1.0",
    "karma-jasmine-html-reporter": "~2.1.0",
    "postcss": "^8.4.21",
    "tailwindcss": "^3.3.0",
    "typescript": "~5.6.0"
  }
}
"#;

const ANGULAR_JSON: &str = r#"{
  "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
  "version": 1,
  "cli": {
    "packageManager": "npm",
    "analytics": false
  },
  "newProjectRoot": "projects",
  "projects": {
    "generated-angular-app": {
      "projectType": "application",
      "schematics": {
        "@schematics/angular:component": {
          "style": "scss",
          "standalone": true
        }
      },
      "root": "",
      "sourceRoot": "src",
      "prefix": "app",
      "architect": {
        "build": {
          "builder": "@angular-devkit/build-angular:application",
          "options": {
            "outputPath": "dist/generated-angular-app",
            "index": "src/index.html",
            "browser": "src/main.ts",
            "polyfills": ["zone.js"],
            "tsConfig": "tsconfig.app.json",
            "inlineStyleLanguage": "scss",
            "assets": ["src/assets"],
            "styles": ["src/styles.scss"],
            "scripts": []
          },
          "configurations": {
            "production": {
              "budgets": [
                {
                  "type": "initial",
                  "maximumWarning": "500kb",
                  "maximumError": "1mb"
                },
                {
                  "type": "anyComponentStyle",
                  "maximumWarning": "2kb",
                  "maximumError": "4kb"
                }
              ],
              "outputHashing": "all"
            },
            "development": {
              "optimization": false,
              "extractLicenses": false,
              "sourceMap": true
            }
          },
          "defaultConfiguration": "production"
        },
        "serve": {
          "builder": "@angular-devkit/build-angular:dev-server",
          "configurations": {
            "production": {
              "buildTarget": "generated-angular-app:build:production"
            },
            "development": {
              "buildTarget": "generated-angular-app:build:development"
            }
          },
          "defaultConfiguration": "development"
        },
        "test": {
          "builder": "@angular-devkit/build-angular:karma",
          "options": {
            "polyfills": ["zone.js", "zone.js/testing"],
            "tsConfig": "tsconfig.spec.json",
            "inlineStyleLanguage": "scss",
            "assets": ["src/assets"],
            "styles": ["src/styles.scss"],
            "scripts": []
          }
        }
      }
    }
  }
}
"#;

const TSCONFIG_JSON: &str = r#"{
  "compileOnSave": false,
  "compilerOptions": {
    "outDir": "./dist/out-tsc",
    "forceConsistentCasingInFileNames": true,
    "strict": true,
    "noImplicitOverride": true,
    "noPropertyAccessFromIndexSignature": true,
    "noImplicitReturns": true,
    "noFallthroughCasesInSwitch": true,
    "esModuleInterop": true,
    "sourceMap": true,
    "declaration": false,
    "experimentalDecorators": true,
    "moduleResolution": "bundler",
    "importHelpers": true,
    "target": "ES2022",
    "module": "ES2022",
    "useDefineForClassFields": false,
    "lib": ["ES2022", "dom"]
  },
  "angularCompilerOptions": {
    "enableI18nLegacyMessageIdFormat": false,
    "strictInjectionParameters": true,
    "strictInputAccessModifiers": true,
    "strictTemplates": true
  }
}
"#;

const TSCONFIG_APP_JSON: &str = r#"{
  "extends": "./tsconfig.json",
  "compilerOptions": {
    "outDir": "./out-tsc/app",
    "types": []
  },
  "files": ["src/main.ts"],
  "include": ["src/**/*.d.ts"]
}
"#;

const TSCONFIG_SPEC_JSON: &str = r#"{
  "extends": "./tsconfig.json",
  "compilerOptions": {
    "outDir": "./out-tsc/spec",
    "types": ["jasmine"]
  },
  "include": ["src/**/*.spec.ts", "src/**/*.d.ts"]
}
"#;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ["./src/**/*.{html,ts}"],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

const POSTCSS_CONFIG: &str = "module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
";

const GITIGNORE: &str = "# Compiled output
/dist
/tmp
/out-tsc
/bazel-out

# Node
/node_modules
npm-debug.log
yarn-error.log

# IDEs and editors
.idea/
.project
.classpath
.c9/
*.launch
.settings/
*.sublime-workspace

# Visual Studio Code
.vscode/*
!.vscode/settings.json
!.vscode/tasks.json
!.vscode/launch.json
!.vscode/extensions.json
.history/*

# Miscellaneous
/.angular/cache
.sass-cache/
/connect.lock
/coverage
/libpeerconnection.log
testem.log
/typings

# System files
.DS_Store
Thumbs.db
";

const README: &str = "# Generated Angular Project

This project was generated from a UI screenshot or design.

## Stack

- Angular 19 standalone components
- Angular Material
- Tailwind CSS

## Getting started

```
npm install
npm start
```

Then open `http://localhost:4200/`.

## Production build

```
npm run build
```

Build artifacts are written to `dist/`.

## Tests

```
npm test
```
";

const MAIN_TS: &str = "import { bootstrapApplication } from '@angular/platform-browser';
import { AppComponent } from './app/app.component';
import { appConfig } from './app/app.config';

bootstrapApplication(AppComponent, appConfig)
  .catch(err => console.error(err));
";

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Generated Angular App</title>
  <base href="/">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500&display=swap" rel="stylesheet">
  <link href="https://fonts.googleapis.com/icon?family=Material+Icons" rel="stylesheet">
</head>
<body class="mat-typography">
  <app-root></app-root>
</body>
</html>
"#;

const STYLES_SCSS: &str = "@use '@angular/material' as mat;

@tailwind base;
@tailwind components;
@tailwind utilities;

html {
  @include mat.theme((
    color: mat.$azure-palette,
    typography: Roboto,
    density: 0,
  ));
}

html, body { height: 100%; }
body { margin: 0; font-family: Roboto, \"Helvetica Neue\", sans-serif; }
";

const APP_CONFIG_TS: &str = "import { ApplicationConfig } from '@angular/core';
import { provideRouter } from '@angular/router';
import { provideAnimationsAsync } from '@angular/platform-browser/animations/async';

import { routes } from './app.routes';

export const appConfig: ApplicationConfig = {
  providers: [
    provideRouter(routes),
    provideAnimationsAsync()
  ]
};
";

const APP_COMPONENT_SCSS: &str = ".app-container {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
}
";

const APP_ROUTES_TS: &str = "import { Routes } from '@angular/router';

export const routes: Routes = [];
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_path() {
        assert_eq!(
            component_path("main-page", SOURCE_EXT),
            "src/app/main-page/main-page.component.ts"
        );
    }

    #[test]
    fn test_scaffold_contains_baseline() {
        let tree = AngularScaffold::new().files();
        for path in [
            "package.json",
            "angular.json",
            "tsconfig.json",
            "tsconfig.app.json",
            "tsconfig.spec.json",
            "tailwind.config.js",
            "postcss.config.js",
            ".gitignore",
            "README.md",
            "src/main.ts",
            "src/index.html",
            "src/styles.scss",
            "src/app/app.config.ts",
            "src/app/app.component.ts",
            "src/app/app.component.html",
            "src/app/app.component.scss",
            "src/app/app.routes.ts",
            "src/assets/.gitkeep",
        ] {
            assert!(tree.contains(path), "missing {path}");
        }
        assert_eq!(tree.len(), 18);
    }

    #[test]
    fn test_scaffold_json_manifests_parse() {
        let tree = AngularScaffold::new().files();
        for path in ["package.json", "angular.json", "tsconfig.json", "tsconfig.app.json", "tsconfig.spec.json"] {
            let text = tree.get_text(path).unwrap();
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(text);
            assert!(parsed.is_ok(), "{path} is not valid JSON");
        }
    }

    #[test]
    fn test_scaffold_shell_embeds_placeholder() {
        let tree = AngularScaffold::new().files();
        let template = tree.get_text(paths::SHELL_TEMPLATE).unwrap();
        assert!(template.contains("<app-generated-component></app-generated-component>"));
        assert!(template.contains("<router-outlet></router-outlet>"));
    }

    #[test]
    fn test_scaffold_wires_router() {
        let tree = AngularScaffold::new().files();
        let config = tree.get_text(paths::APP_CONFIG).unwrap();
        assert!(config.contains("provideRouter(routes)"));
        assert!(config.contains("from './app.routes'"));
        let routes = tree.get_text(paths::ROUTE_TABLE).unwrap();
        assert!(routes.contains("export const routes: Routes = [];"));
    }

    #[test]
    fn test_scaffold_is_constant() {
        let scaffold = AngularScaffold::new();
        assert_eq!(scaffold.files(), scaffold.files());
        assert_eq!(scaffold.version(), "angular-19.1");
    }
}
