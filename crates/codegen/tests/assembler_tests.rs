//! End-to-end assembly behavior over the Angular scaffold.

use shotcraft_codegen::scaffold::paths;
use shotcraft_codegen::{AngularScaffold, ProjectAssembler, ScaffoldProvider};
use shotcraft_core::{ComponentDescriptor, RouteEntry, VirtualFileTree};

fn component(name: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(
        name,
        format!("export class {name} {{}}"),
        format!("<section>{name}</section>"),
        format!(".{name} {{ display: block; }}"),
    )
}

fn route_table(tree: &VirtualFileTree) -> &str {
    tree.get_text(paths::ROUTE_TABLE).unwrap()
}

#[test]
fn test_single_component_assembly() {
    let descriptor = component("TestComponent");
    let tree = ProjectAssembler::new().assemble(std::slice::from_ref(&descriptor), None);

    assert_eq!(
        tree.get_text("src/app/test-component/test-component.component.ts"),
        Some(descriptor.source.as_str())
    );
    assert_eq!(
        tree.get_text("src/app/test-component/test-component.component.html"),
        Some(descriptor.template.as_str())
    );
    assert_eq!(
        tree.get_text("src/app/test-component/test-component.component.scss"),
        Some(descriptor.style.as_str())
    );

    let generated = tree
        .paths()
        .filter(|path| path.starts_with("src/app/test-component/"))
        .count();
    assert_eq!(generated, 3);

    let shell = tree.get_text(paths::SHELL_TEMPLATE).unwrap();
    assert!(shell.contains("<app-test-component></app-test-component>"));
    assert!(shell.contains("<router-outlet></router-outlet>"));
}

#[test]
fn test_scaffold_files_survive_assembly() {
    let scaffold = AngularScaffold::new().files();
    let tree = ProjectAssembler::new().assemble(&[component("MainPage")], None);

    for path in scaffold.paths() {
        assert!(tree.contains(path), "scaffold file {path} missing");
    }
    assert_eq!(tree.len(), scaffold.len() + 3);
    assert_eq!(
        tree.get_text(paths::PACKAGE_JSON),
        scaffold.get_text(paths::PACKAGE_JSON)
    );
}

#[test]
fn test_multi_component_routing() {
    let descriptors = vec![component("MainPage"), component("AboutPage")];
    let routes = vec![
        RouteEntry::new("", "MainPage"),
        RouteEntry::new("about", "AboutPage"),
    ];
    let tree = ProjectAssembler::new().assemble(&descriptors, Some(&routes));
    let table = route_table(&tree);

    assert_eq!(table.matches("import { MainPage }").count(), 1);
    assert_eq!(table.matches("import { AboutPage }").count(), 1);
    assert!(table.contains("import { MainPage } from './main-page/main-page.component';"));
    assert!(table.contains("import { AboutPage } from './about-page/about-page.component';"));

    let main = table.find("{ path: '', component: MainPage }").unwrap();
    let about = table.find("{ path: 'about', component: AboutPage }").unwrap();
    assert!(main < about);
}

#[test]
fn test_unresolvable_route_dropped() {
    let descriptors = vec![component("MainPage")];
    let routes = vec![
        RouteEntry::new("", "MainPage"),
        RouteEntry::new("ghost", "GhostPage"),
    ];
    let tree = ProjectAssembler::new().assemble(&descriptors, Some(&routes));
    let table = route_table(&tree);

    assert!(!table.contains("GhostPage"));
    assert!(!table.contains("ghost"));
    assert_eq!(table.matches("component:").count(), 1);
}

#[test]
fn test_route_match_uses_original_name() {
    let descriptors = vec![component("MainPage")];
    let routes = vec![RouteEntry::new("home", "main-page")];
    let tree = ProjectAssembler::new().assemble(&descriptors, Some(&routes));
    let table = route_table(&tree);

    assert!(!table.contains("path: 'home'"));
    assert!(table.contains("{ path: '', component: MainPage }"));
}

#[test]
fn test_fallback_route_without_routing() {
    let tree = ProjectAssembler::new().assemble(&[component("Dashboard")], None);
    let table = route_table(&tree);

    assert!(table.contains("import { Dashboard } from './dashboard/dashboard.component';"));
    assert!(table.contains("{ path: '', component: Dashboard }"));
    assert_eq!(table.matches("component:").count(), 1);
}

#[test]
fn test_fallback_route_when_nothing_resolves() {
    let descriptors = vec![component("Dashboard"), component("Settings")];
    let routes = vec![RouteEntry::new("x", "Nope"), RouteEntry::new("y", "")];
    let tree = ProjectAssembler::new().assemble(&descriptors, Some(&routes));
    let table = route_table(&tree);

    assert_eq!(table.matches("component:").count(), 1);
    assert!(table.contains("{ path: '', component: Dashboard }"));
    assert!(!table.contains("Settings"));
}

#[test]
fn test_fallback_route_with_empty_routing() {
    let tree = ProjectAssembler::new().assemble(&[component("Dashboard")], Some(&[]));
    assert!(route_table(&tree).contains("{ path: '', component: Dashboard }"));
}

#[test]
fn test_empty_descriptor_fallback() {
    let scaffold = AngularScaffold::new().files();
    let tree = ProjectAssembler::new().assemble(&[], None);

    assert_eq!(tree, scaffold);
    let shell = tree.get_text(paths::SHELL_TEMPLATE).unwrap();
    assert!(shell.contains("<app-generated-component></app-generated-component>"));
    assert_eq!(route_table(&tree), scaffold.get_text(paths::ROUTE_TABLE).unwrap());
}

#[test]
fn test_empty_descriptors_with_routes_write_empty_table() {
    let routes = vec![RouteEntry::new("home", "Home")];
    let tree = ProjectAssembler::new().assemble(&[], Some(&routes));

    let table = route_table(&tree);
    assert!(table.starts_with("import { Routes } from '@angular/router';"));
    assert!(table.contains("export const routes: Routes = [\n\n];"));
    assert!(!table.contains("Home"));
    assert!(
        tree.get_text(paths::SHELL_TEMPLATE)
            .unwrap()
            .contains("<app-generated-component></app-generated-component>")
    );
}

#[test]
fn test_colliding_names_last_writer_wins() {
    let first = component("HeroBanner");
    let mut second = component("hero banner");
    second.source = "export class Replacement {}".to_string();

    let tree = ProjectAssembler::new().assemble(&[first, second.clone()], None);

    assert_eq!(
        tree.get_text("src/app/hero-banner/hero-banner.component.ts"),
        Some(second.source.as_str())
    );
    assert_eq!(
        tree.paths()
            .filter(|path| path.starts_with("src/app/hero-banner/"))
            .count(),
        3
    );
    // The shell still embeds the primary, which shares the segment
    assert!(tree
        .get_text(paths::SHELL_TEMPLATE)
        .unwrap()
        .contains("<app-hero-banner></app-hero-banner>"));
}

#[test]
fn test_same_component_on_several_routes() {
    let descriptors = vec![component("HomePage")];
    let routes = vec![
        RouteEntry::new("", "HomePage"),
        RouteEntry::new("home", "HomePage"),
    ];
    let tree = ProjectAssembler::new().assemble(&descriptors, Some(&routes));
    let table = route_table(&tree);

    assert_eq!(table.matches("import { HomePage }").count(), 1);
    assert_eq!(table.matches("component: HomePage").count(), 2);
}

#[test]
fn test_primary_is_first_descriptor() {
    let descriptors = vec![component("LoginForm"), component("SignupForm")];
    let tree = ProjectAssembler::new().assemble(&descriptors, None);
    let shell = tree.get_text(paths::SHELL_TEMPLATE).unwrap();

    assert!(shell.contains("<app-login-form></app-login-form>"));
    assert!(!shell.contains("signup"));
    assert!(tree.contains("src/app/signup-form/signup-form.component.ts"));
}

#[test]
fn test_scaffold_not_mutated_across_calls() {
    let assembler = ProjectAssembler::new();
    let first = assembler.assemble(&[component("OnlyHere")], None);
    let second = assembler.assemble(&[], None);

    assert!(first.contains("src/app/only-here/only-here.component.ts"));
    assert!(!second.contains("src/app/only-here/only-here.component.ts"));
    assert_eq!(second, assembler.scaffold().files());
}

#[test]
fn test_output_order_is_stable() {
    let descriptors = vec![component("MainPage"), component("AboutPage")];
    let assembler = ProjectAssembler::new();
    let first: Vec<String> = assembler
        .assemble(&descriptors, None)
        .paths()
        .map(str::to_string)
        .collect();
    let second: Vec<String> = assembler
        .assemble(&descriptors, None)
        .paths()
        .map(str::to_string)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some(paths::PACKAGE_JSON));
}

#[test]
fn test_assembler_is_shareable_across_threads() {
    let assembler = std::sync::Arc::new(ProjectAssembler::new());
    let handles: Vec<_> = ["Alpha", "Beta", "Gamma"]
        .into_iter()
        .map(|name| {
            let assembler = std::sync::Arc::clone(&assembler);
            std::thread::spawn(move || assembler.assemble(&[component(name)], None))
        })
        .collect();

    for handle in handles {
        let tree = handle.join().unwrap();
        assert_eq!(tree.len(), AngularScaffold::new().files().len() + 3);
    }
}
