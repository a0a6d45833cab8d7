//! Project assembly
//!
//! Merges the scaffold with generated component descriptors:
//! - Writes each component's three files under `src/app/{segment}/`
//! - Points the root shell at the primary (first) component
//! - Synthesizes a route table referencing only components that exist

use crate::scaffold::{
    AngularScaffold, SOURCE_EXT, STYLE_EXT, ScaffoldProvider, TEMPLATE_EXT, component_path, paths,
};
use crate::shell::{EmbeddedComponent, RouteTable, shell_source, shell_template};
use shotcraft_core::naming::{to_path_segment, to_selector, to_type_name};
use shotcraft_core::{ComponentDescriptor, RouteEntry, VirtualFileTree};

/// Builds complete project trees from component descriptors.
///
/// The assembler holds no per-request state; a single instance can be shared
/// across threads and reused for any number of assemblies.
#[derive(Debug, Clone, Default)]
pub struct ProjectAssembler<S = AngularScaffold> {
    scaffold: S,
}

impl ProjectAssembler<AngularScaffold> {
    /// Create an assembler over the Angular scaffold
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scaffold: AngularScaffold::new(),
        }
    }
}

impl<S: ScaffoldProvider> ProjectAssembler<S> {
    /// Create an assembler over a custom scaffold
    #[must_use]
    pub const fn with_scaffold(scaffold: S) -> Self {
        Self { scaffold }
    }

    /// The scaffold this assembler starts from
    #[must_use]
    pub const fn scaffold(&self) -> &S {
        &self.scaffold
    }

    /// Assemble a project tree.
    ///
    /// Descriptors are written in order, so when two names normalize to the
    /// same segment the later one's files replace the earlier one's. The
    /// first descriptor is the primary component: the shell embeds it and it
    /// backs the default route when no requested route resolves.
    ///
    /// Routes are matched on the descriptor's original `name`, not on the
    /// normalized segment. Routes naming no descriptor are dropped. With no
    /// descriptors the scaffold shell is kept, and a non-empty `routes`
    /// still replaces the route table, which then has no entries.
    #[must_use]
    pub fn assemble(
        &self,
        descriptors: &[ComponentDescriptor],
        routes: Option<&[RouteEntry]>,
    ) -> VirtualFileTree {
        let mut tree = self.scaffold.files();

        for descriptor in descriptors {
            let segment = file_segment(&descriptor.name);
            if segment.is_empty() {
                tracing::warn!(
                    name = %descriptor.name,
                    "Component name normalizes to an empty path segment"
                );
            }
            tree.insert(component_path(&segment, SOURCE_EXT), descriptor.source.as_str());
            tree.insert(component_path(&segment, TEMPLATE_EXT), descriptor.template.as_str());
            tree.insert(component_path(&segment, STYLE_EXT), descriptor.style.as_str());
        }

        let Some(primary) = descriptors.first() else {
            let requested = routes.map_or(0, <[RouteEntry]>::len);
            if requested > 0 {
                tree.insert(paths::ROUTE_TABLE, RouteTable::new().render());
            }
            tracing::debug!(
                dropped_routes = requested,
                "No components generated, keeping scaffold shell"
            );
            return tree;
        };

        let primary_segment = file_segment(&primary.name);
        let primary_type = to_type_name(&primary.name);
        tree.insert(paths::SHELL_TEMPLATE, shell_template(&to_selector(&primary.name)));
        tree.insert(
            paths::SHELL_SOURCE,
            shell_source(Some(&EmbeddedComponent {
                type_name: &primary_type,
                segment: &primary_segment,
            })),
        );

        let requested = routes.unwrap_or_default();
        let mut table = RouteTable::new();
        for route in requested {
            let Some(target) = resolve(descriptors, &route.component_name) else {
                tracing::warn!(
                    path = %route.path,
                    component = %route.component_name,
                    "Dropping route to unknown component"
                );
                continue;
            };
            table.push(
                &route.path,
                &to_type_name(&target.name),
                &file_segment(&target.name),
            );
        }
        let dropped = requested.len() - table.len();

        if table.is_empty() {
            table.push("", &primary_type, &primary_segment);
        }
        tree.insert(paths::ROUTE_TABLE, table.render());

        tracing::debug!(
            components = descriptors.len(),
            routes = table.len(),
            dropped_routes = dropped,
            files = tree.len(),
            "Assembled project"
        );
        tree
    }
}

/// Path segment of a component name, confined to a single directory level.
///
/// Separators and dots become hyphens, so a name like `../Evil` lands in
/// `src/app/-evil/` rather than outside `src/app/`.
fn file_segment(name: &str) -> String {
    let segment = to_path_segment(name);
    if !segment.contains(['/', '\\', '.']) {
        return segment;
    }
    let flattened: String = segment
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\' | '.') { '-' } else { ch })
        .collect();
    to_path_segment(&flattened)
}

fn resolve<'a>(descriptors: &'a [ComponentDescriptor], name: &str) -> Option<&'a ComponentDescriptor> {
    if name.is_empty() {
        return None;
    }
    descriptors.iter().find(|descriptor| descriptor.name == name)
}
