//! Removal of ignored entities.
//!
//! An entity tagged `ignore` is dropped before anything else runs. Removal
//! cascades: the elements of an ignored package, the attributes of an
//! ignored element and every relationship touching an ignored element go
//! with it.

use std::collections::HashSet;

use glossa_core::model::{Model, ModelElement};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject},
    tags::TagResolver,
};

/// Returns a copy of `model` without ignored entities.
pub fn remove_ignored(
    model: &Model,
    tag_resolver: &TagResolver,
    diagnostics: &mut DiagnosticCollector,
) -> Model {
    let mut ignored_packages = HashSet::new();
    let packages = model
        .packages
        .iter()
        .filter(|package| {
            let ignored = tag_resolver.is_ignored(*package, diagnostics);
            if ignored {
                report_ignored(Subject::of(*package), diagnostics);
                ignored_packages.insert(package.id());
            }
            !ignored
        })
        .cloned()
        .collect();

    let mut ignored_elements = HashSet::new();
    let elements = model
        .elements
        .iter()
        .filter(|element| {
            let ignored = if ignored_packages.contains(&element.package_id()) {
                true
            } else if tag_resolver.is_ignored(*element, diagnostics) {
                let subject =
                    Subject::of(*element).in_package(model.package_path(element.package_id()));
                report_ignored(subject, diagnostics);
                true
            } else {
                false
            };
            if ignored {
                ignored_elements.insert(element.id());
            }
            !ignored
        })
        .cloned()
        .collect();

    let attributes = model
        .attributes
        .iter()
        .filter(|attribute| {
            if ignored_elements.contains(&attribute.class_id()) {
                return false;
            }
            let ignored = tag_resolver.is_ignored(*attribute, diagnostics);
            if ignored {
                report_ignored(Subject::of(*attribute), diagnostics);
            }
            !ignored
        })
        .cloned()
        .collect();

    let relationships = model
        .relationships
        .iter()
        .filter(|relationship| {
            let touches_ignored = [relationship.source_id(), relationship.destination_id()]
                .into_iter()
                .chain(relationship.association_class_id())
                .any(|id| ignored_elements.contains(&id));
            if touches_ignored {
                return false;
            }
            let ignored = tag_resolver.is_ignored(*relationship, diagnostics);
            if ignored {
                report_ignored(Subject::of(*relationship), diagnostics);
            }
            !ignored
        })
        .cloned()
        .collect();

    Model {
        packages,
        elements,
        attributes,
        relationships,
        diagrams: model.diagrams.clone(),
    }
}

fn report_ignored(subject: Subject, diagnostics: &mut DiagnosticCollector) {
    diagnostics.emit(
        Diagnostic::info("entity is tagged `ignore` and was removed")
            .with_code(ErrorCode::E600)
            .with_subject(subject),
    );
}
