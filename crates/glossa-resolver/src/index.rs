//! Id lookup for model elements.

use indexmap::IndexMap;

use glossa_core::{
    identifier::ElementId,
    model::{Element, ModelElement},
};

/// The elements of a model keyed by id, in model order.
///
/// When two elements share an id the first one wins.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex<'m> {
    by_id: IndexMap<ElementId, &'m Element>,
}

impl<'m> ElementIndex<'m> {
    pub fn new(elements: &'m [Element]) -> Self {
        let mut by_id = IndexMap::with_capacity(elements.len());
        for element in elements {
            by_id.entry(element.id()).or_insert(element);
        }
        Self { by_id }
    }

    pub fn get(&self, id: ElementId) -> Option<&'m Element> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::{identifier::PackageId, model::ElementKind};

    use super::*;

    fn class(id: u32, name: &str) -> Element {
        Element::new(
            ElementId::new(id),
            format!("{{E{id}}}"),
            name,
            PackageId::new(1),
            ElementKind::Class,
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let elements = vec![class(1, "Person"), class(2, "Dog")];

        let index = ElementIndex::new(&elements);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(ElementId::new(2)).and_then(|e| e.name()), Some("Dog"));
        assert!(index.get(ElementId::new(9)).is_none());
        assert!(!index.contains(ElementId::new(9)));
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let elements = vec![class(1, "Person"), class(1, "Human")];

        let index = ElementIndex::new(&elements);

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(ElementId::new(1)).and_then(|e| e.name()),
            Some("Person")
        );
    }
}
