mod node;
mod style;

pub use node::{Element, Tag};
pub use style::Style;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the direct parent of the element with `id`.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    for child in &root.children {
        if child.id == id {
            return Some(root);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect IDs of all elements carrying `class`, in document order.
pub fn collect_with_class(root: &Element, class: &str, out: &mut Vec<String>) {
    if root.has_class(class) {
        out.push(root.id.clone());
    }

    for child in &root.children {
        collect_with_class(child, class, out);
    }
}
