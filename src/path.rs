//! Path vocabulary shared by the enumerator, coverage measurer, generators
//! and materializer.
//!
//! A [`Path`] is the key every other data structure in the crate is built
//! around: `GroundSet` and `ConstraintSet` are `BTreeSet`/`BTreeMap` over it,
//! so iteration order is always deterministic and never depends on the order
//! in which the schema walker happened to visit things.

use std::fmt;

/// A path into the schema tree: either an element path (`/Root/Child`) or an
/// attribute path (`/Root/Child@attr`).
///
/// `Path` wraps a single canonical string rather than keeping the element and
/// attribute halves apart, because every consumer (ground set membership,
/// constraint lookups, SMT variable naming) treats the two uniformly; only
/// [`Path::depth`] and [`Path::is_attribute`] care about the distinction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(String);

impl Path {
    /// Builds the root element path `/Name`.
    pub fn root(name: &str) -> Self {
        Path(format!("/{name}"))
    }

    /// Extends an element path with a child element name.
    pub fn child(&self, name: &str) -> Self {
        Path(format!("{}/{name}", self.0))
    }

    /// Builds the attribute path owned by this element path.
    pub fn attribute(&self, attr_name: &str) -> Self {
        Path(format!("{}@{attr_name}", self.0))
    }

    /// Parses a path from its canonical string form. Used by the coverage
    /// measurer when reconstructing paths while walking an XML document.
    pub fn from_string(s: String) -> Self {
        Path(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_attribute(&self) -> bool {
        self.0.contains('@')
    }

    /// The element-path portion: for an attribute path, everything before
    /// the `@`; for an element path, the path itself.
    pub fn element_part(&self) -> &str {
        match self.0.split_once('@') {
            Some((element, _)) => element,
            None => &self.0,
        }
    }

    /// Depth is the number of `/` separators in the element portion.
    /// Attribute paths inherit the depth of their owning element.
    pub fn depth(&self) -> usize {
        self.element_part().matches('/').count()
    }

    /// The parent element path, if any. The root element has no parent.
    /// An attribute path's parent is its owning element path.
    pub fn parent(&self) -> Option<Path> {
        if self.is_attribute() {
            return Some(Path(self.element_part().to_string()));
        }
        let element = self.element_part();
        let last_slash = element.rfind('/')?;
        if last_slash == 0 {
            None
        } else {
            Some(Path(element[..last_slash].to_string()))
        }
    }

    /// Deterministic SMT-LIB variable name: `/` -> `_`, `@` -> `_AT_`.
    pub fn to_smt_var(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 4);
        out.push('v');
        for c in self.0.chars() {
            match c {
                '/' => out.push('_'),
                '@' => out.push_str("_AT_"),
                c => out.push(c),
            }
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_slashes_on_element_part() {
        let root = Path::root("R");
        assert_eq!(root.depth(), 1);
        let child = root.child("C");
        assert_eq!(child.depth(), 2);
        let attr = child.attribute("id");
        assert_eq!(attr.depth(), 2);
        assert!(attr.is_attribute());
    }

    #[test]
    fn parent_of_root_is_none() {
        assert_eq!(Path::root("R").parent(), None);
    }

    #[test]
    fn parent_of_attribute_is_owning_element() {
        let root = Path::root("R");
        let attr = root.attribute("id");
        assert_eq!(attr.parent(), Some(root));
    }

    #[test]
    fn smt_var_escapes_separators() {
        let p = Path::root("R").child("C").attribute("id");
        assert_eq!(p.to_smt_var(), "v_R_C_AT_id");
    }
}
