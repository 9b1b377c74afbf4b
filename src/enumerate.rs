//! Depth-bounded path enumeration over a lowered [`SchemaModel`].
//!
//! The enumerator walks every reachable root element, recursing through
//! attributes and content particles, and records two things: the
//! [`GroundSet`] (every path that could ever appear in a conforming
//! document) and the [`ConstraintSet`] (the hierarchy, cardinality and
//! mutual-exclusion relationships among those paths that the SMT encoder
//! and the snippet generators both need).
use std::collections::BTreeSet;

use crate::config::CoverageConfig;
use crate::model::{AttrUse, ContentModel, ElementParticle, ParticleModel, SchemaModel, TypeName};
use crate::path::Path;

/// Whether a ground-set member must appear in every conforming document or
/// only may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    RequiredElement,
    OptionalElement,
    RequiredAttribute,
    OptionalAttribute,
}

impl PathKind {
    pub fn is_required(self) -> bool {
        matches!(self, PathKind::RequiredElement | PathKind::RequiredAttribute)
    }

    pub fn is_attribute(self) -> bool {
        matches!(self, PathKind::RequiredAttribute | PathKind::OptionalAttribute)
    }
}

/// Every path a conforming document could exercise, deduplicated and
/// ordered (so two runs over the same schema always produce the same
/// snippet/SMT-variable ordering).
#[derive(Debug, Clone, Default)]
pub struct GroundSet {
    pub paths: BTreeSet<Path>,
}

impl GroundSet {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}

/// Hierarchy, cardinality and choice-group relationships discovered during
/// enumeration. Downstream components consult this instead of re-walking
/// the schema model themselves.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    kinds: std::collections::BTreeMap<Path, PathKind>,
    parents: std::collections::BTreeMap<Path, Path>,
    /// Each entry is a set of mutually-exclusive entry paths under a single
    /// `xs:choice` particle: a conforming document picks at most one.
    choice_groups: Vec<BTreeSet<Path>>,
}

impl ConstraintSet {
    pub fn kind(&self, path: &Path) -> Option<PathKind> {
        self.kinds.get(path).copied()
    }

    pub fn is_required(&self, path: &Path) -> bool {
        self.kind(path).map(PathKind::is_required).unwrap_or(false)
    }

    pub fn parent(&self, path: &Path) -> Option<&Path> {
        self.parents.get(path)
    }

    pub fn choice_groups(&self) -> &[BTreeSet<Path>] {
        &self.choice_groups
    }

    /// Required paths whose parent is either absent (root) or itself
    /// required — the set the generators must never leave uncovered.
    pub fn required_paths(&self) -> impl Iterator<Item = &Path> {
        self.kinds
            .iter()
            .filter(|(_, kind)| kind.is_required())
            .map(|(path, _)| path)
    }
}

struct Enumerator<'m> {
    model: &'m SchemaModel,
    max_depth: usize,
    ground_set: GroundSet,
    constraints: ConstraintSet,
    /// Guards against infinite recursion on cyclic type references: the
    /// same (path, type, depth) triple is never walked twice.
    visited: BTreeSet<(String, TypeName, usize)>,
}

impl<'m> Enumerator<'m> {
    fn new(model: &'m SchemaModel, config: &CoverageConfig) -> Self {
        Enumerator {
            model,
            max_depth: config.max_depth,
            ground_set: GroundSet::default(),
            constraints: ConstraintSet::default(),
            visited: BTreeSet::new(),
        }
    }

    fn run(mut self) -> (GroundSet, ConstraintSet) {
        let roots = self.model.root_elements.clone();
        for root in &roots {
            let path = Path::root(&root.name);
            self.record(&path, None, root.is_required().into());
            self.walk_element(&path, root, 1);
        }
        (self.ground_set, self.constraints)
    }

    fn record(&mut self, path: &Path, parent: Option<&Path>, required: PathKindSeed) {
        let kind = match (required.0, path.is_attribute()) {
            (true, true) => PathKind::RequiredAttribute,
            (false, true) => PathKind::OptionalAttribute,
            (true, false) => PathKind::RequiredElement,
            (false, false) => PathKind::OptionalElement,
        };
        self.ground_set.paths.insert(path.clone());
        self.constraints.kinds.insert(path.clone(), kind);
        if let Some(parent) = parent {
            self.constraints.parents.insert(path.clone(), parent.clone());
        } else if let Some(implied) = path.parent() {
            self.constraints.parents.insert(path.clone(), implied);
        }
    }

    fn walk_element(&mut self, path: &Path, element: &ElementParticle, depth: usize) {
        if depth > self.max_depth {
            return;
        }
        let key = (path.as_str().to_string(), element.type_name.clone(), depth);
        if !self.visited.insert(key) {
            return;
        }

        let Some(type_def) = self.model.types.get(&element.type_name) else {
            // Simple-typed or unresolved leaf: nothing further to enumerate.
            return;
        };

        for attr in &type_def.attributes {
            if attr.use_ == AttrUse::Prohibited {
                continue;
            }
            let attr_path = path.attribute(&attr.name);
            self.record(&attr_path, Some(path), (attr.use_ == AttrUse::Required).into());
        }

        match &type_def.content {
            ContentModel::Empty | ContentModel::SimpleContent => {}
            ContentModel::ElementOnly(particle) | ContentModel::Mixed(particle) => {
                self.walk_particle(path, particle, depth);
            }
        }
    }

    fn walk_particle(&mut self, parent_path: &Path, particle: &ParticleModel, depth: usize) {
        match particle {
            ParticleModel::Element(e) => {
                let child_path = parent_path.child(&e.name);
                self.record(&child_path, Some(parent_path), e.is_required().into());
                self.walk_element(&child_path, e, depth + 1);
            }
            ParticleModel::Sequence(items) | ParticleModel::All(items) => {
                for item in items {
                    self.walk_particle(parent_path, item, depth);
                }
            }
            ParticleModel::Choice(items) => {
                let mut branch_paths = BTreeSet::new();
                for item in items {
                    self.entry_paths(parent_path, item, &mut branch_paths);
                }
                if branch_paths.len() > 1 {
                    self.constraints.choice_groups.push(branch_paths.clone());
                }
                for item in items {
                    self.walk_particle(parent_path, item, depth);
                }
                // A choice branch's entry element is never unconditionally
                // present: only one alternative manifests in a given
                // document, regardless of the branch's own minOccurs.
                for entry in &branch_paths {
                    if let Some(kind) = self.constraints.kinds.get_mut(entry) {
                        *kind = if entry.is_attribute() {
                            PathKind::OptionalAttribute
                        } else {
                            PathKind::OptionalElement
                        };
                    }
                }
            }
        }
    }

    /// The element paths a branch of a choice would introduce directly under
    /// `parent_path`, looking through any nested sequence/choice/all groups
    /// (which don't themselves add path depth).
    fn entry_paths(&self, parent_path: &Path, particle: &ParticleModel, out: &mut BTreeSet<Path>) {
        match particle {
            ParticleModel::Element(e) => {
                out.insert(parent_path.child(&e.name));
            }
            ParticleModel::Sequence(items) | ParticleModel::All(items) | ParticleModel::Choice(items) => {
                for item in items {
                    self.entry_paths(parent_path, item, out);
                }
            }
        }
    }
}

/// Wraps a bool so `record`'s call sites read as `is_required.into()` rather
/// than a bare, easy-to-transpose-with-`is_attribute` boolean.
struct PathKindSeed(bool);

impl From<bool> for PathKindSeed {
    fn from(value: bool) -> Self {
        PathKindSeed(value)
    }
}

/// Enumerates every path reachable from `model`'s root elements, bounded by
/// `config.max_depth`.
pub fn enumerate(model: &SchemaModel, config: &CoverageConfig) -> (GroundSet, ConstraintSet) {
    Enumerator::new(model, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaxOccurs, SimpleTypeDef};
    use std::collections::BTreeMap;

    fn string_type() -> TypeName {
        "string".to_string()
    }

    fn leaf_element(name: &str, required: bool) -> ElementParticle {
        ElementParticle {
            name: name.to_string(),
            type_name: string_type(),
            min_occurs: if required { 1 } else { 0 },
            max_occurs: MaxOccurs::Bounded(1),
        }
    }

    fn test_model() -> SchemaModel {
        let mut types = BTreeMap::new();
        types.insert(
            "RootType".to_string(),
            crate::model::TypeDef {
                name: Some("RootType".to_string()),
                attributes: vec![crate::model::AttributeDecl {
                    name: "id".to_string(),
                    type_name: string_type(),
                    use_: AttrUse::Required,
                }],
                content: ContentModel::ElementOnly(ParticleModel::Choice(vec![
                    ParticleModel::Element(leaf_element("A", true)),
                    ParticleModel::Element(leaf_element("B", true)),
                ])),
            },
        );
        let mut simple_types = BTreeMap::new();
        simple_types.insert(string_type(), SimpleTypeDef::default());

        SchemaModel {
            target_namespace: String::new(),
            xs_prefix: "xs".to_string(),
            root_elements: vec![ElementParticle {
                name: "Root".to_string(),
                type_name: "RootType".to_string(),
                min_occurs: 1,
                max_occurs: MaxOccurs::Bounded(1),
            }],
            types,
            simple_types,
            opaque_namespaces: BTreeSet::new(),
        }
    }

    #[test]
    fn enumerates_root_attribute_and_choice_children() {
        let model = test_model();
        let config = CoverageConfig::new("unused.xsd");
        let (ground_set, constraints) = enumerate(&model, &config);

        assert!(ground_set.contains(&Path::root("Root")));
        assert!(ground_set.contains(&Path::root("Root").attribute("id")));
        assert!(ground_set.contains(&Path::root("Root").child("A")));
        assert!(ground_set.contains(&Path::root("Root").child("B")));
        assert_eq!(ground_set.len(), 4);

        assert_eq!(constraints.choice_groups().len(), 1);
        assert_eq!(constraints.choice_groups()[0].len(), 2);
        assert!(constraints.is_required(&Path::root("Root").attribute("id")));
        // Choice branches are mutually exclusive, never unconditionally
        // present, regardless of their own minOccurs.
        assert!(!constraints.is_required(&Path::root("Root").child("A")));
        assert!(!constraints.is_required(&Path::root("Root").child("B")));
    }

    #[test]
    fn depth_bound_stops_recursive_types() {
        let mut model = test_model();
        // Make RootType recursive through element A.
        if let Some(type_def) = model.types.get_mut("RootType") {
            type_def.content = ContentModel::ElementOnly(ParticleModel::Sequence(vec![
                ParticleModel::Element(ElementParticle {
                    name: "A".to_string(),
                    type_name: "RootType".to_string(),
                    min_occurs: 1,
                    max_occurs: MaxOccurs::Unbounded,
                }),
            ]));
        }
        let mut config = CoverageConfig::new("unused.xsd");
        config.max_depth = 3;
        let (ground_set, _) = enumerate(&model, &config);
        // Depth is bounded: the path can't grow past max_depth /Root/A/A/...
        let deepest = ground_set.iter().map(Path::depth).max().unwrap_or(0);
        assert!(deepest <= config.max_depth + 1);
    }
}
