//! Structural validator: checks a batch of XML instance documents against a
//! schema, per file, rather than just against ground-set path membership
//! (that coarser check is [`crate::coverage::measure`]).
//!
//! A document is structurally valid when every required child element and
//! required attribute is present at every visited node; this is the
//! "Non-goals" boundary drawn in the specification's purpose section
//! (general XSD 1.1 validation is out of scope, but required-ness is not).
use std::path::PathBuf;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::coverage::local_name;
use crate::enumerate::GroundSet;
use crate::error::{Result, Warning, XcoverError};
use crate::model::{AttrUse, ContentModel, ParticleModel, SchemaModel};
use crate::path::Path;

/// A parsed XML element tree: just enough structure (name, attribute names,
/// children) to check required-ness without re-deriving the full ground-set
/// path vocabulary.
struct XmlNode {
    name: String,
    attrs: Vec<String>,
    children: Vec<XmlNode>,
}

fn parse_tree(bytes: &[u8]) -> std::result::Result<XmlNode, String> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf).map_err(|e| e.to_string())? {
            Event::Start(ref e) => {
                let name = local_name(&e.name().into_inner());
                let attrs = e
                    .attributes()
                    .flatten()
                    .map(|a| local_name(&a.key.into_inner()))
                    .collect();
                stack.push(XmlNode { name, attrs, children: Vec::new() });
            }
            Event::Empty(ref e) => {
                let name = local_name(&e.name().into_inner());
                let attrs = e
                    .attributes()
                    .flatten()
                    .map(|a| local_name(&a.key.into_inner()))
                    .collect();
                let node = XmlNode { name, attrs, children: Vec::new() };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::End(_) => {
                let node = stack.pop().ok_or("unbalanced closing tag")?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| "document has no root element".to_string())
}

fn particle_entry_present(node: &XmlNode, particle: &ParticleModel) -> bool {
    match particle {
        ParticleModel::Element(e) => node.children.iter().any(|c| c.name == e.name),
        ParticleModel::Sequence(items) | ParticleModel::All(items) | ParticleModel::Choice(items) => {
            items.iter().any(|item| particle_entry_present(node, item))
        }
    }
}

fn validate_particle(model: &SchemaModel, node: &XmlNode, path: &Path, particle: &ParticleModel, first_error: &mut Option<String>) {
    if first_error.is_some() {
        return;
    }
    match particle {
        ParticleModel::Element(e) => {
            let matches: Vec<&XmlNode> = node.children.iter().filter(|c| c.name == e.name).collect();
            if e.is_required() && matches.is_empty() {
                *first_error = Some(format!("{} is missing required child {}", path.as_str(), e.name));
                return;
            }
            let child_path = path.child(&e.name);
            for child in matches {
                validate_node(model, child, &child_path, &e.type_name, first_error);
            }
        }
        ParticleModel::Sequence(items) | ParticleModel::All(items) => {
            for item in items {
                validate_particle(model, node, path, item, first_error);
            }
        }
        ParticleModel::Choice(items) => {
            if !items.iter().any(|item| particle_entry_present(node, item)) {
                *first_error = Some(format!("{} is missing a required choice alternative", path.as_str()));
                return;
            }
            for item in items {
                if particle_entry_present(node, item) {
                    validate_particle(model, node, path, item, first_error);
                }
            }
        }
    }
}

fn validate_node(model: &SchemaModel, node: &XmlNode, path: &Path, type_name: &str, first_error: &mut Option<String>) {
    if first_error.is_some() {
        return;
    }
    let Some(type_def) = model.types.get(type_name) else {
        return;
    };

    for attr in &type_def.attributes {
        if attr.use_ == AttrUse::Required && !node.attrs.iter().any(|a| a == &attr.name) {
            *first_error = Some(format!("{} is missing required attribute @{}", path.as_str(), attr.name));
            return;
        }
    }

    match &type_def.content {
        ContentModel::Empty | ContentModel::SimpleContent => {}
        ContentModel::ElementOnly(particle) | ContentModel::Mixed(particle) => {
            validate_particle(model, node, path, particle, first_error);
        }
    }
}

/// Per-instance validation outcome: whether the document is structurally
/// valid, and the location of the first problem if not.
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub valid: bool,
    pub first_error: Option<String>,
}

/// The result of validating a batch of instance documents: per-file status
/// plus any undefined-path warnings collected along the way.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub files: Vec<FileValidation>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn valid_count(&self) -> usize {
        self.files.iter().filter(|f| f.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.files.len() - self.valid_count()
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_count() == 0
    }
}

/// Validates one document: structurally sound children/attributes at every
/// visited node, returning the taxonomy's dedicated error on the first
/// problem found. Useful for single-document callers that want to fail fast
/// rather than collect a batch report.
pub fn validate_one(model: &SchemaModel, path: &PathBuf) -> Result<()> {
    let bytes = std::fs::read(path).map_err(XcoverError::Io)?;
    let tree = parse_tree(&bytes).map_err(|reason| XcoverError::XmlParse { path: path.clone(), reason })?;

    let mut first_error = match model.root_elements.iter().find(|r| r.name == tree.name) {
        None => Some(format!("/{}: no matching root element declared in schema", tree.name)),
        Some(root) => {
            let mut err = None;
            validate_node(model, &tree, &Path::root(&root.name), &root.type_name, &mut err);
            err
        }
    };

    if let Some(location) = first_error.take() {
        return Err(XcoverError::ValidationFailure {
            path: path.clone(),
            reason: "structural validation failed".to_string(),
            location,
        });
    }
    Ok(())
}

/// Validates a batch of instance documents, one at a time, without aborting
/// on the first structurally invalid one: each file's own valid/invalid
/// status and first-error location are collected into the returned report.
pub fn validate_batch(model: &SchemaModel, ground_set: &GroundSet, instances: &[PathBuf]) -> Result<ValidationReport> {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for instance in instances {
        debug!(path = %instance.display(), "validating instance document");
        let bytes = std::fs::read(instance).map_err(XcoverError::Io)?;
        let tree = parse_tree(&bytes).map_err(|reason| XcoverError::XmlParse {
            path: instance.clone(),
            reason,
        })?;

        let mut first_error = match model.root_elements.iter().find(|r| r.name == tree.name) {
            None => Some(format!("/{}: no matching root element declared in schema", tree.name)),
            Some(root) => {
                let mut err = None;
                validate_node(model, &tree, &Path::root(&root.name), &root.type_name, &mut err);
                err
            }
        };

        let paths = crate::coverage::paths_in_bytes(&bytes).map_err(|reason| XcoverError::XmlParse {
            path: instance.clone(),
            reason,
        })?;
        for path in paths {
            if !ground_set.contains(&path) {
                warnings.push(Warning::UndefinedPath { path: path.as_str().to_string() });
            }
        }

        let valid = first_error.is_none();
        if let Some(location) = &first_error {
            warnings.push(Warning::ValidationFailure {
                path: instance.clone(),
                reason: "structural validation failed".to_string(),
                location: location.clone(),
            });
        }
        files.push(FileValidation {
            path: instance.clone(),
            valid,
            first_error: first_error.take(),
        });
    }

    Ok(ValidationReport { files, warnings })
}
