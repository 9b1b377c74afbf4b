//! Measures how much of a schema's ground set a batch of XML instance
//! documents exercises (component D).
use std::collections::BTreeSet;
use std::path::{Path as FsPath, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::enumerate::GroundSet;
use crate::error::{Result, Warning, XcoverError};
use crate::path::Path;

fn ratio(covered: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        covered as f64 / total as f64
    }
}

/// The result of measuring a batch of instance documents against a ground
/// set: which paths were hit, which were missed, and any paths seen in the
/// instances that the schema doesn't define. Element and attribute paths
/// are tracked separately so a report can show `covered |E ∩ U_elements|`
/// and `covered |A ∩ U_attrs|` independently, as well as their union.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub total_elements: usize,
    pub total_attributes: usize,
    pub covered_elements: BTreeSet<Path>,
    pub covered_attributes: BTreeSet<Path>,
    pub missing_elements: BTreeSet<Path>,
    pub missing_attributes: BTreeSet<Path>,
    pub warnings: Vec<Warning>,
}

impl CoverageReport {
    pub fn total(&self) -> usize {
        self.total_elements + self.total_attributes
    }

    pub fn covered(&self) -> usize {
        self.covered_elements.len() + self.covered_attributes.len()
    }

    pub fn element_ratio(&self) -> f64 {
        ratio(self.covered_elements.len(), self.total_elements)
    }

    pub fn attribute_ratio(&self) -> f64 {
        ratio(self.covered_attributes.len(), self.total_attributes)
    }

    pub fn ratio(&self) -> f64 {
        ratio(self.covered(), self.total())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_elements.is_empty() && self.missing_attributes.is_empty()
    }

    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.missing_elements.iter().chain(self.missing_attributes.iter())
    }

    pub fn used(&self) -> impl Iterator<Item = &Path> {
        self.covered_elements.iter().chain(self.covered_attributes.iter())
    }
}

/// Walks one XML document, returning every path reached (element and
/// attribute alike) using the same canonical form the enumerator produces.
fn paths_in_document(path: &FsPath) -> Result<BTreeSet<Path>> {
    let bytes = std::fs::read(path).map_err(XcoverError::Io)?;
    paths_in_bytes(&bytes).map_err(|reason| XcoverError::XmlParse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Walks an in-memory XML document (e.g. one just produced by
/// [`crate::materialize`]) returning the same canonical paths
/// `paths_in_document` would for a file on disk.
pub fn paths_in_bytes(bytes: &[u8]) -> std::result::Result<BTreeSet<Path>, String> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut seen = BTreeSet::new();
    let mut stack: Vec<String> = Vec::new();
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| e.to_string())?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = local_name(&e.name().into_inner());
                stack.push(name);
                let element_path = stack.join("/");
                seen.insert(Path::from_string(format!("/{element_path}")));

                for attr in e.attributes().flatten() {
                    let attr_name = local_name(&attr.key.into_inner());
                    seen.insert(Path::from_string(format!("/{element_path}@{attr_name}")));
                }

                // A self-closing tag has no matching `End` event to pop it.
                if is_empty {
                    stack.pop();
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(seen)
}

pub(crate) fn local_name(qname: &[u8]) -> String {
    let raw = String::from_utf8_lossy(qname);
    raw.rsplit(':').next().unwrap_or(&raw).to_string()
}

/// Measures `instances` against `ground_set`, one document at a time.
pub fn measure(ground_set: &GroundSet, instances: &[PathBuf]) -> Result<CoverageReport> {
    let mut covered = BTreeSet::new();
    let mut warnings = Vec::new();

    for instance in instances {
        debug!(path = %instance.display(), "measuring instance document");
        let paths = paths_in_document(instance)?;
        for path in paths {
            if ground_set.contains(&path) {
                covered.insert(path);
            } else {
                warnings.push(Warning::UndefinedPath {
                    path: path.as_str().to_string(),
                });
            }
        }
    }

    let (covered_elements, covered_attributes): (BTreeSet<Path>, BTreeSet<Path>) =
        covered.into_iter().partition(|p| !p.is_attribute());
    let (total_elements, total_attributes): (BTreeSet<Path>, BTreeSet<Path>) =
        ground_set.iter().cloned().partition(|p| !p.is_attribute());

    let missing_elements = total_elements.difference(&covered_elements).cloned().collect();
    let missing_attributes = total_attributes.difference(&covered_attributes).cloned().collect();

    Ok(CoverageReport {
        total_elements: total_elements.len(),
        total_attributes: total_attributes.len(),
        covered_elements,
        covered_attributes,
        missing_elements,
        missing_attributes,
        warnings,
    })
}
