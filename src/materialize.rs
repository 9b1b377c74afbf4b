//! Schema-aware XML materializer (component H): turns a chosen subset of
//! ground-set paths into an actual XML document a schema validator would
//! accept.
use std::collections::BTreeSet;

use base64::Engine;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use tracing::warn;

use crate::error::{Result, Warning, XcoverError};
use crate::model::{AttrUse, ContentModel, ElementParticle, ParticleModel, SchemaModel, SimpleTypeDef};
use crate::path::Path;

/// A placeholder leaf value for a simple type: its first enumeration member
/// if it has one, otherwise a type-appropriate literal.
fn leaf_value(simple: Option<&SimpleTypeDef>) -> String {
    let Some(simple) = simple else {
        return "value".to_string();
    };
    if let Some(first) = simple.enumeration.first() {
        return first.clone();
    }
    match simple.base.as_str() {
        "boolean" => "true".to_string(),
        "int" | "integer" | "long" | "short" | "byte" | "positiveInteger" | "nonNegativeInteger"
        | "unsignedInt" | "unsignedLong" => "1".to_string(),
        "decimal" | "float" | "double" => "1.0".to_string(),
        "date" => "2000-01-01".to_string(),
        "dateTime" => "2000-01-01T00:00:00".to_string(),
        "time" => "00:00:00".to_string(),
        "anyURI" => "urn:example:value".to_string(),
        "base64Binary" => base64::engine::general_purpose::STANDARD.encode(b"sample"),
        "hexBinary" => "48656C6C6F".to_string(),
        _ => "value".to_string(),
    }
}

/// Walks a schema model, writing only the paths that are required or named
/// in `included`.
struct Materializer<'a> {
    model: &'a SchemaModel,
    included: &'a BTreeSet<Path>,
    warnings: Vec<Warning>,
    max_depth: usize,
    namespaces: &'a [(String, String)],
}

impl<'a> Materializer<'a> {
    fn wants(&self, path: &Path, required: bool) -> bool {
        required || self.included.contains(path)
    }

    fn materialize(mut self, root: &ElementParticle) -> Result<(String, Vec<Warning>)> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let path = Path::root(&root.name);
        self.write_element(&mut writer, &path, root, 0)?;
        let xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        Ok((xml, self.warnings))
    }

    fn write_element(
        &mut self,
        writer: &mut Writer<Vec<u8>>,
        path: &Path,
        element: &ElementParticle,
        depth: usize,
    ) -> Result<()> {
        let type_def = self.model.types.get(&element.type_name);
        let simple_def = self.model.simple_types.get(&element.type_name);

        let attr_decls: Vec<_> = type_def
            .map(|t| t.attributes.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter(|a| a.use_ != AttrUse::Prohibited)
            .filter(|a| self.wants(&path.attribute(&a.name), a.use_ == AttrUse::Required))
            .collect();
        let attr_values: Vec<(String, String)> = attr_decls
            .iter()
            .map(|a| (a.name.clone(), leaf_value(self.model.simple_types.get(&a.type_name))))
            .collect();

        let mut start = BytesStart::new(element.name.as_str());
        if depth == 0 {
            for (prefix, uri) in self.namespaces {
                start.push_attribute((format!("xmlns:{prefix}").as_str(), uri.as_str()));
            }
        }
        for (name, value) in &attr_values {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        match type_def {
            None => {
                if simple_def.is_none() {
                    let detail = "no type definition found; emitting placeholder text".to_string();
                    warn!(path = %path.as_str(), detail, "materialization fallback");
                    self.warnings.push(Warning::Materialization {
                        path: path.as_str().to_string(),
                        detail,
                    });
                }
                writer.write_event(Event::Start(start.clone()))?;
                writer.write_event(Event::Text(BytesText::new(&leaf_value(simple_def))))?;
                writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            }
            Some(type_def) => match &type_def.content {
                ContentModel::Empty => {
                    writer.write_event(Event::Empty(start))?;
                }
                ContentModel::SimpleContent => {
                    writer.write_event(Event::Start(start.clone()))?;
                    writer.write_event(Event::Text(BytesText::new("value")))?;
                    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
                }
                ContentModel::ElementOnly(particle) | ContentModel::Mixed(particle) => {
                    if depth >= self.max_depth {
                        let detail = "max depth reached; truncating descendants".to_string();
                        warn!(path = %path.as_str(), detail, "materialization truncated");
                        self.warnings.push(Warning::Materialization {
                            path: path.as_str().to_string(),
                            detail,
                        });
                        writer.write_event(Event::Empty(start))?;
                    } else {
                        writer.write_event(Event::Start(start.clone()))?;
                        self.write_particle(writer, path, particle, depth)?;
                        writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
                    }
                }
            },
        }
        Ok(())
    }

    fn write_particle(
        &mut self,
        writer: &mut Writer<Vec<u8>>,
        parent_path: &Path,
        particle: &ParticleModel,
        depth: usize,
    ) -> Result<()> {
        match particle {
            ParticleModel::Element(e) => {
                let child_path = parent_path.child(&e.name);
                if self.wants(&child_path, e.is_required()) {
                    self.write_element(writer, &child_path, e, depth + 1)?;
                }
            }
            ParticleModel::Sequence(items) | ParticleModel::All(items) => {
                for item in items {
                    self.write_particle(writer, parent_path, item, depth)?;
                }
            }
            ParticleModel::Choice(items) => {
                // At most one branch can appear; prefer one the caller
                // wanted, falling back to the first so every choice still
                // resolves to a schema-valid selection.
                let chosen = items
                    .iter()
                    .find(|item| self.branch_wanted(parent_path, item))
                    .or_else(|| items.first());
                if let Some(item) = chosen {
                    self.write_particle(writer, parent_path, item, depth)?;
                }
            }
        }
        Ok(())
    }

    fn branch_wanted(&self, parent_path: &Path, particle: &ParticleModel) -> bool {
        match particle {
            ParticleModel::Element(e) => self.included.contains(&parent_path.child(&e.name)),
            ParticleModel::Sequence(items) | ParticleModel::All(items) | ParticleModel::Choice(items) => {
                items.iter().any(|item| self.branch_wanted(parent_path, item))
            }
        }
    }
}

/// Materializes a document that includes every path in `included` (plus
/// every required path), rooted at the root element named `root_name`, or
/// the model's first root element if `None`.
pub fn materialize(
    model: &SchemaModel,
    root_name: Option<&str>,
    included: &BTreeSet<Path>,
    max_depth: usize,
) -> Result<(String, Vec<Warning>)> {
    materialize_with_namespaces(model, root_name, included, max_depth, &[])
}

/// Same as [`materialize`], additionally stamping `namespaces` as
/// `xmlns:prefix="uri"` declarations on the root element.
pub fn materialize_with_namespaces(
    model: &SchemaModel,
    root_name: Option<&str>,
    included: &BTreeSet<Path>,
    max_depth: usize,
    namespaces: &[(String, String)],
) -> Result<(String, Vec<Warning>)> {
    let root = match root_name {
        Some(name) => model.root_elements.iter().find(|r| r.name == name),
        None => model.root_elements.first(),
    }
    .ok_or_else(|| XcoverError::Enumeration("schema has no root elements".to_string()))?;

    Materializer {
        model,
        included,
        warnings: Vec::new(),
        max_depth,
        namespaces,
    }
    .materialize(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeDecl, MaxOccurs, TypeDef};
    use std::collections::BTreeMap;
    use test_case::test_case;

    fn simple(base: &str) -> SimpleTypeDef {
        SimpleTypeDef {
            base: base.to_string(),
            enumeration: Vec::new(),
        }
    }

    #[test_case("boolean", "true"; "boolean")]
    #[test_case("int", "1"; "int")]
    #[test_case("unsignedLong", "1"; "unsignedLong")]
    #[test_case("decimal", "1.0"; "decimal")]
    #[test_case("date", "2000-01-01"; "date")]
    #[test_case("dateTime", "2000-01-01T00:00:00"; "dateTime")]
    #[test_case("time", "00:00:00"; "time")]
    #[test_case("anyURI", "urn:example:value"; "anyURI")]
    #[test_case("hexBinary", "48656C6C6F"; "hexBinary")]
    #[test_case("string", "value"; "unmapped falls back to the string literal")]
    fn leaf_value_table(base: &str, expected: &str) {
        assert_eq!(leaf_value(Some(&simple(base))), expected);
    }

    #[test]
    fn leaf_value_base64_binary_is_valid_base64() {
        let value = leaf_value(Some(&simple("base64Binary")));
        assert!(base64::engine::general_purpose::STANDARD.decode(&value).is_ok());
    }

    #[test]
    fn leaf_value_prefers_first_enumeration_member() {
        let simple = SimpleTypeDef {
            base: "string".to_string(),
            enumeration: vec!["Pending".to_string(), "Completed".to_string()],
        };
        assert_eq!(leaf_value(Some(&simple)), "Pending");
    }

    fn model_with_optional_child() -> SchemaModel {
        let mut types = BTreeMap::new();
        types.insert(
            "RootType".to_string(),
            TypeDef {
                name: Some("RootType".to_string()),
                attributes: vec![AttributeDecl {
                    name: "id".to_string(),
                    type_name: "string".to_string(),
                    use_: AttrUse::Required,
                }],
                content: ContentModel::ElementOnly(ParticleModel::Sequence(vec![ParticleModel::Element(
                    ElementParticle {
                        name: "Note".to_string(),
                        type_name: "string".to_string(),
                        min_occurs: 0,
                        max_occurs: MaxOccurs::Bounded(1),
                    },
                )])),
            },
        );
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
            simple_types: BTreeMap::new(),
            opaque_namespaces: BTreeSet::new(),
        }
    }

    #[test]
    fn omits_optional_child_when_not_included() {
        let model = model_with_optional_child();
        let (xml, warnings) = materialize(&model, None, &BTreeSet::new(), 10).unwrap();
        assert!(xml.contains("<Root"));
        assert!(!xml.contains("<Note"));
        assert!(warnings.is_empty() || warnings.iter().all(|w| matches!(w, Warning::Materialization { .. })));
    }

    #[test]
    fn includes_optional_child_when_requested() {
        let model = model_with_optional_child();
        let mut included = BTreeSet::new();
        included.insert(Path::root("Root").child("Note"));
        let (xml, _) = materialize(&model, None, &included, 10).unwrap();
        assert!(xml.contains("<Note"));
    }
}
