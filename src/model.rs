//! The owned, lowered schema representation every other component reads.
//!
//! [`SchemaModel`] is built once per run by [`SchemaModel::load`], which
//! parses the root schema document (see [`crate::raw`]), eagerly resolves
//! `<xs:import>`/`<xs:include>` when the referenced file can be opened
//! locally, and lowers the raw, borrow-heavy grammar tree into owned,
//! `BTreeMap`-keyed types. Everything downstream (path enumeration,
//! coverage measurement, generation, materialization) reads only this
//! representation, never the raw grammar.
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path as FsPath, PathBuf};

use tracing::warn;

use crate::error::{Result, XcoverError};
use crate::particles::{All, Choice, Element, Group, Sequence};
use crate::raw;

pub type TypeName = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    Bounded(u32),
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrUse {
    Required,
    Optional,
    Prohibited,
}

#[derive(Debug, Clone)]
pub struct AttributeDecl {
    pub name: String,
    pub type_name: TypeName,
    pub use_: AttrUse,
}

#[derive(Debug, Clone)]
pub struct ElementParticle {
    pub name: String,
    pub type_name: TypeName,
    pub min_occurs: u32,
    pub max_occurs: MaxOccurs,
}

impl ElementParticle {
    pub fn is_required(&self) -> bool {
        self.min_occurs >= 1
    }
}

/// A node in a complex type's content model. `Any` wildcards are dropped:
/// this tool enumerates and fills in named, declared structure, not
/// unconstrained extension points.
#[derive(Debug, Clone)]
pub enum ParticleModel {
    Element(ElementParticle),
    Sequence(Vec<ParticleModel>),
    Choice(Vec<ParticleModel>),
    All(Vec<ParticleModel>),
}

#[derive(Debug, Clone)]
pub enum ContentModel {
    Empty,
    SimpleContent,
    ElementOnly(ParticleModel),
    Mixed(ParticleModel),
}

#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: Option<TypeName>,
    pub attributes: Vec<AttributeDecl>,
    pub content: ContentModel,
}

#[derive(Debug, Clone, Default)]
pub struct SimpleTypeDef {
    pub base: TypeName,
    pub enumeration: Vec<String>,
}

/// The owned, lowered representation of a parsed-and-import-resolved schema.
pub struct SchemaModel {
    pub target_namespace: String,
    pub xs_prefix: String,
    pub root_elements: Vec<ElementParticle>,
    pub types: BTreeMap<TypeName, TypeDef>,
    pub simple_types: BTreeMap<TypeName, SimpleTypeDef>,
    pub opaque_namespaces: BTreeSet<String>,
}

/// Namespaces this crate cannot model structurally but knows how to fill in
/// a minimal valid subtree for when materializing (see [`crate::materialize`]).
pub const KNOWN_OPAQUE_NAMESPACES: &[&str] = &["http://www.w3.org/2000/09/xmldsig#"];

fn local_name(qname: &str) -> &str {
    qname.rsplit(':').next().unwrap_or(qname)
}

/// Scans the raw start-tag bytes of the document for the prefix bound to the
/// XSD namespace, so the materializer can re-emit schema-faithful element
/// names later. `quick-xml`'s serde layer already matches by local name, so
/// parsing does not depend on this; it is purely cosmetic for output.
fn detect_xs_prefix(bytes: &[u8]) -> String {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    if let Some(prefix) = key.strip_prefix("xmlns:") {
                        if let Ok(value) = attr.unescape_value() {
                            if value == "http://www.w3.org/2001/XMLSchema" {
                                return prefix.to_string();
                            }
                        }
                    }
                }
                return "xs".to_string();
            }
            Ok(Event::Eof) | Err(_) => return "xs".to_string(),
            _ => continue,
        }
    }
}

struct RawBundle {
    schemas: Vec<raw::Schema>,
    opaque_namespaces: BTreeSet<String>,
}

fn load_bundle(entry_path: &FsPath) -> Result<RawBundle> {
    let mut schemas = Vec::new();
    let mut opaque_namespaces = BTreeSet::new();
    let mut visited = BTreeSet::new();
    let mut queue = vec![entry_path.to_path_buf()];

    while let Some(path) = queue.pop() {
        let canonical = path
            .canonicalize()
            .unwrap_or_else(|_| path.clone());
        if !visited.insert(canonical.clone()) {
            continue;
        }
        let file = File::open(&path).map_err(XcoverError::Io)?;
        let reader = BufReader::new(file);
        let schema = raw::Schema::from_reader(reader, &path.display().to_string())?;

        let base_dir = path.parent().map(PathBuf::from).unwrap_or_default();
        for include in schema.includes() {
            let loc = base_dir.join(&include.schema_location);
            if loc.exists() {
                queue.push(loc);
            } else {
                warn!(location = %include.schema_location, "include target not found locally");
            }
        }
        for import in schema.imports() {
            let loc = base_dir.join(&import.schema_location);
            if loc.exists() {
                queue.push(loc);
            } else {
                let ns = import
                    .namespace
                    .clone()
                    .unwrap_or_else(|| schema.target_namespace.clone());
                warn!(namespace = %ns, "import target not found locally, treating as opaque");
                opaque_namespaces.insert(ns);
            }
        }
        schemas.push(schema);
    }

    opaque_namespaces.extend(KNOWN_OPAQUE_NAMESPACES.iter().map(|s| s.to_string()));
    Ok(RawBundle {
        schemas,
        opaque_namespaces,
    })
}

impl SchemaModel {
    pub fn load(path: impl AsRef<FsPath>) -> Result<SchemaModel> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(XcoverError::Io)?;
        let xs_prefix = detect_xs_prefix(&bytes);

        let bundle = load_bundle(path)?;
        let target_namespace = bundle
            .schemas
            .first()
            .map(|s| s.target_namespace.clone())
            .unwrap_or_default();

        let mut lowering = Lowering::new(&bundle.schemas);
        lowering.lower_all()?;

        Ok(SchemaModel {
            target_namespace,
            xs_prefix,
            root_elements: lowering.root_elements,
            types: lowering.types,
            simple_types: lowering.simple_types,
            opaque_namespaces: bundle.opaque_namespaces,
        })
    }
}

/// Scratch state for the parse -> model lowering pass. Exists only for the
/// duration of [`SchemaModel::load`]; nothing here survives into
/// [`SchemaModel`] itself.
struct Lowering<'a> {
    simple_type_raw: BTreeMap<String, &'a raw::SimpleType>,
    complex_type_raw: BTreeMap<String, &'a raw::ComplexType>,
    group_raw: BTreeMap<String, &'a Group>,
    attribute_group_raw: BTreeMap<String, &'a raw::AttributeGroup>,
    attribute_raw: BTreeMap<String, &'a raw::Attribute>,
    root_element_raw: Vec<&'a Element>,
    types: BTreeMap<TypeName, TypeDef>,
    simple_types: BTreeMap<TypeName, SimpleTypeDef>,
    root_elements: Vec<ElementParticle>,
    anon_counter: u32,
    in_progress: BTreeSet<TypeName>,
}

impl<'a> Lowering<'a> {
    fn new(schemas: &'a [raw::Schema]) -> Self {
        let mut simple_type_raw = BTreeMap::new();
        let mut complex_type_raw = BTreeMap::new();
        let mut group_raw = BTreeMap::new();
        let mut attribute_group_raw = BTreeMap::new();
        let mut attribute_raw = BTreeMap::new();
        let mut root_element_raw = Vec::new();

        for schema in schemas {
            for st in schema.simple_types() {
                if let Some(name) = &st.name {
                    simple_type_raw.insert(name.clone(), st);
                }
            }
            for ct in schema.complex_types() {
                if let Some(name) = &ct.name {
                    complex_type_raw.insert(name.clone(), ct);
                }
            }
            for g in schema.groups() {
                if let Some(name) = &g.name {
                    group_raw.insert(name.clone(), g);
                }
            }
            for ag in schema.attribute_groups() {
                if let Some(name) = &ag.name {
                    attribute_group_raw.insert(name.clone(), ag);
                }
            }
            for a in schema.attributes() {
                if let Some(name) = &a.name {
                    attribute_raw.insert(name.clone(), a);
                }
            }
            for e in schema.elements() {
                root_element_raw.push(e);
            }
        }

        Lowering {
            simple_type_raw,
            complex_type_raw,
            group_raw,
            attribute_group_raw,
            attribute_raw,
            root_element_raw,
            types: BTreeMap::new(),
            simple_types: BTreeMap::new(),
            root_elements: Vec::new(),
            anon_counter: 0,
            in_progress: BTreeSet::new(),
        }
    }

    fn fresh_anon_name(&mut self, hint: &str) -> String {
        self.anon_counter += 1;
        format!("{hint}$anon{}", self.anon_counter)
    }

    fn lower_all(&mut self) -> Result<()> {
        let names: Vec<String> = self.complex_type_raw.keys().cloned().collect();
        for name in names {
            self.lower_complex_type_by_name(&name)?;
        }
        let simple_names: Vec<String> = self.simple_type_raw.keys().cloned().collect();
        for name in simple_names {
            self.lower_simple_type_by_name(&name)?;
        }

        let roots = std::mem::take(&mut self.root_element_raw);
        for e in roots {
            let name = e
                .name
                .clone()
                .ok_or_else(|| XcoverError::Enumeration("top-level element missing @name".into()))?;
            let type_name = self.resolve_element_type(&name, e)?;
            self.root_elements.push(ElementParticle {
                name,
                type_name,
                min_occurs: 1,
                max_occurs: MaxOccurs::Bounded(1),
            });
        }
        Ok(())
    }

    fn lower_complex_type_by_name(&mut self, name: &str) -> Result<()> {
        if self.types.contains_key(name) || self.in_progress.contains(name) {
            return Ok(());
        }
        self.in_progress.insert(name.to_string());
        let raw_ct = *self.complex_type_raw.get(name).ok_or_else(|| {
            XcoverError::Enumeration(format!("complex type {name} referenced but not declared"))
        })?;
        let def = self.lower_complex_type(Some(name.to_string()), raw_ct)?;
        self.types.insert(name.to_string(), def);
        self.in_progress.remove(name);
        Ok(())
    }

    fn lower_simple_type_by_name(&mut self, name: &str) -> Result<()> {
        if self.simple_types.contains_key(name) {
            return Ok(());
        }
        let raw_st = *self
            .simple_type_raw
            .get(name)
            .ok_or_else(|| XcoverError::Enumeration(format!("simple type {name} not declared")))?;
        let def = self.lower_simple_type(raw_st)?;
        self.simple_types.insert(name.to_string(), def);
        Ok(())
    }

    fn lower_simple_type(&mut self, st: &'a raw::SimpleType) -> Result<SimpleTypeDef> {
        match st.content() {
            Ok(raw::SimpleTypeContent::Restriction(r)) => {
                let base = r
                    .base
                    .as_deref()
                    .map(local_name)
                    .unwrap_or("string")
                    .to_string();
                let enumeration = r
                    .facets()
                    .into_iter()
                    .filter_map(|f| match f {
                        crate::facets::Facet::Enumeration(e) => Some(e.value.clone()),
                        _ => None,
                    })
                    .collect();
                Ok(SimpleTypeDef { base, enumeration })
            }
            // Lists and unions are lowered to their declared nominal base
            // (string) rather than unfolding member types; this crate
            // generates one representative value per leaf, not a real
            // member-type union resolver.
            Ok(raw::SimpleTypeContent::Union(_)) | Ok(raw::SimpleTypeContent::List(_)) => {
                Ok(SimpleTypeDef {
                    base: "string".to_string(),
                    enumeration: Vec::new(),
                })
            }
            Err(_) => Ok(SimpleTypeDef::default()),
        }
    }

    /// Resolves a type name to a (possibly freshly synthesized) lowered
    /// type, registering it in `self.types`/`self.simple_types` as a side
    /// effect, and returns the name to store on the owning particle/attribute.
    fn resolve_type_ref(&mut self, type_attr: Option<&str>, inline_complex: Option<&'a raw::ComplexType>, inline_simple: Option<&'a raw::SimpleType>, hint: &str) -> Result<TypeName> {
        if let Some(ct) = inline_complex {
            let name = self.fresh_anon_name(hint);
            let def = self.lower_complex_type(Some(name.clone()), ct)?;
            self.types.insert(name.clone(), def);
            return Ok(name);
        }
        if let Some(st) = inline_simple {
            let name = self.fresh_anon_name(hint);
            let def = self.lower_simple_type(st)?;
            self.simple_types.insert(name.clone(), def);
            return Ok(name);
        }
        if let Some(t) = type_attr {
            let local = local_name(t).to_string();
            if self.complex_type_raw.contains_key(&local) {
                self.lower_complex_type_by_name(&local)?;
            } else if self.simple_type_raw.contains_key(&local) {
                self.lower_simple_type_by_name(&local)?;
            }
            return Ok(local);
        }
        // No type given at all: XSD falls back to xs:anyType / anySimpleType.
        Ok("anyType".to_string())
    }

    fn resolve_element_type(&mut self, hint: &str, e: &'a Element) -> Result<TypeName> {
        self.resolve_type_ref(e.r#type.as_deref(), e.complex_type(), e.simple_type(), hint)
    }

    fn lower_complex_type(&mut self, name: Option<TypeName>, ct: &'a raw::ComplexType) -> Result<TypeDef> {
        if let Some(cc) = ct.complex_content() {
            return self.lower_complex_content(name, ct, cc);
        }
        if let Some(sc) = ct.simple_content() {
            return self.lower_simple_content(name, sc);
        }

        let mut attributes = self.lower_attributes(ct.attributes(), ct.attribute_groups())?;
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        let particle = self.lower_top_particle(ct.sequence(), ct.choice(), ct.all(), ct.group())?;
        let content = match particle {
            Some(p) if ct.mixed.unwrap_or(false) => ContentModel::Mixed(p),
            Some(p) => ContentModel::ElementOnly(p),
            None if ct.mixed.unwrap_or(false) => {
                ContentModel::Mixed(ParticleModel::Sequence(Vec::new()))
            }
            None => ContentModel::Empty,
        };
        Ok(TypeDef {
            name,
            attributes,
            content,
        })
    }

    fn lower_complex_content(
        &mut self,
        name: Option<TypeName>,
        ct: &'a raw::ComplexType,
        cc: &'a raw::ComplexContent,
    ) -> Result<TypeDef> {
        let (base_name, own_attrs, own_attr_groups, own_particle, mixed) =
            if let Some(ext) = cc.extension() {
                let particle = self.lower_top_particle(ext.sequence(), ext.choice(), ext.all(), ext.group())?;
                (
                    local_name(&ext.base).to_string(),
                    ext.attributes(),
                    ext.attribute_groups(),
                    particle,
                    cc.mixed.unwrap_or(false),
                )
            } else if let Some(res) = cc.restriction() {
                let particle =
                    self.lower_top_particle(res.sequence(), res.choice(), res.all(), res.group())?;
                (
                    res.base.as_deref().map(local_name).unwrap_or("anyType").to_string(),
                    res.attributes(),
                    res.attribute_groups(),
                    particle,
                    cc.mixed.unwrap_or(false),
                )
            } else {
                return Err(XcoverError::Enumeration(format!(
                    "complexContent in {name:?} has neither restriction nor extension"
                )));
            };

        let mut base_attrs = Vec::new();
        let mut base_content: Option<ContentModel> = None;
        if self.complex_type_raw.contains_key(&base_name) {
            self.lower_complex_type_by_name(&base_name)?;
            if let Some(base_def) = self.types.get(&base_name) {
                base_attrs = base_def.attributes.clone();
                base_content = Some(base_def.content.clone());
            }
        }

        let mut attributes = base_attrs;
        attributes.extend(self.lower_attributes(own_attrs, own_attr_groups)?);
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        attributes.dedup_by(|a, b| a.name == b.name);

        let content = match (own_particle, base_content) {
            (Some(p), _) if mixed => ContentModel::Mixed(p),
            (Some(p), _) => ContentModel::ElementOnly(p),
            (None, Some(base)) => base,
            (None, None) if mixed => ContentModel::Mixed(ParticleModel::Sequence(Vec::new())),
            (None, None) => ContentModel::Empty,
        };
        let _ = ct;
        Ok(TypeDef {
            name,
            attributes,
            content,
        })
    }

    fn lower_simple_content(&mut self, name: Option<TypeName>, sc: &'a raw::SimpleContent) -> Result<TypeDef> {
        let (attrs, attr_groups) = if let Some(ext) = sc.extension() {
            (ext.attributes(), ext.attribute_groups())
        } else if let Some(res) = sc.restriction() {
            (res.attributes(), res.attribute_groups())
        } else {
            (Vec::new(), Vec::new())
        };
        let attributes = self.lower_attributes(attrs, attr_groups)?;
        Ok(TypeDef {
            name,
            attributes,
            content: ContentModel::SimpleContent,
        })
    }

    fn lower_attributes(
        &mut self,
        direct: Vec<&'a raw::Attribute>,
        groups: Vec<&'a raw::AttributeGroup>,
    ) -> Result<Vec<AttributeDecl>> {
        let mut out = Vec::new();
        for a in direct {
            out.push(self.lower_attribute(a)?);
        }
        for g in groups {
            out.extend(self.lower_attribute_group(g)?);
        }
        Ok(out)
    }

    fn lower_attribute_group(&mut self, ag: &'a raw::AttributeGroup) -> Result<Vec<AttributeDecl>> {
        if let Some(r#ref) = &ag.r#ref {
            let local = local_name(r#ref).to_string();
            if let Some(referenced) = self.attribute_group_raw.get(&local).copied() {
                return self.lower_attribute_group(referenced);
            }
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for a in ag.attributes() {
            out.push(self.lower_attribute(a)?);
        }
        Ok(out)
    }

    fn lower_attribute(&mut self, a: &'a raw::Attribute) -> Result<AttributeDecl> {
        if let Some(r#ref) = &a.r#ref {
            let local = local_name(r#ref).to_string();
            if let Some(referenced) = self.attribute_raw.get(&local).copied() {
                return self.lower_attribute(referenced);
            }
            return Ok(AttributeDecl {
                name: local,
                type_name: "string".to_string(),
                use_: AttrUse::Optional,
            });
        }
        let name = a
            .name
            .clone()
            .ok_or_else(|| XcoverError::Enumeration("attribute has neither @name nor @ref".into()))?;
        let inline_simple = a.simple_type();
        let type_name = self.resolve_type_ref(a.r#type.as_deref(), None, inline_simple, &name)?;
        let use_ = match a.r#use {
            Some(raw::AttributeUse::Required) => AttrUse::Required,
            Some(raw::AttributeUse::Prohibited) => AttrUse::Prohibited,
            Some(raw::AttributeUse::Optional) | None => AttrUse::Optional,
        };
        Ok(AttributeDecl {
            name,
            type_name,
            use_,
        })
    }

    fn lower_top_particle(
        &mut self,
        sequence: Option<&'a Sequence>,
        choice: Option<&'a Choice>,
        all: Option<&'a All>,
        group: Option<&'a Group>,
    ) -> Result<Option<ParticleModel>> {
        if let Some(s) = sequence {
            return Ok(Some(self.lower_sequence(s)?));
        }
        if let Some(c) = choice {
            return Ok(Some(self.lower_choice(c)?));
        }
        if let Some(a) = all {
            return Ok(Some(self.lower_all(a)?));
        }
        if let Some(g) = group {
            return self.lower_group_ref(g);
        }
        Ok(None)
    }

    fn lower_group_ref(&mut self, g: &'a Group) -> Result<Option<ParticleModel>> {
        if let Some(r#ref) = &g.r#ref {
            let local = local_name(r#ref).to_string();
            if let Some(referenced) = self.group_raw.get(&local).copied() {
                return self.lower_group_ref(referenced);
            }
            return Ok(None);
        }
        if let Some(s) = g.sequence() {
            return Ok(Some(self.lower_sequence(s)?));
        }
        if let Some(c) = g.choice() {
            return Ok(Some(self.lower_choice(c)?));
        }
        if let Some(a) = g.all() {
            return Ok(Some(self.lower_all(a)?));
        }
        Ok(None)
    }

    fn lower_sequence(&mut self, s: &'a Sequence) -> Result<ParticleModel> {
        let mut items = Vec::new();
        for particle in s.items() {
            if let Some(p) = self.lower_particle(particle)? {
                items.push(p);
            }
        }
        Ok(ParticleModel::Sequence(items))
    }

    fn lower_choice(&mut self, c: &'a Choice) -> Result<ParticleModel> {
        let mut items = Vec::new();
        for particle in c.items() {
            if let Some(p) = self.lower_particle(particle)? {
                items.push(p);
            }
        }
        Ok(ParticleModel::Choice(items))
    }

    fn lower_all(&mut self, a: &'a All) -> Result<ParticleModel> {
        let mut items = Vec::new();
        for particle in a.items() {
            if let Some(p) = self.lower_particle(particle)? {
                items.push(p);
            }
        }
        Ok(ParticleModel::All(items))
    }

    fn lower_particle(&mut self, p: crate::particles::Particle<'a>) -> Result<Option<ParticleModel>> {
        use crate::particles::Particle;
        match p {
            Particle::Element(e) => {
                let name = e
                    .name
                    .clone()
                    .or_else(|| e.r#ref.as_deref().map(|r| local_name(r).to_string()))
                    .ok_or_else(|| {
                        XcoverError::Enumeration("element particle has neither @name nor @ref".into())
                    })?;
                let type_name = self.resolve_element_type(&name, e)?;
                let min_occurs = e.min_occurs.unwrap_or(1);
                let max_occurs = match &e.max_occurs {
                    None => MaxOccurs::Bounded(1),
                    Some(crate::particles::MaxOccurs::Bounded(n)) => MaxOccurs::Bounded(*n),
                    Some(crate::particles::MaxOccurs::Unbounded(_)) => MaxOccurs::Unbounded,
                };
                Ok(Some(ParticleModel::Element(ElementParticle {
                    name,
                    type_name,
                    min_occurs,
                    max_occurs,
                })))
            }
            Particle::Sequence(s) => Ok(Some(self.lower_sequence(s)?)),
            Particle::Choice(c) => Ok(Some(self.lower_choice(c)?)),
            Particle::Group(g) => self.lower_group_ref(g),
            Particle::Any(_) => Ok(None),
        }
    }
}
