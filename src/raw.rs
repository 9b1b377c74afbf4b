//! Direct `serde` + `quick-xml` mirror of the XSD 1.1 grammar.
//!
//! This module is intentionally a thin, literal transcription of the XSD
//! schema-for-schemas: one struct/enum per grammar production, attributes
//! mapped with `@`-prefixed renames and element bodies mapped through
//! `$value`. Nothing here understands what a path is or what "coverage"
//! means — that lowering happens in [`crate::model`], which walks this raw
//! tree into an owned [`crate::model::SchemaModel`].
use std::io::BufRead;

use quick_xml::de::Deserializer;
use serde::Deserialize;

use crate::basics::{AnyURI, NCName, QName, Token, ID};
use crate::error::XcoverError;
use crate::facets::{
    Assertion, BoundaryFacet, Digits, Enumeration, ExplicitTimezone, Facet, Length, Pattern,
    WhiteSpace,
};
use crate::particles::{All, Any, Choice, Element, Group, Sequence};

#[doc(hidden)]
#[macro_export]
macro_rules! element_from_body {
    ($self:ident, $element_enum:ident::$variant:ident) => {{
        let mut elements = vec![];
        for element in &$self.body {
            if let $element_enum::$variant(e) = element {
                elements.push(e);
            }
        }
        let element = elements.pop();
        if elements.is_empty() {
            element
        } else {
            None
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! elements_from_body {
    ($self:ident, $element_enum:ident::$variant:ident) => {{
        let mut elements = vec![];
        for element in &$self.body {
            if let $element_enum::$variant(e) = element {
                elements.push(e);
            }
        }
        elements
    }};
}

/// Represents the possible final derivation constraints used in complex types.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum Final {
    #[serde(rename = "#all")]
    All,
    Extension,
    Restriction,
    List,
    Union,
}

/// The document root element of the XML Schema Definition (XSD).
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@xmlns")]
    xmlns: Option<String>,
    #[serde(rename = "@attributeFormDefault")]
    pub attribute_form_default: Option<FormChoice>,
    #[serde(rename = "@elementFormDefault")]
    pub element_form_default: Option<FormChoice>,
    #[serde(rename = "@blockDefault")]
    pub block_default: Option<Block>,
    #[serde(rename = "@finalDefault")]
    pub final_default: Option<Vec<Final>>,
    #[serde(rename = "@targetNamespace")]
    pub target_namespace: AnyURI,
    #[serde(rename = "@version")]
    pub version: Option<Token>,
    #[serde(rename = "@defaultAttributes")]
    pub default_attributes: Option<String>,
    #[serde(rename = "@xpathDefaultNamespace")]
    pub xpath_default_namespace: Option<AnyURI>,
    #[serde(rename = "@minVersion")]
    pub min_version: Option<String>,
    #[serde(rename = "@lang")]
    pub xml_lang: Option<String>,
    #[serde(rename = "$value")]
    body: Vec<SchemaBody>,
}

impl Schema {
    /// Parses a schema document from a buffered reader.
    ///
    /// Unlike the upstream grammar this is built from, parse failures are
    /// propagated rather than panicking, so a malformed or partially
    /// retrieved schema surfaces as [`XcoverError::SchemaParse`] instead of
    /// aborting the process.
    pub fn from_reader(reader: impl BufRead, location: &str) -> Result<Self, XcoverError> {
        let mut deserializer = Deserializer::from_reader(reader);
        Schema::deserialize(&mut deserializer).map_err(|e| XcoverError::SchemaParse {
            reason: e.to_string(),
            location: location.to_string(),
        })
    }

    pub fn elements(&self) -> Vec<&Element> {
        let mut elements = vec![];
        for element in &self.body {
            if let SchemaBody::Element(e) = element {
                elements.push(e.as_ref());
            }
        }
        elements
    }

    pub fn simple_types(&self) -> Vec<&SimpleType> {
        elements_from_body!(self, SchemaBody::SimpleType)
    }

    pub fn complex_types(&self) -> Vec<&ComplexType> {
        elements_from_body!(self, SchemaBody::ComplexType)
    }

    pub fn annotations(&self) -> Vec<&Annotation> {
        elements_from_body!(self, SchemaBody::Annotation)
    }

    pub fn includes(&self) -> Vec<&Include> {
        elements_from_body!(self, SchemaBody::Include)
    }

    pub fn imports(&self) -> Vec<&Import> {
        elements_from_body!(self, SchemaBody::Import)
    }

    pub fn redefines(&self) -> Vec<&Redefine> {
        elements_from_body!(self, SchemaBody::Redefine)
    }

    pub fn groups(&self) -> Vec<&Group> {
        elements_from_body!(self, SchemaBody::Group)
    }

    pub fn attribute_groups(&self) -> Vec<&AttributeGroup> {
        elements_from_body!(self, SchemaBody::AttributeGroup)
    }

    pub fn attributes(&self) -> Vec<&Attribute> {
        elements_from_body!(self, SchemaBody::Attribute)
    }

    pub fn notations(&self) -> Vec<&Notation> {
        elements_from_body!(self, SchemaBody::Notation)
    }

    pub fn default_open_contents(&self) -> Vec<&DefaultOpenContent> {
        elements_from_body!(self, SchemaBody::DefaultOpenContent)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum FormChoice {
    Qualified,
    Unqualified,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum Block {
    #[serde(rename = "#all")]
    All,
    Extension,
    Restriction,
    Substitution,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum SchemaBody {
    Include(Include),
    Import(Import),
    Override,
    Redefine(Redefine),
    Annotation(Annotation),
    DefaultOpenContent(DefaultOpenContent),
    SimpleType(SimpleType),
    ComplexType(ComplexType),
    Group(Group),
    AttributeGroup(AttributeGroup),
    Element(Box<Element>),
    Attribute(Attribute),
    Notation(Notation),
}

/// `<xs:include>`: pulls in another schema document sharing the same target
/// namespace.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Include {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@schemaLocation")]
    pub schema_location: AnyURI,
    #[serde(rename = "$value", default)]
    pub annotations: Vec<Annotation>,
}

/// `<xs:import>`: pulls in definitions from another namespace.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Import {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@namespace")]
    pub namespace: Option<AnyURI>,
    #[serde(rename = "@schemaLocation")]
    pub schema_location: AnyURI,
    #[serde(rename = "$value", default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Redefine {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@schemaLocation")]
    pub schema_location: AnyURI,
    #[serde(rename = "$value", default)]
    body: Vec<RedefineBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum RedefineBody {
    Annotation(Annotation),
    SimpleType(SimpleType),
    ComplexType(ComplexType),
    Group(Group),
    AttributeGroup(AttributeGroup),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Notation {
    #[serde(rename = "@id")]
    id: Option<ID>,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@public")]
    public: String,
    #[serde(rename = "@system")]
    system: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AttributeGroup {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@name")]
    pub name: Option<NCName>,
    #[serde(rename = "@ref")]
    pub r#ref: Option<QName>,
    #[serde(rename = "$value", default)]
    body: Vec<AttributeGroupBody>,
}

impl AttributeGroup {
    pub fn attributes(&self) -> Vec<&Attribute> {
        elements_from_body!(self, AttributeGroupBody::Attribute)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum AttributeGroupBody {
    Annotation(Annotation),
    Attribute(Attribute),
    AnyAttribute(AnyAttribute),
    AttributeGroup(AttributeGroup),
}

/// Represents an XML Schema attribute declaration.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Attribute {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@name")]
    pub name: Option<NCName>,
    #[serde(rename = "@type")]
    pub r#type: Option<QName>,
    #[serde(rename = "@use")]
    pub r#use: Option<AttributeUse>,
    #[serde(rename = "@ref")]
    pub r#ref: Option<QName>,
    #[serde(rename = "@default")]
    pub default: Option<String>,
    #[serde(rename = "@fixed")]
    pub fixed: Option<String>,
    #[serde(rename = "@form")]
    pub form: Option<FormChoice>,
    #[serde(rename = "@targetNamespace")]
    pub target_namespace: Option<AnyURI>,
    #[serde(rename = "@inheritable")]
    pub inheritable: Option<bool>,
    #[serde(rename = "$value", default)]
    body: Vec<AttributeBody>,
}

impl Attribute {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, AttributeBody::Annotation)
    }

    pub fn simple_type(&self) -> Option<&SimpleType> {
        element_from_body!(self, AttributeBody::SimpleType)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum AttributeUse {
    Optional,
    Prohibited,
    Required,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum AttributeBody {
    Annotation(Annotation),
    SimpleType(SimpleType),
}

/// `<xs:defaultOpenContent>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DefaultOpenContent {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@mode")]
    pub mode: Option<OpenContentMode>,
    #[serde(rename = "@appliesToEmpty")]
    pub applies_to_empty: Option<bool>,
    #[serde(rename = "$value")]
    body: Vec<OpenContentBody>,
}

impl DefaultOpenContent {
    pub fn annotations(&self) -> Option<&Annotation> {
        element_from_body!(self, OpenContentBody::Annotation)
    }

    pub fn any(&self) -> Option<&Any> {
        element_from_body!(self, OpenContentBody::Any)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum OpenContentBody {
    Any(Any),
    Annotation(Annotation),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum OpenContentMode {
    Interleave,
    Suffix,
}

/// Represents an XML Schema simple type definition.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SimpleType {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@final")]
    pub r#final: Option<Final>,
    #[serde(rename = "@name")]
    pub name: Option<NCName>,
    #[serde(rename = "$value", default)]
    body: Vec<SimpleTypeBody>,
}

impl SimpleType {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, SimpleTypeBody::Annotation)
    }

    /// The restriction, union, or list content of this simple type.
    ///
    /// Returns [`XcoverError::Enumeration`] if none of the three is present,
    /// which the XSD grammar never actually permits but `serde` cannot
    /// enforce structurally.
    pub fn content(&self) -> Result<SimpleTypeContent, XcoverError> {
        for element in &self.body {
            match element {
                SimpleTypeBody::Annotation(_) => continue,
                SimpleTypeBody::Restriction(e) => return Ok(SimpleTypeContent::Restriction(e)),
                SimpleTypeBody::Union(e) => return Ok(SimpleTypeContent::Union(e)),
                SimpleTypeBody::List(e) => return Ok(SimpleTypeContent::List(e)),
            };
        }
        Err(XcoverError::Enumeration(format!(
            "simpleType {:?} has no restriction, union, or list content",
            self.name
        )))
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum SimpleTypeBody {
    Annotation(Annotation),
    Restriction(Restriction),
    Union(Union),
    List(List),
}

pub enum SimpleTypeContent<'a> {
    Restriction(&'a Restriction),
    Union(&'a Union),
    List(&'a List),
}

/// `<xs:union>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Union {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@memberTypes")]
    pub member_types: Option<Vec<QName>>,
    #[serde(rename = "$value", default)]
    body: Vec<UnionBody>,
}

impl Union {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, UnionBody::Annotation)
    }

    pub fn simple_types(&self) -> Vec<&SimpleType> {
        elements_from_body!(self, UnionBody::SimpleType)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum UnionBody {
    SimpleType(SimpleType),
    Annotation(Annotation),
}

/// `<xs:list>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct List {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@itemType")]
    pub item_type: Option<QName>,
    #[serde(rename = "$value", default)]
    body: Vec<ListBody>,
}

impl List {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, ListBody::Annotation)
    }

    pub fn simple_types(&self) -> Vec<&SimpleType> {
        elements_from_body!(self, ListBody::SimpleType)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum ListBody {
    SimpleType(SimpleType),
    Annotation(Annotation),
}

/// `<xs:restriction>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Restriction {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@base")]
    pub base: Option<QName>,
    #[serde(rename = "$value", default)]
    body: Vec<RestrictionBody>,
}

impl Restriction {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, RestrictionBody::Annotation)
    }

    pub fn simple_type(&self) -> Option<&SimpleType> {
        element_from_body!(self, RestrictionBody::SimpleType)
    }

    pub fn asserts(&self) -> Vec<&Assert> {
        elements_from_body!(self, RestrictionBody::Assert)
    }

    pub fn attributes(&self) -> Vec<&Attribute> {
        elements_from_body!(self, RestrictionBody::Attribute)
    }

    pub fn attribute_groups(&self) -> Vec<&AttributeGroup> {
        elements_from_body!(self, RestrictionBody::AttributeGroup)
    }

    /// Content particle carried by a `complexContent` restriction (as
    /// opposed to the facets carried by a `simpleType` restriction).
    pub fn sequence(&self) -> Option<&Sequence> {
        element_from_body!(self, RestrictionBody::Sequence)
    }

    pub fn choice(&self) -> Option<&Choice> {
        element_from_body!(self, RestrictionBody::Choice)
    }

    pub fn all(&self) -> Option<&All> {
        element_from_body!(self, RestrictionBody::All)
    }

    pub fn group(&self) -> Option<&Group> {
        element_from_body!(self, RestrictionBody::Group)
    }

    pub fn facets(&self) -> Vec<Facet> {
        let mut elements = vec![];
        for element in &self.body {
            match element {
                RestrictionBody::Pattern(e) => elements.push(Facet::Pattern(e)),
                RestrictionBody::Length(e) => elements.push(Facet::Length(e)),
                RestrictionBody::Annotation(_) => continue,
                RestrictionBody::WhiteSpace(e) => elements.push(Facet::WhiteSpace(e)),
                RestrictionBody::SimpleType(_) => continue,
                RestrictionBody::AnyAttribute(_) => continue,
                RestrictionBody::MinInclusive(e) => elements.push(Facet::MinInclusive(e)),
                RestrictionBody::MaxInclusive(e) => elements.push(Facet::MaxInclusive(e)),
                RestrictionBody::MinExclusive(e) => elements.push(Facet::MinExclusive(e)),
                RestrictionBody::MaxExclusive(e) => elements.push(Facet::MaxExclusive(e)),
                RestrictionBody::MinLength(e) => elements.push(Facet::MinLength(e)),
                RestrictionBody::MaxLength(e) => elements.push(Facet::MaxLength(e)),
                RestrictionBody::FractionDigits(e) => elements.push(Facet::FractionDigits(e)),
                RestrictionBody::TotalDigits(e) => elements.push(Facet::TotalDigits(e)),
                RestrictionBody::Enumeration(e) => elements.push(Facet::Enumeration(e)),
                RestrictionBody::Sequence(_) => continue,
                RestrictionBody::Attribute(_) => continue,
                RestrictionBody::AttributeGroup(_) => continue,
                RestrictionBody::Group(_) => continue,
                RestrictionBody::All(_) => continue,
                RestrictionBody::Choice(_) => continue,
                RestrictionBody::Assertion(e) => elements.push(Facet::Assertion(e)),
                RestrictionBody::ExplicitTimezone(e) => elements.push(Facet::ExplicitTimezone(e)),
                RestrictionBody::Assert(_) => continue,
            }
        }
        elements
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum RestrictionBody {
    Pattern(Pattern),
    Length(Length),
    Annotation(Annotation),
    WhiteSpace(WhiteSpace),
    SimpleType(SimpleType),
    AnyAttribute(AnyAttribute),
    MinInclusive(BoundaryFacet),
    MaxInclusive(BoundaryFacet),
    MinExclusive(BoundaryFacet),
    MaxExclusive(BoundaryFacet),
    MinLength(Length),
    MaxLength(Length),
    FractionDigits(Digits),
    TotalDigits(Digits),
    Enumeration(Enumeration),
    Sequence(Sequence),
    Attribute(Attribute),
    AttributeGroup(AttributeGroup),
    Group(Group),
    All(All),
    Choice(Choice),
    Assertion(Assertion),
    ExplicitTimezone(ExplicitTimezone),
    Assert(Assert),
}

/// `<xs:anyAttribute>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AnyAttribute {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@namespace")]
    pub namespace: Option<String>,
    #[serde(rename = "@notNamespace")]
    pub not_namespace: Option<String>,
    #[serde(rename = "@notQName")]
    pub not_q_name: Option<String>,
    #[serde(rename = "@processContents")]
    pub process_contents: Option<ProcessContents>,
    #[serde(rename = "$value", default)]
    body: Option<Annotation>,
}

impl AnyAttribute {
    pub fn annotation(&self) -> Option<&Annotation> {
        self.body.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub enum ProcessContents {
    Lax,
    Strict,
    Skip,
}

/// Represents a complex type definition within an XSD schema.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ComplexType {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@name")]
    pub name: Option<NCName>,
    #[serde(rename = "@mixed")]
    pub mixed: Option<bool>,
    #[serde(rename = "@final")]
    pub r#final: Option<Vec<Final>>,
    #[serde(rename = "@block")]
    pub block: Option<Vec<Block>>,
    #[serde(rename = "@abstract")]
    pub r#abstract: Option<bool>,
    #[serde(rename = "@type")]
    pub r#type: Option<String>,
    #[serde(rename = "@default_attributes_apply")]
    pub default_attributes_apply: Option<bool>,
    #[serde(rename = "$value", default)]
    body: Vec<ComplexTypeBody>,
}

impl ComplexType {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, ComplexTypeBody::Annotation)
    }

    pub fn all(&self) -> Option<&All> {
        element_from_body!(self, ComplexTypeBody::All)
    }

    pub fn asserts(&self) -> Vec<&Assert> {
        elements_from_body!(self, ComplexTypeBody::Assert)
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        element_from_body!(self, ComplexTypeBody::Sequence)
    }

    pub fn attributes(&self) -> Vec<&Attribute> {
        elements_from_body!(self, ComplexTypeBody::Attribute)
    }

    pub fn attribute_groups(&self) -> Vec<&AttributeGroup> {
        elements_from_body!(self, ComplexTypeBody::AttributeGroup)
    }

    pub fn any_attribute(&self) -> Option<&AnyAttribute> {
        element_from_body!(self, ComplexTypeBody::AnyAttribute)
    }

    pub fn group(&self) -> Option<&Group> {
        element_from_body!(self, ComplexTypeBody::Group)
    }

    pub fn complex_content(&self) -> Option<&ComplexContent> {
        element_from_body!(self, ComplexTypeBody::ComplexContent)
    }

    pub fn simple_content(&self) -> Option<&SimpleContent> {
        element_from_body!(self, ComplexTypeBody::SimpleContent)
    }

    pub fn choice(&self) -> Option<&Choice> {
        element_from_body!(self, ComplexTypeBody::Choice)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum ComplexTypeBody {
    Annotation(Annotation),
    All(All),
    Assert(Assert),
    Sequence(Sequence),
    Attribute(Attribute),
    AttributeGroup(AttributeGroup),
    AnyAttribute(AnyAttribute),
    Group(Group),
    ComplexContent(ComplexContent),
    SimpleContent(SimpleContent),
    OpenContent(OpenContent),
    Choice(Choice),
}

/// `<xs:openContent>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct OpenContent {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@mode")]
    pub mode: Option<OpenContentMode>,
    #[serde(rename = "$value")]
    body: Vec<OpenContentBody>,
}

impl OpenContent {
    pub fn annotations(&self) -> Option<&Annotation> {
        element_from_body!(self, OpenContentBody::Annotation)
    }

    pub fn any(&self) -> Option<&Any> {
        element_from_body!(self, OpenContentBody::Any)
    }
}

/// `<xs:simpleContent>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SimpleContent {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "$value", default)]
    body: Vec<ContentBody>,
}

impl SimpleContent {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, ContentBody::Annotation)
    }

    pub fn restriction(&self) -> Option<&Restriction> {
        element_from_body!(self, ContentBody::Restriction)
    }

    pub fn extension(&self) -> Option<&Extension> {
        element_from_body!(self, ContentBody::Extension)
    }
}

/// `<xs:complexContent>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ComplexContent {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@mixed")]
    pub mixed: Option<bool>,
    #[serde(rename = "$value")]
    body: Vec<ContentBody>,
}

impl ComplexContent {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, ContentBody::Annotation)
    }

    pub fn restriction(&self) -> Option<&Restriction> {
        element_from_body!(self, ContentBody::Restriction)
    }

    pub fn extension(&self) -> Option<&Extension> {
        element_from_body!(self, ContentBody::Extension)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum ContentBody {
    Annotation(Annotation),
    Restriction(Restriction),
    Extension(Extension),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    #[serde(rename = "@source")]
    source: Option<AnyURI>,
}

/// `<xs:annotation>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Annotation {
    #[serde(rename = "@namespace")]
    pub namespace: Option<String>,
    #[serde(rename = "$value", default)]
    body: Vec<AnnotationBody>,
}

impl Annotation {
    pub fn documentation(&self) -> Vec<&Documentation> {
        elements_from_body!(self, AnnotationBody::Documentation)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum AnnotationBody {
    #[serde(rename = "appinfo")]
    AppInfo(AppInfo),
    Documentation(Documentation),
}

/// `<xs:extension>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Extension {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@base")]
    pub base: QName,
    #[serde(rename = "$value", default)]
    body: Vec<ExtensionBody>,
}

impl Extension {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, ExtensionBody::Annotation)
    }

    pub fn open_content(&self) -> Option<&OpenContent> {
        element_from_body!(self, ExtensionBody::OpenContent)
    }

    pub fn asserts(&self) -> Vec<&Assert> {
        elements_from_body!(self, ExtensionBody::Assert)
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        element_from_body!(self, ExtensionBody::Sequence)
    }

    pub fn choice(&self) -> Option<&Choice> {
        element_from_body!(self, ExtensionBody::Choice)
    }

    pub fn all(&self) -> Option<&All> {
        element_from_body!(self, ExtensionBody::All)
    }

    pub fn group(&self) -> Option<&Group> {
        element_from_body!(self, ExtensionBody::Group)
    }

    pub fn attributes(&self) -> Vec<&Attribute> {
        elements_from_body!(self, ExtensionBody::Attribute)
    }

    pub fn attribute_groups(&self) -> Vec<&AttributeGroup> {
        elements_from_body!(self, ExtensionBody::AttributeGroup)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum ExtensionBody {
    All(All),
    Assert(Assert),
    Group(Group),
    Attribute(Attribute),
    AnyAttribute(AnyAttribute),
    AttributeGroup(AttributeGroup),
    Sequence(Sequence),
    Choice(Choice),
    Annotation(Annotation),
    OpenContent(OpenContent),
}

/// `<xs:documentation>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Documentation {
    #[serde(rename = "@source")]
    pub source: Option<String>,
    #[serde(rename = "@lang")]
    pub xml_lang: Option<String>,
    #[serde(rename = "$value", default)]
    pub body: Vec<String>,
}

/// `<xs:unique>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Unique {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@name")]
    pub name: NCName,
    #[serde(rename = "@ref")]
    pub r#ref: Option<QName>,
    #[serde(rename = "$value", default)]
    body: Vec<UniqueBody>,
}

impl Unique {
    pub fn annotation(&self) -> Option<&Annotation> {
        element_from_body!(self, UniqueBody::Annotation)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum UniqueBody {
    Annotation(Annotation),
    Selector(Selector),
    Field(Field),
}

/// `<xs:selector>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Selector {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@xpath")]
    xpath: String,
    #[serde(rename = "@xpathDefaultNamespace")]
    pub xpath_default_namespace: Option<AnyURI>,
    body: Option<Annotation>,
}

impl Selector {
    pub fn annotation(&self) -> Option<&Annotation> {
        self.body.as_ref()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Key {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "$value", default)]
    body: Vec<KeyBody>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum KeyBody {
    Annotation(Annotation),
    Selector(Selector),
    Field(Field),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Keyref {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@name")]
    name: NCName,
    #[serde(rename = "@refer")]
    refer: QName,
    #[serde(rename = "$value")]
    body: Vec<KeyrefBody>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
enum KeyrefBody {
    Annotation(Annotation),
    Selector(Selector),
    Field(Field),
}

/// `<xs:field>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Field {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@xpath")]
    pub xpath: String,
    #[serde(rename = "@xpathDefaultNamespace")]
    pub xpath_default_namespace: Option<AnyURI>,
    body: Option<Annotation>,
}

impl Field {
    pub fn annotation(&self) -> Option<&Annotation> {
        self.body.as_ref()
    }
}

/// `<xs:assert>`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Assert {
    #[serde(rename = "@id")]
    pub id: Option<ID>,
    #[serde(rename = "@test")]
    pub test: Option<String>,
    #[serde(rename = "$value")]
    pub annotation: Option<Annotation>,
}
