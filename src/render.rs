//! Markup Rendering
//!
//! Every node lowers itself to an [`Element`]; the writer turns an element
//! tree into an indented XML document using `quick-xml`.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

/// Rendering-ready view of a markup node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: &'static str,
    /// Attributes in emission order; zero values are never stored
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Add a string attribute, skipped when empty
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    /// Add a numeric attribute, skipped when zero
    pub fn attr_num(mut self, name: &'static str, value: u32) -> Self {
        if value != 0 {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    /// Add a boolean attribute, skipped when false
    pub fn attr_flag(mut self, name: &'static str, value: bool) -> Self {
        if value {
            self.attributes.push((name, "true".to_string()));
        }
        self
    }

    /// Set character data, skipped when empty
    pub fn text(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.text = Some(text.to_string());
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an emitted attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Render `root` as a standalone XML document with two-space indentation
pub fn write_document(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| Error::Xml(e.to_string()))?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    if element.text.is_some() && !element.children.is_empty() {
        return write_mixed(writer, element);
    }

    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Xml(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Xml(e.to_string()))?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name)))
        .map_err(|e| Error::Xml(e.to_string()))
}

/// Text followed by child elements is written on one line; indenting
/// inside it would add whitespace to the character data
fn write_mixed(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut inline = Writer::new(Vec::new());
    write_element(&mut inline, element)?;

    writer
        .write_indent()
        .map_err(|e| Error::Xml(e.to_string()))?;
    writer.get_mut().extend_from_slice(&inline.into_inner());
    Ok(())
}
