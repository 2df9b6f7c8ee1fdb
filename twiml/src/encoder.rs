//! TwiML document writer
//!
//! Serializes a tree of markup elements to an indented XML document. Every
//! element describes itself through the [`Render`] trait (its attributes in a
//! fixed order and its body) so a single routine can write any of them.

use crate::markup::{Element, Markup};
use crate::types::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::io::Write;

/// Number of spaces per nesting level
pub const INDENT_SIZE: usize = 2;

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "Response";

/// Element content as seen by the writer
pub(crate) enum Body<'a> {
    /// No content, written as a self-closing tag
    Empty,
    /// Character data
    Text(&'a str),
    /// Nested markup, one element per child
    Children(&'a [Markup]),
}

/// XML attributes of one element, kept in declaration order
#[derive(Debug, Default)]
pub(crate) struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a string attribute; absent or empty values are skipped
    pub(crate) fn text(mut self, name: &'static str, value: &Option<String>) -> Self {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            self.entries.push((name, value.to_string()));
        }
        self
    }

    /// Add an attribute backed by a plain string field; empty values are skipped
    pub(crate) fn required(mut self, name: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.entries.push((name, value.to_string()));
        }
        self
    }

    /// Add a numeric or boolean attribute when present
    pub(crate) fn value<T: Display>(mut self, name: &'static str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.entries.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn apply(&self, start: &mut BytesStart<'_>) {
        for (name, value) in &self.entries {
            start.push_attribute((*name, value.as_str()));
        }
    }
}

/// How an element is written: its attributes and its body
pub(crate) trait Render: Element {
    fn attributes(&self) -> Attributes;

    fn body(&self) -> Body<'_>;
}

/// Write a complete document: declaration, root element and all children
pub(crate) fn write_document<W: Write>(inner: W, children: &[Markup]) -> Result<W> {
    let mut writer = Writer::new_with_indent(inner, b' ', INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for child in children {
        write_element(&mut writer, child.as_render())?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    Ok(writer.into_inner())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &dyn Render) -> Result<()> {
    let name = element.type_name();
    log::trace!("Writing <{}>", name);

    let mut start = BytesStart::new(name);
    let attributes = element.attributes();
    if !attributes.is_empty() {
        attributes.apply(&mut start);
    }

    match element.body() {
        Body::Empty | Body::Text("") => {
            writer.write_event(Event::Empty(start))?;
        }
        Body::Children(children) if children.is_empty() => {
            writer.write_event(Event::Empty(start))?;
        }
        Body::Text(text) => {
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Body::Children(children) => {
            writer.write_event(Event::Start(start))?;
            for child in children {
                write_element(writer, child.as_render())?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}
