//! Минимальное дерево SVG-элементов и его сериализация через quick-xml.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::core::BarcodeError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

#[inline]
fn svg_err(e: impl std::fmt::Display) -> BarcodeError {
    BarcodeError::Svg(e.to_string())
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Добавить/заменить атрибут.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Все `id` поддерева (включая свой), в порядке обхода.
    pub fn ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(id) = self.attr("id") {
            out.push(id);
        }
        for c in &self.children {
            c.collect_ids(out);
        }
    }

    /// Прямые потомки с данным именем тега.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), BarcodeError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if self.children.is_empty() && self.text.is_none() {
            return w.write_event(Event::Empty(start)).map_err(svg_err);
        }
        w.write_event(Event::Start(start)).map_err(svg_err)?;
        if let Some(t) = &self.text {
            w.write_event(Event::Text(BytesText::new(t))).map_err(svg_err)?;
        }
        for c in &self.children {
            c.write_to(w)?;
        }
        w.write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(svg_err)
    }

    /// Сериализовать элемент в одну строку XML.
    pub fn to_xml_string(&self) -> Result<String, BarcodeError> {
        let mut w = Writer::new(Vec::new());
        self.write_to(&mut w)?;
        String::from_utf8(w.into_inner()).map_err(svg_err)
    }
}
