//! Хост-документ: пространство id и диагностический sink.
//!
//! [`Host`] — всё, что нужно генератору от документа. [`SvgDocument`] —
//! эталонная реализация: умеет прочитать id из готового SVG, принять
//! фрагменты и собрать итоговый документ.

use std::cell::RefCell;
use std::collections::BTreeSet;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use super::element::Element;
use crate::core::BarcodeError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Документ, в который кладутся фрагменты.
pub trait Host {
    /// Занят ли `id` в документе.
    fn contains_id(&self, id: &str) -> bool;

    /// Зарезервировать `id` сразу после выбора, до вставки фрагмента.
    fn claim_id(&self, id: &str);

    /// Диагностика для пользователя (одна строка).
    fn report(&self, message: &str) {
        log::error!("{message}");
    }
}

#[derive(Debug, Default)]
pub struct SvgDocument {
    ids: RefCell<BTreeSet<String>>,
    elements: Vec<Element>,
    diagnostics: RefCell<Vec<String>>,
    /// Исходный SVG, если документ прочитан из файла.
    source: Option<String>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Прочитать существующий SVG: запоминаем все `id`, сам текст
    /// сохраняется, фрагменты потом вставляются перед `</svg>`.
    pub fn from_svg(src: &str) -> Result<Self, BarcodeError> {
        let mut doc = Self::new();
        doc.scan(src)?;
        doc.source = Some(src.to_owned());
        Ok(doc)
    }

    /// Занести в пространство имён все `id` из SVG-текста.
    pub fn scan(&mut self, src: &str) -> Result<(), BarcodeError> {
        let mut reader = Reader::from_str(src);
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    for a in e.attributes() {
                        let a = a.map_err(|e| BarcodeError::Svg(e.to_string()))?;
                        if a.key.as_ref() == b"id" {
                            let v = a
                                .unescape_value()
                                .map_err(|e| BarcodeError::Svg(e.to_string()))?;
                            self.ids.get_mut().insert(v.into_owned());
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(BarcodeError::Svg(format!(
                        "error at position {}: {e}",
                        reader.buffer_position()
                    )))
                }
            }
        }
        Ok(())
    }

    /// Добавить фрагмент; все его `id` становятся занятыми.
    pub fn append(&mut self, element: Element) {
        let ids = self.ids.get_mut();
        for id in element.ids() {
            ids.insert(id.to_owned());
        }
        log::debug!("appended <{}> ({} ids in document)", element.name, ids.len());
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.borrow().clone()
    }

    /// Итоговый SVG-документ.
    pub fn to_svg_string(&self) -> Result<String, BarcodeError> {
        match &self.source {
            Some(src) => {
                let at = src
                    .rfind("</svg>")
                    .ok_or_else(|| BarcodeError::Svg("no closing </svg> tag".into()))?;
                let mut out = String::with_capacity(src.len() + self.elements.len() * 1024);
                out.push_str(&src[..at]);
                for e in &self.elements {
                    out.push_str(&e.to_xml_string()?);
                    out.push('\n');
                }
                out.push_str(&src[at..]);
                Ok(out)
            }
            None => {
                let mut root = Element::new("svg")
                    .with_attr("xmlns", SVG_NS)
                    .with_attr("version", "1.1");
                root.children.clone_from(&self.elements);
                let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);
                root.write_to(&mut w)?;
                String::from_utf8(w.into_inner()).map_err(|e| BarcodeError::Svg(e.to_string()))
            }
        }
    }
}

impl Host for SvgDocument {
    fn contains_id(&self, id: &str) -> bool {
        self.ids.borrow().contains(id)
    }

    fn claim_id(&self, id: &str) {
        self.ids.borrow_mut().insert(id.to_owned());
    }

    fn report(&self, message: &str) {
        log::error!("{message}");
        self.diagnostics.borrow_mut().push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_collects_ids() {
        let doc = SvgDocument::from_svg(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="barcode"><rect id="r1"/></g></svg>"#,
        )
        .unwrap();
        assert!(doc.contains_id("barcode"));
        assert!(doc.contains_id("r1"));
        assert!(!doc.contains_id("barcode0"));
    }

    #[test]
    fn broken_svg_is_an_error() {
        assert!(matches!(
            SvgDocument::from_svg("<svg><g></svg>"),
            Err(BarcodeError::Svg(_))
        ));
    }

    #[test]
    fn fragments_go_before_closing_tag() {
        let mut doc = SvgDocument::from_svg("<svg>\n</svg>\n").unwrap();
        doc.append(Element::new("g").with_attr("id", "barcode"));
        assert!(doc.contains_id("barcode"));
        assert_eq!(doc.to_svg_string().unwrap(), "<svg>\n<g id=\"barcode\"/>\n</svg>\n");
    }

    #[test]
    fn fresh_document_wraps_fragments() {
        let mut doc = SvgDocument::new();
        doc.append(Element::new("g").with_attr("id", "barcode"));
        let s = doc.to_svg_string().unwrap();
        assert!(s.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(s.contains("<g id=\"barcode\"/>"));
    }

    #[test]
    fn claimed_ids_are_taken() {
        let doc = SvgDocument::new();
        assert!(!doc.contains_id("barcode"));
        doc.claim_id("barcode");
        assert!(doc.contains_id("barcode"));
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn report_keeps_diagnostics() {
        let doc = SvgDocument::new();
        doc.report("first");
        doc.report("second");
        assert_eq!(doc.diagnostics(), vec!["first", "second"]);
    }
}
