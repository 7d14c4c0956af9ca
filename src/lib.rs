#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

// Публичные модули
pub mod api;      // высокий уровень: реестр по имени, Params, generate()
pub mod core;     // общие типы и ошибки
pub mod prelude;  // удобные re-export'ы

pub mod one_d;    // линейные символики (code39/93/128, 25i, EAN/UPC, RM4SCC)
pub mod runs;     // run-length bar string'ов
pub mod svg;      // дерево элементов, хост-документ, сборка фрагмента

pub use crate::api::{get_barcode, Barcode, Params};
pub use crate::core::{BarcodeError, Encoded, Run};
pub use crate::one_d::Symbology;
pub use crate::svg::{Element, Host, SvgDocument};

/// One-shot: закодировать и сразу добавить фрагмент в документ.
///
/// `Ok(None)` — текст не прошёл проверку (причина в диагностике документа).
pub fn render_into(
    doc: &mut SvgDocument,
    name: &str,
    params: Params<'_>,
) -> Result<Option<String>, BarcodeError> {
    let fragment = {
        let bc = get_barcode(name, params.with_host(&*doc))?;
        bc.generate()?
    };
    Ok(fragment.map(|g| {
        let id = g.attr("id").unwrap_or(api::ID_BASE).to_owned();
        doc.append(g);
        id
    }))
}
