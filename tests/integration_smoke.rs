// tests/integration_smoke.rs
//
// Интеграционные «дымовые» тесты верхнего уровня: имя → кодировщик →
// фрагмент → документ. Конкретные сценарии по каждой символике.

use ultrabar::core::{BAR, GUARD, SPACE};
use ultrabar::one_d::ean::{self, Parity};
use ultrabar::prelude::*;
use ultrabar::render_into;
use ultrabar::runs::push_modules;

fn rects(g: &Element) -> Vec<&Element> {
    g.children_named("rect").collect()
}

fn num_attr(e: &Element, key: &str) -> f64 {
    e.attr(key).unwrap().parse().unwrap()
}

#[test]
fn code39_ab_is_framed_by_stars() {
    let doc = SvgDocument::new();
    let bc = get_barcode("Code39", Params::new("AB").with_host(&doc)).unwrap();
    let e = bc.encode().unwrap();
    assert_eq!(e.label, "AB");

    // 010010100 с удвоенными широкими
    let mut star = Vec::new();
    for (i, w) in "010010100".bytes().enumerate() {
        let kind = if i % 2 == 0 { GUARD } else { SPACE };
        let n = if w == b'1' { 2 } else { 1 };
        star.extend(std::iter::repeat(kind).take(n));
    }
    assert_eq!(&e.bars[..star.len()], star.as_slice());
    assert_eq!(&e.bars[e.bars.len() - star.len()..], star.as_slice());

    let g = bc.generate().unwrap().unwrap();
    assert_eq!(g.attr("id"), Some("barcode"));
    assert_eq!(g.attr("style"), Some("fill: black;"));
    let text = g.children_named("text").next().unwrap();
    assert_eq!(text.text.as_deref(), Some("AB"));
    assert_eq!(text.attr("id"), Some("barcode_bottomtext"));
    assert_eq!(
        text.attr("style"),
        Some("font-size:9px;text-align:center;text-anchor:middle;")
    );
}

#[test]
fn ean13_scenario_guards_overhang() {
    let doc = SvgDocument::new();
    let p = Params::new("123456789012").with_origin(5, 7).with_host(&doc);
    let bc = get_barcode("EAN-13", p).unwrap();
    let g = bc.generate().unwrap().unwrap();

    let r = rects(&g);
    // первая пара охранных баров длиннее обычных на 5
    assert_eq!(r[0].attr("x"), Some("5"));
    assert_eq!(r[0].attr("y"), Some("7"));
    assert_eq!(r[0].attr("height"), Some("35"));
    assert_eq!(r[1].attr("x"), Some("7"));
    assert_eq!(r[2].attr("height"), Some("30"));

    let text = g.children_named("text").next().unwrap();
    assert_eq!(text.text.as_deref(), Some("1    234567    890128"));
    assert_eq!(text.attr("y"), Some("47"));
    assert_eq!(text.attr("x"), Some("52.5"));
}

#[test]
fn ean8_scenario() {
    let bc = get_barcode("ean8", Params::new("1234567")).unwrap();
    let e = bc.encode().unwrap();
    assert_eq!(e.label, "1234   5670");

    let mut expected = Vec::new();
    ean::push_guard(&mut expected, "101");
    for d in [1, 2, 3, 4] {
        ean::push_left(&mut expected, d, Parity::L, BAR);
    }
    ean::push_guard(&mut expected, "01010");
    for d in [5, 6, 7, 0] {
        ean::push_right(&mut expected, d, BAR);
    }
    ean::push_guard(&mut expected, "101");
    assert_eq!(e.bars, expected);
}

#[test]
fn ean5_sits_to_the_right_with_label_on_top() {
    let doc = SvgDocument::new();
    let bc = get_barcode("Ean5", Params::new("54321").with_origin(10, 0).with_host(&doc)).unwrap();
    assert_eq!(bc.encode().unwrap().label, "5 4 3 2 1");

    let g = bc.generate().unwrap().unwrap();
    let r = rects(&g);
    // старт 01011: первый бар на модуле 1 после сдвига 110
    assert_eq!(num_attr(r[0], "x"), 121.0);
    assert_eq!(num_attr(r[0], "y"), 10.0);

    let text = g.children_named("text").next().unwrap();
    assert_eq!(text.attr("id"), Some("barcode_toptext"));
    assert!(num_attr(text, "y") < num_attr(r[0], "y"));
}

#[test]
fn upce_from_upca() {
    let bc = get_barcode("UPC-E", Params::new("01234500006")).unwrap();
    let e = bc.encode().unwrap();
    assert_eq!(e.label, "0  123456  5");
    let mut tail = Vec::new();
    push_modules(&mut tail, "010101", GUARD);
    assert!(e.bars.ends_with(&tail));
}

#[test]
fn code25i_pads_odd_input() {
    let bc = get_barcode("code25i", Params::new("3242322")).unwrap();
    let e = bc.encode().unwrap();
    assert_eq!(e.label, "03242322");
    let mut start = Vec::new();
    push_modules(&mut start, "1010", GUARD);
    assert!(e.bars.starts_with(&start));
}

#[test]
fn unknown_symbology_foo() {
    let doc = SvgDocument::new();
    let err = get_barcode("foo", Params::new("1").with_host(&doc)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid type of barcode: foo");
    assert_eq!(doc.diagnostics(), vec!["Invalid type of barcode: foo".to_owned()]);

    assert_eq!(
        get_barcode("  ", Params::new("1")).unwrap_err(),
        BarcodeError::MissingSymbology
    );
}

#[test]
fn ean13_non_digits_yield_nothing() {
    let doc = SvgDocument::new();
    let bc = get_barcode("Ean13", Params::new("12A456789012").with_host(&doc)).unwrap();
    assert_eq!(bc.generate(), Ok(None));
    let diag = doc.diagnostics();
    assert_eq!(diag.len(), 1);
    assert!(diag[0].contains("Ean13"));
    assert!(diag[0].contains("12A456789012"));
}

#[test]
fn recoverable_errors_are_reported_once_each() {
    let doc = SvgDocument::new();
    let cases = [
        ("Ean8", "12"),
        ("Upca", "036000291453"),
        ("Upce", "12345678901"),
        ("Code25i", ""),
    ];
    for (name, text) in cases {
        let bc = get_barcode(name, Params::new(text).with_host(&doc)).unwrap();
        assert_eq!(bc.generate(), Ok(None), "{name} {text}");
    }
    assert_eq!(doc.diagnostics().len(), 4);
}

#[test]
fn missing_host_is_fatal() {
    let bc = get_barcode("Code128", Params::new("abc")).unwrap();
    assert_eq!(bc.generate(), Err(BarcodeError::HostMissing));
}

#[test]
fn ids_are_unique_across_generations() {
    let mut doc = SvgDocument::from_svg(r#"<svg><g id="barcode"/></svg>"#).unwrap();
    let mut seen = Vec::new();
    for text in ["A", "B", "C"] {
        let id = render_into(&mut doc, "Code39", Params::new(text)).unwrap().unwrap();
        seen.push(id);
    }
    assert_eq!(seen, vec!["barcode0", "barcode1", "barcode2"]);

    let svg = doc.to_svg_string().unwrap();
    assert!(svg.contains(r#"<g id="barcode0""#));
    assert!(svg.contains(r#"<rect id="barcode2_bar1""#));
    assert!(svg.ends_with("</svg>"));
}

/// Геометрия прямоугольников без id.
fn geometry(g: &Element) -> Vec<[Option<&str>; 4]> {
    rects(g)
        .into_iter()
        .map(|r| [r.attr("x"), r.attr("y"), r.attr("width"), r.attr("height")])
        .collect()
}

#[test]
fn regeneration_repeats_bars_under_a_new_id() {
    let doc = SvgDocument::new();
    let bc = get_barcode("Rm4scc", Params::new("LU17 8XE").with_host(&doc)).unwrap();
    let a = bc.generate().unwrap().unwrap();
    let b = bc.generate().unwrap().unwrap();
    // первый id уже занят, бары те же
    assert_eq!((a.attr("id"), b.attr("id")), (Some("barcode"), Some("barcode0")));
    assert_eq!(geometry(&a), geometry(&b));
    let (ta, tb) = (
        a.children_named("text").next().unwrap(),
        b.children_named("text").next().unwrap(),
    );
    assert_eq!(ta.text, tb.text);
    assert_eq!((ta.attr("x"), ta.attr("y")), (tb.attr("x"), tb.attr("y")));
    assert_eq!(tb.attr("id"), Some("barcode0_bottomtext"));
}

#[test]
fn two_fragments_before_append_get_distinct_ids() {
    let mut doc = SvgDocument::new();
    let first = get_barcode("Code39", Params::new("A").with_host(&doc))
        .unwrap()
        .generate()
        .unwrap()
        .unwrap();
    let second = get_barcode("Code39", Params::new("B").with_host(&doc))
        .unwrap()
        .generate()
        .unwrap()
        .unwrap();
    assert_eq!(first.attr("id"), Some("barcode"));
    assert_eq!(second.attr("id"), Some("barcode0"));

    doc.append(first);
    doc.append(second);
    assert_eq!(doc.elements().len(), 2);
    let svg = doc.to_svg_string().unwrap();
    assert_eq!(svg.matches(r#"id="barcode""#).count(), 1);
    assert_eq!(svg.matches(r#"id="barcode_bar1""#).count(), 1);
    assert_eq!(svg.matches(r#"id="barcode0_bar1""#).count(), 1);
}

#[test]
fn scale_widens_bars_only() {
    let doc = SvgDocument::new();
    let one = get_barcode("Code93", Params::new("TEST93").with_host(&doc)).unwrap();
    let two = get_barcode("Code93", Params::new("TEST93").with_scale(2.0).with_host(&doc)).unwrap();
    assert_eq!(two.width().unwrap(), 2.0 * one.width().unwrap());

    let g1 = one.generate().unwrap().unwrap();
    let g2 = two.generate().unwrap().unwrap();
    let (r1, r2) = (rects(&g1), rects(&g2));
    assert_eq!(r1.len(), r2.len());
    assert_eq!(r1[3].attr("height"), r2[3].attr("height"));
    assert_eq!(num_attr(r2[3], "width"), 2.0 * num_attr(r1[3], "width"));
    let t1 = g1.children_named("text").next().unwrap();
    let t2 = g2.children_named("text").next().unwrap();
    assert_eq!(t1.attr("y"), t2.attr("y"));
}

#[test]
fn rm4scc_fixed_geometry() {
    let doc = SvgDocument::new();
    let p = Params::new("lu178xe").with_height(100).with_host(&doc);
    let bc = get_barcode("RM4SCC", p).unwrap();
    let g = bc.generate().unwrap().unwrap();
    let r = rects(&g);
    // старт — верхний бар, стоп — полный; ширина 2, высота не от параметра
    assert_eq!(r[0].attr("width"), Some("2"));
    assert_eq!(r[0].attr("height"), Some("11"));
    assert_eq!(r[r.len() - 1].attr("height"), Some("17"));
    let label = g.children_named("text").next().unwrap().text.clone().unwrap();
    assert!(label.starts_with("LU178XE"));
    assert_eq!(label.len(), 8);
}
