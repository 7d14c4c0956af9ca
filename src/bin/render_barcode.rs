use std::{env, fs};
use ultrabar::{render_into, Params, SvgDocument, Symbology};

fn main() {
    let mut kind: Option<String> = None;
    let mut params = Params::default();
    let mut into: Option<String> = None;
    let mut out: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        let key = match a.as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--type" | "--text" | "--x" | "--y" | "--height" | "--scale" | "--into" | "--out" => {
                a.trim_start_matches("--").to_owned()
            }
            other => {
                eprintln!("Неизвестный аргумент: {other}");
                print_help();
                std::process::exit(2);
            }
        };
        let Some(value) = args.next() else {
            eprintln!("Нет значения для --{key}");
            std::process::exit(2);
        };
        match key.as_str() {
            "type" => kind = Some(value),
            "into" => into = Some(value),
            "out" => out = Some(value),
            _ => {
                if let Err(e) = params.set(&key, &value) {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            }
        }
    }

    let Some(kind) = kind else {
        print_help();
        std::process::exit(2);
    };

    let mut doc = match into {
        Some(path) => {
            let src = match fs::read_to_string(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Не удалось прочитать {path}: {e}");
                    std::process::exit(1);
                }
            };
            match SvgDocument::from_svg(&src) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => SvgDocument::new(),
    };

    match render_into(&mut doc, &kind, params) {
        Ok(Some(id)) => eprintln!("Добавлен фрагмент {id}"),
        Ok(None) => {
            for d in doc.diagnostics() {
                eprintln!("{d}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }

    let svg = match doc.to_svg_string() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    match out {
        Some(path) => {
            if let Err(e) = fs::write(&path, svg) {
                eprintln!("Не удалось записать {path}: {e}");
                std::process::exit(1);
            }
        }
        None => println!("{svg}"),
    }
}

fn print_help() {
    let names: Vec<&str> = Symbology::ALL.iter().map(|s| s.name()).collect();
    eprintln!(
        r#"Использование:
  cargo run --bin render_barcode -- --type <ИМЯ> --text <ТЕКСТ>
      [--x N] [--y N] [--height N] [--scale K] [--into in.svg] [--out out.svg]

Символики: {}
Без --into создаётся новый документ, без --out SVG печатается в stdout.
Примеры:
  cargo run --bin render_barcode -- --type ean13 --text 123456789012
  cargo run --bin render_barcode -- --type code128 --text "Hello 42" --scale 2 --out hello.svg
"#,
        names.join(", ")
    );
}
