// src/api.rs
//
// Верхнеуровневый API: реестр по имени, параметры и генерация фрагмента.
// Кодирование чистое; хост нужен только для id и диагностики.

use std::fmt;

use crate::core::{BarcodeError, Encoded, Geometry, Run, Style};
use crate::one_d::Symbology;
use crate::runs::runs;
use crate::svg::{fragment, Element, Frame, Host};

/// Базовое имя контейнера; занятые имена получают суффикс 0, 1, …
pub const ID_BASE: &str = "barcode";

/// Параметры генерации.
#[derive(Clone)]
pub struct Params<'h> {
    pub text: String,
    pub host: Option<&'h dyn Host>,
    pub x: i32,
    pub y: i32,
    pub height: i32,
    /// Множитель ширины (высоты задаются абсолютно).
    pub scale: f64,
}

impl Default for Params<'_> {
    fn default() -> Self {
        Self {
            text: String::new(),
            host: None,
            x: 0,
            y: 0,
            height: 30,
            scale: 1.0,
        }
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("text", &self.text)
            .field("host", &self.host.is_some())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("height", &self.height)
            .field("scale", &self.scale)
            .finish()
    }
}

impl<'h> Params<'h> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: &'h dyn Host) -> Self {
        self.host = Some(host);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Текстовая форма: ключи `text`, `x`, `y`, `height`, `scale`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BarcodeError> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, BarcodeError>
        where
            T::Err: fmt::Display,
        {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| BarcodeError::InvalidParameter {
                    key: key.to_owned(),
                    reason: format!("{value:?}: {e}"),
                })
        }

        match key {
            "text" => self.text = value.to_owned(),
            "x" => self.x = parse(key, value)?,
            "y" => self.y = parse(key, value)?,
            "height" => self.height = parse(key, value)?,
            "scale" => self.scale = parse(key, value)?,
            _ => {
                return Err(BarcodeError::InvalidParameter {
                    key: key.to_owned(),
                    reason: "unknown parameter".into(),
                })
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), BarcodeError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(BarcodeError::InvalidParameter {
                key: "scale".into(),
                reason: format!("must be a positive number, got {}", self.scale),
            });
        }
        if self.height <= 0 {
            return Err(BarcodeError::InvalidParameter {
                key: "height".into(),
                reason: format!("must be positive, got {}", self.height),
            });
        }
        Ok(())
    }
}

/// Кодировщик: символика + параметры. Состояния между вызовами нет.
#[derive(Clone, Debug)]
pub struct Barcode<'h> {
    symbology: Symbology,
    params: Params<'h>,
}

/// Найти символику по имени и собрать кодировщик.
///
/// Ошибки имени уходят и в лог, и в диагностику хоста (если он задан).
pub fn get_barcode<'h>(name: &str, params: Params<'h>) -> Result<Barcode<'h>, BarcodeError> {
    let symbology = match name.parse::<Symbology>() {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            if let Some(host) = params.host {
                host.report(&e.to_string());
            }
            return Err(e);
        }
    };
    Barcode::new(symbology, params)
}

impl<'h> Barcode<'h> {
    pub fn new(symbology: Symbology, params: Params<'h>) -> Result<Self, BarcodeError> {
        params.validate()?;
        Ok(Self { symbology, params })
    }

    #[inline]
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    #[inline]
    pub fn params(&self) -> &Params<'h> {
        &self.params
    }

    /// Bar string и подпись без рендера.
    pub fn encode(&self) -> Result<Encoded, BarcodeError> {
        self.symbology.encode(&self.params.text)
    }

    pub fn runs(&self) -> Result<Vec<Run>, BarcodeError> {
        Ok(runs(&self.encode()?.bars))
    }

    /// Ширина баров в единицах документа.
    pub fn width(&self) -> Result<f64, BarcodeError> {
        let frame = self.frame();
        Ok(fragment::width(&self.runs()?, self.style_fn(), &frame))
    }

    fn frame(&self) -> Frame {
        Frame {
            x: f64::from(self.params.x),
            y: f64::from(self.params.y),
            height: f64::from(self.params.height),
            scale: self.params.scale,
            offset: self.symbology.origin_offset(),
            placement: self.symbology.label_placement(),
        }
    }

    fn style_fn(&self) -> impl Fn(u8, &Geometry) -> Style {
        let s = self.symbology;
        move |kind: u8, g: &Geometry| s.style(kind, g)
    }

    /// Сгенерировать фрагмент.
    ///
    /// `Ok(None)` — текст не прошёл проверку, причина уже в диагностике
    /// хоста. id контейнера резервируется в хосте сразу, сам фрагмент
    /// добавляет вызывающий.
    pub fn generate(&self) -> Result<Option<Element>, BarcodeError> {
        let host = self.params.host.ok_or(BarcodeError::HostMissing)?;

        let encoded = match self.encode() {
            Ok(e) => e,
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}");
                host.report(&e.to_string());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let runs = runs(&encoded.bars);
        let id = fragment::unique_id(host, ID_BASE);
        host.claim_id(&id);
        log::debug!(
            "{}: {} modules, {} runs, id {id}",
            self.symbology,
            encoded.bars.len(),
            runs.len()
        );

        let frame = self.frame();
        Ok(Some(fragment::render(
            &id,
            &runs,
            self.style_fn(),
            &frame,
            &encoded.label,
        )))
    }
}
