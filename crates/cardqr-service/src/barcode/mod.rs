//! Barcode emission.
//!
//! The emitter turns finished vCard text into a scannable image. Symbol
//! encoding is delegated to the `qrcode` crate; SVG output is an optional
//! capability behind the `svg` feature.

mod svg;

use cardqr_core::types::ErrorCorrection;

use crate::error::ServiceResult;

pub use svg::SvgEmitter;

/// A rendered SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgImage(String);

impl SvgImage {
    #[must_use]
    pub fn new(markup: String) -> Self {
        Self(markup)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Renders an arbitrary text payload into a vector image.
pub trait BarcodeEmitter {
    /// ## Summary
    /// Encodes `payload` at error-correction `level` and renders it.
    ///
    /// ## Errors
    /// Returns `RenderingUnavailable` when the rendering backend is missing,
    /// or an encode error when the payload does not fit a symbol.
    fn render(&self, payload: &str, level: ErrorCorrection) -> ServiceResult<SvgImage>;
}
