//! QR code → SVG emitter.

use cardqr_core::config::QrConfig;
use cardqr_core::constants::DEFAULT_MODULE_SIZE;
use cardqr_core::types::ErrorCorrection;
use qrcode::{EcLevel, QrCode};

use super::{BarcodeEmitter, SvgImage};
use crate::error::ServiceResult;

#[cfg(not(feature = "svg"))]
const SVG_UNAVAILABLE_HINT: &str =
    "SVG support was not compiled in; rebuild cardqr-service with the `svg` feature";

#[cfg(feature = "svg")]
const DARK_COLOR: &str = "#000000";
#[cfg(feature = "svg")]
const LIGHT_COLOR: &str = "#ffffff";

/// Renders QR codes as SVG markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgEmitter {
    module_size: u32,
    quiet_zone: bool,
}

impl SvgEmitter {
    #[must_use]
    pub const fn new(module_size: u32, quiet_zone: bool) -> Self {
        Self {
            module_size,
            quiet_zone,
        }
    }

    #[must_use]
    pub const fn from_config(qr: &QrConfig) -> Self {
        Self::new(qr.module_size, qr.quiet_zone)
    }

    /// Whether the SVG backend is compiled in.
    #[must_use]
    pub const fn is_available() -> bool {
        cfg!(feature = "svg")
    }
}

impl Default for SvgEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_SIZE, true)
    }
}

impl BarcodeEmitter for SvgEmitter {
    fn render(&self, payload: &str, level: ErrorCorrection) -> ServiceResult<SvgImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level(level))?;

        tracing::debug!(
            version = ?code.version(),
            width = code.width(),
            level = %level,
            "Encoded QR symbol"
        );

        self.render_svg(&code).map(SvgImage::new)
    }
}

impl SvgEmitter {
    #[cfg(feature = "svg")]
    #[expect(clippy::unnecessary_wraps)]
    fn render_svg(&self, code: &QrCode) -> ServiceResult<String> {
        use qrcode::render::svg;

        Ok(code
            .render::<svg::Color<'_>>()
            .module_dimensions(self.module_size, self.module_size)
            .quiet_zone(self.quiet_zone)
            .dark_color(svg::Color(DARK_COLOR))
            .light_color(svg::Color(LIGHT_COLOR))
            .build())
    }

    #[cfg(not(feature = "svg"))]
    #[expect(clippy::unused_self)]
    fn render_svg(&self, _code: &QrCode) -> ServiceResult<String> {
        Err(crate::error::ServiceError::RenderingUnavailable(
            SVG_UNAVAILABLE_HINT,
        ))
    }
}

const fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[cfg(feature = "svg")]
    #[test_log::test]
    fn renders_svg_document() {
        let image = SvgEmitter::default()
            .render("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Ada\r\nEND:VCARD\r\n", ErrorCorrection::Quartile)
            .expect("small payload should render");

        assert!(image.as_str().contains("<svg"));
        assert!(image.as_str().contains(DARK_COLOR));
        assert!(SvgEmitter::is_available());
    }

    #[cfg(feature = "svg")]
    #[test]
    fn module_size_scales_output() {
        let payload = "FN:Ada";
        let small = SvgEmitter::new(2, false)
            .render(payload, ErrorCorrection::Low)
            .expect("renders");
        let large = SvgEmitter::new(20, false)
            .render(payload, ErrorCorrection::Low)
            .expect("renders");

        // Version 1 symbol: 21 modules per side.
        assert!(small.as_str().contains("width=\"42\""));
        assert!(large.as_str().contains("width=\"420\""));
    }

    #[cfg(not(feature = "svg"))]
    #[test]
    fn missing_backend_is_reported() {
        let result = SvgEmitter::default().render("FN:Ada", ErrorCorrection::Quartile);

        assert!(!SvgEmitter::is_available());
        assert!(matches!(result, Err(ServiceError::RenderingUnavailable(_))));
    }

    #[test]
    fn oversized_payload_fails_to_encode() {
        let payload = "x".repeat(4000);
        let result = SvgEmitter::default().render(&payload, ErrorCorrection::High);

        assert!(matches!(result, Err(ServiceError::EncodeError(_))));
    }

    #[test]
    fn error_correction_mapping() {
        assert_eq!(ec_level(ErrorCorrection::Low), EcLevel::L);
        assert_eq!(ec_level(ErrorCorrection::Quartile), EcLevel::Q);
        assert_eq!(ec_level(ErrorCorrection::High), EcLevel::H);
    }
}
