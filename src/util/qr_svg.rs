//! QR code encoding to inline SVG markup.

#[cfg(test)]
#[path = "qr_svg_test.rs"]
mod qr_svg_test;

use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::QrError;

/// Smallest edge length of the rendered code, in CSS pixels.
pub const MIN_QR_SIZE: u32 = 200;

/// Encode `data` as an SVG document drawn in `foreground` on a transparent
/// background.
pub fn render_qr_svg(data: &str, foreground: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_QR_SIZE, MIN_QR_SIZE)
        .dark_color(svg::Color(foreground))
        .light_color(svg::Color("transparent"))
        .build())
}
