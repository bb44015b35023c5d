use crate::core::SeriesField;
use crate::render::Color;

/// Colours and stroke sizes used when building a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub gridline_color: Color,
    pub gridline_width: f64,
    pub total_color: Color,
    pub additions_color: Color,
    pub deletions_color: Color,
    pub series_line_width: f64,
    pub point_fill_color: Color,
    pub point_stroke_width: f64,
    pub text_color: Color,
    pub value_font_size_px: f64,
    pub date_font_size_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_corner_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            gridline_color: Color::from_hex(0xe5e7eb),
            gridline_width: 1.0,
            total_color: Color::from_hex(0x9ca3af),
            additions_color: Color::from_hex(0x4ade80),
            deletions_color: Color::from_hex(0xf87171),
            series_line_width: 2.0,
            point_fill_color: Color::rgb(1.0, 1.0, 1.0),
            point_stroke_width: 2.0,
            text_color: Color::from_hex(0x1f2937),
            value_font_size_px: 8.0,
            date_font_size_px: 10.0,
            tooltip_background_color: Color::from_hex(0x1f2937),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 14.0,
            tooltip_padding_px: 12.0,
            tooltip_corner_radius: 6.0,
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn series_color(&self, field: SeriesField) -> Color {
        match field {
            SeriesField::Total => self.total_color,
            SeriesField::Additions => self.additions_color,
            SeriesField::Deletions => self.deletions_color,
        }
    }
}
