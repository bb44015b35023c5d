use crate::core::ChartLayout;
use crate::core::layout::VALUE_LABEL_BASELINE_SHIFT;
use crate::core::format::format_value;
use crate::interaction::TooltipState;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, RenderStyle,
    TextHAlign, TextPrimitive,
};

/// Composes the drawable scene for `layout` and an optional open tooltip.
///
/// Layering: gridlines, series paths, point markers with value labels, date
/// labels, then the tooltip panel on top.
#[must_use]
pub fn build_render_frame(
    layout: &ChartLayout,
    tooltip: Option<&TooltipState>,
    style: &RenderStyle,
) -> RenderFrame {
    let dims = layout.dimensions;
    let mut frame = RenderFrame::new(dims.width, dims.height);

    for gridline in &layout.gridlines {
        frame.lines.push(LinePrimitive::new(
            gridline.x1,
            gridline.y,
            gridline.x2,
            gridline.y,
            style.gridline_width,
            style.gridline_color,
        ));
    }

    for path in &layout.paths {
        frame.polylines.push(PolylinePrimitive::new(
            path.points.clone(),
            style.series_line_width,
            style.series_color(path.field),
        ));
    }

    for plotted in &layout.points {
        for value in &plotted.values {
            frame.circles.push(CirclePrimitive {
                cx: plotted.x,
                cy: value.y,
                radius: dims.point_radius,
                fill: style.point_fill_color,
                stroke: style.series_color(value.field),
                stroke_width: style.point_stroke_width,
            });
            frame.texts.push(
                TextPrimitive::new(
                    format_value(value.value),
                    plotted.x,
                    value.y + VALUE_LABEL_BASELINE_SHIFT,
                    style.value_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }

        let label = &plotted.date_label;
        frame.texts.push(
            TextPrimitive::new(
                label.text.clone(),
                label.x,
                label.y,
                style.date_font_size_px,
                style.text_color,
                TextHAlign::Left,
            )
            .rotated(label.rotation_deg),
        );
    }

    if let Some(state) = tooltip {
        frame.rects.push(RectPrimitive {
            x: state.x,
            y: state.y,
            width: state.size.width,
            height: state.size.height,
            corner_radius: style.tooltip_corner_radius,
            fill: style.tooltip_background_color,
        });

        let content = state.content();
        let line_height = style.tooltip_font_size_px * 1.4;
        let text_x = state.x + style.tooltip_padding_px;
        let mut text_y = state.y + style.tooltip_padding_px + style.tooltip_font_size_px;
        frame.texts.push(
            TextPrimitive::new(
                content.title,
                text_x,
                text_y,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            )
            .bold(),
        );
        for line in content.lines {
            text_y += line_height;
            frame.texts.push(TextPrimitive::new(
                line,
                text_x,
                text_y,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            ));
        }
    }

    frame
}
