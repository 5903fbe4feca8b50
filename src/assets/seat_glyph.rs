use crate::assets::theme::Color;

/// Logical size of the glyph's view box. The glyph is square.
pub const GLYPH_VIEWBOX: f64 = 32.0;

const STROKE_WIDTH: f64 = 2.0;

/// Paint for one rendering of the seat glyph. `None` means no paint for that channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphPaint {
    /// Interior fill.
    pub fill: Option<Color>,
    /// Outline stroke.
    pub stroke: Option<Color>,
}

impl GlyphPaint {
    /// Outline only.
    pub fn outline(stroke: Color) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Fill only.
    pub fn solid(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }
}

fn paint_attr(c: Option<Color>) -> String {
    c.map_or_else(|| "none".to_owned(), Color::to_hex)
}

/// SVG markup for a seat seen from above, backrest on the left.
pub fn seat_glyph_svg(paint: GlyphPaint) -> String {
    let fill = paint_attr(paint.fill);
    let stroke = paint_attr(paint.stroke);
    let s = GLYPH_VIEWBOX;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
            r#"<g fill="{fill}" stroke="{stroke}" stroke-width="{sw}" stroke-linejoin="round">"#,
            r#"<rect x="3" y="4" width="6" height="24" rx="2"/>"#,
            r#"<rect x="11" y="7" width="17" height="18" rx="3"/>"#,
            r#"<rect x="11" y="2" width="15" height="4" rx="1.5"/>"#,
            r#"<rect x="11" y="26" width="15" height="4" rx="1.5"/>"#,
            r#"</g></svg>"#
        ),
        s = s,
        fill = fill,
        stroke = stroke,
        sw = STROKE_WIDTH,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/seat_glyph.rs"]
mod tests;
