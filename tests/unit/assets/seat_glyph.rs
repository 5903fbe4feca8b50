use super::*;

#[test]
fn outline_paint_has_no_fill() {
    let svg = seat_glyph_svg(GlyphPaint::outline(Color::rgb(255, 255, 255)));
    assert!(svg.contains(r##"fill="none""##));
    assert!(svg.contains(r##"stroke="#FFFFFF""##));
}

#[test]
fn solid_paint_has_no_stroke() {
    let svg = seat_glyph_svg(GlyphPaint::solid(Color::rgb(0x00, 0xC9, 0xE4)));
    assert!(svg.contains(r##"fill="#00C9E4""##));
    assert!(svg.contains(r##"stroke="none""##));
}

#[test]
fn markup_parses_as_svg() {
    let svg = seat_glyph_svg(GlyphPaint::solid(Color::rgb(1, 2, 3)));
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), GLYPH_VIEWBOX as f32);
    assert_eq!(tree.size().height(), GLYPH_VIEWBOX as f32);
}
