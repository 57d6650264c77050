use crate::canvas::{BoundingBox, Canvas, Color, Ellipse, Ring};
use crate::error::Result;

/// 22x22 is the standard size for most Linux trays.
pub const TRAY_ICON_SIZE: u32 = 22;

/// Box the status dot is inscribed in.
const DOT: BoundingBox = BoundingBox::new(2, 2, 19, 19);
const OUTLINE_WIDTH: f32 = 2.0;
const OUTLINE_COLOR: Color = Color::WHITE;

/// Render a status dot: a disc in `fill` with an opaque white outline.
pub fn render_tray_icon(fill: Color) -> Result<Canvas> {
    let mut canvas = Canvas::new(TRAY_ICON_SIZE, TRAY_ICON_SIZE)?;
    canvas.fill(&Ellipse::new(DOT), fill);
    canvas.fill(&Ring::new(DOT, OUTLINE_WIDTH), OUTLINE_COLOR);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_layers() {
        let green = Color::rgb(0x28, 0xA7, 0x45);
        let canvas = render_tray_icon(green).unwrap();

        assert_eq!(canvas.pixel(11, 11), green);
        assert_eq!(canvas.pixel(2, 10), OUTLINE_COLOR);
        assert_eq!(canvas.pixel(19, 11), OUTLINE_COLOR);
        assert_eq!(canvas.pixel(0, 0), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(21, 21), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(1, 11), Color::TRANSPARENT);
    }
}
