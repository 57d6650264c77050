use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::canvas::{BoundingBox, Canvas, Color, Ellipse, RoundedRect};
use crate::error::{IconError, Result};

/// Side length of the square app icon.
pub const ICON_SIZE: u32 = 512;

/// Gap between the background circle and each canvas edge.
const MARGIN: i32 = 20;

const BAR_WIDTH: i32 = 60;
const BAR_SPACING: i32 = 40;
const BAR_RADIUS: f32 = 10.0;
/// Bars stand on a common baseline this far below the canvas centre.
const BASELINE_OFFSET: i32 = 100;

/// Left, middle and right bar heights.
const BAR_HEIGHTS: [i32; 3] = [150, 250, 180];

/// Indigo-600.
const BACKGROUND: Color = Color::rgb(0x4F, 0x46, 0xE5);
const BAR_COLOR: Color = Color::WHITE;

/// Where the app icon is written relative to the working directory.
pub fn default_app_icon_path() -> PathBuf {
    Path::new("electron").join("assets").join("icon.png")
}

/// Bounding boxes of the three usage bars, left to right.
fn bar_boxes() -> [BoundingBox; 3] {
    let center_x = ICON_SIZE as i32 / 2;
    let baseline = ICON_SIZE as i32 / 2 + BASELINE_OFFSET;
    let lefts = [
        center_x - BAR_WIDTH - BAR_SPACING - BAR_WIDTH / 2,
        center_x - BAR_WIDTH / 2,
        center_x + BAR_SPACING + BAR_WIDTH / 2,
    ];

    let mut boxes = [BoundingBox::new(0, 0, 0, 0); 3];
    for (i, (&left, &height)) in lefts.iter().zip(BAR_HEIGHTS.iter()).enumerate() {
        boxes[i] = BoundingBox::new(left, baseline - height, left + BAR_WIDTH, baseline);
    }
    boxes
}

/// Render the app icon: an indigo disc with three white usage bars.
pub fn render_app_icon() -> Result<Canvas> {
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE)?;

    let far = ICON_SIZE as i32 - MARGIN;
    canvas.fill(
        &Ellipse::new(BoundingBox::new(MARGIN, MARGIN, far, far)),
        BACKGROUND,
    );

    for bar in bar_boxes() {
        canvas.fill(&RoundedRect::new(bar, BAR_RADIUS), BAR_COLOR);
    }

    Ok(canvas)
}

/// Render the app icon and write it to `path`, creating the parent directory.
///
/// An existing file at `path` is overwritten.
pub fn write_app_icon(path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| IconError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
        debug!("Ensured directory {}", parent.display());
    }

    let canvas = render_app_icon()?;
    canvas.save_png(path)?;
    info!("Wrote {}x{} app icon to {}", canvas.width(), canvas.height(), path.display());

    Ok(path.to_path_buf())
}
