pub mod icon;

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::canvas::Color;
use crate::error::Result;

use icon::render_tray_icon;

/// Connection status shown in the tray, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayStatus {
    Green,
    Yellow,
    Red,
}

impl TrayStatus {
    pub const ALL: [TrayStatus; 3] = [TrayStatus::Green, TrayStatus::Yellow, TrayStatus::Red];

    /// Variable name the payload is assigned to.
    pub fn label(self) -> &'static str {
        match self {
            TrayStatus::Green => "GREEN",
            TrayStatus::Yellow => "YELLOW",
            TrayStatus::Red => "RED",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            TrayStatus::Green => "#28a745",
            TrayStatus::Yellow => "#ffc107",
            TrayStatus::Red => "#dc3545",
        }
    }

    pub fn color(self) -> Result<Color> {
        Color::from_hex(self.hex())
    }
}

/// Inline PNG payload: `data:image/png;base64,...`.
pub fn data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// One `LABEL=data:image/png;base64,...` line, without the newline.
pub fn tray_icon_line(status: TrayStatus) -> Result<String> {
    let png = render_tray_icon(status.color()?)?.encode_png()?;
    debug!(
        "Encoded {} tray icon {} ({} bytes)",
        status.label(),
        status.hex(),
        png.len()
    );
    Ok(format!("{}={}", status.label(), data_uri(&png)))
}

/// Write all status lines to `out`, one per line, green first.
pub fn write_tray_lines<W: Write>(out: &mut W) -> Result<()> {
    for status in TrayStatus::ALL {
        writeln!(out, "{}", tray_icon_line(status)?)?;
    }
    out.flush()?;
    Ok(())
}
