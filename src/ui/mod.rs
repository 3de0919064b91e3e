// src/ui/mod.rs
use eframe::egui::Color32;

use crate::state::RequestPhase;

pub mod results;
pub mod upload;

pub use upload::UploadAction;

// Indicator palette, same for every theme
pub const STATUS_OK: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

pub fn indicator_color(phase: RequestPhase) -> Color32 {
    match phase {
        RequestPhase::Success => STATUS_OK,
        RequestPhase::Error => STATUS_ERROR,
        _ => STATUS_BUSY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_color_follows_phase() {
        assert_eq!(indicator_color(RequestPhase::Success), STATUS_OK);
        assert_eq!(indicator_color(RequestPhase::Error), STATUS_ERROR);
        assert_eq!(indicator_color(RequestPhase::Processing), STATUS_BUSY);
        assert_eq!(indicator_color(RequestPhase::Idle), STATUS_BUSY);
    }
}
