use crate::arcade::draw::Viewport;
use crate::config::ArcadeConfig;

/// Width below which the section pane is hidden and the terminal takes the
/// whole body.
pub const MIN_SPLIT_WIDTH: u16 = 80;

pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub menu_y: u16,
    pub body_y: u16,
    pub body_height: u16,
    /// Zero when the section pane is hidden.
    pub section_width: u16,
    pub terminal_x: u16,
    pub terminal_width: u16,
    pub status_y: u16,
}

impl Layout {
    pub fn compute(width: u16, height: u16) -> Self {
        let menu_h: u16 = 1;
        let status_h: u16 = 1;
        let section_width = if width >= MIN_SPLIT_WIDTH {
            width * 2 / 5
        } else {
            0
        };
        Layout {
            width,
            height,
            menu_y: 0,
            body_y: menu_h,
            body_height: height.saturating_sub(menu_h + status_h),
            section_width,
            terminal_x: section_width,
            terminal_width: width.saturating_sub(section_width),
            status_y: height.saturating_sub(status_h),
        }
    }

    /// The arcade uses the whole body.
    pub fn arcade_viewport(&self, tuning: &ArcadeConfig) -> Viewport {
        Viewport {
            x: 0,
            y: self.body_y,
            cols: self.width,
            rows: self.body_height,
            cell_width: tuning.cell_width,
            cell_height: tuning.cell_height,
        }
    }
}
