//! TUI widgets for showroom.

use ratatui::layout::Rect;

mod data_table;
mod footer;
mod header;
mod help;
mod overview;
mod playground;
mod quit_confirm;

pub use data_table::render_data_table;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use overview::render_overview;
pub use playground::render_playground;
pub use quit_confirm::render_quit_confirm;

/// `percent`% of `len`, computed wide so large terminals cannot overflow.
fn percent_of(len: u16, percent: u16) -> u16 {
    (u32::from(len) * u32::from(percent) / 100).min(u32::from(u16::MAX)) as u16
}

/// A `width` x `height` rect centered in `area`, cut down to fit.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_wide_terminal_does_not_overflow() {
        assert_eq!(percent_of(2000, 60), 1200);
        assert_eq!(percent_of(u16::MAX, 100), u16::MAX);
        assert_eq!(percent_of(80, 50), 40);
    }

    #[test]
    fn popup_is_centered_and_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 30, 5);
        let popup = centered_popup(small, 40, 7);
        assert_eq!(popup, Rect::new(0, 0, 30, 5));

        let wide = Rect::new(0, 0, 1500, 60);
        let popup = centered_popup(wide, percent_of(wide.width, 60).clamp(40, 80), 30);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.x, 710);
    }
}
