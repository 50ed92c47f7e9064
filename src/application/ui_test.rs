use ratatui::prelude::Rect;

use super::popup_rect;

#[test]
fn it_centers_popups() {
    let rect = popup_rect(60, 50, Rect::new(0, 0, 100, 40));

    assert_eq!(rect, Rect::new(20, 10, 60, 20));
}
