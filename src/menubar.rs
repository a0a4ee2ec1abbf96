use crate::canvas::Canvas;
use crate::types::Style;

/// Draw a menu item string, bolding any text inside `[...]` brackets.
/// Text outside brackets is drawn dim. Returns the column after the item.
pub fn menu_item(canvas: &mut Canvas, x: u16, y: u16, item: &str, z_order: i32) -> u16 {
    let mut col = x;
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(open) = rest.find('[') {
            if open > 0 {
                col = canvas.text(col, y, &rest[..open], Style::default().dim(), z_order);
            }
            rest = &rest[open..];
            if let Some(close) = rest.find(']') {
                col = canvas.text(col, y, &rest[..=close], Style::default().bold(), z_order);
                rest = &rest[close + 1..];
            } else {
                col = canvas.text(col, y, rest, Style::default(), z_order);
                break;
            }
        } else {
            col = canvas.text(col, y, rest, Style::default().dim(), z_order);
            break;
        }
    }
    col
}

/// Draw `items` left to right on row `y`, two spaces apart.
pub fn menu_bar(canvas: &mut Canvas, y: u16, items: &[&str]) {
    let mut col = 1;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            col += 2;
        }
        col = menu_item(canvas, col, y, item, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_are_bold_and_the_rest_dim() {
        let mut canvas = Canvas::new(20, 1);
        let end = menu_item(&mut canvas, 0, 0, "[q] quit", 0);
        assert_eq!(end, 8);
        let grid = canvas.rasterize();
        assert!(grid[0][0].style.bold);
        assert!(grid[0][2].style.bold);
        assert!(grid[0][4].style.dim);
    }
}
