//! Frame geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::tables::scroll_offset;

pub const CARD_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title / tabs
            Constraint::Min(5),    // Screen content
            Constraint::Length(3), // Status and shortcuts
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsLayout {
    pub radar: Rect,
    pub list: Rect,
}

pub fn skills_layout(body: Rect) -> SkillsLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);

    SkillsLayout {
        radar: chunks[0],
        list: chunks[1],
    }
}

pub const fn card_columns(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 70 {
        2
    } else {
        1
    }
}

/// Visible gallery cards as `(card index, area)`, scrolled so `focused` is on screen.
#[allow(clippy::cast_possible_truncation)]
pub fn card_grid(body: Rect, count: usize, focused: usize) -> Vec<(usize, Rect)> {
    if count == 0 || body.width == 0 || body.height == 0 {
        return Vec::new();
    }

    let columns = card_columns(body.width);
    let total_rows = count.div_ceil(columns);
    let visible_rows = usize::from((body.height / CARD_HEIGHT).max(1));
    let first_row = scroll_offset(total_rows, visible_rows, focused / columns);
    let card_width = body.width / columns as u16;
    let card_height = CARD_HEIGHT.min(body.height);

    let first = first_row * columns;
    let last = count.min((first_row + visible_rows) * columns);

    (first..last)
        .map(|index| {
            let row = (index / columns - first_row) as u16;
            let column = (index % columns) as u16;
            let area = Rect {
                x: body.x + column * card_width,
                y: body.y + row * card_height,
                width: card_width,
                height: card_height,
            };
            (index, area)
        })
        .collect()
}

pub fn card_at(body: Rect, count: usize, focused: usize, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    card_grid(body, count, focused)
        .into_iter()
        .find(|(_, area)| area.contains(position))
        .map(|(index, _)| index)
}

pub fn detail_popup(area: Rect) -> Rect {
    centered_rect(84, 86, area)
}

pub fn help_popup(area: Rect) -> Rect {
    centered_rect(60, 70, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_bodies_get_three_columns() {
        let body = Rect::new(0, 3, 150, 30);
        let cards = card_grid(body, 5, 0);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[1].1.x, 50);
        assert_eq!(cards[3].1.y, 3 + CARD_HEIGHT);
    }

    #[test]
    fn focus_below_the_fold_scrolls_rows() {
        let body = Rect::new(0, 0, 60, CARD_HEIGHT * 2);
        let cards = card_grid(body, 6, 4);

        let indices: Vec<usize> = cards.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![3, 4]);
        assert_eq!(cards[0].1.y, 0);
    }

    #[test]
    fn click_maps_to_card() {
        let body = Rect::new(0, 3, 100, 30);
        assert_eq!(card_at(body, 3, 0, 60, 5), Some(1));
        assert_eq!(card_at(body, 3, 0, 10, 3 + CARD_HEIGHT + 1), Some(2));
        assert_eq!(card_at(body, 3, 0, 60, 3 + CARD_HEIGHT + 1), None);
    }

    #[test]
    fn empty_gallery_has_no_cards() {
        assert!(card_grid(Rect::new(0, 0, 80, 20), 0, 0).is_empty());
    }
}
