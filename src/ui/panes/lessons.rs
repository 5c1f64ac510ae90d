//! Lesson list pane rendering

use crate::lessons::Lesson;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the list of lessons, highlighting `selected`
pub fn render_lessons_pane(
    frame: &mut Frame,
    area: Rect,
    lessons: &[Lesson],
    selected: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Lessons ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    // Keep the selection on screen
    let first = (selected + 1).saturating_sub(visible_height);

    let items: Vec<ListItem> = lessons
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_height)
        .map(|(i, lesson)| {
            if i == selected {
                ListItem::new(Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.primary)),
                    Span::styled(
                        lesson.name,
                        Style::default()
                            .fg(DEFAULT_THEME.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
                .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(lesson.name, Style::default().fg(DEFAULT_THEME.fg)),
                ]))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
