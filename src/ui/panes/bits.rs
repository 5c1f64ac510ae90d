//! XNOR bit grid rendering
//!
//! Draws both operands and the result as 32 bits, most significant first,
//! grouped in nibbles. Operand bits are green where the two operands agree
//! and red where they differ, so the bitwise result can be read straight off
//! the columns.

use crate::ui::theme::DEFAULT_THEME;
use crate::xnor::{bit, XnorReport};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the operands and result of `report`
pub fn render_bits_pane(frame: &mut Frame, area: Rect, report: &XnorReport, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" XNOR ({}) ", report.mode))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let matching = report.matching_bits();
    let mut lines = vec![
        bit_row("a", report.a, Some(matching.as_slice())),
        bit_row("b", report.b, Some(matching.as_slice())),
        bit_row("result", report.result, None),
        Line::from(""),
    ];
    for text in report.lines() {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One labelled row of 32 bits. With `matching`, each bit is colored by
/// whether the operands agree at that position.
fn bit_row(label: &str, value: i32, matching: Option<&[bool]>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<7}", label),
        Style::default().fg(DEFAULT_THEME.type_name),
    )];

    for (col, i) in (0..32).rev().enumerate() {
        if col > 0 && col % 4 == 0 {
            spans.push(Span::raw(" "));
        }
        let color = match matching {
            Some(m) if m[col] => DEFAULT_THEME.success,
            Some(_) => DEFAULT_THEME.error,
            None => DEFAULT_THEME.number,
        };
        let symbol = if bit(value, i) { "1" } else { "0" };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }

    spans.push(Span::styled(
        format!("  ({})", value),
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    Line::from(spans)
}
