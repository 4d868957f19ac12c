//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a two-row split: the news list on top and a one-line
//!   bar at the bottom holding the unseen-count indicator and the refresh
//!   button.
//! * Each item is one multi-line block: title, link, description, then
//!   date and source.  Links are printed in full so the terminal can open
//!   them.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::api::NewsItem;
use crate::app::App;
use crate::datefmt::format_date;

const BUTTON_LABEL: &str = "[ Загрузить новости ]";
const SOURCE_LABEL: &str = "Источник";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, bar_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_news_list(app, frame, main_area);
    draw_bottom_bar(app, frame, bar_area);
}

/// Columns taken by the list borders and the highlight symbol.
const LIST_CHROME_WIDTH: u16 = 4;

/// The lines making up one item's block.  `date` is the already formatted
/// display date; the description is wrapped to `width` columns.
pub fn item_lines<'a>(item: &'a NewsItem, date: String, width: usize) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            item.link.as_str(),
            Style::default().fg(Color::Blue),
        )),
    ];
    lines.extend(
        textwrap::wrap(item.description(), width.max(1))
            .into_iter()
            .map(Line::raw),
    );
    lines.extend([
        Line::from(vec![
            Span::styled(date, Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled(
                format!("{SOURCE_LABEL}: {}", item.feed),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::default(),
    ]);
    lines
}

/// Render the scrollable news list.
fn draw_news_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width.saturating_sub(LIST_CHROME_WIDTH));
    let list_items: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| ListItem::new(item_lines(item, format_date(&item.date), width)))
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(" Новости ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the indicator, the refresh button and the key help.
fn draw_bottom_bar(app: &App, frame: &mut Frame, area: Rect) {
    let button_style = if app.refresh_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(app.indicator(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(BUTTON_LABEL, button_style),
        Span::raw("  r/Enter: refresh  q: quit  ↑/↓: scroll  Home/End: jump"),
    ]));
    frame.render_widget(bar, area);
}
