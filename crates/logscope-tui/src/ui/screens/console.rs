use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use logscope_logs::Console;
use logscope_types::LogRecord;

use crate::app::AppState;
use crate::ui::Theme;
use crate::ui::components::{StatusBar, console_hints};

/// The single screen: live log console
pub struct ConsoleScreen;

impl ConsoleScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState, console: &Console) {
        let area = frame.area();

        let show_search_bar = state.search_active || !console.search().is_empty();

        let mut constraints = vec![Constraint::Length(3)]; // Header
        if show_search_bar {
            constraints.push(Constraint::Length(3)); // Search bar
        }
        constraints.push(Constraint::Min(1)); // Log lines
        constraints.push(Constraint::Length(1)); // Status bar

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut idx = 0;

        Self::render_header(frame, chunks[idx], console);
        idx += 1;

        if show_search_bar {
            Self::render_search_bar(frame, chunks[idx], state);
            idx += 1;
        }

        let visible = console.visible_subset();
        Self::render_records(frame, chunks[idx], state, &visible);
        idx += 1;

        Self::render_status_bar(frame, chunks[idx], console);
    }

    fn render_header(frame: &mut Frame, area: Rect, console: &Console) {
        let level = console.level_filter().label();
        let retained = console.retained();
        let capacity = console.capacity();

        let state_span = if console.is_paused() {
            Span::styled("⏸ PAUSED", Theme::paused())
        } else {
            Span::styled("● LIVE", Theme::live())
        };

        let title = Line::from(vec![
            Span::styled("logscope", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            state_span,
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled("level: ", Theme::text_dim()),
            Span::styled(level, Theme::text_highlight()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled(format!("{retained}/{capacity} retained"), Theme::text()),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
        frame.render_widget(header, area);
    }

    fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
        let (content, border) = if state.search_active {
            (
                Line::from(vec![
                    Span::styled("/", Theme::text_highlight()),
                    Span::styled(state.search_input.clone(), Theme::text()),
                    Span::styled("▌", Theme::text_highlight()),
                ]),
                Theme::border_focused(),
            )
        } else {
            (
                Line::from(vec![
                    Span::styled("search: ", Theme::text_dim()),
                    Span::styled(state.search_input.clone(), Theme::text()),
                    Span::styled("  (n to clear)", Theme::text_dim()),
                ]),
                Theme::border(),
            )
        };

        let bar = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Search "),
        );
        frame.render_widget(bar, area);
    }

    fn render_records(frame: &mut Frame, area: Rect, state: &mut AppState, visible: &[LogRecord]) {
        let height = area.height as usize;

        // Follow mode pins the viewport to the newest record (top of the
        // newest-first list); manual scrolling is clamped to the real extent.
        let max_scroll = visible.len().saturating_sub(height);
        if state.follow {
            state.scroll = 0;
        } else {
            state.scroll = state.scroll.min(max_scroll);
        }

        let lines: Vec<Line> = visible
            .iter()
            .skip(state.scroll)
            .take(height)
            .map(|record| Self::record_line(record, state.show_timestamps))
            .collect();

        let body = if lines.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "no records match",
                Theme::text_dim(),
            )))
        } else {
            Paragraph::new(lines)
        };

        frame.render_widget(body, area);
    }

    fn record_line(record: &LogRecord, show_timestamps: bool) -> Line<'_> {
        let mut spans = Vec::with_capacity(4);

        if show_timestamps {
            let ts = record
                .timestamp
                .with_timezone(&Local)
                .format("%H:%M:%S")
                .to_string();
            spans.push(Span::styled(format!("{ts} "), Theme::text_dim()));
        }

        spans.push(Span::styled(
            format!("{:<5} ", record.level.as_str()),
            ratatui::style::Style::default().fg(record.level.color()),
        ));
        spans.push(Span::styled(
            format!("[{}] ", record.source),
            ratatui::style::Style::default().fg(Theme::SOURCE),
        ));
        spans.push(Span::styled(record.message.clone(), Theme::text()));

        Line::from(spans)
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, console: &Console) {
        let summary = console.summary();
        let state_label = if summary.live { "Live" } else { "Paused" };
        let bar = StatusBar::new()
            .hints(console_hints())
            .right(format!("{} entries • {}", summary.count, state_label));

        frame.render_widget(bar, area);
    }
}
