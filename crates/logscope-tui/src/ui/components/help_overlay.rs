use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let area = frame.area();

        // Center the help popup
        let popup_width = 46.min(area.width.saturating_sub(4));
        let popup_height = 20.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keybindings",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Navigation",
                Style::default().fg(Color::Yellow),
            )]),
            Self::key_line("j/↓", "Scroll down"),
            Self::key_line("k/↑", "Scroll up"),
            Self::key_line("Ctrl+d", "Page down"),
            Self::key_line("Ctrl+u", "Page up"),
            Self::key_line("g", "Newest record"),
            Self::key_line("G", "Oldest record"),
            Self::key_line("f", "Toggle follow mode"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Feed",
                Style::default().fg(Color::Yellow),
            )]),
            Self::key_line("Space/p", "Pause or resume"),
            Self::key_line("c", "Clear retained logs"),
            Self::key_line("l/L", "Cycle level filter"),
            Self::key_line("/", "Search logs"),
            Self::key_line("n", "Clear search"),
            Self::key_line("t", "Toggle timestamps"),
            Line::from(""),
            Self::key_line("?", "Toggle this help"),
            Self::key_line("q", "Quit"),
        ];

        let help_widget = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Help ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {:>8}", key), Style::default().fg(Color::Green)),
            Span::styled(format!("  {}", desc), Style::default().fg(Color::White)),
        ])
    }
}
