use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::conversation::ChatRole;
use crate::scene;

pub fn render(app: &mut App, frame: &mut Frame) {
    let [nav_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_nav(app, frame, nav_area);

    match app.screen {
        Screen::Tour => render_tour(app, frame, body_area),
        Screen::Features => render_features(frame, body_area),
        Screen::Chat => render_chat(app, frame, body_area),
    }

    render_hints(app, frame, hint_area);
}

fn render_nav(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", scene::BRAND),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for link in scene::NAV_LINKS {
        spans.push(Span::styled(link, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        "[t] Talk to GOGO",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    ));

    let tab_marker = match app.screen {
        Screen::Tour => "Experience",
        Screen::Features => "Features",
        Screen::Chat => "Chat",
    };

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} ", tab_marker)),
    );
    frame.render_widget(nav, area);
}

fn render_tour(app: &mut App, frame: &mut Frame, area: Rect) {
    let [copy_area, mascot_area] = Layout::horizontal([
        Constraint::Percentage(55),
        Constraint::Percentage(45),
    ])
    .areas(area);

    // Left: the scrollable section copy
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        scene::VERSION_BADGE,
        Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());

    for (i, section) in scene::SECTIONS.iter().enumerate() {
        if !section.kicker.is_empty() {
            lines.push(Line::from(Span::styled(
                section.kicker,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }
        for title_line in section.title {
            lines.push(Line::from(Span::styled(
                *title_line,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            section.body,
            Style::default().fg(Color::DarkGray),
        )));

        if i == 0 {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                scene::TAGLINE,
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Section spacing stands in for the web build's full-height panels
        for _ in 0..6 {
            lines.push(Line::default());
        }
    }

    for (label, value) in scene::STAT_CARDS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", label),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        scene::FOOTER,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    )));

    app.total_tour_lines = lines.len() as u16;
    app.tour_height = copy_area.height.saturating_sub(2);

    let copy = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.tour_scroll, 0));
    frame.render_widget(copy, copy_area);

    render_mascot(app, frame, mascot_area);
}

fn render_mascot(app: &App, frame: &mut Frame, area: Rect) {
    let frame_art = scene::MASCOT_FRAMES[app.animation_frame as usize % scene::MASCOT_FRAMES.len()];
    let lift = scene::parallax_lift(app.tour_scroll);

    let art_height = frame_art.lines().count() as u16;
    let base_pad = area.height.saturating_sub(art_height) / 2;
    let pad_top = base_pad.saturating_sub(lift);

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..pad_top {
        lines.push(Line::default());
    }
    for art_line in frame_art.lines() {
        lines.push(Line::from(Span::styled(
            art_line,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "(░░░░░░░░)",
        Style::default().fg(Color::Blue).add_modifier(Modifier::DIM),
    )));
    lines.push(Line::default());
    for (label, value) in scene::ATTRIBUTES {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }

    let mascot = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" GOGO Cinematic Mascot "),
        );
    frame.render_widget(mascot, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        scene::FEATURES_TITLE,
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        scene::FEATURES_SUBTITLE,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines.push(Line::default());

    let bullet_colors = [Color::Blue, Color::Magenta, Color::Cyan];
    for (i, (title, description)) in scene::FEATURES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(bullet_colors[i % bullet_colors.len()])),
            Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    let features = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Features "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(features, area);
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    // Inner size minus borders, for scroll and wrap calculations
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Chat with GOGO — Status: Hyper-Curious ");

    let mut lines: Vec<Line> = Vec::new();
    for msg in app.conversation.messages() {
        match msg.role {
            ChatRole::User => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            ChatRole::Assistant => {
                lines.push(Line::from(Span::styled(
                    "GOGO:",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )));
            }
        }
        for line in msg.text.lines() {
            lines.push(Line::from(line));
        }
        lines.push(Line::default());
    }

    if app.chat_loading {
        lines.push(Line::from(Span::styled(
            "GOGO:",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Thinking{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    // Input box with horizontal scrolling so the cursor stays visible
    let editing = app.input_mode == InputMode::Editing;
    let input_border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color))
        .title(" Ask GOGO something interesting... ");

    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_pos = app.chat_cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };
    let visible_text: String = app
        .chat_input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);
    frame.render_widget(input, input_area);

    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

fn render_hints(app: &App, frame: &mut Frame, area: Rect) {
    let hint = match (app.screen, app.input_mode) {
        (Screen::Chat, InputMode::Editing) => " Enter send • Esc browse • Ctrl-C quit",
        (Screen::Chat, InputMode::Normal) => " i edit • j/k scroll • Esc tour • q quit",
        (Screen::Tour, _) => " j/k scroll • Tab screens • t talk to GOGO • q quit",
        (Screen::Features, _) => " Tab screens • t talk to GOGO • Esc tour • q quit",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray).dim()),
        area,
    );
}
