use crate::application::{App, DetailView, ListView, LoadState, Screen, StoryPage};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub const LOADING_STORIES: &str = "Loading stories...";
pub const LOADING_STORY: &str = "Loading story...";
pub const NO_MATCHING_STORIES: &str = "No stories available for this level.";
pub const NO_VOCABULARY: &str = "No vocabulary found for this story.";

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.screen {
        Screen::List => render_list_view(f, &mut app.list, chunks[1]),
        Screen::Detail => render_detail_view(f, &mut app.detail, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("storydeck - English Stories | {}", app.route()))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn centered_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let message = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_list_view(f: &mut Frame, list: &mut ListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let controls = Paragraph::new(format!(
        "Filter by Level: {} | Sort by Level: {}",
        list.filter.label(),
        list.order.label()
    ))
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(controls, chunks[0]);

    match &list.state {
        LoadState::Loading => {
            centered_message(f, chunks[1], LOADING_STORIES, Style::default());
            return;
        }
        LoadState::Failed(message) => {
            centered_message(f, chunks[1], message, Style::default().fg(Color::Red));
            return;
        }
        LoadState::Ready(_) => {}
    }

    let selected = list.selected;
    let stories = list.visible();
    if stories.is_empty() {
        centered_message(f, chunks[1], NO_MATCHING_STORIES, Style::default().fg(Color::Gray));
        return;
    }

    let items: Vec<ListItem> = stories
        .iter()
        .map(|story| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    story.title.clone(),
                    Style::default().fg(Color::Indexed(63)).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  Level: "),
                Span::raw(story.level.to_string()),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Stories"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(widget, chunks[1], &mut state);
}

fn render_detail_view(f: &mut Frame, detail: &mut DetailView, area: Rect) {
    let page = match &detail.state {
        LoadState::Loading => {
            centered_message(f, area, LOADING_STORY, Style::default());
            return;
        }
        LoadState::Failed(message) => {
            centered_message(f, area, message, Style::default().fg(Color::Red));
            return;
        }
        LoadState::Ready(page) => page,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            page.story.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Level: {}", page.story.level)),
    ])
    .alignment(Alignment::Center);

    let inner_width = chunks[1].width.saturating_sub(2) as usize;
    let inner_height = chunks[1].height.saturating_sub(2);
    let lines = story_page_lines(page, inner_width);

    let limit = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height);
    detail.set_scroll_limit(limit);

    f.render_widget(title, chunks[0]);
    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Story"))
        .scroll((detail.scroll, 0));
    f.render_widget(body, chunks[1]);
}

/// Story body followed by the vocabulary, pre-wrapped to `width` so the
/// scroll limit matches what is drawn.
fn story_page_lines(page: &StoryPage, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_text(&page.story.content, width)
        .into_iter()
        .map(Line::from)
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Vocabulary",
        Style::default().fg(Color::Indexed(63)).add_modifier(Modifier::BOLD),
    )));

    if page.vocab.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_VOCABULARY,
            Style::default().fg(Color::Gray),
        )));
        return lines;
    }

    for entry in &page.vocab {
        let text = format!("{} - {}", entry.word, entry.meaning);
        lines.extend(wrap_text(&text, width).into_iter().map(Line::from));
    }
    lines
}

/// Greedy word wrap by character count. Words longer than `width` are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in raw.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if current_len > 0 && current_len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    lines
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen {
        Screen::List => "↑↓/jk: move | Enter: open | f: filter | F: all levels | s: sort | r: reload | q: quit",
        Screen::Detail => "↑↓/jk: scroll | Esc/h: home | r: reload | q: quit",
    };
    let status = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(status, area);
}
