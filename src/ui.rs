use crate::store::ProfileStore;
use crate::view::{Block as ViewBlock, DisplayTable, ProfileView};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

pub struct App {
    pub store: ProfileStore,
    pub state: ListState,
    pub view: Option<ProfileView>,
    pub error: Option<String>,
    pub scroll: u16,
}

impl App {
    pub fn new(store: ProfileStore) -> Self {
        let mut state = ListState::default();
        if !store.district_names().is_empty() {
            state.select(Some(0));
        }

        let mut app = Self {
            store,
            state,
            view: None,
            error: None,
            scroll: 0,
        };
        app.refresh_view();
        app
    }

    pub fn selected_district(&self) -> Option<&str> {
        self.state
            .selected()
            .and_then(|i| self.store.district_names().get(i))
            .map(String::as_str)
    }

    /// Rebuild the profile for the current selection.
    pub fn refresh_view(&mut self) {
        self.scroll = 0;
        let selection = match self.selected_district() {
            Some(name) => name.to_string(),
            None => {
                self.view = None;
                self.error = None;
                return;
            }
        };

        match self.store.view(&selection) {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(e) => {
                self.view = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn next(&mut self) {
        let len = self.store.district_names().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.select(i);
    }

    pub fn previous(&mut self) {
        let len = self.store.district_names().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.select(i);
    }

    pub fn first(&mut self) {
        if !self.store.district_names().is_empty() {
            self.select(0);
        }
    }

    pub fn last(&mut self) {
        let len = self.store.district_names().len();
        if len > 0 {
            self.select(len - 1);
        }
    }

    fn select(&mut self, i: usize) {
        if self.state.selected() != Some(i) {
            self.state.select(Some(i));
            self.refresh_view();
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(10);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(10);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => app.first(),
                KeyCode::End => app.last(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Sidebar + profile
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // District selector
            Constraint::Percentage(75), // Profile
        ])
        .split(chunks[1]);

    render_sidebar(f, content_chunks[0], app);
    render_profile(f, content_chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        crate::view::PAGE_TITLE,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .store
        .district_names()
        .iter()
        .map(|name| ListItem::new(name.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", crate::html::SIDEBAR_HEADING)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let content = match (&app.view, &app.error) {
        (Some(view), _) => view_lines(view),
        (None, Some(error)) => vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))],
        (None, None) => vec![Line::from("No districts loaded")],
    };

    let profile = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Profile "),
        );

    f.render_widget(profile, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.store.district_names().len();

    let status_spans = vec![
        Span::styled(
            format!(" District: {}/{} ", selected, total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Loaded "),
        Span::styled(
            app.store.loaded_at().format("%Y-%m-%d %H:%M UTC").to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" District | "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

/// Terminal rendition of the view blocks, same order as the web page.
pub fn view_lines(view: &ProfileView) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for block in &view.blocks {
        match block {
            ViewBlock::Title { .. } => {} // shown in the header bar
            ViewBlock::Image { image } => {
                lines.push(Line::from(Span::styled(
                    format!("  [image: {}]", image.file),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )));
            }
            ViewBlock::District { name, division } => {
                lines.push(Line::from(Span::styled(
                    format!("  {}", name),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("  {}", division)));
            }
            ViewBlock::Text { heading: h, body } | ViewBlock::Notice { heading: h, message: body } => {
                lines.push(Line::from(Span::styled(format!("  {}", h), heading)));
                lines.push(Line::from(format!("  {}", body)));
            }
            ViewBlock::Table { heading: h, table } => {
                lines.push(Line::from(Span::styled(format!("  {}", h), heading)));
                lines.extend(table_lines(table, label));
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn table_lines(table: &DisplayTable, label: Style) -> Vec<Line<'static>> {
    // One-row tables read better as label/value pairs
    if table.rows.len() == 1 {
        return table
            .headers
            .iter()
            .zip(&table.rows[0])
            .flat_map(|(header, value)| {
                [
                    Line::from(Span::styled(format!("  {}", header), label)),
                    Line::from(format!("    {}", value)),
                ]
            })
            .collect();
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", table.headers.join(" │ ")),
        label,
    ))];
    lines.extend(
        table
            .rows
            .iter()
            .map(|row| Line::from(format!("  {}", row.join(" │ ")))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::store;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_navigation_wraps_and_rebuilds_view() {
        let mut app = App::new(store());
        assert_eq!(app.selected_district(), Some("सीहोर"));
        assert_eq!(app.view.as_ref().unwrap().district, "सीहोर");

        app.next();
        assert_eq!(app.selected_district(), Some("भोपाल"));
        assert_eq!(app.view.as_ref().unwrap().district, "भोपाल");

        app.next();
        assert_eq!(app.selected_district(), Some("सीहोर"));

        app.previous();
        assert_eq!(app.selected_district(), Some("भोपाल"));

        app.first();
        assert_eq!(app.selected_district(), Some("सीहोर"));
        app.last();
        assert_eq!(app.selected_district(), Some("भोपाल"));
    }

    #[test]
    fn test_selection_change_resets_scroll() {
        let mut app = App::new(store());
        app.scroll_down();
        assert_eq!(app.scroll, 10);
        app.next();
        assert_eq!(app.scroll, 0);
        app.scroll_up();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_view_lines_follow_block_order() {
        let app = App::new(store());
        let text = plain(&view_lines(app.view.as_ref().unwrap()));

        let division = text.iter().position(|l| l == "  संभाग : भोपाल").unwrap();
        let description = text.iter().position(|l| l == "  टेस्ट").unwrap();
        let odop = text.iter().position(|l| l == "  ODOP उत्पाद").unwrap();
        assert!(division < description && description < odop);
        assert!(text.iter().any(|l| l == "    No Info"));
    }
}
