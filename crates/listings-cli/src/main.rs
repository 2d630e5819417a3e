use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use listings_config::Config;
use listings_engine::{
    JsonDirStore, ListingType, Property, PropertyFilter, PropertyStore, import, io,
    render_description, render_plain,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

struct App {
    properties: Vec<Property>,
    filter: PropertyFilter,
    /// Indices into `properties` that pass the filter, in display order
    visible: Vec<usize>,
    list_state: ListState,
    searching: bool,
    current_content: Vec<String>,
}

impl App {
    fn new(store: &JsonDirStore) -> Result<Self> {
        let properties = store.list()?;

        let mut app = Self {
            properties,
            filter: PropertyFilter::default(),
            visible: Vec::new(),
            list_state: ListState::default(),
            searching: false,
            current_content: Vec::new(),
        };
        app.refilter();

        Ok(app)
    }

    fn refilter(&mut self) {
        let matched = self.filter.apply(&self.properties);
        self.visible = matched
            .iter()
            .filter_map(|p| self.properties.iter().position(|q| q.id == p.id))
            .collect();

        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
        self.update_content_for_selection();
    }

    fn next_property(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_property(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn selected_property(&self) -> Option<&Property> {
        let index = self.list_state.selected()?;
        let position = self.visible.get(index)?;
        self.properties.get(*position)
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = match self.selected_property() {
            Some(property) => property_lines(property),
            None => vec!["No properties match the current filter".to_string()],
        };
    }

    fn push_query_char(&mut self, c: char) {
        self.filter.query.get_or_insert_with(String::new).push(c);
        self.refilter();
    }

    fn pop_query_char(&mut self) {
        if let Some(query) = self.filter.query.as_mut() {
            query.pop();
            if query.is_empty() {
                self.filter.query = None;
            }
        }
        self.refilter();
    }

    fn clear_query(&mut self) {
        self.filter.query = None;
        self.searching = false;
        self.refilter();
    }

    fn toggle_featured(&mut self) {
        self.filter.featured_only = !self.filter.featured_only;
        self.refilter();
    }

    fn cycle_listing_type(&mut self) {
        self.filter.listing_type = match self.filter.listing_type {
            None => Some(ListingType::Sale),
            Some(ListingType::Sale) => Some(ListingType::Rent),
            Some(ListingType::Rent) => None,
        };
        self.refilter();
    }

    fn filter_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(query) = &self.filter.query {
            parts.push(format!("\"{query}\""));
        }
        if let Some(listing) = self.filter.listing_type {
            parts.push(listing.label().to_string());
        }
        if self.filter.featured_only {
            parts.push("featured".to_string());
        }
        if parts.is_empty() {
            format!("Properties ({})", self.visible.len())
        } else {
            format!("Properties ({}) [{}]", self.visible.len(), parts.join(", "))
        }
    }
}

/// Detail pane text: headline facts followed by the rendered description
fn property_lines(property: &Property) -> Vec<String> {
    let mut lines = vec![
        property.title.clone(),
        format!(
            "{} | {} | {}",
            property.display_price(),
            property.property_type.label(),
            property.listing_type.label()
        ),
        format!(
            "{} | {} bed | {} bath",
            property.location, property.bedrooms, property.bathrooms
        ),
    ];
    if let Some(area) = property.area_sqm {
        lines.push(format!("{area} sqm"));
    }
    lines.push(String::new());

    let blocks = property.description_blocks();
    if blocks.is_empty() {
        lines.push("(no description)".to_string());
    } else {
        lines.extend(render_plain(&render_description(&blocks)));
    }
    lines
}

fn run_import(records_path: &Path, data_path: &Path) -> Result<()> {
    let store = JsonDirStore::open(data_path)?;
    let records = import::load_records(records_path)?;
    let report = import::import_records(&store, records);

    println!(
        "Imported {} new, {} updated, {} failed",
        report.created,
        report.updated,
        report.failed.len()
    );
    for failure in &report.failed {
        println!("  row {}: {}", failure.row, failure.reason);
    }
    Ok(())
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [data-path]");
    eprintln!("       {program} import <records.json> [data-path]");
    process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let (import_file, data_arg) = match args.len() {
        1 => (None, None),
        2 if args[1] != "import" => (None, Some(args[1].as_str())),
        3 | 4 if args[1] == "import" => (
            Some(PathBuf::from(&args[2])),
            args.get(3).map(String::as_str),
        ),
        _ => usage(&args[0]),
    };
    let from_config = data_arg.is_none();

    let data_path = match Config::resolve_data_path(data_arg) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("Error: No data path provided and no config file found");
            eprintln!("Or create a config file at {}", config_path.display());
            usage(&args[0])
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(&args[0])
        }
    };

    if let Err(e) = io::validate_data_dir(&data_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Data path '{}'{} is invalid: {e}",
            data_path.display(),
            source
        );
        process::exit(1);
    }

    if let Some(records_path) = import_file {
        // Only the batch command logs; the TUI owns the terminal
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
        return run_import(&records_path, &data_path);
    }

    let store = JsonDirStore::open(&data_path)?;
    let mut app = App::new(&store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.searching {
                match key.code {
                    KeyCode::Enter => app.searching = false,
                    KeyCode::Esc => app.clear_query(),
                    KeyCode::Backspace => app.pop_query_char(),
                    KeyCode::Char(c) => app.push_query_char(c),
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_property(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_property(),
                KeyCode::Char('/') => app.searching = true,
                KeyCode::Char('f') => app.toggle_featured(),
                KeyCode::Char('t') => app.cycle_listing_type(),
                KeyCode::Esc => app.clear_query(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(f.area());

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&i| app.properties.get(i))
        .map(|property| {
            let marker = if property.featured { "★ " } else { "  " };
            let display_text = format!(
                "{marker}{} - {}",
                property.title,
                property.display_price()
            );
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.filter_summary()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let content_text: Vec<Line> = app
        .current_content
        .iter()
        .map(|line| Line::from(vec![Span::raw(line.clone())]))
        .collect();

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = if app.searching {
        Line::from(vec![
            Span::raw("Search: "),
            Span::raw(app.filter.query.clone().unwrap_or_default()),
            Span::raw(" | Enter: Done | Esc: Clear"),
        ])
    } else {
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("/: Search | f: Featured | t: Sale/Rent"),
        ])
    };

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
