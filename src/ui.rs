use anyhow::Result;
use cbam_dashboard::{
    ChartSeries, Parameters, ViewModel, EMPLOYMENT_FORMULA, INTENSITY_FORMULA,
    OUTPUT_CHANGE_FORMULA, WAGE_FORMULA,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Emissions,
    Output,
    DeltaY,
}

impl Slider {
    pub fn next(&self) -> Self {
        match self {
            Slider::Emissions => Slider::Output,
            Slider::Output => Slider::DeltaY,
            Slider::DeltaY => Slider::Emissions,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Slider::Emissions => Slider::DeltaY,
            Slider::Output => Slider::Emissions,
            Slider::DeltaY => Slider::Output,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Slider::Emissions => "Total Emissions",
            Slider::Output => "Total Output",
            Slider::DeltaY => "Direct Impact (deltaY)",
        }
    }
}

pub struct App {
    pub params: Parameters,
    pub selected: Slider,
    pub view: ViewModel,
}

impl App {
    pub fn new(params: Parameters) -> Self {
        Self {
            view: ViewModel::compute(params),
            selected: Slider::Emissions,
            params,
        }
    }

    /// Re-derive the frame after a parameter change.
    fn update(&mut self) {
        self.view = ViewModel::compute(self.params);
    }

    pub fn selected_value(&self) -> f64 {
        match self.selected {
            Slider::Emissions => self.params.emissions,
            Slider::Output => self.params.output,
            Slider::DeltaY => self.params.delta_y,
        }
    }

    fn set_selected(&mut self, value: f64) {
        match self.selected {
            Slider::Emissions => self.params.set_emissions(value),
            Slider::Output => self.params.set_output(value),
            Slider::DeltaY => self.params.set_delta_y(value),
        }
        self.update();
    }

    pub fn next_slider(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn previous_slider(&mut self) {
        self.selected = self.selected.previous();
    }

    pub fn increase(&mut self) {
        self.set_selected(self.selected_value() + Parameters::STEP);
    }

    pub fn decrease(&mut self) {
        self.set_selected(self.selected_value() - Parameters::STEP);
    }

    pub fn set_min(&mut self) {
        self.set_selected(Parameters::MIN);
    }

    pub fn set_max(&mut self) {
        self.set_selected(Parameters::MAX);
    }

    pub fn reset(&mut self) {
        self.params = Parameters::default();
        self.update();
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
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
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_slider();
                    } else {
                        app.next_slider();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => app.next_slider(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_slider(),
                KeyCode::Right | KeyCode::Char('l') => app.increase(),
                KeyCode::Left | KeyCode::Char('h') => app.decrease(),
                KeyCode::Home => app.set_min(),
                KeyCode::End => app.set_max(),
                KeyCode::Char('r') => app.reset(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar + footer label
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Parameter sidebar
            Constraint::Min(0),     // Charts
        ])
        .split(chunks[1]);

    render_sliders(f, content_chunks[0], app);
    render_charts(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            "CBAM Impact Analysis Visualizations",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            "key models and formulas, recomputed live",
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_sliders(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Input Parameters ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let sliders = [
        (Slider::Emissions, app.params.emissions),
        (Slider::Output, app.params.output),
        (Slider::DeltaY, app.params.delta_y),
    ];

    for (i, (slider, value)) in sliders.iter().enumerate() {
        let selected = *slider == app.selected;
        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(slider.title()),
            )
            .gauge_style(Style::default().fg(if selected {
                Color::Yellow
            } else {
                Color::Cyan
            }))
            .ratio(value / Parameters::MAX)
            .label(format!("{:.0} / {:.0}", value, Parameters::MAX));

        f.render_widget(gauge, rows[i]);
    }
}

fn render_charts(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Emission intensity
            Constraint::Percentage(50), // deltaX | wage & employment
        ])
        .split(area);

    render_intensity_section(f, chunks[0], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_output_change_section(f, bottom[0], app);
    render_wage_employment_section(f, bottom[1], app);
}

fn render_intensity_section(f: &mut Frame, area: Rect, app: &App) {
    let chunks = split_formula_chart(area, 4);

    let text = vec![
        Line::from(Span::styled(
            format!("  {}", INTENSITY_FORMULA),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("  Emission Intensity: {:.2}", app.view.emission_intensity),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Emission Intensity by Product "),
    );
    f.render_widget(paragraph, chunks[0]);

    render_line_chart(
        f,
        chunks[1],
        "Output",
        &[(&app.view.intensity_series, Color::Green)],
    );
}

fn render_output_change_section(f: &mut Frame, area: Rect, app: &App) {
    let chunks = split_formula_chart(area, 4);

    let text = vec![
        Line::from(Span::styled(
            format!("  {}", OUTPUT_CHANGE_FORMULA),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("  Total Output Change (deltaX): {:.2}", app.view.delta_x),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Total Output Change (deltaX) "),
    );
    f.render_widget(paragraph, chunks[0]);

    render_line_chart(
        f,
        chunks[1],
        "deltaY",
        &[(&app.view.output_change_series, Color::Yellow)],
    );
}

fn render_wage_employment_section(f: &mut Frame, area: Rect, app: &App) {
    let chunks = split_formula_chart(area, 5);

    let text = vec![
        Line::from(Span::styled(
            format!("  {}   {}", WAGE_FORMULA, EMPLOYMENT_FORMULA),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("  Wage Impact (deltaW): {:.2}", app.view.delta_w),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  Employment Impact (deltaN): {:.2}", app.view.delta_n),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Wage and Employment Impacts "),
    );
    f.render_widget(paragraph, chunks[0]);

    render_line_chart(
        f,
        chunks[1],
        "deltaX",
        &[
            (&app.view.wage_series, Color::Magenta),
            (&app.view.employment_series, Color::Blue),
        ],
    );
}

/// Split a section into a formula/value paragraph and the chart below it.
fn split_formula_chart(area: Rect, text_height: u16) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(text_height), Constraint::Min(0)])
        .split(area)
}

fn render_line_chart(f: &mut Frame, area: Rect, x_title: &str, series: &[(&ChartSeries, Color)]) {
    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(s, color)| {
            Dataset::default()
                .name(s.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(&s.points)
        })
        .collect();

    // Keep axes non-degenerate when every value is 0
    let x_max = series.iter().map(|(s, _)| s.x_max()).fold(1.0, f64::max);
    let y_max = series.iter().map(|(s, _)| s.y_max()).fold(1.0, f64::max);

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(x_title.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(axis_labels(x_max)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(axis_labels(y_max)),
        );

    f.render_widget(chart, area);
}

fn axis_labels(max: f64) -> Vec<Span<'static>> {
    vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", max / 2.0)),
        Span::raw(format!("{:.0}", max)),
    ]
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let status_spans = vec![
        Span::styled(
            format!(" {} ", app.selected.title()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("| "),
        Span::styled("Tab/↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Select | "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Adjust ±5 | "),
        Span::styled("Home/End", Style::default().fg(Color::Yellow)),
        Span::raw(" Min/Max | "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" Reset | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit | "),
        Span::styled(
            "CBAM teaching dashboard",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
