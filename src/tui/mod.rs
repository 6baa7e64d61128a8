//! Ratatui-based terminal chart viewer.
//!
//! Shows the fit chart full-screen until the user closes it, then restores
//! the terminal.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::debug;

use crate::domain::Chart;
use crate::error::{AppError, EXIT_RENDER};
use crate::plot::ChartSink;

mod plotters_chart;

use plotters_chart::FitPlottersChart;

/// Chart sink that opens an interactive terminal view.
#[derive(Debug, Default)]
pub struct TerminalChart {
    subtitle: Option<String>,
}

impl TerminalChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra line shown above the chart (e.g. the fitted polynomial).
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl ChartSink for TerminalChart {
    fn render(&mut self, chart: &Chart) -> Result<(), AppError> {
        let _guard = TerminalGuard::new()?;

        let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to initialize terminal: {e}")))?;

        let view = ChartView {
            chart,
            subtitle: self.subtitle.as_deref(),
        };
        view.event_loop(&mut terminal)
    }
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(EXIT_RENDER, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct ChartView<'a> {
    chart: &'a Chart,
    subtitle: Option<&'a str>,
}

impl ChartView<'_> {
    fn event_loop<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RENDER, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RENDER, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RENDER, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if is_close_key(key.code) {
                        debug!("chart view closed");
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_chart(frame, chunks[0]);
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                self.chart.title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        let mut inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if let Some(subtitle) = self.subtitle {
            if inner.height > 1 {
                let line = Paragraph::new(subtitle)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray));
                frame.render_widget(line, Rect { height: 1, ..inner });
                inner.y += 1;
                inner.height -= 1;
            }
        }

        // Tick labels and axis descriptions come from the plotters mesh.
        let widget = FitPlottersChart {
            chart: self.chart,
            fmt_x: fmt_axis,
            fmt_y: fmt_axis,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("q / Esc / Enter close", Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(
                format!("{} points, {} curve samples", self.chart.points.len(), self.chart.curve.len()),
                Style::default().fg(Color::Yellow),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}

fn fmt_axis(v: f64) -> String {
    format!("{v:.1}")
}
