//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - runs the fit pipeline
//! - prints the fitted polynomial
//! - renders the chart

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::domain::{ChartTarget, FitConfig};
use crate::error::AppError;
use crate::plot::{AsciiChart, ChartSink};
use crate::tui::TerminalChart;

pub mod pipeline;

/// Entry point for the `quadfit` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();

    let config = FitConfig::default();
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_fit_summary(&run.polynomial));

    let target = config.display.resolve(io::stdout().is_terminal());
    debug!(?target, "rendering chart");

    match target {
        ChartTarget::Terminal => TerminalChart::new()
            .with_subtitle(format!("f(x) = {}", run.polynomial))
            .render(&run.chart),
        ChartTarget::Ascii => {
            AsciiChart::new(io::stdout().lock(), config.plot_width, config.plot_height).render(&run.chart)
        }
    }
}
