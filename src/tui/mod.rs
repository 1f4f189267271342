use crossterm::event::{self, Event as TermEvent, KeyCode};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

use lorentz::{Event, length_contraction, time_dilation};
use lorentz::metrics::{self, Sample};

const BETA_STEP: f64 = 0.01;
const BETA_LIMIT: f64 = 0.99;

pub fn start(origin: Event) -> anyhow::Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // State
    let mut beta: f64 = 0.0;
    let mut log: Vec<Sample> = Vec::new();

    loop {
        let sample = Sample::new(origin, beta)?;
        let dilated_time = time_dilation(1.0, beta)?;
        let contracted_length = length_contraction(1.0, beta)?;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let separation = if sample.timelike { "timelike" } else { "spacelike" };
            let lines = [
                format!("Velocity: {:.2}c   (←/→ to change, q to quit)", sample.beta),
                format!("Lorentz factor (γ): {:.4}", sample.gamma),
                format!(
                    "Unit clock: {dilated_time:.4} frame time | Unit rod: {contracted_length:.4} frame length"
                ),
                format!("Original event: x = {:.4}, t = {:.4}", sample.x, sample.t),
                format!(
                    "Transformed event: x' = {:.4}, t' = {:.4}",
                    sample.x_prime, sample.t_prime
                ),
                format!(
                    "Invariant: S = {:.4} | S' = {:.4} ({separation})",
                    sample.invariant, sample.invariant_prime
                ),
            ];

            for (line, area) in lines.into_iter().zip(chunks.iter()) {
                f.render_widget(
                    Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
                    *area,
                );
            }
        })?;

        // Input handling
        if event::poll(Duration::from_millis(200))? {
            if let TermEvent::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Right => {
                        beta = step_beta(beta, BETA_STEP);
                        log.push(Sample::new(origin, beta)?);
                    }
                    KeyCode::Left => {
                        beta = step_beta(beta, -BETA_STEP);
                        log.push(Sample::new(origin, beta)?);
                    }
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;

                        if !log.is_empty() {
                            log.sort_by(|a, b| a.beta.total_cmp(&b.beta));
                            metrics::export_csv(&log, "realtime.csv")?;
                            println!("✅ Data exported to realtime.csv");
                            metrics::plot_results(&log, "plot.png")?;
                            println!("✅ Plot saved to plot.png");
                        }

                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Move β by `delta`, snapped to the slider grid and kept inside ±0.99.
fn step_beta(beta: f64, delta: f64) -> f64 {
    let next = ((beta + delta) / BETA_STEP).round() * BETA_STEP;
    next.clamp(-BETA_LIMIT, BETA_LIMIT)
}
