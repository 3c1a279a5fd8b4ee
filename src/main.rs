mod app;
mod catalog;
mod config;
mod diagram;
mod error;
mod fretboard;
mod layout;
mod note;
mod scale;
mod selector;
mod ui;

use anyhow::Result;
use app::{App, KeyDisplay};
use clap::Parser;
use config::Cli;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, process::ExitCode, time::Duration};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut app = App::new(cli.enabled_families(), cli.seed);

    if cli.print {
        return print_once(&mut app);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(e) = result {
        eprintln!("Error: {:?}", e);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// One generation straight to stdout; an empty selection exits with status 1.
fn print_once(app: &mut App) -> Result<ExitCode> {
    app.generate()?;
    if app.display == KeyDisplay::Prompt {
        for line in app.display.lines() { eprintln!("{}", line); }
        return Ok(ExitCode::FAILURE);
    }
    for line in app.display.lines() { println!("{}", line); }
    println!();
    for line in diagram::neck_diagram(&app.geometry, &app.tuning, &app.markers) {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press { continue; }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,

                    KeyCode::Enter | KeyCode::Char('g') => app.generate()?,

                    KeyCode::Up        => app.cursor_up(),
                    KeyCode::Down      => app.cursor_down(),
                    KeyCode::Char(' ') => app.toggle_at_cursor(),
                    KeyCode::Char('a') => app.enable_all(),
                    KeyCode::Char('n') => app.clear_all(),
                    KeyCode::Char(c @ '1'..='6') => app.toggle_family(c as usize - '1' as usize),

                    _ => {}
                }
            }
        }
        if app.should_quit { break; }
    }
    Ok(())
}
