use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use ocean_core::{AppState, Msg};
use ocean_engine::{ProgressStep, RandomStep, RealTimeScheduler, Scheduler, SimConfig, Simulator};
use ocean_logging::{ocean_info, ocean_warn};

use crate::cli::Options;
use crate::input::{self, Command};
use crate::render::{self, Renderer};

/// How often due timers are collected while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run(options: &Options, config: &SimConfig) -> Result<()> {
    let settings = config.settings();
    let state = if config.seed_samples && !options.no_samples {
        AppState::seeded(settings, Utc::now())
    } else {
        AppState::with_settings(settings)
    };
    let steps: Box<dyn ProgressStep> = match options.seed {
        Some(seed) => Box::new(RandomStep::seeded(seed, config.max_step)),
        None => Box::new(RandomStep::new(config.max_step)),
    };
    let scheduler = RealTimeScheduler::new().context("start timer runtime")?;
    let mut sim = Simulator::new(state, scheduler, steps);

    let lines = spawn_stdin_reader();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut renderer = Renderer::default();

    let view = sim.view();
    write_lines(&mut out, render::banner(&view))?;
    write_lines(&mut out, renderer.changes(&view))?;
    sim.consume_dirty();

    let mut input_closed = false;
    loop {
        if input_closed {
            // Piped input: let scheduled work finish, then leave.
            if sim.scheduler().pending() == 0 {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        } else {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => match input::parse_line(&line) {
                    Some(Command::Quit) => break,
                    Some(command) => apply(&mut sim, command, &mut out)?,
                    None => {}
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    ocean_info!("stdin closed, draining {} timer(s)", sim.scheduler().pending());
                    input_closed = true;
                }
            }
        }

        sim.pump();
        for notice in sim.drain_notifications() {
            writeln!(out, "{}", render::notification(&notice))?;
        }
        if sim.consume_dirty() {
            write_lines(&mut out, renderer.changes(&sim.view()))?;
        }
        out.flush()?;
    }

    let dropped = sim.shutdown();
    if dropped > 0 {
        ocean_warn!("left with {} unfinished timer(s)", dropped);
    }
    Ok(())
}

fn apply<S: Scheduler>(sim: &mut Simulator<S>, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Chat(text) => {
            if !sim.submit_chat(&text) {
                writeln!(out, "(still waiting for the previous answer)")?;
            }
        }
        Command::Ingest(path) => {
            sim.submit_job(&path);
        }
        Command::Quick(index) => {
            sim.dispatch(Msg::QuickQuerySelected(index));
            let input = sim.view().chat.input;
            if input.is_empty() {
                writeln!(out, "(no quick query {})", index + 1)?;
            } else {
                writeln!(out, "input: {input}  (/send to ask)")?;
            }
        }
        Command::Send => {
            if !sim.submit_chat_input() {
                writeln!(out, "(nothing to send, or still waiting for the previous answer)")?;
            }
        }
        Command::Search(term) => {
            sim.dispatch(Msg::HistorySearchChanged(term));
            write_lines(out, render::history(&sim.view().history, Utc::now()))?;
        }
        Command::Category(filter) => {
            sim.dispatch(Msg::HistoryCategorySelected(filter));
            write_lines(out, render::history(&sim.view().history, Utc::now()))?;
        }
        Command::Star(id) => {
            sim.dispatch(Msg::HistoryStarToggled(id));
            write_lines(out, render::history(&sim.view().history, Utc::now()))?;
        }
        Command::ShowChat => write_lines(out, render::chat(&sim.view().chat))?,
        Command::ShowJobs => write_lines(out, render::jobs(&sim.view()))?,
        Command::ShowHistory => write_lines(out, render::history(&sim.view().history, Utc::now()))?,
        Command::ShowStatus => write_lines(out, render::system(&sim.view().system))?,
        Command::Help => writeln!(out, "{}", input::HELP)?,
        Command::Invalid(reason) => writeln!(out, "{reason}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn write_lines(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
