use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use scrape_core::{update, SessionState};
use session_logging::{session_debug, session_info};

use super::config::Args;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{self, Command};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, args.log_level);

    let service_base = args.resolved_service_base();
    session_info!("Scrape session against {}", service_base);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(args.client_settings(), cmd_tx.clone())
        .with_context(|| format!("cannot use scraping service at {service_base}"))?;
    spawn_input_reader(cmd_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, commands::HELP.iter().map(|line| line.to_string()))?;

    let mut state = SessionState::new(service_base);
    write_lines(&mut out, render::render(&state.view()))?;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            Command::Quit => break,
            Command::Help => {
                write_lines(&mut out, commands::HELP.iter().map(|line| line.to_string()))?;
            }
            Command::Msg(msg) => {
                let mut pending = vec![msg];
                while let Some(msg) = pending.pop() {
                    let (next, effects) = update(state, msg);
                    state = next;
                    pending.extend(runner.run(effects));
                }
                if state.consume_dirty() {
                    write_lines(&mut out, render::render(&state.view()))?;
                }
            }
        }
    }

    session_info!("Scrape session closed");
    Ok(())
}

fn spawn_input_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    session_debug!("Stopped reading input: {}", err);
                    break;
                }
            };
            if cmd_tx.send(commands::parse_line(&line)).is_err() {
                return;
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });
}

fn write_lines(out: &mut impl Write, lines: impl IntoIterator<Item = String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}
