//! # REPL - Read-Eval-Print Loop
//!
//! The main interactive loop for the TreeLab CLI. Handles:
//!
//! - Reading input with rustyline (history, line editing)
//! - Parsing and dispatching commands
//! - Draining the engine after mutating commands, printing each step
//!   caption as it is recorded
//!
//! ## Draining
//!
//! `insert` and `sample` only *schedule* work; the engine applies it when
//! polled and its delay has elapsed. After a mutating command the REPL
//! polls in a sleep loop until the queue drains, so the user watches the
//! pipeline apply operations one by one, exactly as a graphical frontend
//! would animate them. Ctrl+C during a drain is not intercepted; `reset`
//! afterwards cancels anything still pending.
//!
//! ## Error Handling
//!
//! Command errors are displayed but never terminate the loop. Use `quit`
//! or Ctrl+D to exit.

use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::thread;
use std::time::Duration;

use crate::cli::commands::{help_text, Command};
use crate::cli::history::history_path;
use crate::engine::{Clock, Orchestrator, SystemClock};
use crate::render::{render_svg, render_text};

const PROMPT: &str = "treelab> ";

/// Sleep granularity while waiting for a scheduled insert to come due.
const DRAIN_POLL_MS: u64 = 20;

pub struct Repl {
    engine: Orchestrator<SystemClock>,
    editor: DefaultEditor,
    printed_steps: usize,
}

impl Repl {
    pub fn new(degree: usize) -> Result<Self> {
        let engine = Orchestrator::new(degree, SystemClock::new())?;
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(history_file) = history_path() {
            let _ = editor.load_history(&history_file);
        }

        Ok(Self {
            engine,
            editor,
            printed_steps: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {}", err);
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn print_welcome(&self) {
        println!(
            "TreeLab {} — B-Tree insertion, animated (degree {})",
            env!("CARGO_PKG_VERSION"),
            self.engine.tree().degree()
        );
        println!("Type help for commands.");
    }

    fn save_history(&mut self) {
        if let Some(history_file) = history_path() {
            let _ = self.editor.save_history(&history_file);
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history_entry(trimmed).ok();

        let command = match Command::parse(trimmed) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("Error: {}", msg);
                return Ok(true);
            }
        };

        match command {
            Command::Quit => return Ok(false),
            Command::Help => println!("{}", help_text()),
            Command::Insert(key) => {
                self.engine.schedule_insert(key);
                self.drain()?;
            }
            Command::Sample => {
                let handles = self.engine.load_sample();
                println!("Scheduled {} insertions", handles.len());
                self.drain()?;
            }
            Command::Reset => {
                self.engine.reset();
                self.printed_steps = 0;
                println!("Tree reset");
            }
            Command::Show => {
                print!("{}", render_text(self.engine.tree())?);
            }
            Command::Steps => self.list_steps(),
            Command::Goto(index) => {
                if self.engine.player_mut().goto(index) {
                    self.print_current_step()?;
                } else {
                    eprintln!("Error: no step {}", index);
                }
            }
            Command::Next => {
                if self.engine.player_mut().next() {
                    self.print_current_step()?;
                } else {
                    println!("(at last step)");
                }
            }
            Command::Prev => {
                if self.engine.player_mut().prev() {
                    self.print_current_step()?;
                } else {
                    println!("(at first step)");
                }
            }
            Command::First => {
                if self.engine.player_mut().first() {
                    self.print_current_step()?;
                }
            }
            Command::Last => {
                if self.engine.player_mut().last() {
                    self.print_current_step()?;
                }
            }
            Command::Play(speed) => self.play(speed)?,
            Command::Pause => self.engine.player_mut().pause(),
            Command::Svg(path) => {
                let svg = render_svg(self.engine.tree(), self.engine.layout())?;
                std::fs::write(&path, svg)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            Command::Check => match self.engine.tree().check_invariants() {
                Ok(()) => println!("All invariants hold"),
                Err(err) => eprintln!("Invariant violation: {}", err),
            },
        }
        Ok(true)
    }

    /// Poll until every scheduled insertion has applied, printing captions
    /// as steps arrive.
    fn drain(&mut self) -> Result<()> {
        while !self.engine.is_idle() {
            self.engine.poll()?;
            self.print_new_steps();
            if let Some(wait) = self.engine.next_due_in_ms() {
                thread::sleep(Duration::from_millis(wait.min(DRAIN_POLL_MS)));
            }
        }
        self.engine.poll()?;
        self.print_new_steps();
        Ok(())
    }

    fn print_new_steps(&mut self) {
        let player = self.engine.player();
        for index in self.printed_steps..player.len() {
            if let Some(step) = player.step_at(index) {
                println!("  [{index}] {}", step.caption);
            }
        }
        self.printed_steps = player.len();
    }

    fn list_steps(&self) {
        let player = self.engine.player();
        if player.is_empty() {
            println!("(no steps recorded)");
            return;
        }
        for (index, caption) in player.captions() {
            let marker = if index == player.cursor() { ">" } else { " " };
            println!("{marker} [{index}] {caption}");
        }
    }

    fn print_current_step(&self) -> Result<()> {
        if let Some(step) = self.engine.player().current() {
            println!("[{}] {}", self.engine.player().cursor(), step.caption);
            print!("{}", render_text(&step.snapshot)?);
        }
        Ok(())
    }

    /// Autoplay from the current cursor, drawing each step until the end
    /// or until the log is exhausted.
    fn play(&mut self, speed: Option<f32>) -> Result<()> {
        if self.engine.player().is_empty() {
            println!("(no steps recorded)");
            return Ok(());
        }
        if let Some(speed) = speed {
            self.engine.player_mut().set_speed(speed);
        }
        let now = self.engine.clock().now_ms();
        self.engine.player_mut().play(now);

        while self.engine.player().is_playing() {
            let now = self.engine.clock().now_ms();
            if self.engine.player_mut().tick(now) {
                self.print_current_step()?;
            }
            thread::sleep(Duration::from_millis(DRAIN_POLL_MS));
        }
        Ok(())
    }
}
