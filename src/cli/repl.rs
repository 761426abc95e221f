// src/cli/repl.rs

use crate::abb::Library;
use crate::assistant::ChatBackend;
use crate::cli::dispatch::Dispatcher;
use crate::cli::helper::ReplHelper;
use crate::config::API_KEY_VAR;
use crate::error::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

const HISTORY_FILE: &str = "history.txt";
const PROMPT: &str = "\n> ";
pub const GOODBYE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Terminated,
}

/// Line-at-a-time evaluator; owns the running/terminated state.
pub struct Repl<'a, B> {
    dispatcher: Dispatcher<'a, B>,
    state: ReplState,
}

impl<'a, B: ChatBackend> Repl<'a, B> {
    pub fn new(dispatcher: Dispatcher<'a, B>) -> Self {
        Self { dispatcher, state: ReplState::Running }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    /// Evaluates one input line. `None` means nothing should be printed.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        if self.state == ReplState::Terminated {
            return None;
        }
        let first = line.split_whitespace().next()?.to_lowercase();

        match first.as_str() {
            "exit" | "quit" => {
                self.state = ReplState::Terminated;
                Some(GOODBYE.to_string())
            }
            "help" => Some(self.dispatcher.registry().summary()),
            _ => self.dispatcher.dispatch(line).await,
        }
    }

    pub fn end_of_input(&mut self) {
        self.state = ReplState::Terminated;
    }
}

fn get_history_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("automation-helper");
    std::fs::create_dir_all(&path).ok();
    path.push(HISTORY_FILE);
    path
}

fn print_banner<B: ChatBackend>(dispatcher: &Dispatcher<'_, B>) {
    println!("Welcome to Automation Helper CLI!");
    if !dispatcher.assistant().is_configured() {
        println!("Warning: {} not set. The 'ai' command is unavailable.", API_KEY_VAR);
    }
    println!("Type 'help' for available commands or 'exit' to quit");
}

pub async fn run_interactive<B: ChatBackend>(dispatcher: Dispatcher<'_, B>, library: &Library) -> Result<()> {
    info!("Starting interactive session.");

    let helper = ReplHelper::new(dispatcher.registry(), library);
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(helper));
    let history_path = get_history_path();
    if let Err(e) = rl.load_history(&history_path) {
        debug!("No command history loaded from {:?}: {}", history_path, e);
    }

    print_banner(&dispatcher);

    let mut repl = Repl::new(dispatcher);
    while repl.state() == ReplState::Running {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        warn!("Failed to add line to history: {}", e);
                    }
                }
                if let Some(output) = repl.handle_line(&line).await {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                repl.end_of_input();
            }
            Err(err) => {
                error!("Readline error: {:?}", err);
                eprintln!("Input Error: {}", err);
                repl.end_of_input();
            }
        }
    }

    if let Err(e) = rl.save_history(&history_path) {
        error!("Failed to save command history to {:?}: {}", history_path, e);
    }

    info!("Exiting interactive session.");
    Ok(())
}
