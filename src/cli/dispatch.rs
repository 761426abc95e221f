// src/cli/dispatch.rs

use crate::abb::{Library, Lookup};
use crate::assistant::{Assistant, ChatBackend};
use crate::error::AssistantError;
use crate::sensor;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

pub const ABB_USAGE: &str = "Usage: abb <topic> [subtopic]
Available topics:
1. command  - Show RAPID command details
2. quickref - Show programming reference
3. list     - List all commands and quick reference topics

Examples:
  abb command move_j     - Show MoveJ command details
  abb quickref io_handling - Show I/O handling guide
  abb list               - List all available commands";
pub const ABB_SUBCOMMANDS: [&str; 3] = ["command", "quickref", "list"];
pub const UNKNOWN_ABB_SUBCOMMAND: &str = "Unknown ABB subcommand. Available: command, quickref, list";
pub const UNKNOWN_ABB_COMMAND: &str = "Unknown ABB command. Type 'abb command' to see available commands.";
pub const UNKNOWN_TOPIC: &str = "Unknown topic. Type 'abb quickref' to see available topics.";
pub const AI_USAGE: &str = "Usage: ai help \"your question about the code\"";

/// What a registered command word routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Abb,
    Ai,
    Sensor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHandler {
    pub description: &'static str,
    pub kind: HandlerKind,
}

/// Top-level command words, fixed after construction.
#[derive(Debug)]
pub struct Registry {
    handlers: BTreeMap<&'static str, CommandHandler>,
}

impl Registry {
    pub fn new() -> Self {
        let mut handlers = BTreeMap::new();
        handlers.insert(
            "sensor",
            CommandHandler { description: "Generate sensor code", kind: HandlerKind::Sensor },
        );
        handlers.insert(
            "ai",
            CommandHandler { description: "Get AI assistance with ABB RAPID code", kind: HandlerKind::Ai },
        );
        handlers.insert(
            "abb",
            CommandHandler {
                description: "Get ABB robot programming information and examples",
                kind: HandlerKind::Abb,
            },
        );
        Self { handlers }
    }

    pub fn get(&self, name: &str) -> Option<&CommandHandler> {
        self.handlers.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    pub fn summary(&self) -> String {
        let mut out = String::from("\nAutomation Helper CLI\n====================\n\nAvailable commands:\n");
        for (name, handler) in &self.handlers {
            out.push_str(&format!("  {}: {}\n", name, handler.description));
        }
        out.push_str("\nType 'exit' to quit");
        out
    }
}

pub fn unknown_command(word: &str) -> String {
    format!("Unknown command: {}\nType 'help' for available commands", word)
}

/// Routes an input line to the matching handler and returns its text verbatim.
pub struct Dispatcher<'a, B> {
    registry: &'a Registry,
    library: &'a Library,
    assistant: &'a Assistant<B>,
}

impl<'a, B: ChatBackend> Dispatcher<'a, B> {
    pub fn new(registry: &'a Registry, library: &'a Library, assistant: &'a Assistant<B>) -> Self {
        Self { registry, library, assistant }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn assistant(&self) -> &Assistant<B> {
        self.assistant
    }

    /// Returns `None` for a blank line.
    pub async fn dispatch(&self, line: &str) -> Option<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (first, args) = tokens.split_first()?;
        let command = first.to_lowercase();

        debug!("Dispatching command: '{}', args: {:?}", command, args);

        let Some(handler) = self.registry.get(&command) else {
            return Some(unknown_command(&command));
        };
        let output = match handler.kind {
            HandlerKind::Abb => self.abb(args),
            HandlerKind::Ai => self.ai(args).await,
            HandlerKind::Sensor => sensor::generate(args),
        };
        Some(output)
    }

    fn abb(&self, args: &[&str]) -> String {
        let Some((&sub, rest)) = args.split_first() else {
            return ABB_USAGE.to_string();
        };
        let key = rest.first().copied();

        match sub {
            "command" => match self.library.commands.lookup(key) {
                Lookup::List(keys) => format!("Available commands:\n{}", keys.join(", ")),
                Lookup::Found(entry) => entry.render(),
                Lookup::Unknown => UNKNOWN_ABB_COMMAND.to_string(),
            },
            "quickref" => match self.library.quickref.lookup(key) {
                Lookup::List(keys) => format!("Available quick reference topics:\n{}", keys.join(", ")),
                Lookup::Found(entry) => entry.text.to_string(),
                Lookup::Unknown => UNKNOWN_TOPIC.to_string(),
            },
            "list" => {
                let mut out = String::from("\nABB RAPID Commands:\n================\n");
                for (_, entry) in self.library.commands.entries() {
                    out.push_str(&format!("{:<10} - {}\n", entry.name, entry.description));
                }
                out.push_str("\nQuick Reference Topics:\n================\n");
                for (key, entry) in self.library.quickref.entries() {
                    out.push_str(&format!("{:<18} - {}\n", key, entry.topic));
                }
                out
            }
            _ => UNKNOWN_ABB_SUBCOMMAND.to_string(),
        }
    }

    async fn ai(&self, args: &[&str]) -> String {
        // `ai help <question>` is the documented form; a bare `ai <question>` works too.
        let question = match args {
            ["help", rest @ ..] => rest,
            _ => args,
        };
        if question.is_empty() {
            return AI_USAGE.to_string();
        }

        match self.assistant.ask(&question.join(" ")).await {
            Ok(answer) => answer,
            Err(e @ AssistantError::MissingApiKey) => {
                warn!("AI command used without credentials");
                format!("Error: {}", e)
            }
            Err(e) => {
                error!("AI request failed: {:?}", e);
                format!("Error getting AI help: {}", e)
            }
        }
    }
}
