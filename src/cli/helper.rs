// src/cli/helper.rs
use crate::abb::Library;
use crate::cli::dispatch::{Registry, ABB_SUBCOMMANDS};
use crate::sensor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper, Result as RustylineResult};

// Handled by the REPL itself rather than the registry
const BUILTIN_COMMANDS: [&str; 3] = ["help", "exit", "quit"];

#[derive(Helper)]
pub struct ReplHelper {
    top_level: Vec<String>,
    command_keys: Vec<String>,
    topics: Vec<String>,
}

impl ReplHelper {
    pub fn new(registry: &Registry, library: &Library) -> Self {
        let mut top_level: Vec<String> = registry
            .names()
            .into_iter()
            .chain(BUILTIN_COMMANDS)
            .map(str::to_string)
            .collect();
        top_level.sort();
        Self {
            top_level,
            command_keys: library.commands.keys().into_iter().map(str::to_string).collect(),
            topics: library.quickref.keys().into_iter().map(str::to_string).collect(),
        }
    }

    /// Completion candidates for the word under the cursor, with the byte offset it starts at.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let mut words: Vec<&str> = before.split_whitespace().collect();
        let partial = if before.ends_with(char::is_whitespace) || before.is_empty() {
            ""
        } else {
            words.pop().unwrap_or("")
        };
        let start = pos - partial.len();

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let pool: Vec<&str> = match lowered.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => self.top_level.iter().map(String::as_str).collect(),
            ["abb"] => ABB_SUBCOMMANDS.to_vec(),
            ["abb", "command"] => self.command_keys.iter().map(String::as_str).collect(),
            ["abb", "quickref"] => self.topics.iter().map(String::as_str).collect(),
            ["sensor"] => sensor::SENSOR_TYPES.to_vec(),
            ["sensor", _] => sensor::ACTIONS.to_vec(),
            ["ai"] => vec!["help"],
            _ => Vec::new(),
        };

        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.starts_with(partial))
            .map(str::to_string)
            .collect();
        (start, matches)
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> RustylineResult<(usize, Vec<Self::Candidate>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|m| Pair { display: m.clone(), replacement: m })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Validator for ReplHelper {}

impl Highlighter for ReplHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> ReplHelper {
        ReplHelper::new(&Registry::new(), &Library::new())
    }

    fn complete(line: &str) -> (usize, Vec<String>) {
        helper().candidates(line, line.len())
    }

    #[test]
    fn empty_line_offers_every_top_level_word() {
        let (start, matches) = complete("");
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["abb", "ai", "exit", "help", "quit", "sensor"]);
    }

    #[test]
    fn partial_command_word() {
        assert_eq!(complete("se"), (0, vec!["sensor".to_string()]));
        assert_eq!(complete("a"), (0, vec!["abb".to_string(), "ai".to_string()]));
    }

    #[test]
    fn abb_subcommands_and_keys() {
        assert_eq!(complete("abb q"), (4, vec!["quickref".to_string()]));
        assert_eq!(complete("abb command move_a"), (12, vec!["move_abs_j".to_string()]));
        let (start, topics) = complete("ABB quickref io");
        assert_eq!(start, 13);
        assert_eq!(topics, vec!["io_handling".to_string()]);
    }

    #[test]
    fn sensor_types_and_actions() {
        assert_eq!(complete("sensor d"), (7, vec!["digital".to_string()]));
        assert_eq!(complete("sensor analog "), (14, vec!["when_on".to_string()]));
    }

    #[test]
    fn nothing_past_the_last_argument() {
        assert_eq!(complete("sensor digital when_on "), (23, Vec::<String>::new()));
        assert_eq!(complete("ai help how"), (8, Vec::<String>::new()));
    }

    #[test]
    fn cursor_in_middle_of_line_uses_text_before_it() {
        let (start, matches) = helper().candidates("ab command", 2);
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["abb".to_string()]);
    }
}
