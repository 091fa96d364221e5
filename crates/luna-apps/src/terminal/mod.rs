//! Toy terminal over an in-memory filesystem
//!
//! Supports `help whoami pwd ls cd cat echo clear date time uname history`.
//! Command failures print a message and leave the shell usable; nothing
//! here touches the host system.

mod clock;
mod fs;

pub use clock::{date_string, time_string, Clock, LocalClock};
pub use fs::{default_tree, resolve_path, Node};

use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Login name shown in the prompt
pub const USERNAME: &str = "user";

/// Host name shown in the prompt
pub const HOSTNAME: &str = "xp-portfolio";

/// One line of terminal scrollback
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub text: String,
    /// Echoed command line (prompt plus input), as opposed to output
    pub is_command: bool,
}

/// Shell state: filesystem, working directory and scrollback
#[derive(Clone, Debug)]
pub struct Terminal<C: Clock = LocalClock> {
    root: Node,
    cwd: Vec<String>,
    history: Vec<HistoryEntry>,
    clock: C,
}

impl Default for Terminal<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal<LocalClock> {
    /// Shell in the user's home directory, reading the system clock
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl<C: Clock> Terminal<C> {
    /// Shell reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            root: default_tree(),
            cwd: vec!["home".to_string(), USERNAME.to_string()],
            history: Vec::new(),
            clock,
        }
    }

    /// Working directory as an absolute path
    pub fn cwd(&self) -> String {
        format!("/{}", self.cwd.join("/"))
    }

    /// Prompt, with the home directory shown as `~`
    pub fn prompt(&self) -> String {
        let path = self.cwd();
        let home = format!("/home/{}", USERNAME);
        let shown = match path.strip_prefix(&home) {
            Some(rest) => format!("~{}", rest),
            None => path,
        };
        format!("{}@{}:{}$", USERNAME, HOSTNAME, shown)
    }

    /// Scrollback, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Run one input line, appending the echo and output to scrollback
    pub fn execute(&mut self, input: &str) {
        let input = input.trim();
        let prior = self.history.len();
        let echo = format!("{} {}", self.prompt(), input);
        self.history.push(HistoryEntry {
            text: echo,
            is_command: true,
        });

        let mut words = input.split_whitespace();
        let Some(name) = words.next() else {
            return;
        };
        let args: Vec<&str> = words.collect();
        debug!(command = name, args = args.len(), "terminal command");

        let lines = match self.run(name, &args, prior) {
            Ok(lines) => lines,
            Err(err) => vec![err.to_string()],
        };
        self.history.extend(lines.into_iter().map(|text| HistoryEntry {
            text,
            is_command: false,
        }));
    }

    fn run(&mut self, name: &str, args: &[&str], prior: usize) -> AppResult<Vec<String>> {
        let first = args.first().copied();
        let lines = match name {
            "help" => vec![
                "Available commands:".to_string(),
                "  help, whoami, pwd, ls, cd, cat, echo, clear, date, time, uname, history".to_string(),
            ],
            "whoami" => vec![USERNAME.to_string()],
            "pwd" => vec![self.cwd()],
            "ls" => vec![self.ls(first)?],
            "cd" => {
                self.cd(first)?;
                Vec::new()
            }
            "cat" => vec![self.cat(first)?],
            "echo" => vec![args.join(" ")],
            "clear" => {
                self.history.clear();
                Vec::new()
            }
            "date" => vec![date_string(self.clock.now())],
            "time" => vec![time_string(self.clock.now())],
            "uname" => vec!["XP-Portfolio React/TS (x86_64) Web".to_string()],
            "history" => self.history[..prior].iter().map(|h| h.text.clone()).collect(),
            _ => return Err(AppError::CommandNotFound(name.to_string())),
        };
        Ok(lines)
    }

    fn ls(&self, arg: Option<&str>) -> AppResult<String> {
        let path = resolve_path(&self.cwd, arg);
        let node = self
            .root
            .lookup(&path)
            .ok_or(AppError::CannotAccess { command: "ls" })?;
        Ok(match node.names() {
            Some(names) => names.join("  "),
            None => arg.unwrap_or(".").to_string(),
        })
    }

    fn cd(&mut self, arg: Option<&str>) -> AppResult<()> {
        let path = resolve_path(&self.cwd, arg);
        let shown = arg.unwrap_or_default().to_string();
        match self.root.lookup(&path) {
            None => Err(AppError::NoSuchFileOrDirectory {
                command: "cd",
                path: shown,
            }),
            Some(node) if !node.is_dir() => Err(AppError::NotADirectory {
                command: "cd",
                path: shown,
            }),
            Some(_) => {
                self.cwd = path;
                Ok(())
            }
        }
    }

    fn cat(&self, arg: Option<&str>) -> AppResult<String> {
        let arg = arg.ok_or(AppError::MissingOperand { command: "cat" })?;
        let path = resolve_path(&self.cwd, Some(arg));
        match self.root.lookup(&path) {
            None => Err(AppError::NoSuchFile {
                command: "cat",
                path: arg.to_string(),
            }),
            Some(Node::Dir(_)) => Err(AppError::IsADirectory {
                command: "cat",
                path: arg.to_string(),
            }),
            Some(Node::File(content)) => Ok(content.to_string()),
        }
    }
}
