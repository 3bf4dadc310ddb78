//! Pure command interpreter for the portfolio terminal.
//!
//! No signals, no browser. The component feeds it the raw input line (plus a
//! preformatted clock string for `date`) and renders whatever comes back.

/// Visual weight of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTone {
    Normal,
    Muted,
    Accent,
    Error,
}

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub tone: LineTone,
}

impl OutputLine {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: LineTone::Normal,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: LineTone::Muted,
        }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: LineTone::Accent,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: LineTone::Error,
        }
    }
}

/// What the shell should do beyond printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    None,
    /// Wipe the transcript.
    Clear,
    /// Open another desktop window by id.
    OpenWindow(&'static str),
}

/// Interpreter result: lines to print plus an optional shell effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<OutputLine>,
    pub effect: CommandEffect,
}

impl CommandResult {
    fn print(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            effect: CommandEffect::None,
        }
    }

    fn with_effect(lines: Vec<OutputLine>, effect: CommandEffect) -> Self {
        Self { lines, effect }
    }
}

/// ASCII banner printed when the terminal mounts.
pub const BANNER: &[&str] = &[
    r"  ____  _____ _____ ____   ___     ___  ____  ",
    r" |  _ \| ____|_   _|  _ \ / _ \   / _ \/ ___| ",
    r" | |_) |  _|   | | | |_) | | | | | | | \___ \ ",
    r" |  _ <| |___  | | |  _ <| |_| | | |_| |___) |",
    r" |_| \_\_____| |_| |_| \_\\___/   \___/|____/ ",
    "",
    "Type 'help' to see available commands.",
];

/// Interprets one input line. `clock` is the preformatted local date string
/// printed by `date`.
pub fn interpret(input: &str, clock: &str) -> CommandResult {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "" => CommandResult::print(Vec::new()),
        "help" => CommandResult::print(vec![
            OutputLine::accent("Available commands:"),
            OutputLine::normal("  help        show this list"),
            OutputLine::normal("  clear       clear the screen"),
            OutputLine::normal("  resume      open my resume"),
            OutputLine::normal("  projects    open the project explorer"),
            OutputLine::normal("  game        play Pac-Man"),
            OutputLine::normal("  skills      what I work with"),
            OutputLine::normal("  contact     how to reach me"),
            OutputLine::normal("  echo <txt>  print text"),
            OutputLine::normal("  date        print the current date"),
        ]),
        "clear" => CommandResult::with_effect(Vec::new(), CommandEffect::Clear),
        "resume" => CommandResult::with_effect(
            vec![OutputLine::normal("Opening resume...")],
            CommandEffect::OpenWindow("notepad"),
        ),
        "projects" => CommandResult::with_effect(
            vec![OutputLine::normal("Opening project explorer...")],
            CommandEffect::OpenWindow("explorer"),
        ),
        "game" => CommandResult::with_effect(
            vec![OutputLine::normal("Loading Pac-Man...")],
            CommandEffect::OpenWindow("pacman"),
        ),
        "skills" => CommandResult::print(vec![
            OutputLine::accent("Skills"),
            OutputLine::normal("  Languages:   Rust, TypeScript, Python, SQL"),
            OutputLine::normal("  Frontend:    Leptos, React, WebAssembly"),
            OutputLine::normal("  Backend:     Axum, PostgreSQL, Redis"),
            OutputLine::normal("  Tooling:     Linux, Docker, CI pipelines"),
        ]),
        "contact" => CommandResult::print(vec![
            OutputLine::accent("Contact"),
            OutputLine::normal("  email:    hello@retrofolio.dev"),
            OutputLine::normal("  github:   github.com/retrofolio"),
            OutputLine::normal("  linkedin: linkedin.com/in/retrofolio"),
        ]),
        "echo" => CommandResult::print(vec![OutputLine::normal(rest)]),
        "date" => CommandResult::print(vec![OutputLine::normal(clock)]),
        "sudo" => CommandResult::print(vec![OutputLine::error(
            "Permission denied: nice try.",
        )]),
        unknown => CommandResult::print(vec![OutputLine::error(format!(
            "Command not found: {unknown}. Type 'help' for a list."
        ))]),
    }
}

/// How many submitted commands arrow-key history retains.
pub const HISTORY_CAPACITY: usize = 10;

/// Arrow-key command history with a navigation cursor.
///
/// The cursor resets after every submission; `previous` walks back from the
/// newest entry, `next` walks forward and finally returns to an empty prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted command, dropping the oldest past capacity.
    pub fn push(&mut self, command: &str) {
        if command.trim().is_empty() {
            self.cursor = None;
            return;
        }
        self.entries.push(command.to_string());
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
        }
        self.cursor = None;
    }

    /// Steps to the previous (older) entry, if any.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next_cursor = match self.cursor {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(at) => at - 1,
        };
        self.cursor = Some(next_cursor);
        self.entries.get(next_cursor).map(String::as_str)
    }

    /// Steps to the next (newer) entry; `None` means back at the live prompt.
    pub fn next(&mut self) -> Option<&str> {
        let at = self.cursor?;
        if at + 1 >= self.entries.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(at + 1);
        self.entries.get(at + 1).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn help_lists_every_command() {
        let result = interpret("help", "");
        assert_eq!(result.effect, CommandEffect::None);
        let text: Vec<&str> = result.lines.iter().map(|l| l.text.as_str()).collect();
        for command in [
            "help", "clear", "resume", "projects", "game", "skills", "contact", "echo", "date",
        ] {
            assert!(
                text.iter().any(|line| line.contains(command)),
                "help output missing {command}"
            );
        }
    }

    #[test]
    fn launcher_commands_open_their_windows() {
        assert_eq!(
            interpret("resume", "").effect,
            CommandEffect::OpenWindow("notepad")
        );
        assert_eq!(
            interpret("projects", "").effect,
            CommandEffect::OpenWindow("explorer")
        );
        assert_eq!(
            interpret("game", "").effect,
            CommandEffect::OpenWindow("pacman")
        );
    }

    #[test]
    fn clear_requests_a_transcript_wipe() {
        let result = interpret("  clear  ", "");
        assert_eq!(result.effect, CommandEffect::Clear);
        assert_eq!(result.lines, Vec::new());
    }

    #[test]
    fn echo_prints_the_rest_of_the_line() {
        let result = interpret("echo hello retro world", "");
        assert_eq!(result.lines, vec![OutputLine::normal("hello retro world")]);
    }

    #[test]
    fn date_prints_the_supplied_clock() {
        let result = interpret("date", "Mon Jan 01 2024");
        assert_eq!(result.lines, vec![OutputLine::normal("Mon Jan 01 2024")]);
    }

    #[test]
    fn sudo_is_denied_and_unknown_commands_error() {
        assert_eq!(interpret("sudo rm -rf /", "").lines[0].tone, LineTone::Error);
        let unknown = interpret("frobnicate", "");
        assert_eq!(unknown.lines[0].tone, LineTone::Error);
        assert!(unknown.lines[0].text.contains("frobnicate"));
    }

    #[test]
    fn empty_input_prints_nothing() {
        assert_eq!(interpret("   ", ""), CommandResult::print(Vec::new()));
    }

    #[test]
    fn history_caps_at_ten_and_navigates_both_ways() {
        let mut history = CommandHistory::new();
        for n in 0..12 {
            history.push(&format!("cmd{n}"));
        }

        // Oldest two fell off.
        assert_eq!(history.previous(), Some("cmd11"));
        assert_eq!(history.previous(), Some("cmd10"));
        for expected in (2..10).rev() {
            assert_eq!(history.previous(), Some(format!("cmd{expected}")).as_deref());
        }
        // Pinned at the oldest retained entry.
        assert_eq!(history.previous(), Some("cmd2"));

        assert_eq!(history.next(), Some("cmd3"));
        while history.next().is_some() {}
        // Past the newest entry the prompt goes live again.
        assert_eq!(history.next(), None);
    }

    #[test]
    fn blank_submissions_are_not_recorded() {
        let mut history = CommandHistory::new();
        history.push("   ");
        assert_eq!(history.previous(), None);
    }
}
