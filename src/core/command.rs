//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Go(String),
    Back,
    Home,

    // Shell
    Location(Option<String>),
    ResetMenu,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "go" | "open" | "cd" => {
            if let Some(path) = args {
                Command::Go(path)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "back" | "b" => Command::Back,
        "home" => Command::Home,

        "location" | "loc" => Command::Location(args),
        "reset-menu" | "reset" => Command::ResetMenu,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
