//! Slash-command parsing and the command names the bot answers to.

/// Menu.
pub const CMD_START: &str = "start";
/// Usage text (same as the menu).
pub const CMD_HELP: &str = "help";
/// One-shot calculation: `/cpl <payout> <approve> [trash] [roi]`.
pub const CMD_CPL: &str = "cpl";
/// Starts the step-by-step dialog.
pub const CMD_WIZARD: &str = "wizard";

/// Reply-keyboard button that starts the wizard, same as `/wizard`.
pub const WIZARD_BUTTON: &str = "🧮 Step-by-step calculation";

/// A parsed `/name args` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// Lowercased name without the leading slash or `@botname` suffix.
    pub name: String,
    /// Everything after the first whitespace, trimmed.
    pub args: &'a str,
}

impl Command<'_> {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Parses `/name@bot args`. Returns None when the text is not a command.
pub fn parse_command(text: &str) -> Option<Command<'_>> {
    let body = text.trim_start().strip_prefix('/')?;
    let (head, args) = match body.find(char::is_whitespace) {
        Some(i) => (&body[..i], body[i..].trim()),
        None => (body, ""),
    };
    let name = head.split('@').next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    Some(Command {
        name: name.to_lowercase(),
        args,
    })
}

/// True for `/wizard` and the wizard keyboard button.
pub fn is_wizard_trigger(text: &str) -> bool {
    text.trim() == WIZARD_BUTTON || parse_command(text).is_some_and(|c| c.is(CMD_WIZARD))
}
