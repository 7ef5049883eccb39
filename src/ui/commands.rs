use crate::core::error::CommandError;
use crate::models::user::NewUser;
use crate::models::view::SortKey;

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Clear,
    Sort(SortKey),
    Next,
    Prev,
    Page(usize),
    All,
    Paged,
    Add(NewUser),
    Show(u32),
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("search"));
                }
                Command::Search(rest.to_string())
            }
            "clear" => Command::Clear,
            "sort" => Command::Sort(rest.parse()?),
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "page" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("page"));
                }
                let page = rest
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidPage(rest.to_string()))?;
                Command::Page(page)
            }
            "all" => Command::All,
            "paged" => Command::Paged,
            "add" => Command::Add(parse_new_user(rest)?),
            "show" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("show"));
                }
                let id = rest
                    .parse::<u32>()
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))?;
                Command::Show(id)
            }
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// `<name> | <username> | <email>`; empty parts are left to validation
fn parse_new_user(rest: &str) -> Result<NewUser, CommandError> {
    let parts: Vec<&str> = rest.split('|').collect();
    match parts.as_slice() {
        [name, username, email] => Ok(NewUser::new(*name, *username, *email)),
        _ => Err(CommandError::MalformedAdd),
    }
}
