use ocean_core::{CategoryFilter, HistoryId, QueryCategory};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Chat(String),
    Ingest(String),
    /// Zero-based quick query index.
    Quick(usize),
    /// Submit the current chat input as is.
    Send,
    Search(String),
    Category(CategoryFilter),
    Star(HistoryId),
    ShowChat,
    ShowJobs,
    ShowHistory,
    ShowStatus,
    Help,
    Quit,
    Invalid(String),
}

/// Parses an input line. Blank lines yield `None`; anything not starting
/// with `/` is chat text.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Some(Command::Chat(line.trim_end_matches(['\r', '\n']).to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "ingest" => Command::Ingest(arg.to_string()),
        "quick" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Quick(n - 1),
            _ => Command::Invalid(format!("/quick expects a number from the list, got {arg:?}")),
        },
        "send" => Command::Send,
        "search" => Command::Search(arg.to_string()),
        "category" => {
            if arg.is_empty() || arg.eq_ignore_ascii_case("all") {
                Command::Category(CategoryFilter::All)
            } else {
                match QueryCategory::from_label(arg) {
                    Some(category) => Command::Category(CategoryFilter::Only(category)),
                    None => Command::Invalid(format!("unknown category {arg:?}")),
                }
            }
        }
        "star" => match arg.parse::<HistoryId>() {
            Ok(id) => Command::Star(id),
            Err(_) => Command::Invalid(format!("/star expects a history id, got {arg:?}")),
        },
        "chat" => Command::ShowChat,
        "jobs" => Command::ShowJobs,
        "history" => Command::ShowHistory,
        "status" => Command::ShowStatus,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command /{other}; try /help")),
    };
    Some(command)
}

pub const HELP: &str = "\
Commands:
  <text>               ask OceanGPT
  /quick <n>           put suggested query n in the input
  /send                ask the current input
  /ingest <path>       queue a NetCDF file for processing
  /jobs                show the processing queue
  /search <term>       filter query history
  /category <name|all> filter history by category
  /star <id>           toggle a star on a history entry
  /history             show query history
  /status              show system status
  /chat                show the conversation
  /quit                leave";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(
            parse_line("What is the salinity?\n"),
            Some(Command::Chat("What is the salinity?".to_string()))
        );
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn commands_take_trimmed_arguments() {
        assert_eq!(
            parse_line("/ingest   /data/ocean/ARGO_2024_temperature.nc "),
            Some(Command::Ingest("/data/ocean/ARGO_2024_temperature.nc".to_string()))
        );
        assert_eq!(parse_line("/ingest"), Some(Command::Ingest(String::new())));
        assert_eq!(parse_line("/quick 1"), Some(Command::Quick(0)));
        assert_eq!(parse_line("/send"), Some(Command::Send));
        assert_eq!(
            parse_line("/category Salinity"),
            Some(Command::Category(CategoryFilter::Only(QueryCategory::Salinity)))
        );
        assert_eq!(parse_line("/category"), Some(Command::Category(CategoryFilter::All)));
        assert_eq!(parse_line("/star 3"), Some(Command::Star(3)));
        assert_eq!(parse_line("/exit"), Some(Command::Quit));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(parse_line("/quick 0"), Some(Command::Invalid(_))));
        assert!(matches!(parse_line("/star x"), Some(Command::Invalid(_))));
        assert!(matches!(parse_line("/category charts"), Some(Command::Invalid(_))));
        assert!(matches!(parse_line("/nope"), Some(Command::Invalid(_))));
    }
}
