use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Add(String),
    Complete(i64),
    Delete(i64),
    // Usage problems, reported alongside the help text
    InsufficientArguments,
    Invalid,
}

/// Maps process arguments (including the program name) to a command.
/// The verb is matched case-insensitively; arguments after the third are ignored.
pub fn parse_args(args: &[String]) -> Result<Command> {
    if args.len() <= 1 {
        return Ok(Command::Help);
    }

    let verb = args[1].to_lowercase();
    if verb == "show" {
        return Ok(Command::Show);
    }

    let Some(arg) = args.get(2) else {
        return Ok(Command::InsufficientArguments);
    };

    let command = match verb.as_str() {
        "add" => Command::Add(arg.clone()),
        "delete" => Command::Delete(parse_id(arg)?),
        "complete" => Command::Complete(parse_id(arg)?),
        _ => Command::Invalid,
    };
    Ok(command)
}

fn parse_id(arg: &str) -> Result<i64> {
    arg.parse().map_err(|_| {
        tracing::debug!(arg, "rejected non-numeric id");
        AppError::InvalidId
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("todo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_is_help() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Command::Help);
        assert_eq!(parse_args(&[]).unwrap(), Command::Help);
    }

    #[test]
    fn show_is_case_insensitive() {
        assert_eq!(parse_args(&args(&["show"])).unwrap(), Command::Show);
        assert_eq!(parse_args(&args(&["SHOW"])).unwrap(), Command::Show);
        assert_eq!(parse_args(&args(&["sHoW", "extra"])).unwrap(), Command::Show);
    }

    #[test]
    fn help_verb_alone_is_insufficient() {
        assert_eq!(
            parse_args(&args(&["help"])).unwrap(),
            Command::InsufficientArguments
        );
        assert_eq!(
            parse_args(&args(&["add"])).unwrap(),
            Command::InsufficientArguments
        );
    }

    #[test]
    fn add_takes_description_verbatim() {
        assert_eq!(
            parse_args(&args(&["ADD", "buy milk", "ignored"])).unwrap(),
            Command::Add("buy milk".to_string())
        );
        assert_eq!(
            parse_args(&args(&["add", ""])).unwrap(),
            Command::Add(String::new())
        );
    }

    #[test]
    fn delete_and_complete_parse_ids() {
        assert_eq!(
            parse_args(&args(&["delete", "999"])).unwrap(),
            Command::Delete(999)
        );
        assert_eq!(
            parse_args(&args(&["Complete", "1"])).unwrap(),
            Command::Complete(1)
        );
    }

    #[test]
    fn non_numeric_id_is_invalid_id() {
        let err = parse_args(&args(&["delete", "abc"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidId));

        let err = parse_args(&args(&["complete", "1.5"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidId));
    }

    #[test]
    fn unknown_verb_is_invalid() {
        assert_eq!(
            parse_args(&args(&["remove", "1"])).unwrap(),
            Command::Invalid
        );
    }
}
