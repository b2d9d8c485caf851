/// Command that ends the session.
pub const EXIT_COMMAND: &str = "exit";
/// Command that lists saved files.
pub const LIST_FILES_COMMAND: &str = "list files";

/// Input types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Exit,
    ListFiles,
    /// An all-digit menu selection.
    Option(String),
    Text(String),
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }
    if input.eq_ignore_ascii_case(EXIT_COMMAND) {
        return Input::Exit;
    }
    if input.eq_ignore_ascii_case(LIST_FILES_COMMAND) {
        return Input::ListFiles;
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        return Input::Option(input.to_string());
    }

    Input::Text(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_exit_any_case() {
        assert_eq!(parse_input("exit"), Input::Exit);
        assert_eq!(parse_input("EXIT"), Input::Exit);
        assert_eq!(parse_input("  Exit \n"), Input::Exit);
    }

    #[test]
    fn test_parse_list_files() {
        assert_eq!(parse_input("list files"), Input::ListFiles);
        assert_eq!(parse_input("List Files"), Input::ListFiles);
    }

    #[test]
    fn test_parse_digits_are_options() {
        assert_eq!(parse_input("1"), Input::Option("1".to_string()));
        assert_eq!(parse_input("42"), Input::Option("42".to_string()));
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  Bonjour le monde "),
            Input::Text("Bonjour le monde".to_string())
        );
        assert_eq!(parse_input("1a"), Input::Text("1a".to_string()));
        assert_eq!(parse_input("list"), Input::Text("list".to_string()));
    }
}
