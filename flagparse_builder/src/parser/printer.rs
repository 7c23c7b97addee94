use terminal_size::{terminal_size, Width};

use crate::api::CliOption;
use crate::constant::*;
use crate::parser::interface::UserInterface;

pub(crate) struct OptionParameter {
    fragment: String,
    help: Option<String>,
}

impl OptionParameter {
    pub(crate) fn new(fragment: String, help: Option<String>) -> Self {
        Self { fragment, help }
    }
}

impl From<&CliOption<'_>> for OptionParameter {
    fn from(option: &CliOption<'_>) -> Self {
        OptionParameter::new(
            option.usage_fragment(),
            option.help_text().map(str::to_string),
        )
    }
}

pub(crate) struct Printer {
    command: String,
    description: Option<String>,
    options: Vec<OptionParameter>,
    terminal_width: Option<usize>,
}

const MAIN_INDENT: usize = 1;
const HELP_INDENT: usize = 5;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, Vec::default(), None)
    }

    pub(crate) fn terminal(
        command: impl Into<String>,
        description: Option<String>,
        options: Vec<OptionParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(command, description, options, terminal_width)
    }

    pub(crate) fn new(
        command: impl Into<String>,
        description: Option<String>,
        options: Vec<OptionParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            command: command.into(),
            description,
            options,
            terminal_width,
        }
    }

    fn help_width(&self) -> usize {
        let total = self.terminal_width.unwrap_or(DEFAULT_TERMINAL_WIDTH);
        std::cmp::max(total.saturating_sub(HELP_INDENT), MINIMUM_HELP_WIDTH)
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let summary = self
            .options
            .iter()
            .map(|option| option.fragment.as_str())
            .collect::<Vec<&str>>();

        if summary.is_empty() {
            user_interface.print(format!("Usage: {c}", c = self.command));
        } else {
            user_interface.print(format!(
                "Usage: {c} {s}",
                c = self.command,
                s = summary.join(" ")
            ));
        }

        if let Some(description) = &self.description {
            user_interface.print(description.clone());
        }

        let help_width = self.help_width();

        for OptionParameter { fragment, help } in &self.options {
            user_interface.print(format!("{:indent$}{fragment}", "", indent = MAIN_INDENT));

            if let Some(help) = help {
                for paragraph in help.split('\n') {
                    for line in chunk(paragraph, help_width) {
                        user_interface.print(format!("{:indent$}{line}", "", indent = HELP_INDENT));
                    }
                }
            }
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut rest: Vec<char> = word.chars().collect();

    while rest.len() > width {
        let tail = rest.split_off(increment);
        lines.push(format!("{}-", rest.iter().collect::<String>()));
        rest = tail;
    }

    current.extend(rest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueType;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[rstest]
    #[case("", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abc  def", 10, vec!["abc def"])]
    #[case("abcdefgh", 4, vec!["abc-", "def-", "gh"])]
    #[case("abcd", 4, vec!["abcd"])]
    #[case("a abcdef", 4, vec!["a", "abc-", "def"])]
    #[case("ééé ééé", 4, vec!["ééé", "ééé"])]
    fn printer_chunk(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn printer_empty() {
        // Setup
        let interface = InMemoryInterface::default();
        let printer = Printer::empty();

        // Execute
        printer.print_usage(&interface);

        // Verify
        assert_eq!(interface.consume_message(), "Usage: program");
    }

    #[test]
    fn printer_options() {
        // Setup
        let interface = InMemoryInterface::default();
        let options = vec![
            CliOption::flags("-f", "--from")
                .value_type(ValueType::String)
                .required()
                .help("The version to start from."),
            CliOption::flags("-i", "--include-all").help("Include everything.\nEven the hidden."),
            CliOption::long("--ratio").value_type(ValueType::Decimal),
        ];
        let printer = Printer::new(
            "notes",
            Some("Generate the release notes.".to_string()),
            options.iter().map(OptionParameter::from).collect(),
            Some(80),
        );

        // Execute
        printer.print_usage(&interface);

        // Verify
        assert_eq!(
            interface.consume_message(),
            r#"Usage: notes -f, --from=STRING [-i, --include-all] [--ratio=DECIMAL]
Generate the release notes.
 -f, --from=STRING
     The version to start from.
 [-i, --include-all]
     Include everything.
     Even the hidden.
 [--ratio=DECIMAL]"#
        );
    }

    #[test]
    fn printer_wraps_help() {
        // Setup
        let interface = InMemoryInterface::default();
        let options = vec![CliOption::short("-v")
            .help("one two three four five six seven eight nine ten eleven twelve")];
        let printer = Printer::new(
            "program",
            None,
            options.iter().map(OptionParameter::from).collect(),
            Some(32),
        );

        // Execute
        printer.print_usage(&interface);

        // Verify
        let message = interface.consume_message();
        assert_contains!(message, "\n     one two three four five six\n");
        assert_contains!(message, "\n     seven eight nine ten eleven\n");
        assert_contains!(message, "\n     twelve");
    }

    #[rstest]
    #[case(None, 75)]
    #[case(Some(100), 95)]
    #[case(Some(10), MINIMUM_HELP_WIDTH)]
    fn printer_help_width(#[case] terminal_width: Option<usize>, #[case] expected: usize) {
        let printer = Printer::new("program", None, Vec::default(), terminal_width);
        assert_eq!(printer.help_width(), expected);
    }
}
