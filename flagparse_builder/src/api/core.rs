use crate::api::CliOption;
use crate::parser::{ConsoleInterface, GeneralParser, OptionParameter, Parser, Printer, UserInterface};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::CommandLineParser;
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    command: String,
    description: Option<String>,
    options: Vec<CliOption<'a>>,
}

impl<'a> std::fmt::Debug for CommandLineParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("command", &self.command)
            .field("description", &self.description)
            .field("options", &self.options)
            .finish()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: None,
            options: Vec::default(),
        }
    }

    /// Document the description for this command line parser.
    /// If repeated, only the final description will apply.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// The order of options is the order of the usage message, and the order in which flags are looked up.
    /// Declaring the same flag twice is not checked; the first declaration wins.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::{CliOption, CommandLineParser, ValueType};
    ///
    /// let mut a: u64 = 0;
    /// let mut b = false;
    /// let parser = CommandLineParser::new("program")
    ///     .add(CliOption::short("-a")
    ///         .value_type(ValueType::Integer)
    ///         .on_value(|value| a = value.as_u64().unwrap()))
    ///     .add(CliOption::long("--bee").on_value(|_| b = true))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["-a", "1", "--bee"].as_slice()).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert!(b);
    /// ```
    pub fn add(mut self, option: CliOption<'a>) -> Self {
        self.register(option);
        self
    }

    /// Register an option, returning it for inspection.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::{CliOption, CommandLineParser};
    ///
    /// let mut clp = CommandLineParser::new("program");
    /// let option = clp.register(CliOption::flags("-v", "--verbose"));
    ///
    /// assert!(!option.takes_value());
    /// assert!(!option.is_satisfied());
    /// ```
    pub fn register(&mut self, option: CliOption<'a>) -> &CliOption<'a> {
        let index = self.options.len();
        self.options.push(option);
        &self.options[index]
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[CliOption<'a>] {
        &self.options
    }

    /// The first option (in declaration order) which matches `token`.
    /// `None` means `token` is not a supported option.
    pub fn find_by_flag(&self, token: &str) -> Option<&CliOption<'a>> {
        self.options.iter().find(|option| option.matches(token))
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> GeneralParser<'a> {
        let CommandLineParser {
            command,
            description,
            options,
        } = self;
        let printer = Printer::terminal(
            command,
            description,
            options.iter().map(OptionParameter::from).collect(),
        );

        GeneralParser::new(Parser::new(options), printer, user_interface)
    }

    /// Build the command line parser.
    /// This finalizes the configuration.
    pub fn build(self) -> GeneralParser<'a> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Integer, Value, ValueType};
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::cell::RefCell;

    #[test]
    fn empty_build() {
        let clp = CommandLineParser::new("program");
        let parser = clp.build();
        parser.parse_tokens(&[]).unwrap();
    }

    #[test]
    fn register() {
        let mut clp = CommandLineParser::new("program");
        let option = clp.register(CliOption::short("-f"));
        assert_eq!(option.short_flag(), Some("-f"));
        assert_eq!(clp.options().len(), 1);
    }

    #[rstest]
    #[case("-b", Some("-b"))]
    #[case("--call", Some("-c"))]
    #[case("--all", Some("-a"))]
    #[case("-d", None)]
    #[case("call", None)]
    fn find_by_flag(#[case] token: &str, #[case] expected: Option<&str>) {
        let clp = CommandLineParser::new("program")
            .add(CliOption::flags("-a", "--all"))
            .add(CliOption::flags("-b", "--ball"))
            .add(CliOption::flags("-c", "--call"));

        assert_eq!(
            clp.find_by_flag(token).and_then(CliOption::short_flag),
            expected
        );
    }

    #[test]
    fn find_by_flag_first_declared() {
        let clp = CommandLineParser::new("program")
            .add(CliOption::flags("-a", "--all").help("first"))
            .add(CliOption::flags("-a", "--again").help("second"));

        assert_eq!(
            clp.find_by_flag("-a").and_then(CliOption::help_text),
            Some("first")
        );
    }

    #[test]
    fn add_and_parse() {
        // Setup
        let interface = InMemoryInterface::default();
        let passed: RefCell<Option<Value>> = RefCell::new(None);
        let parser = CommandLineParser::new("testey")
            .about("cool description")
            .add(
                CliOption::flags("-a", "--all")
                    .value_type(ValueType::Integer)
                    .on_value(|value| {
                        passed.borrow_mut().replace(value);
                    }),
            )
            .add(CliOption::flags("-b", "--ball"))
            .build_with_interface(Box::new(interface.clone()));

        // Execute
        let parsed = parser
            .parse_tokens(vec!["-a", "1", "--ball", "--", "trail1", "trail2"].as_slice())
            .unwrap();

        // Verify
        assert_eq!(passed.into_inner(), Some(Value::Integer(Integer::from(1u64))));
        assert_eq!(
            parsed.trailing_values(),
            &["trail1".to_string(), "trail2".to_string()]
        );
        assert_eq!(interface.consume(), (None, None));
    }

    #[test]
    fn about_help() {
        // Setup
        let interface = InMemoryInterface::default();
        let parser = CommandLineParser::new("testey")
            .about("--this will get discarded--")
            .about("cool description")
            .add(CliOption::short("-f").value_type(ValueType::String).required())
            .build_with_interface(Box::new(interface.clone()));

        // Execute
        let result = parser.parse_tokens(vec!["--help"].as_slice());

        // Verify
        assert_eq!(result, Err(0));
        let message = interface.consume_message();
        assert_contains!(message, "Usage: testey -f=STRING\ncool description\n");
        assert!(!message.contains("discarded"));
    }
}
