use colored::Colorize;

use crate::parser::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{}", error.to_string().red());
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Captures the printed output.
    /// Clones share the same buffers, so a clone may be inspected after the parser consumes the original.
    #[derive(Clone, Default)]
    pub(crate) struct InMemoryInterface {
        message: Rc<RefCell<Option<Vec<String>>>>,
        error: Rc<RefCell<Option<String>>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            let mut output = self.message.borrow_mut();

            match output.as_mut() {
                Some(messages) => messages.push(message),
                None => {
                    output.replace(vec![message]);
                }
            }
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            let message = message.borrow_mut().take();
            let error = error.borrow_mut().take();
            (message.map(|messages| messages.join("\n")), error)
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }
    }

    #[test]
    fn in_memory_interface() {
        let interface = InMemoryInterface::default();
        let inspect = interface.clone();
        interface.print("a".to_string());
        interface.print("b".to_string());
        interface.print_error(ParseError::InvalidOption {
            token: "-x".to_string(),
        });
        drop(interface);

        assert_eq!(
            inspect.consume(),
            (
                Some("a\nb".to_string()),
                Some("-x is not a supported option".to_string())
            )
        );
    }
}
