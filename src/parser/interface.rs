#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where the parser sends the help menu and error messages.
///
/// The default writes help to stdout and errors to stderr.
pub trait UserInterface {
    /// Print one line of regular output.
    fn print(&self, message: String);

    /// Print one line of error output.
    fn print_error(&self, message: String);
}

#[derive(Debug, Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Lays out a two column table: a left cell padded to a fixed width, then a wrapped description.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: usize,
    padding: usize,
    description: usize,
}

impl ColumnRenderer {
    /// Fit the description column into `total_width`, never narrower than [`MINIMUM_DESCRIPTION_WIDTH`].
    pub(crate) fn guided(indent: usize, left: usize, padding: usize, total_width: usize) -> Self {
        let non_description = indent + left + padding;
        let description = if non_description + MINIMUM_DESCRIPTION_WIDTH <= total_width {
            total_width - non_description
        } else {
            MINIMUM_DESCRIPTION_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_description} within the total {total_width}.  Selecting description: {description}.");
        }

        Self {
            indent,
            left,
            padding,
            description,
        }
    }

    pub(crate) fn render(&self, left: &str, description: &str) -> Vec<String> {
        let ColumnRenderer {
            indent,
            left: left_width,
            padding,
            description: description_width,
        } = *self;
        let mut out = Vec::default();

        for (i, part) in chunk(description, description_width).iter().enumerate() {
            let cell = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{:left_width$}{:padding$}{part}",
                "", cell, ""
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

/// Split a paragraph into lines of at most `width` characters, hyphenating words which do not fit on a line of their own.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
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
    // Width must leave room for at least one character and the hyphen.
    let increment = std::cmp::max(width, 2) - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;
    let mut right = increment;

    while right + 1 < characters.len() {
        let part: String = characters[left..right].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
        right += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;
    use std::sync::mpsc;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<Vec<String>>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error(&self, message: String) {
            self.error
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;

            (
                message.take().map(|messages| messages.join("\n")),
                error.take().map(|errors| errors.join("\n")),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
        };
        (sender, receiver)
    }

    /// Hands everything printed to a [`ReceiverInterface`], which can be read once this is dropped.
    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
            self.error_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_error(&self, message: String) {
            self.error_tx.send(Some(message)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let ReceiverInterface {
                message_rx,
                error_rx,
            } = self;

            (drain(message_rx), drain(error_rx))
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }

        pub(crate) fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.unwrap()
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Some(message) = receiver.recv().unwrap() {
            values.push(message);
        }

        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}
