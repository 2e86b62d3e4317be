//! # Menu Engine
//!
//! This module implements the **console menu loop**: a numbered list of
//! options is rendered, the user's selection is read and validated, the
//! selection is confirmed with a y/n gate, and the matching handler runs.
//! The cycle repeats until a handler asks to exit.
//!
//! The engine is built around three pillars:
//!
//! - [`Menu`]: the menu itself, a builder holding the title, the items, the
//!   shared state and the runtime options
//! - [`MenuAction`]: the per-item handler trait, stored as boxed trait
//!   objects fixed when the menu is built
//! - a pluggable transcript layer for observability (see [`formatter`])
//!
//! ---
//!
//! ## Architecture Overview
//!
//! ```text
//! +------------------------------------------------------+
//! |                     User Code                        |
//! |     (defines state, items and handler behavior)      |
//! +------------------------------+-----------------------+
//!                                |
//!                                v
//! +------------------------------------------------------+
//! |                      Menu loop                       |
//! |   render -> prompt -> confirm -> dispatch -> pause   |
//! +------------------------------+-----------------------+
//!                |                              |
//!                v                              v
//! +-------------------------+    +-------------------------+
//! |        Terminal         |    |       Transcript        |
//! | bounded reads, Sanitize |    |  EventRecord formatting |
//! +-------------------------+    +-------------------------+
//! ```
//!
//! Handlers never see the loop; they receive a [`MenuContext`] carrying the
//! shared state, the terminal and their own position in the list, and answer
//! with a [`MenuOutcome`].
//!
//! ## Selection and Confirmation
//!
//! The option prompt accepts digit strings only, bounded to
//! [`OPTION_INPUT_LIMIT`] bytes, and re-prompts until the number falls in
//! `1..=N`. When the confirmation gate is enabled (the default), the handler
//! runs only after the user answers `y`; answering `n` pauses and returns to
//! the menu without dispatching. Exactly one handler runs per accepted
//! selection.
//!
//! ## Exiting
//!
//! A handler returns [`MenuOutcome::Exit`] to stop the loop. [`Menu::run`]
//! then hands the shared state back to the caller; the library never
//! terminates the process itself.
//!
//! # Example: end-to-end usage
//!
//! ```rust,no_run
//! use menuloop::menu::{Menu, MenuAction, MenuContext, MenuOptions, MenuOutcome};
//! use menuloop::menu_items;
//! use menuloop::utils::{Terminal, TerminalError};
//!
//! struct Bump;
//!
//! impl MenuAction<u32> for Bump {
//!     fn label(&self) -> &str {
//!         "Add one to the counter"
//!     }
//!
//!     fn run(&self, ctx: &mut MenuContext<'_, u32>) -> Result<MenuOutcome, TerminalError> {
//!         *ctx.state += 1;
//!         ctx.terminal.say(format!("The counter is now: {}", ctx.state))?;
//!         Ok(MenuOutcome::Continue)
//!     }
//! }
//!
//! struct Quit;
//!
//! impl MenuAction<u32> for Quit {
//!     fn label(&self) -> &str {
//!         "Exit"
//!     }
//!
//!     fn run(&self, _ctx: &mut MenuContext<'_, u32>) -> Result<MenuOutcome, TerminalError> {
//!         Ok(MenuOutcome::Exit)
//!     }
//! }
//!
//! let mut terminal = Terminal::stdio();
//! let counter = Menu::new(0u32)
//!     .with_title("Counter")
//!     .with_options(MenuOptions::default())
//!     .with_items(menu_items!(Bump, Quit))
//!     .run(&mut terminal)
//!     .unwrap();
//! println!("Final counter: {counter}");
//! ```

use crate::utils::sanitize::Sanitize;
use crate::utils::terminal::{Terminal, TerminalError};
use std::error::Error;
use std::fmt::Display;

pub mod formatter;

cfg_if::cfg_if! {
    if #[cfg(feature = "json")] {
        pub use formatter::{
            EventFormatter, EventKind, EventRecord, JsonFormatter, TextFormatter, Transcript,
        };
    } else {
        pub use formatter::{EventFormatter, EventKind, EventRecord, TextFormatter, Transcript};
    }
}

/// Bytes kept when reading a menu option number. Seven digits cover menus
/// with up to 9,999,999 items.
pub const OPTION_INPUT_LIMIT: usize = 7;

const PAUSE_PROMPT: &str = "\n\nPress the ENTER key to see the menu again.. ";

/// Creates a `Vec<Box<dyn MenuAction<S>>>` from a list of item expressions.
///
/// # Example
/// ```rust,ignore
/// let items = menu_items!(
///     SaveNumber,
///     ShowNumber,
///     ExitProgram,
/// );
/// ```
#[macro_export]
macro_rules! menu_items {
    ($($item:expr), * $(,)?) => {{
        let items: Vec<Box<dyn $crate::menu::MenuAction<_>>> = vec![$(Box::new($item)), *];
        items
    }};
}

/// Represents a single menu item's behavior.
///
/// Implementors provide:
/// - a display [`label`](MenuAction::label), shown next to the item's
///   1-based option number,
/// - a [`run`](MenuAction::run) handler, called once per confirmed
///   selection.
///
/// Handlers are free to talk to the user through `ctx.terminal` and to
/// mutate the shared state through `ctx.state`. They report back with a
/// [`MenuOutcome`]; terminal failures propagate out of the loop via `?`.
pub trait MenuAction<S> {
    /// Returns the display string of the item.
    fn label(&self) -> &str;

    /// Executed when the user selects and confirms this item.
    fn run(&self, ctx: &mut MenuContext<'_, S>) -> Result<MenuOutcome, TerminalError>;
}

/// Contextual information supplied to each handler during dispatch.
pub struct MenuContext<'a, S> {
    /// State shared by every item of the menu.
    pub state: &'a mut S,
    /// The terminal the menu is running on.
    pub terminal: &'a mut Terminal,
    /// Zero-based position of the dispatched item in the menu.
    pub index: usize,
}

/// What the loop should do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Show the menu again.
    Continue,
    /// Stop the loop and hand the state back to the caller.
    Exit,
}

/// Runtime configuration for the menu loop.
///
/// # Defaults
/// ```rust,ignore
/// MenuOptions {
///     confirm_selection: true,
///     pause_after_action: true,
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MenuOptions {
    /// Require a y/n confirmation before dispatching a selected item.
    pub confirm_selection: bool,
    /// Wait for ENTER before rendering the menu again after a handler ran.
    pub pause_after_action: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            confirm_selection: true,
            pause_after_action: true,
        }
    }
}

/// Represents an error that ends a menu run early.
#[derive(Debug)]
pub enum MenuError {
    /// The menu was started without any items.
    EmptyMenu,
    /// The terminal failed or its input stream was closed.
    Terminal(TerminalError),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMenu => write!(f, "The menu has no items to display"),
            Self::Terminal(e) => write!(f, "{}", e),
        }
    }
}

impl Error for MenuError {}

impl From<TerminalError> for MenuError {
    fn from(e: TerminalError) -> Self {
        MenuError::Terminal(e)
    }
}

/// A console menu: a titled, ordered list of items over a shared state `S`.
///
/// Built with chained `with_*` calls and consumed by [`Menu::run`], which
/// returns the final state once an item exits the loop.
pub struct Menu<S> {
    title: String,
    options: MenuOptions,
    items: Vec<Box<dyn MenuAction<S>>>,
    state: S,
    transcript: Option<Transcript>,
}

impl<S> Menu<S> {
    /// Creates an empty menu titled "Menu" over the given state.
    pub fn new(state: S) -> Self {
        Self {
            title: "Menu".to_string(),
            options: MenuOptions::default(),
            items: Vec::new(),
            state,
            transcript: None,
        }
    }

    /// Sets the heading rendered above the items.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets custom configuration of the menu loop.
    pub fn with_options(mut self, options: MenuOptions) -> Self {
        self.options = options;
        self
    }

    /// Appends items, usually built with the [`menu_items!`](crate::menu_items) macro.
    pub fn with_items(mut self, items: Vec<Box<dyn MenuAction<S>>>) -> Self {
        self.items.extend(items);
        self
    }

    /// Appends a single item.
    pub fn add_item(mut self, item: Box<dyn MenuAction<S>>) -> Self {
        self.items.push(item);
        self
    }

    /// Attaches a transcript that records every selection, confirmation
    /// outcome and dispatch of this menu.
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    /// Returns the number of items currently on the menu.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Runs the menu loop on the given terminal until an item returns
    /// [`MenuOutcome::Exit`], then returns the final state.
    ///
    /// Fails with [`MenuError::EmptyMenu`] when no items were added, and
    /// with [`MenuError::Terminal`] when the terminal fails or its input
    /// ends while an answer is still needed.
    pub fn run(mut self, terminal: &mut Terminal) -> Result<S, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::EmptyMenu);
        }

        let count = self.items.len();
        let option_prompt =
            format!("Please enter a valid option (1 - {count}) (only numeric characters allowed): ");
        let option_filters = [Sanitize::Digits, Sanitize::IsBetween(1, count as isize)];

        loop {
            self.render(terminal)?;

            terminal.say("")?;
            let answer = terminal.ask_bounded(&option_prompt, &option_filters, OPTION_INPUT_LIMIT)?;
            // The filters guarantee a digit string inside 1..=count.
            let choice: usize = answer.parse().unwrap_or_default();
            let label = self.items[choice - 1].label().to_string();
            self.emit(EventRecord::new(EventKind::Selected, choice, &label));

            if self.options.confirm_selection {
                terminal.say("")?;
                let confirm_prompt = format!(
                    "You selected option number {choice} (\"{label}\"). Do you want to proceed (only 'y' and 'n' allowed): "
                );

                if !terminal.confirm(&confirm_prompt)? {
                    self.emit(EventRecord::new(EventKind::Declined, choice, &label));
                    terminal.pause(PAUSE_PROMPT)?;
                    continue;
                }
            }

            let outcome = {
                let item = &self.items[choice - 1];
                let mut ctx = MenuContext {
                    state: &mut self.state,
                    terminal: &mut *terminal,
                    index: choice - 1,
                };
                item.run(&mut ctx)?
            };

            match outcome {
                MenuOutcome::Continue => {
                    self.emit(EventRecord::new(EventKind::Dispatched, choice, &label));
                    if self.options.pause_after_action {
                        terminal.pause(PAUSE_PROMPT)?;
                    }
                }
                MenuOutcome::Exit => {
                    self.emit(EventRecord::new(EventKind::Exited, choice, &label));
                    return Ok(self.state);
                }
            }
        }
    }

    fn render(&self, terminal: &mut Terminal) -> Result<(), TerminalError> {
        let underline = "-".repeat(self.title.chars().count());

        terminal.say("\n")?;
        terminal.say(&underline)?;
        terminal.say(&self.title)?;
        terminal.say(&underline)?;
        terminal.say("")?;

        for (position, item) in self.items.iter().enumerate() {
            terminal.say(format!("{}. {}", position + 1, item.label()))?;
        }
        Ok(())
    }

    fn emit(&mut self, record: EventRecord) {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.record(&record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{self, Cursor, Write};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scripted(input: &str) -> (Terminal, SharedBuf) {
        let out = SharedBuf::default();
        (
            Terminal::new(Cursor::new(input.to_string()), out.clone()),
            out,
        )
    }

    struct Bump;

    impl MenuAction<u32> for Bump {
        fn label(&self) -> &str {
            "Add one to the counter"
        }

        fn run(&self, ctx: &mut MenuContext<'_, u32>) -> Result<MenuOutcome, TerminalError> {
            *ctx.state += 1;
            ctx.terminal
                .say(format!("The counter is now: {}", ctx.state))?;
            Ok(MenuOutcome::Continue)
        }
    }

    struct Quit;

    impl MenuAction<u32> for Quit {
        fn label(&self) -> &str {
            "Exit"
        }

        fn run(&self, ctx: &mut MenuContext<'_, u32>) -> Result<MenuOutcome, TerminalError> {
            ctx.terminal
                .say(format!("\n\nYou chose the option number: {}", ctx.index + 1))?;
            Ok(MenuOutcome::Exit)
        }
    }

    fn counter_menu() -> Menu<u32> {
        Menu::new(0u32).with_items(menu_items!(Bump, Quit))
    }

    #[test]
    fn test_menu_runs_until_exit() {
        // Invalid option, then bump (confirmed), pause, then exit (confirmed).
        let (mut terminal, out) = scripted("abc\n1\ny\n\n2\ny\n");
        let counter = counter_menu().run(&mut terminal).unwrap();
        assert_eq!(counter, 1);

        let output = out.contents();
        assert!(output.contains("----\nMenu\n----"));
        assert!(output.contains("1. Add one to the counter"));
        assert!(output.contains("2. Exit"));
        assert!(output.contains("The value must contain only digits (0-9), try again!"));
        assert!(output.contains("You selected option number 1 (\"Add one to the counter\")"));
        assert!(output.contains("The counter is now: 1"));
        assert!(output.contains("Press the ENTER key to see the menu again.. "));
        assert!(output.contains("You chose the option number: 2"));
    }

    #[test]
    fn test_menu_rejects_out_of_range_options() {
        let (mut terminal, out) = scripted("9\n0\n2\ny\n");
        let counter = counter_menu().run(&mut terminal).unwrap();
        assert_eq!(counter, 0);
        assert!(out
            .contents()
            .contains("The value is not between 1 and 2, try again!"));
    }

    #[test]
    fn test_menu_declined_confirmation_skips_the_handler() {
        // Select bump but answer n, then exit.
        let (mut terminal, out) = scripted("1\nn\n\n2\ny\n");
        let counter = counter_menu().run(&mut terminal).unwrap();
        assert_eq!(counter, 0);
        assert!(!out.contents().contains("The counter is now"));
    }

    #[test]
    fn test_menu_confirmation_reprompts_on_other_answers() {
        let (mut terminal, out) = scripted("2\nyes\nY\ny\n");
        counter_menu().run(&mut terminal).unwrap();
        assert!(out
            .contents()
            .contains("The value doesn't match with the options: y, n, try again!"));
    }

    #[test]
    fn test_menu_without_confirmation_dispatches_directly() {
        let options = MenuOptions {
            confirm_selection: false,
            pause_after_action: false,
        };
        let (mut terminal, out) = scripted("1\n1\n2\n");
        let counter = counter_menu()
            .with_options(options)
            .run(&mut terminal)
            .unwrap();
        assert_eq!(counter, 2);
        assert!(!out.contents().contains("Do you want to proceed"));
    }

    #[test]
    fn test_empty_menu_is_an_error() {
        let (mut terminal, _) = scripted("");
        let res = Menu::new(0u32).run(&mut terminal);
        assert!(matches!(res, Err(MenuError::EmptyMenu)));
    }

    #[test]
    fn test_menu_propagates_closed_input() {
        let (mut terminal, _) = scripted("1\n");
        let res = counter_menu().run(&mut terminal);
        assert!(matches!(res, Err(MenuError::Terminal(TerminalError::Eof))));
    }

    #[test]
    fn test_menu_custom_title_rendering() {
        let (mut terminal, out) = scripted("1\ny\n");
        Menu::new(0u32)
            .with_title("Main menu")
            .with_items(menu_items!(Quit))
            .run(&mut terminal)
            .unwrap();
        assert!(out.contents().contains("---------\nMain menu\n---------"));
    }

    #[test]
    fn test_menu_records_a_transcript() {
        let sink = SharedBuf::default();
        let transcript = Transcript::new(Box::new(TextFormatter), Box::new(sink.clone()));

        let (mut terminal, _) = scripted("1\nn\n\n1\ny\n\n2\ny\n");
        counter_menu()
            .with_transcript(transcript)
            .run(&mut terminal)
            .unwrap();

        let recorded = sink.contents();
        assert!(recorded.contains("selected option 1 (\"Add one to the counter\")"));
        assert!(recorded.contains("declined option 1 (\"Add one to the counter\")"));
        assert!(recorded.contains("dispatched option 1 (\"Add one to the counter\")"));
        assert!(recorded.contains("exited option 2 (\"Exit\")"));
    }
}
