//! # MenuLoop
//!
//! A Rust library for building interactive console menus with robust input
//! validation, bounded line reading, confirmation gating and handler dispatch.
//!
//! ## Features
//!
//! (All feature versions)
//! - **Input Sanitization & Validation** - Composable filters for digits-only
//!   input, numeric ranges, exact matches and primitive type checks
//! - **Bounded Terminal Input** - Line reading that keeps at most a fixed
//!   number of bytes and discards the rest of an oversized line
//! - **Menu Engine** - Numbered menus with a y/n confirmation gate, per-item
//!   handlers and a loop that runs until an item asks to exit
//!
//! ("json" feature)
//! - **JSON Transcripts** - Menu events serialized as one JSON record per line
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! menuloop = "0.1"
//! menuloop = { version = "0.1", features = ["json"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Validated input
//!
//! ```rust,no_run
//! use menuloop::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//!
//! // Re-prompts until the answer is a number between 0 and 9.
//! let retries = terminal
//!     .ask("How many retries? (0-9): ", &[Sanitize::Digits, Sanitize::IsBetween(0, 9)])
//!     .unwrap();
//! println!("Retries: {retries}");
//! ```
//!
//! ### A complete menu
//!
//! ```rust,no_run
//! use menuloop::menu::{Menu, MenuAction, MenuContext, MenuOutcome};
//! use menuloop::menu_items;
//! use menuloop::utils::{Terminal, TerminalError};
//!
//! struct Greet;
//!
//! impl MenuAction<()> for Greet {
//!     fn label(&self) -> &str {
//!         "Say hello"
//!     }
//!
//!     fn run(&self, ctx: &mut MenuContext<'_, ()>) -> Result<MenuOutcome, TerminalError> {
//!         ctx.terminal.say("Hello!")?;
//!         Ok(MenuOutcome::Continue)
//!     }
//! }
//!
//! struct Quit;
//!
//! impl MenuAction<()> for Quit {
//!     fn label(&self) -> &str {
//!         "Exit"
//!     }
//!
//!     fn run(&self, _ctx: &mut MenuContext<'_, ()>) -> Result<MenuOutcome, TerminalError> {
//!         Ok(MenuOutcome::Exit)
//!     }
//! }
//!
//! let mut terminal = Terminal::stdio();
//! let menu = Menu::new(()).with_items(menu_items!(Greet, Quit));
//! menu.run(&mut terminal).unwrap();
//! ```
//!
//! ### Recording a transcript
//!
//! ```rust,no_run
//! use menuloop::menu::{Menu, TextFormatter, Transcript};
//! use std::fs::File;
//!
//! let sink = File::create("menu-events.log").unwrap();
//! let menu = Menu::new(())
//!     .with_transcript(Transcript::new(Box::new(TextFormatter), Box::new(sink)));
//! ```
//!
//! ## Architecture
//!
//! The library is designed with modularity and composability in mind:
//!
//! - **`utils`** - Input sanitization filters and the bounded terminal reader
//! - **`menu`** - The menu engine: items, confirmation gate, dispatch loop
//! - **`menu::formatter`** - Pluggable transcript formatting for menu events
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, E>` types for safe error
//! handling. Invalid *input* is never an error: the terminal re-prompts until
//! a filter chain accepts the answer. Errors are reserved for a closed input
//! stream, I/O failures and building a menu without items:
//!
//! ```rust,no_run
//! use menuloop::menu::{Menu, MenuError};
//! use menuloop::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! match Menu::new(()).run(&mut terminal) {
//!     Ok(_) => println!("done"),
//!     Err(MenuError::EmptyMenu) => eprintln!("the menu needs at least one item"),
//!     Err(e) => eprintln!("menu stopped early: {e}"),
//! }
//! ```
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod menu;

pub mod utils;
