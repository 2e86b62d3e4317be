mod items;

use clap::Parser;
use colored::Colorize;
use menuloop::menu::{EventFormatter, JsonFormatter, Menu, MenuOptions, TextFormatter, Transcript};
use menuloop::menu_items;
use menuloop::utils::Terminal;
use std::fs::File;
use std::path::PathBuf;
use std::process;

use crate::items::{DeleteNumber, ExitProgram, NumberStore, SaveNumber, ShowNumber, SumDigits};

/// Interactive demonstration of the menuloop crate: save a number, inspect
/// it, and exit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Write a transcript of menu events to this file.
    #[clap(long)]
    transcript: Option<PathBuf>,

    /// Format the transcript as JSON records instead of plain text.
    #[clap(long)]
    json: bool,

    /// Skip the y/n confirmation prompt after selecting an option.
    #[clap(long)]
    no_confirm: bool,
}

fn main() {
    let args = CliArgs::parse();

    banner();

    let mut menu = build_menu(!args.no_confirm);

    if let Some(path) = args.transcript.as_ref() {
        let sink = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("{}", format!("Couldn't create the transcript file: {e}").red());
                process::exit(1);
            }
        };

        let formatter: Box<dyn EventFormatter> = if args.json {
            Box::new(JsonFormatter)
        } else {
            Box::new(TextFormatter)
        };
        menu = menu.with_transcript(Transcript::new(formatter, Box::new(sink)));
    }

    let mut terminal = Terminal::stdio();
    if let Err(e) = menu.run(&mut terminal) {
        eprintln!("{}", format!("The menu stopped early: {e}").red());
        process::exit(1);
    }
}

fn build_menu(confirm_selection: bool) -> Menu<NumberStore> {
    Menu::new(NumberStore::default())
        .with_options(MenuOptions {
            confirm_selection,
            pause_after_action: true,
        })
        .with_items(menu_items!(
            SaveNumber,
            ShowNumber,
            SumDigits,
            DeleteNumber,
            ExitProgram,
        ))
}

fn banner() {
    println!(
        "------------------------------------------------------------------------------------",
    );
    println!(
        "███    ███ ███████ ███    ██ ██    ██ ██       ██████   ██████  ██████              ",
    );
    println!(
        "████  ████ ██      ████   ██ ██    ██ ██      ██    ██ ██    ██ ██   ██             ",
    );
    println!(
        "██ ████ ██ █████   ██ ██  ██ ██    ██ ██      ██    ██ ██    ██ ██████              ",
    );
    println!(
        "██  ██  ██ ██      ██  ██ ██ ██    ██ ██      ██    ██ ██    ██ ██                  ",
    );
    println!(
        "██      ██ ███████ ██   ████  ██████  ███████  ██████   ██████  ██                  ",
    );
    println!(
        "                            SAMPLE MENU:        numbers                             ",
    );
    println!(
        "                            VERSION:            {}                               ",
        env!("CARGO_PKG_VERSION"),
    );
    println!(
        "------------------------------------------------------------------------------------",
    );
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

    #[test]
    fn test_demo_menu_has_the_five_sample_items() {
        assert_eq!(build_menu(true).item_count(), 5);
    }

    #[test]
    fn test_demo_menu_end_to_end() {
        // Save 42, show it, then exit; every selection confirmed with y.
        let script = "1\ny\n42\n\n2\ny\n\n5\ny\n";
        let out = SharedBuf::default();
        let mut terminal = Terminal::new(Cursor::new(script.to_string()), out.clone());

        let store = build_menu(true).run(&mut terminal).unwrap();
        assert_eq!(store.saved, Some(42));

        let output = out.contents();
        assert!(output.contains("1. Input a number (this number will be saved)"));
        assert!(output.contains("5. Exit this program"));
        assert!(output.contains("The number you entered is: 42"));
        assert!(output.contains("The saved number is: 42"));
        assert!(output.contains("Exiting.."));
    }

    #[test]
    fn test_demo_menu_without_confirmation() {
        let script = "1\n7\n\n3\n\n5\n";
        let out = SharedBuf::default();
        let mut terminal = Terminal::new(Cursor::new(script.to_string()), out.clone());

        let store = build_menu(false).run(&mut terminal).unwrap();
        assert_eq!(store.saved, Some(7));
        assert!(out
            .contents()
            .contains("The sum of the digits of the saved number (7) is: 7"));
    }
}
