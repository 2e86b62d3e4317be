//! The sample menu items: save a number, inspect it, and exit.
//!
//! Everything here is demonstration content for the `menuloop` engine; the
//! items share a [`NumberStore`] and talk to the user through the context's
//! terminal.

use menuloop::menu::{MenuAction, MenuContext, MenuOutcome};
use menuloop::utils::{Sanitize, TerminalError};

/// Bytes kept when reading the number to save; longer entries are truncated
/// to their first four digits.
const NUMBER_INPUT_LIMIT: usize = 4;

const NO_SAVED_NUMBER: &str =
    "\n\nThere is no saved number. Please first input a number by selecting menu option 1.";

/// State shared by the sample items: the one number the user may save.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NumberStore {
    pub saved: Option<u32>,
}

pub struct SaveNumber;

impl MenuAction<NumberStore> for SaveNumber {
    fn label(&self) -> &str {
        "Input a number (this number will be saved)"
    }

    fn run(&self, ctx: &mut MenuContext<'_, NumberStore>) -> Result<MenuOutcome, TerminalError> {
        ctx.terminal.say("")?;
        let answer = ctx.terminal.ask_bounded(
            "Please enter a positive number (only numeric characters allowed) (the number will be truncated to 4 digits)(the previously saved number will be replaced): ",
            &[Sanitize::Digits],
            NUMBER_INPUT_LIMIT,
        )?;

        // At most four digits, so the parse always fits a u32.
        let number: u32 = answer.parse().unwrap_or_default();
        ctx.state.saved = Some(number);

        ctx.terminal
            .say(format!("\n\nThe number you entered is: {number}"))?;
        Ok(MenuOutcome::Continue)
    }
}

pub struct ShowNumber;

impl MenuAction<NumberStore> for ShowNumber {
    fn label(&self) -> &str {
        "Show the saved number"
    }

    fn run(&self, ctx: &mut MenuContext<'_, NumberStore>) -> Result<MenuOutcome, TerminalError> {
        match ctx.state.saved {
            Some(number) => ctx
                .terminal
                .say(format!("\n\nThe saved number is: {number}"))?,
            None => ctx.terminal.say(NO_SAVED_NUMBER)?,
        }
        Ok(MenuOutcome::Continue)
    }
}

pub struct SumDigits;

impl MenuAction<NumberStore> for SumDigits {
    fn label(&self) -> &str {
        "Show the sum of the digits of the saved number"
    }

    fn run(&self, ctx: &mut MenuContext<'_, NumberStore>) -> Result<MenuOutcome, TerminalError> {
        match ctx.state.saved {
            Some(number) => ctx.terminal.say(format!(
                "\n\nThe sum of the digits of the saved number ({number}) is: {}",
                digit_sum(number)
            ))?,
            None => ctx.terminal.say(NO_SAVED_NUMBER)?,
        }
        Ok(MenuOutcome::Continue)
    }
}

pub struct DeleteNumber;

impl MenuAction<NumberStore> for DeleteNumber {
    fn label(&self) -> &str {
        "Delete the saved number"
    }

    fn run(&self, ctx: &mut MenuContext<'_, NumberStore>) -> Result<MenuOutcome, TerminalError> {
        match ctx.state.saved.take() {
            Some(_) => ctx
                .terminal
                .say("\n\nThe saved number has been deleted.")?,
            None => ctx.terminal.say(NO_SAVED_NUMBER)?,
        }
        Ok(MenuOutcome::Continue)
    }
}

pub struct ExitProgram;

impl MenuAction<NumberStore> for ExitProgram {
    fn label(&self) -> &str {
        "Exit this program"
    }

    fn run(&self, ctx: &mut MenuContext<'_, NumberStore>) -> Result<MenuOutcome, TerminalError> {
        ctx.terminal
            .say(format!("\n\nYou chose the option number: {}", ctx.index + 1))?;
        ctx.terminal
            .say(format!("The text of this option is: \"{}\"", self.label()))?;
        ctx.terminal.say("\n\nExiting..\n")?;
        Ok(MenuOutcome::Exit)
    }
}

/// Sums the base-10 digits of `number`; 0 sums to 0.
fn digit_sum(mut number: u32) -> u32 {
    let mut sum = 0;
    while number > 0 {
        sum += number % 10;
        number /= 10;
    }
    sum
}
