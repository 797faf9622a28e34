//! The interactive main menu.
//!
//! `Menu` is generic over its input and output so the whole loop can be driven
//! from a script in tests. Running out of input anywhere ends the session.

use super::render::{render_messages, render_order_details, render_table};
use orderinfo::api::{parse_order_id, CmdMessage, OrderApi};
use orderinfo::commands::NO_RECORDS_MESSAGE;
use orderinfo::error::{OrderError, Result};
use orderinfo::store::Gateway;
use orderinfo::validation::{self, OrderDraft};
use std::io::{self, BufRead, Write};

const INVALID_CHOICE: &str = "Please enter valid number (1 - 6) from the menu.";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, G: Gateway, R: BufRead, W: Write> {
    api: &'a mut OrderApi<G>,
    input: R,
    output: W,
}

impl<'a, G: Gateway, R: BufRead, W: Write> Menu<'a, G, R, W> {
    pub fn new(api: &'a mut OrderApi<G>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = read_line(&mut self.input)? else {
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if is_end_of_input(&e) => return Ok(()),
                Err(e) => self.say(&[CmdMessage::error(format!("\nUnexpected error: {}", e))])?,
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.load(),
            "2" => self.display(),
            "3" => self.add(),
            "4" => self.delete(),
            "5" => self.save(),
            "6" => self.exit(),
            _ => {
                self.say(&[CmdMessage::warning(INVALID_CHOICE)])?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{:^25}  ", "Online Order Details")?;
        writeln!(self.output, "{}", "=".repeat(25))?;
        writeln!(self.output, "{:^25}  ", "Main Menu")?;
        writeln!(self.output, "{}", "-".repeat(25))?;
        for item in [
            "1. Load records",
            "2. Display",
            "3. Add record",
            "4. Delete record",
            "5. Save records",
            "6. Exit",
        ] {
            writeln!(self.output, "{}", item)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn load(&mut self) -> Result<Flow> {
        if self.api.needs_load_confirmation() {
            self.say(&[CmdMessage::warning("\nYou have unsaved changes.")])?;
            if !self.confirm("Loading now will discard them. Do you want to proceed? (Y/N): ")? {
                self.say(&[CmdMessage::info("Loading cancelled. Returning to main menu.")])?;
                return Ok(Flow::Continue);
            }
        }
        let result = self.api.load()?;
        self.say(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<Flow> {
        let result = self.api.list()?;
        if result.listed_orders.is_empty() {
            self.say(&result.messages)?;
        } else {
            write!(self.output, "{}", render_table(&result.listed_orders))?;
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nAdd New Order")?;
        writeln!(self.output, "{}", "-".repeat(30))?;

        let draft = OrderDraft {
            customer_name: self.ask("Enter customer name: ", validation::customer_name)?,
            item_purchased: self.ask("Enter item purchased: ", validation::item_purchased)?,
            quantity: self.ask("Enter quantity: ", validation::quantity)?,
            order_date: self.ask("Enter order date (DD/MM/YYYY): ", validation::order_date)?,
            total_price: self.ask("Enter total price: ", validation::total_price)?,
            status: self.ask(
                "Enter order status (Shipped/Delivered/Cancelled): ",
                validation::status,
            )?,
        };

        let result = self.api.add(&draft)?;
        self.say(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        if self.api.is_empty() {
            self.say(&[CmdMessage::info(NO_RECORDS_MESSAGE)])?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nDelete Record")?;
        writeln!(self.output, "{}", "-".repeat(20))?;

        let order_id = loop {
            let raw = self.prompt("Enter the Order ID to delete: ")?;
            match parse_order_id(&raw) {
                Ok(id) => break id,
                Err(_) => self.say(&[CmdMessage::error(
                    "Invalid input. Please enter a valid integer for Order ID.",
                )])?,
            }
        };

        let Some(details) = self.api.find(order_id).map(render_order_details) else {
            let missing = OrderError::NotFound(order_id).to_string();
            self.say(&[CmdMessage::error(format!("\n{}", missing))])?;
            return Ok(Flow::Continue);
        };
        write!(self.output, "{}", details)?;

        if self.confirm("Are you sure you want to delete this record? (Y/N): ")? {
            let result = self.api.delete(order_id)?;
            self.say(&result.messages)?;
        } else {
            self.say(&[CmdMessage::info("\nDeletion cancelled.")])?;
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow> {
        if self.api.is_empty() && !self.api.has_unsaved_changes() {
            self.say(&[CmdMessage::info(NO_RECORDS_MESSAGE)])?;
            return Ok(Flow::Continue);
        }

        if self.api.save_would_overwrite_unloaded() {
            self.say(&[CmdMessage::warning("You haven't loaded the existing records.")])?;
            if !self.confirm(
                "Saving now will overwrite the file and keep only current records. Continue? (Y/N): ",
            )? {
                self.say(&[CmdMessage::info("Save cancelled.")])?;
                return Ok(Flow::Continue);
            }
        }

        let result = self.api.save()?;
        self.say(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow> {
        if self.api.has_unsaved_changes()
            && !self.confirm("You have unsaved records. Exit without saving? (Y/N): ")?
        {
            return Ok(Flow::Continue);
        }
        Ok(Flow::Exit)
    }

    /// Prompts until `check` accepts the answer, returning the raw text.
    fn ask<T>(&mut self, question: &str, check: impl Fn(&str) -> Result<T>) -> Result<String> {
        loop {
            let raw = self.prompt(question)?;
            match check(&raw) {
                Ok(_) => return Ok(raw),
                Err(e) => self.say(&[CmdMessage::error(e.to_string())])?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        prompt(&mut self.input, &mut self.output, question)
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        confirm(&mut self.input, &mut self.output, question)
    }

    fn say(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write!(self.output, "{}", render_messages(messages))?;
        Ok(())
    }
}

/// Asks a Y/N question until the answer is one of the two.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    loop {
        match prompt(input, output, question)?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please enter Y or N.")?,
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    read_line(input)?.ok_or_else(|| OrderError::Io(io::ErrorKind::UnexpectedEof.into()))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn is_end_of_input(e: &OrderError) -> bool {
    matches!(e, OrderError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
}
