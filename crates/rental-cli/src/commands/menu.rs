//! The interactive rental menu.
//!
//! The menu is a thin caller of `RentalLedger`: it gathers answers, shows a
//! quote, asks for confirmation and prints whatever the ledger returns. All
//! validation lives in the ledger; the menu only turns text into typed input.

use std::io;

use rental_core::{RentalError, RentalLedger};

use crate::app::AppContext;
use crate::cli::MenuArgs;
use crate::constants::MENU_ITEMS;
use crate::errors::CliError;
use crate::output::{car_columns, car_rows, quote_items, rental_receipt_items, return_receipt_items};
use crate::ui::prompt::{LinePrompter, Prompter, TerminalPrompter};
use crate::ui::{
    badge, blank_line, divider, header, kv, print, print_error, receipt, table, Badge, PromptSource,
    UiContext,
};

const FAREWELL: &str = "Thank you for using the Car Rental System!";

pub fn handle_menu(ctx: &AppContext, args: &MenuArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let source = ui.prompt_source(args.no_input)?;
    let currency = ctx.currency_symbol()?;
    let mut ledger = ctx.build_ledger()?;

    match source {
        PromptSource::Terminal => {
            MenuSession::new(&ui, &mut ledger, TerminalPrompter::default(), currency).run()
        }
        PromptSource::Lines => {
            let stdin = io::stdin();
            let prompter = LinePrompter::new(stdin.lock(), io::stdout());
            MenuSession::new(&ui, &mut ledger, prompter, currency).run()
        }
    }
}

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One run of the menu loop against a ledger.
pub struct MenuSession<'a, P> {
    ui: &'a UiContext,
    ledger: &'a mut RentalLedger,
    prompter: P,
    currency: &'a str,
}

impl<'a, P: Prompter> MenuSession<'a, P> {
    pub fn new(
        ui: &'a UiContext,
        ledger: &'a mut RentalLedger,
        prompter: P,
        currency: &'a str,
    ) -> Self {
        Self {
            ui,
            ledger,
            prompter,
            currency,
        }
    }

    /// Loop until the user exits or input runs out.
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            print(self.ui, &header(self.ui, "Car Rental System"));
            let Some(choice) = self.prompter.select("Enter your choice", &MENU_ITEMS)? else {
                break;
            };
            let flow = match choice {
                0 => self.rent_car()?,
                1 => self.return_car()?,
                _ => Flow::Exit,
            };
            if flow == Flow::Exit {
                break;
            }
            blank_line(self.ui);
        }

        blank_line(self.ui);
        println!("{}", FAREWELL);
        Ok(())
    }

    fn rent_car(&mut self) -> anyhow::Result<Flow> {
        print(self.ui, &header(self.ui, "Rent a Car"));

        let Some(name) = self.prompter.input("Enter your name")? else {
            return Ok(Flow::Exit);
        };

        let available: Vec<_> = self.ledger.list_available_cars().collect();
        if available.is_empty() {
            print(
                self.ui,
                &badge(self.ui, Badge::Info, "No cars are available for rent."),
            );
        } else {
            print(self.ui, "Available Cars:");
            print(
                self.ui,
                &table(
                    self.ui,
                    &car_columns(false),
                    &car_rows(available, self.currency, false),
                ),
            );
        }

        // Every rent answer is read before any of them is judged, so scripted
        // input stays aligned with the prompts.
        let Some(car_id) = self.prompter.input("Enter the car ID you want to rent")? else {
            return Ok(Flow::Exit);
        };
        let Some(days_text) = self.prompter.input("Enter the number of days for rental")? else {
            return Ok(Flow::Exit);
        };

        if name.is_empty() {
            self.report(&CliError::invalid_input("Customer name cannot be empty"));
            return Ok(Flow::Continue);
        }
        let days = match parse_days(&days_text) {
            Ok(days) => days,
            Err(err) => {
                self.report(&err);
                return Ok(Flow::Continue);
            }
        };

        let quote = match self.ledger.quote_rental(&car_id, days) {
            Ok(quote) => quote,
            Err(err) => {
                self.report_rental_error(err);
                return Ok(Flow::Continue);
            }
        };

        print(self.ui, &divider(self.ui));
        print(self.ui, "Rental Information");
        for (key, value) in quote_items(&quote, &name, self.currency) {
            print(self.ui, &kv(self.ui, key, &value));
        }

        let Some(confirmed) = self.prompter.confirm("Confirm rental")? else {
            return Ok(Flow::Exit);
        };
        if !confirmed {
            print(self.ui, &badge(self.ui, Badge::Warn, "Rental canceled."));
            return Ok(Flow::Continue);
        }

        match self.ledger.open_rental(&car_id, &name, days) {
            Ok(rental) => {
                let items = rental_receipt_items(&rental, self.currency, self.ui.mode.is_pretty());
                print(self.ui, &receipt(self.ui, "Car rented successfully.", &items));
            }
            Err(err) => self.report_rental_error(err),
        }
        Ok(Flow::Continue)
    }

    fn return_car(&mut self) -> anyhow::Result<Flow> {
        print(self.ui, &header(self.ui, "Return a Car"));

        let Some(car_id) = self.prompter.input("Enter the car ID you want to return")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.close_rental(&car_id) {
            Ok(returned) => {
                let title = format!("Car returned successfully by {}", returned.customer_name);
                let items = return_receipt_items(&returned, self.currency);
                print(self.ui, &receipt(self.ui, &title, &items));
            }
            Err(err) => self.report_rental_error(err),
        }
        Ok(Flow::Continue)
    }

    fn report_rental_error(&self, err: RentalError) {
        self.report(&CliError::from(err));
    }

    fn report(&self, err: &CliError) {
        print_error(self.ui, &err.to_string(), err.hint());
    }
}

/// Parse a day count typed at the prompt.
///
/// Zero is passed through so the ledger can reject it; text and negative
/// numbers never reach the ledger.
fn parse_days(text: &str) -> Result<u32, CliError> {
    text.trim().parse::<u32>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid number of days: {}", text),
            "Enter a whole number of days, 1 or more.",
        )
    })
}
