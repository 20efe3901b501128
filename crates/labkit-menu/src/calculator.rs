use std::io::{self, BufRead, Write};

use labkit_core::{HistoryStore, LabError, Operation};
use labkit_store::BoundedLedger;

use crate::console::Console;
use crate::protocol::Reply;
use crate::session::{Program, Step};

const MENU: &str = "\nSelect operation:\n\
1. Addition (+)\n\
2. Subtraction (-)\n\
3. Multiplication (*)\n\
4. Division (/)\n\
5. View History\n\
6. Calculate Average\n\
7. Find Maximum\n\
8. Find Minimum\n\
9. Clear History\n\
0. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcChoice {
    Compute(Operation),
    ViewHistory,
    Average,
    Maximum,
    Minimum,
    ClearHistory,
}

const CHOICES: [(i64, CalcChoice); 9] = [
    (1, CalcChoice::Compute(Operation::Add)),
    (2, CalcChoice::Compute(Operation::Subtract)),
    (3, CalcChoice::Compute(Operation::Multiply)),
    (4, CalcChoice::Compute(Operation::Divide)),
    (5, CalcChoice::ViewHistory),
    (6, CalcChoice::Average),
    (7, CalcChoice::Maximum),
    (8, CalcChoice::Minimum),
    (9, CalcChoice::ClearHistory),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcCommand {
    Compute {
        operation: Operation,
        lhs: f64,
        rhs: f64,
    },
    ViewHistory,
    Average,
    Maximum,
    Minimum,
    ClearHistory,
}

/// Calculator program state: the history ledger and output precision.
pub struct Calculator {
    ledger: BoundedLedger,
    precision: usize,
}

impl Calculator {
    pub fn new(ledger: BoundedLedger, precision: usize) -> Self {
        Self { ledger, precision }
    }

    pub fn ledger(&self) -> &BoundedLedger {
        &self.ledger
    }

    fn compute(&mut self, operation: Operation, lhs: f64, rhs: f64) -> Reply {
        let p = self.precision;
        match self.ledger.record(operation, lhs, rhs) {
            Ok(value) => Reply::text(format!(
                "Result: {lhs:.p$} {operation} {rhs:.p$} = {value:.p$}\n"
            )),
            Err(LabError::DivisionByZero) => Reply::error("Error: Division by zero!\n"),
            Err(e) => Reply::error(format!("Error: {e}\n")),
        }
    }

    fn history(&self) -> Reply {
        let p = self.precision;
        let mut out = String::from("\n=== Operation History ===\n");
        if self.ledger.is_empty() {
            out.push_str("No operations in history.\n");
        }
        for (i, entry) in self.ledger.entries().iter().enumerate() {
            out.push_str(&format!(
                "{}. Operation: {}, Result: {:.p$}\n",
                i + 1,
                entry.operation,
                entry.value
            ));
        }
        out.push_str("========================\n");
        Reply::text(out)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(BoundedLedger::default(), 2)
    }
}

impl Program for Calculator {
    type Choice = CalcChoice;
    type Command = CalcCommand;

    fn banner(&self) -> &'static str {
        "=== Advanced Calculator ===\nWelcome to the calculator program!\n\n"
    }

    fn menu(&self) -> &'static str {
        MENU
    }

    fn farewell(&self) -> &'static str {
        "Thank you for using the calculator!\n"
    }

    fn lookup(&self, number: i64) -> Option<CalcChoice> {
        CHOICES
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, choice)| *choice)
    }

    fn gather<R: BufRead, W: Write>(
        &self,
        choice: CalcChoice,
        console: &mut Console<R, W>,
    ) -> io::Result<Step<CalcCommand>> {
        let command = match choice {
            CalcChoice::Compute(operation) => {
                let lhs = console.prompt_float("Enter first number: ")?;
                let rhs = console.prompt_float("Enter second number: ")?;
                CalcCommand::Compute { operation, lhs, rhs }
            }
            CalcChoice::ViewHistory => CalcCommand::ViewHistory,
            CalcChoice::Average => CalcCommand::Average,
            CalcChoice::Maximum => CalcCommand::Maximum,
            CalcChoice::Minimum => CalcCommand::Minimum,
            CalcChoice::ClearHistory => CalcCommand::ClearHistory,
        };
        Ok(Step::Run(command))
    }

    fn execute(&mut self, command: CalcCommand) -> Reply {
        let p = self.precision;
        match command {
            CalcCommand::Compute { operation, lhs, rhs } => self.compute(operation, lhs, rhs),
            CalcCommand::ViewHistory => self.history(),
            CalcCommand::Average => {
                Reply::text(format!("Average of all results: {:.p$}\n", self.ledger.average()))
            }
            CalcCommand::Maximum => {
                Reply::text(format!("Maximum result: {:.p$}\n", self.ledger.max()))
            }
            CalcCommand::Minimum => {
                Reply::text(format!("Minimum result: {:.p$}\n", self.ledger.min()))
            }
            CalcCommand::ClearHistory => {
                self.ledger.clear();
                Reply::text("History cleared!\n")
            }
        }
    }
}
