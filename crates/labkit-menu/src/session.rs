use std::fmt::Debug;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::console::Console;
use crate::protocol::Reply;

const INVALID_CHOICE: &str = "Invalid choice! Please try again.\n";

/// Outcome of gathering a command's arguments from the console.
#[derive(Debug)]
pub enum Step<C> {
    Run(C),
    /// Input was rejected before a command could be built.
    Reject(Reply),
}

/// One menu-driven console program.
///
/// `gather` owns every prompt; `execute` is pure state mutation plus
/// formatting, so it can be driven directly in tests.
pub trait Program {
    type Choice: Copy + Debug;
    type Command: Debug;

    fn banner(&self) -> &'static str;
    fn menu(&self) -> &'static str;
    fn farewell(&self) -> &'static str;

    /// Menu number to choice. `0` is reserved for exit and never reaches here.
    fn lookup(&self, number: i64) -> Option<Self::Choice>;

    fn gather<R: BufRead, W: Write>(
        &self,
        choice: Self::Choice,
        console: &mut Console<R, W>,
    ) -> io::Result<Step<Self::Command>>;

    fn execute(&mut self, command: Self::Command) -> Reply;
}

/// Run the menu loop until `0` is chosen or input ends.
pub fn run_session<P, R, W>(program: &mut P, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    P: Program,
    R: BufRead,
    W: Write,
{
    console.write(program.banner())?;

    loop {
        console.write(program.menu())?;
        let Some(line) = console.prompt("Enter choice: ")? else {
            debug!("input closed");
            console.write(program.farewell())?;
            break;
        };

        let number = match line.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                console.write(INVALID_CHOICE)?;
                continue;
            }
        };
        if number == 0 {
            console.write(program.farewell())?;
            break;
        }
        let Some(choice) = program.lookup(number) else {
            console.write(INVALID_CHOICE)?;
            continue;
        };

        debug!("menu choice {number}: {choice:?}");
        let reply = match program.gather(choice, console)? {
            Step::Run(command) => {
                debug!("executing {command:?}");
                program.execute(command)
            }
            Step::Reject(reply) => reply,
        };
        if reply.is_error {
            warn!("{choice:?} failed: {}", reply.text.trim());
        }
        console.write(&reply.text)?;
    }

    Ok(())
}
