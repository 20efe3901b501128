use std::io::{self, BufRead, Write};

use tracing::debug;

use labkit_core::{LabError, StudentRecord, StudentStore, NUM_SUBJECTS};
use labkit_store::StudentTable;

use crate::console::Console;
use crate::protocol::Reply;
use crate::session::{Program, Step};

const MENU: &str = "\n=== Main Menu ===\n\
1. Add Student\n\
2. Display All Students\n\
3. Search Student by ID\n\
4. Calculate Class Statistics\n\
5. Sort Students by Average\n\
6. Display Top Performers\n\
7. Update Student Marks\n\
0. Exit\n";

const NO_STUDENTS: &str = "\nNo students in the system.\n";
const NOT_FOUND: &str = "Student not found!\n";
const TABLE_FULL: &str = "Maximum student limit reached!\n";
const SORTED: &str = "Students sorted by average (descending order).\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeChoice {
    Add,
    DisplayAll,
    Search,
    Statistics,
    Sort,
    TopPerformers,
    Update,
}

const CHOICES: [(i64, GradeChoice); 7] = [
    (1, GradeChoice::Add),
    (2, GradeChoice::DisplayAll),
    (3, GradeChoice::Search),
    (4, GradeChoice::Statistics),
    (5, GradeChoice::Sort),
    (6, GradeChoice::TopPerformers),
    (7, GradeChoice::Update),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeCommand {
    Add {
        id: i32,
        name: String,
        marks: [i32; NUM_SUBJECTS],
    },
    DisplayAll,
    Search(i32),
    Statistics,
    Sort {
        display: bool,
    },
    TopPerformers,
    Update {
        id: i32,
        marks: [i32; NUM_SUBJECTS],
    },
}

/// Grade program state: the student table plus display settings.
pub struct Gradebook {
    table: StudentTable,
    top_count: usize,
    precision: usize,
}

impl Gradebook {
    pub fn new(table: StudentTable, top_count: usize, precision: usize) -> Self {
        Self {
            table,
            top_count,
            precision,
        }
    }

    pub fn table(&self) -> &StudentTable {
        &self.table
    }

    fn describe(&self, record: &StudentRecord) -> String {
        let p = self.precision;
        let marks: String = record.marks().iter().map(|m| format!("{m} ")).collect();
        format!(
            "ID: {}\nName: {}\nMarks: {marks}\nAverage: {:.p$}\nGrade: {}\n",
            record.id,
            record.name,
            record.average(),
            record.grade()
        )
    }

    fn display_all(&self) -> String {
        if self.table.is_empty() {
            return NO_STUDENTS.to_string();
        }
        let mut out = String::from("\n=== Student Records ===\n");
        for (i, record) in self.table.records().iter().enumerate() {
            out.push_str(&format!("\nStudent {}:\n{}", i + 1, self.describe(record)));
        }
        out
    }

    fn statistics(&self) -> Reply {
        let Some(stats) = self.table.statistics() else {
            return Reply::text(NO_STUDENTS);
        };
        let p = self.precision;
        Reply::text(format!(
            "\n=== Class Statistics ===\n\
             Total Students: {}\n\
             Class Average: {:.p$}\n\
             Highest Average: {:.p$}\n\
             Lowest Average: {:.p$}\n\
             Pass Count: {}\n\
             Fail Count: {}\n",
            stats.total,
            stats.class_average,
            stats.highest,
            stats.lowest,
            stats.pass_count,
            stats.fail_count
        ))
    }

    fn sort(&mut self, display: bool) -> Reply {
        let mut out = if self.table.is_empty() {
            "\nNo students to sort.\n".to_string()
        } else {
            self.table.sort_by_average_desc();
            SORTED.to_string()
        };
        if display {
            out.push_str(&self.display_all());
        }
        Reply::text(out)
    }

    fn top_performers(&mut self) -> Reply {
        if self.table.is_empty() {
            return Reply::text(NO_STUDENTS);
        }
        let p = self.precision;
        let mut out = format!("{SORTED}\n=== Top Performers ===\n");
        for (i, record) in self.table.top_performers(self.top_count).iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (ID: {}) - Average: {:.p$}, Grade: {}\n",
                i + 1,
                record.name,
                record.id,
                record.average(),
                record.grade()
            ));
        }
        Reply::text(out)
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new(StudentTable::default(), 5, 2)
    }
}

fn read_marks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<[i32; NUM_SUBJECTS]> {
    let mut marks = [0; NUM_SUBJECTS];
    for (i, mark) in marks.iter_mut().enumerate() {
        *mark = read_i32(console, &format!("Subject {}: ", i + 1))?;
    }
    Ok(marks)
}

fn read_i32<R: BufRead, W: Write>(console: &mut Console<R, W>, message: &str) -> io::Result<i32> {
    let value = console.prompt_int(message)?;
    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

impl Program for Gradebook {
    type Choice = GradeChoice;
    type Command = GradeCommand;

    fn banner(&self) -> &'static str {
        "=== Student Grade Management System ===\nWelcome to the Grade Management System!\n"
    }

    fn menu(&self) -> &'static str {
        MENU
    }

    fn farewell(&self) -> &'static str {
        "Exiting system. Thank you!\n"
    }

    fn lookup(&self, number: i64) -> Option<GradeChoice> {
        CHOICES
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, choice)| *choice)
    }

    fn gather<R: BufRead, W: Write>(
        &self,
        choice: GradeChoice,
        console: &mut Console<R, W>,
    ) -> io::Result<Step<GradeCommand>> {
        let command = match choice {
            GradeChoice::Add => {
                if self.table.is_full() {
                    return Ok(Step::Reject(Reply::error(TABLE_FULL)));
                }
                let id = read_i32(console, "\nEnter student ID: ")?;
                let name = console.prompt("Enter student name: ")?.unwrap_or_default();
                console.write(&format!("Enter marks for {NUM_SUBJECTS} subjects:\n"))?;
                let marks = read_marks(console)?;
                GradeCommand::Add { id, name, marks }
            }
            GradeChoice::DisplayAll => GradeCommand::DisplayAll,
            GradeChoice::Search => {
                GradeCommand::Search(read_i32(console, "\nEnter student ID to search: ")?)
            }
            GradeChoice::Statistics => GradeCommand::Statistics,
            GradeChoice::Sort => {
                let answer = console.prompt_int("Display sorted list? (1=Yes, 0=No): ")?;
                GradeCommand::Sort {
                    display: answer == 1,
                }
            }
            GradeChoice::TopPerformers => GradeCommand::TopPerformers,
            GradeChoice::Update => {
                let id = read_i32(console, "\nEnter student ID to update: ")?;
                let Some(record) = self.table.find_by_id(id) else {
                    return Ok(Step::Reject(Reply::error(NOT_FOUND)));
                };
                let current: String = record.marks().iter().map(|m| format!("{m} ")).collect();
                console.write(&format!(
                    "Current marks: {current}\nEnter new marks for {NUM_SUBJECTS} subjects:\n"
                ))?;
                let marks = read_marks(console)?;
                GradeCommand::Update { id, marks }
            }
        };
        Ok(Step::Run(command))
    }

    fn execute(&mut self, command: GradeCommand) -> Reply {
        match command {
            GradeCommand::Add { id, name, marks } => {
                match self.table.add(StudentRecord::new(id, &name, marks)) {
                    Ok(()) => Reply::text("Student added successfully!\n"),
                    Err(LabError::TableFull(_)) => Reply::error(TABLE_FULL),
                    Err(e) => Reply::error(format!("Error: {e}\n")),
                }
            }
            GradeCommand::DisplayAll => Reply::text(self.display_all()),
            GradeCommand::Search(id) => match self.table.find_by_id(id) {
                Some(record) => {
                    Reply::text(format!("\nStudent Found:\n{}", self.describe(record)))
                }
                None => Reply::error(NOT_FOUND),
            },
            GradeCommand::Statistics => self.statistics(),
            GradeCommand::Sort { display } => self.sort(display),
            GradeCommand::TopPerformers => self.top_performers(),
            GradeCommand::Update { id, marks } => match self.table.update_marks(id, marks) {
                Ok(_) => Reply::text("Student marks updated successfully!\n"),
                Err(e @ LabError::NotFound(_)) => {
                    debug!("update rejected: {e}");
                    Reply::error(NOT_FOUND)
                }
                Err(e) => Reply::error(format!("Error: {e}\n")),
            },
        }
    }
}
