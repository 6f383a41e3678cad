//! Interactive menu driving a [`SearchTable`].
//!
//! The session reads one command per line. Besides the named commands, the numbers of the
//! classic menu are accepted: `1` source table, `2` dynamic table, `3` find, `4` insert,
//! `5` delete and `0` exit.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::record::{Key, Record};
use crate::render::render_records;
use crate::search_tree::SearchTable;

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    source: Vec<Record>,
    table: SearchTable,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over `table`; `source` is what `source` and `reload` work with.
    pub fn new(input: R, output: W, source: Vec<Record>, table: SearchTable) -> Self {
        Self {
            input,
            output,
            source,
            table,
        }
    }

    pub fn table(&self) -> &SearchTable {
        &self.table
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Reads and executes commands until an exit command or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Dynamic search table")?;
        writeln!(self.output, "Type 'help' for commands.\n")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "INFO: End of input.")?;
                break;
            }
            if self.execute(&line)? == Flow::Exit {
                writeln!(self.output, "ONGOING: Exiting...")?;
                break;
            }
        }
        writeln!(self.output, "SUCCESS: Exit the system")?;
        Ok(())
    }

    /// Executes a single command line.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(cmd) => cmd,
            None => return Ok(Flow::Continue),
        };
        debug!("session command '{}'", line.trim());

        match cmd {
            "help" => self.print_help()?,

            "1" | "source" => {
                writeln!(self.output, "Source table:")?;
                writeln!(self.output, "{}", render_records(&self.source))?;
            }

            "2" | "p" | "print" => {
                writeln!(self.output, "Dynamic table (in key order):")?;
                writeln!(self.output, "{}", self.table.render())?;
            }

            "3" | "find" => match parse_key(parts.next()) {
                Some(key) => {
                    let search = self.table.search(key);
                    match search.record {
                        Some(record) => {
                            writeln!(self.output, "SUCCESS: Found {}", record)?;
                            writeln!(self.output, "INFO: Comparisons: {}", search.comparisons)?;
                        }
                        None => writeln!(
                            self.output,
                            "PROBLEM: No record with key {} ({} comparisons).",
                            key, search.comparisons
                        )?,
                    }
                }
                None => writeln!(self.output, "PROBLEM: Usage: find <key> or 3 <key>")?,
            },

            "4" | "insert" => match parse_record(parts) {
                Some(record) => {
                    let key = record.key;
                    match self.table.insert(record) {
                        Ok(()) => {
                            writeln!(self.output, "SUCCESS: Inserted key {}. Current table:", key)?;
                            writeln!(self.output, "{}", self.table.render())?;
                        }
                        Err(err) => writeln!(self.output, "PROBLEM: Insert failed, {}.", err)?,
                    }
                }
                None => writeln!(
                    self.output,
                    "PROBLEM: Usage: insert <key> <name> <sex> <age> or 4 <key> <name> <sex> <age>"
                )?,
            },

            "5" | "delete" => match parse_key(parts.next()) {
                Some(key) => match self.table.remove(key) {
                    Ok(record) => {
                        writeln!(self.output, "SUCCESS: Deleted {}. Current table:", record)?;
                        writeln!(self.output, "{}", self.table.render())?;
                    }
                    Err(err) => writeln!(self.output, "PROBLEM: Delete failed, {}.", err)?,
                },
                None => writeln!(self.output, "PROBLEM: Usage: delete <key> or 5 <key>")?,
            },

            "tree" => {
                writeln!(self.output, "Tree shape (height {}):", self.table.height())?;
                writeln!(self.output, "{}", self.table.render_shape())?;
            }

            "reload" => {
                let inserted = self.table.bulk_load(self.source.iter().cloned());
                writeln!(self.output, "SUCCESS: Reloaded {} records from the source table.", inserted)?;
            }

            "0" | "quit" | "exit" => return Ok(Flow::Exit),

            _ => writeln!(self.output, "PROBLEM: Unknown command. Type 'help'.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  Show source table: source, 1")?;
        writeln!(self.output, "  Show dynamic table: p, print, 2")?;
        writeln!(self.output, "  Find: find <key>, 3 <key>")?;
        writeln!(self.output, "  Insert: insert <key> <name> <sex> <age>, 4 ...")?;
        writeln!(self.output, "  Delete: delete <key>, 5 <key>")?;
        writeln!(self.output, "  Tree shape: tree")?;
        writeln!(self.output, "  Reload source table: reload")?;
        writeln!(self.output, "  Quit: quit, exit, 0")
    }
}

fn parse_key(arg: Option<&str>) -> Option<Key> {
    arg.and_then(|v| v.parse::<Key>().ok())
}

fn parse_record<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Record> {
    let key = parse_key(parts.next())?;
    let name = parts.next()?;
    let sex = parts.next()?;
    let age = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Record::new(key, name, sex, age))
}
