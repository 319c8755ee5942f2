//! An interactive menu over a single [`Sequence`], reading choices from stdin.
//!
//! Input is read as whitespace-separated tokens, so a whole session can be
//! piped in, e.g. `printf '2 1 2 3 5 7 5 0' | linked-sequence --no-banner`.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::Parser;
use linked_sequence::Sequence;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(about = "Interactive doubly-linked sequence: insert, delete, reverse, sort and check for cycles")]
struct Args {
    /// Log filter used when `RUST_LOG` is not set, e.g. `trace`
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Do not print the menu and the prompts
    #[arg(long)]
    no_banner: bool,
}

const MENU: &str = "
--- Dynamic Doubly Linked List (Hard Program) ---
1. Push Front
2. Push Back
3. Insert At Position
4. Delete At Position
5. Print
6. Reverse
7. Merge Sort
8. Detect Cycle
9. Free All
0. Exit";

fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), !args.no_banner).run()
}

/// Whitespace-separated tokens, read line by line.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at the end of the input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

struct Session<R, W> {
    seq: Sequence,
    tokens: Tokens<R>,
    out: W,
    banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, out: W, banner: bool) -> Self {
        Self {
            seq: Sequence::new(),
            tokens: Tokens::new(input),
            out,
            banner,
        }
    }

    fn run(mut self) -> io::Result<()> {
        loop {
            if self.banner {
                writeln!(self.out, "{}", MENU)?;
            }
            let choice = match self.read::<i32>("Enter choice: ")? {
                Some(choice) => choice,
                None => break,
            };
            debug!(choice, "menu choice");
            if let Flow::Stop = self.handle(choice)? {
                break;
            }
        }
        self.seq.free_all();
        self.out.flush()
    }

    fn handle(&mut self, choice: i32) -> io::Result<Flow> {
        match choice {
            1 => match self.read("Enter value: ")? {
                Some(value) => self.seq.push_front(value),
                None => return Ok(Flow::Stop),
            },
            2 => match self.read("Enter value: ")? {
                Some(value) => self.seq.push_back(value),
                None => return Ok(Flow::Stop),
            },
            3 => {
                let pos = match self.read::<isize>("Enter position (0-based) and value: ")? {
                    Some(pos) => pos,
                    None => return Ok(Flow::Stop),
                };
                match self.read("")? {
                    Some(value) => self.seq.insert_at(pos, value),
                    None => return Ok(Flow::Stop),
                }
            }
            4 => match self.read("Enter position (0-based): ")? {
                Some(pos) => {
                    self.seq.delete_at(pos);
                }
                None => return Ok(Flow::Stop),
            },
            5 => self.print()?,
            6 => {
                self.seq.reverse();
                writeln!(self.out, "Reversed.")?;
            }
            7 => {
                self.seq.sort();
                writeln!(self.out, "Sorted.")?;
            }
            8 => {
                let answer = if self.seq.has_cycle() { "YES" } else { "NO" };
                writeln!(self.out, "Cycle: {}", answer)?;
            }
            9 => {
                self.seq.free_all();
                writeln!(self.out, "Freed all nodes.")?;
            }
            0 => {
                self.seq.free_all();
                writeln!(self.out, "Bye.")?;
                return Ok(Flow::Stop);
            }
            _ => writeln!(self.out, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    /// Every value is followed by a space, so a non-empty listing ends with
    /// one before the newline.
    fn print(&mut self) -> io::Result<()> {
        write!(self.out, "List: ")?;
        for value in &self.seq {
            write!(self.out, "{} ", value)?;
        }
        writeln!(self.out)
    }

    /// Print `prompt` (unless the banner is off) and read a number.
    ///
    /// Returns `None` when the session has to stop: at the end of the input,
    /// or after reporting a token that is not a number.
    fn read<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        if self.banner && !prompt.is_empty() {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
        }
        let token = match self.tokens.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };
        match token.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.out, "Invalid input.")?;
                Ok(None)
            }
        }
    }
}
