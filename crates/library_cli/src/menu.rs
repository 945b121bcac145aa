//! Interactive catalog menu.
//!
//! # Responsibility
//! - Render the fixed three-option menu and collect field input.
//! - Forward add requests to the `Library` facade.
//!
//! # Invariants
//! - Unrecognized choices never leave the loop; they re-prompt.
//! - End of input ends the loop; a partially entered record is discarded.
//! - Repository failures are reported and never abort the loop.

use library_core::{Book, Library, Member, Repository};
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddBook,
    AddMember,
    Exit,
}

impl MenuChoice {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::AddMember),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Console front end over the catalog facade.
pub struct LibraryService<B, M>
where
    B: Repository<Book>,
    M: Repository<Member>,
{
    library: Library<B, M>,
}

impl<B, M> LibraryService<B, M>
where
    B: Repository<Book>,
    M: Repository<Member>,
{
    pub fn new(library: Library<B, M>) -> Self {
        Self { library }
    }

    /// Runs the menu loop until `Exit` or end of input.
    ///
    /// # Errors
    /// Returns I/O errors from `input` or `output` unchanged.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<()> {
        writeln!(output, "Welcome to the Library Management System!")?;

        loop {
            writeln!(output, "1. Add Book")?;
            writeln!(output, "2. Add Member")?;
            writeln!(output, "3. Exit")?;
            let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
                return Ok(());
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddBook) => self.add_book(input, output)?,
                Some(MenuChoice::AddMember) => self.add_member(input, output)?,
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Exiting the application. Goodbye!")?;
                    Flow::Quit
                }
                None => {
                    writeln!(output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn add_book<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<Flow> {
        writeln!(output, "Enter book details:")?;
        let Some(title) = prompt(input, output, "Title: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = prompt(input, output, "Author: ")? else {
            return Ok(Flow::Quit);
        };

        match self.library.add_book(title, author) {
            Ok(book) => {
                info!("event=book_add module=cli status=ok id={}", book.id);
                writeln!(output, "Book added successfully! ({book})")?;
            }
            Err(err) => {
                warn!("event=book_add module=cli status=error error={err}");
                writeln!(output, "Could not add book: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_member<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<Flow> {
        writeln!(output, "Enter member details:")?;
        let Some(name) = prompt(input, output, "Name: ")? else {
            return Ok(Flow::Quit);
        };

        match self.library.add_member(name) {
            Ok(member) => {
                info!("event=member_add module=cli status=ok id={}", member.id);
                writeln!(output, "Member added successfully! ({member})")?;
            }
            Err(err) => {
                warn!("event=member_add module=cli status=error error={err}");
                writeln!(output, "Could not add member: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// Writes `label` and reads one line without its terminator.
///
/// Returns `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
