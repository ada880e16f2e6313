// ptable - interactive periodic table management
//
// This is the binary entry point. Runs the menu loop and dispatches to
// handlers; all table logic lives in the library.

use anyhow::Result;
use ptable_lib::core::Validator;
use ptable_lib::store::{ElementInput, PeriodicTable};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn main() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut table = PeriodicTable::new();

    loop {
        print_menu();

        let choice = match read_line(&mut rl, "Enter your choice: ")? {
            Some(line) => line,
            None => break, // Ctrl-C / Ctrl-D at the menu ends the session
        };

        match choice.trim() {
            "1" => handle_add(&mut rl, &mut table)?,
            "2" => handle_display(&table),
            "3" => handle_search(&mut rl, &table)?,
            "4" => handle_delete(&mut rl, &mut table)?,
            "5" => {
                table.clear();
                println!("Program terminated.");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }

    Ok(())
}

fn handle_add(rl: &mut DefaultEditor, table: &mut PeriodicTable) -> Result<()> {
    let line = match read_line(rl, "Enter atomic number: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let atomic_number = match Validator::parse_atomic_number(&line) {
        Ok(n) => n,
        Err(e) => {
            println!("{}", e.user_message());
            return Ok(());
        }
    };

    let symbol = match read_line(rl, "Enter element symbol: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let name = match read_line(rl, "Enter element name: ")? {
        Some(line) => line,
        None => return Ok(()),
    };

    let line = match read_line(rl, "Enter atomic mass: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let atomic_mass = match Validator::parse_mass(&line) {
        Ok(m) => m,
        Err(e) => {
            println!("{}", e.user_message());
            return Ok(());
        }
    };

    let name = name.trim().to_string();
    let input = ElementInput {
        atomic_number,
        symbol: symbol.trim().to_string(),
        name: name.clone(),
        atomic_mass,
    };

    match table.insert(input) {
        Ok(()) => println!("Element '{}' added successfully.", name),
        Err(e) => println!("{}", e.user_message()),
    }

    Ok(())
}

fn handle_display(table: &PeriodicTable) {
    if table.is_empty() {
        println!("The periodic table is currently empty.");
        return;
    }

    println!("Periodic Table:");
    println!(
        "{:<15}{:<8}{:<21}{}",
        "Atomic Number", "Symbol", "Name", "Atomic Mass"
    );
    println!("{}", "-".repeat(55));
    for element in table {
        println!(
            "{:<15}{:<8}{:<21}{:.2}",
            element.atomic_number, element.symbol, element.name, element.atomic_mass
        );
    }
    println!();
}

fn handle_search(rl: &mut DefaultEditor, table: &PeriodicTable) -> Result<()> {
    let line = match read_line(rl, "Enter atomic number to search: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let atomic_number = match Validator::parse_key(&line) {
        Ok(n) => n,
        Err(e) => {
            println!("{}", e.user_message());
            return Ok(());
        }
    };

    match table.search(atomic_number) {
        Some(element) => println!(
            "Element found: {} ({}), Atomic Mass: {:.2}",
            element.name, element.symbol, element.atomic_mass
        ),
        None => println!("Element with atomic number {} not found.", atomic_number),
    }

    Ok(())
}

fn handle_delete(rl: &mut DefaultEditor, table: &mut PeriodicTable) -> Result<()> {
    let line = match read_line(rl, "Enter atomic number to delete: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let atomic_number = match Validator::parse_key(&line) {
        Ok(n) => n,
        Err(e) => {
            println!("{}", e.user_message());
            return Ok(());
        }
    };

    match table.delete(atomic_number) {
        Ok(()) => println!(
            "Element with atomic number {} deleted successfully.",
            atomic_number
        ),
        Err(e) => println!("{}", e.user_message()),
    }

    Ok(())
}

// Reads one line from the prompt. Ctrl-C and Ctrl-D both come back as
// None; mid-operation that cancels the operation, at the menu it quits.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn print_menu() {
    println!("Periodic Table Management System");
    println!("1. Add Element");
    println!("2. Display Elements");
    println!("3. Search Element");
    println!("4. Delete Element");
    println!("5. Exit");
}
