//! Interactive d-ary max-heap session
//!
//! Loads candidate arrays from a text file (one whitespace-separated array
//! per line), lets the user pick an array and a branching factor, then
//! drives insert / increase-key / extract-max / delete from a menu loop.
//!
//! ```bash
//! cargo run --example interactive
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use dheap::session::{read_arrays, Command, Outcome, Session};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let path = prompt_line("Enter the name of the file containing heap data: ")?;
    let file = File::open(path.trim())?;
    let arrays = read_arrays(BufReader::new(file))?;
    if arrays.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "no arrays found in file",
        ));
    }

    println!("Available arrays:");
    for (i, array) in arrays.iter().enumerate() {
        println!("array {}: {}", i + 1, join(array));
    }

    let pick = prompt_int("\nSelect an array number: ", 1, arrays.len() as i64)? as usize;
    let d = prompt_int("Enter the degree (d) of the heap: ", 1, i64::MAX)? as usize;

    let mut session = Session::build(arrays[pick - 1].clone(), d);

    loop {
        println!(
            "\nYour array with d={} is now heaped like this:\n{}",
            session.degree(),
            join(session.elements())
        );
        println!("\nChoose an operation:");
        println!("1. Insert Key");
        println!("2. Increase Key");
        println!("3. Extract Max");
        println!("4. Delete Key");
        println!("5. Exit");

        let choice = prompt_int("Enter your choice: ", 1, 5)?;
        let command = match choice {
            1 => {
                let key = prompt_int("Enter the key to insert: ", i32::MIN as i64, i32::MAX as i64)?;
                Command::Insert(key as i32)
            }
            2 => {
                let index = prompt_int("Enter the index: ", 0, i64::MAX)? as usize;
                let key = prompt_int("Enter the new key: ", i32::MIN as i64, i32::MAX as i64)?;
                Command::IncreaseKey {
                    index,
                    key: key as i32,
                }
            }
            3 => Command::ExtractMax,
            4 => {
                let index =
                    prompt_int("Enter the index of the key to delete: ", 0, i64::MAX)? as usize;
                Command::Delete(index)
            }
            _ => {
                println!("Exiting program.");
                return Ok(());
            }
        };

        match session.apply(command) {
            Ok(Outcome::Inserted(key)) => println!("Inserted {}", key),
            Ok(Outcome::Increased { index, key }) => {
                println!("Increased index {} to {}", index, key)
            }
            Ok(Outcome::Extracted(max)) => println!("Extracted Max: {}", max),
            Ok(Outcome::Deleted(key)) => println!("Deleted {}", key),
            Err(e) => println!("Operation failed: {}", e),
        }
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Re-prompts until the input parses as an integer in `min..=max`
fn prompt_int(prompt: &str, min: i64, max: i64) -> io::Result<i64> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(n) if n >= min && n <= max => return Ok(n),
            _ => println!(
                "Invalid input. Please enter a number between {} and {}.",
                min, max
            ),
        }
    }
}
