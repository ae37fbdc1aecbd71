// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

mod cli;

use clap::Parser;

use drills::counting::{Assisted, Counting, Explicit};
use drills::recursion::{combine, fib, letter_case_permutation, tribonacci};
use drills::search::{Counted, Threshold, binary_search, first_bad_version, search_insert, sorted_squares};
use drills::validate;

use cli::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    return execute_command(cli.command.unwrap_or(Command::Demo));
}

fn execute_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Demo => demo(),
        Command::SingleNumber { strategy, nums } => {
            validate::paired_except_one(&nums)?;
            match strategy.counting().single_number(&nums) {
                Some(value) => println!("{}", value),
                None => println!("no unpaired value"),
            }
        }
        Command::Intersect { strategy, left, right } => {
            println!("{:?}", strategy.counting().intersect(&left, &right));
        }
        Command::Anagram { strategy, s, t } => {
            println!("{}", strategy.counting().is_anagram(&s, &t));
        }
        Command::Search { target, sorted } => {
            validate::strictly_ascending(&sorted)?;
            match binary_search(&sorted, &target) {
                Some(index) => println!("{}", index),
                None => println!("not found"),
            }
        }
        Command::InsertPosition { target, sorted } => {
            validate::strictly_ascending(&sorted)?;
            println!("{}", search_insert(&sorted, &target));
        }
        Command::Squares { sorted } => {
            validate::ascending(&sorted)?;
            println!("{:?}", sorted_squares(&sorted));
        }
        Command::FirstBad { versions, threshold } => {
            validate::versions(versions, threshold)?;
            let mut oracle = Counted::new(Threshold::new(threshold));
            let first = first_bad_version(versions, &mut oracle);
            println!("{} ({} queries)", first, oracle.queries());
        }
        Command::Fib { n } => println!("{}", fib(n)),
        Command::Tribonacci { n } => println!("{}", tribonacci(n)),
        Command::LetterCase { s } => println!("{:?}", letter_case_permutation(&s)),
        Command::Combine { n, k } => println!("{:?}", combine(n, k)),
    }
    return Ok(());
}

/// The worked examples, one line each.
fn demo() {
    for line in demo_lines() {
        println!("{}", line);
    }
}

fn demo_lines() -> Vec<String> {
    let strategies: [&dyn Counting; 2] = [&Explicit, &Assisted];
    let mut lines = Vec::new();

    lines.push("== Frequency counting ==".to_string());
    for strategy in strategies {
        let name = strategy.name();
        lines.push(match strategy.single_number(&[4, 1, 2, 1, 2]) {
            Some(value) => format!("single_number ({}): {}", name, value),
            None => format!("single_number ({}): no unpaired value", name),
        });
        lines.push(format!("intersect ({}): {:?}", name, strategy.intersect(&[4, 9, 5], &[9, 4, 9, 8, 4])));
        lines.push(format!("is_anagram ({}): {}", name, strategy.is_anagram("anagram", "nagaram")));
        lines.push(format!("is_anagram ({}): {}", name, strategy.is_anagram("rat", "car")));
    }

    lines.push(String::new());
    lines.push("== Binary search ==".to_string());
    lines.push(match binary_search(&[-1, 0, 3, 5, 9, 12], &9) {
        Some(index) => format!("binary_search: {}", index),
        None => "binary_search: not found".to_string(),
    });
    lines.push(format!("sorted_squares: {:?}", sorted_squares(&[-4, -1, 0, 3, 10])));
    for target in [5, 2, 7] {
        lines.push(format!("search_insert({}): {}", target, search_insert(&[1, 3, 5, 6], &target)));
    }
    let mut oracle = Threshold::new(4);
    lines.push(format!("first_bad_version: {}", first_bad_version(5, &mut oracle)));

    lines.push(String::new());
    lines.push("== Recursion & backtracking ==".to_string());
    lines.push(format!("fib(5): {}", fib(5)));
    lines.push(format!("tribonacci(5): {}", tribonacci(5)));
    lines.push(format!("letter_case_permutation: {:?}", letter_case_permutation("a1b2")));
    lines.push(format!("combine(4, 2): {:?}", combine(4, 2)));
    return lines;
}
