// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

use clap::{Parser, Subcommand, ValueEnum};

use drills::counting::{Assisted, Counting, Explicit};

#[derive(Parser, Debug)]
#[command(name = "drills", about = "Run hashing, binary search, and backtracking exercises", version)]
pub struct Cli {
    /// Defaults to `demo`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replay the worked examples for every exercise.
    Demo,
    /// Find the value that is not paired.
    SingleNumber {
        #[arg(long, value_enum, default_value_t = StrategyArg::Explicit)]
        strategy: StrategyArg,
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Multiset intersection, in the order of `--right`.
    Intersect {
        #[arg(long, value_enum, default_value_t = StrategyArg::Explicit)]
        strategy: StrategyArg,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        left: Vec<i64>,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        right: Vec<i64>,
    },
    /// Is `t` a rearrangement of `s`?
    Anagram {
        #[arg(long, value_enum, default_value_t = StrategyArg::Explicit)]
        strategy: StrategyArg,
        s: String,
        t: String,
    },
    /// Index of `--target` in a strictly ascending list.
    Search {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        sorted: Vec<i64>,
    },
    /// Index of `--target`, or where it would be inserted.
    InsertPosition {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        sorted: Vec<i64>,
    },
    /// Squares of an ascending list, ascending.
    Squares {
        #[arg(allow_negative_numbers = true)]
        sorted: Vec<i64>,
    },
    /// Locate the first bad version against a threshold oracle.
    FirstBad {
        #[arg(long)]
        versions: u64,
        #[arg(long)]
        threshold: u64,
    },
    /// Naive recursive Fibonacci.
    Fib { n: u32 },
    /// Naive recursive Tribonacci.
    Tribonacci { n: u32 },
    /// Every upper/lower case choice for the letters of `s`.
    LetterCase { s: String },
    /// Every `k`-element increasing sequence from `1..=n`.
    Combine { n: u32, k: u32 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    Explicit,
    Assisted,
}

impl StrategyArg {
    pub fn counting(self) -> Box<dyn Counting> {
        return match self {
            StrategyArg::Explicit => Box::new(Explicit),
            StrategyArg::Assisted => Box::new(Assisted),
        };
    }
}
