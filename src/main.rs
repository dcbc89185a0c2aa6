//! tritcalc - packed ternary calculator
//!
//! Commands:
//! - `tritcalc encode <value>` - Show the unbalanced and balanced encodings
//! - `tritcalc decode <bits>` - Decode packed bits (`--unbalanced` for 0/1/2 words)
//! - `tritcalc add|sub <a> <b>` - Balanced ternary arithmetic
//! - `tritcalc and|or|xor <a> <b>`, `tritcalc not <a>` - Trit-wise logic
//! - `tritcalc shl|shr <a> <n>` - Trit shifts
//! - `tritcalc selftest` - Run the built-in self-test
//!
//! `--width` selects 8, 16 or 32 trits (default 32); `--json` prints one JSON
//! object per invocation.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use ternary::{
    add, and, balanced_to_binary, balanced_to_unbalanced, binary_to_balanced,
    binary_to_unbalanced, not, or, shift_left, shift_right, sub, unbalanced_to_balanced,
    unbalanced_to_binary, xor, AddOutcome, BalancedWord, TernaryError, Trit16, Trit32, Trit8,
    UnbalancedWord, Width,
};

#[derive(Parser)]
#[command(name = "tritcalc")]
#[command(version)]
#[command(about = "Fixed-width packed balanced ternary calculator")]
struct Cli {
    /// Word width in trits
    #[arg(short, long, value_enum, default_value = "32", global = true)]
    width: WidthArg,
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WidthArg {
    #[value(name = "8")]
    Trits8,
    #[value(name = "16")]
    Trits16,
    #[value(name = "32")]
    Trits32,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a non-negative integer in both alphabets
    Encode {
        value: u64,
    },
    /// Decode packed bits (hex with 0x prefix, or decimal)
    Decode {
        #[arg(value_parser = parse_bits)]
        bits: u64,
        /// Treat the bits as an unbalanced word
        #[arg(short, long)]
        unbalanced: bool,
    },
    /// Add two integers in balanced ternary
    #[command(allow_negative_numbers = true)]
    Add { a: i64, b: i64 },
    /// Subtract two integers in balanced ternary (a - b)
    #[command(allow_negative_numbers = true)]
    Sub { a: i64, b: i64 },
    /// Trit-wise AND
    #[command(allow_negative_numbers = true)]
    And { a: i64, b: i64 },
    /// Trit-wise OR
    #[command(allow_negative_numbers = true)]
    Or { a: i64, b: i64 },
    /// Trit-wise XOR
    #[command(allow_negative_numbers = true)]
    Xor { a: i64, b: i64 },
    /// Trit-wise NOT
    #[command(allow_negative_numbers = true)]
    Not { a: i64 },
    /// Shift left by n trits
    #[command(allow_negative_numbers = true)]
    Shl { a: i64, n: usize },
    /// Shift right by n trits
    #[command(allow_negative_numbers = true)]
    Shr { a: i64, n: usize },
    /// Run the built-in self-test
    Selftest,
}

/// One line of output.
#[derive(Serialize)]
struct Report {
    trits: usize,
    operation: &'static str,
    operands: Vec<i64>,
    value: i64,
    bits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unbalanced_bits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overflow: Option<bool>,
}

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("tritcalc {}", env!("CARGO_PKG_VERSION"));
        println!("Fixed-width packed balanced ternary calculator");
        println!();
        println!("Use --help for available commands");
        return;
    };

    let result = match cli.width {
        WidthArg::Trits8 => run::<Trit8>(command),
        WidthArg::Trits16 => run::<Trit16>(command),
        WidthArg::Trits32 => run::<Trit32>(command),
    };

    match result {
        Ok(Some(report)) => print_report(&report, cli.json),
        Ok(None) => {}
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_bits(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid bits '{}': {}", s, e))
}

fn hex<W: Width>(bits: u64) -> String {
    format!("{:#0w$x}", bits, w = (W::BITS / 4) as usize + 2)
}

fn balanced<W: Width>(value: i64) -> Result<BalancedWord<W>, TernaryError> {
    BalancedWord::from_i64(value)
}

fn word_report<W: Width>(operation: &'static str, operands: Vec<i64>, word: BalancedWord<W>) -> Report {
    Report {
        trits: W::TRITS,
        operation,
        operands,
        value: word.to_i64(),
        bits: hex::<W>(word.to_u64_bits()),
        unbalanced_bits: None,
        overflow: None,
    }
}

fn sum_report<W: Width>(operation: &'static str, operands: Vec<i64>, outcome: AddOutcome<W>) -> Report {
    Report {
        overflow: Some(outcome.overflowed()),
        ..word_report(operation, operands, outcome.word)
    }
}

fn run<W: Width>(command: Commands) -> Result<Option<Report>, TernaryError> {
    let report = match command {
        Commands::Encode { value } => {
            let unbalanced = UnbalancedWord::<W>::from_u64(value)?;
            let word = unbalanced_to_balanced(unbalanced)?;
            Report {
                unbalanced_bits: Some(hex::<W>(unbalanced.to_u64_bits())),
                ..word_report("encode", vec![value as i64], word)
            }
        }
        Commands::Decode { bits, unbalanced: true } => {
            let word = UnbalancedWord::<W>::from_u64_bits(bits)?;
            Report {
                trits: W::TRITS,
                operation: "decode",
                operands: vec![],
                value: word.to_u64() as i64,
                bits: hex::<W>(bits),
                unbalanced_bits: Some(hex::<W>(bits)),
                overflow: None,
            }
        }
        Commands::Decode { bits, unbalanced: false } => {
            let word = BalancedWord::<W>::from_u64_bits(bits)?;
            word_report("decode", vec![], word)
        }
        Commands::Add { a, b } => sum_report("add", vec![a, b], add(balanced::<W>(a)?, balanced::<W>(b)?)),
        Commands::Sub { a, b } => sum_report("sub", vec![a, b], sub(balanced::<W>(a)?, balanced::<W>(b)?)),
        Commands::And { a, b } => word_report("and", vec![a, b], and(balanced::<W>(a)?, balanced::<W>(b)?)),
        Commands::Or { a, b } => word_report("or", vec![a, b], or(balanced::<W>(a)?, balanced::<W>(b)?)),
        Commands::Xor { a, b } => word_report("xor", vec![a, b], xor(balanced::<W>(a)?, balanced::<W>(b)?)),
        Commands::Not { a } => word_report("not", vec![a], not(balanced::<W>(a)?)),
        Commands::Shl { a, n } => word_report("shl", vec![a, n as i64], shift_left(balanced::<W>(a)?, n)),
        Commands::Shr { a, n } => word_report("shr", vec![a, n as i64], shift_right(balanced::<W>(a)?, n)),
        Commands::Selftest => {
            run_self_test();
            return Ok(None);
        }
    };
    Ok(Some(report))
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("❌ Failed to encode JSON: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{} ({} trits)", report.operation, report.trits);
    if !report.operands.is_empty() {
        let operands: Vec<String> = report.operands.iter().map(|o| o.to_string()).collect();
        println!("  operands:   {}", operands.join(", "));
    }
    println!("  value:      {}", report.value);
    println!("  balanced:   {}", report.bits);
    if let Some(bits) = &report.unbalanced_bits {
        println!("  unbalanced: {}", bits);
    }
    if report.overflow == Some(true) {
        println!();
        println!("⚠️  Result does not fit in {} trits; value is truncated.", report.trits);
    }
}

fn run_self_test() {
    println!("━━━ tritcalc Self-Test ━━━");
    println!();

    let checks: [(&str, fn() -> bool); 7] = [
        ("Balanced roundtrip (8 trits)", || {
            (0..=3_280u16).all(|v| {
                binary_to_balanced::<Trit8>(v).map(balanced_to_binary) == Ok(v as i16)
            })
        }),
        ("Unbalanced roundtrip (8 trits)", || {
            (0..=6_560u16).all(|v| {
                binary_to_unbalanced::<Trit8>(v).map(unbalanced_to_binary) == Ok(v)
            })
        }),
        ("Cross-alphabet roundtrip (16 trits)", || {
            [0u32, 1, 2, 12_345, 21_523_360].iter().all(|&v| {
                binary_to_balanced::<Trit16>(v)
                    .and_then(balanced_to_unbalanced)
                    .and_then(unbalanced_to_balanced)
                    .map(balanced_to_binary)
                    == Ok(v as i32)
            })
        }),
        ("2 + 3 = 5", || {
            match (binary_to_balanced::<Trit8>(2), binary_to_balanced::<Trit8>(3)) {
                (Ok(a), Ok(b)) => balanced_to_binary(add(a, b).word) == 5,
                _ => false,
            }
        }),
        ("Subtraction (32 trits)", || {
            match (binary_to_balanced::<Trit32>(1_000), binary_to_balanced::<Trit32>(4_000_000_000)) {
                (Ok(a), Ok(b)) => balanced_to_binary(sub(a, b).word) == 1_000 - 4_000_000_000,
                _ => false,
            }
        }),
        ("Overflow detection", || {
            match (binary_to_balanced::<Trit8>(3_280), binary_to_balanced::<Trit8>(1)) {
                (Ok(a), Ok(b)) => add(a, b).overflowed(),
                _ => false,
            }
        }),
        ("Shift left (×3)", || {
            binary_to_balanced::<Trit8>(1).map(|w| balanced_to_binary(shift_left(w, 1))) == Ok(3)
        }),
    ];

    let mut passed = 0;
    let mut failed = 0;

    for (name, check) in checks {
        print!("{}... ", name);
        if check() {
            println!("✓");
            passed += 1;
        } else {
            println!("✗");
            failed += 1;
        }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
