//! Pass Forge - configurable password generation and strength assessment
//!
//! A simple and elegant CLI tool for generating batches of passwords,
//! scoring their strength, and exporting them with an expiration countdown.

use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, Select, Text};
use pass_forge::{
    evaluate, validation_error, ComplexityTier, ExpiryOutcome, ExpiryTimer, GenerationConfig,
    MetricsSnapshot, PassForgeError, PasswordBatch, PasswordGenerator, Result, StrengthTier,
};
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = pass_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        println!("pass-forge {}", pass_forge::VERSION);
        return Ok(());
    }

    // A positional length runs quick mode; no arguments start a session
    let result = match args.get(1) {
        Some(arg) => run_quick(arg),
        None => run_interactive().await,
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// One password with default settings at the given length
fn run_quick(arg: &str) -> Result<()> {
    let length: usize = arg
        .trim()
        .parse()
        .map_err(|_| validation_error!("Expected a password length, got '{}'", arg))?;

    println!("🔐 Pass Forge - quick generation");
    println!("═══════════════════════════════");

    let config = GenerationConfig {
        length,
        ..Default::default()
    };
    let generator = PasswordGenerator::new();
    let batch = generator.generate_batch(&config, 1)?;

    display_batch(&batch);
    display_strength(&batch);

    Ok(())
}

/// Full interactive workflow
async fn run_interactive() -> Result<()> {
    println!("🔐 Pass Forge - password generation and strength assessment");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let generator = PasswordGenerator::new();

    // Recoverable errors send the user back through the prompts
    let (batch, lifetime_secs) = loop {
        let (config, count, lifetime_secs) = collect_config()?;

        match generator.generate_batch(&config, count) {
            Ok(batch) => {
                break (
                    batch.with_lifetime(Duration::from_secs(lifetime_secs)),
                    lifetime_secs,
                )
            }
            Err(e) if e.is_recoverable() => {
                println!();
                println!("{}", e.user_message());
                println!();
            }
            Err(e) => return Err(e),
        }
    };

    display_batch(&batch);
    display_strength(&batch);
    display_summary(&batch, generator.get_metrics_snapshot());

    prompt_save(&batch)?;

    run_countdown(lifetime_secs).await
}

/// Collect generation settings interactively
fn collect_config() -> Result<(GenerationConfig, usize, u64)> {
    let length = prompt_number("Password length:", 12, 6, 32)? as usize;

    let complexity = Select::new("Complexity tier:", ComplexityTier::all())
        .with_starting_cursor(1)
        .prompt()?;

    let include_digits = Confirm::new("Include digits?").with_default(false).prompt()?;

    let include_special = Confirm::new("Include special characters?")
        .with_default(false)
        .prompt()?;

    let custom_special_chars = if include_special {
        Some(prompt_special_chars()?)
    } else {
        None
    };

    let count = prompt_number("How many passwords?", 1, 1, 10)? as usize;
    let lifetime_secs = prompt_number("Expiration time (seconds):", 60, 10, 300)?;

    let config = GenerationConfig {
        length,
        include_digits,
        include_special,
        custom_special_chars,
        complexity,
    };

    Ok((config, count, lifetime_secs))
}

/// Prompt for the custom special set, re-asking until it validates
fn prompt_special_chars() -> Result<String> {
    loop {
        let input = Text::new("Special characters to use:")
            .with_default("!@#$%^&*")
            .prompt()?;
        let input = input.trim();

        match GenerationConfig::validate_special_chars(input) {
            Ok(()) => return Ok(input.to_string()),
            Err(e) => println!("⚠️  {}", e),
        }
    }
}

/// Prompt for a number inside an inclusive range, re-asking on bad input
fn prompt_number(label: &str, default: u64, min: u64, max: u64) -> Result<u64> {
    let default_str = default.to_string();
    loop {
        let input = Text::new(label).with_default(&default_str).prompt()?;
        match input.trim().parse::<u64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => println!("⚠️  Enter a number between {} and {}", min, max),
        }
    }
}

/// Display the generated batch with per-password strength icons
fn display_batch(batch: &PasswordBatch) {
    println!();
    println!("🔑 Generated Passwords ({}):", batch.passwords.len());
    println!("═══════════════════════════");
    for (i, item) in batch.passwords.iter().enumerate() {
        println!("{:2}. {} {}", i + 1, tier_icon(item.tier), item.value);
    }
    println!();
}

/// Show the detailed strength checks for the first password
fn display_strength(batch: &PasswordBatch) {
    let Some(first) = batch.passwords.first() else {
        return;
    };

    let report = evaluate(&first.value);
    println!(
        "🛡️  Strength: {} {} ({}/4 checks)",
        tier_icon(report.tier()),
        tier_label(report.tier()),
        report.score()
    );

    let hints = report.missing_criteria();
    if !hints.is_empty() {
        println!("   💡 To improve: {}", hints.join(", "));
    }
    println!();
}

/// Batch summary with tier counts and generation metrics
fn display_summary(batch: &PasswordBatch, metrics: MetricsSnapshot) {
    println!("📈 Summary:");
    println!("   🟢 Strong: {}", batch.tier_count(StrengthTier::Strong));
    println!("   🟡 Medium: {}", batch.tier_count(StrengthTier::Medium));
    println!("   🔴 Weak: {}", batch.tier_count(StrengthTier::Weak));
    println!("   📊 Total generated: {}", metrics.passwords_generated);
    if metrics.batches_generated > 0 {
        println!("   ⏱️  Average batch time: {:.1}ms", metrics.avg_batch_time_ms());
    }
    println!();
}

/// Offer to export the batch as a plain-text file
fn prompt_save(batch: &PasswordBatch) -> Result<()> {
    let save = Confirm::new("Save passwords to a file?")
        .with_default(false)
        .prompt()?;

    if !save {
        return Ok(());
    }

    let default_path = PasswordBatch::default_export_path();
    let default_str = default_path.to_string_lossy().to_string();
    let path_input = Text::new("File path:").with_default(&default_str).prompt()?;
    let path = PathBuf::from(path_input.trim());

    batch.write_plain_text(&path)?;
    println!("💾 Saved {} password(s) to {}", batch.passwords.len(), path.display());

    Ok(())
}

/// Run the expiration countdown with a progress bar; Ctrl-C dismisses it
async fn run_countdown(lifetime_secs: u64) -> Result<()> {
    println!("⏳ Passwords expire in {}s (Ctrl-C to dismiss)", lifetime_secs);

    let timer = ExpiryTimer::new(Duration::from_secs(lifetime_secs));

    let token = timer.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let bar = ProgressBar::new(lifetime_secs);
    bar.set_style(
        ProgressStyle::with_template("   [{bar:40.cyan/blue}] {pos}/{len}s")
            .map_err(|e| PassForgeError::internal(e.to_string()))?
            .progress_chars("█▓░"),
    );

    let outcome = timer
        .run_with_ticks(Duration::from_secs(1), |remaining| {
            bar.set_position(lifetime_secs.saturating_sub(remaining.as_secs()));
        })
        .await;

    bar.finish_and_clear();
    match outcome {
        ExpiryOutcome::Expired => println!("⚠️  Passwords expired! Generate new ones."),
        ExpiryOutcome::Cancelled => println!("👋 Countdown dismissed."),
    }

    Ok(())
}

fn tier_icon(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Strong => "🟢",
        StrengthTier::Medium => "🟡",
        StrengthTier::Weak => "🔴",
    }
}

fn tier_label(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Strong => "Strong",
        StrengthTier::Medium => "Medium",
        StrengthTier::Weak => "Weak",
    }
}

/// Print help information
fn print_help() {
    println!("🔐 Pass Forge - password generation and strength assessment");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    pass-forge [LENGTH]");
    println!();
    println!("EXAMPLES:");
    println!("    pass-forge            # Interactive session");
    println!("    pass-forge 16         # One 16-character password with defaults");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help");
    println!("    -V, --version    Show version");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PASS_FORGE_OUTPUT  Default path for saved password files");
    println!();
    println!("FEATURES:");
    println!("    • Complexity tiers with optional digit and special blocks");
    println!("    • Heuristic strength labels (🟢 strong / 🟡 medium / 🔴 weak)");
    println!("    • Batch generation with newline-joined file export");
    println!("    • Cancellable expiration countdown");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
