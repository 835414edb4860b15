//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::io::{self, IsTerminal, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatstats::cli::Args;
use chatstats::format::{to_format_string, write_report};
use chatstats::{Analyzer, ChatstatsError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// `RUST_LOG` wins over `-v` / `-q`.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();

    let format = args.output_format()?;
    let analyzer = Analyzer::with_config(args.analysis_config()?)?;
    info!(input = %args.input.display(), %format, "starting analysis");

    let Some(output_path) = &args.output else {
        let report = analyzer.analyze_path(&args.input)?;
        let rendered = to_format_string(&report, format)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return Ok(());
    };

    let progress = !args.quiet;
    if progress {
        println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        println!("💾 Output:  {}", output_path);
        println!("📄 Format:  {}", format);
        let locale = analyzer.config().locale;
        println!("🌐 Locale:  {} ({})", locale, locale.code());
        println!();
        println!("⏳ Analyzing...");
    }

    let analyze_start = Instant::now();
    let report = analyzer.analyze_path(&args.input)?;
    let analyze_time = analyze_start.elapsed();

    write_report(&report, output_path, format)?;

    if progress {
        println!(
            "   Found {} messages from {} authors ({:.2}s)",
            report.total_messages,
            report.user_msg_count.len(),
            analyze_time.as_secs_f64()
        );
        println!();
        println!("✅ Done! Report saved to {}", output_path);
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}
