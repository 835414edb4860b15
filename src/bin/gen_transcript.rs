//! Synthetic transcript generator for stress testing chatstats.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_transcript -- 500000 big_chat.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Ayşe Yılmaz",
    "Mehmet",
    "+90 555 123 45 67",
    "Smith; John",
    "🔥FireUser🔥",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💔", "🎉", "🙏",
];

const WORDS: &[&str] = &[
    "merhaba", "bugün", "yarın", "akşam", "yemek", "toplantı", "hello", "tomorrow", "dinner",
    "meeting", "evet", "tamam", "hayır", "okay", "yeah", "çok", "güzel", "film", "kahve",
];

const APOLOGIES: &[&str] = &["özür dilerim", "kusura bakma", "pardon", "sorry", "affet beni"];

const AFFECTION: &[&str] = &["seni seviyorum", "canım", "aşkım", "<3", "love you", "❤️", "😘"];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut clock = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or(NaiveDateTime::MIN);

    for i in 0..count {
        clock += next_gap(&mut rng);
        let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Alice");
        let body = generate_body(&mut rng, i);

        let line = format!("{} - {}: {}\n", stamp(&clock, i), author, body);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Lines the analyzer has to skip
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes())?;
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

/// Mostly quick replies, sometimes a silence long enough to start a new
/// conversation.
fn next_gap(rng: &mut impl Rng) -> Duration {
    match rng.gen_range(0..100) {
        0..=79 => Duration::seconds(rng.gen_range(5..600)),
        80..=94 => Duration::seconds(rng.gen_range(600..10_800)),
        _ => Duration::seconds(rng.gen_range(10_801..200_000)),
    }
}

/// Alternates between two- and four-digit years, with and without the comma.
fn stamp(clock: &NaiveDateTime, index: usize) -> String {
    match index % 4 {
        0 => clock.format("%d.%m.%y, %H:%M").to_string(),
        1 => clock.format("%d.%m.%Y, %H:%M").to_string(),
        2 => clock.format("%-d.%-m.%y %H:%M").to_string(),
        _ => clock.format("%d.%m.%Y %-H:%M").to_string(),
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    let mut body = (0..rng.gen_range(1..12))
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ");

    let extra: String = match index % 10 {
        0 => APOLOGIES.choose(rng).copied().unwrap_or_default().to_string(),
        1 | 2 => AFFECTION.choose(rng).copied().unwrap_or_default().to_string(),
        3 => (0..rng.gen_range(1..4))
            .filter_map(|_| EMOJIS.choose(rng).copied())
            .collect(),
        _ => String::new(),
    };

    if !extra.is_empty() {
        body.push(' ');
        body.push_str(&extra);
    }
    body
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "this line continues the previous message\n".to_string(),
        1 => "31.02.23, 10:00 - Alice: impossible date\n".to_string(),
        2 => "01.01.23, 10:00 - Messages are end-to-end encrypted.\n".to_string(),
        3 => "\n".to_string(),
        _ => "☠️💀👻 Random emoji line 👻💀☠️\n".to_string(),
    }
}
