use std::process;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;

use qrwatch_core::capture::infrastructure::nokhwa_source::NokhwaSource;
use qrwatch_core::decoding::infrastructure::rqrr_decoder::RqrrDecoder;
use qrwatch_core::scanning::scan_session::{ScanSession, TickOutcome};
use qrwatch_core::shared::constants::TICK_INTERVAL;

/// Webcam QR code scanner with a timestamped sighting history.
#[derive(Parser)]
#[command(name = "qrwatch")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value = "0")]
    camera: u32,

    /// Stop after this many seconds and print the history
    /// (runs until killed otherwise).
    #[arg(long)]
    duration: Option<u64>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut session = ScanSession::new(
        Box::new(NokhwaSource::new(cli.camera)),
        Box::new(RqrrDecoder::new()),
    );
    session.start()?;
    log::info!("scanning on camera {}", cli.camera);

    let deadline = cli
        .duration
        .map(|secs| Instant::now() + Duration::from_secs(secs));
    loop {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                break;
            }
        }
        let now = Local::now();
        if let TickOutcome::Decoded { payloads, .. } = session.tick(now) {
            for payload in &payloads {
                println!("{}  {payload}", now.format("%H:%M:%S"));
            }
        }
        thread::sleep(TICK_INTERVAL);
    }
    session.stop();

    let history: Vec<String> = session.log().lines().collect();
    if history.is_empty() {
        log::info!("no QR codes detected");
    } else {
        println!();
        println!("History:");
        for line in history {
            println!("{line}");
        }
    }
    Ok(())
}
