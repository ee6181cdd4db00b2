//! syncframe Host Binary
//!
//! Exchanges pair records with an embedded peer over a serial port.
//! Each cycle sends `(a + 5, b + 5)`, waits, then adopts any pair the peer
//! sent back as the new `(a, b)`.

use std::thread;
use std::time::Duration;

use clap::Parser;
use syncframe::transport::open_serial;
use syncframe::{Config, Link};
use tracing_subscriber::{fmt, EnvFilter};

/// syncframe serial host
#[derive(Parser, Debug)]
#[command(name = "syncframe-host")]
#[command(about = "Exchange framed records with a serial peer")]
#[command(version)]
struct Args {
    /// Serial device path
    #[arg(short, long, default_value = "/dev/ttyACM0")]
    port: String,

    /// Baud rate
    #[arg(short, long, default_value = "115200")]
    baud: u32,

    /// Milliseconds between send/poll cycles
    #[arg(short, long, default_value = "1000")]
    interval_ms: u64,

    /// Milliseconds to wait for the peer to reset after opening the port
    #[arg(long, default_value = "2000")]
    startup_delay_ms: u64,

    /// Initial value of A
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    a: i32,

    /// Initial value of B
    #[arg(short = 'B', long, default_value = "2", allow_hyphen_values = true)]
    b: i32,

    /// Stop after this many cycles (runs forever if omitted)
    #[arg(short = 'n', long)]
    cycles: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,syncframe=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("syncframe host v{}", syncframe::VERSION);

    let config = Config::builder()
        .port(&args.port)
        .baud_rate(args.baud)
        .poll_interval_ms(args.interval_ms)
        .startup_delay_ms(args.startup_delay_ms)
        .build();

    if let Err(e) = run(&config, args.a, args.b, args.cycles) {
        tracing::error!("Host error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Host stopped");
}

fn run(config: &Config, mut a: i32, mut b: i32, cycles: Option<u64>) -> syncframe::Result<()> {
    config.validate()?;
    let transport = open_serial(config)?;
    let mut link = Link::new(transport, config)?;

    // The peer resets when the port opens
    thread::sleep(Duration::from_millis(config.startup_delay_ms));

    link.send_pair(100, 200)?;
    tracing::info!(a = 100, b = 200, "sent initial pair");

    let interval = Duration::from_millis(config.poll_interval_ms);
    let mut cycle = 0u64;

    while cycles.map_or(true, |limit| cycle < limit) {
        cycle += 1;

        let (next_a, next_b) = (a.wrapping_add(5), b.wrapping_add(5));
        link.send_pair(next_a, next_b)?;
        tracing::info!(a = next_a, b = next_b, "sent updated pair");

        thread::sleep(interval);

        if let Some(pair) = link.poll_pairs()?.pop() {
            a = pair.a;
            b = pair.b;
            tracing::info!(a, b, "received pair");
        }
    }

    let stats = link.stats();
    tracing::info!(
        accepted = stats.frames_accepted,
        rejected = stats.rejected(),
        discarded = stats.bytes_discarded,
        "link statistics"
    );

    Ok(())
}
