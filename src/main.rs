use clap::Parser;
use log::{error, info, warn, LevelFilter};
use looptimer::{IntervalTimer, MonotonicClock, SystemClock};
use rand::Rng;
use simple_logger::SimpleLogger;
use std::time::Duration;

/// Runs a control loop that polls an interval timer off the system clock.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Interval between expiries, in milliseconds
    #[arg(short, long, default_value_t = 250, allow_negative_numbers = true)]
    interval_ms: i64,

    /// Loop period, in milliseconds
    #[arg(short, long, default_value_t = 10)]
    poll_ms: u64,

    /// Up to this many extra milliseconds of random delay per loop iteration
    #[arg(short, long, default_value_t = 0)]
    jitter_ms: u64,

    /// Stop after this many expiries
    #[arg(short = 'n', long, default_value_t = 10)]
    expiries: u32,

    /// First reading of the clock; set close to u32::MAX to watch it wrap
    #[arg(short, long, default_value_t = 0)]
    start_ms: u32,

    #[arg(short, long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn run_loop<C: MonotonicClock>(timer: &mut IntervalTimer<C>, args: &Args) {
    let mut rng = rand::thread_rng();
    let mut fired = 0;

    while fired < args.expiries {
        if timer.has_expired() {
            fired += 1;
            info!("Expiry {}/{} at {} ms", fired, args.expiries, timer.last_reference_ms());
        }

        let jitter = if args.jitter_ms > 0 { rng.gen_range(0..=args.jitter_ms) } else { 0 };
        std::thread::sleep(Duration::from_millis(args.poll_ms + jitter));
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level).init() {
        eprintln!("Cannot set up logging: {}", e);
        std::process::exit(1);
    }

    let clock = SystemClock::starting_at(args.start_ms);
    let mut timer = match IntervalTimer::try_new(args.interval_ms, clock) {
        Ok(timer) => timer,
        Err(e) => {
            error!("Cannot create timer: {}", e);
            std::process::exit(1);
        }
    };

    if args.poll_ms + args.jitter_ms > timer.interval_ms() as u64 {
        warn!("Loop may run slower than the {} ms interval, expect late expiries", timer.interval_ms());
    }

    info!("Polling every {} ms (+ up to {} ms jitter) for {} expiries", args.poll_ms, args.jitter_ms, args.expiries);
    run_loop(&mut timer, &args);
    info!("Done at {} ms", timer.clock().now_ms());
}
