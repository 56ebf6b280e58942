//! Game of Life CLI - Run and display simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, execute, queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use conway_life::{
    compute::Simulation,
    render::render_into,
    schema::{Seed, SimulationConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [max-steps]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation in the terminal.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  max-steps    Stop after this many generations (default: run until Ctrl-C)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");

        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let max_steps: Option<u64> = args.get(2).and_then(|s| s.parse().ok());

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    log::info!("Loaded config from {}", config_path.display());

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        log::info!(
            "No seed file at {}, using default seed",
            seed_path.display()
        );
        Seed::default()
    };

    println!("Conway's Game of Life");
    println!("=====================");
    println!("Grid: {}x{}", config.rows, config.cols);
    println!("Frame delay: {}ms", config.frame_delay_ms);
    match max_steps {
        Some(n) => println!("Max steps: {}", n),
        None => println!("Max steps: unlimited (Ctrl-C to stop)"),
    }
    println!();

    // Ctrl-C flips the stop flag; the display loop checks it each frame
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })
        .unwrap_or_else(|e| {
            eprintln!("Error installing Ctrl-C handler: {}", e);
            std::process::exit(1);
        });
    }

    let delay = Duration::from_millis(config.frame_delay_ms);
    let mut sim = Simulation::from_seed(&seed, &config);

    let start = Instant::now();
    if let Err(e) = run_display_loop(&mut sim, max_steps, delay, &running) {
        eprintln!("Display error: {}", e);
        std::process::exit(1);
    }
    let elapsed = start.elapsed();

    println!(
        "Stopped after {} generations ({} alive, {:.1} steps/s).",
        sim.generation(),
        sim.grid().population(),
        sim.generation() as f32 / elapsed.as_secs_f32()
    );
}

/// Restores the terminal when dropped, even if the loop errors out.
struct TermGuard;

impl TermGuard {
    fn new() -> io::Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    }
}

/// Draw frames until the stop flag clears or the step budget runs out.
fn run_display_loop(
    sim: &mut Simulation,
    max_steps: Option<u64>,
    delay: Duration,
    running: &AtomicBool,
) -> io::Result<()> {
    let _guard = TermGuard::new()?;
    let mut out = io::stdout();
    let mut frame = String::new();

    while running.load(Ordering::SeqCst) && max_steps.is_none_or(|max| sim.generation() < max) {
        render_into(sim.grid(), &mut frame);

        queue!(out, cursor::MoveTo(0, 0))?;
        write!(out, "{}", frame)?;
        writeln!(out)?;
        write!(
            out,
            "generation {:>6}  population {:>6}  (Ctrl-C to stop)",
            sim.generation(),
            sim.grid().population()
        )?;
        queue!(out, Clear(ClearType::FromCursorDown))?;
        out.flush()?;

        sim.step();
        thread::sleep(delay);
    }

    Ok(())
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
