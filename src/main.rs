//! Rock-paper-scissors automaton CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rps_automaton::{
    compute::{Automaton, GridStats},
    schema::{AutomatonConfig, LoadError, Seed},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a rock-paper-scissors automaton from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to automaton configuration file");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = AutomatonConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed = if seed_path.exists() {
        load_seed(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error loading seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Rock-Paper-Scissors Automaton");
    println!("=============================");
    println!("Grid: {}x{}", config.width, config.height);
    println!(
        "Rule: {} (initial level {}, edible level {}, young banquet {})",
        config.rule.variant,
        config.rule.initial_level,
        config.rule.edible_level,
        config.rule.young_banquet
    );
    println!("Neighbors: {}", config.neighbor_mode);
    println!("Seed: {}", seed.pattern.name());
    println!("Steps: {}", steps);
    println!();

    let mut automaton = Automaton::from_seed(config, &seed).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!("Initial state:");
    print_stats(&GridStats::from_grid(automaton.grid()));
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..steps {
        automaton.tick();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = GridStats::from_grid(automaton.grid());
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: rock={}, paper={}, scissors={}, {:.1} gen/s",
                i + 1,
                steps,
                stats.rock,
                stats.paper,
                stats.scissors,
                steps_per_sec
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final state:");
    print_stats(&GridStats::from_grid(automaton.grid()));
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        steps as f32 / elapsed.as_secs_f32()
    );
}

fn load_seed(path: &Path) -> Result<Seed, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_stats(stats: &GridStats) {
    println!("  Rock: {}", stats.rock);
    println!("  Paper: {}", stats.paper);
    println!("  Scissors: {}", stats.scissors);
    println!("  Empty: {}", stats.empty);
    println!(
        "  Level: mean {:.2}, max {}",
        stats.mean_level, stats.max_level
    );
}

fn print_example_config() {
    let config = AutomatonConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
