//! Architecture discovery CLI - Run discovery cycles from JSON configuration.

use std::fs;
use std::path::PathBuf;

use arch_search::{DiscoveryPipeline, PipelineConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [cycles]", args[0]);
        eprintln!();
        eprintln!("Run architecture discovery cycles from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to pipeline configuration file");
        eprintln!("  cycles       Number of cycles to run (default: from config)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let mut config: PipelineConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Some(cycles) = args.get(2).and_then(|s| s.parse().ok()) {
        config.num_cycles = cycles;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    println!("Architecture Discovery");
    println!("======================");
    println!(
        "Model: {} (oracle {})",
        config.model,
        if config.use_oracle {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("History: {}", config.history_path.display());
    println!("Cycles: {}", config.num_cycles);
    println!();

    let mut pipeline = DiscoveryPipeline::new(&config).unwrap_or_else(|e| {
        eprintln!("Error opening history store: {}", e);
        std::process::exit(1);
    });

    for i in 0..config.num_cycles {
        match pipeline.run_cycle() {
            Ok(record) => {
                println!("Cycle {}/{}:", i + 1, config.num_cycles);
                println!("  {}", record.summary);
            }
            Err(e) => {
                eprintln!("Cycle {} failed: {}", i + 1, e);
                std::process::exit(1);
            }
        }
    }

    println!();
    match pipeline.store().best() {
        Ok(Some(best)) => {
            println!(
                "Best so far: {} (composite {:.2})",
                best.architecture.display_id(),
                best.composite_score
            );
        }
        Ok(None) => println!("No results recorded."),
        Err(e) => eprintln!("Error reading history: {}", e),
    }
}

fn print_example_config() {
    let config = PipelineConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
