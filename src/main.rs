// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use cbam_dashboard::{Parameters, ViewModel};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "scenario" {
        // Non-interactive mode: print the default scenario and exit
        run_scenario()?;
    } else {
        // Dashboard mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_scenario() -> Result<()> {
    println!("📊 CBAM Impact Analysis - Default Scenario");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let params = Parameters::default();
    let view = ViewModel::compute(params);

    println!("\nInput parameters:");
    println!("  Total Emissions:        {:.2}", params.emissions);
    println!("  Total Output:           {:.2}", params.output);
    println!("  Direct Impact (deltaY): {:.2}", params.delta_y);

    println!("\nDerived quantities:");
    for line in view.readouts() {
        println!("  {}", line);
    }

    println!("\nView-model JSON:");
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading CBAM Impact Dashboard...\n");
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(Parameters::default());
    ui::run_ui(&mut app)?;

    println!("\n✅ Dashboard closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin cbam-server --features server");
    std::process::exit(1);
}
