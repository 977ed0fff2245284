use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tc_app::{
    AppResult, CalculationOptions, CalculationRequest, CalculationResponse, calculation_service,
    history_service, input_service,
};
use tc_calc::TransformerResults;
use tc_report::{FieldMapper, ResultSection};
use tc_results::DEFAULT_LIST_LIMIT;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "TransfoCalc CLI - distribution transformer design calculator", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input file
    Validate {
        /// Path to the inputs YAML or JSON file
        input_path: PathBuf,
    },
    /// Run every calculation for an input file
    Calculate {
        /// Path to the inputs YAML or JSON file
        input_path: PathBuf,
        /// Print the full results as JSON
        #[arg(long)]
        json: bool,
        /// Also print the report field mapping
        #[arg(long)]
        fields: bool,
        /// Store the calculation in history
        #[arg(long)]
        save: bool,
        /// History directory (defaults to .transfocalc/history next to the input)
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },
    /// Print the report field mapping for an input file
    Fields {
        /// Path to the inputs YAML or JSON file
        input_path: PathBuf,
        /// Print the diagnostic mapping report instead of JSON
        #[arg(long)]
        report: bool,
        /// Only map one result section (electrical, winding, geometry, thermal)
        #[arg(long)]
        section: Option<String>,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse stored calculations
    #[command(subcommand)]
    History(HistoryCommands),
    /// Print a timestamped file name for a generated report
    ReportName,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List stored calculations, newest first
    List {
        /// Path to the inputs file the history belongs to
        input_path: PathBuf,
        /// Maximum number of entries
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },
    /// Show a stored calculation as JSON
    Show {
        input_path: PathBuf,
        /// Calculation ID
        id: String,
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },
    /// Delete a stored calculation
    Delete {
        input_path: PathBuf,
        /// Calculation ID
        id: String,
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { input_path } => cmd_validate(&input_path),
        Commands::Calculate {
            input_path,
            json,
            fields,
            save,
            history_dir,
        } => cmd_calculate(&input_path, json, fields, save, history_dir.as_deref()),
        Commands::Fields {
            input_path,
            report,
            section,
            output,
        } => cmd_fields(&input_path, report, section.as_deref(), output.as_deref()),
        Commands::History(history_cmd) => match history_cmd {
            HistoryCommands::List {
                input_path,
                limit,
                history_dir,
            } => cmd_history_list(&input_path, limit, history_dir.as_deref()),
            HistoryCommands::Show {
                input_path,
                id,
                history_dir,
            } => cmd_history_show(&input_path, &id, history_dir.as_deref()),
            HistoryCommands::Delete {
                input_path,
                id,
                history_dir,
            } => cmd_history_delete(&input_path, &id, history_dir.as_deref()),
        },
        Commands::ReportName => {
            println!("{}", tc_report::report_file_name_now());
            Ok(())
        }
    }
}

/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_validate(input_path: &Path) -> AppResult<()> {
    println!("Validating inputs: {}", input_path.display());
    let inputs = input_service::load_inputs(input_path)?;
    let summary = input_service::summarize(&inputs);
    println!("✓ Inputs are valid");
    if let Some(client) = &summary.client_name {
        println!("  Client: {}", client);
    }
    if let Some(project) = &summary.project_name {
        println!("  Project: {}", project);
    }
    println!(
        "  Rating: {} kVA, {} V / {} V",
        summary.power_kva, summary.primary_voltage, summary.secondary_voltage
    );
    Ok(())
}

fn cmd_calculate(
    input_path: &Path,
    json: bool,
    fields: bool,
    save: bool,
    history_dir: Option<&Path>,
) -> AppResult<()> {
    let inputs = input_service::load_inputs(input_path)?;
    debug!(path = %input_path.display(), save, "loaded inputs");
    let response = calculation_service::run_calculation(CalculationRequest {
        inputs,
        input_path: Some(input_path),
        history_dir,
        options: CalculationOptions {
            save_to_history: save,
            ..CalculationOptions::default()
        },
    })?;

    if json {
        println!("{}", calculation_service::to_json(&response.results)?);
    } else {
        print_results(&response);
    }

    if fields {
        println!("{}", calculation_service::to_json(&response.fields)?);
    }
    Ok(())
}

fn print_results(response: &CalculationResponse) {
    let r: &TransformerResults = &response.results;
    let e = &r.electrical;
    let w = &r.winding;
    let t = &r.thermal;

    println!("✓ Calculation {}", short_id(&response.calculation_id));
    if response.saved_to_history {
        println!("  Saved to history");
    }

    println!("\nElectrical:");
    println!(
        "  Line currents: I1 = {:.3} A, I2 = {:.2} A",
        e.line_current_primary, e.line_current_secondary
    );
    println!(
        "  Phase voltages: {:.2} V / {:.2} V",
        e.phase_voltage_primary, e.phase_voltage_secondary
    );
    println!(
        "  Voltage classes: {} / {} (unit {})",
        e.voltage_class_primary, e.voltage_class_secondary, e.voltage_class_highest
    );
    println!(
        "  Losses: copper {:.2} W, core {:.2} W, total {:.2} W",
        e.copper_losses_w, e.core_losses_w, t.total_losses_w
    );

    println!("\nWinding:");
    println!("  Volts per turn: {:.2}", w.volts_per_turn);
    println!("  Turns: N1 = {}, N2 = {}", w.primary_turns, w.secondary_turns);
    println!(
        "  Conductor sections: {:.2} / {:.2} mm²",
        w.primary_section_mm2, w.secondary_section_mm2
    );
    println!(
        "  Current densities: {:.2} / {:.2} A/mm²",
        w.primary_current_density, w.secondary_current_density
    );

    println!("\nThermal:");
    println!(
        "  Max temperature: {} °C (rise {} K, class {})",
        t.max_temperature_c, t.temperature_rise, t.thermal_class
    );
    println!("  Suggested cooling: {}", r.suggested_cooling_class);

    println!("\nMechanical:");
    println!("  Copper mass: {:.1} kg", r.copper_mass_kg);
    println!("  Core weight: {:.1} kg", r.geometry.core_weight_kg);
    println!("  Total weight: {:.1} kg", r.mechanical.total_weight_kg);
    println!("  Dimensions: {} mm", r.mechanical.dimensions_mm);

    println!("\nPerformance:");
    println!(
        "  Efficiency: {:.2} % ({})",
        r.efficiency_pct,
        r.innovation.efficiency_class.label()
    );
    println!("  Innovation score: {:.1}", r.innovation.innovation_score);
    println!(
        "  CO2: {:.1} kg, recyclability {:.0} %",
        r.co2.carbon_footprint_kg, r.co2.recyclability_pct
    );

    println!("\nBill of materials:");
    for line in &r.bom {
        println!(
            "  {:<20} {:>6} x {:>8.2} = {:>10.2}",
            line.component, line.quantity, line.unit_cost, line.total_cost
        );
    }
    println!("  Total: {:.2}", r.bom_cost);
    println!("  Lifetime cost: {:.2}", r.lifetime_cost_eur);
}

fn cmd_fields(
    input_path: &Path,
    report: bool,
    section: Option<&str>,
    output: Option<&Path>,
) -> AppResult<()> {
    let inputs = input_service::load_inputs(input_path)?;

    let text = if let Some(name) = section {
        let section: ResultSection = name.parse()?;
        let results = calculation_service::run_calculation(CalculationRequest::new(inputs))?.results;
        let fields = FieldMapper::new().map_section(&results, section)?;
        calculation_service::to_json(&fields)?
    } else {
        let response = calculation_service::run_calculation(CalculationRequest::new(inputs.clone()))?;
        if report {
            calculation_service::mapping_report(&inputs, &response.results, &response.fields)?
        } else {
            calculation_service::to_json(&response.fields)?
        }
    };

    if let Some(path) = output {
        std::fs::write(path, format!("{text}\n"))?;
        println!("✓ Wrote field mapping to {}", path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_history_list(input_path: &Path, limit: usize, history_dir: Option<&Path>) -> AppResult<()> {
    let store = history_service::history_store(Some(input_path), history_dir)?;
    let records = history_service::list_calculations(&store, limit)?;

    if records.is_empty() {
        println!("No stored calculations in {}", store.root_dir().display());
    } else {
        println!("Stored calculations:");
        for record in records {
            println!("  {}", record.summary());
        }
    }
    Ok(())
}

fn cmd_history_show(input_path: &Path, id: &str, history_dir: Option<&Path>) -> AppResult<()> {
    let store = history_service::history_store(Some(input_path), history_dir)?;
    let record = history_service::load_calculation(&store, id)?;
    println!("{}", calculation_service::to_json(&record)?);
    Ok(())
}

fn cmd_history_delete(input_path: &Path, id: &str, history_dir: Option<&Path>) -> AppResult<()> {
    let store = history_service::history_store(Some(input_path), history_dir)?;
    history_service::delete_calculation(&store, id)?;
    println!("✓ Deleted calculation {}", id);
    Ok(())
}

fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}
