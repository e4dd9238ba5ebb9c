use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use shaft_core::{CoreError, ShaftLoading};
use shaft_solver::{DiameterSolution, SolverConfig, SolverError, Variant, solve_diameter};

#[derive(Parser)]
#[command(name = "shaft-cli")]
#[command(
    about = "Shaft sizing tool - minimum safe diameter under combined twisting and axial pull",
    long_about = None
)]
struct Cli {
    /// Axial pull P in newtons (prompted for if omitted)
    #[arg(long)]
    pull: Option<f64>,
    /// Twisting moment T in newton-meters (prompted for if omitted)
    #[arg(long)]
    moment: Option<f64>,
    /// Factor of safety (prompted for if omitted)
    #[arg(long)]
    fos: Option<f64>,
    /// Yield strength in N/m^2 (prompted for if omitted)
    #[arg(long)]
    yield_strength: Option<f64>,
    /// Maximum false-position iterations
    #[arg(long, default_value_t = SolverConfig::default().max_iterations)]
    max_iterations: usize,
    /// Bracket scan limit in whole meters
    #[arg(long, default_value_t = SolverConfig::default().search_limit)]
    search_limit: usize,
    /// Convergence tolerance on the criterion value
    #[arg(long, default_value_t = SolverConfig::default().residual_tol)]
    tolerance: f64,
    /// Use the textbook false-position update instead of the Illinois variant
    #[arg(long)]
    pure: bool,
    /// Print the solution as JSON instead of a report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Not a number: {input}")]
    InvalidNumber { input: String },

    #[error("{0}")]
    Parameters(#[from] CoreError),

    #[error("{0}")]
    Solve(#[from] SolverError),

    #[error("Failed to encode solution: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let pull = read_or_prompt(cli.pull, "Axial pull P (N)")?;
    let moment = read_or_prompt(cli.moment, "Twisting moment T (N·m)")?;
    let fos = read_or_prompt(cli.fos, "Factor of safety")?;
    let yield_strength = read_or_prompt(cli.yield_strength, "Yield strength (N/m^2)")?;

    let loading = ShaftLoading::from_si(pull, moment, fos, yield_strength)?;
    let config = SolverConfig {
        max_iterations: cli.max_iterations,
        search_limit: cli.search_limit,
        residual_tol: cli.tolerance,
        variant: if cli.pure {
            Variant::Pure
        } else {
            Variant::Illinois
        },
        ..SolverConfig::default()
    };

    let solution = solve_diameter(&loading, Some(config))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print_report(&solution);
    }
    Ok(())
}

fn read_or_prompt(flag: Option<f64>, label: &str) -> Result<f64, CliError> {
    if let Some(value) = flag {
        return Ok(value);
    }
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let input = line.trim();
    input.parse().map_err(|_| CliError::InvalidNumber {
        input: input.to_string(),
    })
}

fn print_report(solution: &DiameterSolution) {
    use uom::si::length::millimeter;

    println!(
        "Initial bracket: {:.6} m to {:.6} m",
        solution.bracket[0], solution.bracket[1]
    );
    if solution.converged {
        println!(
            "✓ Converged in {} iterations (residual {:.3e})",
            solution.iterations, solution.residual
        );
    } else {
        println!(
            "! Iteration budget exhausted after {} iterations (residual {:.3e}); \
             the diameter below is the last estimate, not a verified root",
            solution.iterations, solution.residual
        );
    }
    println!(
        "Required shaft diameter: {:.6} m ({:.3} mm)",
        solution.diameter_m,
        solution.diameter().get::<millimeter>()
    );
}
