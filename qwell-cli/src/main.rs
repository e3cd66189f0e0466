//! Interactive bound-state explorer for one-dimensional potential wells.

mod plot;
mod report;

use std::{
    io::{ self, Write },
    path::{ Path, PathBuf },
};
use anyhow::Context;
use clap::Parser;
use qwell::{
    error::WellError,
    potential::Potential,
    solve::{ solve_well, Lapack, Well },
};
use crate::report::{ detect_color, ReportConfig, Reporter };

#[derive(Parser, Debug)]
#[command(name = "qwell", version, about = "Solve the time independent \
Schrödinger equation for a menu of one-dimensional potential wells")]
struct Cli {
    /// Number of grid points per run.
    #[arg(long, default_value_t = 2000)]
    points: usize,

    /// Directory for rendered plots.
    #[arg(long, default_value = "output")]
    outdir: PathBuf,

    /// Disable ANSI escapes (colors and screen clearing).
    #[arg(long)]
    no_color: bool,
}

fn preset(choice: u32) -> Option<Potential> {
    match choice {
        1 => Some(Potential::Square { depth: 100.0, width: 1.0 }),
        2 => Some(Potential::Harmonic { omega: 0.5, depth: 2.0 }),
        3 => Some(Potential::PoschlTeller { a: 20.0, b: 5.0, c: 5.0 }),
        4 => Some(Potential::DoubleSquare {
            depth: 100.0,
            width: 1.0,
            separation: 1.0,
        }),
        5 => Some(Potential::Superlattice { depth: 25.0, period: 2.5 }),
        _ => None,
    }
}

fn run_case(
    potential: Potential,
    points: usize,
    outdir: &Path,
    reporter: &Reporter,
) -> anyhow::Result<()> {
    let well = Well::with_default_domain(potential, points)?;
    let potential = well.get_potential();
    let sol = match solve_well(&well, &Lapack) {
        Ok(sol) => sol,
        Err(WellError::NoBoundStates) => {
            reporter.no_bound_states(potential.title());
            return Ok(());
        },
        Err(e) => return Err(e.into()),
    };

    let energies: Vec<f64>
        = sol.eig.energies.iter().take(sol.n_bound).copied().collect();
    reporter.case(
        potential.case_id(),
        potential.title(),
        &potential.describe(),
        &energies,
        sol.n_bound,
    );

    std::fs::create_dir_all(outdir)
        .with_context(|| format!("creating {}", outdir.display()))?;
    let path = outdir.join(format!("case_{}.png", potential.case_id()));
    plot::render(
        path.to_str().context("non-UTF-8 output path")?,
        potential.title(),
        well.get_grid().get_x(),
        &sol.plot,
        &sol.eig.energies,
    )?;
    println!("Saved plot to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let reporter = Reporter::new(ReportConfig {
        width: 101,
        color: detect_color(cli.no_color),
    });
    reporter.startup();

    let stdin = io::stdin();
    loop {
        println!("\nChoose Potential or Exit:");
        println!("1. Finite Well");
        println!("2. Harmonic Oscillator");
        println!("3. Pöschl-Teller");
        println!("4. Double Finite Well");
        println!("5. Superlattice");
        println!("6. Exit");
        print!("\nEnter your choice (1-6) then press Enter: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "6" => {
                println!("\nExiting... \n");
                break;
            },
            choice => {
                match choice.parse::<u32>().ok().and_then(preset) {
                    Some(potential) => {
                        run_case(
                            potential,
                            cli.points,
                            &cli.outdir,
                            &reporter,
                        )?;
                    },
                    None => {
                        println!(
                            "Invalid Input. Please choose a number between \
                            1 and 6."
                        );
                    },
                }
            },
        }
    }
    Ok(())
}
