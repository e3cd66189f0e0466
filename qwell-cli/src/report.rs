//! Reporting collaborator: banner, centered text, and energy tables.
//!
//! All presentation settings are passed in at construction; nothing here
//! reads or writes process-global state.

use std::io::IsTerminal;

/// Terminal color capability.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// ANSI escapes allowed.
    Ansi,
    /// Plain text only.
    Plain,
}

/// Detect the color capability of stdout.
///
/// `force_plain` (a CLI switch) wins; otherwise the `NO_COLOR` convention
/// and non-terminal stdout both disable escapes.
pub fn detect_color(force_plain: bool) -> ColorMode {
    if force_plain
        || std::env::var_os("NO_COLOR").is_some()
        || !std::io::stdout().is_terminal()
    {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    }
}

/// Presentation settings for a [`Reporter`].
#[derive(Copy, Clone, Debug)]
pub struct ReportConfig {
    /// Banner and centering width in columns.
    pub width: usize,
    /// Color capability, usually from [`detect_color`].
    pub color: ColorMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { width: 101, color: ColorMode::Plain }
    }
}

/// Formats and prints all textual output for the menu-driven runs.
#[derive(Clone, Debug)]
pub struct Reporter {
    cfg: ReportConfig,
}

impl Reporter {
    pub fn new(cfg: ReportConfig) -> Self {
        Self { cfg }
    }

    fn rule(&self) -> String {
        "=".repeat(self.cfg.width)
    }

    fn center(&self, s: &str) -> String {
        let count = s.chars().count();
        if count >= self.cfg.width {
            return s.to_string();
        }
        let pad = (self.cfg.width - count) / 2;
        format!("{}{}", " ".repeat(pad), s)
    }

    fn highlight(&self, s: &str) -> String {
        match self.cfg.color {
            ColorMode::Ansi => format!("\x1b[36m{}\x1b[0m", s),
            ColorMode::Plain => s.to_string(),
        }
    }

    fn energy_line(i: usize, e: f64) -> String {
        format!("E({})={:.5}", i, e)
    }

    /// Print the startup banner, clearing the screen when escapes are
    /// allowed.
    pub fn startup(&self) {
        if self.cfg.color == ColorMode::Ansi {
            print!("\x1b[2J\x1b[1;1H");
        }
        println!("\n{}", self.rule());
        println!("{}", self.center("Welcome"));
        println!(
            "{}",
            self.center(
                "Program for solving the time independent Schrödinger \
                equation!"
            ),
        );
        println!("{}", self.rule());
    }

    /// Print the solution report for one case.
    ///
    /// `inputs` carries label/value pairs already index-aligned; the first
    /// `n_bound` entries of `energies` are the ones worth reporting.
    pub fn case(
        &self,
        case_id: usize,
        title: &str,
        inputs: &[(&str, f64)],
        energies: &[f64],
        n_bound: usize,
    ) {
        println!();
        println!("{}", self.rule());
        println!(
            "{}",
            self.center(&format!(
                "Solution of Schrödinger equation for option {}",
                case_id,
            )),
        );
        println!("{}", self.rule());
        println!("{}", self.highlight(&self.center(title)));
        println!("\t\tInput:");
        for (label, value) in inputs {
            println!("{}", self.center(&format!("{} : {}", label, value)));
        }
        println!();
        println!("\t\t{} Eigenvalues of Energy:", n_bound);
        for (i, e) in energies.iter().take(n_bound).enumerate() {
            println!("{}", self.center(&Self::energy_line(i, *e)));
        }
        println!("{}", self.rule());
        println!();
    }

    /// Print the defined no-bound-states outcome for one case.
    pub fn no_bound_states(&self, title: &str) {
        println!();
        println!("{}", self.rule());
        println!("{}", self.highlight(&self.center(title)));
        println!(
            "{}",
            self.center("No bound states exist for these parameters."),
        );
        println!("{}", self.rule());
        println!();
    }
}
