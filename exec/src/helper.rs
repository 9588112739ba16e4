use time::precise_time_ns;
use prettytable::Table;
use dgm::graph_models::InfAlg;
use errors::*;

pub struct Timer {
    start: u64,
    current_time: u64
}

impl Timer {
    pub fn start() -> Timer {
        let time = precise_time_ns();
        Timer {
            start: time,
            current_time: time
        }
    }

    /// Return seconds since the last lap and since the start
    pub fn lap(&mut self) -> (f64, f64) {
        let current_time = precise_time_ns();
        let since_last_lap = (current_time - self.current_time) as f64 * 1e-9;
        let since_started = (current_time - self.start) as f64 * 1e-9;
        self.current_time = current_time;

        (since_last_lap, since_started)
    }
}

fn format_values(values: &[f64]) -> String {
    values.iter().map(|v| format!("{:.6}", v)).collect::<Vec<_>>().join(", ")
}

pub fn beliefs_table(alg: &dyn InfAlg) -> Table {
    let mut table = Table::new();
    table.add_row(row!["variable", "states", "marginal"]);
    for (var, belief) in alg.fg().variables().iter().zip(alg.beliefs().iter()) {
        table.add_row(row![var, var.states(), format_values(belief.values())]);
    }

    table
}

pub fn factor_beliefs_table(alg: &dyn InfAlg) -> Result<Table> {
    let mut table = Table::new();
    table.add_row(row!["factor", "scope", "marginal"]);
    for (i, factor) in alg.fg().factors().iter().enumerate() {
        let belief = alg.belief_set(factor.vars())?;
        table.add_row(row![i, factor.vars(), format_values(belief.values())]);
    }

    Ok(table)
}
