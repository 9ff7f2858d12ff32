//! Static fuel reference tables
//!
//! Three immutable lookup tables keyed by short model code, built once on
//! first use and never mutated: surface fuel load, percent conifer, and
//! percent dead balsam fir. The mixed-wood tables cover the `M3_p`, `M4_p`,
//! and `M3M4_p` code variants for conifer percentages 5 through 95.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Surface fuel load (kg/m^2) by model code
///
/// `None` marks codes the table lists with an intentionally unspecified
/// load; those serialize as blank, same as codes absent from the table.
static SURFACE_FUEL_LOAD: LazyLock<HashMap<String, Option<f32>>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    let specified: [(&str, f32); 9] = [
        ("C1", 0.75),
        ("C2", 0.8),
        ("C3", 1.15),
        ("C4", 1.2),
        ("C5", 1.2),
        ("C6", 1.2),
        ("C7", 1.2),
        ("O1a", 0.35),
        ("O1b", 0.35),
    ];
    for (code, load) in specified {
        table.insert(code.to_string(), Some(load));
    }

    let unspecified = ["D1", "D2", "S1", "S2", "S3", "M1", "M2", "M3", "M4", "NF"];
    for code in unspecified {
        table.insert(code.to_string(), None);
    }

    // Boreal mixedwood loads stepped by conifer percentage
    let mixedwood: [(i32, f32); 19] = [
        (5, 0.1),
        (10, 0.2),
        (15, 0.3),
        (20, 0.4),
        (25, 0.5),
        (30, 0.6),
        (35, 0.7),
        (40, 0.8),
        (45, 0.8),
        (50, 0.8),
        (55, 0.8),
        (60, 0.8),
        (65, 1.0),
        (70, 1.0),
        (75, 1.0),
        (80, 1.0),
        (85, 1.0),
        (90, 1.0),
        (95, 1.0),
    ];
    for (percent, load) in mixedwood {
        table.insert(format!("M1_{}", percent), Some(load));
    }

    table
});

/// Percent conifer by mixed-wood model code
static PERCENT_CONIFER: LazyLock<HashMap<String, i32>> =
    LazyLock::new(|| mixedwood_percent_table(&["M3", "M4", "M3M4"]));

/// Percent dead balsam fir by mixed-wood model code
static PERCENT_DEAD_FIR: LazyLock<HashMap<String, i32>> =
    LazyLock::new(|| mixedwood_percent_table(&["M3", "M4", "M3M4"]));

/// Build a `<prefix>_<p>` to `p` mapping for p in 5, 10, ..., 95
fn mixedwood_percent_table(prefixes: &[&str]) -> HashMap<String, i32> {
    let mut table = HashMap::new();

    for prefix in prefixes {
        for percent in (5..=95).step_by(5) {
            table.insert(format!("{}_{}", prefix, percent), percent);
        }
    }

    table
}

/// Surface fuel load for a model code
///
/// `None` when the code is absent from the table or its load is unspecified.
pub fn surface_fuel_load(model_code: &str) -> Option<f32> {
    SURFACE_FUEL_LOAD.get(model_code).copied().flatten()
}

/// Percent conifer for a mixed-wood model code
pub fn percent_conifer(model_code: &str) -> Option<i32> {
    PERCENT_CONIFER.get(model_code).copied()
}

/// Percent dead balsam fir for a mixed-wood model code
pub fn percent_dead_fir(model_code: &str) -> Option<i32> {
    PERCENT_DEAD_FIR.get(model_code).copied()
}
