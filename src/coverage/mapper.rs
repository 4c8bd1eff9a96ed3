//! Attribution of line-level coverage to individual functions.
//!
//! A line belongs to the innermost function whose range contains it, so a
//! nested function's coverage never bleeds into its enclosing body. The
//! denominator of each ratio counts only provider-marked executable lines in
//! the function's exclusive (non-nested) span.

use super::FunctionCoverage;
use crate::core::{FunctionRecord, SourceUnitCoverage};
use crate::errors::RiskmapError;
use log::warn;
use std::collections::BTreeMap;

/// Map one source unit's coverage onto its functions.
///
/// Output order matches `functions`, one entry per record. `unit = None`
/// means the unit was absent from the artifact: every function comes back
/// `Unmeasured`, never 0% covered. Pure with respect to its inputs;
/// identical inputs yield bit-identical output.
pub fn map_unit_coverage(
    functions: &[FunctionRecord],
    unit: Option<&SourceUnitCoverage>,
) -> Vec<FunctionCoverage> {
    let Some(unit) = unit else {
        return functions
            .iter()
            .map(|f| FunctionCoverage::unmeasured(f.id.clone()))
            .collect();
    };

    log_range_anomalies(functions);

    // Widest ranges first, so narrower (nested or anomalous-overlap) ranges
    // overwrite them and each contested line lands on its innermost owner.
    let mut by_width: Vec<usize> = (0..functions.len()).collect();
    by_width.sort_by(|&a, &b| {
        let fa = &functions[a];
        let fb = &functions[b];
        fb.span_len()
            .cmp(&fa.span_len())
            .then_with(|| fa.start_line.cmp(&fb.start_line))
            .then_with(|| fa.id.qualified_name.cmp(&fb.id.qualified_name))
    });

    let mut owner: BTreeMap<usize, usize> = BTreeMap::new();
    for &idx in &by_width {
        let function = &functions[idx];
        // Inverted or empty ranges own nothing and fall out as Unmeasured.
        if function.end_line <= function.start_line {
            continue;
        }
        for &line in unit
            .executable_lines
            .range(function.start_line..function.end_line)
        {
            owner.insert(line, idx);
        }
    }

    let mut lines_total = vec![0usize; functions.len()];
    let mut lines_covered = vec![0usize; functions.len()];
    for (&line, &idx) in &owner {
        lines_total[idx] += 1;
        if unit.executed_lines.contains(&line) {
            lines_covered[idx] += 1;
        }
    }

    functions
        .iter()
        .enumerate()
        .map(|(idx, function)| {
            let total = lines_total[idx];
            let covered = lines_covered[idx];
            FunctionCoverage {
                function_id: function.id.clone(),
                lines_covered: covered,
                lines_total: total,
                ratio: (total > 0).then(|| covered as f64 / total as f64),
            }
        })
        .collect()
}

/// Detect partially overlapping ranges that are neither disjoint nor nested.
/// These are parser anomalies: they are logged and then resolved by the
/// innermost-wins attribution above, never aborting the run.
fn log_range_anomalies(functions: &[FunctionRecord]) {
    let mut by_start: Vec<&FunctionRecord> = functions.iter().collect();
    by_start.sort_by_key(|f| (f.start_line, f.end_line));

    for (i, first) in by_start.iter().enumerate() {
        for second in by_start[i + 1..].iter() {
            if second.start_line >= first.end_line {
                break;
            }
            let nested = first.contains_range(second)
                || second.contains_range(first)
                || (first.start_line == second.start_line && first.end_line == second.end_line);
            if !nested {
                warn!(
                    "{}",
                    RiskmapError::MalformedFunctionRange {
                        unit: first.id.module_path.clone(),
                        first: first.id.qualified_name.clone(),
                        first_start: first.start_line,
                        first_end: first.end_line,
                        second: second.id.qualified_name.clone(),
                        second_start: second.start_line,
                        second_end: second.end_line,
                    }
                );
            }
        }
    }
}
