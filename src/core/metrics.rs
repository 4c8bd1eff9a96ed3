use crate::core::FunctionRecord;
use std::collections::BTreeMap;

/// Group records by owning source unit. BTreeMap keys give the pipeline a
/// deterministic fan-out order regardless of input order.
pub fn group_by_unit(records: Vec<FunctionRecord>) -> BTreeMap<String, Vec<FunctionRecord>> {
    records.into_iter().fold(BTreeMap::new(), |mut acc, record| {
        acc.entry(record.id.module_path.clone())
            .or_default()
            .push(record);
        acc
    })
}

pub fn calculate_average_complexity(records: &[FunctionRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let total: u32 = records.iter().map(|r| r.cyclomatic_complexity).sum();
    total as f64 / records.len() as f64
}

pub fn count_above_complexity(records: &[FunctionRecord], threshold: u32) -> usize {
    records
        .iter()
        .filter(|r| r.cyclomatic_complexity > threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionId;

    fn record(unit: &str, name: &str, complexity: u32) -> FunctionRecord {
        FunctionRecord {
            id: FunctionId::new(unit, name),
            start_line: 1,
            end_line: 10,
            cyclomatic_complexity: complexity,
            loc: 9,
            nesting_depth: 0,
            dependency_count: 0,
        }
    }

    #[test]
    fn groups_preserve_per_unit_input_order() {
        let grouped = group_by_unit(vec![
            record("b.py", "one", 1),
            record("a.py", "two", 2),
            record("b.py", "three", 3),
        ]);

        let units: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(units, vec!["a.py", "b.py"]);
        let names: Vec<_> = grouped["b.py"]
            .iter()
            .map(|r| r.id.qualified_name.clone())
            .collect();
        assert_eq!(names, vec!["one", "three"]);
    }

    #[test]
    fn average_complexity_of_empty_slice_is_zero() {
        assert_eq!(calculate_average_complexity(&[]), 0.0);
    }

    #[test]
    fn counts_only_strictly_above_threshold() {
        let records = vec![record("a.py", "f", 10), record("a.py", "g", 11)];
        assert_eq!(count_above_complexity(&records, 10), 1);
    }
}
