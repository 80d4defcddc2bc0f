use std::collections::HashMap;

use crate::models::{Person, TrainingCount};

/// Count completions per training name across everyone.
///
/// Names match exactly (case-sensitive). Rows come out in the order each
/// training is first seen.
pub fn count_completions(people: &[Person]) -> Vec<TrainingCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TrainingCount> = Vec::new();

    for completion in people.iter().flat_map(|p| p.completions.iter()) {
        match index.get(completion.name.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(&completion.name, counts.len());
                counts.push(TrainingCount {
                    training: completion.name.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
