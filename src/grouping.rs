use std::collections::HashMap;

/// Partition records into per-key buckets of numeric values.
///
/// Single pass in input order: keys appear in order of first occurrence and
/// values keep the relative order of their records. Every record contributes
/// exactly one value to exactly one bucket. (Filtering the collection once
/// per distinct key would be functionally equivalent but quadratic.)
pub fn group_by<R, K, V>(records: &[R], key_fn: K, value_fn: V) -> Vec<(String, Vec<f64>)>
where
    K: Fn(&R) -> String,
    V: Fn(&R) -> f64,
{
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        let value = value_fn(record);

        match index.get(&key) {
            Some(&pos) => groups[pos].1.push(value),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }

    groups
}
