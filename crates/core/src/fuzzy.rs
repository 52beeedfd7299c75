//! "Did you mean" ranking for unrecognized identifiers.

use strsim::levenshtein;

/// Returns up to `limit` entries of `pool` ranked by edit distance to `query`.
///
/// Entries at the same distance keep their pool order. The result is only
/// ever shown to the user; nothing is substituted automatically.
///
/// ```
/// use mccmd_core::fuzzy::suggest;
///
/// let pool = ["stone", "stonebrick", "dirt"];
/// assert_eq!(suggest("ston", pool, 5), vec!["stone", "dirt", "stonebrick"]);
/// ```
pub fn suggest<'a, I>(query: &str, pool: I, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked: Vec<(usize, &str)> = pool
        .into_iter()
        .map(|candidate| (levenshtein(query, candidate), candidate))
        .collect();

    // `sort_by_key` is stable, so ties stay in pool order
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate)
        .collect()
}
