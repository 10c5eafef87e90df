//! Exact-cover minimization via the Quine–McCluskey procedure.
//!
//! Implicants are vectors of `Option<bool>` positions (`None` = the variable was
//! eliminated by merging). All intermediate collections are ordered sets, so the
//! selected cover (and therefore the rendered formula) is deterministic.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::sop::{CoverMinimizer, SopFormula};

type Implicant = Vec<Option<bool>>;

/// The bundled [`CoverMinimizer`]: prime implicant generation, essential prime
/// selection, then a greedy set cover of the remaining minterms.
///
/// The cover is exact (it covers the given minterms and nothing else); cover
/// *cardinality* is minimal up to the usual greedy approximation after the
/// essential primes are taken.
#[derive(Copy, Clone, Default, Debug)]
pub struct QuineMcCluskey;

impl CoverMinimizer for QuineMcCluskey {
    fn minimize(&self, order: &[String], minterms: &[Vec<bool>]) -> SopFormula {
        // Duplicate member labels collapse to a single minterm here.
        let minterms: BTreeSet<Vec<bool>> = minterms.iter().cloned().collect();
        if minterms.is_empty() {
            return SopFormula::constant_false();
        }
        if order.is_empty() {
            // The only minterm over zero variables is the empty assignment.
            return SopFormula::constant_true();
        }
        debug_assert!(minterms.iter().all(|m| m.len() == order.len()));

        let primes = prime_implicants(&minterms);
        let cover = select_cover(&primes, &minterms);
        render(order, &cover)
    }
}

/// Merge implicants level by level until no pair combines; implicants that never
/// merged are prime.
fn prime_implicants(minterms: &BTreeSet<Vec<bool>>) -> Vec<Implicant> {
    let mut current: BTreeSet<Implicant> = minterms
        .iter()
        .map(|m| m.iter().map(|&v| Some(v)).collect())
        .collect();
    let mut primes: BTreeSet<Implicant> = BTreeSet::new();

    while !current.is_empty() {
        let items: Vec<Implicant> = current.iter().cloned().collect();
        let mut merged_away = vec![false; items.len()];
        let mut next: BTreeSet<Implicant> = BTreeSet::new();

        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                if let Some(merged) = combine(&items[i], &items[j]) {
                    merged_away[i] = true;
                    merged_away[j] = true;
                    next.insert(merged);
                }
            }
        }

        for (i, item) in items.into_iter().enumerate() {
            if !merged_away[i] {
                primes.insert(item);
            }
        }
        current = next;
    }

    primes.into_iter().collect()
}

/// Two implicants combine when they agree on every eliminated position and
/// differ in exactly one cared position.
fn combine(a: &Implicant, b: &Implicant) -> Option<Implicant> {
    let mut difference = None;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        match (x, y) {
            (None, None) => {}
            (Some(p), Some(q)) if p == q => {}
            (Some(_), Some(_)) => {
                if difference.is_some() {
                    return None;
                }
                difference = Some(i);
            }
            _ => return None,
        }
    }
    let position = difference?;
    let mut merged = a.clone();
    merged[position] = None;
    Some(merged)
}

fn covers(implicant: &Implicant, minterm: &[bool]) -> bool {
    implicant
        .iter()
        .zip(minterm)
        .all(|(cared, &value)| cared.is_none_or(|c| c == value))
}

/// Pick essential primes first, then greedily cover the remaining minterms.
/// Ties are broken by implicant order, which is fixed by the sorted prime list.
fn select_cover(primes: &[Implicant], minterms: &BTreeSet<Vec<bool>>) -> Vec<Implicant> {
    let minterms: Vec<&[bool]> = minterms.iter().map(|m| m.as_slice()).collect();
    let covering: Vec<Vec<usize>> = minterms
        .iter()
        .map(|&m| {
            primes
                .iter()
                .positions(|p| covers(p, m))
                .collect::<Vec<usize>>()
        })
        .collect();

    let mut chosen: Vec<usize> = Vec::new();
    for candidates in &covering {
        if candidates.len() == 1 && !chosen.contains(&candidates[0]) {
            chosen.push(candidates[0]);
        }
    }

    let mut covered: Vec<bool> = covering
        .iter()
        .map(|candidates| candidates.iter().any(|p| chosen.contains(p)))
        .collect();

    while covered.iter().any(|c| !c) {
        let mut best: Option<(usize, usize)> = None;
        for (p, prime) in primes.iter().enumerate() {
            if chosen.contains(&p) {
                continue;
            }
            let gain = minterms
                .iter()
                .copied()
                .enumerate()
                .filter(|&(i, m)| !covered[i] && covers(prime, m))
                .count();
            if gain > 0 && best.is_none_or(|(_, best_gain)| gain > best_gain) {
                best = Some((p, gain));
            }
        }
        // Every minterm is covered by at least one prime, so a pick always exists.
        let Some((pick, _)) = best else { break };
        for (i, &m) in minterms.iter().enumerate() {
            if covers(&primes[pick], m) {
                covered[i] = true;
            }
        }
        chosen.push(pick);
    }

    chosen.sort_unstable();
    chosen.into_iter().map(|p| primes[p].clone()).collect()
}

/// Render the selected implicants as sum-of-products text: variables in the
/// given order within each product, products sorted, parentheses only around
/// multi-literal products joined by `|`.
fn render(order: &[String], cover: &[Implicant]) -> SopFormula {
    let mut products: Vec<String> = Vec::with_capacity(cover.len());
    for implicant in cover {
        let literals: Vec<String> = implicant
            .iter()
            .enumerate()
            .filter_map(|(i, cared)| {
                cared.map(|value| {
                    if value {
                        order[i].clone()
                    } else {
                        format!("!{}", order[i])
                    }
                })
            })
            .collect();
        if literals.is_empty() {
            // An implicant with no cared positions covers the whole space.
            return SopFormula::constant_true();
        }
        products.push(literals.join(" & "));
    }
    products.sort();

    if products.len() == 1 {
        return SopFormula::from(products.remove(0));
    }
    let text = products
        .iter()
        .map(|p| {
            if p.contains(" & ") {
                format!("({p})")
            } else {
                p.clone()
            }
        })
        .join(" | ");
    SopFormula::from(text)
}
