//! Solvability test run before any search.
//!
//! Fill, empty and transfer moves only ever produce levels that are
//! multiples of `gcd(X, Y)`, and no jug holds more than the larger
//! capacity. Targets failing either rule are rejected without exploring
//! the state space.

use crate::jugs::Capacities;

/// Greatest common divisor by Euclid's algorithm. `gcd(a, 0) == a`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Whether `target` can appear as the level of either jug.
pub fn can_solve(x: u32, y: u32, target: u32) -> bool {
    is_feasible(&Capacities::new(x, y), target)
}

/// [`can_solve`] for a capacity pair.
///
/// With both capacities zero only a zero target is reachable, which is
/// also what the search reports for that input.
pub fn is_feasible(capacities: &Capacities, target: u32) -> bool {
    if target > capacities.max() {
        return false;
    }
    match target.checked_rem(gcd(capacities.x, capacities.y)) {
        Some(remainder) => remainder == 0,
        None => target == 0,
    }
}
