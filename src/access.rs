//! Access codes - maps a tester's code to an authorized test count
//!
//! Test time on the prototype rig is rationed: each code authorizes a fixed
//! number of tests per run. The administrator code gets a standard 5-test
//! allocation.

/// An authorization resolved from an access code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    /// Number of tests this code authorizes per run
    pub n_tests: u32,

    /// Whether this is the administrator allocation
    pub admin: bool,
}

/// Look up the grant for an access code (case-insensitive)
///
/// Unknown codes get no grant. The legacy tool also accepted the code
/// `fermi` at its gate but had no test allocation for it and crashed on
/// lookup; that code is simply not recognized here.
pub fn authorize(code: &str) -> Option<AccessGrant> {
    let grant = |n_tests, admin| Some(AccessGrant { n_tests, admin });
    match code.to_lowercase().as_str() {
        "administrat0r" => grant(5, true),
        "riverrun" => grant(1, false),
        "jupiter" => grant(5, false),
        "andromeda" => grant(10, false),
        "tesla" => grant(15, false),
        _ => None,
    }
}
