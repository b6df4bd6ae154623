// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the ShareSwap contract.
//
// STRUCTURE:
//
// - model.rs       : State snapshots for before/after comparisons
// - swap_specs.rs  : Swap precondition, rate and split verification
// - epoch_specs.rs : Epoch rate limit verification
//
// USAGE:
// - Unit tests: cargo test -p share-swap
// - Certora build: cargo build --features certora -p share-swap
// - Verification: certoraSorobanProver share_swap.conf
//
// ============================================================================

// State snapshots
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod epoch_specs;
pub mod swap_specs;
