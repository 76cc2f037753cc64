pub mod conversion;
pub mod helpers;
pub mod validation;

pub use conversion::{lamports_to_sol, minor_units_to_ui_amount, sol_to_lamports, ui_amount_to_minor_units};
pub use helpers::{read_keypair_from_path, to_pubkey};
