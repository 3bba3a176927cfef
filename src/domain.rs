// Domain layer modules
pub mod card;
pub mod card_id;
pub mod catalog;
pub mod price_ranking;

// Re-exports
pub use card::{Card, CardRecord};
pub use card_id::{CardId, CardIdError, CardKey, decode_path_identifier, decompose};
pub use catalog::seed_catalog;
pub use price_ranking::{TOP_CARDS_LIMIT, top_by_price};
