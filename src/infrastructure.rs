// Infrastructure layer modules
pub mod attribute_conversion;
pub mod card_repository;
pub mod config;
pub mod logging;
pub mod pagination;

// Re-exports
pub use attribute_conversion::{attribute_to_json, item_to_record};
pub use card_repository::{CardRepository, DynamoCardRepository, RepositoryError};
pub use config::{CardsApiSettings, ConfigError, DynamoDbConfig};
pub use logging::init_logging;
