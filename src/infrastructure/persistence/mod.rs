//! PostgreSQL repository implementations.

mod pg_instrument_repository;
mod pg_listing_repository;
mod pg_token_repository;

pub use pg_instrument_repository::PgInstrumentRepository;
pub use pg_listing_repository::PgListingRepository;
pub use pg_token_repository::PgTokenRepository;
