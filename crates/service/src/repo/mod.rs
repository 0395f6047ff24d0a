//! Database-backed repositories.

pub mod seaorm;

pub use seaorm::SeaOrmRepository;
