// Engine and runtime surface for the headless integration tests.
// The ui module stays bin-only: it renders App, which lives in main.rs.
pub mod leaderboard;
pub mod level;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod text_generator;
pub mod theme;
