//! API Routes

pub mod health;
pub mod queue;
pub mod tickets;
pub mod leaderboard;
pub mod directory;
