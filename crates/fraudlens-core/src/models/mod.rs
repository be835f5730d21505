pub mod chat;
pub mod correlation;
pub mod feature;
pub mod notice;
pub mod pattern;
pub mod prediction;
pub mod transaction;
