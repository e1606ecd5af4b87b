pub mod entities;
pub mod policies;
pub mod public_id;
