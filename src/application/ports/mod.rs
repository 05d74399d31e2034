pub mod messaging;
pub mod security;
pub mod time;
