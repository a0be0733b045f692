pub mod character;
pub mod encounter;
pub mod team;
