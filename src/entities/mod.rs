pub mod prelude;

pub mod makers;
pub mod products;
pub mod roles;
pub mod user_roles;
pub mod users;
