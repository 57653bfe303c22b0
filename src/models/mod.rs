pub mod maker;
pub mod product;
pub mod role;
pub mod user;

pub use maker::Maker;
pub use product::{MakerRef, Product};
pub use role::Role;
pub use user::User;
