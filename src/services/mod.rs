pub mod password;
pub mod seed;

pub mod maker_service;
pub mod maker_service_impl;
pub use maker_service::{MakerError, MakerService};
pub use maker_service_impl::SeaOrmMakerService;

pub mod product_service;
pub mod product_service_impl;
pub use product_service::{ProductError, ProductService};
pub use product_service_impl::SeaOrmProductService;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{NewUser, UserError, UserService};
pub use user_service_impl::SeaOrmUserService;
