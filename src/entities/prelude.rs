pub use super::makers::Entity as Makers;
pub use super::products::Entity as Products;
pub use super::roles::Entity as Roles;
pub use super::user_roles::Entity as UserRoles;
pub use super::users::Entity as Users;
