//! Per-entity data access over a shared generic interface.

use anyhow::Result;

pub mod maker;
pub mod product;
pub mod user;

pub use maker::MakerRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

/// Common data access shared by every entity.
///
/// `save` is an upsert: records without an id are inserted and returned with
/// the generated id, records with an id overwrite the row they name.
#[async_trait::async_trait]
pub trait Repository<T, Id>: Send + Sync
where
    T: Send + 'static,
    Id: Send + 'static,
{
    async fn find_by_id(&self, id: Id) -> Result<Option<T>>;

    async fn find_all(&self) -> Result<Vec<T>>;

    async fn save(&self, item: T) -> Result<T>;

    async fn delete_by_id(&self, id: Id) -> Result<()>;
}
