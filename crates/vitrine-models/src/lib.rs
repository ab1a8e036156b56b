pub mod asset;
pub mod collection;
pub mod notification;
pub mod order;
pub mod page;

pub use asset::Asset;
pub use collection::{Collection, CollectionKey, InvalidCollectionKey};
pub use notification::Notification;
pub use order::{AssetsOrderBy, CollectionsOrderBy, OwnershipsOrderBy};
pub use page::{PageInfo, PageResult};
