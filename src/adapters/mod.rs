pub mod algolia;
pub mod store;
