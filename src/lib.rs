pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::algolia::{AlgoliaClient, SearchOptions};
pub use adapters::store::JsonFileStore;
pub use app::discover::DiscoverService;
pub use app::reading_list::ReadingListService;
pub use config::settings::Settings;
pub use config::{Cli, Command, ReadingListAction};
pub use utils::error::{HnError, Result};
