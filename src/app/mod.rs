pub mod discover;
pub mod reading_list;
