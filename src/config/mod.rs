pub mod settings;

use crate::core::sort::{SortField, SortOrder};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hn-scout")]
#[command(about = "Discover Hacker News stories worth reading")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search stories by keyword
    Search {
        /// Search terms; empty matches everything
        #[arg(default_value = "")]
        query: String,

        /// 1-based page of results
        #[arg(long)]
        page: Option<String>,

        /// Re-sort the page by a field instead of quality score
        #[arg(long, value_enum)]
        sort_by: Option<SortField>,

        #[arg(long, value_enum, default_value = "desc")]
        order: SortOrder,

        /// Only stories with at least this many points
        #[arg(long)]
        min_points: Option<i64>,

        /// Only stories with at least this many comments
        #[arg(long)]
        min_comments: Option<i64>,

        /// Only stories by this author
        #[arg(long)]
        author: Option<String>,

        /// Order results by date instead of relevance
        #[arg(long)]
        by_date: bool,
    },

    /// Show current front-page stories
    FrontPage {
        #[arg(default_value = "")]
        query: String,

        #[arg(long)]
        page: Option<String>,
    },

    /// Show one story and its top comments
    Story {
        id: String,

        /// How many comments to fetch
        #[arg(long, default_value = "5")]
        comments: usize,
    },

    /// Show an author profile and their submissions
    Author {
        username: String,

        #[arg(long)]
        page: Option<String>,
    },

    /// Manage the local reading list
    ReadingList {
        #[command(subcommand)]
        action: ReadingListAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReadingListAction {
    /// List saved stories
    Show,
    /// Fetch a story by id and bookmark it
    Add { id: String },
    /// Remove a bookmark by story id
    Remove { id: String },
    /// Remove all bookmarks
    Clear,
}
