use clap::Parser;
use hn_scout::app::discover::{DiscoverService, StoryPage};
use hn_scout::core::paging::PageWindow;
use hn_scout::domain::model::ScoredStory;
use hn_scout::utils::{logger, validation::Validate};
use hn_scout::{Cli, Command, JsonFileStore, ReadingListAction, ReadingListService, SearchOptions, Settings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> hn_scout::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    settings.validate()?;
    tracing::debug!("settings: {:?}", settings);

    let discover = DiscoverService::new(settings.clone());

    match cli.command {
        Command::Search {
            query,
            page,
            sort_by,
            order,
            min_points,
            min_comments,
            author,
            by_date,
        } => {
            let options = SearchOptions {
                author,
                min_points,
                min_comments,
                sort_by_date: by_date,
                ..SearchOptions::default()
            };
            let sort = sort_by.map(|field| (field, order));
            let page = discover
                .story_page(&query, page.as_deref(), &options, sort)
                .await?;
            print_story_page(&page);
        }

        Command::FrontPage { query, page } => {
            let page = discover.front_page(&query, page.as_deref(), None).await?;
            print_story_page(&page);
        }

        Command::Story { id, comments } => {
            match discover.story_detail(&id, comments).await? {
                Some(detail) => {
                    print_story(&detail.story);
                    if detail.comments.is_empty() {
                        println!("  (no comments)");
                    }
                    for view in &detail.comments {
                        let text = view.comment.comment_text.as_deref().unwrap_or("");
                        println!("  [{}] {} ({})", view.comment.author, text, view.time_ago);
                    }
                }
                None => println!("story {} not found", id),
            }
        }

        Command::Author { username, page } => {
            match discover.author_overview(&username, page.as_deref()).await? {
                Some(overview) => {
                    println!(
                        "{} · {} karma{}",
                        overview.author.username,
                        overview.author.karma,
                        overview
                            .author
                            .created_at
                            .as_deref()
                            .map(|d| format!(" · joined {}", d))
                            .unwrap_or_default()
                    );
                    println!();
                    print_story_page(&overview.stories);
                }
                None => println!("author {} not found", username),
            }
        }

        Command::ReadingList { action } => {
            let store = JsonFileStore::new(settings.store_path.clone());
            let service = ReadingListService::new(store, settings.reading_list_capacity);
            run_reading_list(&discover, &service, action).await?;
        }
    }

    Ok(())
}

async fn run_reading_list(
    discover: &DiscoverService<Settings>,
    service: &ReadingListService<JsonFileStore>,
    action: ReadingListAction,
) -> hn_scout::Result<()> {
    match action {
        ReadingListAction::Show => {
            let list = service.list().await?;
            if list.stories.is_empty() {
                println!("reading list is empty");
                return Ok(());
            }
            println!("{} saved stories:", list.stories.len());
            for saved in &list.stories {
                println!(
                    "  {} — {} ({} pts)",
                    saved.story.id,
                    saved.story.title.as_deref().unwrap_or("(untitled)"),
                    saved.story.points()
                );
            }
        }
        ReadingListAction::Add { id } => match discover.client().story(&id).await? {
            Some(story) => {
                service.save(&story).await?;
                println!("saved: {}", story.title.as_deref().unwrap_or(&id));
            }
            None => println!("story {} not found", id),
        },
        ReadingListAction::Remove { id } => {
            if service.remove(&id).await? {
                println!("removed {}", id);
            } else {
                println!("{} was not in the reading list", id);
            }
        }
        ReadingListAction::Clear => {
            service.clear().await?;
            println!("reading list cleared");
        }
    }
    Ok(())
}

fn print_story(story: &ScoredStory) {
    let domain = story
        .domain
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default();
    println!(
        "[{:>6.2}] {}{}",
        story.quality_score,
        story.story.title.as_deref().unwrap_or("(untitled)"),
        domain
    );
    println!(
        "         {} pts · {} comments · {} · by {} · id {}",
        story.story.points(),
        story.story.num_comments(),
        story.time_ago,
        story.story.author,
        story.story.id
    );
}

fn print_story_page(page: &StoryPage) {
    if page.stories.is_empty() {
        println!("no results");
        return;
    }
    for story in &page.stories {
        print_story(story);
    }
    println!();
    println!("{} results · {}", page.total_hits, pager_line(&page.window));
}

fn pager_line(window: &PageWindow) -> String {
    if !window.is_renderable() {
        return "page 1 of 1".to_string();
    }
    let numbers: Vec<String> = window
        .page_numbers
        .iter()
        .map(|&n| {
            if n == window.current_page {
                format!("[{}]", n + 1)
            } else {
                (n + 1).to_string()
            }
        })
        .collect();
    format!(
        "page {} of {} · {}",
        window.current_page + 1,
        window.total_pages,
        numbers.join(" ")
    )
}
