//! Command-line shell over `blog_core`.
//!
//! # Responsibility
//! - Capture user input and invoke the core use-cases.
//! - Print feed/detail views; all state lives in the SQLite-backed store.

use blog_core::view::html::render_detail;
use blog_core::{
    init_logging, BlogConfig, BlogStore, CommonMarkRenderer, FeedView, KvBlogRepository, Locale,
    NewPost, PathFile, PostId, SqliteStore,
};
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "blog", version, about = "Local-first blog with comments and attachments")]
struct Cli {
    /// SQLite file holding the blog (overrides BLOG_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling logs (overrides BLOG_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides BLOG_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Publish a new post.
    New {
        #[arg(long)]
        title: String,
        /// Markdown body given inline.
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Markdown body read from a file.
        #[arg(long)]
        content_file: Option<PathBuf>,
        /// Cover image.
        #[arg(long)]
        image: Option<PathBuf>,
        /// Attachment; repeat for several files.
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// Add a comment to a post.
    Comment {
        post_id: u64,
        #[arg(long)]
        author: String,
        #[arg(long)]
        content: String,
    },
    /// Show the feed.
    List,
    /// Show one post with attachments and comments.
    Show {
        post_id: u64,
        /// Print the HTML fragment instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Switch interface language; toggles when no code is given.
    Lang { code: Option<String> },
    /// Print every interface label for the active language.
    Labels,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_command module=cli status=error");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = BlogConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }

    let store = SqliteStore::open(&config.db_path)
        .map_err(|err| format!("cannot open `{}`: {err}", config.db_path.display()))?;
    let mut blog = BlogStore::open_with(
        KvBlogRepository::new(store),
        Box::new(blog_core::SystemClock),
        config.default_locale,
    );

    match cli.command {
        Command::New {
            title,
            content,
            content_file,
            image,
            attachments,
        } => {
            let content = match (content, content_file) {
                (Some(content), _) => content,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .map_err(|err| format!("cannot read `{}`: {err}", path.display()))?,
                (None, None) => String::new(),
            };
            let mut draft = NewPost::new(title, content);
            if let Some(image) = image {
                draft = draft.with_image(PathFile::new(image));
            }
            for path in attachments {
                draft = draft.with_attachment(PathFile::new(path));
            }
            let post = blog.create_post(draft).map_err(|err| err.to_string())?;
            println!("{}", post.id);
        }
        Command::Comment {
            post_id,
            author,
            content,
        } => {
            let comment = blog
                .add_comment(PostId(post_id), &author, &content)
                .map_err(|err| err.to_string())?;
            println!("{}", comment.id);
        }
        Command::List => print_feed(&blog.feed()),
        Command::Show { post_id, html } => {
            let detail = blog
                .detail(PostId(post_id), &CommonMarkRenderer)
                .ok_or_else(|| format!("post not found: {post_id}"))?;
            if html {
                println!("{}", render_detail(&detail));
            } else {
                println!("{}\n{}\n", detail.title, detail.date);
                println!("{}", blog.post(PostId(post_id)).map_or("", |p| p.content.as_str()));
                if !detail.attachments.is_empty() {
                    println!("\n{}", detail.attachments_heading);
                    for attachment in &detail.attachments {
                        println!("  {} ({})", attachment.name, attachment.size_label);
                    }
                }
                println!("\n{}", detail.comments_heading);
                for comment in &detail.comments {
                    println!("  {} · {}: {}", comment.date, comment.author, comment.content);
                }
            }
        }
        Command::Lang { code } => {
            let locale = match code {
                Some(code) => {
                    let locale = code.parse::<Locale>().map_err(|err| err.to_string())?;
                    blog.set_locale(locale).map_err(|err| err.to_string())?;
                    locale
                }
                None => blog.toggle_locale().map_err(|err| err.to_string())?,
            };
            println!("{locale}");
        }
        Command::Labels => {
            for (key, value) in blog.labels().iter() {
                println!("{}={value}", key.id());
            }
        }
    }

    Ok(())
}

fn print_feed(feed: &FeedView) {
    match feed {
        FeedView::Empty { title, hint } => println!("{title}\n{hint}"),
        FeedView::Posts(items) => {
            for item in items {
                println!("[{}] {}", item.id, item.title);
                println!("    {} · {}", item.date, item.comments_label);
                println!("    {}", item.excerpt);
                if !item.attachment_names.is_empty() {
                    println!(
                        "    {} {}",
                        item.attachments_label,
                        item.attachment_names.join(", ")
                    );
                }
            }
        }
    }
}
