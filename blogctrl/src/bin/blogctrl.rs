use blogcore::{
    comment::CommentFields,
    post::PostFields,
    tag::TagFields,
    user::UserFields,
};
use blogctrl::platform::Builder;
use clap::{
    Parser,
    Subcommand,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Comment {
        #[command(subcommand)]
        cmd: CommentCmd,
    },
    #[command(arg_required_else_help = true)]
    Post {
        #[command(subcommand)]
        cmd: PostCmd,
    },
    #[command(arg_required_else_help = true)]
    Tag {
        #[command(subcommand)]
        cmd: TagCmd,
    },
    #[command(arg_required_else_help = true)]
    User {
        #[command(subcommand)]
        cmd: UserCmd,
    },
}

#[derive(Debug, Subcommand)]
enum CommentCmd {
    #[command(arg_required_else_help = true)]
    Add {
        post_id: i64,
        author_id: i64,
        body: String,
    },
    List {
        post_id: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
enum PostCmd {
    #[command(arg_required_else_help = true)]
    Create {
        author_id: i64,
        title: String,
        body: String,
        #[clap(long = "tag", short = 't')]
        tags: Vec<i64>,
    },
    List,
    #[command(arg_required_else_help = true)]
    Show {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Transitions {
        id: i64,
        #[clap(long, short = 'a')]
        actor: Option<i64>,
    },
    #[command(arg_required_else_help = true)]
    Apply {
        id: i64,
        transition: String,
        #[clap(long, short = 'a')]
        actor: i64,
    },
}

#[derive(Debug, Subcommand)]
enum TagCmd {
    #[command(arg_required_else_help = true)]
    Create {
        name: String,
    },
    List,
    #[command(arg_required_else_help = true)]
    Assign {
        post_id: i64,
        tag_ids: Vec<i64>,
    },
}

#[derive(Debug, Subcommand)]
enum UserCmd {
    #[command(arg_required_else_help = true)]
    Create {
        name: String,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
    List,
}

#[async_std::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("blogctrl")
        .module("blogdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("failed to open blog platform: {e}"))?;

    match args.command {
        Commands::Comment { cmd } => {
            parse_comment(&platform, cmd).await?;
        },
        Commands::Post { cmd } => {
            parse_post(&platform, cmd).await?;
        },
        Commands::Tag { cmd } => {
            parse_tag(&platform, cmd).await?;
        },
        Commands::User { cmd } => {
            parse_user(&platform, cmd).await?;
        },
    }

    Ok(())
}

async fn parse_comment<'p>(
    platform: &'p blogctrl::platform::Platform,
    arg: CommentCmd,
) -> anyhow::Result<()> {
    match arg {
        CommentCmd::Add { post_id, author_id, body } => {
            let comment = platform.create_comment(CommentFields {
                post_id,
                body,
                author_id,
            }).await?;
            println!("created comment id {} on post {post_id}", comment.id);
        }
        CommentCmd::List { post_id } => {
            let comments = match post_id {
                Some(post_id) => platform.list_comments_for_post(post_id).await?,
                None => platform.list_comments().await?,
            };
            for comment in comments.iter() {
                let author = platform.get_user(comment.author_id).await?;
                println!("{}\t{}\t{}", comment.id, comment.post_id, comment.label(&author.name));
            }
        }
    }
    Ok(())
}

async fn parse_post<'p>(
    platform: &'p blogctrl::platform::Platform,
    arg: PostCmd,
) -> anyhow::Result<()> {
    match arg {
        PostCmd::Create { author_id, title, body, tags } => {
            let post = platform.create_post(PostFields {
                title,
                body,
                author_id,
                tags: (!tags.is_empty()).then_some(tags),
            }).await?;
            println!("created post id {} by user {author_id}", post.id);
        }
        PostCmd::List => {
            for post in platform.list_posts().await?.iter() {
                println!("{}\t[{}]\t{post}", post.id, post.state);
            }
        }
        PostCmd::Show { id } => {
            let post = platform.get_post(id).await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        PostCmd::Transitions { id, actor } => {
            for name in platform.post_transitions(id, actor).await? {
                println!("{name}");
            }
        }
        PostCmd::Apply { id, transition, actor } => {
            let post = platform.transition_post(id, &transition, actor).await?;
            println!("post {id} is now {}", post.state);
        }
    }
    Ok(())
}

async fn parse_tag<'p>(
    platform: &'p blogctrl::platform::Platform,
    arg: TagCmd,
) -> anyhow::Result<()> {
    match arg {
        TagCmd::Create { name } => {
            let tag = platform.create_tag(TagFields { name }).await?;
            println!("created tag id {} ({})", tag.id, tag.name);
        }
        TagCmd::List => {
            for tag in platform.list_tags().await?.iter() {
                println!("{}\t{}", tag.id, tag.name);
            }
        }
        TagCmd::Assign { post_id, tag_ids } => {
            let tags = platform.set_post_tags(post_id, &tag_ids).await?;
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
    }
    Ok(())
}

async fn parse_user<'p>(
    platform: &'p blogctrl::platform::Platform,
    arg: UserCmd,
) -> anyhow::Result<()> {
    match arg {
        UserCmd::Create { name } => {
            let user = platform.create_user(UserFields { name }).await?;
            println!("created user id {} ({})", user.id, user.name);
        }
        UserCmd::Delete { id } => {
            platform.delete_user(id).await?;
            println!("deleted user {id} along with their posts and comments");
        }
        UserCmd::List => {
            for user in platform.list_users().await? {
                println!("{}\t{}", user.id, user.name);
            }
        }
    }
    Ok(())
}
