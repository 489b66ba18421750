#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    use folio::config::{SiteConfig, DEFAULT_CONFIG_FILE};
    use folio::error::Result;
    use folio::manage::{ArticleInput, BookInput, ContentStore, LinkInput, ProjectInput};

    #[derive(Parser)]
    #[command(name = "folio", about = "Manage and preview a folio site")]
    struct Cli {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Directory containing the site (index.html, assets/).
        #[arg(long, default_value = ".")]
        site: PathBuf,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Append an entry to a content file
        #[command(subcommand)]
        Add(AddCommand),
        /// Serve the site locally
        Serve {
            #[arg(long)]
            port: Option<u16>,
        },
    }

    #[derive(Subcommand)]
    enum AddCommand {
        Book(BookInput),
        Project(ProjectInput),
        Article(ArticleInput),
        Link(LinkInput),
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let config = SiteConfig::load(&cli.config)?;

        match cli.command {
            Command::Add(add) => {
                let store = ContentStore::new(cli.site.join(config.asset_prefix()));
                let count = match add {
                    AddCommand::Book(input) => store.add_book(input)?,
                    AddCommand::Project(input) => store.add_project(input)?,
                    AddCommand::Article(input) => store.add_article(input)?,
                    AddCommand::Link(input) => store.add_link(input)?,
                };
                log::info!("{} entries now", count);
            }
            Command::Serve { port } => {
                let mut serve = config.serve.clone();
                serve.root = cli.site.join(&serve.root).to_string_lossy().into_owned();
                if let Some(port) = port {
                    serve.port = port;
                }
                rocket::execute(folio::serve::run(serve))?;
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

// The browser build starts from `folio::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
