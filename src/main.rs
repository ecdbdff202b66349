use autofill::{Config, Error, Mode, Session, Suggestion, Trie};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autofill")]
#[command(about = "Complete or correct the last word of each typed line")]
struct Cli {
    /// Text file the background vocabulary is built from.
    #[arg(long, default_value = "corpus_sample.txt")]
    corpus: PathBuf,

    /// Optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting mode: fill or correct.
    #[arg(long)]
    mode: Option<Mode>,

    /// Maximum number of suggestions.
    #[arg(long)]
    limit: Option<usize>,

    /// Closeness weight used by correction, within [0, 1].
    #[arg(long)]
    alpha: Option<f64>,

    /// Print suggestions as JSON.
    #[arg(long)]
    json: bool,
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
}

fn load_config(cli: &Cli) -> autofill::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }
    config.validate()?;
    Ok(config)
}

fn print_suggestions(list: &[Suggestion], json: bool) -> io::Result<()> {
    if json {
        let out = serde_json::to_string(list).map_err(io::Error::other)?;
        println!("{}", out);
        return Ok(());
    }
    if list.is_empty() {
        println!("  no suggestions");
        return Ok(());
    }
    for s in list {
        println!("  {} ({:.4})", s.word, s.score);
    }
    Ok(())
}

fn main() -> io::Result<()> {
    init_logger();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut session = match Session::from_corpus_file(&cli.corpus, config.clone()) {
        Ok(s) => s,
        Err(Error::EmptyInput) => {
            log::warn!("corpus {} has no words, using history only", cli.corpus.display());
            Session::new(Trie::with_max_word_len(config.max_word_len), config.clone())
        }
        Err(e) => {
            log::error!("error loading corpus {}: {}", cli.corpus.display(), e);
            std::process::exit(1);
        }
    };

    let mut mode = config.mode;
    println!(
        "autofill - corpus: {}\n:fill / :correct to switch mode, :q to quit",
        cli.corpus.display()
    );
    let mut input = String::new();
    loop {
        print!("{}> ", mode);
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        match input.trim() {
            ":q" => break,
            ":fill" | ":f" => {
                mode = Mode::Fill;
                continue;
            }
            ":correct" | ":c" => {
                mode = Mode::Correct;
                continue;
            }
            _ => {}
        }

        match session.respond(mode, &input) {
            Ok(list) => print_suggestions(&list, cli.json)?,
            Err(Error::EmptyInput) => println!("  no valid word entered"),
            Err(e) => log::error!("{}", e),
        }
    }
    Ok(())
}
