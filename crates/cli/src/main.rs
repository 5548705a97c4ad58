use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ognt_corpus::canon::{self, Testament};
use ognt_corpus::{render, Corpus, CorpusConfig, GreekSection, StrongsNumber, TranslationMode};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ognt")]
#[command(about = "Read the Greek New Testament with clause-level English", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// TOML file with data file locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the data files (overrides OGNT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chapter, or a verse range of it, as English text
    Chapter(ChapterArgs),

    /// Render verses as HTML spans labelled by verse number
    Html(HtmlArgs),

    /// Look up a Strong's number (5547 or G5547)
    Strongs(StrongsArgs),

    /// List canonical books with chapter counts
    Books(BooksArgs),

    /// Tell whether a book belongs to the Old or New Testament
    Testament(TestamentArgs),
}

#[derive(Args)]
struct RangeArgs {
    /// Book number (40-66) or name
    book: String,

    /// Chapter number
    chapter: u32,

    /// First verse index (0-based)
    #[arg(long)]
    start: Option<usize>,

    /// Verse index to stop before
    #[arg(long)]
    end: Option<usize>,
}

#[derive(Args)]
struct ChapterArgs {
    #[command(flatten)]
    range: RangeArgs,

    /// Translation column to render
    #[arg(long, value_enum, default_value_t = ModeArg::Simplified)]
    mode: ModeArg,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct HtmlArgs {
    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Args)]
struct StrongsArgs {
    /// Strong's identifier
    id: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BooksArgs {
    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TestamentArgs {
    /// Book number or name
    book: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Literal,
    Idiomatic,
    Simplified,
}

impl From<ModeArg> for TranslationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Literal => Self::Literal,
            ModeArg::Idiomatic => Self::Idiomatic,
            ModeArg::Simplified => Self::Simplified,
        }
    }
}

#[derive(Serialize)]
struct VerseOutput {
    verse: u32,
    text: String,
}

#[derive(Serialize)]
struct ChapterOutput {
    book: u32,
    book_name: Option<&'static str>,
    chapter: u32,
    mode: TranslationMode,
    verses: Vec<VerseOutput>,
    text: String,
}

#[derive(Serialize)]
struct BookOutput {
    number: u32,
    name: &'static str,
    chapters: u32,
    testament: Option<Testament>,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Chapter(args) => args.json,
        Commands::Strongs(args) => args.json,
        Commands::Books(args) => args.json,
        _ => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Books(args) => run_books(&args),
        Commands::Testament(args) => run_testament(&args),
        Commands::Chapter(args) => {
            let corpus = open_corpus(cli.config, cli.data_dir)?;
            run_chapter(&corpus, &args)
        }
        Commands::Html(args) => {
            let corpus = open_corpus(cli.config, cli.data_dir)?;
            run_html(&corpus, &args)
        }
        Commands::Strongs(args) => {
            let corpus = open_corpus(cli.config, cli.data_dir)?;
            run_strongs(&corpus, &args)
        }
    }
}

fn open_corpus(config: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Corpus> {
    let mut cfg = match config {
        Some(path) => CorpusConfig::from_toml_file(&path)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => CorpusConfig::default(),
    }
    .with_env_overrides();
    if let Some(dir) = data_dir {
        cfg.data_dir = dir;
    }
    log::debug!("Data directory: {}", cfg.data_dir.display());
    Corpus::open(cfg).context("Invalid corpus configuration")
}

fn parse_book(book: &str) -> Result<u32> {
    let book = book.trim();
    if let Ok(number) = book.parse::<u32>() {
        return Ok(number);
    }
    canon::book_number(book).ok_or_else(|| anyhow!("Unknown book: {book}"))
}

fn load_section(corpus: &Corpus, range: &RangeArgs) -> Result<GreekSection> {
    let book = parse_book(&range.book)?;
    let chapter = corpus
        .chapter(book, range.chapter)
        .with_context(|| format!("Cannot load {} {}", range.book, range.chapter))?;
    let start = range.start.unwrap_or(0);
    let end = range.end.unwrap_or(chapter.verses().len());
    Ok(chapter.slice(start, end))
}

fn run_chapter(corpus: &Corpus, args: &ChapterArgs) -> Result<()> {
    let section = load_section(corpus, &args.range)?;
    let translations = corpus.translations()?;
    let mode = TranslationMode::from(args.mode);

    if !args.json {
        println!("{}", section.text(mode, translations).trim_end());
        return Ok(());
    }

    let verses: Vec<VerseOutput> = section
        .verses()
        .iter()
        .map(|verse| VerseOutput {
            verse: verse.verse_num(),
            text: verse.text(mode, translations).trim_end().to_string(),
        })
        .collect();
    let output = ChapterOutput {
        book: section.book(),
        book_name: canon::book_name(section.book()),
        chapter: section.chapter(),
        mode,
        text: section.text(mode, translations).trim_end().to_string(),
        verses,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_html(corpus: &Corpus, args: &HtmlArgs) -> Result<()> {
    let section = load_section(corpus, &args.range)?;
    println!("{}", render::section_html(&section, corpus.translations()?));
    Ok(())
}

fn run_strongs(corpus: &Corpus, args: &StrongsArgs) -> Result<()> {
    let number: StrongsNumber = args.id.parse()?;
    let def = corpus.resolve_strongs(number.get())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&def)?);
        return Ok(());
    }
    if !def.found {
        println!("{number}: not in lexicon");
        return Ok(());
    }
    let mut heading = format!("{number} {}", def.greek);
    if !def.translit.is_empty() {
        heading.push_str(&format!(" ({})", def.translit));
    }
    if !def.pronunciation.is_empty() {
        heading.push_str(&format!(" [{}]", def.pronunciation));
    }
    println!("{heading}");
    if !def.strongs_str.is_empty() {
        println!("{}", def.strongs_str);
    }
    if !def.kjv_def.is_empty() {
        println!("KJV: {}", def.kjv_def);
    }
    Ok(())
}

fn run_books(args: &BooksArgs) -> Result<()> {
    let books: Vec<BookOutput> = canon::book_names()
        .iter()
        .copied()
        .zip(canon::chapter_counts().iter().copied())
        .zip(1u32..)
        .map(|((name, chapters), number)| BookOutput {
            number,
            name,
            chapters,
            testament: Testament::of_number(number),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }
    for book in books {
        let testament = book.testament.map(Testament::as_str).unwrap_or("-");
        println!("{}\t{}\t{}\t{}", book.number, book.name, book.chapters, testament);
    }
    Ok(())
}

fn run_testament(args: &TestamentArgs) -> Result<()> {
    let book = parse_book(&args.book)?;
    let Some(testament) = Testament::of_number(book) else {
        bail!("Unknown book: {}", args.book);
    };
    println!("{}", testament.as_str());
    Ok(())
}
