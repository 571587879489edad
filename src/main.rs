use std::io::Write;
use std::{
    env,
    fs::{self, OpenOptions},
};

use anyhow::Context;
use lectern::deck::serialize_deck;
use lectern::markup::HtmlParser;
use lectern::segment::{build_slides, Strategy};
use lectern::store;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_OUTPUT_DIR: &str = "output/deck";

pub struct Config {
    pub lecture_id: String,
    pub strategy: Strategy,
    pub output_dir: String,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let lecture_id = args
        .next()
        .context("lecture_id is required, or pass a path to a local .html file")?;
    let strategy = match args.next() {
        Some(name) => name.parse::<Strategy>()?,
        None => Strategy::Smart,
    };
    let output_dir = args.next().unwrap_or(DEFAULT_OUTPUT_DIR.to_string());

    Ok(Config {
        lecture_id,
        strategy,
        output_dir,
    })
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = env::args().skip(1);

    let config = match parse_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: lectern <lecture_id | path.html> [smart|manual|custom|simple] [output_dir]");
            return Err(e);
        }
    };

    let record = load_record(&config.lecture_id)?;
    if !record.published {
        eprintln!("note: lecture '{}' is still a draft", record.id);
    }

    let parser = HtmlParser::new();
    let slides = build_slides(
        &record.lecture,
        &record.activities,
        &config.strategy,
        &parser,
    )
    .context("failed to segment lecture")?;

    create_output_dir(&config.output_dir).context("failed to create output directory")?;

    let deck = serialize_deck(&record.lecture, &slides).context("failed to serialize deck")?;
    write_file(&config.output_dir, "deck.md", &deck)?;

    let json =
        serde_json::to_string_pretty(&slides).context("failed to serialize slides to JSON")?;
    write_file(&config.output_dir, "slides.json", &json)?;

    println!(
        "created {BOLD}{}{RESET} slides for {BOLD}{}{RESET} in {BOLD}{}{RESET}",
        slides.len(),
        record.lecture.title,
        &config.output_dir
    );

    Ok(())
}

// A lecture id is fetched from the store; an .html argument is read locally,
// titled after its file stem.
fn load_record(source: &str) -> anyhow::Result<store::LectureRecord> {
    if source.ends_with(".html") {
        let content = fs::read_to_string(source).context(format!("failed to read {}", source))?;
        let title = source
            .rsplit('/')
            .next()
            .and_then(|name| name.strip_suffix(".html"))
            .unwrap_or(source)
            .to_string();

        return Ok(store::LectureRecord {
            id: title.clone(),
            lecture: lectern::LectureData {
                title,
                description: String::new(),
                content,
            },
            published: true,
            activities: Vec::new(),
        });
    }

    let base_url = env::var("STORE_URL")
        .context("STORE_URL must be set to fetch a lecture by id (try a .env file)")?;
    store::get_lecture_record(&base_url, source).context(format!(
        "could not fetch lecture '{}' from the document store",
        source
    ))
}

fn write_file(output_dir: &str, name: &str, content: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(format!("{}/{}", output_dir, name))
        .context(format!("failed to open file for {}", name))?;

    write!(file, "{}", content).context(format!("failed to write {}", name))?;

    Ok(())
}

fn create_output_dir(output_dir: &str) -> anyhow::Result<()> {
    if fs::metadata(output_dir).is_ok() {
        fs::remove_dir_all(output_dir)?;
    }

    fs::create_dir_all(output_dir)?;
    Ok(())
}
