use clap::Parser;
use colored::*;
use mapita::api::MapApi;
use mapita::commands::{CmdMessage, MessageLevel};
use mapita::config::MapConfig;
use mapita::error::{MapitaError, Result};
use mapita::link::ViewLink;
use mapita::list::ListRow;
use mapita::markers::DetachedMap;
use mapita::model::{LngLat, PoiPatch};
use mapita::store::fs::{open_storage, FileStorage};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MapApi<FileStorage, DetachedMap>,
    config: MapConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, category }) => handle_list(&mut ctx, search, category),
        Some(Commands::Add {
            title,
            lng,
            lat,
            description,
            category,
        }) => handle_add(&mut ctx, title, description, category, lng, lat),
        Some(Commands::Edit {
            id,
            title,
            description,
        }) => handle_edit(&mut ctx, id, title, description),
        Some(Commands::Move { id, lng, lat }) => handle_move(&mut ctx, id, lng, lat),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { file }) => handle_export(&ctx, file),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Link { query }) => handle_link(&ctx, query),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let storage = open_storage(cli.data_dir.as_deref())?;
    let data_dir = storage.data_file().parent().map(PathBuf::from).unwrap_or_default();
    let config = MapConfig::load(&data_dir).unwrap_or_default();

    let mut api = MapApi::new(storage, DetachedMap::new());
    api.bootstrap();

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, categories: Vec<String>) -> Result<()> {
    if let Some(term) = search {
        ctx.api.set_query(term);
    }
    for category in &categories {
        ctx.api.toggle_category(category);
    }

    let result = ctx.api.list()?;
    print_rows(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    description: String,
    category: String,
    lng: f64,
    lat: f64,
) -> Result<()> {
    let result = ctx
        .api
        .add_poi(title, description, category, LngLat::new(lng, lat))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let patch = PoiPatch {
        title,
        description,
        coords: None,
    };
    if patch.is_empty() {
        return Err(MapitaError::Api(
            "Nothing to edit: pass --title and/or --description".into(),
        ));
    }

    ctx.api.begin_edit(&id)?;
    let result = ctx.api.save_edit(&id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, id: String, lng: f64, lat: f64) -> Result<()> {
    let result = ctx
        .api
        .update_poi(&id, PoiPatch::coords(LngLat::new(lng, lat)))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    for id in &ids {
        let result = ctx.api.delete_poi(id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search(&term)?;
    print_rows(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_file(file.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_link(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let (center, zoom) = match query {
        Some(query) => ViewLink::parse(&query)
            .resolve(ctx.config.default_center, ctx.config.default_zoom),
        None => (ctx.config.default_center, ctx.config.default_zoom),
    };

    println!("center: {}, {}  zoom: {}", center.lng, center.lat, zoom);
    println!("{}", ViewLink::to_query(center, zoom).dimmed());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!(
                "center = {}, {}",
                ctx.config.default_center.lng, ctx.config.default_center.lat
            );
            println!("zoom = {}", ctx.config.default_zoom);
        }
        (Some("zoom"), None) => println!("zoom = {}", ctx.config.default_zoom),
        (Some("zoom"), Some(v)) => {
            let zoom: f64 = v
                .parse()
                .map_err(|_| MapitaError::Api(format!("Invalid zoom: {}", v)))?;
            ctx.config.default_zoom = zoom;
            ctx.config.save(&ctx.data_dir)?;
            println!("zoom = {}", zoom);
        }
        (Some("center"), None) => println!(
            "center = {}, {}",
            ctx.config.default_center.lng, ctx.config.default_center.lat
        ),
        (Some("center"), Some(v)) => {
            let center = parse_center(&v)?;
            ctx.config.default_center = center;
            ctx.config.save(&ctx.data_dir)?;
            println!("center = {}, {}", center.lng, center.lat);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn parse_center(s: &str) -> Result<LngLat> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() == 2 {
        if let (Ok(lng), Ok(lat)) = (parts[0].parse(), parts[1].parse()) {
            let center = LngLat::new(lng, lat);
            if center.is_valid() {
                return Ok(center);
            }
        }
    }
    Err(MapitaError::Api(format!(
        "Invalid center (expected \"lng,lat\"): {}",
        s
    )))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 24;

fn print_rows(rows: &[ListRow]) {
    for row in rows {
        let id_padding = ID_WIDTH.saturating_sub(row.id.width());

        let text = if row.description.is_empty() {
            row.title.clone()
        } else {
            format!("{} · {}", row.title, row.description)
        };
        let available = LINE_WIDTH.saturating_sub(ID_WIDTH + 4);
        let text = truncate_to_width(&text, available);

        println!(
            "{} {}{} {}",
            row.icon,
            row.id.dimmed(),
            " ".repeat(id_padding),
            text.bold()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
