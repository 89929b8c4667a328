use std::env;
use std::process::ExitCode;

use cocktail_browser::{
    paginate, render, AppConfig, CocktailApi, DrinkSource, FilterKind, SearchFilter,
};

const USAGE: &str = "Usage:
  cocktail-browser random
  cocktail-browser drink <id>
  cocktail-browser search <type|category> <value> [page]
  cocktail-browser filters <type|category>";

fn parse_kind(raw: &str) -> Option<FilterKind> {
    match raw {
        "type" => Some(FilterKind::AlcoholType),
        "category" => Some(FilterKind::Category),
        _ => None,
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().unwrap_or_default();
    let api = CocktailApi::new(&config)?;

    match args {
        [cmd] if cmd == "random" => {
            let drink = api.random_drink().await?;
            print!("{}", render::drink_card(&drink));
        }
        [cmd, id] if cmd == "drink" => match api.drink_by_id(id).await? {
            Some(drink) => print!("{}", render::drink_card(&drink)),
            None => println!("No drink found with id {}", id),
        },
        [cmd, kind, value, rest @ ..] if cmd == "search" && rest.len() <= 1 => {
            let kind = parse_kind(kind).ok_or(USAGE)?;
            let requested_page =
                cocktail_browser::page_from_query(rest.first().map(String::as_str));

            let drinks = api
                .drinks_by_filter(kind, value, config.max_results)
                .await?;
            let page = paginate(&drinks, requested_page, config.page_size);
            print!("{}", render::search_results(&page));

            let filter = SearchFilter::new(kind, value.clone());
            println!(
                "back: {}",
                cocktail_browser::back_to_search_url(Some(&filter), page.current_page as i64)
            );
        }
        [cmd, kind] if cmd == "filters" => {
            let kind = parse_kind(kind).ok_or(USAGE)?;
            for option in api.filter_options(kind).await? {
                println!("{}", option);
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
