// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("larder")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Larder Contributors")
        .about("Find recipes for the ingredients you already have")
        .subcommand_required(true)
        .arg(
            Arg::new("api_key")
                .long("api-key")
                .global(true)
                .value_name("KEY")
                .help("Spoonacular API key (falls back to SPOONACULAR_API_KEY)"),
        )
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .global(true)
                .value_name("URL")
                .default_value("https://api.spoonacular.com")
                .help("API endpoint root"),
        )
        .subcommand(
            Command::new("search")
                .about("Search recipes by the ingredients on hand")
                .arg(
                    Arg::new("ingredients")
                        .required(true)
                        .help("Comma-separated ingredient list"),
                )
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .default_value("5")
                        .help("Maximum number of results to fetch"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show time, servings, ingredients and instructions for a recipe")
                .arg(
                    Arg::new("recipe_id")
                        .required(true)
                        .help("Recipe id from a previous search"),
                ),
        )
        .subcommand(
            Command::new("fav")
                .about("Manage favorite recipes")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Favorite a recipe from a search result")
                        .arg(Arg::new("recipe_id").required(true).help("Recipe id to favorite"))
                        .arg(
                            Arg::new("ingredients")
                                .required(true)
                                .help("Ingredient list that surfaced the recipe"),
                        ),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a recipe from favorites")
                        .arg(Arg::new("recipe_id").required(true).help("Recipe id to unfavorite")),
                )
                .subcommand(Command::new("list").about("List favorited recipes")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("larder.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }
}
