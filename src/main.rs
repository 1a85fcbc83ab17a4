use log::debug;
use recipe_catalog::{browse_by_category, views, CatalogConfig, RecipeCatalog, RecipeId};
use std::env;

const USAGE: &str =
    "Usage: recipe-catalog <list | favorites | categories | category NAME | show ID>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).ok_or(USAGE)?;

    let config = CatalogConfig::load()?;
    debug!("Using recipe API at {}", config.base_url);
    let catalog = RecipeCatalog::builder().config(config).build()?;

    let lines = match command.as_str() {
        "list" => views::recipe_list(catalog.recipes().await)
            .lines(|r| format!("#{} {} ({})", r.id, r.name, r.category)),
        "favorites" => views::favorites(catalog.recipes().await)
            .lines(|r| format!("#{} {}", r.id, r.name)),
        "categories" => views::categories(catalog.recipes().await)
            .lines(|c| format!("{}: {}", c.category, c.label())),
        "category" => {
            let name = args.get(2).ok_or(USAGE)?;
            views::recipe_list(catalog.recipes_in_category(name).await)
                .lines(|r| format!("#{} {}", r.id, r.name))
        }
        "show" => {
            let id: RecipeId = args.get(2).ok_or(USAGE)?.parse()?;
            let state = catalog.detail_resolver().resolve(id).await;
            match state.recipe() {
                Some(recipe) => vec![
                    recipe.name.clone(),
                    recipe.description.clone(),
                    format!("Category: {}", recipe.category),
                    format!("Author: {}", recipe.author),
                    format!("\nIngredients:\n{}", recipe.ingredients),
                    format!("\nInstructions:\n{}", recipe.instructions),
                    format!(
                        "\nMore like this: {}",
                        browse_by_category(&recipe.category).path()
                    ),
                ],
                None => vec![state.message().unwrap_or_default().to_string()],
            }
        }
        _ => return Err(USAGE.into()),
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
