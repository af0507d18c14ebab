use clap::Parser;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fs;
use std::path::Path;

const SPIRITS: &[&str] = &[
    "whiskey", "rum", "gin", "vodka", "tequila", "brandy", "vermouth", "campari", "amaretto",
    "absinthe",
];
const MIXERS: &[&str] = &[
    "lemon", "lime", "mint", "soda", "tonic", "ginger", "honey", "bitters", "grenadine", "cola",
    "cream", "espresso",
];
const FLAVORS: &[&str] = &[
    "smokey", "sour", "sweet", "bitter", "fresh", "fizzy", "spicy", "creamy",
];
const ADJECTIVES: &[&str] = &[
    "Rusty", "Velvet", "Midnight", "Golden", "Smoky", "Crimson", "Frozen", "Electric",
];
const NOUNS: &[&str] = &[
    "Nail", "Hammer", "Sunrise", "Mule", "Fizz", "Sour", "Punch", "Serenade",
];

/// A CLI tool to generate sample ingredient and cocktail files for barkeep
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The directory to write `ingredients.csv` and `cocktails.csv` to
    #[arg(short, long, default_value = "data")]
    output: String,

    /// How many cocktails to generate
    #[arg(long, default_value_t = 12)]
    cocktails: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.cocktails > ADJECTIVES.len() * NOUNS.len() {
        eprintln!(
            "Error: --cocktails ({}) cannot exceed the {} distinct names available",
            cli.cocktails,
            ADJECTIVES.len() * NOUNS.len()
        );
        std::process::exit(1);
    }

    fs::create_dir_all(&cli.output)?;

    println!("Generating a menu with {} cocktails...", cli.cocktails);

    let ingredients = generate_ingredients(&mut rng);
    let ingredients_path = Path::new(&cli.output).join("ingredients.csv");
    fs::write(&ingredients_path, render_ingredients(&ingredients))?;
    println!(
        "-> Wrote {} ingredients to '{}'",
        ingredients.len(),
        ingredients_path.display()
    );

    let cocktails = generate_cocktails(&mut rng, &ingredients, cli.cocktails);
    let cocktails_path = Path::new(&cli.output).join("cocktails.csv");
    fs::write(&cocktails_path, render_cocktails(&cocktails))?;
    println!(
        "-> Wrote {} cocktails to '{}'",
        cocktails.len(),
        cocktails_path.display()
    );

    Ok(())
}

struct GeneratedIngredient {
    name: String,
    price: u32,
    flavor: String,
}

struct GeneratedCocktail {
    name: String,
    ingredients: Vec<String>,
    strength_percent: u32,
}

/// Prices every spirit and mixer once, with a random flavor tag each.
fn generate_ingredients(rng: &mut impl Rng) -> Vec<GeneratedIngredient> {
    let mut stock = Vec::with_capacity(SPIRITS.len() + MIXERS.len());
    for &name in SPIRITS {
        stock.push(GeneratedIngredient {
            name: name.to_string(),
            price: rng.random_range(3..=9),
            flavor: FLAVORS
                .choose(rng)
                .expect("flavor list is non-empty")
                .to_string(),
        });
    }
    for &name in MIXERS {
        stock.push(GeneratedIngredient {
            name: name.to_string(),
            price: rng.random_range(1..=3),
            flavor: FLAVORS
                .choose(rng)
                .expect("flavor list is non-empty")
                .to_string(),
        });
    }
    stock
}

/// Builds cocktails with distinct adjective-noun names, each mixing one
/// spirit with a few mixers.
fn generate_cocktails(
    rng: &mut impl Rng,
    stock: &[GeneratedIngredient],
    count: usize,
) -> Vec<GeneratedCocktail> {
    let mut names: Vec<String> = ADJECTIVES
        .iter()
        .flat_map(|adj| NOUNS.iter().map(move |noun| format!("{} {}", adj, noun)))
        .collect();
    names.shuffle(rng);

    let spirits: Vec<&str> = stock
        .iter()
        .take(SPIRITS.len())
        .map(|i| i.name.as_str())
        .collect();
    let mixers: Vec<&str> = stock
        .iter()
        .skip(SPIRITS.len())
        .map(|i| i.name.as_str())
        .collect();

    names
        .into_iter()
        .take(count)
        .map(|name| {
            let mut ingredients = vec![
                spirits
                    .choose(rng)
                    .expect("spirit list is non-empty")
                    .to_string(),
            ];
            let mut shaken = mixers.clone();
            shaken.shuffle(rng);
            ingredients.extend(
                shaken
                    .into_iter()
                    .take(rng.random_range(1..=3))
                    .map(str::to_string),
            );
            GeneratedCocktail {
                name,
                ingredients,
                strength_percent: rng.random_range(5..=40),
            }
        })
        .collect()
}

fn render_ingredients(ingredients: &[GeneratedIngredient]) -> String {
    ingredients
        .iter()
        .map(|i| format!("{},{},{}\n", i.name, i.price, i.flavor))
        .collect()
}

fn render_cocktails(cocktails: &[GeneratedCocktail]) -> String {
    cocktails
        .iter()
        .map(|c| {
            format!(
                "{},\"{}\",{}\n",
                c.name,
                c.ingredients.join(","),
                c.strength_percent
            )
        })
        .collect()
}
