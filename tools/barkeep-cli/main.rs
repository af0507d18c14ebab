use barkeep::prelude::*;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

/// Which analytics report to print.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportCli {
    /// Price summary over the cocktail catalog
    Prices,
    /// Flavor distribution across stock and catalog
    Flavors,
    /// Ingredient usage counts
    Usage,
}

/// An interactive bar: load a menu from flat files, then order, get
/// recommendations, and run reports from a numbered action menu.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the ingredients file (Name,Price,Flavor per line)
    ingredients_path: String,
    /// Path to the cocktails file (Name,"Ing1,Ing2,...",Strength per line)
    cocktails_path: String,
    /// Name of the bar
    bar_name: String,

    /// Print one analytics report and exit instead of starting a session
    #[arg(short, long, value_enum)]
    report: Option<ReportCli>,

    /// Emit the report as JSON (only with --report)
    #[arg(long)]
    json: bool,
}

/// The actions a session understands, keyed by the digit the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ViewOrder,
    OrderDrink,
    Recommend,
    CreateCocktail,
    Analytics,
    CloseTab,
}

impl Action {
    fn from_choice(choice: &str) -> Option<Action> {
        match choice.trim() {
            "0" => Some(Action::ViewOrder),
            "1" => Some(Action::OrderDrink),
            "2" => Some(Action::Recommend),
            "3" => Some(Action::CreateCocktail),
            "4" => Some(Action::Analytics),
            "5" => Some(Action::CloseTab),
            _ => None,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut bar = Bar::new(&cli.bar_name);
    loader::load_ingredients(&mut bar, &cli.ingredients_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load ingredients: {}", e)));
    loader::load_cocktails(&mut bar, &cli.cocktails_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load cocktails: {}", e)));

    if let Some(report) = cli.report {
        print_report(&bar, report, cli.json);
    } else {
        run_session(&mut bar);
    }
}

/// One-shot report mode for scripting; everything else is interactive.
fn print_report(bar: &Bar, report: ReportCli, json: bool) {
    match report {
        ReportCli::Prices => match PriceSummary::for_menu(bar) {
            Some(summary) => print_rendered(&summary, json),
            None => println!("No cocktails on the menu."),
        },
        ReportCli::Flavors => print_rendered(&FlavorDistribution::for_bar(bar), json),
        ReportCli::Usage => print_rendered(&IngredientUsage::for_bar(bar), json),
    }
}

fn print_rendered<R: std::fmt::Display + serde::Serialize>(report: &R, json: bool) {
    if json {
        let rendered = serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
        println!("{}", rendered);
    } else {
        println!("{}", report);
    }
}

/// The interactive session: print the action menu, dispatch, repeat.
/// Bad input prints a line and re-prompts; it never ends the session.
fn run_session(bar: &mut Bar) {
    println!("Welcome to {}!", bar.name());
    loop {
        println!("\nWhat would you like to do?");
        println!("  0: View the current order");
        println!("  1: Order a cocktail");
        println!("  2: Get a recommendation by flavor");
        println!("  3: Create your own cocktail");
        println!("  4: Menu analytics");
        println!("  5: Close the tab and leave");

        let choice = prompt_for_input("Enter choice", None);
        let Some(action) = Action::from_choice(&choice) else {
            println!("Invalid choice '{}'. Please enter 0-5.", choice.trim());
            continue;
        };

        match action {
            Action::ViewOrder => {
                println!("{}", bar.receipt());
                println!("{}", bar);
            }
            Action::OrderDrink => order_drink(bar),
            Action::Recommend => recommend(bar),
            Action::CreateCocktail => create_cocktail(bar),
            Action::Analytics => analytics(bar),
            Action::CloseTab => {
                println!("\nYour order:");
                println!("{}", bar.receipt());
                println!("Total: ${}", bar.tab());
                println!("Thanks for visiting {}!", bar.name());
                break;
            }
        }
    }
}

/// Shows the price-sorted menu and places an order by its index.
fn order_drink(bar: &mut Bar) {
    let names: Vec<String> = {
        let menu = bar.menu_by_price();
        if menu.is_empty() {
            println!("No cocktails on the menu.");
            return;
        }
        println!("Our menu, cheapest first:");
        for (i, cocktail) in menu.iter().enumerate() {
            println!("  {}: {}", i, cocktail);
        }
        menu.iter().map(|c| c.name().to_string()).collect()
    };

    let Some(index) = read_index("Which number would you like", names.len()) else {
        return;
    };
    match bar.order_by_name(&names[index]) {
        Ok(()) => println!("One {} coming up! Your tab is ${}.", names[index], bar.tab()),
        Err(e) => println!("Sorry: {}", e),
    }
}

/// Shows the known flavors and recommends up to four matching cocktails.
fn recommend(bar: &Bar) {
    let flavors = bar.get_flavors();
    if flavors.is_empty() {
        println!("No flavors behind the bar.");
        return;
    }
    println!("What are you in the mood for?");
    for (i, flavor) in flavors.iter().enumerate() {
        println!("  {}: {}", i, flavor);
    }

    let Some(index) = read_index("Pick a flavor number", flavors.len()) else {
        return;
    };
    let picks = bar.recommend(flavors[index]);
    if picks.is_empty() {
        println!("Nothing on the menu is {}, sorry.", flavors[index]);
    } else {
        println!("You might enjoy:");
        for cocktail in picks {
            println!("  {}", cocktail);
        }
    }
}

/// Builds a cocktail from a comma-separated selection of ingredient indices.
fn create_cocktail(bar: &mut Bar) {
    let stocked: Vec<String> = bar.ingredients().keys().cloned().collect();
    if stocked.is_empty() {
        println!("No ingredients behind the bar.");
        return;
    }
    println!("Ingredients behind the bar:");
    for (i, name) in stocked.iter().enumerate() {
        println!("  {}: {} - ${}", i, name, bar.ingredients()[name.as_str()].price);
    }

    let selection = prompt_for_input("Ingredient numbers, comma-separated", None);
    let mut chosen = Vec::new();
    for part in selection.split(',') {
        let part = part.trim();
        match part.parse::<usize>() {
            Ok(i) if i < stocked.len() => chosen.push(stocked[i].clone()),
            _ => {
                println!("'{}' is not an ingredient number between 0 and {}.", part, stocked.len() - 1);
                return;
            }
        }
    }

    let name = prompt_for_input("Name your creation", None);
    match bar.create_cocktail(&name, &chosen, None) {
        Ok(cocktail) => println!("Added to the menu: {}", cocktail),
        Err(e) => println!("Sorry: {}", e),
    }
}

/// Submenu over the three analytics reports.
fn analytics(bar: &Bar) {
    println!("Which report?");
    println!("  1: Price summary");
    println!("  2: Flavor distribution");
    println!("  3: Ingredient usage");
    let choice = prompt_for_input("Enter choice", Some("1"));
    match choice.trim() {
        "1" => print_report(bar, ReportCli::Prices, false),
        "2" => print_report(bar, ReportCli::Flavors, false),
        "3" => print_report(bar, ReportCli::Usage, false),
        other => println!("Invalid choice '{}'. Please enter 1-3.", other),
    }
}

/// Reads a zero-based index below `len`; reports and returns `None` on bad
/// input.
fn read_index(prompt_text: &str, len: usize) -> Option<usize> {
    let raw = prompt_for_input(prompt_text, None);
    match raw.trim().parse::<usize>() {
        Ok(i) if i < len => Some(i),
        _ => {
            println!("'{}' is not a number between 0 and {}.", raw.trim(), len - 1);
            None
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
