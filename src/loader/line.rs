//! Line-level parsing for the two menu file formats.
//!
//! Both parsers are structured field splitters with per-field validation;
//! failures return a human-readable reason that the file loader wraps with
//! the path and line number.

/// A parsed `Name,Price,Flavor` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub price: u32,
    pub flavor: String,
}

/// A parsed `Name,"Ing1,Ing2,...",StrengthPercent` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CocktailLine {
    pub name: String,
    pub ingredients: Vec<String>,
    pub strength_percent: u32,
}

/// Strips a UTF-8 byte-order mark; files exported from spreadsheet tools
/// tend to carry one in front of the first field.
fn strip_bom(field: &str) -> &str {
    field.strip_prefix('\u{feff}').unwrap_or(field)
}

/// Parses one `Name,Price,Flavor` line.
pub fn parse_ingredient_line(line: &str) -> Result<IngredientLine, String> {
    let mut fields = line.split(',');
    let (Some(name), Some(price), Some(flavor), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("expected exactly 3 comma-separated fields (Name,Price,Flavor)".to_string());
    };

    let name = strip_bom(name);
    let price: u32 = price
        .parse()
        .map_err(|_| format!("price '{price}' is not a non-negative integer"))?;
    if flavor.is_empty() || !flavor.chars().all(|c| c.is_alphabetic()) {
        return Err(format!("flavor '{flavor}' is not alphabetic"));
    }

    Ok(IngredientLine {
        name: name.to_string(),
        price,
        flavor: flavor.to_string(),
    })
}

/// Parses one `Name,"Ing1,Ing2,...",StrengthPercent` line.
pub fn parse_cocktail_line(line: &str) -> Result<CocktailLine, String> {
    let (name, rest) = line
        .split_once(',')
        .ok_or("expected a comma after the cocktail name")?;
    let name = strip_bom(name);

    let quoted = rest
        .strip_prefix('"')
        .ok_or("expected a double-quoted ingredient list after the name")?;
    let (ingredient_list, rest) = quoted
        .split_once('"')
        .ok_or("unterminated ingredient list, missing closing quote")?;

    let strength = rest
        .strip_prefix(',')
        .ok_or("expected a comma between the ingredient list and the strength")?;
    let strength_percent: u32 = strength
        .parse()
        .map_err(|_| format!("strength '{strength}' is not a non-negative integer"))?;

    let ingredients: Vec<String> = ingredient_list
        .split(',')
        .map(|i| i.trim().to_string())
        .collect();

    Ok(CocktailLine {
        name: name.to_string(),
        ingredients,
        strength_percent,
    })
}
