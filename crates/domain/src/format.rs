//! Section-delimited recipe text format
//!
//! ```text
//! [Recept]
//! Pancakes
//!
//! [Ingredienser]
//! 2;dl;flour
//! 3;st;eggs
//!
//! [Instruktioner]
//! Mix ingredients.
//! Fry.
//! ```
//!
//! Blank lines are separators only. Every other line is either a section
//! marker or content interpreted according to the last marker seen.

use thiserror::Error;

use crate::model::{Ingredient, Recipe};

pub const SECTION_RECIPE: &str = "[Recept]";
pub const SECTION_INGREDIENTS: &str = "[Ingredienser]";
pub const SECTION_INSTRUCTIONS: &str = "[Instruktioner]";

const FIELD_SEPARATOR: char = ';';

/// Error raised when text does not follow the recipe grammar, or when a
/// recipe holds values the grammar cannot express
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: content before any section marker")]
    ContentOutsideSection { line: usize },
    #[error("line {line}: ingredient needs 3 ';'-separated fields, found {fields}")]
    MalformedIngredient { line: usize, fields: usize },
    #[error("line {line}: {section} content without a preceding recipe")]
    MissingRecipe { line: usize, section: &'static str },
    #[error("recipe '{recipe}' cannot be written: {reason}")]
    Unrepresentable { recipe: String, reason: String },
}

/// Section markers recognised by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Recipe,
    Ingredients,
    Instructions,
}

impl Section {
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            SECTION_RECIPE => Some(Section::Recipe),
            SECTION_INGREDIENTS => Some(Section::Ingredients),
            SECTION_INSTRUCTIONS => Some(Section::Instructions),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Section::Recipe => SECTION_RECIPE,
            Section::Ingredients => SECTION_INGREDIENTS,
            Section::Instructions => SECTION_INSTRUCTIONS,
        }
    }
}

/// How the scanner interprets the next content line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Indefinite,
    New,
    Ingredient,
    Instruction,
}

impl From<Section> for ScanState {
    fn from(section: Section) -> Self {
        match section {
            Section::Recipe => ScanState::New,
            Section::Ingredients => ScanState::Ingredient,
            Section::Instructions => ScanState::Instruction,
        }
    }
}

/// Parse recipe text into recipes, in file order
///
/// The first violation aborts the parse; no partial result is returned.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>, FormatError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut recipes: Vec<Recipe> = Vec::new();
    let mut state = ScanState::default();

    for (index, line) in text_lines(content).enumerate() {
        let line_number = index + 1;

        if line.is_empty() {
            continue;
        }

        if let Some(section) = Section::from_marker(line) {
            state = section.into();
            continue;
        }

        match state {
            ScanState::Indefinite => {
                return Err(FormatError::ContentOutsideSection { line: line_number });
            }
            ScanState::New => recipes.push(Recipe::new(line)),
            ScanState::Ingredient => {
                let ingredient = parse_ingredient(line, line_number)?;
                current_recipe(&mut recipes, line_number, Section::Ingredients)?
                    .add_ingredient(ingredient);
            }
            ScanState::Instruction => {
                current_recipe(&mut recipes, line_number, Section::Instructions)?
                    .add_instruction(line);
            }
        }
    }

    Ok(recipes)
}

/// Split on `\n`, `\r\n` and a lone `\r`, so no line keeps a terminator
fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn parse_ingredient(line: &str, line_number: usize) -> Result<Ingredient, FormatError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [amount, measure, name] => Ok(Ingredient::new(*amount, *measure, *name)),
        _ => Err(FormatError::MalformedIngredient {
            line: line_number,
            fields: fields.len(),
        }),
    }
}

fn current_recipe(
    recipes: &mut [Recipe],
    line_number: usize,
    section: Section,
) -> Result<&mut Recipe, FormatError> {
    recipes.last_mut().ok_or(FormatError::MissingRecipe {
        line: line_number,
        section: section.marker(),
    })
}

/// Serialize recipes to text that [`parse_recipes`] reads back unchanged
///
/// Each section is followed by a blank separator line. Recipes holding
/// values the grammar cannot express are rejected before anything is
/// produced.
pub fn serialize_recipes(recipes: &[Recipe]) -> Result<String, FormatError> {
    for recipe in recipes {
        check_representable(recipe)?;
    }

    let mut out = String::new();
    for recipe in recipes {
        push_line(&mut out, SECTION_RECIPE);
        push_line(&mut out, recipe.name());
        out.push('\n');

        push_line(&mut out, SECTION_INGREDIENTS);
        for ingredient in recipe.ingredients() {
            push_line(&mut out, &format_ingredient(ingredient));
        }
        out.push('\n');

        push_line(&mut out, SECTION_INSTRUCTIONS);
        for instruction in recipe.instructions() {
            push_line(&mut out, instruction);
        }
        out.push('\n');
    }

    Ok(out)
}

fn format_ingredient(ingredient: &Ingredient) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        ingredient.amount,
        ingredient.measure,
        ingredient.name,
        sep = FIELD_SEPARATOR
    )
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn check_representable(recipe: &Recipe) -> Result<(), FormatError> {
    let reject = |reason: String| FormatError::Unrepresentable {
        recipe: recipe.name().to_string(),
        reason,
    };

    check_line_value(recipe.name(), "name").map_err(reject)?;

    for (index, ingredient) in recipe.ingredients().iter().enumerate() {
        for (field, value) in [
            ("amount", &ingredient.amount),
            ("measure", &ingredient.measure),
            ("name", &ingredient.name),
        ] {
            if has_line_break(value) {
                return Err(reject(format!(
                    "ingredient {} {} contains a line break",
                    index + 1,
                    field
                )));
            }
            if value.contains(FIELD_SEPARATOR) {
                return Err(reject(format!(
                    "ingredient {} {} contains '{}'",
                    index + 1,
                    field,
                    FIELD_SEPARATOR
                )));
            }
        }
    }

    for (index, instruction) in recipe.instructions().iter().enumerate() {
        check_line_value(instruction, &format!("instruction {}", index + 1)).map_err(reject)?;
    }

    Ok(())
}

/// A free-form value must survive as exactly one non-blank, non-marker line
fn check_line_value(value: &str, what: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is empty", what));
    }
    if has_line_break(value) {
        return Err(format!("{} contains a line break", what));
    }
    if Section::from_marker(value).is_some() {
        return Err(format!("{} is a section marker", what));
    }
    Ok(())
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANCAKES: &str = "[Recept]
Pancakes

[Ingredienser]
2;dl;flour
3;st;eggs

[Instruktioner]
Mix ingredients.
Fry.
";

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes")
            .with_ingredient(Ingredient::new("2", "dl", "flour"))
            .with_ingredient(Ingredient::new("3", "st", "eggs"))
            .with_instruction("Mix ingredients.")
            .with_instruction("Fry.")
    }

    #[test]
    fn test_parse_single_recipe() {
        let recipes = parse_recipes(PANCAKES).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0], pancakes());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_recipes("").unwrap().is_empty());
        assert!(parse_recipes("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let content = "[Recept]\nWaffles\n[Ingredienser]\n[Instruktioner]\n\
                       [Recept]\nApple pie\n[Ingredienser]\n1;;apple\n[Instruktioner]\nBake.\n";
        let recipes = parse_recipes(content).unwrap();

        let names: Vec<&str> = recipes.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Waffles", "Apple pie"]);
        assert_eq!(recipes[1].ingredients()[0], Ingredient::new("1", "", "apple"));
    }

    #[test]
    fn test_parse_without_blank_separators() {
        let content = "[Recept]\nPancakes\n[Ingredienser]\n2;dl;flour\n3;st;eggs\n\
                       [Instruktioner]\nMix ingredients.\nFry.";
        assert_eq!(parse_recipes(content).unwrap(), vec![pancakes()]);
    }

    #[test]
    fn test_parse_crlf_and_bom() {
        let content = format!("\u{feff}{}", PANCAKES.replace('\n', "\r\n"));
        assert_eq!(parse_recipes(&content).unwrap(), vec![pancakes()]);
    }

    #[test]
    fn test_parse_lone_carriage_return_ends_line() {
        let content = "[Recept]\r\nTea\r\n[Instruktioner]\r\nSteep.\r";
        let recipes = parse_recipes(content).unwrap();
        assert_eq!(recipes[0].instructions(), ["Steep."]);

        let content = "[Recept]\rTea\r[Instruktioner]\rStep\rtwo\n\r\nthree";
        let recipes = parse_recipes(content).unwrap();
        assert_eq!(recipes[0].instructions(), ["Step", "two", "three"]);
    }

    #[test]
    fn test_parse_line_numbers_count_each_terminator_once() {
        let content = "[Recept]\r\nBread\r[Ingredienser]\n1;kg\r\n";
        assert_eq!(
            parse_recipes(content),
            Err(FormatError::MalformedIngredient { line: 4, fields: 2 })
        );
    }

    #[test]
    fn test_parsed_recipes_can_always_be_written_back() {
        let inputs = [
            PANCAKES.to_string(),
            PANCAKES.replace('\n', "\r\n"),
            PANCAKES.replace('\n', "\r"),
            "[Recept]\r\nTea\r\n[Instruktioner]\r\nSteep.\r".to_string(),
            "[Recept]\nSoup\n[Ingredienser]\n;;\n1;l;water\r[Instruktioner]\n  \nBoil\rServe".to_string(),
            "\u{feff}[Recept]\n Spaced name \n[Recept]\nSecond\n".to_string(),
        ];

        for input in inputs {
            let recipes = parse_recipes(&input).unwrap();
            let text = serialize_recipes(&recipes)
                .unwrap_or_else(|e| panic!("{:?} did not serialize: {}", input, e));
            assert_eq!(parse_recipes(&text).unwrap(), recipes);
        }
    }

    #[test]
    fn test_parse_truncated_recipe_keeps_collected_lines() {
        let content = "[Recept]\nSoup\n\n[Ingredienser]\n1;l;water\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients().len(), 1);
        assert!(recipes[0].instructions().is_empty());
    }

    #[test]
    fn test_parse_consecutive_names_create_recipes() {
        let content = "[Recept]\nFirst\nSecond\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].name(), "Second");
    }

    #[test]
    fn test_parse_whitespace_line_is_content() {
        let content = "[Recept]\nTea\n[Instruktioner]\n   \n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes[0].instructions(), ["   "]);
    }

    #[test]
    fn test_parse_content_before_marker() {
        let result = parse_recipes("\nPancakes\n[Recept]\n");
        assert_eq!(result, Err(FormatError::ContentOutsideSection { line: 2 }));
    }

    #[test]
    fn test_parse_ingredient_with_two_fields() {
        let content = "[Recept]\nPancakes\n[Ingredienser]\n2;flour\n";
        assert_eq!(
            parse_recipes(content),
            Err(FormatError::MalformedIngredient { line: 4, fields: 2 })
        );
    }

    #[test]
    fn test_parse_ingredient_with_four_fields() {
        let content = "[Recept]\nPancakes\n[Ingredienser]\n2;dl;flour;sifted\n";
        assert_eq!(
            parse_recipes(content),
            Err(FormatError::MalformedIngredient { line: 4, fields: 4 })
        );
    }

    #[test]
    fn test_parse_ingredient_without_recipe() {
        let content = "[Ingredienser]\n2;dl;flour\n";
        assert_eq!(
            parse_recipes(content),
            Err(FormatError::MissingRecipe {
                line: 2,
                section: SECTION_INGREDIENTS
            })
        );
    }

    #[test]
    fn test_serialize_writes_sections_with_separators() {
        let text = serialize_recipes(&[pancakes()]).unwrap();
        assert_eq!(text, format!("{}\n", PANCAKES));
    }

    #[test]
    fn test_serialize_empty_collection() {
        assert_eq!(serialize_recipes(&[]).unwrap(), "");
    }

    #[test]
    fn test_serialized_text_parses_back() {
        let recipes = vec![
            pancakes(),
            Recipe::new("Plain water"),
            Recipe::new("Salad")
                .with_ingredient(Ingredient::new("1", "", "lettuce"))
                .with_ingredient(Ingredient::new("", "", ""))
                .with_instruction("  Rinse, chop and serve.  "),
        ];

        let text = serialize_recipes(&recipes).unwrap();
        assert_eq!(parse_recipes(&text).unwrap(), recipes);
    }

    #[test]
    fn test_serialize_rejects_separator_in_ingredient() {
        let recipe = Recipe::new("Bad").with_ingredient(Ingredient::new("1", "dl", "milk;cream"));
        let err = serialize_recipes(&[recipe]).unwrap_err();

        assert!(matches!(err, FormatError::Unrepresentable { ref recipe, .. } if recipe == "Bad"));
        assert!(err.to_string().contains("ingredient 1 name"));
    }

    #[test]
    fn test_serialize_rejects_values_that_would_not_read_back() {
        let cases = vec![
            Recipe::new(""),
            Recipe::new(SECTION_INGREDIENTS),
            Recipe::new("Two\nlines"),
            Recipe::new("Soup").with_instruction(""),
            Recipe::new("Soup").with_instruction(SECTION_RECIPE),
            Recipe::new("Soup").with_ingredient(Ingredient::new("1\r", "l", "water")),
        ];

        for recipe in cases {
            let result = serialize_recipes(std::slice::from_ref(&recipe));
            assert!(
                matches!(result, Err(FormatError::Unrepresentable { .. })),
                "expected rejection for {:?}",
                recipe
            );
        }
    }

    #[test]
    fn test_section_markers() {
        for section in [Section::Recipe, Section::Ingredients, Section::Instructions] {
            assert_eq!(Section::from_marker(section.marker()), Some(section));
        }
        assert_eq!(Section::from_marker("[recept]"), None);
        assert_eq!(Section::from_marker(" [Recept]"), None);
    }
}
