//! Rendering use case - turns recipes into plain console text

use crate::model::Recipe;

const INGREDIENTS_HEADING: &str = "INGREDIENSER";
const INSTRUCTIONS_HEADING: &str = "INSTRUKTIONER";

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width of the header panel around the recipe name
    pub panel_width: usize,
    /// Prefix instructions with their step number
    pub number_instructions: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            panel_width: 40,
            number_instructions: false,
        }
    }
}

/// Renderer for recipe listings and detail views
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render one recipe: name panel, ingredients, instructions
    pub fn render(&self, recipe: &Recipe) -> String {
        let mut lines = self.header_panel(recipe.name());

        lines.push(String::new());
        lines.extend(heading(INGREDIENTS_HEADING));
        lines.extend(recipe.ingredients().iter().map(|i| i.to_string()));

        lines.push(String::new());
        lines.extend(heading(INSTRUCTIONS_HEADING));
        for (index, instruction) in recipe.instructions().iter().enumerate() {
            if self.config.number_instructions {
                lines.push(format!("{}. {}", index + 1, instruction));
            } else {
                lines.push(instruction.clone());
            }
        }

        lines.join("\n")
    }

    /// Render several recipes separated by a blank line
    pub fn render_all(&self, recipes: &[Recipe]) -> String {
        recipes
            .iter()
            .map(|r| self.render(r))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Numbered list of recipe names, starting at 1
    pub fn render_index(&self, recipes: &[Recipe]) -> String {
        let width = recipes.len().to_string().len();
        recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| format!("{:>width$}. {}", index + 1, recipe.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header_panel(&self, name: &str) -> Vec<String> {
        let width = self.config.panel_width.max(name.chars().count() + 2);
        let border = "═".repeat(width);
        vec![border.clone(), format!("{:^width$}", name), border]
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Heading followed by an underline of the same length
fn heading(title: &str) -> [String; 2] {
    [title.to_string(), "═".repeat(title.chars().count())]
}
