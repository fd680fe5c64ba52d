//! Recetario de la cafetera
use std::array;

use crate::constants::NUMBER_OF_RECIPE_SLOTS;
use crate::recipe::Recipe;

/// Recetario con una cantidad fija de lugares para recetas.
/// Cada receta conserva su posicion hasta que se la borra, no se compacta el arreglo,
/// y no puede haber dos recetas con el mismo nombre.
pub struct RecipeBook {
    recipes: [Option<Recipe>; NUMBER_OF_RECIPE_SLOTS],
}

impl RecipeBook {
    pub fn new() -> RecipeBook {
        RecipeBook {
            recipes: array::from_fn(|_| None),
        }
    }

    /// Agrega la receta en el primer lugar libre.
    /// Devuelve false si ya hay una receta con ese nombre o si no quedan lugares.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        if self.contains_name(recipe.name()) {
            return false;
        }
        match self.recipes.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(recipe);
                true
            }
            None => false,
        }
    }

    /// Borra la receta de la posicion indicada y devuelve su nombre.
    /// Si la posicion esta vacia o no existe devuelve una cadena vacia.
    pub fn delete_recipe(&mut self, index: usize) -> String {
        match self.recipes.get_mut(index).and_then(|slot| slot.take()) {
            Some(recipe) => recipe.name,
            None => String::new(),
        }
    }

    /// Reemplaza los ingredientes y el precio de la receta de la posicion indicada,
    /// conservando el nombre que ya tenia. Sobre una posicion vacia no tiene efecto.
    pub fn edit_recipe(&mut self, index: usize, new_recipe: Recipe) {
        if let Some(slot) = self.recipes.get_mut(index) {
            if let Some(existing) = slot.take() {
                let mut replacement = new_recipe;
                replacement.name = existing.name;
                *slot = Some(replacement);
            }
        }
    }

    /// Devuelve todos los lugares del recetario, incluidos los vacios
    pub fn recipes(&self) -> &[Option<Recipe>] {
        &self.recipes
    }

    fn contains_name(&self, name: &str) -> bool {
        self.recipes
            .iter()
            .flatten()
            .any(|recipe| recipe.name() == name)
    }
}
