//! Cafetera expendedora. Junta el recetario con el inventario y realiza las ventas.
use log::{debug, info};

use crate::errors::{InventoryError, PaymentError};
use crate::inventory::Inventory;
use crate::recipe::Recipe;
use crate::recipe_book::RecipeBook;

/// Cafetera expendedora: tiene su recetario y su inventario de ingredientes.
/// La venta chequea en orden que exista la receta, que el pago alcance
/// y que haya stock. El primer chequeo que falla corta la venta y
/// devuelve el pago completo, sin tocar el inventario.
pub struct CoffeeMaker {
    recipe_book: RecipeBook,
    inventory: Inventory,
}

impl CoffeeMaker {
    pub fn new() -> CoffeeMaker {
        CoffeeMaker {
            recipe_book: RecipeBook::new(),
            inventory: Inventory::new(),
        }
    }

    /// Agrega una receta al recetario. Devuelve false si no se pudo agregar.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.recipe_book.add_recipe(recipe)
    }

    /// Borra la receta de la posicion indicada y devuelve su nombre,
    /// o una cadena vacia si no habia receta.
    pub fn delete_recipe(&mut self, index: usize) -> String {
        self.recipe_book.delete_recipe(index)
    }

    /// Edita la receta de la posicion indicada conservando su nombre
    pub fn edit_recipe(&mut self, index: usize, new_recipe: Recipe) {
        self.recipe_book.edit_recipe(index, new_recipe)
    }

    /// Devuelve todos los lugares del recetario, incluidos los vacios
    pub fn recipes(&self) -> &[Option<Recipe>] {
        self.recipe_book.recipes()
    }

    /// Repone el inventario. Las cantidades llegan como texto y se validan
    /// todas antes de sumar cualquiera.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        self.inventory.add_inventory(coffee, milk, sugar, chocolate)
    }

    /// Reporte del stock actual de cada ingrediente
    pub fn check_inventory(&self) -> String {
        self.inventory.report()
    }

    /// Realiza la venta de la receta de la posicion indicada y devuelve el vuelto.
    /// Si no hay receta en esa posicion, el pago no alcanza o no hay stock,
    /// devuelve el pago completo y no descuenta nada.
    pub fn make_coffee(&mut self, recipe_index: usize, payment: u32) -> u32 {
        let recipe = match self
            .recipe_book
            .recipes()
            .get(recipe_index)
            .and_then(|slot| slot.as_ref())
        {
            Some(recipe) => recipe,
            None => {
                info!(
                    "[COFFEE MAKER] There is no recipe at slot {}, returning the payment",
                    recipe_index
                );
                return payment;
            }
        };

        if payment < recipe.price() {
            info!(
                "[COFFEE MAKER] Not enough money for {}, returning the payment",
                recipe.name()
            );
            return payment;
        }

        if !self.inventory.use_ingredients(recipe) {
            info!(
                "[COFFEE MAKER] Not enough ingredients for {}, returning the payment",
                recipe.name()
            );
            return payment;
        }

        debug!(
            "[COFFEE MAKER] Made {}, charged {}",
            recipe.name(),
            recipe.price()
        );
        payment - recipe.price()
    }
}

/// Parsea un pago ingresado como texto.
/// Un pago que no sea un entero no negativo se rechaza, nunca se trunca.
pub fn parse_payment(value: &str) -> Result<u32, PaymentError> {
    value.parse().map_err(|_| PaymentError::InvalidPayment)
}
