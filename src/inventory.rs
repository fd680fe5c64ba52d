//! Inventario de ingredientes de la cafetera
use crate::constants::INITIAL_STOCK;
use crate::errors::InventoryError;
use crate::recipe::Recipe;

/// Stock de cada ingrediente de la cafetera.
/// La reposicion valida las cuatro cantidades antes de sumar cualquiera de ellas,
/// y el descuento por una venta nunca deja un stock negativo.
#[derive(Debug)]
pub struct Inventory {
    coffee: u32,
    milk: u32,
    sugar: u32,
    chocolate: u32,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory {
            coffee: INITIAL_STOCK,
            milk: INITIAL_STOCK,
            sugar: INITIAL_STOCK,
            chocolate: INITIAL_STOCK,
        }
    }

    /// Repone el inventario con las cantidades recibidas como texto.
    /// Si alguna es invalida no se modifica ningun stock.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        let coffee = parse_units(coffee)?;
        let milk = parse_units(milk)?;
        let sugar = parse_units(sugar)?;
        let chocolate = parse_units(chocolate)?;
        self.coffee += coffee;
        self.milk += milk;
        self.sugar += sugar;
        self.chocolate += chocolate;
        Ok(())
    }

    /// Indica si el stock actual alcanza para preparar la receta. No modifica nada.
    pub fn enough_ingredients(&self, recipe: &Recipe) -> bool {
        self.coffee >= recipe.amt_coffee()
            && self.milk >= recipe.amt_milk()
            && self.sugar >= recipe.amt_sugar()
            && self.chocolate >= recipe.amt_chocolate()
    }

    /// Descuenta del stock los ingredientes de la receta.
    /// Devuelve false sin modificar nada si el stock no alcanza.
    pub fn use_ingredients(&mut self, recipe: &Recipe) -> bool {
        if !self.enough_ingredients(recipe) {
            return false;
        }
        self.coffee -= recipe.amt_coffee();
        self.milk -= recipe.amt_milk();
        self.sugar -= recipe.amt_sugar();
        self.chocolate -= recipe.amt_chocolate();
        true
    }

    /// Reporte del stock actual, un ingrediente por linea
    pub fn report(&self) -> String {
        format!(
            "Coffee: {}\nMilk: {}\nSugar: {}\nChocolate: {}\n",
            self.coffee, self.milk, self.sugar, self.chocolate
        )
    }
}

fn parse_units(value: &str) -> Result<u32, InventoryError> {
    value.parse().map_err(|_| InventoryError::InvalidAmount)
}
