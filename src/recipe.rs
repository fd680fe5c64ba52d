//! Receta de una bebida de la cafetera
use crate::errors::RecipeError;

/// Receta de una bebida: nombre, cantidad de cada ingrediente y precio.
/// Los campos numericos se setean desde su representacion de texto y quedan validados,
/// un valor invalido deja el campo como estaba.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub(crate) name: String,
    pub(crate) amt_coffee: u32,
    pub(crate) amt_milk: u32,
    pub(crate) amt_sugar: u32,
    pub(crate) amt_chocolate: u32,
    pub(crate) price: u32,
}

impl Recipe {
    pub fn new() -> Recipe {
        Recipe {
            name: String::new(),
            amt_coffee: 0,
            amt_milk: 0,
            amt_sugar: 0,
            amt_chocolate: 0,
            price: 0,
        }
    }

    /// Setea el nombre de la receta. Un nombre vacio no tiene efecto.
    pub fn set_name(&mut self, name: &str) {
        if !name.is_empty() {
            self.name = name.to_string();
        }
    }

    pub fn set_amt_coffee(&mut self, amount: &str) -> Result<(), RecipeError> {
        self.amt_coffee = parse_amount(amount)?;
        Ok(())
    }

    pub fn set_amt_milk(&mut self, amount: &str) -> Result<(), RecipeError> {
        self.amt_milk = parse_amount(amount)?;
        Ok(())
    }

    pub fn set_amt_sugar(&mut self, amount: &str) -> Result<(), RecipeError> {
        self.amt_sugar = parse_amount(amount)?;
        Ok(())
    }

    pub fn set_amt_chocolate(&mut self, amount: &str) -> Result<(), RecipeError> {
        self.amt_chocolate = parse_amount(amount)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: &str) -> Result<(), RecipeError> {
        self.price = price.parse().map_err(|_| RecipeError::InvalidPrice)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amt_coffee(&self) -> u32 {
        self.amt_coffee
    }

    pub fn amt_milk(&self) -> u32 {
        self.amt_milk
    }

    pub fn amt_sugar(&self) -> u32 {
        self.amt_sugar
    }

    pub fn amt_chocolate(&self) -> u32 {
        self.amt_chocolate
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

fn parse_amount(value: &str) -> Result<u32, RecipeError> {
    value.parse().map_err(|_| RecipeError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_recipe_with_everything_in_zero() {
        let recipe = Recipe::new();
        assert_eq!("", recipe.name());
        assert_eq!(0, recipe.amt_coffee());
        assert_eq!(0, recipe.amt_milk());
        assert_eq!(0, recipe.amt_sugar());
        assert_eq!(0, recipe.amt_chocolate());
        assert_eq!(0, recipe.price());
    }

    #[test]
    fn should_set_the_amounts_from_valid_text() {
        let mut recipe = Recipe::new();
        recipe.set_name("Coffee");
        assert_eq!(Ok(()), recipe.set_amt_coffee("3"));
        assert_eq!(Ok(()), recipe.set_amt_milk("1"));
        assert_eq!(Ok(()), recipe.set_amt_sugar("1"));
        assert_eq!(Ok(()), recipe.set_amt_chocolate("0"));
        assert_eq!(Ok(()), recipe.set_price("50"));
        assert_eq!("Coffee", recipe.name());
        assert_eq!(3, recipe.amt_coffee());
        assert_eq!(1, recipe.amt_milk());
        assert_eq!(1, recipe.amt_sugar());
        assert_eq!(0, recipe.amt_chocolate());
        assert_eq!(50, recipe.price());
    }

    #[test]
    fn should_reject_a_negative_amount_and_keep_the_previous_value() {
        let mut recipe = Recipe::new();
        recipe
            .set_amt_coffee("4")
            .expect("a valid amount should be accepted");
        assert_eq!(Err(RecipeError::InvalidAmount), recipe.set_amt_coffee("-1"));
        assert_eq!(4, recipe.amt_coffee());
    }

    #[test]
    fn should_reject_a_non_numeric_amount_and_keep_the_previous_value() {
        let mut recipe = Recipe::new();
        recipe
            .set_amt_milk("2")
            .expect("a valid amount should be accepted");
        assert_eq!(Err(RecipeError::InvalidAmount), recipe.set_amt_milk("asdf"));
        assert_eq!(Err(RecipeError::InvalidAmount), recipe.set_amt_milk("1.5"));
        assert_eq!(2, recipe.amt_milk());
    }

    #[test]
    fn should_reject_an_invalid_price_and_keep_the_previous_value() {
        let mut recipe = Recipe::new();
        recipe
            .set_price("50")
            .expect("a valid price should be accepted");
        assert_eq!(Err(RecipeError::InvalidPrice), recipe.set_price("-50"));
        assert_eq!(Err(RecipeError::InvalidPrice), recipe.set_price("4.2"));
        assert_eq!(50, recipe.price());
    }

    #[test]
    fn should_keep_the_previous_name_when_setting_an_empty_one() {
        let mut recipe = Recipe::new();
        recipe.set_name("Latte");
        recipe.set_name("");
        assert_eq!("Latte", recipe.name());
    }
}
