//! Lectura del archivo de configuracion de la cafeteria
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Condvar, Mutex};

use crate::coffee_maker::{parse_payment, CoffeeMaker};
use crate::errors::{CoffeeMakerError, RecipeError};
use crate::order::Order;
use crate::orders_queue::OrdersQueue;
use crate::recipe::Recipe;

/// Receta del archivo de configuracion. Las cantidades vienen como texto
/// y pasan por los setters validados de la receta.
#[derive(Deserialize, Debug)]
struct JsonRecipe {
    name: String,
    coffee: String,
    milk: String,
    sugar: String,
    chocolate: String,
    price: String,
}

#[derive(Deserialize, Debug)]
struct JsonInventory {
    coffee: String,
    milk: String,
    sugar: String,
    chocolate: String,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    recipe: usize,
    payment: String,
}

#[derive(Deserialize)]
struct CafeConfiguration {
    recipes: Vec<JsonRecipe>,
    #[serde(default)]
    inventory: Option<JsonInventory>,
    orders: Vec<JsonOrder>,
}

fn read_cafe_configuration<P: AsRef<Path>>(path: P) -> Result<CafeConfiguration, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let cafe_config: CafeConfiguration = serde_json::from_reader(reader)?;
    Ok(cafe_config)
}

fn build_recipe(json_recipe: &JsonRecipe) -> Result<Recipe, RecipeError> {
    let mut recipe = Recipe::new();
    recipe.set_name(&json_recipe.name);
    recipe.set_amt_coffee(&json_recipe.coffee)?;
    recipe.set_amt_milk(&json_recipe.milk)?;
    recipe.set_amt_sugar(&json_recipe.sugar)?;
    recipe.set_amt_chocolate(&json_recipe.chocolate)?;
    recipe.set_price(&json_recipe.price)?;
    Ok(recipe)
}

fn setup_coffee_maker(
    cafe_config: &CafeConfiguration,
    coffee_maker_lock: &Arc<Mutex<CoffeeMaker>>,
) -> Result<(), CoffeeMakerError> {
    let mut coffee_maker = coffee_maker_lock.lock()?;
    for json_recipe in &cafe_config.recipes {
        match build_recipe(json_recipe) {
            Ok(recipe) => {
                let name = recipe.name().to_string();
                if coffee_maker.add_recipe(recipe) {
                    info!("[READER] Added recipe {}", name);
                } else {
                    warn!(
                        "[READER] Could not add recipe {}, duplicated name or no free slot",
                        name
                    );
                }
            }
            Err(e) => warn!("[READER] Discarding recipe {}, {:?}", json_recipe.name, e),
        }
    }
    if let Some(replenishment) = &cafe_config.inventory {
        if let Err(e) = coffee_maker.add_inventory(
            &replenishment.coffee,
            &replenishment.milk,
            &replenishment.sugar,
            &replenishment.chocolate,
        ) {
            warn!("[READER] Discarding the inventory replenishment, {:?}", e);
        }
    }
    Ok(())
}

fn add_orders_to_queue(
    json_orders: Vec<JsonOrder>,
    orders_queue_lock: &Arc<Mutex<OrdersQueue>>,
    orders_cond: &Arc<Condvar>,
) -> Result<(), CoffeeMakerError> {
    let mut id = 0;
    for json_order in json_orders {
        let payment = match parse_payment(&json_order.payment) {
            Ok(payment) => payment,
            Err(e) => {
                error!(
                    "[READER] Discarding an order with payment {:?}, {:?}",
                    json_order.payment, e
                );
                continue;
            }
        };
        if let Ok(mut orders_queue) = orders_queue_lock.lock() {
            orders_queue.push(Order::new(id, json_order.recipe, payment));
            debug!("[READER] Added order {}", id);
            id += 1;
            orders_cond.notify_one();
        } else {
            error!("[READER] Error while taking the queue lock");
            return Err(CoffeeMakerError::LockError);
        }
    }
    info!("[READER] No more orders left");
    Ok(())
}

fn mark_queue_as_finished(
    orders_queue_lock: &Arc<Mutex<OrdersQueue>>,
    orders_cond: &Arc<Condvar>,
) -> Result<(), CoffeeMakerError> {
    let mut orders_queue = orders_queue_lock.lock()?;
    orders_queue.finished = true;
    orders_cond.notify_all();
    Ok(())
}

fn load_cafe<P: AsRef<Path>>(
    coffee_maker: &Arc<Mutex<CoffeeMaker>>,
    orders_queue: &Arc<Mutex<OrdersQueue>>,
    orders_cond: &Arc<Condvar>,
    path: P,
) -> Result<(), CoffeeMakerError> {
    let cafe_config =
        read_cafe_configuration(path).map_err(|_| CoffeeMakerError::FileReaderError)?;
    setup_coffee_maker(&cafe_config, coffee_maker)?;
    add_orders_to_queue(cafe_config.orders, orders_queue, orders_cond)
}

/// Lee el archivo de la cafeteria, carga las recetas y la reposicion en la cafetera
/// y agrega los pedidos a la cola. Pase lo que pase marca la cola como terminada
/// para que los dispensers no queden esperando.
pub fn read_and_add_orders<P: AsRef<Path>>(
    coffee_maker: Arc<Mutex<CoffeeMaker>>,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    path: P,
) -> Result<(), CoffeeMakerError> {
    let result = load_cafe(&coffee_maker, &orders_queue, &orders_cond, path);
    mark_queue_as_finished(&orders_queue, &orders_cond)?;
    result
}
