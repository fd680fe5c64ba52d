pub mod cafe;
pub mod coffee_maker;
pub mod constants;
pub mod dispenser;
pub mod errors;
pub mod inventory;
pub mod order;
pub mod orders_queue;
pub mod orders_reader;
pub mod recipe;
pub mod recipe_book;
pub mod statistics;

use cafe::Cafe;
use simple_logger::SimpleLogger;

fn main() {
    if SimpleLogger::new().env().init().is_err() {
        eprintln!("Could not initialize the logger");
    }
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("cafe.json"));
    let cafe = Cafe::new();
    cafe.serve_orders(&path);
}
