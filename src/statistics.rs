//! Estadisticas de la cafeteria
use std::{
    sync::{Arc, Mutex, RwLock},
    thread,
    time::Duration,
};

use log::error;

use crate::{
    coffee_maker::CoffeeMaker, constants::STATISTICS_WAIT_IN_MS, errors::CoffeeMakerError,
    orders_queue::OrdersQueue,
};

/// Imprime periodicamente las bebidas servidas, el dinero recaudado,
/// los pedidos pendientes y el stock actual de la cafetera
pub struct StatisticsPrinter {
    coffee_maker: Arc<Mutex<CoffeeMaker>>,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    drinks_served: Arc<RwLock<u64>>,
    money_earned: Arc<RwLock<u64>>,
    finish: Arc<Mutex<bool>>,
}

impl StatisticsPrinter {
    pub fn new(
        coffee_maker: Arc<Mutex<CoffeeMaker>>,
        orders_queue: Arc<Mutex<OrdersQueue>>,
        drinks_served: Arc<RwLock<u64>>,
        money_earned: Arc<RwLock<u64>>,
    ) -> StatisticsPrinter {
        StatisticsPrinter {
            coffee_maker,
            orders_queue,
            drinks_served,
            money_earned,
            finish: Arc::new(Mutex::new(false)),
        }
    }

    /// Indica que se deje de imprimir. Se imprime una ultima vez antes de cortar.
    pub fn finish(&self) {
        if let Ok(mut finish) = self.finish.lock() {
            *finish = true;
            return;
        }
        error!("Error setting statistics thread to finish");
    }

    pub fn process_statistics(&self) -> Result<(), CoffeeMakerError> {
        loop {
            if *self.finish.lock()? {
                self.print_statistics()?;
                return Ok(());
            }

            self.print_statistics()?;

            thread::sleep(Duration::from_millis(STATISTICS_WAIT_IN_MS));
        }
    }

    fn print_statistics(&self) -> Result<(), CoffeeMakerError> {
        let drinks_served = *self.drinks_served.read()?;
        let money_earned = *self.money_earned.read()?;
        let pending_orders = self.orders_queue.lock()?.len();
        let inventory_report = self.coffee_maker.lock()?.check_inventory();
        let mut statistics = format!(
            "[STATISTICS] Drinks served={} | Money earned={} | Pending orders={} |",
            drinks_served, money_earned, pending_orders
        );
        for line in inventory_report.lines() {
            statistics.push_str(&format!(" {} ", line));
        }
        println!("{}", statistics);
        Ok(())
    }
}
