//! Orquestacion de la cafeteria: el lector de pedidos, los dispensers y las estadisticas
use std::{
    sync::{Arc, Condvar, Mutex, RwLock},
    thread::{self, JoinHandle},
};

use log::error;

use crate::{
    coffee_maker::CoffeeMaker, constants::N_DISPENSERS, dispenser::Dispenser,
    errors::CoffeeMakerError, orders_queue::OrdersQueue, orders_reader::read_and_add_orders,
    statistics::StatisticsPrinter,
};

/// Cafeteria completa: la cafetera compartida, la cola de pedidos
/// y los contadores de ventas.
/// Todos los dispensers atienden contra la misma cafetera, tomandola
/// para cada venta completa.
pub struct Cafe {
    coffee_maker: Arc<Mutex<CoffeeMaker>>,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    drinks_served: Arc<RwLock<u64>>,
    money_earned: Arc<RwLock<u64>>,
}

impl Cafe {
    pub fn new() -> Cafe {
        Cafe {
            coffee_maker: Arc::new(Mutex::new(CoffeeMaker::new())),
            orders_queue: Arc::new(Mutex::new(OrdersQueue::new())),
            orders_cond: Arc::new(Condvar::new()),
            drinks_served: Arc::new(RwLock::new(0)),
            money_earned: Arc::new(RwLock::new(0)),
        }
    }

    /// Atiende todos los pedidos del archivo de configuracion.
    /// Levanta el hilo lector, los dispensers y las estadisticas, y espera a que terminen.
    pub fn serve_orders(&self, path: &str) {
        let reader_handle = self.spawn_reader(path.to_string());
        let dispenser_handles = self.spawn_dispensers();
        let statistics_printer = Arc::new(StatisticsPrinter::new(
            self.coffee_maker.clone(),
            self.orders_queue.clone(),
            self.drinks_served.clone(),
            self.money_earned.clone(),
        ));
        let statistics_handle = self.spawn_statistics_printer(statistics_printer.clone());

        if reader_handle.join().is_err() {
            error!("[CAFE] Could not join the orders reader");
        }
        for (id, dispenser_handle) in dispenser_handles.into_iter().enumerate() {
            if dispenser_handle.join().is_err() {
                error!("[CAFE] Could not join dispenser {}", id);
            }
        }
        statistics_printer.finish();
        if statistics_handle.join().is_err() {
            error!("[CAFE] Could not join the statistics printer");
        }
    }

    /// Cantidad de bebidas servidas hasta el momento
    pub fn drinks_served(&self) -> Result<u64, CoffeeMakerError> {
        Ok(*self.drinks_served.read()?)
    }

    /// Dinero recaudado hasta el momento
    pub fn money_earned(&self) -> Result<u64, CoffeeMakerError> {
        Ok(*self.money_earned.read()?)
    }

    fn spawn_reader(&self, path: String) -> JoinHandle<()> {
        let coffee_maker = self.coffee_maker.clone();
        let orders_queue = self.orders_queue.clone();
        let orders_cond = self.orders_cond.clone();
        thread::spawn(move || {
            if let Err(e) = read_and_add_orders(coffee_maker, orders_queue, orders_cond, path) {
                error!("[CAFE] Error reading the cafe configuration, {:?}", e);
            }
        })
    }

    fn spawn_dispensers(&self) -> Vec<JoinHandle<()>> {
        (0..N_DISPENSERS)
            .map(|id| {
                let dispenser = Dispenser::new(
                    id,
                    self.orders_queue.clone(),
                    self.orders_cond.clone(),
                    self.coffee_maker.clone(),
                    self.drinks_served.clone(),
                    self.money_earned.clone(),
                );
                thread::spawn(move || {
                    if let Err(e) = dispenser.handle_orders() {
                        error!("[CAFE] Error in dispenser {}, {:?}", id, e);
                    }
                })
            })
            .collect()
    }

    fn spawn_statistics_printer(
        &self,
        statistics_printer: Arc<StatisticsPrinter>,
    ) -> JoinHandle<()> {
        thread::spawn(move || {
            if let Err(e) = statistics_printer.process_statistics() {
                error!("[CAFE] Error printing the statistics, {:?}", e);
            }
        })
    }
}
