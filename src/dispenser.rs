//! Dispenser de la cafetera. Atiende los pedidos de los clientes.
use std::sync::{Arc, Condvar, Mutex, RwLock};

use log::{debug, info};

use crate::coffee_maker::CoffeeMaker;
use crate::errors::CoffeeMakerError;
use crate::order::Order;
use crate::orders_queue::OrdersQueue;

/// Representa a un dispenser de la cafeteria.
/// Tiene referencias a la cola de pedidos (junto con su variable condicional),
/// a la cafetera compartida, y a los contadores de bebidas servidas y dinero recaudado
pub struct Dispenser {
    id: usize,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    coffee_maker: Arc<Mutex<CoffeeMaker>>,
    drinks_served: Arc<RwLock<u64>>,
    money_earned: Arc<RwLock<u64>>,
}

impl Dispenser {
    pub fn new(
        id: usize,
        orders_queue: Arc<Mutex<OrdersQueue>>,
        orders_cond: Arc<Condvar>,
        coffee_maker: Arc<Mutex<CoffeeMaker>>,
        drinks_served: Arc<RwLock<u64>>,
        money_earned: Arc<RwLock<u64>>,
    ) -> Dispenser {
        Dispenser {
            id,
            orders_queue,
            orders_cond,
            coffee_maker,
            drinks_served,
            money_earned,
        }
    }

    /// Atiende pedidos de la cola hasta que este vacia y no vayan a llegar mas
    pub fn handle_orders(&self) -> Result<(), CoffeeMakerError> {
        loop {
            let order = {
                let mut orders = self
                    .orders_cond
                    .wait_while(self.orders_queue.lock()?, |queue| {
                        queue.is_empty() && !queue.finished
                    })?;

                if orders.is_empty() && orders.finished {
                    return Ok(());
                }

                orders
                    .pop()
                    .ok_or(CoffeeMakerError::EmptyQueueWhenNotExpected)?
            };

            debug!("[DISPENSER {}] Takes order {}", self.id, order.id);
            self.process_order(order)?;
        }
    }

    fn process_order(&self, order: Order) -> Result<(), CoffeeMakerError> {
        let change = {
            // Seccion critica de la venta: los chequeos y el descuento de stock
            // se hacen con la cafetera tomada para este pedido
            let mut coffee_maker = self.coffee_maker.lock()?;
            coffee_maker.make_coffee(order.recipe_index, order.payment)
        };

        if change == order.payment {
            info!(
                "[DISPENSER {}] Refused order {}, returned the {} of payment",
                self.id, order.id, order.payment
            );
            return Ok(());
        }
        info!(
            "[DISPENSER {}] Served order {}, returned {} of change",
            self.id, order.id, change
        );
        self.register_sale(order.payment - change)
    }

    fn register_sale(&self, earned: u32) -> Result<(), CoffeeMakerError> {
        let mut drinks_served = self.drinks_served.write()?;
        *drinks_served += 1;
        let mut money_earned = self.money_earned.write()?;
        *money_earned += u64::from(earned);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn coffee_recipe() -> Recipe {
        let mut recipe = Recipe::new();
        recipe.set_name("Coffee");
        recipe
            .set_amt_coffee("3")
            .expect("a valid amount should be accepted");
        recipe
            .set_amt_milk("1")
            .expect("a valid amount should be accepted");
        recipe
            .set_amt_sugar("1")
            .expect("a valid amount should be accepted");
        recipe
            .set_price("50")
            .expect("a valid price should be accepted");
        recipe
    }

    #[test]
    fn should_serve_the_orders_left_in_a_finished_queue() {
        let mut machine = CoffeeMaker::new();
        machine.add_recipe(coffee_recipe());
        let coffee_maker = Arc::new(Mutex::new(machine));
        let orders_queue = Arc::new(Mutex::new(OrdersQueue::new()));
        let drinks_served = Arc::new(RwLock::new(0));
        let money_earned = Arc::new(RwLock::new(0));
        {
            let mut queue = orders_queue
                .lock()
                .expect("the queue lock should not be poisoned");
            queue.push(Order::new(0, 0, 75));
            queue.push(Order::new(1, 0, 20));
            queue.push(Order::new(2, 5, 100));
            queue.finished = true;
        }

        let dispenser = Dispenser::new(
            0,
            orders_queue,
            Arc::new(Condvar::new()),
            coffee_maker.clone(),
            drinks_served.clone(),
            money_earned.clone(),
        );
        dispenser
            .handle_orders()
            .expect("the dispenser should drain the queue");

        assert_eq!(
            1,
            *drinks_served
                .read()
                .expect("the counter lock should not be poisoned")
        );
        assert_eq!(
            50,
            *money_earned
                .read()
                .expect("the counter lock should not be poisoned")
        );
        assert_eq!(
            "Coffee: 12\nMilk: 14\nSugar: 14\nChocolate: 15\n",
            coffee_maker
                .lock()
                .expect("the coffee maker lock should not be poisoned")
                .check_inventory()
        );
    }

    #[test]
    fn should_finish_right_away_with_an_empty_finished_queue() {
        let orders_queue = Arc::new(Mutex::new(OrdersQueue::new()));
        orders_queue
            .lock()
            .expect("the queue lock should not be poisoned")
            .finished = true;

        let dispenser = Dispenser::new(
            0,
            orders_queue,
            Arc::new(Condvar::new()),
            Arc::new(Mutex::new(CoffeeMaker::new())),
            Arc::new(RwLock::new(0)),
            Arc::new(RwLock::new(0)),
        );
        assert_eq!(true, dispenser.handle_orders().is_ok());
    }
}
