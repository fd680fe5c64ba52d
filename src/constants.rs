//! Parametros de configuracion de la cafetera

/// Cantidad de dispensadores que atienden pedidos
pub const N_DISPENSERS: usize = 3;

/// Cantidad inicial de cada ingrediente en el inventario
pub const INITIAL_STOCK: u32 = 15;

/// Cantidad de lugares para recetas que tiene el recetario
pub const NUMBER_OF_RECIPE_SLOTS: usize = 3;

/// Indica cuanto tiempo se debe de esperar (por lo menos) para imprimir por pantalla las estadisticas de la cafetera
pub const STATISTICS_WAIT_IN_MS: u64 = 50;
