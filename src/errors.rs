//! Errores de la cafetera

/// Error al setear un campo de una receta. El campo conserva su valor anterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeError {
    /// La cantidad de un ingrediente no es un entero no negativo
    InvalidAmount,
    /// El precio no es un entero no negativo
    InvalidPrice,
}

/// Error al reponer el inventario. No se modifica ningun stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// Alguna de las cantidades no es un entero no negativo
    InvalidAmount,
}

/// Error al ingresar el pago de un pedido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// El pago no es un entero no negativo
    InvalidPayment,
}

/// Errores de la infraestructura que atiende los pedidos
#[derive(Debug)]
pub enum CoffeeMakerError {
    LockError,
    EmptyQueueWhenNotExpected,
    FileReaderError,
}

impl<T> From<std::sync::PoisonError<T>> for CoffeeMakerError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeMakerError::LockError
    }
}
