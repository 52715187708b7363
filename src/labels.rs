//! UI Labels
//!
//! Fixed Spanish strings used by the menu components.

pub const PRICE_ON_REQUEST: &str = "Precio a consultar";
pub const DETAILS: &str = "Detalles";
pub const LESS: &str = "Menos";
pub const EXPLORE: &str = "Explorar";
pub const BACK_TO_MENU: &str = "Volver al menú";
pub const NOT_FOUND_TITLE: &str = "Página no encontrada";
pub const NOT_FOUND_BODY: &str = "Esta carta aún no está disponible.";
pub const LOAD_ERROR_TITLE: &str = "No se pudo cargar el menú";
