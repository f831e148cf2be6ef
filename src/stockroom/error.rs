use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("El SKU '{0}' ya existe en el inventario")]
    DuplicateCode(String),

    #[error("Campo inválido ({field}): {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Producto no encontrado: {0}")]
    NotFound(String),

    #[error("Almacenamiento no disponible: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Contenido del inventario corrupto: {0}")]
    StorageCorrupt(#[from] serde_json::Error),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Error de terminal: {0}")]
    Terminal(std::io::Error),

    #[error("Entrada interrumpida por el usuario")]
    Interrupted,
}

impl InventoryError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        InventoryError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
