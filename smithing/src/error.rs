use log::log;
use smithing_config::ConfigError;
use smithing_inventory::InventoryError;
use smithing_world::item::CatalogError;
use std::fmt::Display;

pub trait SmithingError: Send + std::error::Error + Display {
    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }

    fn severity(&self) -> log::Level;
}

impl<ErrorType: SmithingError + 'static> From<ErrorType> for Box<dyn SmithingError> {
    fn from(error: ErrorType) -> Self {
        Box::new(error)
    }
}

impl SmithingError for ConfigError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

impl SmithingError for CatalogError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

impl SmithingError for InventoryError {
    fn severity(&self) -> log::Level {
        match self {
            Self::InvalidSlot(_) => log::Level::Error,
        }
    }
}
