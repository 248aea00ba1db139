use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown size '{size}', expected one of: L, XL")]
    InvalidSize { size: String },

    #[error("unknown pizza '{name}', run 'pizzeria menu' to see what's on offer")]
    UnknownVariant { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
