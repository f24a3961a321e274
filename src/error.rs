use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid of {width}x{height} is invalid, both sides must be between {min} and {max}")]
    InvalidGrid { width: u16, height: u16, min: u16, max: u16 },

    #[error("terminal is {have_width}x{have_height} but the game needs at least {need_width}x{need_height}")]
    TerminalTooSmall { have_width: u16, have_height: u16, need_width: u16, need_height: u16 },

    #[error("I/O failed")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
