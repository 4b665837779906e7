use std::error::Error;

pub mod symbol;

#[cfg(test)]
mod tests;

pub use symbol::DebugSymbol;


/// trait for errors that are directly related to a piece of source code
pub trait SourceError: Error {
    fn debug_symbol(&self) -> Option<&DebugSymbol>;
}
