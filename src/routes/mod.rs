//! Route modules for the PDF Process Server

pub mod health;
pub mod process;
