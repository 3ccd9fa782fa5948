pub mod errors;
pub mod routes;
pub mod startup;
pub mod transport;

pub use startup::run;
