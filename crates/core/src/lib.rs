pub mod config;
pub mod error;
pub mod oracle;

pub use config::load_dotenv;
pub use error::*;
pub use oracle::{is_prime, is_prime_natural, sequential_primes};
