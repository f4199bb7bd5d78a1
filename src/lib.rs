pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod util;

#[cfg(test)]
pub mod test_utils;
