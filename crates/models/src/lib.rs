pub mod errors;
pub mod db;
pub mod restaurant;

#[cfg(test)]
mod tests;
