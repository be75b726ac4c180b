mod tests;
mod testutils;
