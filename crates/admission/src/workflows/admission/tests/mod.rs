mod common;
mod office;
