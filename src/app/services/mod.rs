pub mod commentary_generator;
